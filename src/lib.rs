//! `rb_ordered_tree` is an ordered set of unique keys based on red-black tree.
//!
//! It fully implements the insertion and deletion functionality of a red-black tree,
//! ensuring that each modification operation requires at most O(logN) time complexity.
//!
//! `rb_ordered_tree` uses an array of nodes linked by indices instead of pointers to
//! manage the parent-child references of the tree, so the tree is `Send` whenever its
//! keys are and needs no `unsafe` code.
//!
//! Elements are addressed by [`Position`]s, handles that stay valid until the element
//! they refer to is removed. A position is moved and dereferenced through the tree.
//!
//! # Example
//!
//! ```rust
//! use rb_ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for k in [5, 1, 3] {
//!     tree.insert(k);
//! }
//! let pos = tree.lower_bound(&2);
//! assert_eq!(tree.get(pos), Ok(&3));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
//! ```
//!

mod entry;
mod error;
#[cfg(feature = "graphviz")]
mod graphviz;
mod index;
mod iter;
mod node;
mod orderedtree;
mod position;


pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use error::PositionError;
pub use index::{DefaultIx, IndexType, NodeIndex};
pub use iter::{IntoIter, Iter};
pub use orderedtree::OrderedTree;
pub use position::Position;
