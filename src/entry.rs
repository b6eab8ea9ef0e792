use crate::index::{IndexType, NodeIndex};
use crate::node::Node;
use crate::orderedtree::{OrderedTree, Side};
use crate::position::Position;

/// A view into a single key of a tree, which may either be vacant or occupied.
#[derive(Debug)]
pub enum Entry<'a, K, Ix> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, Ix>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, Ix>),
}

/// A view into an occupied entry in an `OrderedTree`.
/// It is part of the [`Entry`] enum.
#[derive(Debug)]
pub struct OccupiedEntry<'a, K, Ix> {
    /// Reference to the tree
    pub(crate) tree_ref: &'a mut OrderedTree<K, Ix>,
    /// The entry node
    pub(crate) node: NodeIndex<Ix>,
}

/// A view into a vacant entry in an `OrderedTree`.
/// It is part of the [`Entry`] enum.
///
/// It remembers where the search for its key ended, so inserting does not
/// search again.
#[derive(Debug)]
pub struct VacantEntry<'a, K, Ix> {
    /// Mutable reference to the tree
    pub(crate) tree_ref: &'a mut OrderedTree<K, Ix>,
    /// The key of this entry
    pub(crate) key: K,
    /// The node the key would be attached under, `None` for an empty tree
    pub(crate) parent: Option<NodeIndex<Ix>>,
    /// The child slot of `parent` the key would occupy
    pub(crate) side: Side,
}

impl<'a, K, Ix> Entry<'a, K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Ensures the key is in the tree by inserting it if the entry is vacant, and
    /// returns its position.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// let pos = tree.entry(7).or_insert();
    /// assert_eq!(tree.entry(7).or_insert(), pos);
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[inline]
    pub fn or_insert(self) -> Position<Ix> {
        match self {
            Entry::Occupied(entry) => entry.position(),
            Entry::Vacant(entry) => entry.insert(),
        }
    }

    /// Returns a reference to this entry's key.
    #[inline]
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }

    /// Returns the position of the key, or the end position for a vacant entry.
    #[inline]
    pub fn position(&self) -> Position<Ix> {
        match self {
            Entry::Occupied(entry) => entry.position(),
            Entry::Vacant(_) => Position::end(),
        }
    }
}

impl<'a, K, Ix> OccupiedEntry<'a, K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Returns a reference to the key stored in the tree.
    #[inline]
    pub fn key(&self) -> &K {
        self.tree_ref.node_ref(self.node, Node::key)
    }

    /// Returns the position of the key.
    #[inline]
    pub fn position(&self) -> Position<Ix> {
        Position::at(self.node)
    }

    /// Removes the key from the tree and returns it.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_tree::{Entry, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(4);
    /// if let Entry::Occupied(entry) = tree.entry(4) {
    ///     assert_eq!(entry.remove(), 4);
    /// }
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    pub fn remove(self) -> K {
        self.tree_ref.remove_node(self.node)
    }
}

impl<'a, K, Ix> VacantEntry<'a, K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Returns a reference to the key that would be inserted.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key without inserting it.
    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the key at the place the search ended and returns its position.
    ///
    /// # Panics
    ///
    /// This method panics when the tree is at the maximum number of nodes for its index
    #[inline]
    pub fn insert(self) -> Position<Ix> {
        Position::at(self.tree_ref.attach(self.key, self.parent, self.side))
    }
}
