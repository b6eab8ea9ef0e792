use crate::index::{DefaultIx, IndexType, NodeIndex};

/// A handle to an element of an [`OrderedTree`](crate::OrderedTree), or to the
/// end of the sequence.
///
/// A position does not borrow the tree. Dereferencing and moving it go through
/// the tree: [`get`](crate::OrderedTree::get), [`next`](crate::OrderedTree::next)
/// and [`prev`](crate::OrderedTree::prev). Two positions are equal when they
/// refer to the same element.
///
/// Removing an element invalidates only the positions that refer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position<Ix = DefaultIx> {
    pub(crate) node: Option<NodeIndex<Ix>>,
}

impl<Ix: IndexType> Position<Ix> {
    /// The end sentinel.
    #[inline]
    #[must_use]
    pub fn end() -> Self {
        Position { node: None }
    }

    /// Returns `true` if this is the end sentinel.
    #[inline]
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    pub(crate) fn at(node: NodeIndex<Ix>) -> Self {
        Position { node: Some(node) }
    }
}

impl<Ix: IndexType> From<Option<NodeIndex<Ix>>> for Position<Ix> {
    fn from(node: Option<NodeIndex<Ix>>) -> Self {
        Position { node }
    }
}

impl<Ix: IndexType> Default for Position<Ix> {
    fn default() -> Self {
        Self::end()
    }
}
