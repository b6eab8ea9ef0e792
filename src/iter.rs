use std::iter::FusedIterator;

use crate::index::{IndexType, NodeIndex};
use crate::node::Node;
use crate::orderedtree::OrderedTree;

/// An iterator over the keys of an `OrderedTree`, in ascending order.
///
/// Steps between nodes by following parent links, so it keeps no stack.
#[derive(Debug)]
pub struct Iter<'a, K, Ix> {
    /// Reference to the tree
    pub(crate) tree_ref: &'a OrderedTree<K, Ix>,
    /// Next node from the front
    pub(crate) front: Option<NodeIndex<Ix>>,
    /// Next node from the back
    pub(crate) back: Option<NodeIndex<Ix>>,
    /// Keys not yet yielded from either end
    pub(crate) remaining: usize,
}

impl<'a, K, Ix> Iter<'a, K, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(tree_ref: &'a OrderedTree<K, Ix>) -> Self {
        Iter {
            tree_ref,
            front: tree_ref.root.map(|root| tree_ref.tree_minimum(root)),
            back: tree_ref.root.map(|root| tree_ref.tree_maximum(root)),
            remaining: tree_ref.len(),
        }
    }
}

impl<K, Ix: Copy> Clone for Iter<'_, K, Ix> {
    fn clone(&self) -> Self {
        Iter {
            tree_ref: self.tree_ref,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, Ix> Iterator for Iter<'a, K, Ix>
where
    Ix: IndexType,
{
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.front?;
        self.front = self.tree_ref.successor(x);
        self.remaining -= 1;
        Some(self.tree_ref.node_ref(x, Node::key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, Ix> DoubleEndedIterator for Iter<'_, K, Ix>
where
    Ix: IndexType,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.back?;
        self.back = self.tree_ref.predecessor(x);
        self.remaining -= 1;
        Some(self.tree_ref.node_ref(x, Node::key))
    }
}

impl<K, Ix: IndexType> ExactSizeIterator for Iter<'_, K, Ix> {}

impl<K, Ix: IndexType> FusedIterator for Iter<'_, K, Ix> {}

/// An owning iterator over the keys of an `OrderedTree`, in ascending order.
#[derive(Debug)]
pub struct IntoIter<K, Ix> {
    tree: OrderedTree<K, Ix>,
    front: Option<NodeIndex<Ix>>,
    back: Option<NodeIndex<Ix>>,
    remaining: usize,
}

impl<K, Ix> IntoIter<K, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(tree: OrderedTree<K, Ix>) -> Self {
        let front = tree.root.map(|root| tree.tree_minimum(root));
        let back = tree.root.map(|root| tree.tree_maximum(root));
        let remaining = tree.len();
        IntoIter {
            tree,
            front,
            back,
            remaining,
        }
    }
}

impl<K, Ix> Iterator for IntoIter<K, Ix>
where
    Ix: IndexType,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.front?;
        // links stay intact, only the key leaves the slot
        self.front = self.tree.successor(x);
        self.remaining -= 1;
        self.tree.nodes[x.index()].key.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, Ix> DoubleEndedIterator for IntoIter<K, Ix>
where
    Ix: IndexType,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let x = self.back?;
        self.back = self.tree.predecessor(x);
        self.remaining -= 1;
        self.tree.nodes[x.index()].key.take()
    }
}

impl<K, Ix: IndexType> ExactSizeIterator for IntoIter<K, Ix> {}

impl<K, Ix: IndexType> FusedIterator for IntoIter<K, Ix> {}
