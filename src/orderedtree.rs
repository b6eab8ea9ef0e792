use crate::entry::{Entry, OccupiedEntry, VacantEntry};
use crate::error::PositionError;
use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::iter::{IntoIter, Iter};
use crate::node::{Color, Node};
use crate::position::Position;
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// An ordered set of unique keys, stored in a red-black tree.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderedTree<K, Ix = DefaultIx> {
    /// Vector that stores nodes
    pub(crate) nodes: Vec<Node<K, Ix>>,
    /// Vacant slots of `nodes`, reused by later insertions
    pub(crate) free: Vec<NodeIndex<Ix>>,
    /// Root of the tree
    pub(crate) root: Option<NodeIndex<Ix>>,
    /// Number of elements in the tree
    pub(crate) len: usize,
}

/// The child slot of a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Outcome of descending the tree for a key.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Search<Ix> {
    /// The key is stored at this node
    Found(NodeIndex<Ix>),
    /// The key is absent; it belongs under `parent` on `side`
    Vacant {
        parent: Option<NodeIndex<Ix>>,
        side: Side,
    },
}

impl<K, Ix> OrderedTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Creates a new `OrderedTree` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedTree {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Insert a key into the tree and return its position.
    /// If the key exists, the tree is left unchanged and the existing position is returned.
    ///
    /// # Panics
    ///
    /// This method panics when the tree is at the maximum number of nodes for its index
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// let pos = tree.insert(3);
    /// assert_eq!(tree.get(pos), Ok(&3));
    /// assert_eq!(tree.insert(3), pos);
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K) -> Position<Ix> {
        self.entry(key).or_insert()
    }

    /// Get the given key's corresponding entry in the tree for in-place manipulation.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_tree::{Entry, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(matches!(tree.entry(1), Entry::Vacant(_)));
    /// tree.entry(1).or_insert();
    /// assert!(matches!(tree.entry(1), Entry::Occupied(_)));
    /// ```
    #[inline]
    pub fn entry(&mut self, key: K) -> Entry<'_, K, Ix> {
        match self.search(&key) {
            Search::Found(node) => Entry::Occupied(OccupiedEntry {
                tree_ref: self,
                node,
            }),
            Search::Vacant { parent, side } => Entry::Vacant(VacantEntry {
                tree_ref: self,
                key,
                parent,
                side,
            }),
        }
    }

    /// Remove a key from the tree, returning `true` if the key was present.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert!(!tree.remove(&3));
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.remove(&2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Remove a key from the tree, returning the stored key if it was present.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(String::from("a"));
    /// assert_eq!(tree.take("a"), Some(String::from("a")));
    /// assert_eq!(tree.take("a"), None);
    /// ```
    #[inline]
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            Search::Found(node) => Some(self.remove_node(node)),
            Search::Vacant { .. } => None,
        }
    }

    /// Remove the element at `position`.
    ///
    /// On success the position is moved to the element that followed the removed one,
    /// or to the one that preceded it if it was the last, or to the end once the tree
    /// is empty. Returns `false`, leaving the position untouched, when it refers to no
    /// element.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for k in [1, 2, 3] {
    ///     tree.insert(k);
    /// }
    /// let mut pos = tree.find(&2);
    /// assert!(tree.remove_at(&mut pos));
    /// assert_eq!(tree.get(pos), Ok(&3));
    /// assert!(tree.remove_at(&mut pos));
    /// assert_eq!(tree.get(pos), Ok(&1));
    /// ```
    #[inline]
    pub fn remove_at(&mut self, position: &mut Position<Ix>) -> bool {
        let Ok(node) = self.occupied(*position) else {
            return false;
        };
        let neighbor = self
            .successor(node)
            .or_else(|| self.predecessor(node));
        let _key = self.remove_node(node);
        *position = Position::from(neighbor);
        true
    }

    /// Return the position of `key`, or the end position if it is absent.
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Position<Ix>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search(key) {
            Search::Found(node) => Position::at(node),
            Search::Vacant { .. } => Position::end(),
        }
    }

    /// Return `true` if the tree contains `key`.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        matches!(self.search(key), Search::Found(_))
    }

    /// Return the position of the first key that is not less than `key`.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for k in [1, 3, 5, 7] {
    ///     tree.insert(k);
    /// }
    /// assert_eq!(tree.get(tree.lower_bound(&4)), Ok(&5));
    /// assert_eq!(tree.get(tree.lower_bound(&5)), Ok(&5));
    /// assert!(tree.lower_bound(&8).is_end());
    /// ```
    #[inline]
    pub fn lower_bound<Q>(&self, key: &Q) -> Position<Ix>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.bound(|k| Borrow::<Q>::borrow(k) >= key)
    }

    /// Return the position of the first key that is greater than `key`.
    ///
    /// # Example
    /// ```rust
    /// use rb_ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for k in [1, 3, 5, 7] {
    ///     tree.insert(k);
    /// }
    /// assert_eq!(tree.get(tree.upper_bound(&5)), Ok(&7));
    /// assert_eq!(tree.get(tree.upper_bound(&0)), Ok(&1));
    /// assert!(tree.upper_bound(&7).is_end());
    /// ```
    #[inline]
    pub fn upper_bound<Q>(&self, key: &Q) -> Position<Ix>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.bound(|k| Borrow::<Q>::borrow(k) > key)
    }
}

impl<K, Ix> OrderedTree<K, Ix>
where
    Ix: IndexType,
{
    /// Return the key at `position`.
    #[inline]
    pub fn get(&self, position: Position<Ix>) -> Result<&K, PositionError> {
        self.occupied(position).map(|x| self.node_ref(x, Node::key))
    }

    /// Return the position following `position` in key order.
    ///
    /// # Errors
    ///
    /// Fails when `position` is the end or refers to a removed element.
    #[inline]
    pub fn next(&self, position: Position<Ix>) -> Result<Position<Ix>, PositionError> {
        self.occupied(position)
            .map(|x| Position::from(self.successor(x)))
    }

    /// Return the position preceding `position` in key order.
    ///
    /// The end position steps back to the last element. Stepping back from the
    /// first element yields the end position.
    ///
    /// # Errors
    ///
    /// Fails when `position` refers to a removed element, or is the end of an empty tree.
    #[inline]
    pub fn prev(&self, position: Position<Ix>) -> Result<Position<Ix>, PositionError> {
        if position.is_end() {
            return self
                .root
                .map(|root| Position::at(self.tree_maximum(root)))
                .ok_or(PositionError::End);
        }
        self.occupied(position)
            .map(|x| Position::from(self.predecessor(x)))
    }

    /// Return the position of the smallest key, or the end position for an empty tree.
    #[inline]
    #[must_use]
    pub fn begin(&self) -> Position<Ix> {
        Position::from(self.root.map(|root| self.tree_minimum(root)))
    }

    /// Return the end position.
    #[inline]
    #[must_use]
    pub fn end(&self) -> Position<Ix> {
        Position::end()
    }

    /// Return the smallest key.
    #[inline]
    pub fn first(&self) -> Option<&K> {
        self.root
            .map(|root| self.node_ref(self.tree_minimum(root), Node::key))
    }

    /// Return the largest key.
    #[inline]
    pub fn last(&self) -> Option<&K> {
        self.root
            .map(|root| self.node_ref(self.tree_maximum(root), Node::key))
    }

    /// Get an iterator over the keys of the tree, in ascending order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, Ix> {
        Iter::new(self)
    }

    /// Number of nodes on the longest path from the root down to a leaf.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut queue = VecDeque::new();
        queue.extend(self.root);
        while !queue.is_empty() {
            height += 1;
            for _ in 0..queue.len() {
                if let Some(x) = queue.pop_front() {
                    queue.extend(self.node_ref(x, Node::left));
                    queue.extend(self.node_ref(x, Node::right));
                }
            }
        }
        height
    }

    /// Remove all elements from the tree
    #[inline]
    pub fn clear(&mut self) {
        debug!("clearing tree of {} elements", self.len);
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Return the number of elements in the tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the tree contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K> OrderedTree<K>
where
    K: Ord,
{
    /// Create an empty `OrderedTree`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
}

impl<K> Default for OrderedTree<K>
where
    K: Ord,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, Ix> IntoIterator for &'a OrderedTree<K, Ix>
where
    Ix: IndexType,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, Ix> IntoIterator for OrderedTree<K, Ix>
where
    Ix: IndexType,
{
    type Item = K;
    type IntoIter = IntoIter<K, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<K, Ix> OrderedTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Search for the node holding `key`, or the place it would be attached.
    fn search<Q>(&self, key: &Q) -> Search<Ix>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut x = self.root;
        while let Some(idx) = x {
            match key.cmp(self.node_ref(idx, Node::key).borrow()) {
                Ordering::Equal => return Search::Found(idx),
                Ordering::Less => {
                    side = Side::Left;
                    x = self.node_ref(idx, Node::left);
                }
                Ordering::Greater => {
                    side = Side::Right;
                    x = self.node_ref(idx, Node::right);
                }
            }
            parent = Some(idx);
        }
        Search::Vacant { parent, side }
    }

    /// Find the leftmost node whose key satisfies a monotone predicate.
    fn bound(&self, satisfies: impl Fn(&K) -> bool) -> Position<Ix> {
        let mut hot = None;
        let mut x = self.root;
        while let Some(idx) = x {
            hot = Some(idx);
            x = if satisfies(self.node_ref(idx, Node::key)) {
                self.node_ref(idx, Node::left)
            } else {
                self.node_ref(idx, Node::right)
            };
        }
        match hot {
            None => Position::end(),
            Some(hot) if satisfies(self.node_ref(hot, Node::key)) => Position::at(hot),
            Some(hot) => Position::from(self.successor(hot)),
        }
    }

    /// Attach a new node holding `key` under `parent`.
    pub(crate) fn attach(
        &mut self,
        key: K,
        parent: Option<NodeIndex<Ix>>,
        side: Side,
    ) -> NodeIndex<Ix> {
        self.len = self.len.wrapping_add(1);
        let Some(parent) = parent else {
            let z = self.alloc(key, Color::Black);
            self.root = Some(z);
            return z;
        };
        let z = self.alloc(key, Color::Red);
        self.node_mut(z, Node::set_parent(Some(parent)));
        match side {
            Side::Left => self.node_mut(parent, Node::set_left(Some(z))),
            Side::Right => self.node_mut(parent, Node::set_right(Some(z))),
        }
        self.insert_fixup(z);
        z
    }

    /// Unlink a node from the tree and return its key.
    pub(crate) fn remove_node(&mut self, z: NodeIndex<Ix>) -> K {
        if let (Some(_), Some(right)) = (
            self.node_ref(z, Node::left),
            self.node_ref(z, Node::right),
        ) {
            let successor = self.tree_minimum(right);
            self.swap_places(z, successor);
        }

        // z has at most one child now
        let child = self
            .node_ref(z, Node::left)
            .or(self.node_ref(z, Node::right));
        if self.node_ref(z, Node::is_black) {
            match child {
                // the only child of a black node is a red leaf
                Some(child) => self.node_mut(child, Node::set_color(Color::Black)),
                None => self.remove_fixup(z),
            }
        }

        let parent = self.node_ref(z, Node::parent);
        self.replace_child(parent, z, child);
        if let Some(child) = child {
            self.node_mut(child, Node::set_parent(parent));
        }

        self.len = self.len.wrapping_sub(1);
        self.release(z)
    }

    /// Restore red-black tree properties after an insert.
    fn insert_fixup(&mut self, mut x: NodeIndex<Ix>) {
        while let Some(parent) = self.node_ref(x, Node::parent) {
            if self.node_ref(parent, Node::is_black) {
                break;
            }
            // a red parent is never the root
            let Some(grand_parent) = self.node_ref(parent, Node::parent) else {
                break;
            };
            let uncle = self.sibling(parent);
            if let Some(uncle) = uncle.filter(|&u| self.node_ref(u, Node::is_red)) {
                trace!("insert fixup: red uncle {uncle:?}, recolor {grand_parent:?}");
                self.node_mut(parent, Node::set_color(Color::Black));
                self.node_mut(uncle, Node::set_color(Color::Black));
                self.node_mut(grand_parent, Node::set_color(Color::Red));
                x = grand_parent;
                continue;
            }

            let parent_side = self.side_of(parent);
            if self.side_of(x) != parent_side {
                self.rotate_down(parent, parent_side);
            }
            let top = self.rotate_down(grand_parent, parent_side.opposite());
            trace!("insert fixup: black uncle, {top:?} rotated above {grand_parent:?}");
            self.node_mut(top, Node::set_color(Color::Black));
            self.node_mut(grand_parent, Node::set_color(Color::Red));
            break;
        }
        if let Some(root) = self.root {
            self.node_mut(root, Node::set_color(Color::Black));
        }
    }

    /// Restore red-black tree properties before the black leaf `x` is unlinked.
    fn remove_fixup(&mut self, mut x: NodeIndex<Ix>) {
        while let Some(parent) = self.node_ref(x, Node::parent) {
            let x_side = self.side_of(x);
            let Some(mut sibling) = self.sibling(x) else {
                break;
            };
            if self.node_ref(sibling, Node::is_red) {
                trace!("remove fixup: red sibling {sibling:?}");
                self.node_mut(sibling, Node::set_color(Color::Black));
                self.node_mut(parent, Node::set_color(Color::Red));
                self.rotate_down(parent, x_side);
                let Some(next_sibling) = self.sibling(x) else {
                    break;
                };
                sibling = next_sibling;
            }

            let (near, far) = match x_side {
                Side::Left => (
                    self.node_ref(sibling, Node::left),
                    self.node_ref(sibling, Node::right),
                ),
                Side::Right => (
                    self.node_ref(sibling, Node::right),
                    self.node_ref(sibling, Node::left),
                ),
            };
            let parent_color = self.node_ref(parent, Node::color);

            if let Some(far) = far.filter(|&n| self.node_ref(n, Node::is_red)) {
                trace!("remove fixup: red far nephew {far:?}");
                self.node_mut(sibling, Node::set_color(parent_color));
                self.node_mut(parent, Node::set_color(Color::Black));
                self.node_mut(far, Node::set_color(Color::Black));
                self.rotate_down(parent, x_side);
                break;
            }
            if let Some(near) = near.filter(|&n| self.node_ref(n, Node::is_red)) {
                trace!("remove fixup: red near nephew {near:?}");
                self.rotate_down(sibling, x_side.opposite());
                self.node_mut(near, Node::set_color(parent_color));
                self.node_mut(parent, Node::set_color(Color::Black));
                self.rotate_down(parent, x_side);
                break;
            }

            self.node_mut(sibling, Node::set_color(Color::Red));
            if matches!(parent_color, Color::Red) {
                trace!("remove fixup: red parent {parent:?} absorbs the lost black");
                self.node_mut(parent, Node::set_color(Color::Black));
                break;
            }
            trace!("remove fixup: lost black moves up to {parent:?}");
            x = parent;
        }
    }

    /// Rotate `x` down to its `side`, returning the node that took its place.
    fn rotate_down(&mut self, x: NodeIndex<Ix>, side: Side) -> NodeIndex<Ix> {
        match side {
            Side::Left => self.left_rotate(x),
            Side::Right => self.right_rotate(x),
        }
    }

    /// Binary tree left rotate.
    fn left_rotate(&mut self, x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        let Some(y) = self.node_ref(x, Node::right) else {
            return x;
        };
        let y_left = self.node_ref(y, Node::left);
        self.node_mut(x, Node::set_right(y_left));
        if let Some(y_left) = y_left {
            self.node_mut(y_left, Node::set_parent(Some(x)));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_left(Some(x)));
        y
    }

    /// Binary tree right rotate.
    fn right_rotate(&mut self, x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        let Some(y) = self.node_ref(x, Node::left) else {
            return x;
        };
        let y_right = self.node_ref(y, Node::right);
        self.node_mut(x, Node::set_left(y_right));
        if let Some(y_right) = y_right {
            self.node_mut(y_right, Node::set_parent(Some(x)));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_right(Some(x)));
        y
    }

    /// Replace parent during a rotation.
    fn replace_parent(&mut self, x: NodeIndex<Ix>, y: NodeIndex<Ix>) {
        let parent = self.node_ref(x, Node::parent);
        self.node_mut(y, Node::set_parent(parent));
        self.replace_child(parent, x, Some(y));
        self.node_mut(x, Node::set_parent(Some(y)));
    }

    /// Exchange the places of `z` and its in-order successor `y`, colors included.
    ///
    /// `y` is the leftmost node of `z`'s right subtree, so it has no left child.
    fn swap_places(&mut self, z: NodeIndex<Ix>, y: NodeIndex<Ix>) {
        let z_parent = self.node_ref(z, Node::parent);
        let z_left = self.node_ref(z, Node::left);
        let z_right = self.node_ref(z, Node::right);
        let y_parent = self.node_ref(y, Node::parent);
        let y_right = self.node_ref(y, Node::right);

        self.replace_child(z_parent, z, Some(y));
        self.node_mut(y, Node::set_parent(z_parent));
        self.node_mut(y, Node::set_left(z_left));
        if let Some(z_left) = z_left {
            self.node_mut(z_left, Node::set_parent(Some(y)));
        }

        if z_right == Some(y) {
            self.node_mut(y, Node::set_right(Some(z)));
            self.node_mut(z, Node::set_parent(Some(y)));
        } else {
            self.node_mut(y, Node::set_right(z_right));
            if let Some(z_right) = z_right {
                self.node_mut(z_right, Node::set_parent(Some(y)));
            }
            if let Some(y_parent) = y_parent {
                self.node_mut(y_parent, Node::set_left(Some(z)));
            }
            self.node_mut(z, Node::set_parent(y_parent));
        }

        self.node_mut(z, Node::set_left(None));
        self.node_mut(z, Node::set_right(y_right));
        if let Some(y_right) = y_right {
            self.node_mut(y_right, Node::set_parent(Some(z)));
        }

        let z_color = self.node_ref(z, Node::color);
        let y_color = self.node_ref(y, Node::color);
        self.node_mut(z, Node::set_color(y_color));
        self.node_mut(y, Node::set_color(z_color));
    }

    /// Store a detached node in a vacant slot, or at the end of the arena.
    fn alloc(&mut self, key: K, color: Color) -> NodeIndex<Ix> {
        let node = Node::new(key, color);
        if let Some(idx) = self.free.pop() {
            self.nodes[idx.index()] = node;
            return idx;
        }
        let idx = NodeIndex::new(self.nodes.len());
        // check for max capacity, except if we use usize
        assert!(
            <Ix as IndexType>::max().index() == !0 || NodeIndex::end() != idx,
            "Reached maximum number of nodes"
        );
        self.nodes.push(node);
        idx
    }

    /// Vacate the slot of an unlinked node.
    fn release(&mut self, x: NodeIndex<Ix>) -> K {
        let key = self.node_mut(x, Node::take_key);
        self.free.push(x);
        key
    }
}

// Convenient methods for navigating and relinking nodes
impl<'a, K, Ix> OrderedTree<K, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    pub(crate) fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }

    /// Resolve a position to the live node it refers to.
    fn occupied(&self, position: Position<Ix>) -> Result<NodeIndex<Ix>, PositionError> {
        let node = position.node.ok_or(PositionError::End)?;
        match self.nodes.get(node.index()) {
            Some(n) if !n.is_vacant() => Ok(node),
            _ => Err(PositionError::Stale),
        }
    }

    /// Find the node with the minimum key in the subtree of `x`.
    pub(crate) fn tree_minimum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while let Some(left) = self.node_ref(x, Node::left) {
            x = left;
        }
        x
    }

    /// Find the node with the maximum key in the subtree of `x`.
    pub(crate) fn tree_maximum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while let Some(right) = self.node_ref(x, Node::right) {
            x = right;
        }
        x
    }

    /// In-order successor of `x`.
    pub(crate) fn successor(&self, mut x: NodeIndex<Ix>) -> Option<NodeIndex<Ix>> {
        if let Some(right) = self.node_ref(x, Node::right) {
            return Some(self.tree_minimum(right));
        }
        let mut parent = self.node_ref(x, Node::parent);
        while let Some(p) = parent {
            if self.node_ref(p, Node::right) != Some(x) {
                break;
            }
            x = p;
            parent = self.node_ref(p, Node::parent);
        }
        parent
    }

    /// In-order predecessor of `x`.
    pub(crate) fn predecessor(&self, mut x: NodeIndex<Ix>) -> Option<NodeIndex<Ix>> {
        if let Some(left) = self.node_ref(x, Node::left) {
            return Some(self.tree_maximum(left));
        }
        let mut parent = self.node_ref(x, Node::parent);
        while let Some(p) = parent {
            if self.node_ref(p, Node::left) != Some(x) {
                break;
            }
            x = p;
            parent = self.node_ref(p, Node::parent);
        }
        parent
    }

    /// Check if a node is a left child of its parent.
    fn is_left_child(&self, node: NodeIndex<Ix>) -> bool {
        self.node_ref(node, Node::parent)
            .is_some_and(|p| self.node_ref(p, Node::left) == Some(node))
    }

    /// Which slot of its parent a non-root node occupies.
    fn side_of(&self, node: NodeIndex<Ix>) -> Side {
        if self.is_left_child(node) {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn sibling(&self, node: NodeIndex<Ix>) -> Option<NodeIndex<Ix>> {
        let parent = self.node_ref(node, Node::parent)?;
        if self.node_ref(parent, Node::left) == Some(node) {
            self.node_ref(parent, Node::right)
        } else {
            self.node_ref(parent, Node::left)
        }
    }

    /// Point the slot of `parent` that holds `old` at `new`, or the root if there is no parent.
    fn replace_child(
        &mut self,
        parent: Option<NodeIndex<Ix>>,
        old: NodeIndex<Ix>,
        new: Option<NodeIndex<Ix>>,
    ) {
        match parent {
            None => self.root = new,
            Some(p) if self.node_ref(p, Node::left) == Some(old) => {
                self.node_mut(p, Node::set_left(new));
            }
            Some(p) => self.node_mut(p, Node::set_right(new)),
        }
    }
}
