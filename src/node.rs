use crate::index::NodeIndex;

/// Node of the red-black tree
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<K, Ix> {
    /// Left child, `None` is a black leaf
    pub left: Option<NodeIndex<Ix>>,
    /// Right child, `None` is a black leaf
    pub right: Option<NodeIndex<Ix>>,
    /// Parent, `None` for the root
    pub parent: Option<NodeIndex<Ix>>,
    /// Color of the node
    pub color: Color,

    /// Key of the node, `None` when the slot is vacant
    pub key: Option<K>,
}

impl<K, Ix> Node<K, Ix> {
    /// Create a detached node holding `key`
    pub fn new(key: K, color: Color) -> Self {
        Node {
            left: None,
            right: None,
            parent: None,
            color,
            key: Some(key),
        }
    }
}

// Convenient getter/setter methods
impl<K, Ix: Copy> Node<K, Ix> {
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn key(&self) -> &K {
        self.key.as_ref().expect("vacant slot has no key")
    }

    pub fn left(&self) -> Option<NodeIndex<Ix>> {
        self.left
    }

    pub fn right(&self) -> Option<NodeIndex<Ix>> {
        self.right
    }

    pub fn parent(&self) -> Option<NodeIndex<Ix>> {
        self.parent
    }

    pub fn is_vacant(&self) -> bool {
        self.key.is_none()
    }

    pub fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    pub fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    /// Detach the node from the tree and hand its key back, leaving the slot vacant.
    pub fn take_key(&mut self) -> K {
        self.left = None;
        self.right = None;
        self.parent = None;
        self.key.take().expect("vacant slot has no key")
    }

    pub fn set_color(color: Color) -> impl FnOnce(&mut Node<K, Ix>) {
        move |node: &mut Node<K, Ix>| {
            node.color = color;
        }
    }

    pub fn set_left(left: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<K, Ix>) {
        move |node: &mut Node<K, Ix>| {
            node.left = left;
        }
    }

    pub fn set_right(right: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<K, Ix>) {
        move |node: &mut Node<K, Ix>| {
            node.right = right;
        }
    }

    pub fn set_parent(parent: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<K, Ix>) {
        move |node: &mut Node<K, Ix>| {
            node.parent = parent;
        }
    }
}

/// The color of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Red node
    Red,
    /// Black node
    Black,
}
