#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::index::{IndexType, NodeIndex};

/// Node stored in an [`Arena`](crate::Arena)
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node<T, Ix> {
    /// Left children
    pub(crate) left: Option<NodeIndex<Ix>>,
    /// Right children
    pub(crate) right: Option<NodeIndex<Ix>>,
    /// Parent
    pub(crate) parent: Option<NodeIndex<Ix>>,
    /// Color of the node
    pub(crate) color: Color,

    /// Host payload, `None` once the slot has been freed
    pub(crate) item: Option<T>,
}

// Convenient getter/setter methods
impl<T, Ix> Node<T, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(item: T) -> Self {
        Node {
            left: None,
            right: None,
            parent: None,
            color: Color::Red,
            item: Some(item),
        }
    }

    pub fn color(&self) -> Color {
        self.color
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
        self.item.is_none()
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn item_mut(&mut self) -> Option<&mut T> {
        self.item.as_mut()
    }

    pub(crate) fn take_item(&mut self) -> Option<T> {
        self.left = None;
        self.right = None;
        self.parent = None;
        self.color = Color::Red;
        self.item.take()
    }

    pub(crate) fn set_color(color: Color) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            node.color = color;
        }
    }

    pub(crate) fn set_left(left: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            node.left = left;
        }
    }

    pub(crate) fn set_right(right: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            node.right = right;
        }
    }

    pub(crate) fn set_parent(parent: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<T, Ix>) {
        move |node: &mut Node<T, Ix>| {
            node.parent = parent;
        }
    }
}

/// The color of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    /// Red node
    Red,
    /// Black node
    Black,
}

impl Color {
    #[inline]
    pub fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    #[inline]
    pub fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }
}

/// `true` maps to [`Color::Red`].
impl From<bool> for Color {
    #[inline]
    fn from(red: bool) -> Self {
        if red {
            Color::Red
        } else {
            Color::Black
        }
    }
}

impl From<Color> for bool {
    #[inline]
    fn from(color: Color) -> Self {
        color.is_red()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn color_bool_mapping_is_red_true() {
        assert_eq!(Color::from(true), Color::Red);
        assert_eq!(Color::from(false), Color::Black);
        assert!(bool::from(Color::Red));
        assert!(!bool::from(Color::Black));
    }

    #[test]
    fn taking_item_resets_links() {
        let mut node = Node::<_, u32>::new("x");
        Node::set_parent(Some(NodeIndex::new(3)))(&mut node);
        Node::set_color(Color::Black)(&mut node);
        assert_eq!(node.take_item(), Some("x"));
        assert!(node.is_vacant());
        assert_eq!(node.parent(), None);
        assert!(node.color().is_red());
    }
}
