//! The capability a host hands to the balancing engine.
//!
//! The engine never sees a node type. It reads and writes the four links of a
//! node (parent, left, right, color) through a [`NodeAccessor`], so a host is
//! free to keep nodes in an arena addressed by integers, behind raw pointers,
//! or anywhere else.

use std::fmt;

use crate::node::Color;

/// Link operations on host-owned nodes.
///
/// Every method must be O(1) and must not fail for any node that is currently
/// linked into the tree or about to be. Child edges are the owning relation;
/// the parent edge is only a back-reference and must agree with the child
/// edge that points at the node.
pub trait NodeAccessor {
    /// Cheap handle naming one node.
    type Node: Copy + Eq + fmt::Debug;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
    fn set_parent(&mut self, node: Self::Node, parent: Option<Self::Node>);
    fn left(&self, node: Self::Node) -> Option<Self::Node>;
    fn set_left(&mut self, node: Self::Node, child: Option<Self::Node>);
    fn right(&self, node: Self::Node) -> Option<Self::Node>;
    fn set_right(&mut self, node: Self::Node, child: Option<Self::Node>);
    fn color(&self, node: Self::Node) -> Color;
    fn set_color(&mut self, node: Self::Node, color: Color);

    /// Identity test. Handles that compare equal name the same node unless
    /// the host says otherwise.
    #[inline]
    fn is_same(&self, a: Self::Node, b: Self::Node) -> bool {
        a == b
    }

    #[inline]
    fn child(&self, node: Self::Node, side: Side) -> Option<Self::Node> {
        match side {
            Side::Left => self.left(node),
            Side::Right => self.right(node),
        }
    }

    #[inline]
    fn set_child(&mut self, node: Self::Node, side: Side, child: Option<Self::Node>) {
        match side {
            Side::Left => self.set_left(node, child),
            Side::Right => self.set_right(node, child),
        }
    }

    /// Absent children count as black.
    #[inline]
    fn is_red(&self, node: Option<Self::Node>) -> bool {
        node.is_some_and(|n| self.color(n).is_red())
    }
}

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Left.opposite().opposite(), Side::Left);
    }
}
