use tracing::trace;

use crate::accessor::{NodeAccessor, Side};
use crate::tree::{RbTree, Result};

impl<A> RbTree<A>
where
    A: NodeAccessor,
{
    /// Binary tree left rotate.
    ///
    /// The right child of `top` takes its place and `top` becomes that node's
    /// left child. The two nodes also exchange colors, so the color of the
    /// position is preserved. Returns `Ok(false)` without touching anything if
    /// `top` has no right child.
    #[inline]
    pub fn rotate_left(&mut self, top: A::Node) -> Result<bool, A::Node> {
        self.rotate(top, Side::Left)
    }

    /// Binary tree right rotate. Mirror of [`rotate_left`](RbTree::rotate_left).
    #[inline]
    pub fn rotate_right(&mut self, top: A::Node) -> Result<bool, A::Node> {
        self.rotate(top, Side::Right)
    }

    /// Moves `top` one level down towards `dir`, promoting its child on the
    /// opposite side.
    ///
    /// The edge above `top` is resolved before anything is written, so a
    /// corrupted parent link leaves the tree untouched.
    pub(crate) fn rotate(&mut self, top: A::Node, dir: Side) -> Result<bool, A::Node> {
        let Some(node) = self.accessor.child(top, dir.opposite()) else {
            return Ok(false);
        };
        let slot = self.slot_of(top)?;
        trace!(?top, ?node, ?dir, "rotate");

        self.swap_colors(top, node);

        let inner = self.accessor.child(node, dir);
        self.adopt(top, dir.opposite(), inner);

        let parent = self.accessor.parent(top);
        self.accessor.set_parent(node, parent);
        self.set_slot(slot, Some(node));

        self.adopt(node, dir, Some(top));
        Ok(true)
    }
}

#[cfg(test)]
mod test {
    use crate::accessor::NodeAccessor;
    use crate::node::Color;
    use crate::tests::{build, shape, TestTree};

    #[test]
    fn rotate_left_promotes_right_child_and_exchanges_colors() {
        let mut tree: TestTree = build(&[2, 1, 4, 3, 5]);
        tree.recolor(&[
            (2, Color::Black),
            (1, Color::Red),
            (4, Color::Red),
            (3, Color::Black),
            (5, Color::Black),
        ]);
        let (two, four) = (tree.find(2), tree.find(4));

        assert!(tree.rotate_left(two).unwrap());

        assert_eq!(tree.root(), Some(four));
        assert_eq!(tree.accessor().parent(four), None);
        assert_eq!(tree.accessor().parent(two), Some(four));
        assert_eq!(tree.accessor().color(four), Color::Black);
        assert_eq!(tree.accessor().color(two), Color::Red);
        assert_eq!(shape(&tree), "((1 2 3) 4 5)");
        assert_eq!(tree.keys(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rotation_without_promotable_child_is_noop() {
        let mut tree = build(&[2, 1]);
        let two = tree.find(2);
        let before = tree.positions();
        assert!(!tree.rotate_left(two).unwrap());
        assert_eq!(tree.positions(), before);
    }

    #[test]
    fn rotations_are_inverse_below_the_root() {
        let mut tree = build(&(0..32).collect::<Vec<_>>());
        let before = tree.positions();
        let root = tree.root();
        let top = tree
            .in_order()
            .into_iter()
            .find(|&n| Some(n) != root && tree.accessor().right(n).is_some())
            .unwrap();

        assert!(tree.rotate_left(top).unwrap());
        assert_ne!(tree.positions(), before);
        let promoted = tree.accessor().parent(top).unwrap();
        assert!(tree.rotate_right(promoted).unwrap());

        assert_eq!(tree.positions(), before);
        tree.check().unwrap();
    }

    #[test]
    fn stale_parent_link_is_reported_before_any_write() {
        let mut tree = build(&[2, 1, 3, 4]);
        let (one, three) = (tree.find(1), tree.find(3));
        tree.accessor_mut().set_parent(three, Some(one));
        let before = tree.positions();
        let err = tree.rotate_left(three).unwrap_err();
        assert_eq!(
            err,
            crate::TreeCorrupted::NotChild {
                node: three,
                parent: one
            }
        );
        assert_eq!(tree.positions(), before);
    }
}
