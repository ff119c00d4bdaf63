use tracing::trace;

use crate::accessor::{NodeAccessor, Side};
use crate::tree::{RbTree, Result};

impl<A> RbTree<A>
where
    A: NodeAccessor,
{
    /// Exchange the positions of `a` and `b` in the tree, colors included.
    ///
    /// Afterwards `b` sits where `a` was, with `a`'s old color, and the other
    /// way round; the color belongs to the position, not to the node. The
    /// nodes' identities are untouched, so handles the host keeps to either
    /// node stay valid. In-order sequence changes unless the two are
    /// neighbours in key order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeCorrupted`](crate::TreeCorrupted) if the edge above either
    /// node cannot be resolved. Nothing has been written in that case.
    pub fn swap(&mut self, a: A::Node, b: A::Node) -> Result<(), A::Node> {
        if self.accessor.is_same(a, b) {
            return Ok(());
        }
        if let Some(side) = self.child_side(a, b) {
            self.swap_with_child(a, b, side)?;
        } else if let Some(side) = self.child_side(b, a) {
            self.swap_with_child(b, a, side)?;
        } else {
            self.swap_distant(a, b)?;
        }
        self.swap_colors(a, b);
        Ok(())
    }

    /// `child` is on `side` of `parent`. The shared edge is reversed instead
    /// of exchanged.
    fn swap_with_child(
        &mut self,
        parent: A::Node,
        child: A::Node,
        side: Side,
    ) -> Result<(), A::Node> {
        let slot = self.slot_of(parent)?;
        trace!(?parent, ?child, ?side, "swap with child");

        let grandparent = self.accessor.parent(parent);
        let parent_other = self.accessor.child(parent, side.opposite());
        let child_forward = self.accessor.child(child, side);
        let child_other = self.accessor.child(child, side.opposite());

        self.set_slot(slot, Some(child));
        self.accessor.set_parent(child, grandparent);
        self.adopt(child, side, Some(parent));
        self.adopt(child, side.opposite(), parent_other);

        self.adopt(parent, side, child_forward);
        self.adopt(parent, side.opposite(), child_other);
        Ok(())
    }

    /// Neither node is the other's parent. They may still be siblings.
    fn swap_distant(&mut self, a: A::Node, b: A::Node) -> Result<(), A::Node> {
        let a_slot = self.slot_of(a)?;
        let b_slot = self.slot_of(b)?;
        trace!(?a, ?b, "swap distant");

        let a_parent = self.accessor.parent(a);
        let b_parent = self.accessor.parent(b);
        let (a_left, a_right) = (self.accessor.left(a), self.accessor.right(a));
        let (b_left, b_right) = (self.accessor.left(b), self.accessor.right(b));

        self.set_slot(a_slot, Some(b));
        self.set_slot(b_slot, Some(a));
        self.accessor.set_parent(b, a_parent);
        self.accessor.set_parent(a, b_parent);

        self.adopt(a, Side::Left, b_left);
        self.adopt(a, Side::Right, b_right);
        self.adopt(b, Side::Left, a_left);
        self.adopt(b, Side::Right, a_right);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::accessor::NodeAccessor;
    use crate::tests::{build, shape_by, TestTree};

    /// Shape with every node labelled by its key and color.
    fn layout(tree: &TestTree) -> String {
        shape_by(tree, |tree, node| {
            let color = if tree.accessor().color(node).is_red() { 'r' } else { 'b' };
            format!("{}{color}", tree.key(node))
        })
    }

    fn swap_twice_restores(tree: &mut TestTree, a: i32, b: i32) {
        let (na, nb) = (tree.find(a), tree.find(b));
        let before = layout(tree);
        let positions = tree.positions();

        tree.swap(na, nb).unwrap();
        let mut expected = positions;
        for p in expected.iter_mut() {
            if p.0 == a {
                p.0 = b;
            } else if p.0 == b {
                p.0 = a;
            }
        }
        expected.sort_unstable_by(|x, y| x.1.cmp(&y.1));
        assert_eq!(tree.positions(), expected, "swap {a} {b}");
        tree.check().unwrap();

        tree.swap(na, nb).unwrap();
        assert_eq!(layout(tree), before, "swap back {a} {b}");
    }

    #[test]
    fn adjacent_nodes_swap_both_ways() {
        let mut tree = build(&(1..=15).collect::<Vec<_>>());
        let root = tree.root().unwrap();
        let left = tree.accessor().left(root).unwrap();
        let right = tree.accessor().right(root).unwrap();
        let (root, left, right) = (tree.key(root), tree.key(left), tree.key(right));

        swap_twice_restores(&mut tree, root, left);
        swap_twice_restores(&mut tree, left, root);
        swap_twice_restores(&mut tree, root, right);
        swap_twice_restores(&mut tree, right, root);
    }

    #[test]
    fn distant_nodes_and_siblings_swap() {
        let mut tree = build(&(1..=15).collect::<Vec<_>>());
        let keys = tree.keys();
        for &a in &keys {
            for &b in &keys {
                swap_twice_restores(&mut tree, a, b);
            }
        }
    }

    #[test]
    fn swap_with_itself_is_noop() {
        let mut tree = build(&[1, 2, 3]);
        let before = layout(&tree);
        let two = tree.find(2);
        tree.swap(two, two).unwrap();
        assert_eq!(layout(&tree), before);
    }
}
