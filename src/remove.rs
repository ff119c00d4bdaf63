use tracing::trace;

use crate::accessor::{NodeAccessor, Side};
use crate::error::TreeCorrupted;
use crate::node::Color;
use crate::tree::{RbTree, Result};

impl<A> RbTree<A>
where
    A: NodeAccessor,
{
    /// Restore red-black tree properties before a black `node` loses its slot.
    ///
    /// `node` is still linked, so its parent and sibling are intact. The
    /// "double black" it will leave behind is pushed up until a red node or the
    /// root absorbs it. `node` keeps its parent throughout: every rotation here
    /// happens around the parent or the sibling.
    pub(crate) fn balance_before_unlinking(&mut self, node: A::Node) -> Result<(), A::Node> {
        let mut current = node;
        loop {
            let Some(parent) = self.accessor.parent(current) else {
                // case 1
                return self.assert_is_root(current);
            };
            let side = self.side_of(parent, current)?;
            if !self.balance_before_unlinking_step(current, parent, side)? {
                return Ok(());
            }
            current = parent;
        }
    }

    /// One round of the removal fixup with `node` on `side` of `parent`.
    ///
    /// Returns `true` if the defect moved up to `parent` (case 3).
    fn balance_before_unlinking_step(
        &mut self,
        node: A::Node,
        parent: A::Node,
        side: Side,
    ) -> Result<bool, A::Node> {
        let far = side.opposite();
        let mut sibling = self.sibling(node, parent, side)?;

        if self.accessor.color(sibling).is_red() {
            trace!(?parent, "unlink fixup: case 2");
            let _rotated = self.rotate(parent, side)?;
            self.accessor.set_color(sibling, Color::Black);
            self.accessor.set_color(parent, Color::Red);
            sibling = self.sibling(node, parent, side)?;
        } else if !self.accessor.is_red(self.accessor.child(sibling, Side::Left))
            && !self.accessor.is_red(self.accessor.child(sibling, Side::Right))
            && self.accessor.color(parent).is_black()
        {
            trace!(?parent, "unlink fixup: case 3");
            self.accessor.set_color(sibling, Color::Red);
            return Ok(true);
        }

        if !self.accessor.is_red(self.accessor.child(sibling, far)) {
            if !self.accessor.is_red(self.accessor.child(sibling, side)) {
                trace!(?parent, "unlink fixup: case 4");
                self.accessor.set_color(parent, Color::Black);
                self.accessor.set_color(sibling, Color::Red);
                return Ok(false);
            }
            trace!(?sibling, "unlink fixup: case 5");
            let _rotated = self.rotate(sibling, far)?;
            sibling = self.sibling(node, parent, side)?;
        }

        trace!(?parent, "unlink fixup: case 6");
        let far_child = self.accessor.child(sibling, far);
        let _rotated = self.rotate(parent, side)?;
        if let Some(far_child) = far_child {
            self.accessor.set_color(far_child, Color::Black);
        }
        Ok(false)
    }

    fn sibling(&self, node: A::Node, parent: A::Node, side: Side) -> Result<A::Node, A::Node> {
        self.accessor
            .child(parent, side.opposite())
            .ok_or_else(|| TreeCorrupted::not_balanced(node, "black node has no sibling"))
    }
}

#[cfg(test)]
mod test {
    use crate::accessor::NodeAccessor;
    use crate::node::Color;
    use crate::tests::{shape, TestTree};
    use crate::TreeCorrupted;

    fn tree_of(keys: &[i32], colors: &[(i32, Color)]) -> TestTree {
        let mut tree = TestTree::default();
        for &k in keys {
            tree.insert(k);
        }
        tree.recolor(colors);
        tree.check().unwrap();
        tree
    }

    #[test]
    fn red_sibling_is_rotated_over() {
        // case 2 then 4
        let mut tree = tree_of(
            &[2, 1, 4, 3, 5],
            &[
                (2, Color::Black),
                (1, Color::Black),
                (4, Color::Red),
                (3, Color::Black),
                (5, Color::Black),
            ],
        );
        assert!(tree.remove(1));
        tree.check().unwrap();
        assert_eq!(shape(&tree), "((- 2 3) 4 5)");
        assert_eq!(
            tree.colors(),
            vec![(2, Color::Black), (3, Color::Red), (4, Color::Black), (5, Color::Black)]
        );
    }

    #[test]
    fn black_family_pushes_defect_up() {
        // case 3 at the root absorbs the defect
        let mut tree = tree_of(&[2, 1, 3], &[(1, Color::Black), (3, Color::Black)]);
        assert!(tree.remove(1));
        tree.check().unwrap();
        assert_eq!(shape(&tree), "(- 2 3)");
        assert_eq!(tree.colors(), vec![(2, Color::Black), (3, Color::Red)]);
    }

    #[test]
    fn red_parent_absorbs_defect() {
        // case 4
        let mut tree = tree_of(
            &[4, 2, 6, 1, 3, 5, 7],
            &[(2, Color::Red), (1, Color::Black), (3, Color::Black)],
        );
        assert!(tree.remove(1));
        tree.check().unwrap();
        assert_eq!(shape(&tree), "((- 2 3) 4 (5 6 7))");
        assert_eq!(tree.accessor().color(tree.find(2)), Color::Black);
        assert_eq!(tree.accessor().color(tree.find(3)), Color::Red);
    }

    #[test]
    fn near_red_nephew_is_rotated_outwards() {
        // case 5 then 6
        let mut tree = tree_of(&[2, 1, 4, 3], &[]);
        assert_eq!(tree.accessor().color(tree.find(3)), Color::Red);
        assert!(tree.remove(1));
        tree.check().unwrap();
        assert_eq!(shape(&tree), "(2 3 4)");
        assert_eq!(
            tree.colors(),
            vec![(2, Color::Black), (3, Color::Black), (4, Color::Black)]
        );
    }

    #[test]
    fn far_red_nephew_finishes_in_one_rotation() {
        // case 6
        let mut tree = tree_of(&[2, 1, 3, 4], &[]);
        assert_eq!(tree.accessor().color(tree.find(4)), Color::Red);
        assert!(tree.remove(1));
        tree.check().unwrap();
        assert_eq!(shape(&tree), "(2 3 4)");
        assert_eq!(
            tree.colors(),
            vec![(2, Color::Black), (3, Color::Black), (4, Color::Black)]
        );
    }

    #[test]
    fn red_sibling_with_red_near_nephew_continues_to_case_six() {
        // case 2 leaves a black sibling whose near child is red
        let mut tree = tree_of(
            &[2, 1, 6, 4, 8, 3],
            &[
                (2, Color::Black),
                (1, Color::Black),
                (6, Color::Red),
                (4, Color::Black),
                (8, Color::Black),
                (3, Color::Red),
            ],
        );
        assert!(tree.remove(1));
        tree.check().unwrap();
        assert_eq!(tree.keys(), vec![2, 3, 4, 6, 8]);
    }

    #[test]
    fn missing_sibling_is_not_balanced() {
        let mut tree = tree_of(&[2, 1], &[]);
        let one = tree.find(1);
        // a black leaf whose parent has no other child
        tree.accessor_mut().set_color(one, Color::Black);
        let err = tree.unlink(one).unwrap_err();
        assert!(matches!(err, TreeCorrupted::NotBalanced { node, .. } if node == one));
    }
}
