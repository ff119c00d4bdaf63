use crate::accessor::{NodeAccessor, Side};
use crate::node::Color;
use crate::tree::{RbTree, Result};

impl<A> RbTree<A>
where
    A: NodeAccessor,
{
    /// Remove `node` from the tree.
    ///
    /// A node with two children first trades places with its in-order
    /// predecessor, so it is always `node` itself that leaves the tree and
    /// handles to every other node keep pointing at the same item. On return
    /// `node`'s links are cleared and the host may free or relink it; the
    /// in-order sequence of the remaining nodes is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TreeCorrupted`](crate::TreeCorrupted) if the links reported
    /// by the accessor contradict the red-black invariants. The tree must not
    /// be used afterwards.
    pub fn unlink(&mut self, node: A::Node) -> Result<(), A::Node> {
        loop {
            let left = self.accessor.left(node);
            let right = self.accessor.right(node);
            match (left, right) {
                (None, None) => {
                    self.unlink_leaf(node)?;
                    break;
                }
                (Some(child), None) | (None, Some(child)) => {
                    self.unlink_with_child(node, child)?;
                    break;
                }
                (Some(left), Some(_)) => {
                    let predecessor = self.subtree_max(left);
                    self.swap(node, predecessor)?;
                }
            }
        }

        self.accessor.set_parent(node, None);
        self.accessor.set_child(node, Side::Left, None);
        self.accessor.set_child(node, Side::Right, None);
        Ok(())
    }

    fn unlink_leaf(&mut self, node: A::Node) -> Result<(), A::Node> {
        if self.accessor.parent(node).is_none() {
            self.assert_is_root(node)?;
            self.root = None;
            return Ok(());
        }
        if self.accessor.color(node).is_black() {
            self.balance_before_unlinking(node)?;
        }
        let slot = self.slot_of(node)?;
        self.set_slot(slot, None);
        Ok(())
    }

    /// A node with a single child is black and the child red, so painting the
    /// child black keeps the black height.
    fn unlink_with_child(&mut self, node: A::Node, child: A::Node) -> Result<(), A::Node> {
        let slot = self.slot_of(node)?;
        let parent = self.accessor.parent(node);
        self.set_slot(slot, Some(child));
        self.accessor.set_parent(child, parent);
        self.accessor.set_color(child, Color::Black);
        Ok(())
    }
}
