use tracing::trace;

use crate::accessor::NodeAccessor;
use crate::node::Color;
use crate::tree::{RbTree, Result};

impl<A> RbTree<A>
where
    A: NodeAccessor,
{
    /// Restore red-black tree properties after the host linked `node` as a leaf.
    ///
    /// The host must already have pointed `node`'s parent at its new parent and
    /// the parent's child slot at `node` (or made it the root with
    /// [`set_root`](RbTree::set_root)). The prior color of `node` is ignored.
    /// Only colors and rotations change; the in-order sequence is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TreeCorrupted`](crate::TreeCorrupted) if parent and child
    /// links disagree on the way up.
    pub fn balance_after_linking(&mut self, node: A::Node) -> Result<(), A::Node> {
        self.accessor.set_color(node, Color::Red);
        let mut current = node;

        loop {
            let Some(parent) = self.accessor.parent(current) else {
                self.assert_is_root(current)?;
                self.accessor.set_color(current, Color::Black);
                return Ok(());
            };
            if self.accessor.color(parent).is_black() {
                return Ok(());
            }
            let Some(grandparent) = self.accessor.parent(parent) else {
                self.assert_is_root(parent)?;
                self.accessor.set_color(parent, Color::Black);
                return Ok(());
            };

            let parent_side = self.side_of(grandparent, parent)?;
            let uncle = self.accessor.child(grandparent, parent_side.opposite());
            if let Some(uncle) = uncle.filter(|&uncle| self.accessor.color(uncle).is_red()) {
                trace!(?grandparent, "insert fixup: red uncle");
                self.accessor.set_color(parent, Color::Black);
                self.accessor.set_color(uncle, Color::Black);
                self.accessor.set_color(grandparent, Color::Red);
                current = grandparent;
                continue;
            }

            if self.side_of(parent, current)? == parent_side {
                trace!(?grandparent, "insert fixup: outer grandchild");
                // both red parent and black grandparent swap colors in the rotation
                let _rotated = self.rotate(grandparent, parent_side.opposite())?;
                return Ok(());
            }

            trace!(?parent, "insert fixup: inner grandchild");
            let _rotated = self.rotate(parent, parent_side)?;
            current = parent;
        }
    }
}
