use std::fmt;

use thiserror::Error;

use crate::accessor::{NodeAccessor, Side};
use crate::tree::RbTree;

/// First broken invariant found by [`RbTree::check`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation<N: fmt::Debug> {
    /// The root has a parent.
    #[error("red-black tree corrupted: root {node:?} has parent {parent:?}")]
    RootHasParent { node: N, parent: N },
    /// The root is red.
    #[error("red-black tree corrupted: root {node:?} is red")]
    RedRoot { node: N },
    /// A child does not point back at the parent that owns it.
    #[error("red-black tree corrupted: {child:?} under {parent:?} points back at {actual:?}")]
    ParentMismatch {
        parent: N,
        child: N,
        actual: Option<N>,
    },
    /// A red node has a red child.
    #[error("red-black tree corrupted: red {node:?} has red child {child:?}")]
    RedRed { node: N, child: N },
    /// The two subtrees of a node have different black heights.
    #[error("red-black tree corrupted: black height {left} on the left of {node:?} but {right} on the right")]
    BlackHeight { node: N, left: usize, right: usize },
}

impl<A> RbTree<A>
where
    A: NodeAccessor,
{
    /// Verify the red-black invariants over the whole tree.
    ///
    /// 1. The root has no parent.
    /// 2. Every child points back at its parent.
    /// 3. The root is black and no red node has a red child.
    /// 4. For each node, all simple paths from the node to descendant leaves
    ///    contain the same number of black nodes.
    ///
    /// Returns the black height of the tree, counting black nodes on any
    /// path from the root down to a missing child. Runs in O(n).
    pub fn check(&self) -> Result<usize, Violation<A::Node>> {
        let Some(root) = self.root else {
            return Ok(0);
        };
        if let Some(parent) = self.accessor.parent(root) {
            return Err(Violation::RootHasParent { node: root, parent });
        }
        if self.accessor.color(root).is_red() {
            return Err(Violation::RedRoot { node: root });
        }
        self.check_subtree(root)
    }

    fn check_subtree(&self, node: A::Node) -> Result<usize, Violation<A::Node>> {
        let mut heights = [0; 2];
        for (height, side) in heights.iter_mut().zip([Side::Left, Side::Right]) {
            let Some(child) = self.accessor.child(node, side) else {
                continue;
            };
            let actual = self.accessor.parent(child);
            if !actual.is_some_and(|p| self.accessor.is_same(p, node)) {
                return Err(Violation::ParentMismatch {
                    parent: node,
                    child,
                    actual,
                });
            }
            if self.accessor.color(node).is_red() && self.accessor.color(child).is_red() {
                return Err(Violation::RedRed { node, child });
            }
            *height = self.check_subtree(child)?;
        }

        let [left, right] = heights;
        if left != right {
            return Err(Violation::BlackHeight { node, left, right });
        }
        if self.accessor.color(node).is_black() {
            return Ok(left + 1);
        }
        Ok(left)
    }
}
