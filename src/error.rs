use std::fmt;

use thiserror::Error;
use tracing::warn;

/// Raised when the links reported by the accessor contradict what the engine
/// itself maintains.
///
/// None of these can happen for a tree that was only ever mutated through
/// [`RbTree`](crate::RbTree). Once one is returned the tree must be treated as
/// lost: the call that raised it may have been interrupted half way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeCorrupted<N: fmt::Debug> {
    /// A node without a parent is not the tree's root.
    #[error("red-black tree corrupted: {node:?} has no parent but is not the root")]
    NotRoot {
        /// The parentless node
        node: N,
    },
    /// Neither child slot of the parent points back at the node.
    #[error("red-black tree corrupted: {node:?} is not a child of its parent {parent:?}")]
    NotChild {
        /// The node
        node: N,
        /// Its purported parent
        parent: N,
    },
    /// A sibling required by the black-height invariant is missing.
    #[error("red-black tree corrupted: {reason} (at {node:?})")]
    NotBalanced {
        /// The node whose sibling was looked up
        node: N,
        /// What was expected
        reason: &'static str,
    },
}

impl<N: fmt::Debug> TreeCorrupted<N> {
    pub(crate) fn not_root(node: N) -> Self {
        warn!(?node, "parentless node is not the root");
        TreeCorrupted::NotRoot { node }
    }

    pub(crate) fn not_child(node: N, parent: N) -> Self {
        warn!(?node, ?parent, "node is not a child of its parent");
        TreeCorrupted::NotChild { node, parent }
    }

    pub(crate) fn not_balanced(node: N, reason: &'static str) -> Self {
        warn!(?node, reason, "black height broken");
        TreeCorrupted::NotBalanced { node, reason }
    }

    /// The node the failed check was made on.
    #[inline]
    pub fn node(&self) -> &N {
        match self {
            TreeCorrupted::NotRoot { node }
            | TreeCorrupted::NotChild { node, .. }
            | TreeCorrupted::NotBalanced { node, .. } => node,
        }
    }
}
