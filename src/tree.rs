use crate::accessor::{NodeAccessor, Side};
use crate::error::TreeCorrupted;

pub(crate) type Result<T, N> = std::result::Result<T, TreeCorrupted<N>>;

/// A red-black tree over host-owned nodes.
///
/// The tree holds the root handle and the host's [`NodeAccessor`]. It never
/// allocates, compares keys or owns node payloads: the host links a new leaf
/// itself and then calls [`balance_after_linking`](RbTree::balance_after_linking),
/// and removes a node by calling [`unlink`](RbTree::unlink).
#[derive(Debug)]
pub struct RbTree<A: NodeAccessor> {
    /// Host storage seen through the link operations
    pub(crate) accessor: A,
    /// Root of the tree
    pub(crate) root: Option<A::Node>,
}

impl<A> Default for RbTree<A>
where
    A: NodeAccessor + Default,
{
    #[inline]
    fn default() -> Self {
        Self::new(A::default())
    }
}

/// The edge that owns a node: the root slot or a parent's child slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot<N> {
    Root,
    Child(N, Side),
}

impl<A> RbTree<A>
where
    A: NodeAccessor,
{
    /// Creates an empty tree over `accessor`.
    #[inline]
    #[must_use]
    pub fn new(accessor: A) -> Self {
        RbTree {
            accessor,
            root: None,
        }
    }

    /// Creates a tree whose root is already linked in `accessor`.
    ///
    /// The nodes reachable from `root` must already satisfy the red-black
    /// invariants; [`check`](RbTree::check) tells whether they do.
    #[inline]
    #[must_use]
    pub fn with_root(accessor: A, root: Option<A::Node>) -> Self {
        RbTree { accessor, root }
    }

    #[inline]
    pub fn root(&self) -> Option<A::Node> {
        self.root
    }

    /// Overwrites the root handle.
    ///
    /// Only needed by hosts that link the very first node themselves.
    #[inline]
    pub fn set_root(&mut self, root: Option<A::Node>) {
        self.root = root;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    #[inline]
    pub fn accessor_mut(&mut self) -> &mut A {
        &mut self.accessor
    }

    #[inline]
    pub fn into_accessor(self) -> A {
        self.accessor
    }

    /// Leftmost node of the subtree rooted at `node`.
    pub fn subtree_min(&self, node: A::Node) -> A::Node {
        self.subtree_extreme(node, Side::Left)
    }

    /// Rightmost node of the subtree rooted at `node`.
    pub fn subtree_max(&self, node: A::Node) -> A::Node {
        self.subtree_extreme(node, Side::Right)
    }

    /// Leftmost node of the tree, `None` if empty.
    pub fn min(&self) -> Option<A::Node> {
        self.root.map(|root| self.subtree_min(root))
    }

    /// Rightmost node of the tree, `None` if empty.
    pub fn max(&self) -> Option<A::Node> {
        self.root.map(|root| self.subtree_max(root))
    }

    fn subtree_extreme(&self, mut node: A::Node, side: Side) -> A::Node {
        while let Some(child) = self.accessor.child(node, side) {
            node = child;
        }
        node
    }

    /// Fails unless `node` is the current root.
    pub(crate) fn assert_is_root(&self, node: A::Node) -> Result<(), A::Node> {
        match self.root {
            Some(root) if self.accessor.is_same(root, node) => Ok(()),
            _ => Err(TreeCorrupted::not_root(node)),
        }
    }

    /// Which child of `parent` the node is.
    pub(crate) fn side_of(&self, parent: A::Node, node: A::Node) -> Result<Side, A::Node> {
        self.child_side(parent, node)
            .ok_or_else(|| TreeCorrupted::not_child(node, parent))
    }

    pub(crate) fn child_side(&self, parent: A::Node, node: A::Node) -> Option<Side> {
        let is_child = |side| {
            self.accessor
                .child(parent, side)
                .is_some_and(|child| self.accessor.is_same(child, node))
        };
        if is_child(Side::Left) {
            Some(Side::Left)
        } else if is_child(Side::Right) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Resolve the edge currently pointing at `node`.
    pub(crate) fn slot_of(&self, node: A::Node) -> Result<Slot<A::Node>, A::Node> {
        match self.accessor.parent(node) {
            None => self.assert_is_root(node).map(|()| Slot::Root),
            Some(parent) => self
                .side_of(parent, node)
                .map(|side| Slot::Child(parent, side)),
        }
    }

    /// Point the edge `slot` at `node`. Back-references are the caller's job.
    pub(crate) fn set_slot(&mut self, slot: Slot<A::Node>, node: Option<A::Node>) {
        match slot {
            Slot::Root => self.root = node,
            Slot::Child(parent, side) => self.accessor.set_child(parent, side, node),
        }
    }

    /// Link `child` under `parent` on `side`, keeping the back-reference in step.
    pub(crate) fn adopt(&mut self, parent: A::Node, side: Side, child: Option<A::Node>) {
        self.accessor.set_child(parent, side, child);
        if let Some(child) = child {
            self.accessor.set_parent(child, Some(parent));
        }
    }

    pub(crate) fn swap_colors(&mut self, a: A::Node, b: A::Node) {
        let a_color = self.accessor.color(a);
        let b_color = self.accessor.color(b);
        self.accessor.set_color(a, b_color);
        self.accessor.set_color(b, a_color);
    }
}
