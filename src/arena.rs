#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::accessor::NodeAccessor;
use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::node::{Color, Node};

/// Vector backed node storage addressed by [`NodeIndex`].
///
/// Parent links are plain indices, so the storage holds no reference cycles
/// and the whole arena is `Send` whenever `T` is. Freed slots are recycled by
/// later allocations. The arena knows nothing about ordering; it only answers
/// the link queries of [`NodeAccessor`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arena<T, Ix = DefaultIx> {
    /// Vector that stores nodes
    pub(crate) nodes: Vec<Node<T, Ix>>,
    /// Slots released by `free`, reused last-in first-out
    pub(crate) vacant: Vec<NodeIndex<Ix>>,
}

impl<T> Arena<T> {
    /// Create an empty `Arena`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
}

impl<T> Default for Arena<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Ix> Arena<T, Ix>
where
    Ix: IndexType,
{
    /// Creates a new `Arena` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            nodes: Vec::with_capacity(capacity),
            vacant: Vec::new(),
        }
    }

    /// Store `item` in a fresh unlinked red node.
    ///
    /// # Panics
    ///
    /// This method panics when the arena is at the maximum number of nodes for its index
    #[inline]
    pub fn alloc(&mut self, item: T) -> NodeIndex<Ix> {
        if let Some(idx) = self.vacant.pop() {
            self.nodes[idx.index()] = Node::new(item);
            return idx;
        }
        let idx = NodeIndex::new(self.nodes.len());
        // check for max capacity, except if we use usize
        assert!(
            <Ix as IndexType>::max().index() == !0 || NodeIndex::end() != idx,
            "Reached maximum number of nodes"
        );
        self.nodes.push(Node::new(item));
        idx
    }

    /// Release a slot and hand back its item.
    ///
    /// The node must already be unlinked from any tree. Returns `None` if the
    /// slot was out of range or already free.
    #[inline]
    pub fn free(&mut self, idx: NodeIndex<Ix>) -> Option<T> {
        let item = self.nodes.get_mut(idx.index())?.take_item()?;
        self.vacant.push(idx);
        Some(item)
    }

    /// Return reference to the item stored at `idx`.
    #[inline]
    pub fn get(&self, idx: NodeIndex<Ix>) -> Option<&T> {
        self.nodes.get(idx.index()).and_then(Node::item)
    }

    /// Return a mutable reference to the item stored at `idx`.
    #[inline]
    pub fn get_mut(&mut self, idx: NodeIndex<Ix>) -> Option<&mut T> {
        self.nodes.get_mut(idx.index()).and_then(Node::item_mut)
    }

    /// Return the raw node stored at `idx`, vacant or not.
    #[inline]
    pub fn node(&self, idx: NodeIndex<Ix>) -> Option<&Node<T, Ix>> {
        self.nodes.get(idx.index())
    }

    #[inline]
    pub fn contains(&self, idx: NodeIndex<Ix>) -> bool {
        self.get(idx).is_some()
    }

    /// Return the number of live items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - self.vacant.len()
    }

    /// Return `true` if the arena contains no live items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every node.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.vacant.clear();
    }
}

// Convenient methods for reference or mutate a node
impl<'a, T, Ix> Arena<T, Ix>
where
    Ix: IndexType,
{
    fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<T, Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<T, Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }
}

impl<T, Ix> NodeAccessor for Arena<T, Ix>
where
    Ix: IndexType,
{
    type Node = NodeIndex<Ix>;

    #[inline]
    fn parent(&self, node: Self::Node) -> Option<Self::Node> {
        self.node_ref(node, Node::parent)
    }

    #[inline]
    fn set_parent(&mut self, node: Self::Node, parent: Option<Self::Node>) {
        self.node_mut(node, Node::set_parent(parent));
    }

    #[inline]
    fn left(&self, node: Self::Node) -> Option<Self::Node> {
        self.node_ref(node, Node::left)
    }

    #[inline]
    fn set_left(&mut self, node: Self::Node, child: Option<Self::Node>) {
        self.node_mut(node, Node::set_left(child));
    }

    #[inline]
    fn right(&self, node: Self::Node) -> Option<Self::Node> {
        self.node_ref(node, Node::right)
    }

    #[inline]
    fn set_right(&mut self, node: Self::Node, child: Option<Self::Node>) {
        self.node_mut(node, Node::set_right(child));
    }

    #[inline]
    fn color(&self, node: Self::Node) -> Color {
        self.node_ref(node, Node::color)
    }

    #[inline]
    fn set_color(&mut self, node: Self::Node, color: Color) {
        self.node_mut(node, Node::set_color(color));
    }
}
