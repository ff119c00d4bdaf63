//! `rb_intrusive` is a red-black balancing engine for nodes the caller owns.
//!
//! It implements rotation, insertion rebalancing, removal rebalancing and node
//! relocation, ensuring that each modification operation requires at most
//! O(logN) time complexity.
//!
//! The engine never touches a node directly. Every read and write of a
//! parent, child or color link goes through a host supplied [`NodeAccessor`],
//! so node storage, key comparison and traversal stay with the host. The
//! crate ships one such host, [`Arena`], which keeps nodes in a vector and
//! uses indices for parent links, so no reference cycle is ever formed.
//!
//! # Example
//!
//! ```rust
//! use rb_intrusive::{Arena, NodeAccessor, RbTree, Side};
//!
//! let mut tree = RbTree::new(Arena::new());
//! let root = tree.accessor_mut().alloc(2);
//! tree.set_root(Some(root));
//! tree.balance_after_linking(root).unwrap();
//!
//! // the host found the slot by comparing keys; the engine only rebalances
//! let one = tree.accessor_mut().alloc(1);
//! tree.accessor_mut().set_parent(one, Some(root));
//! tree.accessor_mut().set_child(root, Side::Left, Some(one));
//! tree.balance_after_linking(one).unwrap();
//! assert_eq!(tree.check(), Ok(1));
//!
//! tree.unlink(root).unwrap();
//! assert_eq!(tree.root(), Some(one));
//! assert_eq!(tree.accessor_mut().free(root), Some(2));
//! ```
//!

mod accessor;
mod arena;
mod check;
mod error;
mod index;
mod insert;
mod node;
mod remove;
mod rotate;
mod swap;
mod tree;
mod unlink;


pub use accessor::{NodeAccessor, Side};
pub use arena::Arena;
pub use check::Violation;
pub use error::TreeCorrupted;
pub use index::{DefaultIx, IndexType, NodeIndex};
pub use node::{Color, Node};
pub use tree::RbTree;
