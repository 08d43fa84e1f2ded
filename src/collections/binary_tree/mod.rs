//! An unbalanced [`BinarySearchTree`] with parent links, and [`NodeRef`] views into its nodes.
//!
//! Structural operations walk a subtree with loops, starting from whichever node the caller holds
//! and using parent links to climb back up. The tree itself only starts those walks at the root and
//! keeps count of its nodes.

mod binary_search_tree;
mod iter;
mod node;
mod node_ref;

pub use binary_search_tree::*;
pub use iter::*;
pub(crate) use node::*;
pub use node_ref::*;
