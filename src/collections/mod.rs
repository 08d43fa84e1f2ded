//! General-purpose node-based collection types.
//!
//! # Purpose
//! Each of these types owns its nodes through raw pointers, rather than through nested
//! [`Box`]es, so that every node can be linked to from more than one place: the back of a list,
//! or the parent of a tree node.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "stack")]
pub mod stack;
