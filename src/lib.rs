//! Classic node-based containers: a singly-linked list, a doubly-linked list, a stack built on the
//! singly-linked list and an unbalanced binary search tree with parent links.
//!
//! # Purpose
//! These are reference implementations of the textbook data structures, written to show how their
//! links are maintained rather than to compete with [`std::collections`]. Every node is a separate
//! heap allocation that the owning container links to through raw pointers, so that a node can be
//! reached from more than one place (the tail of a list, the parent of a tree node).
//!
//! # Error Handling
//! Operations that can't succeed on an empty container, like popping, return an [`Option`].
//! Operations that take an index come in two forms: `try_*` methods return a [`Result`] with a
//! strongly typed error that implements [`Error`](std::error::Error), and the plain methods panic
//! with that error's message instead. Overflowing the length of a collection is always a panic.
//!
//! # Features
//! Each collection can be enabled on its own: `linked`, `stack` (which requires `linked`) and
//! `binary-tree`. All of them are enabled by default through `collections-all`.
//!
//! # Dependencies
//! This crate only depends on some derive macros, because they remove the need for some very
//! repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
