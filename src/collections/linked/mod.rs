//! Linked collection types: [`SinglyLinkedList`] and [`DoublyLinkedList`].
//!
//! Both lists own their nodes through raw pointers and keep a head pointer, a tail pointer and a
//! length, which are kept consistent by every operation. An empty list is its own state rather
//! than a list with a length of zero.

pub mod doubly;
mod length;
pub mod singly;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
pub(crate) use length::*;
#[doc(inline)]
pub use singly::SinglyLinkedList;
