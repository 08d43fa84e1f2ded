//! A LIFO [`Stack`] adapter over [`SinglyLinkedList`](crate::collections::linked::SinglyLinkedList).

mod stack;

pub use stack::*;
