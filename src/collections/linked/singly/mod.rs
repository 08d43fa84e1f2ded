//! A list with forward links only, see [`SinglyLinkedList`].

mod iter;
mod node;
mod singly_linked_list;
mod tests;

pub use iter::*;
pub(crate) use node::*;
pub use singly_linked_list::*;
