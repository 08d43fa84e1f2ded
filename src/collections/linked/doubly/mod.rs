//! A list with links in both directions, see [`DoublyLinkedList`].

mod doubly_linked_list;
mod iter;
mod node;
mod tests;

pub use doubly_linked_list::*;
pub use iter::*;
pub(crate) use node::*;
