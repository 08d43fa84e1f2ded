#![cfg(feature = "linked")]

use derive_more::{Display, Error};

/// An index was outside of the range permitted by the operation. For lookups and removals that is
/// `0..len`, for insertions it is `0..=len`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// An operation required an element, but the collection was empty.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Attempted to access an element of an empty collection!")]
pub struct EmptyContainer;

/// The length of a collection can't be represented by a `usize`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
