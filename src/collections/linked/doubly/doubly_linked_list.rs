use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, Node, NodePtr};
use crate::collections::linked::{Length, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyContainer, IndexOutOfBounds};
use crate::util::fmt::DebugIter;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions. Every node knows both its successor and its predecessor,
/// so the list can be walked, grown and shrunk from either end.
///
/// # Time Complexity
/// Work at either end is constant: `len`, `front`, `back`, `push_*`, `pop_*` and `append` never
/// walk the list. Indexed operations (`get`, `insert`, `remove` and `replace`) seek from whichever
/// end is nearer, so reaching index `i` of a list of length `n` takes `O(min(i, n - i))`.
/// `contains` checks every element and is `O(n)`.
///
/// # Empty Lists
/// Popping from an empty list isn't an error, [`pop_front`](DoublyLinkedList::pop_front) and
/// [`pop_back`](DoublyLinkedList::pop_back) return [`None`] instead.
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Creates a new DoublyLinkedList containing only `value`, which is both its head and tail.
    pub fn from_value(value: T) -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: ListState::single(value),
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// The element at the head of the list, or [`None`] when the list is empty.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Mutable access to the head element, or [`None`] when the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// The element at the tail of the list, or [`None`] when the list is empty.
    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Mutable access to the tail element, or [`None`] when the list is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Adds the provided element to the front of the DoublyLinkedList, returning a reference to it
    /// in its new position as the head.
    pub fn push_front(&mut self, value: T) -> &mut T {
        let node = match &mut self.state {
            Empty => self.state.init(value),
            Full(contents) => contents.push_front(value),
        };
        node.value_mut()
    }

    /// Adds the provided element to the back of the DoublyLinkedList, returning a reference to it
    /// in its new position as the tail.
    pub fn push_back(&mut self, value: T) -> &mut T {
        let node = match &mut self.state {
            Empty => self.state.init(value),
            Full(contents) => contents.push_back(value),
        };
        node.value_mut()
    }

    /// Unlinks the head and hands back its value. An empty list gives [`None`].
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = head.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The list held at least two nodes, so the old head had a
                        // successor.
                        let new_head = unsafe { node.next.unreachable() };
                        *new_head.prev_mut() = None;
                        *head = new_head;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Unlinks the tail and hands back its value. An empty list gives [`None`].
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let node = tail.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: The list held at least two nodes, so the old tail had a
                        // predecessor.
                        let new_tail = unsafe { node.prev.unreachable() };
                        *new_tail.next_mut() = None;
                        *tail = new_tail;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Borrows the element at `index`. `list[index]` does the same thing.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Borrows the element at `index`, or reports an [`IndexOutOfBounds`] error.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Mutably borrows the element at `index`. `list[index] = value` goes through this.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Mutably borrows the element at `index`, or reports an [`IndexOutOfBounds`] error.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` so that it ends up at `index`, shifting every later element back by one.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the DoublyLinkedList.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] if `index` is greater
    /// than the length of the list. An index equal to the length appends the value.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len();
        match index {
            0 => Ok(self.push_front(value)),
            val if val == len => Ok(self.push_back(value)),
            val => {
                let contents = self.checked_contents_for_index_mut(val)?;
                let prev_node = contents.seek(val - 1);

                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let node = NodePtr::from_node(Node {
                    value,
                    prev: Some(prev_node),
                    next: *prev_node.next(),
                });

                // SAFETY: Inserting strictly inside the list, so the node before `index` has a
                // successor.
                unsafe { *prev_node.next().unreachable().prev_mut() = Some(node); }
                *prev_node.next_mut() = Some(node);

                Ok(node.value_mut())
            },
        }
    }

    /// Removes and returns the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] if it is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;
        match index {
            0 => {
                // SAFETY: The index was checked, so the list isn't empty.
                Ok(unsafe { self.pop_front().unreachable() })
            },
            val if val == contents.last_index() => {
                // SAFETY: As above.
                Ok(unsafe { self.pop_back().unreachable() })
            },
            val => {
                let node = contents.seek(val).take_node();

                // SAFETY: The head and tail were handled above, so this node has neighbours on both
                // sides.
                unsafe {
                    *node.prev.unreachable().next_mut() = node.next;
                    *node.next.unreachable().prev_mut() = node.prev;
                }
                // SAFETY: A single node is both index 0 and the last index, so this node had company.
                contents.len = unsafe { contents.len.checked_sub(1).unreachable() };

                Ok(node.value)
            },
        }
    }

    /// Replaces the element at `index` with `new_value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with `new_value`, returning the old element or an [`Err`]
    /// if `index` is out of bounds.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.checked_seek(index)?.value_mut(), new_value))
    }

    /// Replaces the value stored in the head of the list, returning the old one.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn replace_front(&mut self, new_value: T) -> T {
        self.try_replace_front(new_value).throw()
    }

    /// Replaces the value stored in the head of the list, returning the old one or an [`Err`] if
    /// the list has no head.
    pub fn try_replace_front(&mut self, new_value: T) -> Result<T, EmptyContainer> {
        Ok(mem::replace(self.front_mut().ok_or(EmptyContainer)?, new_value))
    }

    /// Replaces the value stored in the tail of the list, returning the old one.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn replace_back(&mut self, new_value: T) -> T {
        self.try_replace_back(new_value).throw()
    }

    /// Replaces the value stored in the tail of the list, returning the old one or an [`Err`] if
    /// the list has no tail.
    pub fn try_replace_back(&mut self, new_value: T) -> Result<T, EmptyContainer> {
        Ok(mem::replace(self.back_mut().ok_or(EmptyContainer)?, new_value))
    }

    /// Moves all elements of `other` onto the back of this list. No nodes are reallocated.
    ///
    /// # Panics
    /// Panics if the combined length overflows a `usize`.
    pub fn append(&mut self, mut other: DoublyLinkedList<T>) {
        let Full(other_contents) = mem::take(&mut other.state) else {
            return;
        };

        match &mut self.state {
            Empty => self.state = Full(other_contents),
            Full(self_contents) => {
                self_contents.len = self_contents.len
                    .checked_add(other_contents.len.get())
                    .ok_or(CapacityOverflow).throw();

                *self_contents.tail.next_mut() = Some(other_contents.head);
                *other_contents.head.prev_mut() = Some(self_contents.tail);
                self_contents.tail = other_contents.tail;
            },
        }
    }

    /// Removes and drops every element in the list.
    pub fn clear(&mut self) {
        *self = DoublyLinkedList::new();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns true if any element in the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            Full(contents) => Err(IndexOutOfBounds { index, len: contents.len.get() }),
        }
    }

    pub(crate) fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a previous node.");
                let mut count = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                                        assert!(next.prev().unwrap() == curr, "Links should be symmetric.");
                    curr = *next;
                    count += 1;
                }
                assert!(tail == curr, "The tail should be the last reachable node.");
                assert_eq!(count, len.get(), "Length should match the number of nodes.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Seeks from whichever end is closer to `index`.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index, self.head)
        } else {
            self.seek_bwd(self.last_index() - index, self.tail)
        }
    }

    pub fn seek_fwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: Callers seek to an index within the list, so there is always a next node.
            node = unsafe { node.next().unreachable() };
        }
        node
    }

    pub fn seek_bwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: As above, but from the tail.
            node = unsafe { node.prev().unreachable() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) -> NodePtr<T> {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
        node
    }

    pub fn push_back(&mut self, value: T) -> NodePtr<T> {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
        node
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    /// Fills an empty state with a single node, returning it.
    pub fn init(&mut self, value: T) -> NodePtr<T> {
        let contents = ListContents::wrap_one(value);
        let node = contents.head;
        *self = Full(contents);
        node
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(contents) => contents.len.get(),
        }
    }
}

// The state only holds pointers, copying it never duplicates nodes.
impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListContents<T> {}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListState<T> {}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, .. }) => {
                let mut curr = Some(head);
                while let Some(ptr) = curr {
                    curr = ptr.take_node().next;
                }
            },
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ") <-> (")?;
            }
            write!(f, "{item:?}")?;
        }
        write!(f, ")")
    }
}
