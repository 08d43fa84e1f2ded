use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use derive_more::From;

use crate::collections::linked::SinglyLinkedList;
use crate::collections::linked::singly::{IntoIter, Iter};
#[doc(inline)]
pub use crate::util::error::EmptyContainer;
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// A last-in, first-out stack, stored as a [`SinglyLinkedList`] with the top of the stack at the
/// head of the list. Every operation is `O(1)`.
///
/// Popping or peeking an empty Stack returns [`None`]. Converting from a list keeps its head as
/// the top of the Stack.
#[derive(From)]
pub struct Stack<T> {
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new Stack with no elements.
    pub const fn new() -> Stack<T> {
        Stack {
            list: SinglyLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes `value` onto the top of the Stack, returning a reference to it.
    pub fn push(&mut self, value: T) -> &mut T {
        self.list.push_front(value)
    }

    /// Removes the top element and returns it, if the Stack isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Returns a reference to the top element without removing it.
    pub fn top(&self) -> Option<&T> {
        self.list.front()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    /// Replaces the top element with `new_value`, returning the old one.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    pub fn replace_top(&mut self, new_value: T) -> T {
        self.try_replace_top(new_value).throw()
    }

    /// Replaces the top element with `new_value`, returning the old one or an [`Err`] if the Stack
    /// is empty.
    pub fn try_replace_top(&mut self, new_value: T) -> Result<T, EmptyContainer> {
        Ok(mem::replace(self.top_mut().ok_or(EmptyContainer)?, new_value))
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterates over the Stack from the top down.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> From<Stack<T>> for SinglyLinkedList<T> {
    fn from(stack: Stack<T>) -> Self {
        stack.list
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            list: self.list.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top", &self.top())
            .field("contents", &DebugIter(self.iter()))
            .finish()
    }
}

impl<T: Debug> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{item:?}")?;
        }
        write!(f, "]")
    }
}
