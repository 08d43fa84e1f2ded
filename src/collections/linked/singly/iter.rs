use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{ListContents, ListState, NodePtr, SinglyLinkedList};
use crate::util::option::OptionExtension;

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            state: self.state,
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    // A copy of the list's state that is advanced in place of the list. The nodes are never
    // modified.
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let (value, next) = self.state.advance()?;
        self.state = next;
        Some(value.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            state: self.state,
            _phantom: PhantomData,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (value, next) = self.state.advance()?;
        self.state = next;
        Some(value.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            state: self.state,
            _phantom: PhantomData,
        }
    }
}

impl<T> ListState<T> {
    /// Splits a borrowed view of the list into its first node and a view of the rest.
    fn advance(self) -> Option<(NodePtr<T>, ListState<T>)> {
        match self {
            Empty => None,
            Full(ListContents { len, head, tail }) => Some((head, match len.checked_sub(1) {
                Some(new_len) => Full(ListContents {
                    len: new_len,
                    // SAFETY: More than one element was left, so the front node has a successor.
                    head: unsafe { head.next().unreachable() },
                    tail,
                }),
                None => Empty,
            })),
        }
    }
}
