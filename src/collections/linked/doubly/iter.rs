use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{DoublyLinkedList, ListContents, ListState, NodePtr};
use crate::util::option::OptionExtension;

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // There is no point rewriting all of this when the iterator can just hold the list and call
    // pop front/back.
    pub(crate) list: DoublyLinkedList<T>,
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

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
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
    // A copy of the list's ends. Only the copy shrinks as elements are yielded, the nodes stay put.
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let (value, next) = self.state.advance_front()?;
        self.state = next;
        Some(value.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (value, next) = self.state.advance_back()?;
        self.state = next;
        Some(value.value_mut())
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
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
        let (value, next) = self.state.advance_front()?;
        self.state = next;
        Some(value.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (value, next) = self.state.advance_back()?;
        self.state = next;
        Some(value.value())
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
    /// Splits a borrowed view of the list into its first node and a view of the rest. The nodes
    /// themselves are never modified.
    fn advance_front(self) -> Option<(NodePtr<T>, ListState<T>)> {
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

    /// The same as `advance_front`, but from the tail.
    fn advance_back(self) -> Option<(NodePtr<T>, ListState<T>)> {
        match self {
            Empty => None,
            Full(ListContents { len, head, tail }) => Some((tail, match len.checked_sub(1) {
                Some(new_len) => Full(ListContents {
                    len: new_len,
                    head,
                    // SAFETY: More than one element was left, so the back node has a predecessor.
                    tail: unsafe { tail.prev().unreachable() },
                }),
                None => Empty,
            })),
        }
    }
}
