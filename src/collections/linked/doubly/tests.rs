#![cfg(test)]

use std::collections::VecDeque;
use std::fmt::Debug;
use std::iter;

use quickcheck_macros::quickcheck;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::{EmptyContainer, IndexOutOfBounds};
use crate::util::panic::assert_panics;
use crate::util::quick::ListOp;

fn assert_contents<T: Debug + PartialEq>(list: &DoublyLinkedList<T>, expected: &[T]) {
    list.verify_double_links();
    assert_eq!(list.len(), expected.len(), "Length should match the expected contents.");
    assert!(list.iter().eq(expected.iter()), "{list} should contain {expected:?}.");
    assert!(
        list.iter().rev().eq(expected.iter().rev()),
        "{list} should contain {expected:?} when iterated backwards."
    );
}

#[test]
fn test_push_and_pop() {
    let mut list = DoublyLinkedList::new();
    assert_eq!(list.pop_front(), None, "Popping an empty list should return None.");
    assert_eq!(list.pop_back(), None, "Popping an empty list should return None.");

    list.push_front(2);
    list.push_front(1);
    list.push_back(3);
    assert_contents(&list, &[1, 2, 3]);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    assert_eq!(list.pop_back(), Some(3));
    assert_contents(&list, &[1, 2]);
    assert_eq!(list.pop_front(), Some(1));
    assert_contents(&list, &[2]);
    assert_eq!(list.front(), list.back(), "A single node should be both head and tail.");

    assert_eq!(list.pop_back(), Some(2));
    assert_contents(&list, &[]);
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);

    list.push_back(4);
    assert_contents(&list, &[4]);
}

#[test]
fn test_push_returns_new_end() {
    let mut list = DoublyLinkedList::from_value(1);
    *list.push_front(5) *= 2;
    *list.push_back(7) += 1;
    assert_contents(&list, &[10, 1, 8]);
}

#[test]
fn test_insert() {
    let mut list = DoublyLinkedList::from([1, 3, 5]);

    list.insert(1, 2);
    assert_contents(&list, &[1, 2, 3, 5]);

    list.insert(3, 4);
    assert_contents(&list, &[1, 2, 3, 4, 5]);

    list.insert(0, 0);
    assert_contents(&list, &[0, 1, 2, 3, 4, 5]);

    list.insert(6, 6);
    assert_contents(&list, &[0, 1, 2, 3, 4, 5, 6]);

    assert_eq!(
        list.try_insert(8, 8),
        Err(IndexOutOfBounds { index: 8, len: 7 }),
        "Inserting past the end of the list should fail."
    );
    assert_contents(&list, &[0, 1, 2, 3, 4, 5, 6]);

    let mut empty = DoublyLinkedList::new();
    assert!(empty.try_insert(1, 0).is_err());
    assert_eq!(*empty.insert(0, 0), 0, "Inserting at 0 should work for an empty list.");
    assert_contents(&empty, &[0]);

    assert_panics!({
        let mut list = DoublyLinkedList::from([1, 2]);
        list.insert(3, 3);
    });
}

#[test]
fn test_remove_and_replace() {
    let mut list = DoublyLinkedList::from([0, 1, 2, 3, 4, 5]);

    assert_eq!(list.remove(2), 2);
    assert_contents(&list, &[0, 1, 3, 4, 5]);
    assert_eq!(list.remove(0), 0);
    assert_contents(&list, &[1, 3, 4, 5]);
    assert_eq!(list.remove(3), 5);
    assert_contents(&list, &[1, 3, 4]);
    assert_eq!(list.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    assert_eq!(list.replace(1, 9), 3);
    assert_contents(&list, &[1, 9, 4]);
    assert_eq!(list[2], 4, "Indexing from the back half should work.");
    list[0] = 7;
    assert_contents(&list, &[7, 9, 4]);

    assert_eq!(list.replace_front(0), 7);
    assert_eq!(list.replace_back(8), 4);
    assert_contents(&list, &[0, 9, 8]);

    let mut empty = DoublyLinkedList::<u8>::new();
    assert_eq!(empty.try_replace_front(1), Err(EmptyContainer));
    assert_eq!(empty.try_replace_back(1), Err(EmptyContainer));
    assert_eq!(empty.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_panics!({
        DoublyLinkedList::<u8>::new().replace_front(1);
    });
}

#[test]
fn test_get_seeks_from_both_ends() {
    let list = DoublyLinkedList::from_iter(0..9);
    for i in 0..9 {
        assert_eq!(list.get(i), &i, "Every index should be reachable.");
    }
    assert_eq!(list.try_get(9), Err(IndexOutOfBounds { index: 9, len: 9 }));
}

#[test]
fn test_append() {
    let mut list = DoublyLinkedList::from([1, 2]);
    list.append(DoublyLinkedList::from([3, 4]));
    assert_contents(&list, &[1, 2, 3, 4]);

    list.append(DoublyLinkedList::new());
    assert_contents(&list, &[1, 2, 3, 4]);

    let mut empty = DoublyLinkedList::new();
    empty.append(list);
    assert_contents(&empty, &[1, 2, 3, 4]);
}

#[test]
fn test_clone_is_independent() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    let mut copy = list.clone();
    assert_eq!(list, copy, "A clone should be equal to the original.");

    copy.push_back(4);
    copy[0] = 10;
    copy.pop_front();
    assert_contents(&list, &[1, 2, 3]);
    assert_contents(&copy, &[2, 3, 4]);

    list.clear();
    assert_contents(&list, &[]);
    assert_contents(&copy, &[2, 3, 4]);
}

#[test]
fn test_contains_and_iter_mut() {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    assert!(list.contains(&2));
    assert!(!list.contains(&4));
    assert!(!DoublyLinkedList::new().contains(&4));

    for i in list.iter_mut() {
        *i *= 2;
    }
    assert_contents(&list, &[2, 4, 6]);

    let mut iter = list.iter_mut();
    assert_eq!(iter.next_back(), Some(&mut 6));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(&mut 2));
    assert_eq!(iter.next_back(), Some(&mut 4));
    assert_eq!(iter.next(), None);

    let mut into_iter = list.into_iter();
    assert_eq!(into_iter.next_back(), Some(6));
    assert_eq!(into_iter.next(), Some(2));
    assert_eq!(into_iter.len(), 1);
}

#[test]
fn test_formatting() {
    let list = DoublyLinkedList::from([1, 2, 3]);
    assert_eq!(format!("{list}"), "(1) <-> (2) <-> (3)");
    assert_eq!(format!("{}", DoublyLinkedList::<u8>::new()), "()");
    assert_eq!(
        format!("{list:?}"),
        "DoublyLinkedList { contents: [1, 2, 3], len: 3 }"
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list = DoublyLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(10));
    list.remove(4);
    list.pop_back();
    list.pop_front();
    assert_eq!(counter.count(), 3, "Removed elements should be dropped.");

    drop(list);
    assert_eq!(counter.count(), 10, "Every element should be dropped exactly once.");

    let counter = CountedDrop::new(0);
    let mut list = DoublyLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(4));
    list.append(DoublyLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(4)));
    assert_eq!(counter.count(), 0, "Appending shouldn't drop anything.");
    list.clear();
    assert_eq!(counter.count(), 8, "Clearing should drop every element.");
}

/// Applies random operations to a list and a [`VecDeque`], checking every link in the list after
/// each one.
#[quickcheck]
fn list_keeps_links_under_random_ops(ops: Vec<ListOp>) -> bool {
    let mut list = DoublyLinkedList::new();
    let mut model = VecDeque::new();

    for op in ops {
        let agrees = match op {
            ListOp::PushFront(value) => {
                model.push_front(value);
                *list.push_front(value) == value
            },
            ListOp::PushBack(value) => {
                model.push_back(value);
                *list.push_back(value) == value
            },
            ListOp::PopFront => list.pop_front() == model.pop_front(),
            ListOp::PopBack => list.pop_back() == model.pop_back(),
            ListOp::Insert(index, value) => {
                let valid = index <= model.len();
                if valid {
                    model.insert(index, value);
                }
                list.try_insert(index, value).is_ok() == valid
            },
            ListOp::Remove(index) => list.try_remove(index).ok() == model.remove(index),
            ListOp::Append(count) => {
                let values: Vec<i8> = (0..count as i8).collect();
                model.extend(values.iter().copied());
                list.append(DoublyLinkedList::from_iter(values));
                true
            },
        };

        list.verify_double_links();
        if !agrees
            || list.len() != model.len()
            || list.front() != model.front()
            || list.back() != model.back()
        {
            return false;
        }
    }

    list.iter().eq(model.iter()) && list.iter().rev().eq(model.iter().rev())
}
