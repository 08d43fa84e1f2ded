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

fn assert_contents<T: Debug + PartialEq>(list: &SinglyLinkedList<T>, expected: &[T]) {
    list.verify_links();
    assert_eq!(list.len(), expected.len(), "Length should match the expected contents.");
    assert!(list.iter().eq(expected.iter()), "{list} should contain {expected:?}.");
    assert_eq!(list.front(), expected.first(), "Head should be the first element.");
    assert_eq!(list.back(), expected.last(), "Tail should be the last element.");
}

#[test]
fn test_push_and_pop() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(list.pop_front(), None, "Popping an empty list should return None.");
    assert_eq!(list.pop_back(), None, "Popping an empty list should return None.");

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.push_back(4);
    assert_contents(&list, &[1, 2, 3, 4]);

    assert_eq!(list.pop_back(), Some(4));
    assert_contents(&list, &[1, 2, 3]);
    assert_eq!(list.pop_front(), Some(1));
    assert_contents(&list, &[2, 3]);
    assert_eq!(list.pop_back(), Some(3));
    assert_contents(&list, &[2]);
    assert_eq!(list.pop_back(), Some(2));
    assert_contents(&list, &[]);
    assert_eq!(list.pop_front(), None);

    list.push_front(5);
    list.push_back(6);
    assert_contents(&list, &[5, 6]);
}

#[test]
fn test_insert() {
    let mut list = SinglyLinkedList::from([1, 3]);

    list.insert(1, 2);
    assert_contents(&list, &[1, 2, 3]);

    list.insert(0, 0);
    assert_contents(&list, &[0, 1, 2, 3]);

    list.insert(4, 4);
    assert_contents(&list, &[0, 1, 2, 3, 4]);
    list.push_back(5);
    assert_contents(&list, &[0, 1, 2, 3, 4, 5]);

    assert_eq!(
        list.try_insert(7, 7),
        Err(IndexOutOfBounds { index: 7, len: 6 }),
        "Inserting past the end of the list should fail."
    );
    assert_contents(&list, &[0, 1, 2, 3, 4, 5]);

    assert_panics!({
        SinglyLinkedList::<u8>::new().insert(1, 1);
    });
}

#[test]
fn test_remove_and_replace() {
    let mut list = SinglyLinkedList::from([0, 1, 2, 3, 4]);

    assert_eq!(list.remove(2), 2);
    assert_contents(&list, &[0, 1, 3, 4]);
    assert_eq!(list.remove(3), 4, "Removing the last index should move the tail.");
    assert_contents(&list, &[0, 1, 3]);
    assert_eq!(list.remove(0), 0);
    assert_contents(&list, &[1, 3]);
    assert_eq!(list.try_remove(2), Err(IndexOutOfBounds { index: 2, len: 2 }));

    assert_eq!(list.replace(1, 5), 3);
    assert_eq!(list.replace_front(6), 1);
    assert_contents(&list, &[6, 5]);
    list[1] = 8;
    assert_eq!(list.replace_back(9), 8);
    assert_contents(&list, &[6, 9]);

    let mut empty = SinglyLinkedList::<u8>::new();
    assert_eq!(empty.try_replace_front(1), Err(EmptyContainer));
    assert_eq!(empty.try_replace_back(1), Err(EmptyContainer));
    assert_eq!(empty.try_remove(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
}

#[test]
fn test_append() {
    let mut list = SinglyLinkedList::from([1, 2]);
    list.append(SinglyLinkedList::from([3]));
    assert_contents(&list, &[1, 2, 3]);

    list.push_back(4);
    assert_contents(&list, &[1, 2, 3, 4]);

    let mut empty = SinglyLinkedList::new();
    empty.append(list);
    empty.append(SinglyLinkedList::new());
    assert_contents(&empty, &[1, 2, 3, 4]);
}

#[test]
fn test_clone_is_independent() {
    let list = SinglyLinkedList::from([1, 2, 3]);
    let mut copy = list.clone();
    assert_eq!(list, copy, "A clone should be equal to the original.");

    copy.insert(1, 7);
    copy.pop_back();
    copy[0] = 0;
    assert_contents(&list, &[1, 2, 3]);
    assert_contents(&copy, &[0, 7, 2]);
    assert_ne!(list, copy);
}

#[test]
fn test_iterators() {
    let mut list = SinglyLinkedList::from_iter(1..=4);
    assert!(list.contains(&3));
    assert!(!list.contains(&5));
    assert!(!SinglyLinkedList::<i32>::new().contains(&5));

    for i in &mut list {
        *i += 10;
    }
    assert_contents(&list, &[11, 12, 13, 14]);

    let mut iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&11));
    assert_eq!(iter.len(), 3);

    assert_eq!(
        list.into_iter().collect::<SinglyLinkedList<_>>(),
        SinglyLinkedList::from([11, 12, 13, 14]),
        "Collecting the owned iterator should rebuild an equal list."
    );
}

#[test]
fn test_formatting() {
    let list = SinglyLinkedList::from(["a", "b"]);
    assert_eq!(format!("{list}"), "(\"a\") -> (\"b\")");
    assert_eq!(
        format!("{list:?}"),
        "SinglyLinkedList { contents: [\"a\", \"b\"], len: 2 }"
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list = SinglyLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(6));
    list.pop_back();
    list.remove(2);
    assert_eq!(counter.count(), 2, "Removed elements should be dropped.");

    drop(list);
    assert_eq!(counter.count(), 6, "Every element should be dropped exactly once.");
}

/// Applies random operations to a list and a [`VecDeque`], checking every link in the list after
/// each one.
#[quickcheck]
fn list_keeps_links_under_random_ops(ops: Vec<ListOp>) -> bool {
    let mut list = SinglyLinkedList::new();
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
                list.append(SinglyLinkedList::from_iter(values));
                true
            },
        };

        list.verify_links();
        if !agrees
            || list.len() != model.len()
            || list.front() != model.front()
            || list.back() != model.back()
        {
            return false;
        }
    }

    list.iter().eq(model.iter())
}
