#![cfg(all(feature = "linked", feature = "stack", feature = "binary-tree"))]

use std::collections::VecDeque;

use basic_collections::collections::binary_tree::BinarySearchTree;
use basic_collections::collections::linked::{DoublyLinkedList, SinglyLinkedList};
use basic_collections::collections::stack::Stack;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Something to do to a list, applied to both the list under test and a [`VecDeque`].
#[derive(Copy, Clone, Debug)]
enum ListOp {
    PushFront(i8),
    PushBack(i8),
    PopFront,
    PopBack,
    /// The index is taken modulo a small bound so that some inserts land past the end.
    Insert(u8, i8),
    Remove(u8),
}

impl Arbitrary for ListOp {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3, 4, 5]).unwrap() {
            0 => ListOp::PushFront(i8::arbitrary(g)),
            1 => ListOp::PushBack(i8::arbitrary(g)),
            2 => ListOp::PopFront,
            3 => ListOp::PopBack,
            4 => ListOp::Insert(u8::arbitrary(g) % 16, i8::arbitrary(g)),
            5 => ListOp::Remove(u8::arbitrary(g) % 16),
            _ => unreachable!(),
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum TreeOp {
    Insert(i8),
    Remove(i8),
}

impl Arbitrary for TreeOp {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => TreeOp::Insert(i8::arbitrary(g)),
            1 => TreeOp::Remove(i8::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Runs the same operations on both list types and the model, checking the ends and length after
/// every step.
#[quickcheck]
fn lists_match_vec_deque(ops: Vec<ListOp>) -> bool {
    let mut singly = SinglyLinkedList::new();
    let mut doubly = DoublyLinkedList::new();
    let mut model = VecDeque::new();

    for op in ops {
        let agrees = match op {
            ListOp::PushFront(value) => {
                singly.push_front(value);
                doubly.push_front(value);
                model.push_front(value);
                true
            },
            ListOp::PushBack(value) => {
                singly.push_back(value);
                doubly.push_back(value);
                model.push_back(value);
                true
            },
            ListOp::PopFront => {
                let expected = model.pop_front();
                singly.pop_front() == expected && doubly.pop_front() == expected
            },
            ListOp::PopBack => {
                let expected = model.pop_back();
                singly.pop_back() == expected && doubly.pop_back() == expected
            },
            ListOp::Insert(index, value) => {
                let index = index as usize;
                let valid = index <= model.len();
                if valid {
                    model.insert(index, value);
                }
                singly.try_insert(index, value).is_ok() == valid
                    && doubly.try_insert(index, value).is_ok() == valid
            },
            ListOp::Remove(index) => {
                let index = index as usize;
                let expected = model.remove(index);
                singly.try_remove(index).ok() == expected
                    && doubly.try_remove(index).ok() == expected
            },
        };

        if !agrees
            || singly.len() != model.len()
            || doubly.len() != model.len()
            || singly.front() != model.front()
            || singly.back() != model.back()
            || doubly.front() != model.front()
            || doubly.back() != model.back()
        {
            return false;
        }
    }

    singly.iter().eq(model.iter())
        && doubly.iter().eq(model.iter())
        && doubly.iter().rev().eq(model.iter().rev())
}

/// Checks the tree against a sorted multiset after a random smattering of inserts and removals.
#[quickcheck]
fn tree_matches_sorted_model(ops: Vec<TreeOp>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut model: Vec<i8> = Vec::new();

    for op in ops {
        match op {
            TreeOp::Insert(value) => {
                tree.insert(value);
                let index = model.partition_point(|x| *x <= value);
                model.insert(index, value);
            },
            TreeOp::Remove(value) => {
                let expected = model.iter().position(|x| *x == value).map(|i| model.remove(i));
                if tree.remove(&value) != expected {
                    return false;
                }
            },
        }
    }

    let mut forwards = Vec::new();
    let mut node = tree.min();
    while let Some(current) = node {
        forwards.push(*current.value());
        node = current.successor();
    }

    let mut backwards = Vec::new();
    let mut node = tree.max();
    while let Some(current) = node {
        backwards.push(*current.value());
        node = current.predecessor();
    }
    backwards.reverse();

    tree.len() == model.len()
        && tree.iter().eq(model.iter())
        && forwards == model
        && backwards == model
}

#[quickcheck]
fn tree_finds_only_inserted(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = BinarySearchTree::from_iter(xs.iter().copied());

    xs.iter().all(|x| tree.find(x).map(|node| node.value()) == Some(x))
        && nots.iter().filter(|x| !xs.contains(x)).all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn tree_clone_is_independent(xs: Vec<i8>, removals: Vec<i8>) -> bool {
    let tree = BinarySearchTree::from_iter(xs.iter().copied());
    let mut copy = tree.clone();
    if copy != tree {
        return false;
    }

    for value in &removals {
        copy.remove(value);
    }
    copy.insert(0);

    let mut sorted = xs;
    sorted.sort();
    tree.iter().eq(sorted.iter())
}

#[quickcheck]
fn stack_is_lifo(xs: Vec<i32>) -> bool {
    let mut stack = Stack::new();
    for x in &xs {
        stack.push(*x);
    }

    let mut popped = Vec::new();
    while let Some(x) = stack.pop() {
        popped.push(x);
    }
    popped.reverse();

    popped == xs && stack.pop().is_none()
}
