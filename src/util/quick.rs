#![cfg(test)]

use quickcheck::{Arbitrary, Gen};

/// A random step to apply to a list and to a `VecDeque` model of it.
#[cfg(feature = "linked")]
#[derive(Copy, Clone, Debug)]
pub enum ListOp {
    PushFront(i8),
    PushBack(i8),
    PopFront,
    PopBack,
    /// Indices are kept small so that some of them land on, or just past, the end.
    Insert(usize, i8),
    Remove(usize),
    Append(u8),
}

#[cfg(feature = "linked")]
impl Arbitrary for ListOp {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3, 4, 5, 6]).unwrap() {
            0 => ListOp::PushFront(i8::arbitrary(g)),
            1 => ListOp::PushBack(i8::arbitrary(g)),
            2 => ListOp::PopFront,
            3 => ListOp::PopBack,
            4 => ListOp::Insert(usize::from(u8::arbitrary(g) % 12), i8::arbitrary(g)),
            5 => ListOp::Remove(usize::from(u8::arbitrary(g) % 12)),
            6 => ListOp::Append(u8::arbitrary(g) % 4),
            _ => unreachable!(),
        }
    }
}

/// A random step to apply to a tree and to a sorted `Vec` model of it.
#[cfg(feature = "binary-tree")]
#[derive(Copy, Clone, Debug)]
pub enum TreeOp {
    Insert(i8),
    Remove(i8),
    PopMin,
    PopMax,
}

#[cfg(feature = "binary-tree")]
impl Arbitrary for TreeOp {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2, 3]).unwrap() {
            0 => TreeOp::Insert(i8::arbitrary(g)),
            1 => TreeOp::Remove(i8::arbitrary(g)),
            2 => TreeOp::PopMin,
            3 => TreeOp::PopMax,
            _ => unreachable!(),
        }
    }
}
