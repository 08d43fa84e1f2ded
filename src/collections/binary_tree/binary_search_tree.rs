use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use super::{Branch, Iter, NodePtr, NodeRef};

/// An unbalanced binary search tree. Every node links to both of its children and back up to its
/// parent, which lets the tree be walked in order without any auxiliary storage.
///
/// Values that compare less than a node are stored to its left, all others (including duplicates)
/// are stored to its right. The shape of the tree depends entirely on insertion order, so sorted
/// input degrades every operation to `O(n)`.
///
/// # Time Complexity
/// With `n` values stored at a height of `h` (somewhere from `log2 n` up to `n`):
/// - `len` is `O(1)`.
/// - `insert`, `find`, `remove`, `min`, `max`, `successor` and `predecessor` follow a single path
///   and are `O(h)`.
/// - `height`, `clone` and `clear` visit every node and are `O(n)`.
pub struct BinarySearchTree<T> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new BinarySearchTree with no nodes.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new BinarySearchTree with `value` as its root.
    pub fn with_root(value: T) -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(Some(NodePtr::leaf(value, None))),
            len: 1,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a view of the root node, if the tree isn't empty.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        NodeRef::wrap(self.root.0)
    }

    /// Returns the node holding the smallest value in the tree.
    pub fn min(&self) -> Option<NodeRef<'_, T>> {
        self.root().map(|root| root.min())
    }

    /// Returns the node holding the largest value in the tree.
    pub fn max(&self) -> Option<NodeRef<'_, T>> {
        self.root().map(|root| root.max())
    }

    /// Removes the smallest value from the tree and returns it.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.root.is_none() {
            return None;
        }
        self.len -= 1;
        Some(self.root.take_min())
    }

    /// Removes the largest value from the tree and returns it.
    pub fn pop_max(&mut self) -> Option<T> {
        if self.root.is_none() {
            return None;
        }
        self.len -= 1;
        Some(self.root.take_max())
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Removes and drops every value in the tree.
    pub fn clear(&mut self) {
        self.root.free();
        self.len = 0;
    }

    /// Iterates over the values of the tree in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value` as a new leaf, returning a view of its node. Duplicates are kept, each in
    /// its own node.
    pub fn insert(&mut self, value: T) -> NodeRef<'_, T> {
        let node = self.root.insert(None, value);
        self.len += 1;
        NodeRef::new(node)
    }

    /// Returns the first node found holding a value equal to `value`.
    pub fn find<Q>(&self, value: &Q) -> Option<NodeRef<'_, T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        NodeRef::wrap(self.root.find(value))
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.find(value).is_some()
    }

    /// Finds the node holding `value` and returns the node that follows it in order. Returns
    /// [`None`] if `value` isn't in the tree or if it is the maximum.
    pub fn successor<Q>(&self, value: &Q) -> Option<NodeRef<'_, T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(value)?.successor()
    }

    /// Finds the node holding `value` and returns the node that precedes it in order. Returns
    /// [`None`] if `value` isn't in the tree or if it is the minimum.
    pub fn predecessor<Q>(&self, value: &Q) -> Option<NodeRef<'_, T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(value)?.predecessor()
    }

    /// Removes one occurrence of `value` from the tree and returns it, or [`None`] if it isn't
    /// present.
    ///
    /// A node with two children isn't unlinked itself. Instead, it takes the value of its in-order
    /// successor and the successor's node is removed.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = self.root.remove(value);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }
}

impl<T> BinarySearchTree<T> {
    /// Checks every parent link and the ordering of every node, then that the length matches.
    #[cfg(test)]
    pub(crate) fn verify_links(&self)
    where
        T: Ord + Debug,
    {
        // Each entry is a node still to check, the parent it should link to and the bounds its
        // value has to sit between.
        let mut pending: Vec<(Option<NodePtr<T>>, Option<NodePtr<T>>, Option<&T>, Option<&T>)> =
            vec![(self.root.0, None, None, None)];
        let mut count = 0;
        while let Some((link, parent, lower, upper)) = pending.pop() {
            let Some(node) = link else {
                continue;
            };
            count += 1;

            let value: &T = node.value();
            assert!(*node.parent() == parent, "{value:?} should link back to its parent.");
            if let Some(lower) = lower {
                assert!(lower <= value, "{value:?} is left of {lower:?}.");
            }
            if let Some(upper) = upper {
                assert!(value < upper, "{value:?} is right of {upper:?}.");
            }
            pending.push((node.left().0, Some(node), lower, Some(value)));
            pending.push((node.right().0, Some(node), Some(value), upper));
        }

        assert_eq!(count, self.len, "Length should match the number of nodes.");
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BinarySearchTree<T> {
    /// Inserts the values in array order.
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    /// Copies every node, so the clone has exactly the same shape as the original.
    fn clone(&self) -> Self {
        BinarySearchTree {
            root: self.root.deep_clone(None),
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    /// Trees are equal if they have the same shape and equal values in each position. Trees
    /// holding the same values but built in a different order may not be equal.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.root.same_shape(&other.root)
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.root.free();
    }
}

struct Diagram<'a, T>(&'a Branch<T>);

impl<T: Debug> Debug for Diagram<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\n{:?}\n", self.0)
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &Diagram(&self.root))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
