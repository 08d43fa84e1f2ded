use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ptr::NonNull;

use crate::util::option::OptionExtension;

pub(crate) type Link<T> = Option<NodePtr<T>>;

pub(crate) struct NodePtr<T>(NonNull<TreeNode<T>>);

pub(crate) struct TreeNode<T> {
    pub value: T,
    pub left: Branch<T>,
    pub right: Branch<T>,
    // Non-owning, only ever used to walk back up the tree.
    pub parent: Link<T>,
}

/// An owning slot for a subtree: the root of the tree or either child of a node. Operations on a
/// Branch start from the node it holds and walk down through child slots (or around the subtree
/// with parent links), relinking whichever slot holds a node that is removed. None of them recurse,
/// so a chain-shaped tree is as safe to work with as a balanced one.
pub(crate) struct Branch<T>(pub Link<T>);

/// A move made by a pre-order walk, see [`NodePtr::pre_order_next`].
pub(crate) enum Step<T> {
    /// Down into the left child.
    Left(NodePtr<T>),
    /// Up `up` levels, then down into the right child of the node reached.
    Right { up: usize, node: NodePtr<T> },
}

impl<T> Step<T> {
    pub fn node(&self) -> NodePtr<T> {
        match self {
            Step::Left(node) | Step::Right { node, .. } => *node,
        }
    }

    pub fn up(&self) -> usize {
        match self {
            Step::Left(_) => 0,
            Step::Right { up, .. } => *up,
        }
    }
}

impl<T> NodePtr<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodePtr is only held by the tree that allocated it, and the node stays
        // allocated until that tree takes it back out.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As above.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn left<'a>(&self) -> &'a Branch<T> {
        // SAFETY: As above.
        unsafe { &(*self.0.as_ptr()).left }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn left_mut<'a>(&self) -> &'a mut Branch<T> {
        // SAFETY: As above.
        unsafe { &mut (*self.0.as_ptr()).left }
    }

    pub fn right<'a>(&self) -> &'a Branch<T> {
        // SAFETY: As above.
        unsafe { &(*self.0.as_ptr()).right }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn right_mut<'a>(&self) -> &'a mut Branch<T> {
        // SAFETY: As above.
        unsafe { &mut (*self.0.as_ptr()).right }
    }

    pub fn parent<'a>(&self) -> &'a Link<T> {
        // SAFETY: As above.
        unsafe { &(*self.0.as_ptr()).parent }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn parent_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As above.
        unsafe { &mut (*self.0.as_ptr()).parent }
    }

    pub fn from_node(node: TreeNode<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn leaf(value: T, parent: Link<T>) -> NodePtr<T> {
        NodePtr::from_node(TreeNode {
            value,
            left: Branch(None),
            right: Branch(None),
            parent,
        })
    }

    /// Moves the node back out of the heap, freeing its allocation. The pointer (and every copy of
    /// it) is dangling afterwards.
    pub fn take_node(self) -> TreeNode<T> {
        // SAFETY: The pointer was created by Box::leak in from_node, and each node is taken at
        // most once by the tree that owns it.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }

    /// Returns the leftmost node of the subtree rooted here.
    pub fn min(self) -> NodePtr<T> {
        let mut node = self;
        while let Some(left) = node.left().0 {
            node = left;
        }
        node
    }

    /// Returns the rightmost node of the subtree rooted here.
    pub fn max(self) -> NodePtr<T> {
        let mut node = self;
        while let Some(right) = node.right().0 {
            node = right;
        }
        node
    }

    /// Returns the node that follows this one in order. That's the minimum of the right subtree if
    /// there is one, otherwise the first ancestor that this node is to the left of.
    pub fn successor(self) -> Link<T> {
        if let Some(right) = self.right().0 {
            return Some(right.min());
        }

        let mut child = self;
        while let Some(parent) = *child.parent() {
            if parent.left().0 == Some(child) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }

    /// Returns the step to the node after this one in a pre-order walk of the subtree rooted at
    /// `root`, using parent links instead of a stack. Returns [`None`] once the walk is complete.
    pub fn pre_order_next(self, root: NodePtr<T>) -> Option<Step<T>> {
        if let Some(left) = self.left().0 {
            return Some(Step::Left(left));
        }
        if let Some(right) = self.right().0 {
            return Some(Step::Right { up: 0, node: right });
        }

        let mut child = self;
        let mut up = 0;
        while child != root {
            // SAFETY: Every node below the root of the walk has a parent.
            let parent = unsafe { child.parent().unreachable() };
            up += 1;
            if parent.left().0 == Some(child) {
                if let Some(right) = parent.right().0 {
                    return Some(Step::Right { up, node: right });
                }
            }
            child = parent;
        }
        None
    }

    /// The mirror image of [`successor`](NodePtr::successor).
    pub fn predecessor(self) -> Link<T> {
        if let Some(left) = self.left().0 {
            return Some(left.max());
        }

        let mut child = self;
        while let Some(parent) = *child.parent() {
            if parent.right().0 == Some(child) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }
}

impl<T> Branch<T> {
    /// Inserts `value` as a new leaf below this branch. Values less than a node go to its left,
    /// everything else (including equal values) goes to its right.
    pub fn insert(&mut self, parent: Link<T>, value: T) -> NodePtr<T>
    where
        T: Ord,
    {
        let mut parent = parent;
        let mut branch = self;
        while let Some(node) = branch.0 {
            parent = Some(node);
            branch = match value.cmp(node.value()) {
                Ordering::Less => node.left_mut(),
                Ordering::Equal | Ordering::Greater => node.right_mut(),
            };
        }

        let node = NodePtr::leaf(value, parent);
        branch.0 = Some(node);
        node
    }

    pub fn find<Q>(&self, value: &Q) -> Link<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // The empty check has to come first, an empty branch has no value to compare against.
        let mut curr = self.0;
        while let Some(node) = curr {
            curr = match value.cmp(node.value().borrow()) {
                Ordering::Less => node.left().0,
                Ordering::Greater => node.right().0,
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Removes the first node matching `value` from this subtree and returns its value.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;
        while let Some(node) = branch.0 {
            match value.cmp(node.value().borrow()) {
                Ordering::Less => branch = node.left_mut(),
                Ordering::Greater => branch = node.right_mut(),
                Ordering::Equal => return Some(branch.remove_root()),
            }
        }
        None
    }

    /// Unlinks the node held directly by this branch, returning its value. A node with one child
    /// is replaced by that child. A node with two children stays in place and takes the value of
    /// its successor, whose own node is removed from the right subtree instead.
    ///
    /// The branch must not be empty.
    pub fn remove_root(&mut self) -> T {
        // SAFETY: Callers only remove from a branch that they've just matched as non-empty.
        let node = unsafe { self.0.unreachable() };
        match (node.left().0, node.right().0) {
            (None, None) => {
                self.0 = None;
                node.take_node().value
            },
            (Some(child), None) | (None, Some(child)) => {
                *child.parent_mut() = *node.parent();
                self.0 = Some(child);
                node.take_node().value
            },
            (Some(_), Some(_)) => {
                let successor = node.right_mut().take_min();
                mem::replace(node.value_mut(), successor)
            },
        }
    }

    /// Removes the leftmost node of this branch and returns its value. The branch must not be
    /// empty.
    pub fn take_min(&mut self) -> T {
        let mut branch = self;
        loop {
            // SAFETY: Callers only take from a non-empty branch, and the walk only moves into a
            // left child that exists.
            let node = unsafe { branch.0.unreachable() };
            if node.left().is_none() {
                return branch.remove_root();
            }
            branch = node.left_mut();
        }
    }

    /// Removes the rightmost node of this branch and returns its value. The branch must not be
    /// empty.
    pub fn take_max(&mut self) -> T {
        let mut branch = self;
        loop {
            // SAFETY: As above.
            let node = unsafe { branch.0.unreachable() };
            if node.right().is_none() {
                return branch.remove_root();
            }
            branch = node.right_mut();
        }
    }

    pub fn height(&self) -> usize {
        let Some(root) = self.0 else {
            return 0;
        };

        let mut height = 1;
        let mut depth = 1;
        let mut node = root;
        while let Some(step) = node.pre_order_next(root) {
            depth = depth + 1 - step.up();
            height = cmp::max(height, depth);
            node = step.node();
        }
        height
    }

    /// Allocates a copy of every node in this branch, with the new root pointing at `parent`.
    ///
    /// The copy is built in the same pre-order walk as the original is read, so the cursor into
    /// the copy climbs exactly as far as the original's walk does before each right turn.
    pub fn deep_clone(&self, parent: Link<T>) -> Branch<T>
    where
        T: Clone,
    {
        let Some(root) = self.0 else {
            return Branch(None);
        };

        let copy_root = NodePtr::leaf(root.value().clone(), parent);
        let mut node = root;
        let mut copy = copy_root;
        while let Some(step) = node.pre_order_next(root) {
            node = step.node();
            match step {
                Step::Left(_) => {
                    let child = NodePtr::leaf(node.value().clone(), Some(copy));
                    *copy.left_mut() = Branch(Some(child));
                    copy = child;
                },
                Step::Right { up, .. } => {
                    for _ in 0..up {
                        // SAFETY: The copy mirrors the original, which just climbed this far
                        // without leaving the subtree.
                        copy = unsafe { copy.parent().unreachable() };
                    }
                    let child = NodePtr::leaf(node.value().clone(), Some(copy));
                    *copy.right_mut() = Branch(Some(child));
                    copy = child;
                },
            }
        }
        Branch(Some(copy_root))
    }

    /// Returns true if both branches have the same shape and hold equal values at each position.
    pub fn same_shape(&self, other: &Branch<T>) -> bool
    where
        T: PartialEq,
    {
        let (a_root, b_root) = match (self.0, other.0) {
            (Some(a), Some(b)) => (a, b),
            (None, None) => return true,
            _ => return false,
        };

        let mut a = a_root;
        let mut b = b_root;
        loop {
            // With matching children at every node, both walks take the same steps.
            if a.value() != b.value()
                || a.left().is_none() != b.left().is_none()
                || a.right().is_none() != b.right().is_none()
            {
                return false;
            }

            match (a.pre_order_next(a_root), b.pre_order_next(b_root)) {
                (Some(a_step), Some(b_step)) => {
                    a = a_step.node();
                    b = b_step.node();
                },
                (None, None) => return true,
                _ => return false,
            }
        }
    }

    /// Frees every node in this branch, leaving it empty. Children are detached before they're
    /// visited, so a node is freed once both of its slots are empty and the walk continues from its
    /// parent.
    pub fn free(&mut self) {
        let Some(root) = self.0.take() else {
            return;
        };
        let stop = *root.parent();

        let mut curr = Some(root);
        while let Some(node) = curr {
            if let Some(left) = node.left_mut().0.take() {
                curr = Some(left);
            } else if let Some(right) = node.right_mut().0.take() {
                curr = Some(right);
            } else {
                curr = *node.parent();
                drop(node.take_node());
                if curr == stop {
                    break;
                }
            }
        }
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

fn prefix_lines(text: &str, prefix: &str) -> String {
    let mut out = String::new();
    for (index, line) in text.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(prefix);
        out.push_str(line);
    }
    out
}

impl<T: Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?})\n{}",
                prefix_lines(&format!("{:?}", node.left()), "┌    "),
                node.value(),
                prefix_lines(&format!("{:?}", node.right()), "└    "),
            ),
            None => write!(f, "-"),
        }
    }
}
