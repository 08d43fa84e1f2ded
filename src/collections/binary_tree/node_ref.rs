use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::{Branch, NodePtr};

/// A read-only view of a single node in a [`BinarySearchTree`](super::BinarySearchTree).
///
/// A NodeRef borrows the tree it came from, so the tree can't be modified while any NodeRef into
/// it is alive. Navigating with [`left`](NodeRef::left), [`right`](NodeRef::right),
/// [`parent`](NodeRef::parent), [`successor`](NodeRef::successor) and
/// [`predecessor`](NodeRef::predecessor) is done entirely through the node's own links.
pub struct NodeRef<'a, T> {
    pub(crate) node: NodePtr<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) const fn new(node: NodePtr<T>) -> NodeRef<'a, T> {
        NodeRef {
            node,
            _phantom: PhantomData,
        }
    }

    pub(crate) fn wrap(link: Option<NodePtr<T>>) -> Option<NodeRef<'a, T>> {
        link.map(NodeRef::new)
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &'a T {
        self.node.value()
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        NodeRef::wrap(self.node.left().0)
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        NodeRef::wrap(self.node.right().0)
    }

    /// Returns the node above this one, or [`None`] for the root of the tree.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        NodeRef::wrap(*self.node.parent())
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    pub fn is_root(&self) -> bool {
        self.node.parent().is_none()
    }

    /// Searches the subtree rooted at this node for `value`.
    pub fn find<Q>(&self, value: &Q) -> Option<NodeRef<'a, T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        NodeRef::wrap(Branch(Some(self.node)).find(value))
    }

    /// Returns the smallest node in the subtree rooted at this node, which may be the node itself.
    pub fn min(&self) -> NodeRef<'a, T> {
        NodeRef::new(self.node.min())
    }

    /// Returns the largest node in the subtree rooted at this node, which may be the node itself.
    pub fn max(&self) -> NodeRef<'a, T> {
        NodeRef::new(self.node.max())
    }

    /// Returns the next node in order across the whole tree, or [`None`] if this is the maximum.
    pub fn successor(&self) -> Option<NodeRef<'a, T>> {
        NodeRef::wrap(self.node.successor())
    }

    /// Returns the previous node in order across the whole tree, or [`None`] if this is the
    /// minimum.
    pub fn predecessor(&self) -> Option<NodeRef<'a, T>> {
        NodeRef::wrap(self.node.predecessor())
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    /// Two NodeRefs are equal if they view the same node, regardless of its value.
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: Debug> Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(self.value()).finish()
    }
}
