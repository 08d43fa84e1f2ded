use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> NodePtr<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodePtr is only held by the list that allocated it, and the node stays
        // allocated until that list takes it back out.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As above.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As above.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As above.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back out of the heap, freeing its allocation. The pointer (and every copy of
    /// it) is dangling afterwards.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by Box::leak in from_node, and each node is taken at
        // most once by the list that owns it.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
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
