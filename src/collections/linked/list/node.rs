use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box<T> rather than alloc, because dereferencing a Box allows the
// node to be moved back out of the heap in one piece.

pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

// The accessors below hand out references with an unbounded lifetime. Every caller ties that
// lifetime to a borrow of the list that owns the node.
impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The pointer was created from a leaked Box and is only freed through take_node
        // or drop_node, after which the NodePtr is never used again.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As above. The list is borrowed mutably by the caller.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is live, see NodePtr::value.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is live and links are only rewritten while the list is borrowed
        // mutably.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is live, see NodePtr::value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: See NodePtr::prev_mut.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Moves the node back out of the heap, freeing its allocation.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak and this consumes the last handle to it.
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

impl<T> Debug for NodePtr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodePtr").field(&self.0).finish()
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
