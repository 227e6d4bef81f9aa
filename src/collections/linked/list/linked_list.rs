use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::marker::PhantomData;

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Link, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::CapacityOverflow;
use crate::util::fmt::join;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The position of the first item matching a predicate.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `find` | `O(i)` |
/// | `remove_first` | `O(i)` |
/// | `clear` | `O(n)` |
///
/// Every bucket of a [`HashTable`](crate::collections::hash::HashTable) is a LinkedList of
/// entries.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn front(&self) -> Option<&T> {
        self.ends().0.map(|node| node.value())
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.ends().0.map(|mut node| node.value_mut())
    }

    pub fn back(&self) -> Option<&T> {
        self.ends().1.map(|node| node.value())
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.ends().1.map(|mut node| node.value_mut())
    }

    /// Adds `value` before the first element.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => {
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let node = NodePtr::from_node(Node {
                    value,
                    prev: None,
                    next: Some(contents.head),
                });
                *contents.head.prev_mut() = Some(node);
                contents.head = node;
            },
        }
    }

    /// Adds `value` after the last element.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => {
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let node = NodePtr::from_node(Node {
                    value,
                    prev: Some(contents.tail),
                    next: None,
                });
                *contents.tail.next_mut() = Some(node);
                contents.tail = node;
            },
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.ends().0?;
        // SAFETY: The head was just read from this list.
        Some(unsafe { self.state.unlink(head) })
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.ends().1?;
        // SAFETY: The tail was just read from this list.
        Some(unsafe { self.state.unlink(tail) })
    }

    /// Returns a reference to the first element for which `pred` returns true.
    pub fn find<F: FnMut(&T) -> bool>(&self, mut pred: F) -> Option<&T> {
        self.iter().find(|item| pred(item))
    }

    /// Returns a mutable reference to the first element for which `pred` returns true.
    pub fn find_mut<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> Option<&mut T> {
        self.iter_mut().find(|item| pred(item))
    }

    /// Unlinks the first element for which `pred` returns true and returns it. The remaining
    /// elements keep their order.
    pub fn remove_first<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> Option<T> {
        let found = self.nodes().find(|node| pred(node.value()))?;
        // SAFETY: The node was found by walking this list.
        Some(unsafe { self.state.unlink(found) })
    }

    /// Drops every element, leaving the list empty.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns the first and last nodes, if the list isn't empty.
    pub(crate) const fn ends(&self) -> (Link<T>, Link<T>) {
        match &self.state {
            Empty => (None, None),
            Full(ListContents { head, tail, .. }) => (Some(*head), Some(*tail)),
        }
    }

    /// Walks the nodes from head to tail. Nothing may be unlinked while this is in use, because
    /// the successor of a node is read lazily.
    fn nodes(&self) -> impl Iterator<Item = NodePtr<T>> + '_ {
        iter::successors(self.ends().0, |node| *node.next())
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let nodes: Vec<NodePtr<T>> = self.nodes().collect();
        assert_eq!(nodes.len(), self.len(), "Every node should be counted.");

        for pair in nodes.windows(2) {
            assert!(*pair[1].prev() == Some(pair[0]), "Every node should link back.");
        }
        assert!(nodes.first().is_none_or(|head| head.prev().is_none()));
        assert_eq!(nodes.last().copied(), self.ends().1);
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        Full(ListContents {
            len: ONE,
            head: node,
            tail: node,
        })
    }

    /// Takes `node` out of the chain, joining its neighbours, and returns its value.
    ///
    /// # Safety
    /// `node` must belong to this list, and no other handle to it may be used afterwards.
    pub unsafe fn unlink(&mut self, node: NodePtr<T>) -> T {
        let Node { value, prev, next } = node.take_node();

        if let Full(contents) = self {
            match contents.len.checked_sub(1) {
                Some(new_len) => {
                    // SAFETY: At least one node remains, so a node without a predecessor had a
                    // successor and vice versa.
                    unsafe {
                        match prev {
                            Some(prev) => *prev.next_mut() = next,
                            None => contents.head = next.unwrap_unchecked(),
                        }
                        match next {
                            Some(next) => *next.prev_mut() = prev,
                            None => contents.tail = prev.unwrap_unchecked(),
                        }
                    }
                    contents.len = new_len;
                },
                None => *self = Empty,
            }
        }

        value
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({})", join(self.iter().map(|i| format!("{i:?}")), ") -> ("))
    }
}
