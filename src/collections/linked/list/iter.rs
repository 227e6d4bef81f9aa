use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{LinkedList, Link};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// Owned iteration over a [`LinkedList`], which pops from either end. Elements that are never
/// yielded are dropped with the iterator.
pub struct IntoIter<T>(pub(crate) LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// A pair of cursors walking towards each other from both ends of a list. The number of
/// remaining elements decides when they have met, so the cursors are never compared.
pub(crate) struct Cursors<T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
}

impl<T> Cursors<T> {
    fn over(list: &LinkedList<T>) -> Cursors<T> {
        let (front, back) = list.ends();
        Cursors {
            front,
            back,
            remaining: list.len(),
        }
    }

    fn step_front(&mut self) -> Link<T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.front = *node.next();
        self.remaining -= 1;
        Some(node)
    }

    fn step_back(&mut self) -> Link<T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.back = *node.prev();
        self.remaining -= 1;
        Some(node)
    }
}

impl<T> Clone for Cursors<T> {
    fn clone(&self) -> Self {
        Cursors {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            cursors: Cursors::over(self),
            _phantom: PhantomData,
        }
    }
}

/// Borrowed iteration over a [`LinkedList`]. Produces values of type `&T`.
pub struct Iter<'a, T> {
    pub(crate) cursors: Cursors<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursors.step_front().map(|node| node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursors.remaining, Some(self.cursors.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cursors.step_back().map(|node| node.value())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            cursors: self.cursors.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            cursors: Cursors::over(self),
            _phantom: PhantomData,
        }
    }
}

/// Mutable iteration over a [`LinkedList`]. Only the values are handed out, the links are never
/// touched.
pub struct IterMut<'a, T> {
    pub(crate) cursors: Cursors<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // Each node is yielded once, so the mutable references never alias.
        self.cursors.step_front().map(|mut node| node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursors.remaining, Some(self.cursors.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cursors.step_back().map(|mut node| node.value_mut())
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
