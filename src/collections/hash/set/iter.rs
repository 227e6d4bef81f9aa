use std::hash::BuildHasher;
use std::iter::{Chain, FusedIterator};

use super::HashSet;
use crate::collections::hash::table::{IntoKeys, Keys};
use crate::collections::hash::Key;

impl<T: Key, B: BuildHasher> IntoIterator for HashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_keys())
    }
}

/// A type for owned iteration over a [`HashSet`]. Produces values of type `T`.
///
/// See [`HashSet::into_iter`].
pub struct IntoIter<T>(pub(crate) IntoKeys<T, ()>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: Key, B: BuildHasher> IntoIterator for &'a HashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.iter_keys())
    }
}

/// A type for borrowed iteration over a [`HashSet`]. Produces values of type `&T`, in the order
/// of the underlying table's buckets.
///
/// See [`HashSet::iter`].
pub struct Iter<'a, T>(pub(crate) Keys<'a, T, ()>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

/// An iterator over the items of one set that aren't in another.
///
/// See [`HashSet::difference`].
pub struct Difference<'a, T: Key, B: BuildHasher> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) other: &'a HashSet<T, B>,
}

impl<'a, T: Key, B: BuildHasher> Iterator for Difference<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| !other.contains(*item))
    }
}

/// An iterator over the items shared by two sets.
///
/// See [`HashSet::intersection`].
pub struct Intersection<'a, T: Key, B: BuildHasher> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) other: &'a HashSet<T, B>,
}

impl<'a, T: Key, B: BuildHasher> Iterator for Intersection<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| other.contains(*item))
    }
}

/// An iterator over the items of two sets, without repeats.
///
/// See [`HashSet::union`].
pub struct Union<'a, T: Key, B: BuildHasher> {
    pub(crate) inner: Chain<Iter<'a, T>, Difference<'a, T, B>>,
}

impl<'a, T: Key, B: BuildHasher> Iterator for Union<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
