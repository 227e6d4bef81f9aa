use std::hash::BuildHasher;
use std::iter::{Flatten, FusedIterator};
use std::slice::IterMut as SliceIterMut;
use std::vec::IntoIter as VecIntoIter;

use super::{Bucket, Entry, HashTable, IteratorExhausted};
use crate::collections::hash::Key;
use crate::collections::linked::list::Iter as ChainIter;

impl<K: Key, V, B: BuildHasher> IntoIterator for HashTable<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.arr.into_vec().into_iter().flatten().flatten(),
        }
    }
}

pub struct IntoIter<K, V> {
    pub(crate) inner: Flatten<Flatten<VecIntoIter<Bucket<K, V>>>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::into_pair)
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

/// A borrowed iterator over the entries of a [`HashTable`], in bucket order and then chain order.
///
/// Iteration is a small state machine over a position made of a bucket index and a cursor into
/// that bucket's chain:
/// - Before the first call to [`advance`](Iter::advance), the iterator hasn't started.
/// - While entries remain, it is inside a bucket, with or without a cursor into the chain.
/// - Once the bucket index passes the last bucket, it is exhausted and stays that way until
///   [`begin`](Iter::begin) is called.
///
/// The iterator borrows the table's buckets, so the table can't be modified until it is dropped.
pub struct Iter<'a, K, V> {
    pub(crate) buckets: &'a [Bucket<K, V>],
    pub(crate) state: IterState<'a, K, V>,
}

pub(crate) enum IterState<'a, K, V> {
    NotStarted,
    InBucket {
        index: usize,
        chain: Option<ChainIter<'a, Entry<K, V>>>,
    },
    Exhausted,
}

use IterState::*;

impl<'a, K, V> Iter<'a, K, V> {
    /// Moves the iterator back to the start of the first bucket, without a cursor into its chain.
    pub fn begin(&mut self) {
        self.state = InBucket {
            index: 0,
            chain: None,
        };
    }

    /// Returns true once every entry has been yielded.
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.state, Exhausted)
    }

    /// Yields the next entry, skipping over empty buckets and used-up chains. Returns an [`Err`]
    /// once every entry has been yielded, and on every call after that.
    pub fn advance(&mut self) -> Result<(&'a K, &'a V), IteratorExhausted> {
        let buckets = self.buckets;

        loop {
            match &mut self.state {
                Exhausted => return Err(IteratorExhausted),
                NotStarted => self.begin(),
                InBucket { index, chain } => {
                    if let Some(entry) = chain.as_mut().and_then(Iterator::next) {
                        return Ok((&entry.key, &entry.value));
                    }

                    // A used-up chain means this bucket is done.
                    if chain.is_some() {
                        *index += 1;
                        *chain = None;
                    }

                    match buckets.get(*index) {
                        None => self.state = Exhausted,
                        Some(None) => *index += 1,
                        Some(Some(list)) => *chain = Some(list.iter()),
                    }
                },
            }
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().ok()
    }
}

pub struct IntoKeys<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }
}

/// A borrowed iterator over the keys of a [`HashTable`]. See [`Iter`] for the iteration order and
/// protocol.
pub struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Keys<'a, K, V> {
    /// Moves the iterator back to the first bucket.
    pub fn begin(&mut self) {
        self.0.begin()
    }

    /// Yields the next key, or an [`Err`] if every key has been yielded.
    pub fn advance(&mut self) -> Result<&'a K, IteratorExhausted> {
        self.0.advance().map(|e| e.0)
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }
}

pub struct IntoValues<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}

pub struct ValuesMut<'a, K, V> {
    pub(crate) inner: Flatten<Flatten<SliceIterMut<'a, Bucket<K, V>>>>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| &mut e.value)
    }
}

/// A borrowed iterator over the values of a [`HashTable`]. See [`Iter`] for the iteration order
/// and protocol.
pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Values<'a, K, V> {
    /// Moves the iterator back to the first bucket.
    pub fn begin(&mut self) {
        self.0.begin()
    }

    /// Yields the next value, or an [`Err`] if every value has been yielded.
    pub fn advance(&mut self) -> Result<&'a V, IteratorExhausted> {
        self.0.advance().map(|e| e.1)
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}
