use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, RandomState};
use std::ops::{BitAnd, BitOr, Sub};

use super::{Difference, Intersection, Iter, Union};
use crate::collections::hash::{HashTable, InvalidKey, Key, KeyNotFound, LookupError};
use crate::util::fmt::{DebugRaw, join};
use crate::util::result::ResultExtension;

/// A set of unique items, stored as the keys of a [`HashTable`] with no values.
///
/// Items are validated the same way as the keys of a table, so inserting or removing an invalid
/// item leaves the set unchanged and returns [`InvalidKey`].
pub struct HashSet<T: Key, B: BuildHasher = RandomState> {
    // A unit value per entry, which takes up no space in the chains.
    pub(crate) inner: HashTable<T, (), B>,
}

impl<T: Key, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new, empty HashSet with the default capacity and hasher.
    pub fn new() -> HashSet<T, B> {
        HashSet {
            inner: HashTable::new(),
        }
    }

    pub fn with_cap(cap: usize) -> HashSet<T, B> {
        HashSet {
            inner: HashTable::with_cap(cap),
        }
    }
}

impl<T: Key, B: BuildHasher> HashSet<T, B> {
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashTable::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashTable::with_cap_and_hasher(cap, hasher),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Removes every item and returns the HashSet to its initial capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Adds `item` to the set, returning true if it wasn't already present.
    pub fn insert(&mut self, item: T) -> Result<bool, InvalidKey> {
        Ok(self.inner.insert(item, ())?.is_none())
    }

    /// Removes `item` from the set, returning the stored item if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> Result<Option<T>, InvalidKey>
    where
        T: Borrow<Q>,
        Q: Key + ?Sized,
    {
        Ok(self.inner.remove_entry(item)?.map(|(k, _)| k))
    }

    /// Removes `item` from the set, returning an [`Err`] if it wasn't present.
    pub fn try_remove<Q>(&mut self, item: &Q) -> Result<T, LookupError>
    where
        T: Borrow<Q>,
        Q: Key + ?Sized,
    {
        Ok(self.remove(item)?.ok_or(KeyNotFound)?)
    }

    /// Returns true if the set contains `item`. Invalid items are never contained.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Key + ?Sized,
    {
        self.inner.contains(item)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the items of `self` that aren't in `other`.
    pub fn difference<'a>(&'a self, other: &'a HashSet<T, B>) -> Difference<'a, T, B> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Returns an iterator over the items in both sets. The smaller set is the one iterated, while
    /// the larger one is only probed.
    pub fn intersection<'a>(&'a self, other: &'a HashSet<T, B>) -> Intersection<'a, T, B> {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        Intersection {
            inner: smaller.iter(),
            other: larger,
        }
    }

    /// Returns an iterator over every item in either set, yielding each item once.
    pub fn union<'a>(&'a self, other: &'a HashSet<T, B>) -> Union<'a, T, B> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// Returns true if every item of `self` is also in `other`.
    pub fn is_subset(&self, other: &HashSet<T, B>) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if every item of `other` is also in `self`.
    pub fn is_superset(&self, other: &HashSet<T, B>) -> bool {
        other.is_subset(self)
    }
}

impl<T: Key> Default for HashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Key, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    /// # Panics
    /// Panics if any of the items is an invalid key.
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = HashSet::new();

        for item in value {
            set.insert(item).throw();
        }

        set
    }
}

impl<T: Key, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Key, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Key + Clone, B: BuildHasher + Default> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Key + Clone, B: BuildHasher + Default> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Key + Clone, B: BuildHasher + Default> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Key + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let contents = join(self.iter().map(|i| format!("{i:?}")), ", ");

        f.debug_struct("HashSet")
            .field("contents", &DebugRaw(format!("{{{contents}}}")))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", self.inner.hasher())
            .finish()
    }
}

impl<T: Key + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", join(self.iter(), ", "))
    }
}
