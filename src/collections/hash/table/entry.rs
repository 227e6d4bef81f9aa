use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

/// A key-value pair stored in one of a table's chains, along with the hash of its key.
///
/// The hash is calculated once, when the entry is created, and is what decides which bucket the
/// entry lives in from then on.
#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub key: K,
    pub value: V,
    pub hash: i64,
}

impl<K, V> Entry<K, V> {
    pub const fn new(key: K, value: V, hash: i64) -> Entry<K, V> {
        Entry {
            key,
            value,
            hash,
        }
    }

    /// Returns true if this entry belongs to `key`, which is expected to have the provided
    /// `hash`. Keys are only compared when the hashes match.
    pub fn matches<Q>(&self, hash: i64, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.hash == hash && self.key.borrow() == key
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Eq, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        other.matches(self.hash, &self.key)
    }
}

impl<K: Display, V: Display> Display for Entry<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
