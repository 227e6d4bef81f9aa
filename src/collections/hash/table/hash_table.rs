use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::iter;
use std::mem;
use std::ops::Index;

use log::{debug, trace};

use super::{
    Entry, InvalidKey, IntoKeys, IntoValues, Iter, IterState, KeyNotFound, Keys, LookupError,
    Values, ValuesMut,
};
use crate::collections::hash::Key;
use crate::collections::linked::LinkedList;
use crate::util::fmt::{DebugRaw, join};
use crate::util::result::ResultExtension;

/// The number of buckets allocated by [`HashTable::new`].
pub const DEFAULT_CAP: usize = 4;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// A map of keys to values which resolves hash collisions with separate chaining: every bucket
/// holds a [`LinkedList`] of the entries whose hashes map to it.
///
/// The load factor is fixed at 3/4. Once the number of entries exceeds `cap * 3 / 4`, the number
/// of buckets is doubled and every entry is moved to the bucket for its hash under the new
/// capacity. The table never shrinks, except when it is [cleared](HashTable::clear).
///
/// Every method that accepts a key validates it first (see [`Key`]), so the table is never
/// modified by an operation that returns [`InvalidKey`].
///
/// It is a logic error for keys in a HashTable to be manipulated in a way that changes their hash.
/// Because of this, HashTable's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashTable.
/// - `c`: The number of buckets in the HashTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n + c)`** |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `clear` | `O(n + c)` |
/// | `keys/values/items` | `O(n + c)` |
///
/// \* Entries that collide share a chain, which has to be searched linearly. Chains stay short
/// while the load factor is respected.
///
/// \** If inserting a new key pushes the table past its load factor, every entry is moved into a
/// new bucket array.
pub struct HashTable<K: Key, V, B: BuildHasher = RandomState> {
    pub(crate) arr: Box<[Bucket<K, V>]>,
    pub(crate) len: usize,
    pub(crate) threshold: usize,
    pub(crate) initial_cap: usize,
    pub(crate) hasher: B,
}

/// A bucket is only allocated once an entry is inserted into it. A bucket that loses its last
/// entry stays allocated as an empty chain.
pub(crate) type Bucket<K, V> = Option<LinkedList<Entry<K, V>>>;

impl<K: Key, V, B: BuildHasher + Default> HashTable<K, V, B> {
    /// Creates a new HashTable with [`DEFAULT_CAP`] buckets and the default value for `B`.
    pub fn new() -> HashTable<K, V, B> {
        HashTable::with_cap_and_hasher(DEFAULT_CAP, B::default())
    }

    /// Creates a new HashTable with the provided `cap`acity (at least 1 bucket) and the default
    /// hasher. This capacity is also the one restored by [`clear`](HashTable::clear).
    pub fn with_cap(cap: usize) -> HashTable<K, V, B> {
        HashTable::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Key, V, B: BuildHasher> HashTable<K, V, B> {
    /// Creates a new HashTable with [`DEFAULT_CAP`] buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashTable<K, V, B> {
        HashTable::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new HashTable with the provided `cap`acity (at least 1 bucket) and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashTable<K, V, B> {
        let cap = cap.max(1);
        HashTable {
            arr: empty_buckets(cap),
            len: 0,
            threshold: threshold_for(cap),
            initial_cap: cap,
            hasher,
        }
    }

    /// Returns the number of entries in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of buckets.
    pub const fn cap(&self) -> usize {
        self.arr.len()
    }

    /// Returns the number of entries the HashTable can hold before its next resize.
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns a reference to the hasher used by the HashTable.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Removes every entry and returns the HashTable to its initial capacity.
    pub fn clear(&mut self) {
        debug!("clearing hash table with {} entries and {} buckets", self.len, self.cap());

        self.arr = empty_buckets(self.initial_cap);
        self.threshold = threshold_for(self.initial_cap);
        self.len = 0;
    }

    /// Inserts the provided `key`-`value` pair into the HashTable, growing it if the new entry
    /// pushes it past its load factor. If the key was already associated with a value, the value
    /// is replaced in place and the previous one is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, InvalidKey> {
        key.validate()?;

        let hash = self.hash_of(&key);
        let index = index_for(hash, self.cap());
        let bucket = self.arr[index].get_or_insert_with(LinkedList::new);

        if let Some(existing) = bucket.find_mut(|e| e.matches(hash, &key)) {
            return Ok(Some(mem::replace(&mut existing.value, value)));
        }

        bucket.push_back(Entry::new(key, value, hash));
        self.len += 1;

        if self.len > self.threshold {
            self.grow();
        }

        Ok(None)
    }

    /// Returns a reference to the value associated with the provided `key`, or None if the table
    /// contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<Option<&V>, InvalidKey>
    where
        // We're introducing a new type parameter here, Q which represents a borrowed version of K
        // where equality and hashing carries over the borrow.
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        Ok(self.find_entry(key)?.map(|e| &e.value))
    }

    /// Returns a reference to the value associated with the provided `key`, or `default` if the
    /// table contains no value for `key`.
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> Result<&'a V, InvalidKey>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Returns a reference to the value associated with the provided `key`, returning an [`Err`]
    /// if there is no such value.
    ///
    /// The same functionality can be achieved using the [`Index`] operator, which panics instead.
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, LookupError>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        Ok(self.get(key)?.ok_or(KeyNotFound)?)
    }

    /// Returns the stored key-value pair for the provided `key`, if it exists.
    pub fn get_entry<Q>(&self, key: &Q) -> Result<Option<(&K, &V)>, InvalidKey>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        Ok(self.find_entry(key)?.map(|e| (&e.key, &e.value)))
    }

    /// Returns a mutable reference to the value associated with the provided `key`, or None if the
    /// table contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<Option<&mut V>, InvalidKey>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        key.validate()?;

        let hash = self.hash_of(key);
        let index = index_for(hash, self.cap());

        Ok(
            self.arr[index].as_mut()
                .and_then(|bucket| bucket.find_mut(|e| e.matches(hash, key)))
                .map(|e| &mut e.value)
        )
    }

    /// Removes the entry associated with `key`, returning it if it exists. Removal never shrinks
    /// the HashTable.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<Option<(K, V)>, InvalidKey>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        key.validate()?;

        let hash = self.hash_of(key);
        let index = index_for(hash, self.cap());

        let removed = self.arr[index].as_mut()
            .and_then(|bucket| bucket.remove_first(|e| e.matches(hash, key)));

        if removed.is_some() {
            self.len -= 1;
        }

        Ok(removed.map(Entry::into_pair))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Option<V>, InvalidKey>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        Ok(self.remove_entry(key)?.map(|(_, v)| v))
    }

    /// Removes the entry associated with `key`, returning the value if it exists or `default`
    /// otherwise.
    pub fn remove_or<Q>(&mut self, key: &Q, default: V) -> Result<V, InvalidKey>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        Ok(self.remove(key)?.unwrap_or(default))
    }

    /// Removes the entry associated with `key`, returning the value or an [`Err`] if there was no
    /// such entry.
    pub fn try_remove<Q>(&mut self, key: &Q) -> Result<V, LookupError>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        Ok(self.remove(key)?.ok_or(KeyNotFound)?)
    }

    /// Returns true if there is a value associated with the provided `key`. Invalid keys are
    /// never contained.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        matches!(self.find_entry(key), Ok(Some(_)))
    }

    /// Returns a new Vec of references to every key, in bucket order. This order depends on the
    /// hashes of the keys and the current capacity, not on the order of insertion.
    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// Returns a new Vec of references to every value, in the same order as
    /// [`keys`](HashTable::keys).
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// Returns a new Vec of every key-value pair, in the same order as
    /// [`keys`](HashTable::keys).
    pub fn items(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// Returns an iterator over all key-value pairs in the HashTable, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the HashTable, as references.
    pub fn iter_keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the HashTable, as references.
    pub fn iter_values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the HashTable, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.arr.iter_mut().flatten().flatten(),
        }
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }
}

impl<K: Key, V, B: BuildHasher> HashTable<K, V, B> {
    /// Hashes the provided `hashable` with the table's hasher, as a signed value.
    pub(crate) fn hash_of<H: Hash + ?Sized>(&self, hashable: &H) -> i64 {
        self.hasher.hash_one(hashable) as i64
    }

    /// Finds the entry for the provided `key`, after checking that it is a valid key.
    pub(crate) fn find_entry<Q>(&self, key: &Q) -> Result<Option<&Entry<K, V>>, InvalidKey>
    where
        K: Borrow<Q>,
        Q: Key + ?Sized,
    {
        key.validate()?;

        let hash = self.hash_of(key);
        let index = index_for(hash, self.cap());

        Ok(self.arr[index].as_ref().and_then(|bucket| bucket.find(|e| e.matches(hash, key))))
    }

    /// Doubles the number of buckets and moves every entry into the bucket for its cached hash
    /// under the new capacity.
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap() * GROWTH_FACTOR;

        trace!(
            "growing hash table from {} to {} buckets for {} entries",
            self.cap(),
            new_cap,
            self.len
        );

        // Replace the bucket array first so that we can consume the old one.
        let old_arr = mem::replace(&mut self.arr, empty_buckets(new_cap));
        self.threshold = threshold_for(new_cap);

        for entry in old_arr.into_vec().into_iter().flatten().flatten() {
            let index = index_for(entry.hash, new_cap);
            self.arr[index].get_or_insert_with(LinkedList::new).push_back(entry);
        }
    }
}

/// Maps a hash to a bucket index in `[0, cap)`. The hash is negated first, and the Euclidean
/// remainder keeps negative values in range.
pub(crate) const fn index_for(hash: i64, cap: usize) -> usize {
    hash.wrapping_neg().rem_euclid(cap as i64) as usize
}

pub(crate) const fn threshold_for(cap: usize) -> usize {
    cap * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
}

pub(crate) fn empty_buckets<K, V>(cap: usize) -> Box<[Bucket<K, V>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

impl<'a, K: Key, V, B: BuildHasher> IntoIterator for &'a HashTable<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: &self.arr,
            state: IterState::NotStarted,
        }
    }
}

impl<K, V, B, Q> Index<&Q> for HashTable<K, V, B>
where
    K: Key + Borrow<Q>,
    B: BuildHasher,
    Q: Key + ?Sized,
{
    type Output = V;

    /// # Panics
    /// Panics if `key` is invalid or there is no value associated with it.
    fn index(&self, key: &Q) -> &Self::Output {
        self.try_get(key).throw()
    }
}

impl<K: Key, V> Default for HashTable<K, V> {
    fn default() -> Self {
        HashTable::new()
    }
}

impl<K: Key + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.arr.iter()
            .map(|bucket| DebugRaw(match bucket {
                Some(chain) if !chain.is_empty() => join(
                    chain.iter().map(|e| format!("({:?}: {:?})", e.key, e.value)),
                    " -> ",
                ),
                _ => "-".into(),
            }))
            .collect::<Vec<DebugRaw>>();

        f.debug_struct("HashTable")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Key + Display, V: Display, B: BuildHasher> Display for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", join(self.arr.iter().flatten().flatten(), ", "))
    }
}
