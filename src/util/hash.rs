//! Deterministic hashing for tests. A [`ManualHash`] key hashed through [`IdentityState`] hashes to
//! exactly the number it was given, which makes bucket placement (and collisions) predictable.

use std::fmt::{self, Display, Formatter};
use std::hash::{BuildHasher, Hash, Hasher};

use crate::collections::hash::Key;

/// A key with a chosen hash. Equality only looks at the value, so two keys with equal values and
/// different hashes are still told apart by a table, which compares hashes first.
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: i64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: i64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

impl<T: Eq> Key for ManualHash<T> {}

impl<T: Eq + Display> Display for ManualHash<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A hasher that returns the last integer written to it unchanged.
#[derive(Debug, Default)]
pub struct IdentityHasher {
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        // Anything other than a single integer is folded in, so it still hashes deterministically.
        for (i, byte) in bytes.iter().enumerate() {
            self.state ^= (*byte as u64) << ((i % 8) * 8);
        }
    }

    fn write_i64(&mut self, i: i64) {
        self.state = i as u64;
    }
}

#[derive(Debug, Default, Clone)]
pub struct IdentityState;

impl BuildHasher for IdentityState {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}
