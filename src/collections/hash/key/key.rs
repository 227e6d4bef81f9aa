use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

use derive_more::{Display, Error, IsVariant};

/// The reason a key was rejected by a hash-based collection. Keys are always validated before the
/// collection is modified, so a collection is left unchanged by any operation returning this
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum InvalidKey {
    /// The key is an absent value, like [`None`].
    #[display("An absent value can't be used as a key!")]
    Absent,
    /// The key is a boolean. Booleans are rejected outright so that they can never silently share
    /// an entry with the integers 0 and 1.
    #[display("A boolean can't be used as a key!")]
    Boolean,
    /// The key holds a value that doesn't support hashing.
    #[display("Unable to hash the provided key!")]
    Unhashable,
}

/// A type that can be used as the key of a [`HashTable`](super::super::HashTable).
///
/// Most types are always valid and can rely on the default implementation of
/// [`validate`](Key::validate). Types with values that should never act as a key (`bool`, the
/// [`None`] variant of an [`Option`] or an unhashable [`DynKey`](super::DynKey)) override it.
pub trait Key: Hash + Eq {
    /// Checks whether this value may be used as a key.
    fn validate(&self) -> Result<(), InvalidKey> {
        Ok(())
    }
}

macro_rules! impl_key {
    ($($t:ty),* $(,)?) => {
        $(impl Key for $t {})*
    };
}

impl_key!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    char, str, String, (),
);

impl Key for bool {
    fn validate(&self) -> Result<(), InvalidKey> {
        Err(InvalidKey::Boolean)
    }
}

impl<T: Key> Key for Option<T> {
    fn validate(&self) -> Result<(), InvalidKey> {
        match self {
            Some(key) => key.validate(),
            None => Err(InvalidKey::Absent),
        }
    }
}

impl<T: Key + ?Sized> Key for &T {
    fn validate(&self) -> Result<(), InvalidKey> {
        (**self).validate()
    }
}

impl<T: Key + ?Sized> Key for Box<T> {
    fn validate(&self) -> Result<(), InvalidKey> {
        (**self).validate()
    }
}

impl<T: Key + ?Sized> Key for Rc<T> {
    fn validate(&self) -> Result<(), InvalidKey> {
        (**self).validate()
    }
}

impl<T: Key + ?Sized> Key for Arc<T> {
    fn validate(&self) -> Result<(), InvalidKey> {
        (**self).validate()
    }
}

// Tuples and sequences are only rejected as a whole if they can't be hashed, which the type
// system already rules out. An element being a boolean is fine.
impl<T: Hash + Eq> Key for [T] {}

impl<T: Hash + Eq> Key for Vec<T> {}

impl<A: Hash + Eq, B: Hash + Eq> Key for (A, B) {}

impl<A: Hash + Eq, B: Hash + Eq, C: Hash + Eq> Key for (A, B, C) {}
