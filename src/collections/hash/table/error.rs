use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::collections::hash::key::InvalidKey;

/// A strict lookup or removal was made for a key that isn't in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound;

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key not found in hash-based collection!")
    }
}

impl Error for KeyNotFound {}

/// An iterator was advanced after it had already yielded every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IteratorExhausted;

impl Display for IteratorExhausted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Advanced an iterator that has already been exhausted!")
    }
}

impl Error for IteratorExhausted {}

/// The error returned by strict lookups, which can fail either because the key itself is invalid
/// or because there is no entry for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum LookupError {
    InvalidKey(InvalidKey),
    KeyNotFound(KeyNotFound),
}
