//! A module containing [`HashTable`] and associated types.
//!
//! The other included types are errors and iterators, providing owned and borrowed iteration over
//! entries, keys or values in a table. Borrowed iterators hold a shared borrow of the table, so it
//! can't be modified (or resized) while an iteration is in progress.
//!
//! There is no mutable iterator over entries or keys, because mutating the keys of a HashTable in
//! place would cause a logic error.
//!
//! [`HashTable`] is also re-exported under the parent module.

mod entry;
mod error;
mod hash_table;
mod iter;

pub(crate) use entry::*;
pub use error::*;
pub use hash_table::*;
pub use iter::*;
