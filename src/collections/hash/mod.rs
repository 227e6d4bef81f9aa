//! Hash-based collections: [`HashTable`], which resolves collisions with separate chaining, and
//! [`HashSet`], which is a thin veneer over it.
//!
//! Both only accept keys implementing [`Key`], which adds a runtime validation step on top of
//! [`Hash`](std::hash::Hash) and [`Eq`]. [`DynKey`] is a dynamically typed key that exercises
//! every way a key can be rejected.

pub mod key;
pub mod set;
pub mod table;

#[doc(inline)]
pub use key::{DynKey, InvalidKey, Key};
#[doc(inline)]
pub use set::HashSet;
#[doc(inline)]
pub use table::{HashTable, IteratorExhausted, KeyNotFound, LookupError};
