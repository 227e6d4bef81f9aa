//! Various general-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also concepts
//! such as pointers, iterators and hashing.
//!
//! # Features
//! Each module is gated behind a Cargo feature of the same name. `hash` depends on `linked`,
//! because every bucket of a [`HashTable`](hash::HashTable) is a
//! [`LinkedList`](linked::LinkedList).

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
