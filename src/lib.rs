//! This crate is a small collection of foundational container types, written as a learning
//! exercise around one data structure in particular: a hash table that resolves collisions with
//! separate chaining.
//!
//! # Purpose
//! The types here exist to be read, tested and reused in teaching material, with no expectation
//! for them to replace [`std::collections`]. The interesting part is
//! [`HashTable`](collections::hash::HashTable): it maps hashes to bucket indices, keeps a chain
//! of entries per bucket, grows once it passes its load factor and walks its sparse bucket array
//! with a two-level iterator.
//!
//! # Method
//! Each bucket is a [`LinkedList`](collections::linked::LinkedList), which is written here as
//! well rather than borrowed from [`std`]. [`HashSet`](collections::hash::HashSet) is a thin
//! veneer over the table.
//!
//! # Error Handling
//! Keys are validated before the table is touched. Some key values can never be stored (an
//! absent value, a boolean or something that can't be hashed), so the methods that accept a key
//! return a [`Result`] with an [`InvalidKey`](collections::hash::InvalidKey) error instead of
//! quietly accepting it. Errors are strongly typed, using enums for static dispatch and unit
//! structs that implement [`Error`](std::error::Error).
//!
//! Where a panicking form is more ergonomic (indexing a table with `table[&key]`), the panic
//! message is the message of the error that would otherwise be returned.
//!
//! # Dependencies
//! `derive_more` removes some very repetitive error boilerplate and `log` receives the odd
//! diagnostic record (growing or clearing a table). No logger is installed by this crate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
