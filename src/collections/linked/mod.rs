//! Linked collection types. At the moment this is only [`LinkedList`], which also serves as the
//! chain behind each bucket of a [`HashTable`](crate::collections::hash::HashTable).

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
