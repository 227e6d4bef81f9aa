//! A module containing [`LinkedList`] and associated types.
//!
//! The other included types provide owned and borrowed iteration over a list's elements.
//!
//! [`LinkedList`] is also re-exported under the parent module.

mod iter;
mod length;
mod linked_list;
mod node;

pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
