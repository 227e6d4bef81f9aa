//! A module containing the [`Key`] trait, its [`InvalidKey`] error and [`DynKey`], a dynamically
//! typed key.

mod dyn_key;
mod key;

pub use dyn_key::*;
pub use key::*;
