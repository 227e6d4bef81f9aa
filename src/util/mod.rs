pub mod error;
pub mod fmt;
#[cfg(all(test, feature = "hash"))]
pub mod hash;
pub mod panic;
pub mod result;
