use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Like [`Result::unwrap`], but only for errors implementing [`Error`], and the panic message
    /// is the error's own [`Display`](std::fmt::Display) output. Used by the panicking
    /// conveniences, such as indexing a [`HashTable`](crate::collections::hash::HashTable) with a
    /// missing key.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
