#![cfg(feature = "linked")]

use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Turns the [`Err`] of a `try_*` method into the panic of its plain counterpart, so that
    /// `list.insert(i, v)` fails with the same message that `list.try_insert(i, v)` returns.
    ///
    /// # Panics
    /// Panics with the error's [`Display`](std::fmt::Display) message if the [`Result`] is an
    /// [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
