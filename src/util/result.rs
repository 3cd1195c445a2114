use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}

pub(crate) trait OptionExtension<T> {
    /// Unwraps the [`Option`], panicking with the message of the error produced by `error` in the
    /// None case.
    ///
    /// # Panics
    /// Panics if the [`Option`] is [`None`].
    fn or_throw<E: Error, F: FnOnce() -> E>(self, error: F) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    fn or_throw<E: Error, F: FnOnce() -> E>(self, error: F) -> T {
        self.ok_or_else(error).throw()
    }
}
