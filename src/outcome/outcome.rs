use std::fmt;

/// A value that is either a success (`Ok`) or an error (`Err`), never both.
///
/// The two-variant representation makes invalid states (both payloads
/// populated, or neither) unrepresentable. The shape deliberately mirrors
/// [`std::result::Result`]; convert with [`Outcome::into_result`] when `?`
/// or the std adapters are needed.
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// Success, carrying the value.
    Ok(T),
    /// Failure, carrying the error.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is an `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is an `Err`.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Converts into an `Option` over the success value, discarding any error.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Converts into an `Option` over the error value, discarding any success.
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Returns the success value, or `default` on error.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => op(error),
        }
    }

    /// Applies `op` to the success value, leaving an error untouched.
    pub fn map<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(op(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies `op` to the error value, leaving a success untouched.
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(op(error)),
        }
    }

    /// Chains a fallible step onto a success.
    ///
    /// `op` runs only on `Ok` and its outcome is returned directly, without
    /// nesting. The first `Err` in a chain short-circuits every later step.
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => op(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Recovers from an error. `op` runs only on `Err`; a success passes
    /// through unchanged.
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => op(error),
        }
    }

    /// Converts into the std `Result`, e.g. to use `?` at a call site.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err`, carrying the error in the message.
    /// Calling `unwrap` on an error is a contract violation at the call
    /// site, not a recoverable condition — use [`Outcome::unwrap_or`] or
    /// [`Outcome::or_else`] when the error is an expected runtime outcome.
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => {
                panic!("called `Outcome::unwrap()` on an `Err` value: {:?}", error)
            }
        }
    }

    /// Returns the success value, panicking with `msg` as context on error.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => panic!("{}: {:?}", msg, error),
        }
    }
}

impl<T: fmt::Debug, E> Outcome<T, E> {
    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Ok`, carrying the value in the message.
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Ok(value) => {
                panic!("called `Outcome::unwrap_err()` on an `Ok` value: {:?}", value)
            }
            Outcome::Err(error) => error,
        }
    }

    /// Returns the error value, panicking with `msg` as context on success.
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Outcome::Ok(value) => panic!("{}: {:?}", msg, value),
            Outcome::Err(error) => error,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}
