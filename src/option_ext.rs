//! Extension methods turning a missing `Option` value into an [`Error`].
//!
//! ```rust
//! use faultline::prelude::*;
//!
//! fn find_user(id: u32) -> Option<&'static str> {
//!     (id == 1).then_some("admin")
//! }
//!
//! fn greet(id: u32) -> faultline::Result<String> {
//!     let name = find_user(id).ok_or_error(404, "User not found")?;
//!     Ok(format!("hello {name}"))
//! }
//!
//! assert_eq!(greet(2).unwrap_err().code(), 404);
//! ```
//!
//! The [`try_some!()`](crate::try_some!) macro does the same while returning
//! from the enclosing function directly.

use alloc::borrow::Cow;

use crate::{Error, location::Location};

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for Option<T> {}
}

/// Extension trait for `Option`, creating an [`Error`] for `None`.
pub trait OptionExt<T>: sealed::Sealed {
    /// Returns the value, or an error with `code` and `message` originating
    /// at the caller.
    #[track_caller]
    fn ok_or_error(self, code: i32, message: impl Into<Cow<'static, str>>) -> crate::Result<T>;

    /// Like [`ok_or_error`](Self::ok_or_error), but only builds the message
    /// for `None`.
    #[track_caller]
    fn ok_or_error_lazy<M, F>(self, code: i32, message: F) -> crate::Result<T>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_error(self, code: i32, message: impl Into<Cow<'static, str>>) -> crate::Result<T> {
        match self {
            Some(value) => Ok(value),
            None => Err(Error::with_origin(code, message, Location::caller())),
        }
    }

    #[inline]
    fn ok_or_error_lazy<M, F>(self, code: i32, message: F) -> crate::Result<T>
    where
        F: FnOnce() -> M,
        M: Into<Cow<'static, str>>,
    {
        match self {
            Some(value) => Ok(value),
            None => Err(Error::with_origin(code, message(), Location::caller())),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_some_passes_through() {
        assert_eq!(Some(5).ok_or_error(1, "missing").unwrap(), 5);
    }

    #[test]
    fn test_none_becomes_error_at_caller() {
        let error = None::<u8>.ok_or_error(404, "Player not found").unwrap_err();
        assert_eq!(error.code(), 404);
        assert_eq!(error.message(), "Player not found");
        assert_eq!(error.origin().file, file!());
        assert_eq!(error.origin().line, line!() - 4);
    }

    #[test]
    fn test_lazy_message() {
        let id = 99;
        let error = None::<u8>
            .ok_or_error_lazy(500, || format!("Corrupted Player Data for {id}"))
            .unwrap_err();
        assert_eq!(error.message(), "Corrupted Player Data for 99");
    }
}
