//! Extension methods for `Result`, and the [`FromError`] trait the
//! propagation macros return through.
//!
//! The macros in this crate cover call sites that want the failing
//! expression and the enclosing function recorded. [`ResultExt`] offers the
//! same augmentations as plain methods, for use with the `?` operator:
//!
//! ```rust
//! use faultline::prelude::*;
//!
//! fn read_port(raw: &str) -> faultline::Result<u16> {
//!     let port = raw.parse::<u16>().context("reading the listen port").traced()?;
//!     Ok(port)
//! }
//!
//! let error = read_port("eighty").unwrap_err();
//! assert!(error.message().ends_with("context: reading the listen port"));
//! ```
//!
//! Absorbing a failure into a fallback needs no extension: use
//! [`Result::unwrap_or`] or the [`try_or!()`](crate::try_or!) macro.

use alloc::borrow::Cow;
use core::fmt;

use crate::{Error, fatal, location::Location};

mod sealed {
    pub trait Sealed {}
    impl<T, E> Sealed for core::result::Result<T, E> {}
}

/// Types a propagation macro can return from the enclosing function.
///
/// Implemented for every `Result<T, E>` whose error type can be built from an
/// [`Error`]. The macros call `FromError::from_error(error)` in return
/// position, letting the enclosing function's return type pick the target;
/// [`check_into!()`](crate::check_into!) names it explicitly instead.
pub trait FromError {
    /// Builds the failed value carrying `error`.
    fn from_error(error: Error) -> Self;
}

impl<T, E> FromError for core::result::Result<T, E>
where
    E: From<Error>,
{
    #[inline]
    fn from_error(error: Error) -> Self {
        Err(E::from(error))
    }
}

/// Extension trait for `Result` adding error augmentation and the abort path.
///
/// All methods leave `Ok` values untouched.
pub trait ResultExt<T, E>: sealed::Sealed {
    /// Converts the error into an [`Error`].
    #[track_caller]
    fn into_error(self) -> crate::Result<T>
    where
        E: Into<Error>;

    /// Adds a context to the error message. See [`Error::wrap`].
    #[track_caller]
    fn context<C>(self, context: C) -> crate::Result<T>
    where
        E: Into<Error>,
        C: fmt::Display;

    /// Like [`context`](Self::context), but only builds the context on
    /// failure.
    #[track_caller]
    fn context_lazy<C, F>(self, context: F) -> crate::Result<T>
    where
        E: Into<Error>,
        F: FnOnce() -> C,
        C: fmt::Display;

    /// Appends the caller to the error's trace. See [`Error::traced`].
    #[track_caller]
    fn traced(self) -> crate::Result<T>
    where
        E: Into<Error>;

    /// Records the failing expression, unless one is already recorded.
    #[track_caller]
    fn with_expression(self, expression: impl Into<Cow<'static, str>>) -> crate::Result<T>
    where
        E: Into<Error>;

    /// Returns the success value, or logs the error and aborts the process.
    ///
    /// Use only where a failure means a broken invariant. See
    /// [`fatal`](crate::fatal).
    #[track_caller]
    fn unwrap_or_abort(self) -> T
    where
        E: Into<Error>;

    /// Like [`unwrap_or_abort`](Self::unwrap_or_abort), with a custom panic
    /// message.
    #[track_caller]
    fn expect_or_abort(self, message: &str) -> T
    where
        E: Into<Error>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    #[inline]
    fn into_error(self) -> crate::Result<T>
    where
        E: Into<Error>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into()),
        }
    }

    #[inline]
    fn context<C>(self, context: C) -> crate::Result<T>
    where
        E: Into<Error>,
        C: fmt::Display,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().wrap(context)),
        }
    }

    #[inline]
    fn context_lazy<C, F>(self, context: F) -> crate::Result<T>
    where
        E: Into<Error>,
        F: FnOnce() -> C,
        C: fmt::Display,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().wrap(context())),
        }
    }

    #[inline]
    fn traced(self) -> crate::Result<T>
    where
        E: Into<Error>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().attach_trace(Location::caller())),
        }
    }

    #[inline]
    fn with_expression(self, expression: impl Into<Cow<'static, str>>) -> crate::Result<T>
    where
        E: Into<Error>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().with_expression(expression)),
        }
    }

    #[inline]
    fn unwrap_or_abort(self) -> T
    where
        E: Into<Error>,
    {
        match self {
            Ok(value) => value,
            Err(error) => {
                fatal::unwrap_failed(&error.into(), "unwrap() failed", Location::caller())
            }
        }
    }

    #[inline]
    fn expect_or_abort(self, message: &str) -> T
    where
        E: Into<Error>,
    {
        match self {
            Ok(value) => value,
            Err(error) => fatal::unwrap_failed(&error.into(), message, Location::caller()),
        }
    }
}
