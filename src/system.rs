//! Errors built from operating system failures.
//!
//! ```rust,no_run
//! use std::fs::File;
//!
//! use faultline::check_sys;
//!
//! fn open_config() -> faultline::Result<File> {
//!     let file = check_sys!(File::open("/etc/app.toml"), "Failed to open config");
//!     Ok(file)
//! }
//! ```

use alloc::{borrow::Cow, format};
use std::io;

use crate::{Error, location::Location};

impl Error {
    /// Creates an error whose message is followed by the description of the
    /// last operating system error on this thread.
    #[track_caller]
    pub fn last_os_error(code: i32, message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_io(code, &io::Error::last_os_error(), message)
    }

    /// Creates an error from a raw platform error number.
    ///
    /// The number becomes the error code, and its description is appended to
    /// the message.
    ///
    /// ```rust
    /// use faultline::Error;
    ///
    /// let error = Error::from_os_code(2, "Failed to open file");
    /// assert_eq!(error.code(), 2);
    /// assert!(error.message().starts_with("Failed to open file: "));
    /// ```
    #[track_caller]
    pub fn from_os_code(errno: i32, message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_io(errno, &io::Error::from_raw_os_error(errno), message)
    }

    /// Creates an error with `code` whose message is followed by the
    /// description of `error`.
    #[track_caller]
    pub fn from_io(code: i32, error: &io::Error, message: impl Into<Cow<'static, str>>) -> Self {
        system_error_at(code, error, message.into(), Location::caller())
    }
}

pub(crate) fn system_error_at(
    code: i32,
    error: &io::Error,
    message: Cow<'static, str>,
    origin: Location,
) -> Error {
    Error::with_origin(code, format!("{message}: {error}"), origin)
}

/// The error code used for an I/O error: its raw OS error number if it has
/// one, the generic `-1` otherwise.
#[must_use]
pub fn io_code(error: &io::Error) -> i32 {
    error.raw_os_error().unwrap_or(crate::error::UNSPECIFIED_CODE)
}
