#![no_std]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::unwrap_used,
    clippy::expect_used,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
// Extra checks on nightly
#![cfg_attr(nightly_extra_checks, feature(rustdoc_missing_doc_code_examples))]
#![cfg_attr(nightly_extra_checks, forbid(rustdoc::missing_doc_code_examples))]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Error codes, context and propagation tracing for `Result`-based code.
//!
//! ## Overview
//!
//! Every failure in this crate is an [`Error`]: an application-defined
//! numeric code, a message, the location it was created at, and, as it
//! travels up the call stack, the source text of the expression that first
//! failed and a trace of every function it was propagated through.
//!
//! Fallible functions return [`Result<T>`](Result), which is the ordinary
//! `core::result::Result` with [`Error`] as the default error type. Errors
//! are propagated with the macros of this crate, which behave like `?` but
//! also record where the error went:
//!
//! ```rust
//! use faultline::prelude::*;
//!
//! fn parse_id(raw: i32) -> faultline::Result<i32> {
//!     ensure!(raw >= 1000, 500, "ID too low");
//!     Ok(raw)
//! }
//!
//! fn process_user(raw: i32) -> faultline::Result<i32> {
//!     let id = check_ctx!(parse_id(raw), "Processing ID: {raw}");
//!     Ok(id * 2)
//! }
//!
//! let error = process_user(100).unwrap_err();
//! assert_eq!(error.code(), 500);
//! assert!(error.message().starts_with("ID too low"));
//! assert!(error.message().ends_with("Processing ID: 100"));
//! ```
//!
//! ## Propagation
//!
//! | Macro              | On failure                                              |
//! |--------------------|---------------------------------------------------------|
//! | [`check!`]         | record expression and trace, return the error           |
//! | [`check_into!`]    | like `check!`, with an explicit result type             |
//! | [`check_ctx!`]     | like `check!`, then wrap with a formatted context       |
//! | [`ensure!`]        | create a new error if a condition is false, return it   |
//! | [`try_some!`]      | create a new error for `None`, return it                |
//! | [`try_or!`]        | yield a default value instead                           |
//! | [`unwrap!`]        | log the error and abort the process                     |
//!
//! The same augmentations are available as methods through [`ResultExt`]
//! and [`OptionExt`], for use with the `?` operator. Any type implementing
//! [`core::error::Error`] converts into an [`Error`], so `?` and the macros
//! work on foreign errors as well.
//!
//! ## Reporting
//!
//! `{:?}` and `{:#}` on an [`Error`] print its full report, formatted by the
//! [hook system](crate::hooks):
//!
//! ```text
//! [!] Error 500: ID too low
//!   | context: Processing ID: 100
//!     at app::parse_id (src/main.rs:4) [origin]
//!     expression: parse_id(raw)
//!     at app::process_user (src/main.rs:9)
//! ```
//!
//! With the `std` feature, the [`log`] module provides the sink errors are
//! reported through, and [`run`](fn@run) / [`exit_code`] turn the outcome of a
//! program into an exit status.
//!
//! ## Features
//!
//! - `std` (default): the logging sink, system errors, aborting on fatal
//!   errors and the entry point helpers. Without it the crate only needs
//!   `alloc`, and fatal errors panic instead.
//! - `trace` (default): propagation sites are recorded in the trace of an
//!   error. Without it, [`Error::attach_trace`] does nothing.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod defer;
pub mod error;
pub mod fatal;
pub mod hooks;
pub mod location;
pub mod option_ext;
pub mod prelude;
pub mod result_ext;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod log;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod run;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod system;

#[cfg(feature = "std")]
pub use self::run::{exit_code, run};
pub use self::{
    error::Error,
    option_ext::OptionExt,
    result_ext::{FromError, ResultExt},
};

/// A [`Result`](core::result::Result) type alias where the error defaults to
/// [`Error`].
///
/// ```
/// fn might_fail() -> faultline::Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn nothing_to_return() -> faultline::Result<()> {
///     Ok(())
/// }
/// # might_fail().unwrap();
/// # nothing_to_return().unwrap();
/// ```
pub type Result<T, E = Error> = core::result::Result<T, E>;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    use core::fmt;

    #[doc(hidden)]
    pub use core::{
        format_args,
        option::Option::{None, Some},
        result::Result::{Err, Ok},
        stringify,
    };

    #[doc(hidden)]
    pub use crate::result_ext::FromError;
    use crate::{Error, fatal, location::Location};

    #[doc(hidden)]
    #[inline]
    #[cold]
    pub fn format_error(code: i32, args: fmt::Arguments<'_>, origin: Location) -> Error {
        Error::from_args(code, args, origin)
    }

    #[doc(hidden)]
    #[inline]
    #[cold]
    #[track_caller]
    pub fn propagate<E>(error: E, expression: &'static str, site: Location) -> Error
    where
        E: Into<Error>,
    {
        error
            .into()
            .with_expression(expression)
            .attach_trace(site)
    }

    #[doc(hidden)]
    #[inline]
    #[cold]
    #[track_caller]
    pub fn propagate_with_context<E>(
        error: E,
        expression: &'static str,
        site: Location,
        context: fmt::Arguments<'_>,
    ) -> Error
    where
        E: Into<Error>,
    {
        propagate(error, expression, site).wrap(context)
    }

    #[doc(hidden)]
    #[inline]
    #[cold]
    pub fn condition_failed(
        code: i32,
        args: fmt::Arguments<'_>,
        condition: &'static str,
        site: Location,
    ) -> Error {
        Error::from_args(code, args, site).with_expression(condition)
    }

    #[doc(hidden)]
    #[cold]
    #[track_caller]
    pub fn unwrap_failed<E>(error: E, expression: &'static str, message: &str, site: Location) -> !
    where
        E: Into<Error>,
    {
        let error = error.into().with_expression(expression);
        fatal::unwrap_failed(&error, message, site)
    }

    #[cfg(feature = "std")]
    #[doc(hidden)]
    #[cold]
    pub fn last_os_error() -> std::io::Error {
        std::io::Error::last_os_error()
    }

    #[cfg(feature = "std")]
    #[doc(hidden)]
    #[cold]
    pub fn system_error(
        os_error: &std::io::Error,
        code: i32,
        args: fmt::Arguments<'_>,
        origin: Location,
    ) -> Error {
        crate::system::system_error_at(code, os_error, alloc::fmt::format(args).into(), origin)
    }

    #[cfg(feature = "std")]
    #[doc(hidden)]
    #[cold]
    pub fn propagate_system(
        error: &std::io::Error,
        args: fmt::Arguments<'_>,
        expression: &'static str,
        site: Location,
    ) -> Error {
        crate::system::system_error_at(
            crate::system::io_code(error),
            error,
            alloc::fmt::format(args).into(),
            site,
        )
        .with_expression(expression)
    }
}
