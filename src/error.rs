//! The [`Error`] value carried by every failed [`Result`](crate::Result).
//!
//! An [`Error`] records:
//!
//! - a numeric **code**, entirely application-defined,
//! - a human readable **message**,
//! - the **origin** where it was created,
//! - optionally the source text of the **expression** that first failed to
//!   propagate it,
//! - a **trace** of the propagation sites it crossed on the way up (only when
//!   the `trace` feature is enabled).
//!
//! Errors are never mutated once another owner can observe them. All of the
//! augmenting methods ([`wrap`](Error::wrap),
//! [`attach_trace`](Error::attach_trace),
//! [`with_expression`](Error::with_expression)) consume `self` and return a new
//! value. Internally this is copy-on-write: if the record is shared with a
//! clone it is copied before being extended.
//!
//! ```rust
//! use faultline::Error;
//!
//! let root = Error::new(503, "Database Unavailable");
//! let shared = root.clone();
//! let wrapped = root.wrap("Login Failed");
//!
//! assert_eq!(wrapped.code(), 503);
//! assert_eq!(wrapped.message(), "Database Unavailable\n  | context: Login Failed");
//! assert_eq!(shared.message(), "Database Unavailable");
//! ```

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::fmt::{self, Write};

use triomphe::Arc;

use crate::{
    hooks::{creation, formatting::ReportLayout},
    location::Location,
};

/// Size in bytes of the message budget, including a terminator byte.
///
/// Messages are truncated to at most `MESSAGE_CAPACITY - 1` bytes, cutting on
/// a UTF-8 character boundary. Truncation is silent.
pub const MESSAGE_CAPACITY: usize = 2048;

/// Code given to errors converted from foreign error types.
pub const UNSPECIFIED_CODE: i32 = -1;

/// Separator placed between a message and a context added by [`Error::wrap`].
pub const CONTEXT_MARKER: &str = "\n  | context: ";

#[derive(Clone)]
struct ErrorData {
    code: i32,
    message: Cow<'static, str>,
    origin: Location,
    expression: Option<Cow<'static, str>>,
    trace: Vec<Location>,
}

/// An error code with a message, its origin and its propagation history.
///
/// [`Error`] is a single pointer wide, so `Result<T, Error>` costs no more
/// than `Result<T, Box<_>>`. Cloning is cheap.
///
/// `Error` deliberately does not implement [`core::error::Error`]. This
/// allows any type that does to be converted into it with `?`:
///
/// ```rust
/// fn parse(input: &str) -> faultline::Result<u16> {
///     let port: u16 = input.parse()?;
///     Ok(port)
/// }
///
/// let error = parse("http").unwrap_err();
/// assert_eq!(error.code(), faultline::error::UNSPECIFIED_CODE);
/// assert!(error.message().contains("invalid digit"));
/// ```
#[derive(Clone)]
#[must_use]
pub struct Error {
    data: Arc<ErrorData>,
}

impl Error {
    /// Creates a new error originating at the caller.
    ///
    /// The origin does not include a function name; use the [`error!()`]
    /// macro to capture it as well.
    ///
    /// [`error!()`]: crate::error!
    #[track_caller]
    pub fn new(code: i32, message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_origin(code, message, Location::caller())
    }

    /// Creates a new error with an explicit origin.
    ///
    /// This is what the creation macros expand to. Registered
    /// [creation hooks](crate::hooks::creation) run before it returns.
    pub fn with_origin(code: i32, message: impl Into<Cow<'static, str>>, origin: Location) -> Self {
        let error = Self {
            data: Arc::new(ErrorData {
                code,
                message: truncate_message(message.into()),
                origin,
                expression: None,
                trace: Vec::new(),
            }),
        };
        creation::run_creation_hooks(&error);
        error
    }

    /// Creates a new error from preformatted arguments.
    ///
    /// Messages without interpolated arguments are stored without
    /// allocating.
    pub fn from_args(code: i32, args: fmt::Arguments<'_>, origin: Location) -> Self {
        match args.as_str() {
            Some(message) => Self::with_origin(code, message, origin),
            None => Self::with_origin(code, alloc::fmt::format(args), origin),
        }
    }

    /// The application-defined error code.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.data.code
    }

    /// The message, including any contexts added by [`wrap`](Self::wrap).
    #[must_use]
    pub fn message(&self) -> &str {
        &self.data.message
    }

    /// Where the error was created.
    #[must_use]
    pub fn origin(&self) -> &Location {
        &self.data.origin
    }

    /// Source text of the first failing expression the error propagated
    /// through, if any.
    #[must_use]
    pub fn expression(&self) -> Option<&str> {
        self.data.expression.as_deref()
    }

    /// The propagation sites this error crossed, oldest first.
    ///
    /// Always empty when the `trace` feature is disabled.
    #[must_use]
    pub fn trace(&self) -> &[Location] {
        &self.data.trace
    }

    /// Adds a context to the message, keeping code, origin and trace.
    ///
    /// The resulting message is the original message, followed by
    /// [`CONTEXT_MARKER`], followed by the context. The combined text is
    /// subject to the usual [`MESSAGE_CAPACITY`] truncation.
    pub fn wrap(mut self, context: impl fmt::Display) -> Self {
        let data = Arc::make_mut(&mut self.data);
        let mut message = String::with_capacity(data.message.len() + CONTEXT_MARKER.len() + 32);
        message.push_str(&data.message);
        message.push_str(CONTEXT_MARKER);
        // Writing into a `String` only fails if the `Display` impl does.
        let _ = write!(message, "{context}");
        data.message = truncate_message(Cow::Owned(message));
        self
    }

    /// Appends a propagation site to the trace.
    ///
    /// A no-op when the `trace` feature is disabled.
    #[cfg_attr(not(feature = "trace"), allow(unused_mut, unused_variables))]
    pub fn attach_trace(mut self, location: Location) -> Self {
        #[cfg(feature = "trace")]
        Arc::make_mut(&mut self.data).trace.push(location);
        self
    }

    /// Appends the caller as a propagation site.
    ///
    /// See [`attach_trace`](Self::attach_trace).
    #[track_caller]
    pub fn traced(self) -> Self {
        self.attach_trace(Location::caller())
    }

    /// Records the source text of the failing expression.
    ///
    /// Only the first recorded expression is kept; later calls leave the
    /// error untouched.
    pub fn with_expression(mut self, expression: impl Into<Cow<'static, str>>) -> Self {
        if self.data.expression.is_none() {
            Arc::make_mut(&mut self.data).expression = Some(expression.into());
        }
        self
    }

    /// Returns a value that formats the full report for this error through
    /// the installed [error formatter](crate::hooks::formatting).
    pub fn report(&self) -> ErrorReport<'_> {
        ErrorReport {
            error: self,
            layout: ReportLayout::Standalone,
        }
    }

    /// Like [`report`](Self::report), but leaves out the origin line.
    ///
    /// Used when the origin is printed separately, as the logging sink does.
    pub fn report_without_origin(&self) -> ErrorReport<'_> {
        ErrorReport {
            error: self,
            layout: ReportLayout::WithoutOrigin,
        }
    }
}

impl<E> From<E> for Error
where
    E: core::error::Error + Send + Sync + 'static,
{
    #[track_caller]
    fn from(error: E) -> Self {
        Self::with_origin(
            UNSPECIFIED_CODE,
            alloc::string::ToString::to_string(&error),
            Location::caller(),
        )
    }
}

/// Prints the message. The alternate flag (`{:#}`) prints the full report.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            fmt::Display::fmt(&self.report(), f)
        } else {
            f.write_str(self.message())
        }
    }
}

/// Prints the full report, so that `main` returning `Result<(), Error>` shows
/// everything that is known about the failure.
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.report(), f)
    }
}

/// Displays an [`Error`] through the installed error formatter.
///
/// Created by [`Error::report`] and [`Error::report_without_origin`].
#[derive(Clone, Copy)]
pub struct ErrorReport<'a> {
    error: &'a Error,
    layout: ReportLayout,
}

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::hooks::formatting::format_error(self.error, self.layout, f)
    }
}

impl fmt::Debug for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

fn truncate_message(message: Cow<'static, str>) -> Cow<'static, str> {
    const LIMIT: usize = MESSAGE_CAPACITY - 1;

    if message.len() <= LIMIT {
        return message;
    }
    let cut = floor_char_boundary(&message, LIMIT);
    match message {
        Cow::Borrowed(message) => Cow::Borrowed(&message[..cut]),
        Cow::Owned(mut message) => {
            message.truncate(cut);
            Cow::Owned(message)
        }
    }
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    (0..=index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};

    use super::*;

    #[test]
    fn test_error_send_sync_size() {
        static_assertions::assert_impl_all!(Error: Send, Sync, Clone, Unpin);
        static_assertions::assert_not_impl_any!(Error: core::error::Error, Copy);
        static_assertions::assert_eq_size!(Error, usize);
        static_assertions::assert_eq_size!(crate::Result<()>, usize);
    }

    #[test]
    fn test_new_keeps_fields() {
        let error = Error::new(404, "Not Found: index.html");
        assert_eq!(error.code(), 404);
        assert_eq!(error.message(), "Not Found: index.html");
        assert_eq!(error.origin().file, file!());
        assert_ne!(error.origin().line, 0);
        assert_eq!(error.expression(), None);
        assert!(error.trace().is_empty());
    }

    #[test]
    fn test_from_args_formats() {
        let error = Error::from_args(
            404,
            format_args!("User {} not found", 17),
            Location::new("src/users.rs", 3, 1),
        );
        assert_eq!(error.message(), "User 17 not found");
        assert_eq!(error.origin().line, 3);
    }

    #[test]
    fn test_truncation_on_overflow() {
        let long = "x".repeat(MESSAGE_CAPACITY * 2);
        let error = Error::new(1, long);
        assert_eq!(error.message().len(), MESSAGE_CAPACITY - 1);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // Three-byte characters never align with the 2047 byte limit
        // exactly, so the cut must step back to a boundary.
        let long = "€".repeat(MESSAGE_CAPACITY);
        let error = Error::new(1, long);
        assert!(error.message().len() <= MESSAGE_CAPACITY - 1);
        assert_eq!(error.message().len() % 3, 0);
        assert!(error.message().chars().all(|c| c == '€'));
    }

    #[test]
    fn test_wrap_preserves_code_and_origin() {
        let root = Error::new(503, "Database Unavailable");
        let origin = *root.origin();
        let wrapped = root.wrap("Login Failed");

        assert_eq!(wrapped.code(), 503);
        assert_eq!(*wrapped.origin(), origin);
        assert!(wrapped.message().contains("Database Unavailable"));
        assert!(wrapped.message().contains("Login Failed"));
        assert!(wrapped.message().contains("context"));
    }

    #[test]
    fn test_wrap_order_is_message_then_context() {
        let wrapped = Error::new(1, "inner").wrap("middle").wrap("outer");
        assert_eq!(
            wrapped.message(),
            "inner\n  | context: middle\n  | context: outer"
        );
    }

    #[test]
    fn test_wrap_does_not_touch_clones() {
        let root = Error::new(7, "original");
        let observed = root.clone();
        let _wrapped = root.wrap("more");
        assert_eq!(observed.message(), "original");
    }

    #[test]
    fn test_wrap_output_is_truncated() {
        let root = Error::new(1, "y".repeat(MESSAGE_CAPACITY - 10));
        let wrapped = root.wrap("a context that does not fit");
        assert_eq!(wrapped.message().len(), MESSAGE_CAPACITY - 1);
    }

    #[test]
    fn test_expression_first_writer_wins() {
        let error = Error::new(1, "failed")
            .with_expression("open_config()")
            .with_expression("load()");
        assert_eq!(error.expression(), Some("open_config()"));
    }

    #[test]
    fn test_expression_does_not_touch_clones() {
        let error = Error::new(1, "failed");
        let observed = error.clone();
        let _annotated = error.with_expression("read()");
        assert_eq!(observed.expression(), None);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn test_trace_appends_in_order() {
        let first = Location::with_function("src/a.rs", 1, 1, "app::a");
        let second = Location::with_function("src/b.rs", 2, 1, "app::b");
        let error = Error::new(1, "failed")
            .attach_trace(first)
            .attach_trace(second);
        assert_eq!(error.trace(), &[first, second]);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn test_trace_does_not_touch_clones() {
        let error = Error::new(1, "failed");
        let observed = error.clone();
        let traced = error.traced();
        assert_eq!(traced.trace().len(), 1);
        assert!(observed.trace().is_empty());
    }

    #[cfg(not(feature = "trace"))]
    #[test]
    fn test_trace_disabled_is_noop() {
        let error = Error::new(1, "failed").traced();
        assert!(error.trace().is_empty());
    }

    #[test]
    fn test_from_foreign_error() {
        #[derive(Debug, thiserror::Error)]
        #[error("config key {0} missing")]
        struct MissingKey(&'static str);

        let error: Error = MissingKey("port").into();
        assert_eq!(error.code(), UNSPECIFIED_CODE);
        assert_eq!(error.message(), "config key port missing");
        assert_eq!(error.origin().file, file!());
    }

    #[test]
    fn test_display_and_alternate() {
        let error = Error::new(42, "boom");
        assert_eq!(error.to_string(), "boom");
        let report = format!("{error:#}");
        assert!(report.contains("42"));
        assert!(report.contains("boom"));
        assert_eq!(report, format!("{error:?}"));
    }
}
