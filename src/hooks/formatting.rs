//! Error formatting hooks for customizing how full reports look.
//!
//! The full report of an [`Error`] is what `{:?}` and `{:#}` print and what
//! the logging sink writes when an error reaches the top of the program. It is
//! produced by the registered [`ErrorFormatterHook`], or by
//! [`DefaultErrorFormatter::DEFAULT`] if none is registered.
//!
//! ```rust
//! use core::fmt;
//!
//! use faultline::{
//!     Error,
//!     hooks::formatting::{ErrorFormatterHook, ReportLayout, register_error_formatter_hook},
//! };
//!
//! struct OneLine;
//!
//! impl ErrorFormatterHook for OneLine {
//!     fn format_error(
//!         &self,
//!         error: &Error,
//!         _layout: ReportLayout,
//!         f: &mut fmt::Formatter<'_>,
//!     ) -> fmt::Result {
//!         write!(f, "E{}: {}", error.code(), error.message())
//!     }
//! }
//!
//! register_error_formatter_hook(OneLine);
//! assert_eq!(format!("{:?}", Error::new(7, "bad")), "E7: bad");
//! ```
//!
//! [`Error`]: crate::Error
//! [`DefaultErrorFormatter::DEFAULT`]: crate::hooks::builtin_hooks::error_formatter::DefaultErrorFormatter::DEFAULT

use core::fmt;

use triomphe::Arc;
use unsize::CoerceUnsize;

use crate::{
    Error,
    hooks::{builtin_hooks::error_formatter::DefaultErrorFormatter, hook_slot::HookSlot},
};

type Hook = Arc<dyn ErrorFormatterHook>;

static HOOK: HookSlot<Hook> = HookSlot::new();

/// Which parts of a report a formatter is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportLayout {
    /// Everything, including the line naming where the error was created.
    Standalone,
    /// Everything except the origin line, which the caller prints itself.
    WithoutOrigin,
}

/// A hook for customizing how error reports are formatted.
pub trait ErrorFormatterHook: 'static + Send + Sync {
    /// Writes the report for `error` into `f`.
    fn format_error(
        &self,
        error: &Error,
        layout: ReportLayout,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result;
}

pub(crate) fn format_error(
    error: &Error,
    layout: ReportLayout,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let hook = HOOK.with(|hook| hook.cloned());
    let hook = hook
        .as_deref()
        .unwrap_or(const { &DefaultErrorFormatter::DEFAULT });
    hook.format_error(error, layout, f)
}

/// Registers the global error formatter, replacing any previous one.
pub fn register_error_formatter_hook(hook: impl ErrorFormatterHook) {
    HOOK.replace(Some(
        Arc::new(hook).unsize(unsize::Coercion!(to dyn ErrorFormatterHook)),
    ));
}

/// Removes the registered formatter, restoring the default.
pub fn reset_error_formatter_hook() {
    HOOK.replace(None);
}
