//! The path taken when a failure must not be survived.
//!
//! [`fatal`] reports a banner through the logging sink at
//! [`Level::Fatal`](crate::log::Level::Fatal) and aborts the process. No
//! hooks run and no destructors are executed. Without the `std` feature it
//! panics with the same banner instead.

use crate::{Error, location::Location};

/// Reports `[PANIC] <message>` attributed to `location`, then aborts.
///
/// A logger whose level is [`Level::None`](crate::log::Level::None)
/// suppresses the banner; the process is aborted regardless.
#[cold]
#[inline(never)]
pub fn fatal(message: &str, location: Location) -> ! {
    #[cfg(feature = "std")]
    {
        crate::log::logger().log(
            crate::log::Level::Fatal,
            format_args!("[PANIC] {message}"),
            &location,
        );
        std::process::abort()
    }
    #[cfg(not(feature = "std"))]
    {
        panic!("[PANIC] {message}\n        at {location}")
    }
}

/// Logs the report of `error` at [`Level::Fatal`](crate::log::Level::Fatal)
/// and calls [`fatal`] with `message`.
///
/// Both records share the severity of the abort, so a sink filtered down to
/// fatal records still shows the error that caused it.
#[cold]
#[inline(never)]
pub fn unwrap_failed(error: &Error, message: &str, location: Location) -> ! {
    #[cfg(feature = "std")]
    {
        error.log(crate::log::Level::Fatal);
        fatal(message, location)
    }
    #[cfg(not(feature = "std"))]
    {
        panic!("[PANIC] {message}\n        at {location}\n{error:#}")
    }
}
