//! The logging sink errors are reported through.
//!
//! A single process-wide [`Logger`] writes records to standard error and,
//! optionally, appends them to a file. It is configured either explicitly
//! with [`init`] or, on first use, from the `FAULTLINE_*` environment
//! variables described in [`config`]. Records are [`tracing`] events handled
//! by a `tracing-subscriber` stack owned by the logger; a global `tracing`
//! subscriber installed by the application is left alone.
//!
//! ```rust
//! use faultline::{
//!     log::{self, Level, LogConfig},
//!     log_info, log_warn,
//! };
//!
//! log::init(LogConfig {
//!     level: Level::Warn,
//!     ..LogConfig::default()
//! })
//! .unwrap();
//!
//! log_info!("not printed: below the filter");
//! log_warn!("cache miss rate at {}%", 40);
//! ```
//!
//! Errors are logged with [`log_error`](fn@log_error) or [`Error::log`]. Their record
//! carries the full report and names the error's origin.

pub mod config;
mod format;
mod level;
mod logger;

use alloc::boxed::Box;
use core::fmt;
use std::{path::PathBuf, sync::OnceLock};

pub use self::{
    config::LogConfig,
    level::{Level, ParseLevelError},
    logger::Logger,
};
use crate::Error;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Error returned by [`init`].
#[derive(Debug)]
pub enum InitError {
    /// The global logger was already configured, either by an earlier call
    /// to [`init`] or implicitly by logging before it.
    AlreadyInitialized,
    /// The log file could not be opened for appending.
    OpenFile {
        /// The configured path.
        path: PathBuf,
        /// The underlying failure.
        source: Box<dyn core::error::Error + Send + Sync>,
    },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "the logger is already initialized"),
            Self::OpenFile { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
        }
    }
}

impl core::error::Error for InitError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::AlreadyInitialized => None,
            Self::OpenFile { source, .. } => Some(&**source),
        }
    }
}

/// Installs the global logger.
///
/// Fails if a logger is already installed, including the implicit one
/// created by logging before calling this function.
pub fn init(config: LogConfig) -> Result<(), InitError> {
    if LOGGER.get().is_some() {
        return Err(InitError::AlreadyInitialized);
    }
    let logger = Logger::new(&config)?;
    LOGGER
        .set(logger)
        .map_err(|_| InitError::AlreadyInitialized)
}

/// The global logger.
///
/// If [`init`] was never called, a logger configured by
/// [`LogConfig::from_env`] is installed. A log file that cannot be opened is
/// skipped in that case.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| {
        let config = LogConfig::from_env();
        Logger::new(&config).unwrap_or_else(|_| Logger::to_stderr(config.level, config.color))
    })
}

/// The global minimum level.
#[must_use]
pub fn level() -> Level {
    logger().level()
}

/// Changes the global minimum level.
pub fn set_level(level: Level) {
    logger().set_level(level);
}

/// Logs the full report of `error` at [`Level::Error`].
pub fn log_error(error: &Error) {
    error.log(Level::Error);
}

impl Error {
    /// Logs the full report of this error at `level` through the global
    /// logger, attributed to the error's origin.
    pub fn log(&self, level: Level) {
        let logger = logger();
        if logger.enabled(level) {
            logger.log(
                level,
                format_args!("{}", self.report_without_origin()),
                self.origin(),
            );
        }
    }
}

/// Logs a formatted record at the given [`Level`], naming the current
/// function, file and line.
///
/// The arguments are only formatted if the level passes the filter.
///
/// ```rust
/// use faultline::{log::Level, log_at};
///
/// log_at!(Level::Debug, "retrying in {}ms", 250);
/// ```
#[macro_export]
macro_rules! log_at {
    ($level:expr, $($arg:tt)+) => {{
        let logger = $crate::log::logger();
        let level: $crate::log::Level = $level;
        if logger.enabled(level) {
            logger.log(level, $crate::__private::format_args!($($arg)+), &$crate::location!());
        }
    }};
}

/// Logs at [`Level::Trace`](crate::log::Level::Trace). See [`log_at!()`](crate::log_at!).
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)+) => { $crate::log_at!($crate::log::Level::Trace, $($arg)+) };
}

/// Logs at [`Level::Debug`](crate::log::Level::Debug). See [`log_at!()`](crate::log_at!).
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => { $crate::log_at!($crate::log::Level::Debug, $($arg)+) };
}

/// Logs at [`Level::Info`](crate::log::Level::Info). See [`log_at!()`](crate::log_at!).
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => { $crate::log_at!($crate::log::Level::Info, $($arg)+) };
}

/// Logs at [`Level::Warn`](crate::log::Level::Warn). See [`log_at!()`](crate::log_at!).
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => { $crate::log_at!($crate::log::Level::Warn, $($arg)+) };
}

/// Logs at [`Level::Error`](crate::log::Level::Error). See [`log_at!()`](crate::log_at!).
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => { $crate::log_at!($crate::log::Level::Error, $($arg)+) };
}

/// Logs at [`Level::Fatal`](crate::log::Level::Fatal). See [`log_at!()`](crate::log_at!).
///
/// This only logs; it does not terminate the process. Use
/// [`fatal`](crate::fatal::fatal) for that.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => { $crate::log_at!($crate::log::Level::Fatal, $($arg)+) };
}
