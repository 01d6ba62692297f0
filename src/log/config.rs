//! Configuration of the logging sink.
//!
//! # Environment Variables
//!
//! [`LogConfig::from_env`] reads:
//!
//! - `FAULTLINE_LOG` - the minimum level, e.g. `debug` or `none`
//! - `FAULTLINE_LOG_FILE` - a file that records are appended to, in
//!   addition to standard error
//! - `FAULTLINE_COLOR` - `always`, `never` or `auto` (the default, color only
//!   when standard error is a terminal)
//!
//! Unknown values are ignored and the defaults kept.

use std::{io::IsTerminal, path::PathBuf, sync::OnceLock};

use super::Level;

/// Settings for a [`Logger`](super::Logger).
///
/// ```rust
/// use faultline::log::{Level, LogConfig};
///
/// let config = LogConfig {
///     level: Level::Debug,
///     ..LogConfig::default()
/// };
/// assert!(config.file.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Records below this level are dropped before being formatted.
    pub level: Level,
    /// File records are appended to, if any.
    pub file: Option<PathBuf>,
    /// Whether console output colors the level tag.
    pub color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            file: None,
            color: std::io::stderr().is_terminal(),
        }
    }
}

#[derive(Debug)]
struct FaultlineEnvOptions {
    level: Option<Level>,
    file: Option<PathBuf>,
    color: Option<bool>,
}

impl FaultlineEnvOptions {
    fn get() -> &'static Self {
        static FAULTLINE_FLAGS: OnceLock<FaultlineEnvOptions> = OnceLock::new();

        FAULTLINE_FLAGS.get_or_init(|| FaultlineEnvOptions {
            level: std::env::var_os("FAULTLINE_LOG")
                .and_then(|var| var.to_string_lossy().parse().ok()),
            file: std::env::var_os("FAULTLINE_LOG_FILE")
                .filter(|var| !var.is_empty())
                .map(PathBuf::from),
            color: std::env::var_os("FAULTLINE_COLOR")
                .and_then(|var| parse_color(&var.to_string_lossy())),
        })
    }
}

fn parse_color(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("always") {
        Some(true)
    } else if value.eq_ignore_ascii_case("never") {
        Some(false)
    } else {
        None
    }
}

impl LogConfig {
    /// The default configuration, overridden by the `FAULTLINE_*`
    /// environment variables.
    ///
    /// The environment is read once per process; later changes to it are
    /// not observed.
    #[must_use]
    pub fn from_env() -> Self {
        let options = FaultlineEnvOptions::get();
        let defaults = Self::default();
        Self {
            level: options.level.unwrap_or(defaults.level),
            file: options.file.clone().or(defaults.file),
            color: options.color.unwrap_or(defaults.color),
        }
    }
}
