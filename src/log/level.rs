use alloc::{borrow::ToOwned, string::String};
use core::{fmt, str::FromStr};

/// Severity of a log record, ordered from least to most severe.
///
/// [`Level::None`] sorts above every real severity and is only meaningful as
/// a filter: a sink whose level is `None` writes nothing at all.
///
/// ```rust
/// use faultline::log::Level;
///
/// assert!(Level::Warn > Level::Info);
/// assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
/// assert_eq!("ERROR".parse::<Level>().unwrap(), Level::Error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Fine grained diagnostics.
    Trace = 0,
    /// Diagnostics for developers.
    Debug = 1,
    /// Normal operation.
    #[default]
    Info = 2,
    /// Something unexpected that the program recovers from.
    Warn = 3,
    /// A failed operation.
    Error = 4,
    /// A failure the program does not survive.
    Fatal = 5,
    /// Filter value that disables all output.
    None = 6,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Self; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::None,
    ];

    /// The upper-case tag printed in log records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::None => "NONE",
        }
    }

    pub(crate) const fn ansi_color(self) -> &'static str {
        match self {
            Self::Trace => "\x1b[0;90m",
            Self::Debug => "\x1b[0;36m",
            Self::Info => "\x1b[0;32m",
            Self::Warn => "\x1b[0;33m",
            Self::Error => "\x1b[1;31m",
            Self::Fatal => "\x1b[41;37m",
            Self::None => "",
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Trace,
            1 => Self::Debug,
            2 => Self::Info,
            3 => Self::Warn,
            4 => Self::Error,
            5 => Self::Fatal,
            _ => Self::None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level {:?}", self.0)
    }
}

impl core::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let level = match name.to_ascii_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            "fatal" => Self::Fatal,
            "none" | "off" => Self::None,
            _ => return Err(ParseLevelError(name.to_owned())),
        };
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_ordering() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Trace".parse(), Ok(Level::Trace));
        assert_eq!(" debug ".parse(), Ok(Level::Debug));
        assert_eq!("WARNING".parse(), Ok(Level::Warn));
        assert_eq!("off".parse(), Ok(Level::None));
        assert!("loud".parse::<Level>().is_err());
    }

    #[test]
    fn test_u8_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_u8(level as u8), level);
        }
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:<5}|", Level::Info), "INFO |");
    }
}
