//! Default error formatter implementation.
//!
//! [`DefaultErrorFormatter`] prints an error as a header line with the code
//! and the first line of the message, the remaining message lines (contexts
//! added by [`Error::wrap`]), the origin, the failing expression and finally
//! the propagation trace, oldest crossing first:
//!
//! ```text
//! [!] Error 500: ID too low
//!   | context: Processing ID: 100
//!     at app::process_user (src/main.rs:27) [origin]
//!     expression: parse_id(raw_id)
//!     at app::process_user (src/main.rs:27)
//!     at app::app_main (src/main.rs:35)
//! ```
//!
//! Two configurations are provided: [`DefaultErrorFormatter::PLAIN`] (the
//! default, safe for log files) and [`DefaultErrorFormatter::ANSI`] for
//! terminals.
//!
//! [`Error::wrap`]: crate::Error::wrap

use core::fmt;

use crate::{
    Error,
    hooks::formatting::{ErrorFormatterHook, ReportLayout},
};

/// The default error formatter, configurable through its prefix and suffix
/// strings.
///
/// ```rust
/// use faultline::hooks::{
///     builtin_hooks::error_formatter::DefaultErrorFormatter,
///     formatting::register_error_formatter_hook,
/// };
///
/// register_error_formatter_hook(DefaultErrorFormatter::ANSI);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DefaultErrorFormatter {
    /// Printed around the error code, before the first message line
    pub header: LineFormatting,
    /// Applied to every message line after the first
    pub message_continuation: LineFormatting,
    /// Applied to the origin line
    pub origin: LineFormatting,
    /// Applied to the failing expression line
    pub expression: LineFormatting,
    /// Applied to each trace entry
    pub trace_entry: LineFormatting,
}

impl DefaultErrorFormatter {
    /// Plain text without escape codes.
    pub const PLAIN: Self = Self {
        header: LineFormatting::new("[!] Error ", ": "),
        message_continuation: LineFormatting::new("", "\n"),
        origin: LineFormatting::new("    at ", " [origin]\n"),
        expression: LineFormatting::new("    expression: ", "\n"),
        trace_entry: LineFormatting::new("    at ", "\n"),
    };
    /// The formatter used when no other formatter is registered, an alias
    /// for [`PLAIN`](Self::PLAIN).
    pub const DEFAULT: Self = Self::PLAIN;
    /// Colored output for terminals supporting ANSI escape codes.
    pub const ANSI: Self = Self {
        header: LineFormatting::new("\x1b[1;31m[!] Error ", ":\x1b[0m "),
        message_continuation: LineFormatting::new("\x1b[1;31m", "\x1b[0m\n"),
        origin: LineFormatting::new("    \x1b[0;90mat\x1b[0m ", " \x1b[0;33m[origin]\x1b[0m\n"),
        expression: LineFormatting::new("    \x1b[0;90mexpression:\x1b[0m ", "\n"),
        trace_entry: LineFormatting::new("    \x1b[0;90mat\x1b[0m ", "\n"),
    };
}

impl Default for DefaultErrorFormatter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ErrorFormatterHook for DefaultErrorFormatter {
    fn format_error(
        &self,
        error: &Error,
        layout: ReportLayout,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut lines = error.message().split('\n');
        writeln!(
            f,
            "{}{}{}{}",
            self.header.prefix,
            error.code(),
            self.header.suffix,
            lines.next().unwrap_or_default()
        )?;
        for line in lines {
            self.message_continuation.write(f, line)?;
        }
        if layout == ReportLayout::Standalone {
            self.origin.write(f, error.origin())?;
        }
        if let Some(expression) = error.expression() {
            self.expression.write(f, expression)?;
        }
        for entry in error.trace() {
            self.trace_entry.write(f, entry)?;
        }
        Ok(())
    }
}

/// Prefix and suffix strings wrapped around a single line.
#[derive(Debug, Clone, Copy)]
pub struct LineFormatting {
    /// Text prepended to the line
    pub prefix: &'static str,
    /// Text appended to the line, usually ending with a newline
    pub suffix: &'static str,
}

impl LineFormatting {
    /// Creates a new line formatting configuration.
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, content: impl fmt::Display) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, content, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::String};

    use super::*;
    use crate::location::Location;

    struct Plain<'a>(&'a Error, ReportLayout);

    impl fmt::Display for Plain<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            DefaultErrorFormatter::PLAIN.format_error(self.0, self.1, f)
        }
    }

    fn render(error: &Error, layout: ReportLayout) -> String {
        format!("{}", Plain(error, layout))
    }

    #[test]
    fn test_plain_layout() {
        let origin = Location::with_function("src/user.rs", 27, 9, "app::process_user");
        let error = Error::with_origin(500, "ID too low", origin)
            .wrap("Processing ID: 100")
            .with_expression("parse_id(raw_id)");

        assert_eq!(
            render(&error, ReportLayout::Standalone),
            "[!] Error 500: ID too low\n\
             \x20 | context: Processing ID: 100\n\
             \x20   at app::process_user (src/user.rs:27) [origin]\n\
             \x20   expression: parse_id(raw_id)\n"
        );
    }

    #[test]
    fn test_layout_without_origin() {
        let origin = Location::with_function("src/user.rs", 27, 9, "app::process_user");
        let error = Error::with_origin(404, "User not found", origin);
        assert_eq!(
            render(&error, ReportLayout::WithoutOrigin),
            "[!] Error 404: User not found\n"
        );
    }

    #[cfg(feature = "trace")]
    #[test]
    fn test_trace_entries_follow_origin() {
        let origin = Location::with_function("src/c.rs", 3, 1, "app::c");
        let error = Error::with_origin(500, "disk full", origin)
            .attach_trace(Location::with_function("src/b.rs", 2, 1, "app::b"))
            .attach_trace(Location::with_function("src/a.rs", 1, 1, "app::a"));

        let rendered = render(&error, ReportLayout::Standalone);
        let origin_at = rendered.find("app::c").unwrap();
        let b_at = rendered.find("app::b").unwrap();
        let a_at = rendered.find("app::a").unwrap();
        assert!(origin_at < b_at && b_at < a_at);
    }

    #[test]
    fn test_ansi_keeps_content() {
        struct Ansi<'a>(&'a Error);
        impl fmt::Display for Ansi<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                DefaultErrorFormatter::ANSI.format_error(self.0, ReportLayout::Standalone, f)
            }
        }

        let error = Error::new(13, "Permission denied");
        let rendered = format!("{}", Ansi(&error));
        assert!(rendered.contains("\x1b["));
        assert!(rendered.contains("13"));
        assert!(rendered.contains("Permission denied"));
    }
}
