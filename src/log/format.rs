//! The record layout shared by the console and file layers.

use alloc::string::String;
use core::fmt::{self, Write as _};

use tracing::{
    Event, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    fmt::{FmtContext, FormatEvent, FormatFields, format::Writer},
    registry::LookupSpan,
};

use super::Level;

pub(super) const TARGET: &str = "faultline";
pub(super) const FATAL_FIELD: &str = "fatal";
pub(super) const LOCATION_FIELD: &str = "location";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[0;90m";

/// Formats an event as
///
/// ```text
/// [2026-10-16 14:03:07] ERROR: Connection refused
///     at app::connect (src/net.rs:88)
/// ```
///
/// Escape codes are only written when the layer was built with ANSI enabled.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct RecordFormat;

#[derive(Default)]
struct RecordFields {
    message: String,
    location: String,
    fatal: bool,
}

impl Visit for RecordFields {
    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == FATAL_FIELD {
            self.fatal = value;
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let target = match field.name() {
            "message" => &mut self.message,
            LOCATION_FIELD => &mut self.location,
            _ => return,
        };
        let _ = write!(target, "{value:?}");
    }
}

fn record_level(level: tracing::Level, fatal: bool) -> Level {
    match level {
        tracing::Level::TRACE => Level::Trace,
        tracing::Level::DEBUG => Level::Debug,
        tracing::Level::INFO => Level::Info,
        tracing::Level::WARN => Level::Warn,
        _ if fatal => Level::Fatal,
        _ => Level::Error,
    }
}

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = RecordFields::default();
        event.record(&mut fields);

        let level = record_level(*event.metadata().level(), fields.fatal);
        let message = fields.message.trim_end_matches('\n');
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);

        if writer.has_ansi_escapes() {
            writeln!(
                writer,
                "[{timestamp}] {}{level}{RESET}: {message}\n    {DIM}at{RESET} {}",
                level.ansi_color(),
                fields.location,
            )
        } else {
            writeln!(
                writer,
                "[{timestamp}] {level}: {message}\n    at {}",
                fields.location
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_level_marks_fatal_errors() {
        assert_eq!(record_level(tracing::Level::ERROR, true), Level::Fatal);
        assert_eq!(record_level(tracing::Level::ERROR, false), Level::Error);
        assert_eq!(record_level(tracing::Level::WARN, true), Level::Warn);
        assert_eq!(record_level(tracing::Level::TRACE, false), Level::Trace);
    }
}
