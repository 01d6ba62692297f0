use alloc::{borrow::ToOwned, boxed::Box};
use core::{
    fmt,
    sync::atomic::{AtomicU8, Ordering},
};
use std::{io, path::Path, sync::Mutex};

use tracing::{Dispatch, dispatcher};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    Registry,
    filter::LevelFilter,
    fmt::{MakeWriter, writer::BoxMakeWriter},
    layer::SubscriberExt,
    reload,
};

use super::{
    InitError, Level, LogConfig,
    format::{RecordFormat, TARGET},
};
use crate::location::Location;

/// A logging sink writing records to the console and optionally a file.
///
/// Each record looks like
///
/// ```text
/// [2026-10-16 14:03:07] ERROR: Connection refused
///     at app::connect (src/net.rs:88)
/// ```
///
/// Records are [`tracing`] events dispatched to a subscriber private to the
/// logger, so installing one never touches the global `tracing` default.
/// The level filter is checked before anything is formatted, and can be
/// changed at runtime. Every record is formatted into one buffer and written
/// while holding the lock of each writer (the standard error lock, and a
/// mutex around the file), so records from different threads never
/// interleave. Write failures are ignored.
pub struct Logger {
    level: AtomicU8,
    filter: reload::Handle<LevelFilter, Registry>,
    dispatch: Dispatch,
}

fn level_filter(level: Level) -> LevelFilter {
    match level {
        Level::Trace => LevelFilter::TRACE,
        Level::Debug => LevelFilter::DEBUG,
        Level::Info => LevelFilter::INFO,
        Level::Warn => LevelFilter::WARN,
        Level::Error | Level::Fatal => LevelFilter::ERROR,
        Level::None => LevelFilter::OFF,
    }
}

fn open_append(path: &Path) -> Result<RollingFileAppender, InitError> {
    let open_failed = |source: Box<dyn core::error::Error + Send + Sync>| InitError::OpenFile {
        path: path.to_owned(),
        source,
    };
    let file_name = path.file_name().ok_or_else(|| {
        open_failed(Box::new(io::Error::new(
            io::ErrorKind::InvalidInput,
            "the path does not name a file",
        )))
    })?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .map_err(|error| open_failed(Box::new(error)))
}

impl Logger {
    /// Creates a logger writing to standard error, and to the configured file
    /// if any.
    ///
    /// The file is opened in append mode and created if missing. It never
    /// receives escape codes.
    pub fn new(config: &LogConfig) -> Result<Self, InitError> {
        let file = config.file.as_deref().map(open_append).transpose()?;
        Ok(Self::build(
            config.level,
            BoxMakeWriter::new(io::stderr),
            config.color,
            file,
        ))
    }

    pub(crate) fn to_stderr(level: Level, color: bool) -> Self {
        Self::build(level, BoxMakeWriter::new(io::stderr), color, None)
    }

    /// Creates a logger writing uncolored records to `make_writer` only.
    ///
    /// ```rust
    /// use faultline::log::{Level, Logger};
    ///
    /// let logger = Logger::with_writer(Level::Warn, std::io::sink);
    /// assert!(!logger.enabled(Level::Info));
    /// assert!(logger.enabled(Level::Error));
    /// ```
    pub fn with_writer<W>(level: Level, make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::build(level, BoxMakeWriter::new(make_writer), false, None)
    }

    fn build(
        level: Level,
        console: BoxMakeWriter,
        color: bool,
        file: Option<RollingFileAppender>,
    ) -> Self {
        let (filter, handle) = reload::Layer::new(level_filter(level));
        let console = tracing_subscriber::fmt::layer()
            .event_format(RecordFormat)
            .with_writer(console)
            .with_ansi(color);
        let file = file.map(|appender| {
            tracing_subscriber::fmt::layer()
                .event_format(RecordFormat)
                .with_writer(Mutex::new(appender))
                .with_ansi(false)
        });
        let subscriber = Registry::default().with(filter).with(console).with(file);

        Self {
            level: AtomicU8::new(level as u8),
            filter: handle,
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// The current minimum level.
    #[must_use]
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Changes the minimum level.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
        // Only fails once the subscriber is gone, which `self` prevents.
        let _ = self.filter.reload(level_filter(level));
    }

    /// Whether a record at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        let threshold = self.level();
        level != Level::None && threshold != Level::None && level >= threshold
    }

    /// Writes a record attributed to `location`.
    ///
    /// Trailing newlines of the message are dropped, since the location
    /// line follows it. [`Level::Fatal`] records are `ERROR` events carrying
    /// a `fatal` field.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>, location: &Location) {
        if !self.enabled(level) {
            return;
        }
        dispatcher::with_default(&self.dispatch, || emit(level, args, location));
    }
}

fn emit(level: Level, message: fmt::Arguments<'_>, location: &Location) {
    match level {
        Level::Trace => tracing::trace!(target: TARGET, location = %location, "{}", message),
        Level::Debug => tracing::debug!(target: TARGET, location = %location, "{}", message),
        Level::Info => tracing::info!(target: TARGET, location = %location, "{}", message),
        Level::Warn => tracing::warn!(target: TARGET, location = %location, "{}", message),
        Level::Error => tracing::error!(target: TARGET, location = %location, "{}", message),
        Level::Fatal => {
            tracing::error!(target: TARGET, fatal = true, location = %location, "{}", message);
        }
        Level::None => {}
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::String, sync::Arc, vec::Vec};
    use std::{io::Write, sync::Mutex, thread};

    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    const SITE: Location = Location::with_function("src/net.rs", 88, 5, "app::connect");

    #[test]
    fn test_record_format() {
        let capture = Capture::default();
        let logger = Logger::with_writer(Level::Trace, capture.clone());
        logger.log(Level::Error, format_args!("Connection refused"), &SITE);

        let output = capture.contents();
        let (stamp, rest) = output.split_once("] ").unwrap();
        assert!(stamp.starts_with('['));
        assert_eq!(stamp.len(), "[2026-10-16 14:03:07".len());
        assert_eq!(
            rest,
            "ERROR: Connection refused\n    at app::connect (src/net.rs:88)\n"
        );
    }

    #[test]
    fn test_fatal_records_are_tagged() {
        let capture = Capture::default();
        let logger = Logger::with_writer(Level::Fatal, capture.clone());
        logger.log(Level::Error, format_args!("below the filter"), &SITE);
        logger.log(Level::Fatal, format_args!("[PANIC] gone"), &SITE);

        let output = capture.contents();
        assert!(!output.contains("below the filter"));
        assert!(output.contains("FATAL: [PANIC] gone\n"));
    }

    #[test]
    fn test_level_filter() {
        let capture = Capture::default();
        let logger = Logger::with_writer(Level::Warn, capture.clone());
        logger.log(Level::Info, format_args!("hidden"), &SITE);
        logger.log(Level::Warn, format_args!("shown {}", 1), &SITE);

        let output = capture.contents();
        assert!(!output.contains("hidden"));
        assert!(output.contains("WARN: shown 1"));
    }

    #[test]
    fn test_none_disables_everything() {
        let capture = Capture::default();
        let logger = Logger::with_writer(Level::None, capture.clone());
        logger.log(Level::Fatal, format_args!("silent"), &SITE);
        assert!(capture.contents().is_empty());
        assert!(!logger.enabled(Level::None));
    }

    #[test]
    fn test_set_level_applies_immediately() {
        let capture = Capture::default();
        let logger = Logger::with_writer(Level::Error, capture.clone());
        logger.log(Level::Debug, format_args!("first"), &SITE);
        logger.set_level(Level::Debug);
        logger.log(Level::Debug, format_args!("second"), &SITE);

        let output = capture.contents();
        assert!(!output.contains("first"));
        assert!(output.contains("DEBUG: second"));
        assert_eq!(logger.level(), Level::Debug);
    }

    #[test]
    fn test_trailing_newlines_trimmed() {
        let capture = Capture::default();
        let logger = Logger::with_writer(Level::Info, capture.clone());
        logger.log(Level::Info, format_args!("report\n\n"), &SITE);
        assert!(
            capture
                .contents()
                .ends_with("INFO: report\n    at app::connect (src/net.rs:88)\n")
        );
    }

    #[test]
    fn test_concurrent_records_do_not_interleave() {
        const THREADS: usize = 8;
        const RECORDS: usize = 200;

        let capture = Capture::default();
        let logger = Arc::new(Logger::with_writer(Level::Info, capture.clone()));

        let workers: Vec<_> = (0..THREADS)
            .map(|worker| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    for record in 0..RECORDS {
                        logger.log(
                            Level::Warn,
                            format_args!("worker {worker} record {record}\n"),
                            &SITE,
                        );
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let output = capture.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), THREADS * RECORDS * 2);
        for record in lines.chunks(2) {
            let (stamp, message) = record[0].split_once("] ").unwrap();
            assert!(stamp.starts_with('['));
            assert!(message.starts_with("WARN: worker "));
            assert_eq!(record[1], "    at app::connect (src/net.rs:88)");
        }
        for worker in 0..THREADS {
            let prefix = format!("WARN: worker {worker} record ");
            assert_eq!(output.matches(&prefix).count(), RECORDS);
        }
    }

    #[test]
    fn test_file_receives_plain_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "existing\n").unwrap();

        let logger = Logger::new(&LogConfig {
            level: Level::Info,
            file: Some(path.clone()),
            color: true,
        })
        .unwrap();
        logger.log(Level::Warn, format_args!("disk at 91%"), &SITE);
        drop(logger);

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("existing\n"));
        assert!(written.contains("WARN: disk at 91%"));
        assert!(!written.contains('\x1b'));
    }

    #[test]
    fn test_unopenable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("app.log");

        let error = Logger::new(&LogConfig {
            level: Level::Info,
            file: Some(path.clone()),
            color: false,
        })
        .unwrap_err();
        let InitError::OpenFile { path: failed, .. } = error else {
            panic!("expected an open failure");
        };
        assert_eq!(failed, path);
    }
}
