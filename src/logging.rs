//! Log file setup
//!
//! Every event becomes one line, `<timestamp> - <LEVEL> - <message>`, appended
//! to a single file shared by all copy tasks. The subscriber is installed once
//! in `main`; library code only uses the `tracing` macros.

use crate::error::{IoResultExt, Result, SorterError};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

/// Timestamp layout, e.g. `2024-03-01 14:02:11,532`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Formats events as `timestamp - LEVEL - message`
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now();
        write!(
            writer,
            "{} - {} - ",
            now.format(TIMESTAMP_FORMAT),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Writer shared by every task; one lock per record keeps lines whole
#[derive(Debug)]
pub struct SharedWriter<W> {
    inner: Arc<Mutex<W>>,
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: Write> SharedWriter<W> {
    /// Wrap a writer for shared use
    pub fn new(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }
}

/// Per-event handle returned by [`SharedWriter`]
pub struct SharedWriterGuard<W> {
    inner: Arc<Mutex<W>>,
}

impl<'a, W: Write + 'a> MakeWriter<'a> for SharedWriter<W> {
    type Writer = SharedWriterGuard<W>;

    fn make_writer(&'a self) -> Self::Writer {
        SharedWriterGuard {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: Write> Write for SharedWriterGuard<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer lock poisoned"))?;
        // the formatter hands over a full record; write it under one lock
        guard.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer lock poisoned"))?;
        guard.flush()
    }
}

/// Build the sorter's subscriber over any shared writer
pub fn subscriber<W>(writer: SharedWriter<W>) -> impl Subscriber + Send + Sync
where
    W: Write + Send + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .event_format(LineFormat)
        .with_writer(writer)
        .with_env_filter(filter)
        .finish()
}

/// Open the log file in append mode and install the global subscriber
pub fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_path(path)?;

    tracing::subscriber::set_global_default(subscriber(SharedWriter::new(file)))
        .map_err(|e| SorterError::config(format!("logging already initialized: {}", e)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// In-memory log capture for tests
    #[derive(Clone)]
    pub struct CapturedLog {
        pub(crate) writer: SharedWriter<Vec<u8>>,
    }

    impl CapturedLog {
        pub fn new() -> Self {
            Self {
                writer: SharedWriter::new(Vec::new()),
            }
        }

        /// Install as the subscriber for the current thread
        pub fn set_default(&self) -> tracing::subscriber::DefaultGuard {
            tracing::subscriber::set_default(subscriber(self.writer.clone()))
        }

        pub fn lines(&self) -> Vec<String> {
            let buf = self.writer.inner.lock().unwrap();
            String::from_utf8_lossy(&buf)
                .lines()
                .map(str::to_owned)
                .collect()
        }

        /// Lines whose level field equals `level`
        pub fn lines_at(&self, level: &str) -> Vec<String> {
            let marker = format!(" - {} - ", level);
            self.lines()
                .into_iter()
                .filter(|l| l.contains(&marker))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::CapturedLog;
    use super::*;

    #[test]
    fn test_line_layout() {
        let log = CapturedLog::new();
        {
            let _guard = log.set_default();
            tracing::info!("File /a/b.txt copied to /out/txt");
            tracing::error!("Copying error /a/c.bin: boom");
        }

        let lines = log.lines();
        assert_eq!(lines.len(), 2);

        let parts: Vec<&str> = lines[0].splitn(3, " - ").collect();
        assert_eq!(parts.len(), 3);
        let (seconds, millis) = parts[0].split_once(',').unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(seconds, "%Y-%m-%d %H:%M:%S").is_ok());
        assert_eq!(millis.len(), 3);
        assert_eq!(parts[1], "INFO");
        assert_eq!(parts[2], "File /a/b.txt copied to /out/txt");

        assert!(lines[1].ends_with(" - ERROR - Copying error /a/c.bin: boom"));
    }

    #[test]
    fn test_concurrent_records_stay_whole() {
        let log = CapturedLog::new();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let sub = subscriber(log.writer.clone());
                std::thread::spawn(move || {
                    tracing::subscriber::with_default(sub, || {
                        for i in 0..50 {
                            tracing::info!("record {}-{} {}", t, i, "x".repeat(200));
                        }
                    })
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let lines = log.lines();
        assert_eq!(lines.len(), 400);
        for line in lines {
            assert!(line.contains(" - INFO - record "));
            assert!(line.ends_with(&"x".repeat(200)));
        }
    }

    #[test]
    fn test_init_logging_appends() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sorter.log");
        std::fs::write(&path, "previous run\n").unwrap();

        init_logging(&path).unwrap();
        tracing::info!("appended record");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("previous run\n"));
        assert!(content.contains(" - INFO - appended record"));
    }
}
