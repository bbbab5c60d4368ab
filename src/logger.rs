//! # Dispatcher
//!
//! [`Logger`] ties the pipeline together: render the template through the
//! formatter, build an immutable [`LogEvent`], hand it to the console sink,
//! then to the file sink if one is active. Dispatch is plain and sequential;
//! there is no per-call concurrency, no queue, and no backpressure, so every
//! call returns once both sinks have completed.
//!
//! The file sink is an owned field behind a `parking_lot::Mutex` rather than
//! a process-wide global: "at most one active file target" is a property of
//! the `Logger` instance, and the mutex is the single lock the open/write/
//! finish sequence needs when the host logs from multiple threads. Console
//! lines are assembled as one string before writing, so colored labels
//! cannot interleave either.
//!
//! None of the logging entry points returns an error. The only reported
//! failure is "could not open the requested log file", which
//! [`set_file_logger`](Logger::set_file_logger) surfaces as a CRITICAL
//! console line while leaving the file sink inactive.
//!
//! ## Example
//!
//! ```rust,no_run
//! use duolog::{Logger, vals};
//!
//! let log = Logger::new();
//! log.info("starting %s v%s", vals!["worker", "0.2.0"]);
//!
//! log.set_file_logger("worker.log", false);
//! log.warn("queue depth %d above threshold %d", vals![87, 50]);
//! log.stop_file_logging();
//! ```

use crate::console::ConsoleSink;
use crate::defaults;
use crate::event::{self, LogEvent};
use crate::file::FileSink;
use crate::format::{render, Value};
use crate::level::Severity;
use crate::vals;
use parking_lot::Mutex;
use std::path::PathBuf;

/// The logging entry point: console sink plus the optional file target.
#[derive(Debug)]
pub struct Logger {
    console: ConsoleSink,
    file: Mutex<FileSink>,
}

impl Logger {
    /// A logger writing file output under the default `./logs` directory.
    pub fn new() -> Self {
        Self::with_log_dir(defaults::LOG_DIR)
    }

    /// A logger writing file output under `dir` instead of `./logs`.
    ///
    /// The directory is only created once a file target is set.
    pub fn with_log_dir(dir: impl Into<PathBuf>) -> Self {
        Logger {
            console: ConsoleSink::new(),
            file: Mutex::new(FileSink::new(dir)),
        }
    }

    /// Render, build the event, and dispatch to both sinks.
    ///
    /// The file write is a no-op while no file target is active. Never
    /// returns or panics on sink failure; logging is a best-effort side
    /// channel.
    pub fn log(&self, severity: Severity, template: &str, args: &[Value<'_>]) {
        let event = LogEvent::new(severity, render(template, args));
        self.console.write(&event);

        let mut sink = self.file.lock();
        if sink.is_open() {
            // The dispatcher owns line framing; the sink writes raw bytes.
            sink.write(&format!("{}\n", event.plain_line()));
        }
    }

    /// Log at `INFO`.
    pub fn info(&self, template: &str, args: &[Value<'_>]) {
        self.log(Severity::Info, template, args);
    }

    /// Log at `DEBUG`.
    pub fn debug(&self, template: &str, args: &[Value<'_>]) {
        self.log(Severity::Debug, template, args);
    }

    /// Log at `WARN`.
    pub fn warn(&self, template: &str, args: &[Value<'_>]) {
        self.log(Severity::Warn, template, args);
    }

    /// Log at `CRITICAL`.
    pub fn critical(&self, template: &str, args: &[Value<'_>]) {
        self.log(Severity::Critical, template, args);
    }

    /// Log at `FATAL`.
    pub fn fatal(&self, template: &str, args: &[Value<'_>]) {
        self.log(Severity::Fatal, template, args);
    }

    /// Switch the active file target to `name`, finishing any previous one.
    ///
    /// With `include_date` set, the file name is prefixed with the current
    /// local date: `YYYY-MM-DD_<name>`. The previous file, if any, is flushed
    /// and closed before the new one opens, so its content is complete the
    /// moment this returns. A failure to open the new target is reported as
    /// a CRITICAL console line and leaves file logging inactive; it is never
    /// raised to the caller.
    pub fn set_file_logger(&self, name: &str, include_date: bool) {
        let target = if include_date {
            format!("{}_{}", event::local_date(), name)
        } else {
            name.to_string()
        };

        let result = {
            let mut sink = self.file.lock();
            sink.finish();
            sink.set_name(&target).and_then(|_| sink.init())
        };

        if let Err(err) = result {
            // Reported through the pipeline itself; the lock is released, and
            // with the sink inactive this line goes to the console only.
            self.critical(
                "could not open log file %s: %s",
                vals![target, err.to_string()],
            );
        }
    }

    /// Finish the active file target, if any.
    ///
    /// Safe to call when no file is active; subsequent log calls simply skip
    /// the file write.
    pub fn stop_file_logging(&self) {
        self.file.lock().finish();
    }

    /// The logical name of the active file target, or `None`.
    pub fn file_target(&self) -> Option<String> {
        let sink = self.file.lock();
        if sink.is_open() {
            Some(sink.file_name().to_string())
        } else {
            None
        }
    }

    /// Toggle flushing the console stream after every write (default on).
    pub fn set_console_flush(&self, enabled: bool) {
        self.console.set_flush_on_write(enabled);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    /// A logger with no file target performs no filesystem writes, so the
    /// logging directory is never even created.
    #[test]
    fn console_only_touches_no_files() -> Result<()> {
        let dir = tempdir()?;
        let logs = dir.path().join("logs");
        let log = Logger::with_log_dir(&logs);

        log.info("no file sink active", vals![]);
        log.fatal("still none", vals![]);

        assert!(!logs.exists());
        assert_eq!(log.file_target(), None);
        Ok(())
    }

    /// `set_file_logger` activates the target and reports it by name.
    #[test]
    fn file_target_name_tracks_active_sink() -> Result<()> {
        let dir = tempdir()?;
        let log = Logger::with_log_dir(dir.path());

        log.set_file_logger("a.log", false);
        assert_eq!(log.file_target().as_deref(), Some("a.log"));

        log.stop_file_logging();
        assert_eq!(log.file_target(), None);
        Ok(())
    }

    /// An unopenable file target is reported without panicking and leaves
    /// file logging inactive.
    #[test]
    fn open_failure_is_reported_not_raised() -> Result<()> {
        let dir = tempdir()?;
        // A directory where the file should go forces the open to fail.
        std::fs::create_dir_all(dir.path().join("busy.log"))?;
        let log = Logger::with_log_dir(dir.path());

        log.set_file_logger("busy.log", false);
        assert_eq!(log.file_target(), None);

        // Logging afterwards must still be safe.
        log.info("carrying on", vals![]);
        Ok(())
    }

    /// Concurrent logging from several threads neither panics nor loses the
    /// file sink; the mutex serializes the open/write/finish sequence.
    #[test]
    fn concurrent_logging_is_safe() -> Result<()> {
        use std::sync::Arc;

        let dir = tempdir()?;
        let log = Arc::new(Logger::with_log_dir(dir.path()));
        log.set_file_logger("threads.log", false);

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        log.debug("thread %d message %d", vals![t, i]);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        log.stop_file_logging();
        let content = std::fs::read_to_string(dir.path().join("threads.log"))?;
        assert_eq!(content.lines().count(), 100);
        Ok(())
    }
}
