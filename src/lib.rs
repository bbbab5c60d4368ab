//! # duolog
//!
//! A minimal leveled logging facility: each call renders a printf-style
//! message template with typed arguments, stamps it with the local time and
//! a severity label, and dispatches it synchronously to a colorized console
//! sink and, when one is active, a single log file.
//!
//! ## Pipeline
//!
//! The crate is organized leaf-first around the log-event pipeline:
//!
//! - `level`: the closed severity set and its label/color registry
//! - `format`: type-safe printf-style template rendering
//! - `event`: the immutable per-call record (timestamp, severity, content)
//! - `console`: the colorized standard-output sink
//! - `file`: the single-active-file sink and its lifecycle state machine
//! - `logger`: the dispatcher tying formatter, event, and sinks together
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use duolog::{Logger, vals};
//!
//! let log = Logger::new();
//!
//! // Console only.
//! log.info("listening on %s:%u", vals!["0.0.0.0", 8080u16]);
//!
//! // Mirror lines into ./logs/server.log until stopped.
//! log.set_file_logger("server.log", false);
//! log.warn("%d connections queued", vals![17]);
//! log.stop_file_logging();
//! ```
//!
//! ## Guarantees
//!
//! - No logging call ever returns an error or panics; sink failures degrade
//!   (skipped file write, uncolored label, empty timestamp) instead.
//! - At most one file is open for logging at a time; switching targets
//!   flushes and closes the previous file first, and the handle is released
//!   on every exit path including drop.
//! - `Logger` is `Send + Sync`; file access is serialized by an internal
//!   lock and console lines are written atomically.
//!
//! Deliberate non-goals: no structured/JSON output, no rotation, no
//! buffering or asynchronous queue. Every call blocks until both sinks have
//! completed.

/// Severity levels and their display registry
///
/// The closed five-severity enumeration plus the constant mapping to display
/// labels and console colors. Lookups are total and infallible.
pub mod level;

/// Printf-style template rendering with typed arguments
///
/// `render` substitutes `%s`/`%d`-style placeholders from a slice of
/// [`format::Value`]s into a dynamically growing buffer, with a documented
/// degradation contract instead of errors. The [`vals!`] macro builds the
/// argument slice.
pub mod format;

/// The immutable per-call log record
///
/// Captures the local wall-clock timestamp at construction and renders the
/// shared `[ts] [LABEL] content` line form.
pub mod event;

/// Colorized console sink
///
/// Writes one decorated line per event to standard output, coloring the
/// severity label only, with an optional flush-on-write (default on).
pub mod console;

/// Single-active-file sink
///
/// The `Empty -> Named -> Open -> Empty` lifecycle state machine, with
/// leak-free target switching and idempotent finish.
pub mod file;

/// The dispatcher
///
/// [`Logger`] orchestrates formatter, event construction, and both sinks,
/// and exposes the five severity-fixed entry points.
pub mod logger;

/// Sink configuration errors
pub mod error;

// Re-export the primary surface so typical callers only import from the
// crate root.
pub use console::ConsoleSink;
pub use error::SinkError;
pub use event::LogEvent;
pub use file::{FileSink, SinkState};
pub use format::{render, Value};
pub use level::{LevelStyle, Severity};
pub use logger::Logger;

/// The current crate version, from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process-wide constants for the logging pipeline.
pub mod defaults {
    /// Directory receiving log files, created on demand.
    pub const LOG_DIR: &str = "./logs";

    /// File name used when a sink is initialized without one.
    pub const FILE_NAME: &str = "duolog.log";

    /// Timestamp layout on every log line, second resolution.
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Date layout for date-prefixed file names.
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}
