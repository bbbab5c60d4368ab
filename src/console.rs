//! # Console Sink
//!
//! Writes a [`LogEvent`] to the process's standard output as one line of the
//! form `[<timestamp>] [<SEVERITY>] <content>`, with the severity label
//! wrapped in a set-color/reset-color pair selected from the level registry.
//! The color decoration covers the label only; it is applied and reset inside
//! a single pre-assembled string, so concurrent writers cannot interleave a
//! set-color from one line with the content of another, and color can never
//! leak into the message text.
//!
//! Color handling goes through the `colored` crate, which turns the escape
//! sequences into no-ops when the stream is not a terminal or the platform
//! does not support them; the label is still printed either way.
//!
//! The sink also owns the process-wide "flush on write" flag (default
//! enabled): when set, the stream is flushed after every line so output is
//! visible immediately even if the program crashes right after the call.
//! Write errors are swallowed; a logging call never raises.

use crate::event::LogEvent;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// The colorized standard-output sink.
#[derive(Debug)]
pub struct ConsoleSink {
    flush_on_write: AtomicBool,
}

impl ConsoleSink {
    /// Create a sink with flush-on-write enabled, the default.
    pub fn new() -> Self {
        ConsoleSink {
            flush_on_write: AtomicBool::new(true),
        }
    }

    /// Toggle flushing the stream after every write.
    pub fn set_flush_on_write(&self, enabled: bool) {
        self.flush_on_write.store(enabled, Ordering::Relaxed);
    }

    /// Whether the stream is flushed after every write.
    pub fn flush_on_write(&self) -> bool {
        self.flush_on_write.load(Ordering::Relaxed)
    }

    /// Write one decorated line for `event`.
    ///
    /// Best-effort: I/O errors (e.g. a closed stdout) are ignored so the
    /// logging call cannot fail the host program.
    pub fn write(&self, event: &LogEvent) {
        let line = Self::decorated_line(event);

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{}", line);
        if self.flush_on_write() {
            let _ = handle.flush();
        }
    }

    /// Assemble the full line with the label colored per the registry.
    ///
    /// Kept separate from the I/O so tests can check the layout without
    /// capturing the stream.
    fn decorated_line(event: &LogEvent) -> String {
        let style = event.severity.style();
        let mut label = event.label.color(style.fg);
        if let Some(bg) = style.bg {
            label = label.on_color(bg);
        }
        format!("[{}] [{}] {}", event.timestamp, label, event.content)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}
