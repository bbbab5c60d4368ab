//! # Log Events
//!
//! A [`LogEvent`] is the immutable value handed to the sinks: the local
//! wall-clock timestamp captured at construction, the severity, its cached
//! display label, and the fully rendered message content. Events are built
//! once per logging call, dispatched, and dropped; they carry no identity
//! beyond their field values and are never mutated after construction.

use crate::defaults;
use crate::level::Severity;
use chrono::Local;

/// One logging call's immutable record.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEvent {
    /// Local date-time at construction, `YYYY-MM-DD HH:MM:SS`, or empty if
    /// the time source failed (never an error).
    pub timestamp: String,

    /// The severity of the call.
    pub severity: Severity,

    /// Display label, cached from the severity at construction.
    pub label: &'static str,

    /// Fully rendered message text.
    pub content: String,
}

impl LogEvent {
    /// Capture the current local time and build an event.
    ///
    /// Construction always succeeds: a failure to format the local time
    /// degrades the timestamp to an empty string rather than propagating,
    /// keeping the logging path infallible.
    pub fn new(severity: Severity, content: String) -> Self {
        LogEvent {
            timestamp: local_timestamp(),
            severity,
            label: severity.label(),
            content,
        }
    }

    /// The uncolored line form shared by both sinks, without a terminator:
    /// `[<timestamp>] [<LABEL>] <content>`.
    ///
    /// Line framing is the dispatcher's responsibility, so this deliberately
    /// omits the trailing newline.
    pub fn plain_line(&self) -> String {
        format!("[{}] [{}] {}", self.timestamp, self.label, self.content)
    }
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`, or an empty string if the
/// formatter reports an error.
pub(crate) fn local_timestamp() -> String {
    format_now(defaults::TIMESTAMP_FORMAT)
}

/// Current local date as `YYYY-MM-DD`, used for date-prefixed file names.
pub(crate) fn local_date() -> String {
    format_now(defaults::DATE_FORMAT)
}

fn format_now(pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(pattern.len());
    match write!(out, "{}", Local::now().format(pattern)) {
        Ok(()) => out,
        // Degrade to empty rather than failing the logging call.
        Err(_) => String::new(),
    }
}
