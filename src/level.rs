//! # Severity Levels and Display Registry
//!
//! This module defines the closed set of log severities and the process-wide
//! constant mapping from each severity to its display label and console color.
//! The mapping is total: every severity has exactly one label and one color,
//! so lookups can never fail and callers never need to handle an error case.
//!
//! ## Severity Table
//!
//! | Severity   | Label      | Console style        |
//! |------------|------------|----------------------|
//! | `Info`     | `INFO`     | blue                 |
//! | `Debug`    | `DEBUG`    | green                |
//! | `Warn`     | `WARN`     | yellow               |
//! | `Critical` | `CRITICAL` | red                  |
//! | `Fatal`    | `FATAL`    | black on red         |
//!
//! The ordering of the enum follows declaration order and carries no urgency
//! semantics beyond the display mapping; there is no level filtering in this
//! crate.

use colored::Color;
use std::fmt;

/// Log severity, the closed five-element enumeration driving label and color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Routine informational messages
    Info,

    /// Diagnostic detail useful during development
    Debug,

    /// Recoverable anomalies worth operator attention
    Warn,

    /// Serious failures the program can survive
    Critical,

    /// Unrecoverable failures, typically logged just before exit
    Fatal,
}

/// Console styling for a severity label: a foreground color and an optional
/// background color (only `Fatal` uses a background).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelStyle {
    pub fg: Color,
    pub bg: Option<Color>,
}

impl Severity {
    /// All severities in declaration order.
    ///
    /// Useful for exhaustive table checks and for callers that want to
    /// enumerate the registry without hard-coding the variants.
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Debug,
        Severity::Warn,
        Severity::Critical,
        Severity::Fatal,
    ];

    /// The display label printed between brackets on every log line.
    ///
    /// Total over the severity set; the returned string is a process-wide
    /// constant and never allocated.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Warn => "WARN",
            Severity::Critical => "CRITICAL",
            Severity::Fatal => "FATAL",
        }
    }

    /// The console color style applied to the label (and only the label).
    ///
    /// `Fatal` is the one severity styled with a background color, black text
    /// on red, so it stands out even in a wall of red `CRITICAL` lines.
    pub const fn style(self) -> LevelStyle {
        match self {
            Severity::Info => LevelStyle {
                fg: Color::Blue,
                bg: None,
            },
            Severity::Debug => LevelStyle {
                fg: Color::Green,
                bg: None,
            },
            Severity::Warn => LevelStyle {
                fg: Color::Yellow,
                bg: None,
            },
            Severity::Critical => LevelStyle {
                fg: Color::Red,
                bg: None,
            },
            Severity::Fatal => LevelStyle {
                fg: Color::Black,
                bg: Some(Color::Red),
            },
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
