//! Error types for file-sink configuration.
//!
//! Only sink setup can fail in this crate; logging calls themselves are
//! infallible by contract. A [`SinkError`] is produced by the file sink's
//! naming and initialization steps and reported by the dispatcher as a
//! CRITICAL console line rather than propagated to the host program.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while naming or opening the active log file.
#[derive(Debug, Error)]
pub enum SinkError {
    /// A name was assigned while a previous one is still set.
    #[error("log file name is already set to `{0}`")]
    AlreadyNamed(String),

    /// The logging directory could not be created.
    #[error("failed to create logging directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log file could not be opened for writing.
    #[error("failed to open log file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
