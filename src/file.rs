//! # File Sink
//!
//! The single active log-file target, modeled as an explicit state machine:
//!
//! ```text
//! Empty --set_name--> Named --init--> Open --write*--> Open --finish--> Empty
//!                       ^                                                 |
//!                       +--------------- set_name <----------------------+
//! ```
//!
//! - **Empty**: no name, no handle.
//! - **Named**: a file name is set and the directory-qualified path is
//!   implied (`<logging-dir>/<name>`), but nothing is open yet.
//! - **Open**: the logging directory exists (created on demand) and the file
//!   is open for truncating write.
//!
//! `init` on an already-open sink finishes the old handle before opening
//! fresh, which is what makes switching the active log file leak-free.
//! `write` outside `Open` is a silent no-op, so logging calls are safe before
//! any file target has been configured. `finish` flushes, closes, and clears
//! the sink's identity (name and path), returning it to `Empty` for full
//! reuse; it is idempotent. Dropping the sink finishes it, so the handle is
//! released on every exit path.
//!
//! At most one `FileSink` is active per [`Logger`](crate::Logger); the
//! dispatcher owns it behind a mutex rather than as hidden global state.

use crate::defaults;
use crate::error::SinkError;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// Observable lifecycle state of a [`FileSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkState {
    /// No name, no handle
    Empty,
    /// Name set, not yet opened
    Named,
    /// File open for writing
    Open,
}

/// The at-most-one-open-file sink.
#[derive(Debug)]
pub struct FileSink {
    name: String,
    dir: PathBuf,
    handle: Option<File>,
}

impl FileSink {
    /// An empty sink targeting `dir` as its logging directory.
    ///
    /// The directory is not touched until [`init`](Self::init) runs.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSink {
            name: String::new(),
            dir: dir.into(),
            handle: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SinkState {
        if self.handle.is_some() {
            SinkState::Open
        } else if self.name.is_empty() {
            SinkState::Empty
        } else {
            SinkState::Named
        }
    }

    /// Whether the sink currently owns an open file handle.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// The logical file name, empty while the sink is `Empty`.
    pub fn file_name(&self) -> &str {
        &self.name
    }

    /// The directory-qualified path the sink writes to.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    /// Assign the logical file name.
    ///
    /// Fails with [`SinkError::AlreadyNamed`] if a name is still set; callers
    /// that want to retarget the sink must [`finish`](Self::finish) first,
    /// which clears the identity.
    pub fn set_name(&mut self, name: &str) -> Result<(), SinkError> {
        if !self.name.is_empty() {
            return Err(SinkError::AlreadyNamed(self.name.clone()));
        }
        self.name = name.to_string();
        Ok(())
    }

    /// Create the logging directory if absent and open the file for
    /// truncating write.
    ///
    /// If the sink is unnamed, the default file name is assigned first. If a
    /// handle is already open, it is finished (flushed and closed) before the
    /// fresh open, but the name just assigned is kept, so re-initialization
    /// after an explicit switch lands on the new target.
    pub fn init(&mut self) -> Result<(), SinkError> {
        if self.name.is_empty() {
            self.name = defaults::FILE_NAME.to_string();
        }

        if self.handle.is_some() {
            let name = self.name.clone();
            self.finish();
            self.name = name;
        }

        fs::create_dir_all(&self.dir).map_err(|source| SinkError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path();
        let file = File::create(&path).map_err(|source| SinkError::Open {
            path: path.clone(),
            source,
        })?;
        self.handle = Some(file);
        Ok(())
    }

    /// Append raw bytes to the open file.
    ///
    /// No line framing is added here; that is the dispatcher's job. Outside
    /// `Open` this is a silent no-op, and write errors on a vanished file are
    /// swallowed, both per the best-effort logging contract.
    pub fn write(&mut self, text: &str) {
        if let Some(file) = self.handle.as_mut() {
            let _ = file.write_all(text.as_bytes());
        }
    }

    /// Flush and close the file, clearing the sink back to `Empty`.
    ///
    /// Finishing clears the name as well as the handle, so the sink is
    /// immediately reusable with a new target. Idempotent: finishing a sink
    /// that is not open only clears any pending name.
    pub fn finish(&mut self) {
        if let Some(mut file) = self.handle.take() {
            let _ = file.flush();
        }
        self.name.clear();
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        self.finish();
    }
}
