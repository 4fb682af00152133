//! Sink manager owning the file sink.
//!
//! The file handle lives behind a mutex and is only reachable through this
//! type. Each record is written with a single `write_all` while the mutex is
//! held, so concurrent emitters never interleave partial lines.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::console::Console;
use crate::error::{Error, Result};

/// Path of the file sink when the configuration does not name one.
pub const DEFAULT_LOG_FILE_PATH: &str = "log.log";

/// Whether this build carries the file sink at all.
pub const FILE_SINK_ENABLED: bool = cfg!(feature = "file-sink");

#[derive(Debug)]
pub struct SinkManager {
    path: PathBuf,
    enabled: bool,
    file: Mutex<Option<File>>,
}

impl SinkManager {
    /// A sink for `path`, enabled according to the `file-sink` feature.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            enabled: FILE_SINK_ENABLED,
            file: Mutex::new(None),
        }
    }

    /// A sink that behaves as if the file sink were compiled out.
    pub fn disabled(path: impl Into<PathBuf>) -> Self {
        Self {
            enabled: false,
            ..Self::new(path)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_open(&self) -> bool {
        self.slot().is_some()
    }

    /// Open the file for writing, truncating it.
    ///
    /// A handle that is already open is closed first. The outcome is
    /// reported on `console`; on failure the sink stays absent and the
    /// returned error is for callers that care, not a reason to stop.
    pub fn initialize(&self, console: &dyn Console) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let opened = {
            let mut slot = self.slot();
            if slot.take().is_some() {
                tracing::debug!(path = %self.path.display(), "closed previous file sink handle");
            }
            match File::create(&self.path) {
                Ok(file) => {
                    *slot = Some(file);
                    Ok(())
                }
                Err(source) => Err(Error::SinkOpen {
                    path: self.path.clone(),
                    source,
                }),
            }
        };

        match &opened {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "file sink opened");
                let _ = console.write_line(&format!("opened log file {}", self.path.display()));
            }
            Err(err) => {
                tracing::debug!(error = %err, "file sink failed to open");
                let _ = console.write_line(&err.to_string());
            }
        }
        opened
    }

    /// Flush and close the handle. Safe to call when nothing is open.
    pub fn teardown(&self) {
        if !self.enabled {
            return;
        }
        if let Some(mut file) = self.slot().take() {
            let _ = file.flush();
            tracing::debug!(path = %self.path.display(), "file sink closed");
        }
    }

    /// Append one record followed by a newline, then flush.
    pub fn write_line(&self, line: &str) -> Result<()> {
        if !self.enabled {
            return Err(Error::SinkDisabled);
        }

        let mut record = String::with_capacity(line.len() + 1);
        record.push_str(line);
        record.push('\n');

        let mut slot = self.slot();
        let file = slot.as_mut().ok_or(Error::SinkUnavailable)?;
        file.write_all(record.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn slot(&self) -> MutexGuard<'_, Option<File>> {
        self.file.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
