//! Error types for dbglog.
//!
//! None of these escape [`LogContext::emit`](crate::LogContext::emit). Sink
//! errors are rendered as diagnostic lines on the console. Level parsing
//! returns [`Error::InvalidLevel`]; configuration loading reports through
//! `anyhow` with context (see [`LogConfig::load`](crate::LogConfig::load)).

use std::io;
use std::path::PathBuf;

/// Result type for sink and level operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The log file could not be created or truncated.
    #[error("failed to open log file {}: {source}", path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file sink was never opened, failed to open, or was torn down.
    #[error("file sink unavailable")]
    SinkUnavailable,

    /// The file sink was compiled out or constructed disabled.
    #[error("file sink disabled")]
    SinkDisabled,

    /// Writing or flushing a record failed.
    #[error("write failed: {0}")]
    Write(#[from] io::Error),

    /// A level name that does not match any [`LogLevel`](crate::LogLevel).
    #[error("unknown log level: {0:?}")]
    InvalidLevel(String),
}

impl Error {
    /// True for the variants that mean "there is no file to write to".
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::SinkUnavailable | Error::SinkDisabled)
    }
}
