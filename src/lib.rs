//! dbglog: level-gated diagnostic logging for a single process.
//!
//! This crate re-exports [`dbglog_core`] so integration tests, benches and
//! the `dbglog` binary import one path.
//!
//! ```text
//! LogContext ──► console   (level <= threshold)
//!      └──────► log file  (LogToFile only)
//! ```

pub use dbglog_core::*;
