//! dbglog-core: level-gated diagnostic logging.
//!
//! A [`LogContext`] owns a verbosity threshold, a console sink and a file
//! sink. Messages at or above the threshold's severity go to the console;
//! messages at the [`LogLevel::LogToFile`] pseudo-level go to the file with a
//! timestamp and the calling thread's id; everything else is dropped.
//!
//! # Architecture
//!
//! ```text
//! call site ──► Emit ──► Level Registry
//!                 │
//!                 ├──► Console
//!                 └──► Sink Manager ──► log file
//!                          ▲
//!                 Thread Identity
//! ```
//!
//! Logging never fails from the caller's point of view. Problems with the
//! file sink show up as diagnostic lines on the console.

pub mod callsite;
pub mod config;
pub mod console;
pub mod emit;
pub mod error;
pub mod level;
mod macros;
pub mod registry;
pub mod sink;
pub mod thread_id;

pub use callsite::CallSite;
pub use config::{LogConfig, LoggingConfig};
pub use console::{Console, MemoryConsole, StdoutConsole};
pub use emit::{LogContext, Route, SinkGuard, MAX_LINE_BYTES};
pub use error::{Error, Result};
pub use level::{display_name, LogLevel};
pub use macros::OUTPUT_ENABLED;
pub use registry::LevelRegistry;
pub use sink::{SinkManager, DEFAULT_LOG_FILE_PATH, FILE_SINK_ENABLED};
