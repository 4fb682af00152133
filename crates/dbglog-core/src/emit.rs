//! Emit engine: gating, formatting and dispatch for every log call.
//!
//! Routing is evaluated in a fixed order:
//!
//! 1. `level <= threshold` goes to the console as
//!    `<label>: <function> <line>: <message>`.
//! 2. Otherwise a [`LogLevel::LogToFile`] message goes to the file sink as
//!    `[<timestamp>][<function>][<line>][<thread id>]: <message>`. When the
//!    sink is absent the console gets `[<function>][<line>]: file sink unavailable`.
//! 3. Anything else is dropped.
//!
//! Only the exact `LogToFile` level reaches the file. Lowering the threshold
//! never copies ordinary messages there.

use std::fmt::{self, Write as _};
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::callsite::CallSite;
use crate::config::LoggingConfig;
use crate::console::{Console, StdoutConsole};
use crate::level::LogLevel;
use crate::registry::{LevelRegistry, DEFAULT_THRESHOLD};
use crate::sink::{SinkManager, DEFAULT_LOG_FILE_PATH};
use crate::thread_id;

/// Upper bound on a rendered line, in bytes, newline excluded.
pub const MAX_LINE_BYTES: usize = 4096;

/// Timestamp layout of file records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Where a message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Console,
    File,
    Drop,
}

/// Pure routing decision for a message at `level` under `threshold`.
pub fn route(level: LogLevel, threshold: LogLevel) -> Route {
    if level == LogLevel::None {
        Route::Drop
    } else if level <= threshold {
        Route::Console
    } else if level == LogLevel::LogToFile {
        Route::File
    } else {
        Route::Drop
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

pub fn format_console_line(level: LogLevel, site: CallSite, message: fmt::Arguments<'_>) -> String {
    let mut line = String::new();
    let _ = write!(line, "{}: {} {}: ", level.label(), site.function, site.line);
    let _ = EscapeLineBreaks(&mut line).write_fmt(message);
    truncate_line(&mut line);
    line
}

pub fn format_file_line(
    timestamp: DateTime<Local>,
    site: CallSite,
    thread_id: u64,
    message: fmt::Arguments<'_>,
) -> String {
    let mut line = String::new();
    let _ = write!(
        line,
        "[{}][{}][{}][{}]: ",
        timestamp.format(TIMESTAMP_FORMAT),
        site.function,
        site.line,
        thread_id,
    );
    let _ = EscapeLineBreaks(&mut line).write_fmt(message);
    truncate_line(&mut line);
    line
}

pub fn format_unavailable_line(site: CallSite) -> String {
    let mut line = format!("[{}][{}]: file sink unavailable", site.function, site.line);
    truncate_line(&mut line);
    line
}

/// Writes `\n` and `\r` as two-character escapes so a message always renders
/// on a single line.
struct EscapeLineBreaks<'a>(&'a mut String);

impl fmt::Write for EscapeLineBreaks<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            match c {
                '\n' => self.0.push_str("\\n"),
                '\r' => self.0.push_str("\\r"),
                c => self.0.push(c),
            }
        }
        Ok(())
    }
}

/// Cut `line` to at most [`MAX_LINE_BYTES`] without splitting a character.
pub fn truncate_line(line: &mut String) {
    if line.len() <= MAX_LINE_BYTES {
        return;
    }
    let mut end = MAX_LINE_BYTES;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line.truncate(end);
}

// ---------------------------------------------------------------------------
// LogContext
// ---------------------------------------------------------------------------

/// The logging facility: threshold, console and file sink in one shareable
/// object. Wrap it in an [`Arc`] and hand clones to every thread that logs.
pub struct LogContext {
    registry: LevelRegistry,
    console: Arc<dyn Console>,
    sink: SinkManager,
}

impl LogContext {
    pub fn new(console: Arc<dyn Console>, sink: SinkManager, threshold: LogLevel) -> Self {
        Self {
            registry: LevelRegistry::new(threshold),
            console,
            sink,
        }
    }

    /// Stdout console and a file sink at `config.file_path`.
    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::with_console(config, Arc::new(StdoutConsole))
    }

    pub fn with_console(config: &LoggingConfig, console: Arc<dyn Console>) -> Self {
        Self::new(console, SinkManager::new(config.file_path.clone()), config.threshold)
    }

    // -- lifecycle ----------------------------------------------------------

    /// Open the file sink. Failure is reported on the console and otherwise
    /// ignored; the context keeps working in console-only mode.
    pub fn initialize(&self) {
        let _ = self.sink.initialize(self.console.as_ref());
    }

    /// Close the file sink if it is open.
    pub fn teardown(&self) {
        self.sink.teardown();
    }

    /// Initialize now and tear down when the guard drops.
    pub fn scoped(self: &Arc<Self>) -> SinkGuard {
        self.initialize();
        SinkGuard {
            context: Arc::clone(self),
        }
    }

    pub fn is_file_sink_open(&self) -> bool {
        self.sink.is_open()
    }

    pub fn file_path(&self) -> &Path {
        self.sink.path()
    }

    // -- threshold ----------------------------------------------------------

    pub fn set_threshold(&self, level: LogLevel) {
        self.registry.set_threshold(level);
    }

    pub fn threshold(&self) -> LogLevel {
        self.registry.threshold()
    }

    // -- emission -----------------------------------------------------------

    /// Route, format and write one message. Never fails and never panics;
    /// write errors are swallowed.
    pub fn emit(&self, level: LogLevel, site: CallSite, message: fmt::Arguments<'_>) {
        match route(level, self.registry.threshold()) {
            Route::Console => {
                let line = format_console_line(level, site, message);
                let _ = self.console.write_line(&line);
            }
            Route::File => self.emit_to_file(site, message),
            Route::Drop => {}
        }
    }

    /// [`emit`](Self::emit) with the call site taken from the caller's
    /// source location.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: fmt::Arguments<'_>) {
        self.emit(level, CallSite::caller(), message);
    }

    fn emit_to_file(&self, site: CallSite, message: fmt::Arguments<'_>) {
        let line = format_file_line(Local::now(), site, thread_id::resolve(), message);
        match self.sink.write_line(&line) {
            Ok(()) => {}
            Err(err) if err.is_unavailable() => {
                let _ = self.console.write_line(&format_unavailable_line(site));
            }
            Err(err) => {
                tracing::trace!(error = %err, "file sink write failed");
            }
        }
    }
}

impl Default for LogContext {
    /// Stdout console, file sink at [`DEFAULT_LOG_FILE_PATH`], threshold
    /// [`DEFAULT_THRESHOLD`].
    fn default() -> Self {
        Self::new(
            Arc::new(StdoutConsole),
            SinkManager::new(DEFAULT_LOG_FILE_PATH),
            DEFAULT_THRESHOLD,
        )
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("threshold", &self.threshold())
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}

/// Keeps the file sink open for its lifetime.
#[must_use = "the file sink closes as soon as the guard is dropped"]
pub struct SinkGuard {
    context: Arc<LogContext>,
}

impl SinkGuard {
    pub fn context(&self) -> &Arc<LogContext> {
        &self.context
    }
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        self.context.teardown();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
