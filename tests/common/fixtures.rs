//! A logging context wired to an in-memory console and a temporary log file.

use std::path::Path;
use std::sync::Arc;

use dbglog::{LogContext, LogLevel, MemoryConsole, SinkManager};
use tempfile::TempDir;

/// One isolated facility per test. The temp dir lives as long as the fixture.
pub struct TestLog {
    pub dir: TempDir,
    pub console: MemoryConsole,
    pub ctx: Arc<LogContext>,
}

impl TestLog {
    /// Context with the given threshold. The file sink is not opened yet.
    pub fn new(threshold: LogLevel) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let sink = SinkManager::new(dir.path().join("log.log"));
        Self::with_sink(dir, sink, threshold)
    }

    /// Context whose file sink behaves as if compiled out.
    pub fn disabled(threshold: LogLevel) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let sink = SinkManager::disabled(dir.path().join("log.log"));
        Self::with_sink(dir, sink, threshold)
    }

    /// Context whose log file lives in a directory that does not exist.
    pub fn unopenable(threshold: LogLevel) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let sink = SinkManager::new(dir.path().join("no-such-dir").join("log.log"));
        Self::with_sink(dir, sink, threshold)
    }

    fn with_sink(dir: TempDir, sink: SinkManager, threshold: LogLevel) -> Self {
        let console = MemoryConsole::new();
        let ctx = Arc::new(LogContext::new(Arc::new(console.clone()), sink, threshold));
        Self { dir, console, ctx }
    }

    /// Initialize the file sink and forget the "opened log file" line.
    pub fn initialized(self) -> Self {
        self.ctx.initialize();
        assert!(self.ctx.is_file_sink_open(), "file sink should open in a temp dir");
        self.console.clear();
        self
    }

    pub fn file_path(&self) -> &Path {
        self.ctx.file_path()
    }

    /// Lines currently in the log file; empty when it does not exist.
    pub fn file_lines(&self) -> Vec<String> {
        match std::fs::read_to_string(self.file_path()) {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Raw file contents; empty when it does not exist.
    pub fn file_text(&self) -> String {
        std::fs::read_to_string(self.file_path()).unwrap_or_default()
    }
}
