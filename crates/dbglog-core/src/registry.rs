//! Level registry holding the shared verbosity threshold.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::level::LogLevel;

/// Threshold used when none is configured.
pub const DEFAULT_THRESHOLD: LogLevel = LogLevel::Info;

/// Holds the current threshold. Reads and writes are lock-free; a change made
/// on one thread is visible to every later read on another.
#[derive(Debug)]
pub struct LevelRegistry {
    threshold: AtomicU8,
}

impl LevelRegistry {
    pub fn new(threshold: LogLevel) -> Self {
        Self {
            threshold: AtomicU8::new(threshold.ordinal()),
        }
    }

    /// Overwrite the threshold unconditionally.
    pub fn set_threshold(&self, level: LogLevel) {
        self.threshold.store(level.ordinal(), Ordering::Release);
    }

    pub fn threshold(&self) -> LogLevel {
        let raw = self.threshold.load(Ordering::Acquire);
        // Only `set_threshold` and `new` store, both from a valid LogLevel.
        LogLevel::from_ordinal(raw).unwrap_or(DEFAULT_THRESHOLD)
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
