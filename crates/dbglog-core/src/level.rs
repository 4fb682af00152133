//! Log levels and their display labels.
//!
//! Levels are ordinal: a lower value is more severe and is shown at more
//! thresholds. [`LogLevel::None`] is only meaningful as a threshold and
//! [`LogLevel::LogToFile`] is the pseudo-level that routes a message to the
//! file sink.

use serde::Deserialize;
use std::str::FromStr;

use crate::error::Error;

/// Display labels indexed by level ordinal.
pub const LEVEL_NAMES: [&str; 6] = ["Error", "Warning", "Info", "Debug", "None", "LOG"];

/// Verbosity level of a message, or the threshold a message is compared against.
///
/// Config values go through [`FromStr`], so a TOML file or environment
/// variable accepts exactly what the CLI accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    None = 4,
    LogToFile = 5,
}

impl LogLevel {
    /// Every level in ordinal order.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::None,
        LogLevel::LogToFile,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// The level with the given ordinal, if there is one.
    pub fn from_ordinal(ordinal: u8) -> Option<LogLevel> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Human-readable label, e.g. `"Warning"` or `"LOG"`.
    pub fn label(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }
}

/// Label lookup by raw ordinal. Ordinals outside the table yield `None`.
pub fn display_name(ordinal: usize) -> Option<&'static str> {
    LEVEL_NAMES.get(ordinal).copied()
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    /// Accepts level names in any case, a few aliases, or the ordinal digit.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let word = input.trim().to_ascii_lowercase();
        match word.as_str() {
            "0" | "error" | "err" => Ok(LogLevel::Error),
            "1" | "warning" | "warn" => Ok(LogLevel::Warning),
            "2" | "info" => Ok(LogLevel::Info),
            "3" | "debug" => Ok(LogLevel::Debug),
            "4" | "none" => Ok(LogLevel::None),
            "5" | "log" | "logtofile" | "log_to_file" => Ok(LogLevel::LogToFile),
            _ => Err(Error::InvalidLevel(input.to_string())),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = crate::error::Error;

    fn try_from(value: String) -> Result<Self, <LogLevel as TryFrom<String>>::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
