//! Configuration types for dbglog.
//!
//! [`LogConfig::load`] layers an optional TOML file and `DBGLOG_*`
//! environment variables on top of the embedded defaults.
//! [`LogConfig::defaults`] returns the defaults without touching the
//! filesystem or the environment (useful in tests).
//!
//! Configuration is read once, when a [`LogContext`](crate::LogContext) is
//! built. The file path cannot change afterwards.

use anyhow::Context as _;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::level::LogLevel;
use crate::registry::DEFAULT_THRESHOLD;
use crate::sink::DEFAULT_LOG_FILE_PATH;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[logging]
threshold = "info"
file_path = "log.log"
"#;

/// Prefix of environment overrides, e.g. `DBGLOG_LOGGING__THRESHOLD=debug`.
pub const ENV_PREFIX: &str = "DBGLOG";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Initial console threshold.
    #[serde(default = "default_threshold")]
    pub threshold: LogLevel,
    /// Where the file sink writes.
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,
}

fn default_threshold() -> LogLevel { DEFAULT_THRESHOLD }
fn default_file_path() -> PathBuf { PathBuf::from(DEFAULT_LOG_FILE_PATH) }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            file_path: default_file_path(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl LogConfig {
    /// Defaults, then `path` if given (it must exist), then the environment.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("failed to read dbglog configuration")?
            .try_deserialize()
            .context("invalid dbglog configuration")
    }

    /// Parse a TOML document layered on the defaults, without I/O.
    pub fn from_toml(document: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()
            .context("failed to read dbglog configuration")?
            .try_deserialize()
            .context("invalid dbglog configuration")
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self {
            logging: LoggingConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn defaults_load() {
        let cfg = LogConfig::defaults();
        assert_eq!(cfg.logging.threshold, LogLevel::Info);
        assert_eq!(cfg.logging.file_path, PathBuf::from("log.log"));
    }

    #[test]
    fn embedded_defaults_match_typed_defaults() {
        let parsed = LogConfig::from_toml("").unwrap();
        assert_eq!(parsed.logging, LoggingConfig::default());
    }

    #[test]
    fn document_overrides_defaults() {
        let cfg = LogConfig::from_toml(
            r#"
            [logging]
            threshold = "debug"
            file_path = "/var/tmp/engine.log"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.logging.threshold, LogLevel::Debug);
        assert_eq!(cfg.logging.file_path, PathBuf::from("/var/tmp/engine.log"));
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let cfg = LogConfig::from_toml("[logging]\nthreshold = \"warn\"\n").unwrap();
        assert_eq!(cfg.logging.threshold, LogLevel::Warning);
        assert_eq!(cfg.logging.file_path, PathBuf::from("log.log"));
    }

    #[rstest]
    #[case("INFO", LogLevel::Info)]
    #[case("Debug", LogLevel::Debug)]
    #[case("2", LogLevel::Info)]
    #[case("err", LogLevel::Error)]
    #[case("Log_To_File", LogLevel::LogToFile)]
    fn threshold_accepts_cli_spellings(#[case] value: &str, #[case] expected: LogLevel) {
        let cfg = LogConfig::from_toml(&format!("[logging]\nthreshold = {value:?}\n")).unwrap();
        assert_eq!(cfg.logging.threshold, expected);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = LogConfig::from_toml("[logging]\nthreshold = \"loud\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("loud"));
    }

    #[test]
    fn load_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbglog.toml");
        std::fs::write(&path, "[logging]\nthreshold = \"log\"\n").unwrap();

        let cfg = LogConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.logging.threshold, LogLevel::LogToFile);
    }

    /// Sets a variable for the test's lifetime. Keys are unique per test so
    /// parallel tests never see each other's values.
    struct EnvVar(&'static str);

    impl EnvVar {
        fn set(key: &'static str, value: &str) -> Self {
            std::env::set_var(key, value);
            Self(key)
        }
    }

    impl Drop for EnvVar {
        fn drop(&mut self) {
            std::env::remove_var(self.0);
        }
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dbglog.toml");
        std::fs::write(&path, "[logging]\nthreshold = \"error\"\nfile_path = \"from-file.log\"\n").unwrap();
        let _threshold = EnvVar::set("DBGLOG_ENVTEST_LOGGING__THRESHOLD", "Debug");
        let _file_path = EnvVar::set("DBGLOG_ENVTEST_LOGGING__FILE_PATH", "/tmp/from-env.log");

        let cfg = LogConfig::load_with_prefix(Some(&path), "DBGLOG_ENVTEST").unwrap();
        assert_eq!(cfg.logging.threshold, LogLevel::Debug);
        assert_eq!(cfg.logging.file_path, PathBuf::from("/tmp/from-env.log"));
    }

    #[test]
    fn environment_rejects_unknown_level() {
        let _threshold = EnvVar::set("DBGLOG_BADENV_LOGGING__THRESHOLD", "chatty");
        let err = LogConfig::load_with_prefix(None, "DBGLOG_BADENV").unwrap_err();
        assert!(format!("{err:#}").contains("chatty"));
    }

    #[test]
    fn load_requires_a_named_file_to_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LogConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
