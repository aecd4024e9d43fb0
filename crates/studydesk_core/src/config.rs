//! Core tunables loaded from a JSON settings file.
//!
//! # Responsibility
//! - Carry window sizes, activity caps and storage/logging locations.
//! - Fill missing keys with defaults and reject out-of-range values.
//!
//! # Invariants
//! - A validated config has non-negative windows and caps of at least 1.
//! - `log_dir`, when set, is an absolute path.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_UPCOMING_DAYS: i64 = 7;
pub const DEFAULT_RECENT_DAYS: i64 = 7;
pub const DEFAULT_ACTIVITY_PER_SOURCE: usize = 2;
pub const DEFAULT_ACTIVITY_MAX_ITEMS: usize = 3;

/// Config loading and validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Days ahead covered by the upcoming-events window.
    pub upcoming_days: i64,
    /// Days back covered by the recent-notes window.
    pub recent_days: i64,
    /// Items taken from each source before merging the activity feed.
    pub activity_per_source: usize,
    pub activity_max_items: usize,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub database_path: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            recent_days: DEFAULT_RECENT_DAYS,
            activity_per_source: DEFAULT_ACTIVITY_PER_SOURCE,
            activity_max_items: DEFAULT_ACTIVITY_MAX_ITEMS,
            log_level: default_log_level().to_string(),
            log_dir: None,
            database_path: None,
        }
    }
}

impl CoreConfig {
    /// Parses and validates a JSON settings document.
    ///
    /// Missing keys take their defaults; unknown keys are ignored.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates the settings file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upcoming_days < 0 {
            return Err(ConfigError::Invalid(format!(
                "upcoming_days must be >= 0, got {}",
                self.upcoming_days
            )));
        }
        if self.recent_days < 0 {
            return Err(ConfigError::Invalid(format!(
                "recent_days must be >= 0, got {}",
                self.recent_days
            )));
        }
        if self.activity_per_source == 0 {
            return Err(ConfigError::Invalid(
                "activity_per_source must be >= 1".to_string(),
            ));
        }
        if self.activity_max_items == 0 {
            return Err(ConfigError::Invalid(
                "activity_max_items must be >= 1".to_string(),
            ));
        }
        if let Some(dir) = self.log_dir.as_ref() {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "log_dir must be an absolute path, got `{}`",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};

    #[test]
    fn empty_object_yields_defaults() {
        let config = CoreConfig::from_json_str("{}").expect("defaults should validate");
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.upcoming_days, 7);
        assert_eq!(config.activity_max_items, 3);
    }

    #[test]
    fn partial_document_overrides_only_given_keys() {
        let config = CoreConfig::from_json_str(r#"{"recent_days": 14, "activity_max_items": 5}"#)
            .expect("valid config");
        assert_eq!(config.recent_days, 14);
        assert_eq!(config.activity_max_items, 5);
        assert_eq!(config.upcoming_days, 7);
    }

    #[test]
    fn rejects_negative_window_and_zero_cap() {
        let err = CoreConfig::from_json_str(r#"{"upcoming_days": -1}"#)
            .expect_err("negative window must fail");
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = CoreConfig::from_json_str(r#"{"activity_per_source": 0}"#)
            .expect_err("zero cap must fail");
        assert!(err.to_string().contains("activity_per_source"));
    }

    #[test]
    fn rejects_relative_log_dir() {
        let err = CoreConfig::from_json_str(r#"{"log_dir": "logs"}"#)
            .expect_err("relative log dir must fail");
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn load_reads_and_validates_a_settings_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("studydesk.json");
        std::fs::write(&path, r#"{"upcoming_days": 3, "database_path": "/data/studydesk.db"}"#)
            .expect("settings file should be written");

        let config = CoreConfig::load(&path).expect("valid settings file");
        assert_eq!(config.upcoming_days, 3);
        assert_eq!(
            config.database_path.as_deref(),
            Some(std::path::Path::new("/data/studydesk.db"))
        );
        assert_eq!(config.recent_days, 7);
    }

    #[test]
    fn load_reports_missing_file_with_its_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");

        let err = CoreConfig::load(&path).expect_err("missing file must fail");
        match &err {
            ConfigError::Io { path: reported, .. } => assert_eq!(reported, &path),
            other => panic!("unexpected error: {other}"),
        }
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = CoreConfig::from_json_str("{").expect_err("malformed json must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
