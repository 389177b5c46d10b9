//! Runtime configuration from environment variables.
//!
//! # Responsibility
//! - Resolve log level, optional log directory and seeding choice.
//! - Keep environment access behind a lookup closure for testability.
//!
//! # Invariants
//! - Unset or blank variables fall back to defaults.
//! - Set but malformed variables are errors, never silently ignored.

use crate::logging::{default_log_level, init_logging, parse_level};
use crate::store::TrackerStore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "TRACKER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TRACKER_LOG_DIR";
pub const ENV_SEED_EXAMPLES: &str = "TRACKER_SEED_EXAMPLES";

/// Malformed configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(String),
    InvalidBool { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{ENV_LOG_LEVEL}: {message}"),
            Self::RelativeLogDir(value) => {
                write!(f, "{ENV_LOG_DIR} must be an absolute path, got `{value}`")
            }
            Self::InvalidBool { key, value } => {
                write!(f, "{key} must be true|false|1|0|yes|no, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved tracker configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub log_level: &'static str,
    /// Logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
    pub seed_examples: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            seed_examples: true,
        }
    }
}

impl TrackerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = parse_level(&level).map_err(ConfigError::InvalidLogLevel)?;
        }

        if let Some(dir) = read(ENV_LOG_DIR) {
            let path = PathBuf::from(&dir);
            if !path.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir));
            }
            config.log_dir = Some(path);
        }

        if let Some(seed) = read(ENV_SEED_EXAMPLES) {
            config.seed_examples = parse_bool(&seed).ok_or(ConfigError::InvalidBool {
                key: ENV_SEED_EXAMPLES,
                value: seed,
            })?;
        }

        Ok(config)
    }

    /// Starts file logging when a log directory is configured.
    ///
    /// Returns `Ok(false)` when logging is disabled.
    pub fn init_logging(&self) -> Result<bool, String> {
        let Some(dir) = &self.log_dir else {
            return Ok(false);
        };
        let dir = dir
            .to_str()
            .ok_or_else(|| format!("log directory `{}` is not valid UTF-8", dir.display()))?;
        init_logging(self.log_level, dir)?;
        Ok(true)
    }

    /// Creates the store this configuration asks for.
    pub fn build_store(&self) -> TrackerStore {
        if self.seed_examples {
            TrackerStore::with_example_data()
        } else {
            TrackerStore::new()
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ConfigError, TrackerConfig, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_SEED_EXAMPLES,
    };
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<TrackerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TrackerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert!(config.seed_examples);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            (ENV_LOG_LEVEL, "Warning"),
            (ENV_LOG_DIR, "/tmp/tracker-logs"),
            (ENV_SEED_EXAMPLES, "no"),
        ])
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(
            config.log_dir.as_deref(),
            Some(std::path::Path::new("/tmp/tracker-logs"))
        );
        assert!(!config.seed_examples);
        assert!(config.build_store().projects().is_empty());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[(ENV_LOG_DIR, "  "), (ENV_SEED_EXAMPLES, "")]).unwrap();
        assert!(config.log_dir.is_none());
        assert!(config.seed_examples);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            config_from(&[(ENV_LOG_LEVEL, "loud")]),
            Err(ConfigError::InvalidLogLevel(_))
        ));
        assert_eq!(
            config_from(&[(ENV_LOG_DIR, "logs")]).unwrap_err(),
            ConfigError::RelativeLogDir("logs".to_string())
        );
        assert!(matches!(
            config_from(&[(ENV_SEED_EXAMPLES, "maybe")]),
            Err(ConfigError::InvalidBool { .. })
        ));
    }

    #[test]
    fn disabled_logging_is_not_started() {
        assert_eq!(TrackerConfig::default().init_logging(), Ok(false));
    }
}
