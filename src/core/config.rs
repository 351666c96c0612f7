//! TOML configuration file parsing and loading
//!
//! This module handles loading and parsing of TOML configuration files,
//! including default config file discovery and validation of config values.
//!
//! ```toml
//! [dequeue]
//! capacity = 100
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! file = "dequeue.log"
//! color = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory under the platform config dir holding the default config file
pub const CONFIG_DIR_NAME: &str = "blocking-dequeue";

/// File name of the default config file
pub const CONFIG_FILE_NAME: &str = "dequeue.toml";

/// Log formats understood by [`crate::core::logging`]
pub const LOG_FORMATS: &[&str] = &["text", "ext", "json"];

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Error reading configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration value for '{field}': {message}")]
    Invalid { field: String, message: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub dequeue: DequeSettings,
    pub logging: LoggingConfig,
}

/// `[dequeue]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DequeSettings {
    /// Initial capacity; 0 = unbounded
    pub capacity: i64,
}

/// `[logging]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// flexi_logger level specification, e.g. `info` or `warn,blocking_dequeue=trace`
    pub level: String,
    /// One of `text`, `ext`, `json`
    pub format: String,
    pub file: Option<PathBuf>,
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            file: None,
            color: true,
        }
    }
}

impl Config {
    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Self::parse(contents, Path::new("<string>"))
    }

    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Load the default config file if it exists, otherwise return defaults
    pub fn load_default() -> ConfigResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                log::debug!("No default configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Location of the default config file, when a config dir is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Check values that deserialize but are not acceptable
    pub fn validate(&self) -> ConfigResult<()> {
        self.dequeue.validate()?;
        self.logging.validate()
    }

    fn parse(contents: &str, path: &Path) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

impl DequeSettings {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.capacity < 0 {
            return Err(ConfigError::Invalid {
                field: "dequeue.capacity".to_string(),
                message: format!("capacity must be >= 0, got {}", self.capacity),
            });
        }
        Ok(())
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        // Only the global level is checked; module directives are left to flexi_logger
        let global = self
            .level
            .split(',')
            .find(|part| !part.contains('='))
            .map(|part| part.trim().to_lowercase());
        if let Some(level) = global {
            if !level.is_empty() && !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::Invalid {
                    field: "logging.level".to_string(),
                    message: format!(
                        "'{}' is not one of {}",
                        level,
                        LOG_LEVELS.join(", ")
                    ),
                });
            }
        }

        if !LOG_FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::Invalid {
                field: "logging.format".to_string(),
                message: format!(
                    "'{}' is not one of {}",
                    self.format,
                    LOG_FORMATS.join(", ")
                ),
            });
        }
        Ok(())
    }
}
