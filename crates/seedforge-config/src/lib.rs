//! Configuration system for SeedForge.
//!
//! Load seeding configuration and seed record files from TOML or YAML.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use seedforge_config::{BatchPolicy, SeedConfig};
//!
//! let config = SeedConfig::from_toml_str(r#"
//!     batch_policy = "skip_failed"
//!     id_field = "key"
//! "#).unwrap();
//!
//! assert_eq!(config.batch_policy, BatchPolicy::SkipFailed);
//! assert_eq!(config.id_field.as_deref(), Some("key"));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use seedforge_config::SeedConfig;
//!
//! let config = SeedConfig::load("seedforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use seedforge_core::SeedRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "seedforge=info";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main seeding configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SeedConfig {
    /// What a batch does when one record fails.
    #[serde(default)]
    pub batch_policy: BatchPolicy,

    /// Overrides the identifier field declared by the shape.
    #[serde(default)]
    pub id_field: Option<String>,

    /// Tracing filter directive used by console output.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl SeedConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()
    }

    /// Sets the batch policy.
    pub fn with_batch_policy(mut self, policy: BatchPolicy) -> Self {
        self.batch_policy = policy;
        self
    }

    /// Overrides the identifier field name.
    pub fn with_id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = Some(field.into());
        self
    }

    /// Sets the tracing filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Returns the tracing filter directive, falling back to the default.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if let Some(field) = &self.id_field {
            if field.trim().is_empty() {
                return Err(ConfigError::Invalid("id_field must not be empty".into()));
            }
        }
        Ok(self)
    }
}

/// What a batch does when a record fails to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// The first failure aborts the whole batch.
    #[default]
    AbortOnError,

    /// Failed records are logged and left out of the output.
    SkipFailed,
}

/// A document of seed records.
///
/// ```toml
/// [[records]]
/// name = "Foo 1"
///
/// [[records]]
/// name = "Foo 2"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub records: Vec<SeedRecord>,
}

impl SeedFile {
    /// Loads seed records from a TOML or YAML file, chosen by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            Some("toml") => Self::from_toml_str(&contents),
            other => Err(ConfigError::Invalid(format!(
                "unsupported seed file extension: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    /// Parses seed records from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parses seed records from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }
}
