// Configuration for the demo front-end core

use crate::demo::DemoConfig;
use crate::model::ModelInfo;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    /// Upper bound on the size of a prediction payload accepted for
    /// classification.
    pub max_payload_bytes: usize,
    pub models: Vec<ModelInfo>,
    pub demos: Vec<DemoConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            max_payload_bytes: 16 * 1024 * 1024,
            models: Vec::new(),
            demos: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON, TOML or YAML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path, e)))?;
        Self::from_str(&content)
    }

    /// Load configuration from string. JSON is tried first, then TOML,
    /// then YAML.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        if let Ok(config) = serde_json::from_str::<AppConfig>(content) {
            return Ok(config);
        }

        if let Ok(config) = toml::from_str::<AppConfig>(content) {
            return Ok(config);
        }

        if let Ok(config) = serde_yaml::from_str::<AppConfig>(content) {
            return Ok(config);
        }

        Err(ConfigError::ParseError("Unknown format".to_string()))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(log_level) = std::env::var("NLPDEMO_LOG_LEVEL") {
            config.log_level = log_level;
        }

        if let Ok(limit) = std::env::var("NLPDEMO_MAX_PAYLOAD_BYTES") {
            if let Ok(n) = limit.parse::<usize>() {
                config.max_payload_bytes = n;
            }
        }

        config
    }

    /// Merge with another configuration (other takes precedence). Empty
    /// lists in `other` keep the current ones.
    pub fn merge(&mut self, other: AppConfig) {
        self.log_level = other.log_level;
        self.max_payload_bytes = other.max_payload_bytes;
        if !other.models.is_empty() {
            self.models = other.models;
        }
        if !other.demos.is_empty() {
            self.demos = other.demos;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.log_level
            )));
        }

        if self.max_payload_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "max_payload_bytes must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    /// `(demo title, model id)` pairs for demo models missing from
    /// `models`. Empty when no models are configured.
    pub fn unknown_demo_models(&self) -> Vec<(&str, &str)> {
        if self.models.is_empty() {
            return Vec::new();
        }

        let known: HashSet<&str> = self.models.iter().map(|m| m.id.as_str()).collect();
        self.demos
            .iter()
            .flat_map(|demo| {
                demo.model_ids
                    .iter()
                    .filter(|id| !known.contains(id.as_str()))
                    .map(move |id| (demo.title.as_str(), id.as_str()))
            })
            .collect()
    }

    /// Warn about demo models missing from `models`. Demos may name models
    /// that are not deployed yet; the listing simply shows fewer choices.
    /// Call once logging is up. Returns the number of warnings.
    pub fn warn_unknown_demo_models(&self) -> usize {
        let unknown = self.unknown_demo_models();
        for (title, id) in &unknown {
            tracing::warn!("demo '{}' references unknown model '{}'", title, id);
        }
        unknown.len()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for crate::error::Error {
    fn from(e: ConfigError) -> Self {
        crate::error::Error::Configuration(e.to_string())
    }
}
