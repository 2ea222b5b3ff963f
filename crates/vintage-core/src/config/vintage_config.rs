//! Top-level Vintage configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, CollectorConfig, InferenceConfig, ObservabilityConfig, RegistryConfig};
use crate::constants::ENV_PREFIX;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VINTAGE_*`, via `apply_env_overrides`)
/// 2. Config file
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VintageConfig {
    pub inference: InferenceConfig,
    pub collector: CollectorConfig,
    pub registry: RegistryConfig,
    pub observability: ObservabilityConfig,
}

impl VintageConfig {
    /// Load from a TOML string. Missing sections and keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file, apply env overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `VINTAGE_*` environment overrides. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(format!("{ENV_PREFIX}LOG_LEVEL")) {
            self.observability.log_level = level.to_lowercase();
        }
        if let Some(json) = env_bool("JSON_LOGS") {
            self.observability.json_logs = json;
        }
        if let Some(strict) = env_bool("STRICT_AMBIGUITY") {
            self.registry.strict_ambiguity = strict;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.inference.match_weight > 0.0 && self.inference.match_weight.is_finite()) {
            return Err(ConfigError::ValidationFailed {
                field: "inference.match_weight".to_string(),
                message: format!("must be > 0, got {}", self.inference.match_weight),
            });
        }
        let factor = self.inference.free_text_factor;
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ConfigError::ValidationFailed {
                field: "inference.free_text_factor".to_string(),
                message: format!("must be in (0, 1], got {factor}"),
            });
        }
        if self.collector.max_tokens_per_fragment == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "collector.max_tokens_per_fragment".to_string(),
                message: "must be >= 1".to_string(),
            });
        }
        if !defaults::LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "must be one of {:?}, got '{}'",
                    defaults::LOG_LEVELS,
                    self.observability.log_level
                ),
            });
        }
        Ok(())
    }
}

fn env_bool(suffix: &str) -> Option<bool> {
    let raw = std::env::var(format!("{ENV_PREFIX}{suffix}")).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
