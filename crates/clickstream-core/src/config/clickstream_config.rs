//! Top-level clickstream configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{RecorderConfig, StorageConfig, UploadConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CLICKSTREAM_*`)
/// 2. Config file passed to [`ClickstreamConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClickstreamConfig {
    pub upload: UploadConfig,
    pub storage: StorageConfig,
    pub recorder: RecorderConfig,
}

impl ClickstreamConfig {
    /// Load from a TOML file, apply env overrides, then validate.
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

    /// Load configuration from a TOML string (no env overrides, no validation).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upload.endpoint.trim().is_empty() {
            return Err(invalid("upload.endpoint", "must not be empty"));
        }
        if self.upload.app_id.trim().is_empty() {
            return Err(invalid("upload.app_id", "must not be empty"));
        }
        if self.upload.call_timeout_secs == 0 {
            return Err(invalid("upload.call_timeout_secs", "must be greater than 0"));
        }
        if self.recorder.max_db_size_bytes <= 0 {
            return Err(invalid("recorder.max_db_size_bytes", "must be greater than 0"));
        }
        if self.recorder.max_submission_bytes <= 0 {
            return Err(invalid(
                "recorder.max_submission_bytes",
                "must be greater than 0",
            ));
        }
        if self.recorder.max_events_per_batch == 0 {
            return Err(invalid(
                "recorder.max_events_per_batch",
                "must be greater than 0",
            ));
        }
        if self.recorder.max_submissions == 0 {
            return Err(invalid("recorder.max_submissions", "must be greater than 0"));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparsable values are ignored and the file/default value is kept.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CLICKSTREAM_ENDPOINT") {
            self.upload.endpoint = val;
        }
        if let Ok(val) = std::env::var("CLICKSTREAM_APP_ID") {
            self.upload.app_id = val;
        }
        if let Ok(val) = std::env::var("CLICKSTREAM_COMPRESS_EVENTS") {
            if let Ok(v) = val.parse::<bool>() {
                self.upload.compress_events = v;
            }
        }
        if let Ok(val) = std::env::var("CLICKSTREAM_CALL_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                self.upload.call_timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("CLICKSTREAM_DB_PATH") {
            self.storage.db_path = val;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
