use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PolicyError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Cloud One region (e.g., de-1, us-1). Prompted for when absent.
    #[serde(default)]
    pub region: Option<String>,

    /// Full API base URL; takes precedence over `region`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON structured logging
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            json: false,
        }
    }
}

impl ToolConfig {
    /// Load config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PolicyError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| PolicyError::ConfigError(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| PolicyError::ConfigError(format!("Invalid YAML: {}", e)))
    }

    /// Load config from environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        ToolConfig {
            region: lookup("C1WS_REGION").filter(|v| !v.trim().is_empty()),
            base_url: lookup("C1WS_BASE_URL").filter(|v| !v.trim().is_empty()),
            timeout_secs: lookup("C1WS_TIMEOUT_SECS").and_then(|v| v.parse().ok()),
            logging: LoggingConfig {
                level: lookup("C1WS_LOG_LEVEL").unwrap_or_else(default_log_level),
                json: lookup("C1WS_LOG_JSON")
                    .map(|v| v == "true")
                    .unwrap_or(false),
            },
        }
    }

    /// `--config` file when given, environment otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::from_env()),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
