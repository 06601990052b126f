//! Configuration for the tasks API client.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Configuration for connecting to the tasks API.
///
/// Typically loaded from a `tareas.toml` file or from the environment.
///
/// # Example Configuration File
///
/// ```toml
/// base_url = "https://api.example.com"
/// timeout_ms = 10000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the remote service. Operation paths (`/tasks`,
    /// `/tasks/{id}`) are joined onto it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds, applied to every call.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    30_000 // 30 seconds
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from environment variables.
    ///
    /// - `TAREAS_API_URL` — base URL
    /// - `TAREAS_API_TIMEOUT_MS` — timeout in milliseconds
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("TAREAS_API_URL") {
            config.base_url = url;
        }
        if let Ok(timeout) = std::env::var("TAREAS_API_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse::<u64>() {
                config.timeout_ms = ms;
            }
        }
        config
    }

    /// Request timeout as a [`std::time::Duration`].
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn test_parse_toml() {
        let config = ApiConfig::from_toml(
            r#"
            base_url = "https://tareas.example.com"
            timeout_ms = 5000
        "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://tareas.example.com");
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn test_parse_toml_defaults_missing_fields() {
        let config = ApiConfig::from_toml(r#"base_url = "https://x.example""#).unwrap();
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ApiConfig::from_toml("base_url = ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_builder() {
        let config = ApiConfig::new("https://x.example").with_timeout_ms(1000);
        assert_eq!(config.base_url, "https://x.example");
        assert_eq!(config.timeout(), std::time::Duration::from_millis(1000));
    }
}
