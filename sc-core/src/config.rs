//! Client configuration.
//!
//! Holds the API key, base URL, and request timeout used to construct an
//! API client. Configuration can be built directly, read from environment
//! variables, or loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{ScError, ScResult};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "SHOTCUT_API_KEY";

/// Environment variable overriding the base URL (testing/staging).
pub const BASE_URL_ENV: &str = "SHOTCUT_BASE_URL";

/// Connection settings for the Shotcut API.
///
/// Immutable once handed to the client; construct a new client to change
/// any of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key, sent as a Bearer token on every request.
    #[serde(default)]
    pub api_key: String,

    /// Root of the REST API. Override for testing or staging.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    constants::DEFAULT_TIMEOUT_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_ms: default_timeout(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Build a configuration from `SHOTCUT_API_KEY` and optionally
    /// `SHOTCUT_BASE_URL`.
    pub fn from_env() -> ScResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ScError::MissingConfig(format!("{API_KEY_ENV} is not set")))?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> ScResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Whether an API key has been provided.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Base URL with any trailing slash removed.
    pub fn normalized_base_url(&self) -> String {
        self.base_url.trim().trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, constants::DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, 30_000);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("key-123")
            .with_base_url("http://localhost:8080/api/")
            .with_timeout_ms(5_000);
        assert!(config.is_configured());
        assert_eq!(config.normalized_base_url(), "http://localhost:8080/api");
        assert_eq!(config.timeout_ms, 5_000);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"abc\"\ntimeout_ms = 10000").unwrap();
        let config = ClientConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.timeout_ms, 10_000);
        // unspecified fields fall back to defaults
        assert_eq!(config.base_url, constants::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_from_file_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = [not toml").unwrap();
        let err = ClientConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ScError::Config(_)));
    }

    #[test]
    fn test_roundtrip_toml() {
        let config = ClientConfig::new("key");
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: ClientConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.api_key, config.api_key);
        assert_eq!(deserialized.timeout_ms, config.timeout_ms);
    }
}
