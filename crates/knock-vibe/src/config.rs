//! Configuration for the badge generation workflow

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// Settings for the generation provider.
///
/// The API credential is an explicit field, injected by the caller. Nothing
/// in this crate reads the process environment implicitly mid-call; tests
/// construct configs with fake keys and substitute providers freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// API key for the generation endpoint. `None` makes every generation
    /// attempt fail fast, before any network traffic.
    pub api_key: Option<String>,
    /// Model identifier (e.g., "gemini-2.5-flash")
    pub model: String,
    /// Base URL of the generation API
    pub base_url: String,
    /// Sampling temperature passed to the model
    pub temperature: f32,
    /// Deadline for a single generation request
    pub request_timeout: Duration,
}

impl GeneratorConfig {
    /// Config with the given key and all other fields at their defaults.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Convenience constructor reading `KNOCK_API_KEY` from the environment.
    ///
    /// An unset or empty variable yields `api_key: None`; the workflow then
    /// fails fast on the first generation attempt while the rest of the site
    /// keeps working.
    pub fn from_env() -> Self {
        let api_key = std::env::var("KNOCK_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: defaults::MODEL.to_string(),
            base_url: defaults::BASE_URL.to_string(),
            temperature: defaults::TEMPERATURE,
            request_timeout: defaults::REQUEST_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_with_api_key() {
        let config = GeneratorConfig::with_api_key("test-key");
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.base_url, defaults::BASE_URL);
    }
}
