//! API configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Default Spoonacular base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Spoonacular client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout for the production HTTP client.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `SPOONACULAR_API_KEY`: API key for Spoonacular
    ///
    /// Optional:
    /// - `POTLUCK_BASE_URL`: API base URL (default: "https://api.spoonacular.com")
    /// - `POTLUCK_HTTP_TIMEOUT_SECS`: request timeout in seconds (default: 30)
    ///
    /// A missing or empty API key is a configuration error, never a silent
    /// empty query parameter.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("SPOONACULAR_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("SPOONACULAR_API_KEY".to_string()))?;

        let base_url =
            env::var("POTLUCK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("POTLUCK_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Build a configuration directly, for tests and embedders.
    pub fn new(api_key: &str, base_url: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
