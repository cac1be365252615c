//! WeatherAPI client
//!
//! HTTP client for the WeatherAPI current-conditions endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiErrorBody, CurrentResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key configured; no request was made
    #[error("Weather API key is not configured")]
    MissingApiKey,

    /// HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The API rejected the query (unknown location, bad key, ...)
    #[error("Weather API error {code}: {message}")]
    Api {
        /// WeatherAPI error code (e.g. 1006 for "No matching location found")
        code: i64,
        /// Human-readable message from the API
        message: String,
    },

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Current-conditions endpoint (default: <https://api.weatherapi.com/v1/current.json>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (sensitive, never serialized)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1/current.json".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherConfig {
    /// The API key, if configured and non-blank
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }
}

/// Weather client trait
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Current temperature in Celsius for a free-text location
    async fn current_temp_c(&self, location: &str) -> Result<f64, WeatherError>;
}

/// WeatherAPI HTTP client implementation
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherApiClient {
    /// Create a new WeatherAPI client with the given configuration
    ///
    /// A missing key is not an error here; it surfaces on the first lookup.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration (no API key)
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Whether an API key is available
    pub fn has_api_key(&self) -> bool {
        self.config.api_key_str().is_some()
    }

    fn error_from_status(status: StatusCode, body: &str) -> WeatherError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return WeatherError::RateLimitExceeded;
        }
        if status.is_server_error() {
            return WeatherError::ServiceUnavailable(format!("HTTP {status}"));
        }
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(envelope) => WeatherError::Api {
                code: envelope.error.code,
                message: envelope.error.message,
            },
            Err(_) => WeatherError::RequestFailed(format!("HTTP {status}")),
        }
    }
}

#[async_trait]
impl WeatherClient for WeatherApiClient {
    #[instrument(skip(self))]
    async fn current_temp_c(&self, location: &str) -> Result<f64, WeatherError> {
        let key = self.config.api_key_str().ok_or(WeatherError::MissingApiKey)?;

        debug!(base_url = %self.config.base_url, "Fetching current conditions");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("key", key), ("q", location), ("aqi", "no")])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "WeatherAPI returned non-success status");
            return Err(Self::error_from_status(status, &body));
        }

        let data: CurrentResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        debug!(temp_c = data.current.temp_c, "Current temperature received");
        Ok(data.current.temp_c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.weatherapi.com/v1/current.json");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = WeatherConfig {
            api_key: Some(SecretString::from("   ")),
            ..Default::default()
        };
        assert!(config.api_key_str().is_none());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = WeatherConfig {
            api_key: Some(SecretString::from("super-secret")),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_key_is_never_serialized() {
        let config = WeatherConfig {
            api_key: Some(SecretString::from("super-secret")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn test_has_api_key() {
        let client = WeatherApiClient::with_defaults().unwrap();
        assert!(!client.has_api_key());

        let client = WeatherApiClient::new(WeatherConfig {
            api_key: Some(SecretString::from("k")),
            ..Default::default()
        })
        .unwrap();
        assert!(client.has_api_key());
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let config = WeatherConfig {
            base_url: "http://127.0.0.1:9/never-called".to_string(),
            ..Default::default()
        };
        let client = WeatherApiClient::new(config).unwrap();
        let result = client.current_temp_c("São Paulo").await;
        assert!(matches!(result, Err(WeatherError::MissingApiKey)));
    }

    #[test]
    fn test_error_from_status_mapping() {
        assert!(matches!(
            WeatherApiClient::error_from_status(StatusCode::TOO_MANY_REQUESTS, ""),
            WeatherError::RateLimitExceeded
        ));
        assert!(matches!(
            WeatherApiClient::error_from_status(StatusCode::BAD_GATEWAY, ""),
            WeatherError::ServiceUnavailable(_)
        ));
        assert!(matches!(
            WeatherApiClient::error_from_status(StatusCode::FORBIDDEN, "nope"),
            WeatherError::RequestFailed(_)
        ));
        let body = r#"{"error":{"code":2008,"message":"API key has been disabled."}}"#;
        assert!(matches!(
            WeatherApiClient::error_from_status(StatusCode::FORBIDDEN, body),
            WeatherError::Api { code: 2008, .. }
        ));
    }
}
