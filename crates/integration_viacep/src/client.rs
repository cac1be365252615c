//! ViaCEP client
//!
//! HTTP client for the ViaCEP postal directory.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::Address;

/// ViaCEP client errors
#[derive(Debug, Error)]
pub enum ViaCepError {
    /// HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the directory failed (network or non-success status)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the directory
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Directory answered but has no locality for the postal code
    #[error("Postal code not found: {0}")]
    NotFound(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// ViaCEP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViaCepConfig {
    /// ViaCEP API base URL (default: <https://viacep.com.br/ws>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://viacep.com.br/ws".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ViaCepConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Postal directory client trait
#[async_trait]
pub trait PostalDirectoryClient: Send + Sync {
    /// Fetch the address record for a normalized postal code
    async fn lookup(&self, postal_code: &str) -> Result<Address, ViaCepError>;

    /// Fetch only the locality (city) for a normalized postal code
    ///
    /// An empty or absent locality is `ViaCepError::NotFound`.
    async fn locality(&self, postal_code: &str) -> Result<String, ViaCepError> {
        let address = self.lookup(postal_code).await?;
        address
            .locality()
            .map(str::to_string)
            .ok_or_else(|| ViaCepError::NotFound(postal_code.to_string()))
    }
}

/// ViaCEP HTTP client implementation
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: Client,
    config: ViaCepConfig,
}

impl ViaCepClient {
    /// Create a new ViaCEP client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ViaCepConfig) -> Result<Self, ViaCepError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ViaCepError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, ViaCepError> {
        Self::new(ViaCepConfig::default())
    }

    /// Build the lookup URL: `<base>/<postal-code>/json/`
    fn build_lookup_url(&self, postal_code: &str) -> String {
        format!(
            "{}/{}/json/",
            self.config.base_url.trim_end_matches('/'),
            postal_code
        )
    }
}

#[async_trait]
impl PostalDirectoryClient for ViaCepClient {
    #[instrument(skip(self))]
    async fn lookup(&self, postal_code: &str) -> Result<Address, ViaCepError> {
        let url = self.build_lookup_url(postal_code);
        debug!(url = %url, "Looking up postal code");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ViaCepError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "ViaCEP returned non-success status");
            if status.is_server_error() {
                return Err(ViaCepError::ServiceUnavailable(format!("HTTP {status}")));
            }
            return Err(ViaCepError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json::<Address>()
            .await
            .map_err(|e| ViaCepError::ParseError(e.to_string()))
    }
}
