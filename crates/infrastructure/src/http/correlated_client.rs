//! HTTP client with automatic request ID correlation
//!
//! Wraps `reqwest::Client` so that outgoing requests carry the caller's
//! `X-Request-Id` and, when tracing export is on, the W3C `traceparent`
//! of the current span.
//!
//! # Examples
//!
//! ```ignore
//! use application::RequestContext;
//! use infrastructure::http::{CorrelatedClientConfig, CorrelatedHttpClient};
//!
//! let client = CorrelatedHttpClient::with_config(&CorrelatedClientConfig::default())?;
//! let ctx = RequestContext::new();
//!
//! let response = client
//!     .post("http://localhost:8081/cep")
//!     .with_request_id(&ctx)
//!     .json(&serde_json::json!({"cep": "01310100"}))
//!     .send()
//!     .await?;
//! ```

use std::time::Duration;

use reqwest::{
    Client, RequestBuilder, Response,
    header::HeaderMap,
};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{config::ResolverClientConfig, telemetry::propagation};

/// Header name for request correlation ID
pub const X_REQUEST_ID: &str = "x-request-id";

/// Trait for types that can provide a request ID
pub trait RequestIdProvider {
    /// Get the request ID to use for correlation
    fn request_id(&self) -> Uuid;
}

impl RequestIdProvider for Uuid {
    fn request_id(&self) -> Uuid {
        *self
    }
}

impl RequestIdProvider for application::RequestContext {
    fn request_id(&self) -> Uuid {
        Self::request_id(self)
    }
}

/// Configuration for the correlated HTTP client
#[derive(Debug, Clone)]
pub struct CorrelatedClientConfig {
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for CorrelatedClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
            user_agent: format!("cep-weather/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl From<&ResolverClientConfig> for CorrelatedClientConfig {
    fn from(config: &ResolverClientConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            timeout: Duration::from_secs(config.timeout_secs),
            ..Self::default()
        }
    }
}

/// HTTP client that propagates request correlation IDs
#[derive(Debug, Clone)]
pub struct CorrelatedHttpClient {
    inner: Client,
}

impl CorrelatedHttpClient {
    /// Create a client with the given timeouts and user agent
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reqwest client cannot be built.
    pub fn with_config(config: &CorrelatedClientConfig) -> Result<Self, reqwest::Error> {
        let inner = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { inner })
    }

    /// Start a POST request
    pub fn post(&self, url: impl AsRef<str>) -> CorrelatedRequestBuilder {
        CorrelatedRequestBuilder::new(self.inner.post(url.as_ref()))
    }
}

/// A request builder that supports correlation ID attachment
pub struct CorrelatedRequestBuilder {
    inner: RequestBuilder,
    request_id: Option<Uuid>,
}

impl std::fmt::Debug for CorrelatedRequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorrelatedRequestBuilder")
            .field("request_id", &self.request_id)
            .finish_non_exhaustive()
    }
}

impl CorrelatedRequestBuilder {
    #[allow(clippy::missing_const_for_fn)]
    fn new(inner: RequestBuilder) -> Self {
        Self {
            inner,
            request_id: None,
        }
    }

    /// Attach a request ID, sent as `X-Request-Id`
    #[must_use]
    pub fn with_request_id(mut self, id: &impl RequestIdProvider) -> Self {
        self.request_id = Some(id.request_id());
        self
    }

    /// Set the request body as JSON
    #[must_use]
    pub fn json<T: serde::Serialize + ?Sized>(mut self, json: &T) -> Self {
        self.inner = self.inner.json(json);
        self
    }

    /// Send the request
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails at the transport level.
    #[instrument(skip(self), fields(request_id = ?self.request_id))]
    pub async fn send(self) -> Result<Response, reqwest::Error> {
        let mut headers = HeaderMap::new();
        propagation::inject_current_context(&mut headers);

        let mut builder = self.inner.headers(headers);
        if let Some(request_id) = self.request_id {
            builder = builder.header(X_REQUEST_ID, request_id.to_string());
            debug!(request_id = %request_id, "Sending correlated HTTP request");
        }

        builder.send().await
    }
}
