//! Resolver client - Implements ResolverPort by POSTing to the resolver service

use application::{ForwardError, RelayedResponse, RequestContext, ResolverPort};
use async_trait::async_trait;
use domain::PostalCode;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::{
    config::ResolverClientConfig,
    http::{CorrelatedClientConfig, CorrelatedHttpClient},
};

/// Body sent to the resolver's `POST /cep`
#[derive(Debug, Serialize)]
struct ForwardBody<'a> {
    cep: &'a str,
}

/// HTTP forwarding client used by the gateway
#[derive(Debug, Clone)]
pub struct ResolverHttpClient {
    http: CorrelatedHttpClient,
    endpoint: String,
}

impl ResolverHttpClient {
    /// Create a client for the configured resolver
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ResolverClientConfig) -> Result<Self, reqwest::Error> {
        let http = CorrelatedHttpClient::with_config(&CorrelatedClientConfig::from(config))?;
        Ok(Self {
            http,
            endpoint: config.endpoint(),
        })
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ResolverPort for ResolverHttpClient {
    #[instrument(
        skip(self, ctx),
        fields(request_id = %ctx.request_id(), postal_code = %postal_code, endpoint = %self.endpoint)
    )]
    async fn forward(
        &self,
        ctx: &RequestContext,
        postal_code: &PostalCode,
    ) -> Result<RelayedResponse, ForwardError> {
        let response = self
            .http
            .post(&self.endpoint)
            .with_request_id(ctx)
            .json(&ForwardBody {
                cep: postal_code.as_str(),
            })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Resolver request failed");
                ForwardError::Unreachable(e.to_string())
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, "Reading resolver response failed");
            ForwardError::Unreachable(e.to_string())
        })?;

        debug!(status, bytes = body.len(), "Resolver responded");

        let relayed = RelayedResponse::new(status, body.to_vec());
        Ok(match content_type {
            Some(ct) => relayed.with_content_type(ct),
            None => relayed,
        })
    }
}
