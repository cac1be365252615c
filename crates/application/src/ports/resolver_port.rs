//! Resolver forwarding port
//!
//! Used by the gateway to hand a validated postal code to the resolver
//! service and get its raw response back.

use async_trait::async_trait;
use domain::PostalCode;
#[cfg(test)]
use mockall::automock;

use crate::{error::ForwardError, request_context::RequestContext};

/// A downstream response relayed without interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayedResponse {
    /// HTTP status code returned by the resolver
    pub status: u16,
    /// `Content-Type` header returned by the resolver, if any
    pub content_type: Option<String>,
    /// Raw response body
    pub body: Vec<u8>,
}

impl RelayedResponse {
    /// Create a relayed response without a content type
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    /// Attach the downstream content type
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Port for forwarding postal code lookups to the resolver
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ResolverPort: Send + Sync {
    /// Forward the normalized postal code and return the resolver's response
    ///
    /// Any HTTP status is a successful forward; only transport failures are
    /// errors.
    async fn forward(
        &self,
        ctx: &RequestContext,
        postal_code: &PostalCode,
    ) -> Result<RelayedResponse, ForwardError>;
}
