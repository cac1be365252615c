//! Gateway use case
//!
//! Validates and normalizes the postal code, then forwards it to the
//! resolver. Whatever the resolver answers is handed back untouched.

use std::sync::Arc;

use domain::PostalCode;
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{RelayedResponse, ResolverPort},
    request_context::RequestContext,
};

/// Validate-then-forward front service
#[derive(Clone)]
pub struct GatewayService {
    resolver: Arc<dyn ResolverPort>,
}

impl std::fmt::Debug for GatewayService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayService")
            .field("resolver", &"<ResolverPort>")
            .finish()
    }
}

impl GatewayService {
    /// Create a new gateway service
    pub fn new(resolver: Arc<dyn ResolverPort>) -> Self {
        Self { resolver }
    }

    /// Validate a raw postal code and forward it to the resolver
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Domain` if the postal code is invalid; nothing
    ///   is forwarded.
    /// - `ApplicationError::Forward` if the resolver cannot be reached.
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    pub async fn forward(
        &self,
        ctx: &RequestContext,
        raw_postal_code: &str,
    ) -> Result<RelayedResponse, ApplicationError> {
        let postal_code = PostalCode::parse(raw_postal_code)?;

        let response = self
            .resolver
            .forward(ctx, &postal_code)
            .await
            .inspect_err(|e| warn!(error = %e, "Forwarding to resolver failed"))?;

        debug!(status = response.status, "Resolver responded");
        Ok(response)
    }
}
