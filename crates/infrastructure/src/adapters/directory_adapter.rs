//! Directory adapter - Implements DirectoryPort using integration_viacep

use std::sync::Arc;

use application::{DirectoryError, DirectoryPort, RequestContext};
use async_trait::async_trait;
use domain::{City, PostalCode};
use integration_viacep::{PostalDirectoryClient, ViaCepClient, ViaCepConfig, ViaCepError};
use tracing::{debug, instrument};

/// Adapter for postal code lookups against ViaCEP
#[derive(Clone)]
pub struct DirectoryAdapter {
    client: Arc<dyn PostalDirectoryClient>,
}

impl std::fmt::Debug for DirectoryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryAdapter")
            .field("client", &"<PostalDirectoryClient>")
            .finish()
    }
}

impl DirectoryAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: ViaCepConfig) -> Result<Self, ViaCepError> {
        Ok(Self::from_client(Arc::new(ViaCepClient::new(config)?)))
    }

    /// Wrap an existing directory client
    pub fn from_client(client: Arc<dyn PostalDirectoryClient>) -> Self {
        Self { client }
    }

    /// Map integration error to the port's error
    fn map_error(err: ViaCepError) -> DirectoryError {
        match err {
            ViaCepError::NotFound(_) => DirectoryError::NotFound,
            other @ (ViaCepError::ConnectionFailed(_)
            | ViaCepError::RequestFailed(_)
            | ViaCepError::ParseError(_)
            | ViaCepError::ServiceUnavailable(_)) => DirectoryError::Upstream(other.to_string()),
        }
    }
}

#[async_trait]
impl DirectoryPort for DirectoryAdapter {
    #[instrument(
        skip(self, ctx),
        fields(request_id = %ctx.request_id(), postal_code = %postal_code)
    )]
    async fn resolve_city(
        &self,
        ctx: &RequestContext,
        postal_code: &PostalCode,
    ) -> Result<City, DirectoryError> {
        let locality = self
            .client
            .locality(postal_code.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(locality = %locality, "Directory resolved locality");
        City::new(locality).map_err(|_| DirectoryError::NotFound)
    }
}
