//! Postal directory port
//!
//! Resolves a postal code to the city it belongs to.

use async_trait::async_trait;
use domain::{City, PostalCode};
#[cfg(test)]
use mockall::automock;

use crate::{error::DirectoryError, request_context::RequestContext};

/// Port for postal code to city resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectoryPort: Send + Sync {
    /// Resolve the city for a validated postal code
    ///
    /// A single attempt is made; an empty or absent locality is reported as
    /// `DirectoryError::NotFound`.
    async fn resolve_city(
        &self,
        ctx: &RequestContext,
        postal_code: &PostalCode,
    ) -> Result<City, DirectoryError>;
}
