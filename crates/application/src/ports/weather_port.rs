//! Weather service port
//!
//! Defines the interface for current temperature retrieval.

use async_trait::async_trait;
use domain::{City, Temperature};
#[cfg(test)]
use mockall::automock;

use crate::{error::WeatherLookupError, request_context::RequestContext};

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get the current temperature for a city
    ///
    /// Fails with `WeatherLookupError::ConfigMissing` before any network
    /// call when no credential is configured.
    async fn current_temperature(
        &self,
        ctx: &RequestContext,
        city: &City,
    ) -> Result<Temperature, WeatherLookupError>;
}
