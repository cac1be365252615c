//! Resolver use case
//!
//! Validates the postal code, resolves the city through the directory port,
//! fetches the current temperature through the weather port and builds the
//! aggregated report. Steps run strictly in sequence: the weather lookup
//! needs the city produced by the directory lookup.

use std::sync::Arc;

use domain::{PostalCode, WeatherReport};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{DirectoryPort, WeatherPort},
    request_context::RequestContext,
};

/// Postal code to weather report orchestration
#[derive(Clone)]
pub struct ResolverService {
    directory: Arc<dyn DirectoryPort>,
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for ResolverService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverService")
            .field("directory", &"<DirectoryPort>")
            .field("weather", &"<WeatherPort>")
            .finish()
    }
}

impl ResolverService {
    /// Create a new resolver service
    pub fn new(directory: Arc<dyn DirectoryPort>, weather: Arc<dyn WeatherPort>) -> Self {
        Self { directory, weather }
    }

    /// Resolve a raw postal code into a weather report
    ///
    /// The code is validated here even when the caller already did so.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Domain` if the postal code is invalid; no
    ///   collaborator is called.
    /// - `ApplicationError::Directory` if the city cannot be resolved.
    /// - `ApplicationError::Weather` if the temperature cannot be fetched.
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id()))]
    pub async fn resolve(
        &self,
        ctx: &RequestContext,
        raw_postal_code: &str,
    ) -> Result<WeatherReport, ApplicationError> {
        let postal_code = PostalCode::parse(raw_postal_code)?;

        let city = self
            .directory
            .resolve_city(ctx, &postal_code)
            .await
            .inspect_err(|e| warn!(postal_code = %postal_code, error = %e, "City lookup failed"))?;
        debug!(postal_code = %postal_code, city = %city, "Resolved city");

        let temperature = self
            .weather
            .current_temperature(ctx, &city)
            .await
            .inspect_err(|e| warn!(city = %city, error = %e, "Weather lookup failed"))?;

        let report = WeatherReport::new(city, temperature);
        info!(
            postal_code = %postal_code,
            city = %report.city,
            temp_c = report.temp_c,
            "Weather report ready"
        );
        Ok(report)
    }
}
