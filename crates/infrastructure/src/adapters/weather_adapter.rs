//! Weather adapter - Implements WeatherPort using integration_weather

use std::sync::Arc;

use application::{RequestContext, WeatherLookupError, WeatherPort};
use async_trait::async_trait;
use domain::{City, Temperature};
use integration_weather::{WeatherApiClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for current temperature lookups against WeatherAPI
#[derive(Clone)]
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"<WeatherClient>")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize. A missing
    /// API key is not an error here.
    pub fn with_config(config: WeatherConfig) -> Result<Self, WeatherError> {
        Ok(Self::from_client(Arc::new(WeatherApiClient::new(config)?)))
    }

    /// Wrap an existing weather client
    pub fn from_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to the port's error
    fn map_error(err: WeatherError) -> WeatherLookupError {
        match err {
            WeatherError::MissingApiKey => WeatherLookupError::ConfigMissing,
            other @ (WeatherError::ConnectionFailed(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::Api { .. }
            | WeatherError::ParseError(_)
            | WeatherError::ServiceUnavailable(_)
            | WeatherError::RateLimitExceeded) => WeatherLookupError::Upstream(other.to_string()),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self, ctx), fields(request_id = %ctx.request_id(), city = %city))]
    async fn current_temperature(
        &self,
        ctx: &RequestContext,
        city: &City,
    ) -> Result<Temperature, WeatherLookupError> {
        let celsius = self
            .client
            .current_temp_c(city.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(temp_c = celsius, "Weather lookup succeeded");
        Ok(Temperature::from_celsius(celsius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubClient(fn(&str) -> Result<f64, WeatherError>);

    #[async_trait]
    impl WeatherClient for StubClient {
        async fn current_temp_c(&self, location: &str) -> Result<f64, WeatherError> {
            (self.0)(location)
        }
    }

    fn adapter(f: fn(&str) -> Result<f64, WeatherError>) -> WeatherAdapter {
        WeatherAdapter::from_client(Arc::new(StubClient(f)))
    }

    #[tokio::test]
    async fn returns_temperature_for_city() {
        let adapter = adapter(|city| {
            assert_eq!(city, "Belo Horizonte");
            Ok(24.0)
        });
        let temp = adapter
            .current_temperature(&RequestContext::new(), &City::new("Belo Horizonte").unwrap())
            .await
            .unwrap();
        assert!((temp.celsius() - 24.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn missing_key_is_config_missing() {
        let adapter = adapter(|_| Err(WeatherError::MissingApiKey));
        let err = adapter
            .current_temperature(&RequestContext::new(), &City::new("Natal").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err, WeatherLookupError::ConfigMissing);
    }

    #[test]
    fn map_error_variants() {
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::RateLimitExceeded),
            WeatherLookupError::Upstream(_)
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::Api {
                code: 1006,
                message: "No matching location found.".to_string()
            }),
            WeatherLookupError::Upstream(ref msg) if msg.contains("1006")
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::ParseError("eof".to_string())),
            WeatherLookupError::Upstream(_)
        ));
    }

    #[test]
    fn debug_impl() {
        let adapter = WeatherAdapter::with_config(WeatherConfig::default()).unwrap();
        assert!(format!("{adapter:?}").contains("WeatherAdapter"));
    }
}
