//! Application configuration
//!
//! Both binaries share one configuration shape. Sources are layered:
//! built-in defaults, then an optional `config.toml` in the working
//! directory, then `CEP_`-prefixed environment variables using `__` as the
//! section separator (`CEP_SERVER__PORT=9000`, `CEP_WEATHER__API_KEY=...`).
//!
//! The weather key also falls back to a plain `WEATHER_API_KEY` variable.
//! A missing key never fails loading; lookups report it instead.

mod resolver;
mod server;

use std::path::Path;

use integration_viacep::ViaCepConfig;
use integration_weather::WeatherConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

pub use resolver::ResolverClientConfig;
pub use server::ServerConfig;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "CEP";

/// Plain environment variable consulted when no weather key is configured
pub const WEATHER_API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Which binary is loading the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Front gateway (validates and forwards)
    Gateway,
    /// Resolver aggregator (directory + weather lookups)
    Resolver,
}

impl Service {
    /// Default listen port
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Gateway => 8080,
            Self::Resolver => 8081,
        }
    }

    /// Service name used for logs and traces
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gateway => "cep-gateway",
            Self::Resolver => "cep-resolver",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Gateway forwarding target (unused by the resolver)
    #[serde(default)]
    pub resolver: ResolverClientConfig,

    /// ViaCEP directory client (unused by the gateway)
    #[serde(default)]
    pub viacep: ViaCepConfig,

    /// WeatherAPI client (unused by the gateway)
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Tracing and OTLP export
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration for a service from `config.toml` (optional) and
    /// the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load_for(service: Service) -> Result<Self, config::ConfigError> {
        Self::build(service, config::File::with_name("config").required(false))
    }

    /// Load configuration for a service from an explicit file plus the
    /// environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn load_from_file(service: Service, path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(service, config::File::from(path).required(true))
    }

    /// Defaults for a service, used when loading fails
    pub fn default_for(service: Service) -> Self {
        let mut config = Self::default();
        config.server.port = service.default_port();
        service.name().clone_into(&mut config.telemetry.service_name);
        config.apply_weather_key_fallback(std::env::var(WEATHER_API_KEY_ENV).ok());
        config
    }

    fn build<S>(service: Service, file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let mut config: Self = config::Config::builder()
            .set_default("server.port", i64::from(service.default_port()))?
            .set_default("telemetry.service_name", service.name())?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.apply_weather_key_fallback(std::env::var(WEATHER_API_KEY_ENV).ok());
        Ok(config)
    }

    /// Use `value` as the weather key unless one is already configured
    pub fn apply_weather_key_fallback(&mut self, value: Option<String>) {
        if self.weather.api_key_str().is_some() {
            return;
        }
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            self.weather.api_key = Some(SecretString::from(key));
        }
    }
}
