//! Resolver aggregator entry point
//!
//! Accepts `POST /cep`, resolves the city through ViaCEP and answers with
//! its current temperature from WeatherAPI.

use std::sync::Arc;

use infrastructure::{AppConfig, DirectoryAdapter, Service, WeatherAdapter, init_telemetry};
use presentation_http::{ResolverState, create_resolver_router, serve};
use tracing::{info, warn};

const SERVICE: Service = Service::Resolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, load_error) = match AppConfig::load_for(SERVICE) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default_for(SERVICE), Some(e)),
    };

    let _telemetry = init_telemetry(&config.telemetry, config.server.log_format)?;
    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    // Lookups fail with 500 until a key is provided
    if config.weather.api_key_str().is_none() {
        warn!("No WeatherAPI key configured; set CEP_WEATHER__API_KEY or WEATHER_API_KEY");
    }

    info!(
        service = %SERVICE,
        version = env!("CARGO_PKG_VERSION"),
        viacep = %config.viacep.base_url,
        weather = %config.weather.base_url,
        "Starting resolver aggregator"
    );

    let directory = DirectoryAdapter::with_config(config.viacep.clone())?;
    let weather = WeatherAdapter::with_config(config.weather.clone())?;

    let state = ResolverState::new(Arc::new(directory), Arc::new(weather))
        .with_max_body_bytes(config.server.max_body_size_json_bytes);
    serve(create_resolver_router(state), &config.server).await?;

    Ok(())
}
