//! Front gateway entry point
//!
//! Accepts `POST /cep`, validates the postal code and forwards it to the
//! resolver service, relaying its answer.

use std::sync::Arc;

use infrastructure::{AppConfig, ResolverHttpClient, Service, init_telemetry};
use presentation_http::{GatewayState, create_gateway_router, serve};
use tracing::{info, warn};

const SERVICE: Service = Service::Gateway;

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

    let resolver = ResolverHttpClient::new(&config.resolver)?;
    info!(
        service = %SERVICE,
        version = env!("CARGO_PKG_VERSION"),
        resolver = %resolver.endpoint(),
        "Starting front gateway"
    );

    let state = GatewayState::new(Arc::new(resolver))
        .with_max_body_bytes(config.server.max_body_size_json_bytes);
    serve(create_gateway_router(state), &config.server).await?;

    Ok(())
}
