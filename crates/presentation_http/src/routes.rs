//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use infrastructure::Service;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{
    handlers,
    middleware::CorrelationLayer,
    state::{GatewayState, ResolverState},
};

/// Router of the front gateway
pub fn create_gateway_router(state: GatewayState) -> Router {
    let max_body_bytes = state.max_body_bytes;
    with_layers(
        Router::new()
            .route("/health", get(handlers::health::health_check))
            .route("/cep", post(handlers::gateway::lookup))
            .with_state(state),
        Service::Gateway,
        max_body_bytes,
    )
}

/// Router of the resolver aggregator
pub fn create_resolver_router(state: ResolverState) -> Router {
    let max_body_bytes = state.max_body_bytes;
    with_layers(
        Router::new()
            .route("/health", get(handlers::health::health_check))
            .route("/cep", post(handlers::resolver::lookup))
            .with_state(state),
        Service::Resolver,
        max_body_bytes,
    )
}

// Last added is outermost: the correlation span wraps the trace span
fn with_layers(router: Router, service: Service, max_body_bytes: usize) -> Router {
    router
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorrelationLayer::new(service.name()))
}
