//! Application state shared across handlers

use std::sync::Arc;

use application::{DirectoryPort, GatewayService, ResolverPort, ResolverService, WeatherPort};

/// Default cap on request body size
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared state of the front gateway
#[derive(Debug, Clone)]
pub struct GatewayState {
    /// Validate-and-forward use case
    pub gateway_service: Arc<GatewayService>,
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl GatewayState {
    /// Build gateway state around a resolver port
    pub fn new(resolver: Arc<dyn ResolverPort>) -> Self {
        Self {
            gateway_service: Arc::new(GatewayService::new(resolver)),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Override the body size limit
    #[must_use]
    pub const fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// Shared state of the resolver aggregator
#[derive(Debug, Clone)]
pub struct ResolverState {
    /// Postal code → weather report use case
    pub resolver_service: Arc<ResolverService>,
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl ResolverState {
    /// Build resolver state around the directory and weather ports
    pub fn new(directory: Arc<dyn DirectoryPort>, weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            resolver_service: Arc::new(ResolverService::new(directory, weather)),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Override the body size limit
    #[must_use]
    pub const fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
