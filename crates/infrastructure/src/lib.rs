//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports over HTTP (ViaCEP, WeatherAPI and the
//! resolver service), and provides configuration loading and telemetry
//! setup for both binaries.

pub mod adapters;
pub mod config;
pub mod http;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ResolverClientConfig, ServerConfig, Service};
pub use http::{CorrelatedClientConfig, CorrelatedHttpClient, RequestIdProvider, X_REQUEST_ID};
pub use telemetry::{LogFormat, TelemetryConfig, TelemetryGuard, init_telemetry};
