//! Telemetry and distributed tracing infrastructure
//!
//! Installs the `tracing` subscriber for each binary and, when enabled,
//! exports spans over OTLP. The W3C trace-context helpers in `propagation`
//! carry the trace across the gateway → resolver hop.

mod otel;
pub mod propagation;

pub use otel::{LogFormat, TelemetryConfig, TelemetryError, TelemetryGuard, init_telemetry};
