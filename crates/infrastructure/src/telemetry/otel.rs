//! Subscriber and OpenTelemetry pipeline setup
//!
//! Console logging is always installed. OTLP export is optional and falls
//! back to console-only when the exporter cannot be built, unless
//! `graceful_fallback` is disabled.

use std::time::Duration;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    trace::{Sampler, SdkTracerProvider},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Console log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Configuration for telemetry/tracing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Whether OpenTelemetry export is enabled
    #[serde(default)]
    pub enabled: bool,

    /// OTLP endpoint URL (e.g., "http://localhost:4317" for gRPC)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Service name for traces
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Sampling ratio (0.0 - 1.0) for root spans
    #[serde(default = "default_sampling_ratio")]
    pub sampling_ratio: f64,

    /// Export timeout in seconds
    #[serde(default = "default_export_timeout")]
    pub export_timeout_secs: u64,

    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Continue with console-only logging if the OTLP exporter cannot be built
    #[serde(default = "default_graceful_fallback")]
    pub graceful_fallback: bool,
}

const fn default_sampling_ratio() -> f64 {
    1.0
}

const fn default_export_timeout() -> u64 {
    10
}

fn default_endpoint() -> String {
    "http://localhost:4317".to_string()
}

fn default_service_name() -> String {
    "cep-weather".to_string()
}

fn default_log_filter() -> String {
    "info,tower_http=info".to_string()
}

const fn default_graceful_fallback() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_endpoint(),
            service_name: default_service_name(),
            sampling_ratio: default_sampling_ratio(),
            export_timeout_secs: default_export_timeout(),
            log_filter: default_log_filter(),
            graceful_fallback: default_graceful_fallback(),
        }
    }
}

impl TelemetryConfig {
    fn sampler(&self) -> Sampler {
        let root = if self.sampling_ratio >= 1.0 {
            Sampler::AlwaysOn
        } else if self.sampling_ratio <= 0.0 {
            Sampler::AlwaysOff
        } else {
            Sampler::TraceIdRatioBased(self.sampling_ratio)
        };
        // Downstream services follow the caller's sampling decision
        Sampler::ParentBased(Box::new(root))
    }
}

/// Guard that shuts down the tracer provider when dropped
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl TelemetryGuard {
    /// Whether spans are being exported over OTLP
    pub const fn is_exporting(&self) -> bool {
        self.provider.is_some()
    }
}

impl std::fmt::Debug for TelemetryGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryGuard")
            .field("active", &self.provider.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        let Some(provider) = self.provider.take() else {
            return;
        };
        if let Err(e) = provider.shutdown() {
            tracing::error!(error = ?e, "Failed to shutdown tracer provider");
        }
    }
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// Failed to create OTLP exporter
    #[error("Failed to create OTLP exporter: {0}")]
    Exporter(String),
}

fn build_provider(config: &TelemetryConfig) -> Result<SdkTracerProvider, TelemetryError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&config.endpoint)
        .with_timeout(Duration::from_secs(config.export_timeout_secs))
        .build()
        .map_err(|e| TelemetryError::Exporter(e.to_string()))?;

    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .build();

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_sampler(config.sampler())
        .with_resource(resource)
        .build())
}

/// Initialize logging and, if enabled, OTLP trace export
///
/// Returns a guard that must be kept alive for the duration of the process;
/// dropping it flushes pending spans. `RUST_LOG` takes precedence over
/// `config.log_filter`.
///
/// # Errors
///
/// Fails if a global subscriber is already installed, or if the exporter
/// cannot be built and `graceful_fallback` is off.
pub fn init_telemetry(
    config: &TelemetryConfig,
    format: LogFormat,
) -> Result<TelemetryGuard, TelemetryError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let (provider, fallback_reason) = if config.enabled {
        match build_provider(config) {
            Ok(provider) => (Some(provider), None),
            Err(e) if config.graceful_fallback => (None, Some(e)),
            Err(e) => return Err(e),
        }
    } else {
        (None, None)
    };

    let text_layer = (format == LogFormat::Text).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true)
    });
    let json_layer = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
    });
    let otel_layer = provider
        .as_ref()
        .map(|p| OpenTelemetryLayer::new(p.tracer(config.service_name.clone())));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .with(otel_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    if provider.is_some() {
        opentelemetry::global::set_text_map_propagator(TraceContextPropagator::new());
        info!(
            endpoint = %config.endpoint,
            service = %config.service_name,
            sampling = config.sampling_ratio,
            "Telemetry initialized with OTLP export"
        );
    } else if let Some(reason) = fallback_reason {
        warn!(
            endpoint = %config.endpoint,
            error = %reason,
            "OTLP exporter unavailable, falling back to console-only logging"
        );
    } else {
        info!(service = %config.service_name, "Telemetry initialized (console only)");
    }

    Ok(TelemetryGuard { provider })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TelemetryConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.endpoint, "http://localhost:4317");
        assert!((config.sampling_ratio - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.export_timeout_secs, 10);
        assert!(config.graceful_fallback);
    }

    #[test]
    fn test_config_deserialization_fills_defaults() {
        let json = r#"{"enabled": true, "endpoint": "http://tempo:4317"}"#;
        let parsed: TelemetryConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.enabled);
        assert_eq!(parsed.endpoint, "http://tempo:4317");
        assert!(parsed.graceful_fallback);
        assert_eq!(parsed.log_filter, "info,tower_http=info");
    }

    #[test]
    fn test_log_format_parsing() {
        let json: LogFormat = serde_json::from_str(r#""json""#).unwrap();
        let text: LogFormat = serde_json::from_str(r#""text""#).unwrap();
        assert_eq!(json, LogFormat::Json);
        assert_eq!(text, LogFormat::Text);
        assert_eq!(LogFormat::default(), LogFormat::Text);
        assert!(serde_json::from_str::<LogFormat>(r#""xml""#).is_err());
    }

    #[test]
    fn test_sampler_is_parent_based() {
        for ratio in [0.0, 0.25, 1.0] {
            let config = TelemetryConfig {
                sampling_ratio: ratio,
                ..Default::default()
            };
            assert!(matches!(config.sampler(), Sampler::ParentBased(_)));
        }
    }

    #[test]
    fn test_telemetry_guard_without_provider() {
        let guard = TelemetryGuard { provider: None };
        assert!(!guard.is_exporting());
        drop(guard);
    }
}
