//! HTTP clients with correlation support
//!
//! Outgoing requests carry the inbound `X-Request-Id` and, when OTLP export
//! is enabled, the current trace context.

mod correlated_client;

pub use correlated_client::{
    CorrelatedClientConfig, CorrelatedHttpClient, CorrelatedRequestBuilder, RequestIdProvider,
    X_REQUEST_ID,
};
