//! HTTP middleware

mod correlation;

pub use correlation::{CorrelationLayer, CorrelationService, incoming_request_id};
