//! Application-level errors
//!
//! Each collaborator has its own small tagged error so that callers can map
//! outcomes to HTTP statuses with exhaustive matches.

use domain::DomainError;
use thiserror::Error;

/// Failure of the postal directory lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The directory has no usable locality for the postal code
    #[error("Postal code not found")]
    NotFound,

    /// Network error, non-success status or unparseable payload
    #[error("Directory service error: {0}")]
    Upstream(String),
}

/// Failure of the weather lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherLookupError {
    /// No weather API credential is configured
    #[error("Weather API key is not configured")]
    ConfigMissing,

    /// Network error, non-success status or unparseable payload
    #[error("Weather service error: {0}")]
    Upstream(String),
}

/// Failure to reach the resolver from the gateway
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForwardError {
    /// Transport-level failure (connect, timeout, reset)
    #[error("Resolver unreachable: {0}")]
    Unreachable(String),
}

/// Errors that can occur in the application layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Domain-level error (input validation)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Postal directory lookup failed
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Weather lookup failed
    #[error(transparent)]
    Weather(#[from] WeatherLookupError),

    /// Forwarding to the resolver failed
    #[error(transparent)]
    Forward(#[from] ForwardError),
}
