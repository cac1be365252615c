//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Postal code is not 8 digits after stripping hyphens
    #[error("Invalid postal code: {0:?}")]
    InvalidPostalCode(String),

    /// City name is empty
    #[error("City name must not be empty")]
    EmptyCityName,
}
