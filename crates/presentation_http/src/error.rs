//! API error handling
//!
//! The only place where lookup outcomes become HTTP statuses. Response
//! bodies carry a short message and a machine-readable code; upstream
//! details are logged by the services, never returned.

use application::{ApplicationError, DirectoryError, ForwardError, WeatherLookupError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request body is not well-formed JSON of the expected shape (gateway)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Postal code failed validation, or the resolver could not read the body
    #[error("invalid zipcode")]
    InvalidZipcode,

    /// Directory lookup produced no city
    #[error("can not find zipcode")]
    ZipcodeNotFound,

    /// Weather lookup failed, including a missing API key
    #[error("weather lookup failed")]
    WeatherUnavailable,

    /// Gateway could not reach the resolver
    #[error("resolver unavailable")]
    ResolverUnavailable,
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl ApiError {
    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidZipcode => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ZipcodeNotFound => StatusCode::NOT_FOUND,
            Self::WeatherUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ResolverUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Machine-readable code for the response body
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::InvalidZipcode => "invalid_zipcode",
            Self::ZipcodeNotFound => "zipcode_not_found",
            Self::WeatherUnavailable => "weather_unavailable",
            Self::ResolverUnavailable => "resolver_unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(DomainError::InvalidPostalCode(_)) => Self::InvalidZipcode,
            ApplicationError::Domain(DomainError::EmptyCityName)
            | ApplicationError::Directory(DirectoryError::NotFound | DirectoryError::Upstream(_)) => {
                Self::ZipcodeNotFound
            },
            ApplicationError::Weather(
                WeatherLookupError::ConfigMissing | WeatherLookupError::Upstream(_),
            ) => Self::WeatherUnavailable,
            ApplicationError::Forward(ForwardError::Unreachable(_)) => Self::ResolverUnavailable,
        }
    }
}
