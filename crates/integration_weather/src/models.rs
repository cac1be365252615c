//! WeatherAPI response models

use serde::{Deserialize, Serialize};

/// Response of `GET /v1/current.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentResponse {
    /// Resolved location, when the API includes it
    #[serde(default)]
    pub location: Option<Location>,
    /// Current conditions
    pub current: CurrentConditions,
}

/// Location the API matched the query to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// City name as spelled by the API
    #[serde(default)]
    pub name: String,
    /// State or region
    #[serde(default)]
    pub region: String,
    /// Country name
    #[serde(default)]
    pub country: String,
}

/// Current conditions block; only the Celsius reading is required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in degrees Celsius
    pub temp_c: f64,
    /// Temperature in degrees Fahrenheit, as reported by the API
    #[serde(default)]
    pub temp_f: Option<f64>,
}

/// Error envelope, e.g. `{"error": {"code": 1006, "message": "No matching location found."}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error detail
    pub error: ApiErrorDetail,
}

/// Code and message of a WeatherAPI error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// WeatherAPI error code
    pub code: i64,
    /// Human-readable message
    pub message: String,
}
