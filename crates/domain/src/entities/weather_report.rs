//! Aggregated weather report entity
//!
//! The final payload returned to callers: the resolved city plus the current
//! temperature in three scales. Built once per request and serialized
//! directly as the response body.

use serde::{Deserialize, Serialize};

use crate::value_objects::{City, Temperature};

/// Combined result of a postal code weather lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// City name resolved from the postal code
    pub city: String,
    /// Temperature in degrees Celsius
    #[serde(rename = "tempC")]
    pub temp_c: f64,
    /// Temperature in degrees Fahrenheit
    #[serde(rename = "tempF")]
    pub temp_f: f64,
    /// Temperature in Kelvin
    #[serde(rename = "tempK")]
    pub temp_k: f64,
}

impl WeatherReport {
    /// Build the report, deriving Fahrenheit and Kelvin from the reading
    pub fn new(city: City, temperature: Temperature) -> Self {
        Self {
            city: city.into_inner(),
            temp_c: temperature.celsius(),
            temp_f: temperature.fahrenheit(),
            temp_k: temperature.kelvin(),
        }
    }
}
