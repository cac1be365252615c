//! WeatherAPI integration
//!
//! Client for the WeatherAPI current-conditions endpoint
//! (<https://www.weatherapi.com>). Requests are authenticated with an API key
//! passed as the `key` query parameter.

pub mod client;
mod models;

pub use client::{WeatherApiClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{ApiErrorBody, ApiErrorDetail, CurrentConditions, CurrentResponse, Location};
