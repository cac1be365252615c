//! Temperature value object
//!
//! Holds a reading in degrees Celsius and derives the Fahrenheit and Kelvin
//! scales with plain linear formulas. No rounding is applied.
//!
//! # Examples
//!
//! ```
//! use domain::Temperature;
//!
//! let t = Temperature::from_celsius(100.0);
//! assert_eq!(t.fahrenheit(), 212.0);
//! assert!((t.kelvin() - 373.15).abs() < 1e-9);
//! ```

use serde::Serialize;

/// Offset between the Celsius and Kelvin scales
const KELVIN_OFFSET: f64 = 273.15;

/// A temperature reading in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    /// Wrap a Celsius reading; the upstream value is passed through as-is
    pub const fn from_celsius(celsius: f64) -> Self {
        Self(celsius)
    }

    /// Degrees Celsius
    pub const fn celsius(self) -> f64 {
        self.0
    }

    /// Degrees Fahrenheit (`C * 1.8 + 32`)
    pub fn fahrenheit(self) -> f64 {
        self.0 * 1.8 + 32.0
    }

    /// Kelvin (`C + 273.15`)
    pub fn kelvin(self) -> f64 {
        self.0 + KELVIN_OFFSET
    }
}
