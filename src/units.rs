//! Temperature scale conversion.
//!
//! Celsius is the canonical unit: measurements are stored in Celsius and every
//! other scale is derived on demand. Conversions between two non-Celsius
//! scales pivot through Celsius.

use crate::error::{Result, WeatherError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter};

/// Offset between Celsius and Kelvin.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Supported temperature scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    /// Unit suffix appended directly after a rendered value.
    pub fn suffix(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "°C",
            TemperatureScale::Fahrenheit => "°F",
            TemperatureScale::Kelvin => "K",
        }
    }

    /// Convert `value` from `from` to `to`.
    ///
    /// Identical scales return the value untouched. A Celsius endpoint uses a
    /// single direct formula; Fahrenheit <-> Kelvin goes through Celsius.
    pub fn convert(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
        use TemperatureScale::*;

        match (from, to) {
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
            (Celsius, Fahrenheit) => celsius_to_fahrenheit(value),
            (Celsius, Kelvin) => celsius_to_kelvin(value),
            (Fahrenheit, Celsius) => fahrenheit_to_celsius(value),
            (Kelvin, Celsius) => kelvin_to_celsius(value),
            (Fahrenheit, Kelvin) => celsius_to_kelvin(fahrenheit_to_celsius(value)),
            (Kelvin, Fahrenheit) => celsius_to_fahrenheit(kelvin_to_celsius(value)),
        }
    }

    /// Convert a value in this scale to Celsius.
    pub fn to_celsius(self, value: f64) -> f64 {
        Self::convert(value, self, TemperatureScale::Celsius)
    }

    /// Convert a Celsius value into this scale.
    pub fn celsius_to(self, celsius: f64) -> f64 {
        Self::convert(celsius, TemperatureScale::Celsius, self)
    }
}

impl FromStr for TemperatureScale {
    type Err = WeatherError;

    /// Parse a scale name. Matching is case-insensitive and accepts the
    /// single-letter shorthands.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "celsius" | "c" | "°c" => Ok(TemperatureScale::Celsius),
            "fahrenheit" | "f" | "°f" => Ok(TemperatureScale::Fahrenheit),
            "kelvin" | "k" => Ok(TemperatureScale::Kelvin),
            _ => Err(WeatherError::UnknownScale(s.to_string())),
        }
    }
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn celsius_to_kelvin(c: f64) -> f64 {
    c + KELVIN_OFFSET
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn kelvin_to_celsius(k: f64) -> f64 {
    k - KELVIN_OFFSET
}

/// Convert `value` between two scales given by name.
///
/// Both names are validated before anything else, so an unrecognized name is
/// rejected even when `from == to`.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64> {
    let from: TemperatureScale = from.parse()?;
    let to: TemperatureScale = to.parse()?;
    Ok(TemperatureScale::convert(value, from, to))
}
