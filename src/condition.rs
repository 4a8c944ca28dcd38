//! Weather condition derived from temperature.
//!
//! The condition is a pure function of the Celsius temperature. Band edges
//! belong to the lower band: exactly 25.0 is Cloudy, exactly 15.0 is Rainy and
//! exactly 0.0 is Snowy.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Upper edge of the Cloudy band (exclusive for Sunny).
pub const SUNNY_ABOVE_CELSIUS: f64 = 25.0;
/// Upper edge of the Rainy band (exclusive for Cloudy).
pub const CLOUDY_ABOVE_CELSIUS: f64 = 15.0;
/// Upper edge of the Snowy band (exclusive for Rainy).
pub const RAINY_ABOVE_CELSIUS: f64 = 0.0;

/// Discrete weather classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl WeatherCondition {
    /// Classify a Celsius temperature.
    ///
    /// NaN fails every comparison and lands in Snowy.
    pub fn classify(temperature_celsius: f64) -> Self {
        if temperature_celsius > SUNNY_ABOVE_CELSIUS {
            WeatherCondition::Sunny
        } else if temperature_celsius > CLOUDY_ABOVE_CELSIUS {
            WeatherCondition::Cloudy
        } else if temperature_celsius > RAINY_ABOVE_CELSIUS {
            WeatherCondition::Rainy
        } else {
            WeatherCondition::Snowy
        }
    }

    /// Human-readable label shown by the menu.
    pub fn label(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Snowy => "Snowy",
        }
    }
}
