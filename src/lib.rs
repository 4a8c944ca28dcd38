//! Weather monitor library.
//!
//! Synthetic weather sources feed a measurement store that classifies the
//! weather condition and notifies alert listeners on every update. The
//! presenter renders the latest reading in Celsius, Fahrenheit or Kelvin.

pub mod cli;
pub mod condition;
pub mod config;
pub mod error;
pub mod input;
pub mod presenter;
pub mod sensors;
pub mod units;

pub use condition::WeatherCondition;
pub use error::{Result, WeatherError};
pub use sensors::{Alert, AlertListener, Measurement, MeasurementStore, Reading};
pub use units::TemperatureScale;
