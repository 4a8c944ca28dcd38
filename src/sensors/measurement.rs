//! Measurement value types.

use crate::condition::WeatherCondition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One weather reading.
///
/// Temperature is only ever stored in Celsius; other scales are derived when
/// rendering.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub temperature_celsius: f64,
    /// Relative humidity. Expected in 0..=100 but not enforced.
    pub humidity_percent: f64,
    pub pressure_hpa: f64,
}

impl Measurement {
    pub fn new(temperature_celsius: f64, humidity_percent: f64, pressure_hpa: f64) -> Self {
        Self {
            temperature_celsius,
            humidity_percent,
            pressure_hpa,
        }
    }
}

/// Snapshot of the store after an update.
///
/// The condition is computed from `measurement` when the reading is created
/// and the pair is only ever replaced together.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub measurement: Measurement,
    pub condition: WeatherCondition,
    pub recorded_at: DateTime<Utc>,
    /// Store version this reading was published under (1 for the first update).
    pub version: u64,
}

impl Reading {
    pub(crate) fn new(measurement: Measurement, version: u64) -> Self {
        Self {
            measurement,
            condition: WeatherCondition::classify(measurement.temperature_celsius),
            recorded_at: Utc::now(),
            version,
        }
    }
}
