//! Synthetic weather sources.
//!
//! Both the "remote" (API-like) and "local" (sensor-like) sources draw from
//! the same bounded uniform ranges. The kind only records which one the user
//! picked.

use crate::error::{Result, WeatherError};
use crate::sensors::{Measurement, MeasurementStore, UpdateOutcome};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::str::FromStr;
use strum::{Display, EnumIter};

/// Temperature range in °C, half-open.
pub const TEMPERATURE_RANGE_CELSIUS: Range<f64> = -10.0..40.0;
/// Relative humidity range in %, half-open.
pub const HUMIDITY_RANGE_PERCENT: Range<f64> = 50.0..100.0;
/// Pressure range in hPa, half-open.
pub const PRESSURE_RANGE_HPA: Range<f64> = 1013.0..1023.0;

/// Which source the user selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// API-like source
    Remote,
    /// Sensor-like source
    Local,
}

impl FromStr for SourceKind {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" | "api" => Ok(SourceKind::Remote),
            "local" | "sensor" => Ok(SourceKind::Local),
            _ => Err(WeatherError::UnknownSource(s.to_string())),
        }
    }
}

/// Random generator producing bounded weather readings.
#[derive(Debug)]
pub struct SyntheticSource {
    kind: SourceKind,
    rng: StdRng,
}

impl SyntheticSource {
    /// Create a source seeded from OS entropy.
    pub fn new(kind: SourceKind) -> Self {
        Self {
            kind,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the generator with a deterministic one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Draw one reading without touching any store.
    pub fn sample(&mut self) -> Measurement {
        Measurement::new(
            self.rng.gen_range(TEMPERATURE_RANGE_CELSIUS),
            self.rng.gen_range(HUMIDITY_RANGE_PERCENT),
            self.rng.gen_range(PRESSURE_RANGE_HPA),
        )
    }

    /// Draw one reading and push it into `store`.
    pub fn collect(&mut self, store: &MeasurementStore) -> UpdateOutcome {
        let m = self.sample();
        info!(
            "[Sim] {} source: {:.2}°C, {:.2}%, {:.2} hPa",
            self.kind, m.temperature_celsius, m.humidity_percent, m.pressure_hpa
        );
        store.update(m.temperature_celsius, m.humidity_percent, m.pressure_hpa)
    }
}

/// Select a source by name (`remote`/`api` or `local`/`sensor`).
///
/// An unknown name fails and leaves no state behind.
pub fn select_source(name: &str) -> Result<SyntheticSource> {
    let kind: SourceKind = name.parse()?;
    info!("[Sim] selected {} source", kind);
    Ok(SyntheticSource::new(kind))
}
