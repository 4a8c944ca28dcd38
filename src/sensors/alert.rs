//! Temperature alert listener.
//!
//! An [`AlertListener`] holds a threshold and raises an [`Alert`] every time the
//! store publishes a temperature below it. There is no hysteresis: a sustained
//! cold spell produces one alert per update.

use super::{MeasurementListener, Reading};
use crate::error::{Result, WeatherError};
use crate::presenter::format_fixed;
use crate::units::TemperatureScale;
use log::warn;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// A fired temperature alert.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Alert {
    /// Id of the listener that fired.
    pub listener_id: usize,
    pub temperature_celsius: f64,
    pub threshold_celsius: f64,
    /// Threshold as the user entered it.
    pub threshold: f64,
    pub threshold_scale: TemperatureScale,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temperature below {}{}. Warning! (current: {}°C)",
            self.threshold,
            self.threshold_scale.suffix(),
            format_fixed(self.temperature_celsius)
        )
    }
}

/// Listener that warns when the temperature drops below a threshold.
///
/// The threshold is converted to Celsius once, at construction. Changing the
/// display scale later does not move it.
#[derive(Debug)]
pub struct AlertListener {
    id: usize,
    threshold_celsius: f64,
    threshold: f64,
    threshold_scale: TemperatureScale,
    fired: AtomicU32,
}

impl AlertListener {
    /// Create a listener for `threshold` expressed in `scale`.
    ///
    /// Non-finite thresholds are rejected.
    pub fn new(id: usize, threshold: f64, scale: TemperatureScale) -> Result<Self> {
        if !threshold.is_finite() {
            return Err(WeatherError::InvalidThreshold(threshold.to_string()));
        }
        Ok(Self {
            id,
            threshold_celsius: scale.to_celsius(threshold),
            threshold,
            threshold_scale: scale,
            fired: AtomicU32::new(0),
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn threshold_celsius(&self) -> f64 {
        self.threshold_celsius
    }

    /// The threshold in the unit it was registered with.
    pub fn entered_threshold(&self) -> (f64, TemperatureScale) {
        (self.threshold, self.threshold_scale)
    }

    /// Number of alerts this listener has raised.
    pub fn fired_count(&self) -> u32 {
        self.fired.load(Ordering::SeqCst)
    }

    /// Check a temperature without recording anything.
    pub fn evaluate(&self, temperature_celsius: f64) -> Option<Alert> {
        (temperature_celsius < self.threshold_celsius).then_some(Alert {
            listener_id: self.id,
            temperature_celsius,
            threshold_celsius: self.threshold_celsius,
            threshold: self.threshold,
            threshold_scale: self.threshold_scale,
        })
    }
}

impl MeasurementListener for AlertListener {
    fn on_measurement(&self, reading: &Reading) -> Option<Alert> {
        let alert = self.evaluate(reading.measurement.temperature_celsius)?;
        self.fired.fetch_add(1, Ordering::SeqCst);
        warn!("[Alert] listener {}: {}", self.id, alert);
        Some(alert)
    }
}

/// Parse a threshold typed by the user.
pub fn parse_threshold(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(WeatherError::InvalidThreshold(trimmed.to_string())),
    }
}
