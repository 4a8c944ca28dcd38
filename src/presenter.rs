//! Text and JSON rendering of the current measurement.
//!
//! Rendering never fails. An unrecognized scale name falls back to Celsius
//! and the output starts with a notice saying so.

use crate::condition::WeatherCondition;
use crate::error::Result;
use crate::sensors::{Alert, MeasurementStore, Reading};
use crate::units::TemperatureScale;
use chrono::{DateTime, Utc};
use log::warn;
use serde::Serialize;

/// Shown when nothing has been collected yet.
pub const NO_DATA: &str = "No weather data collected yet.";

/// Resolve a display scale name, falling back to Celsius.
///
/// Returns the scale to use and, on fallback, the notice to show the user.
pub fn resolve_scale(name: &str) -> (TemperatureScale, Option<String>) {
    match name.parse::<TemperatureScale>() {
        Ok(scale) => (scale, None),
        Err(e) => {
            warn!("[Presenter] {}; using Celsius", e);
            (
                TemperatureScale::Celsius,
                Some(format!(
                    "Unknown temperature scale '{}', falling back to Celsius.",
                    name
                )),
            )
        }
    }
}

/// Format `value` with two decimals. Values that round to zero print as
/// `0.00`, never `-0.00`.
pub fn format_fixed(value: f64) -> String {
    let text = format!("{:.2}", value);
    match text.as_str() {
        "-0.00" => "0.00".to_string(),
        _ => text,
    }
}

/// Format a Celsius temperature in `scale`, e.g. `273.15K` or `21.50°C`.
pub fn format_temperature(celsius: f64, scale: TemperatureScale) -> String {
    format!("{}{}", format_fixed(scale.celsius_to(celsius)), scale.suffix())
}

/// Render the latest measurement in the named scale.
pub fn render(store: &MeasurementStore, scale: &str) -> String {
    let (scale, notice) = resolve_scale(scale);

    let mut lines = Vec::with_capacity(5);
    if let Some(notice) = notice {
        lines.push(notice);
    }

    match store.current_measurement() {
        Some(m) => {
            lines.push("Latest weather data:".to_string());
            lines.push(format!(
                "Temperature: {}",
                format_temperature(m.temperature_celsius, scale)
            ));
            lines.push(format!("Humidity: {}%", format_fixed(m.humidity_percent)));
            lines.push(format!("Pressure: {} hPa", format_fixed(m.pressure_hpa)));
        }
        None => lines.push(NO_DATA.to_string()),
    }

    lines.join("\n")
}

/// Render the current weather condition.
pub fn render_condition(store: &MeasurementStore) -> String {
    match store.current_condition() {
        Some(condition) => format!("Weather: {}", condition.label()),
        None => NO_DATA.to_string(),
    }
}

/// Serializable snapshot of one reading, used for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    pub scale: TemperatureScale,
    pub temperature: f64,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub pressure_hpa: f64,
    pub condition: WeatherCondition,
    pub recorded_at: DateTime<Utc>,
    pub version: u64,
    pub alerts: Vec<String>,
}

impl Report {
    pub fn new(
        source: impl Into<String>,
        reading: &Reading,
        scale: TemperatureScale,
        alerts: &[Alert],
    ) -> Self {
        let m = reading.measurement;
        Self {
            source: source.into(),
            scale,
            temperature: scale.celsius_to(m.temperature_celsius),
            temperature_celsius: m.temperature_celsius,
            humidity_percent: m.humidity_percent,
            pressure_hpa: m.pressure_hpa,
            condition: reading.condition,
            recorded_at: reading.recorded_at,
            version: reading.version,
            alerts: alerts.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
