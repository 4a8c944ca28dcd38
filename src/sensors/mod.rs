//! Measurement state and change notification.
//!
//! The [`MeasurementStore`] holds the latest reading. Listeners registered on
//! it are invoked synchronously on every update. [`AlertListener`] is the
//! built-in listener that warns on low temperatures.

pub mod alert;
pub mod measurement;
pub mod store;

pub use alert::{Alert, AlertListener, parse_threshold};
pub use measurement::{Measurement, Reading};
pub use store::{MeasurementStore, UpdateOutcome};

/// Trait for state with change detection.
///
/// The version is incremented on every update, whether or not the values
/// changed. Consumers compare versions to detect new data.
pub trait Sensor: Send + Sync {
    /// Get the current version number. Zero means no update yet; the count
    /// saturates instead of wrapping back to zero.
    fn version(&self) -> u64;
}

/// Receives every reading published by a [`MeasurementStore`].
///
/// Called synchronously, in registration order, with the store's state fixed
/// for the duration of the notification pass.
pub trait MeasurementListener: Send + Sync {
    /// React to a new reading, optionally raising an alert.
    fn on_measurement(&self, reading: &Reading) -> Option<Alert>;
}
