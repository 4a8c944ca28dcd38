//! Measurement store.
//!
//! Holds the latest [`Reading`] and the ordered list of listeners. Every
//! update replaces the measurement and its derived condition in one step and
//! then notifies listeners synchronously, in registration order.
//!
//! The store is `Send + Sync`. Updates are serialized by an internal lock that
//! is held for the whole replace-and-notify pass, so the published state stays
//! fixed while listeners run. Listeners must not call [`MeasurementStore::update`]
//! from inside `on_measurement`.

use super::{Alert, AlertListener, Measurement, MeasurementListener, Reading, Sensor};
use crate::condition::WeatherCondition;
use crate::error::Result;
use crate::units::TemperatureScale;
use log::debug;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// Result of a single store update.
#[derive(Clone, Debug)]
pub struct UpdateOutcome {
    pub reading: Reading,
    /// Alerts raised by listeners, in registration order.
    pub alerts: Vec<Alert>,
}

/// Latest-value store with synchronous change notification.
#[derive(Default)]
pub struct MeasurementStore {
    current: RwLock<Option<Reading>>,
    listeners: RwLock<Vec<Arc<dyn MeasurementListener>>>,
    update_lock: Mutex<()>,
}

impl MeasurementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current measurement and notify all listeners.
    pub fn update(
        &self,
        temperature_celsius: f64,
        humidity_percent: f64,
        pressure_hpa: f64,
    ) -> UpdateOutcome {
        let _guard = self.update_lock.lock();

        let measurement = Measurement::new(temperature_celsius, humidity_percent, pressure_hpa);
        let reading = {
            let mut current = self.current.write();
            let version = current.as_ref().map_or(0, |r| r.version).saturating_add(1);
            let reading = Reading::new(measurement, version);
            *current = Some(reading);
            reading
        };
        debug!(
            "[Store] v{}: {:.2}°C, {:.2}%, {:.2} hPa -> {}",
            reading.version,
            temperature_celsius,
            humidity_percent,
            pressure_hpa,
            reading.condition
        );

        let alerts = self.notify(&reading);
        UpdateOutcome { reading, alerts }
    }

    /// Register an alert threshold given in `unit`.
    ///
    /// Fails for an unrecognized unit name or a non-finite threshold.
    pub fn register_listener(&self, threshold: f64, unit: &str) -> Result<Arc<AlertListener>> {
        let scale: TemperatureScale = unit.parse()?;
        self.register_alert(threshold, scale)
    }

    /// Register an alert threshold with an already parsed scale.
    pub fn register_alert(
        &self,
        threshold: f64,
        scale: TemperatureScale,
    ) -> Result<Arc<AlertListener>> {
        let mut listeners = self.listeners.write();
        let listener = Arc::new(AlertListener::new(listeners.len(), threshold, scale)?);
        listeners.push(listener.clone());
        debug!(
            "[Store] registered alert {} at {:.2}°C",
            listener.id(),
            listener.threshold_celsius()
        );
        Ok(listener)
    }

    /// Append an arbitrary listener. Returns its position in notification order.
    pub fn add_listener(&self, listener: Arc<dyn MeasurementListener>) -> usize {
        let mut listeners = self.listeners.write();
        listeners.push(listener);
        listeners.len() - 1
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// Re-run every listener against the current reading without storing
    /// anything new. Returns nothing before the first update.
    pub fn check_alerts(&self) -> Vec<Alert> {
        let _guard = self.update_lock.lock();
        let Some(reading) = *self.current.read() else {
            return Vec::new();
        };
        self.notify(&reading)
    }

    pub fn current_reading(&self) -> Option<Reading> {
        *self.current.read()
    }

    pub fn current_measurement(&self) -> Option<Measurement> {
        self.current.read().map(|r| r.measurement)
    }

    pub fn current_condition(&self) -> Option<WeatherCondition> {
        self.current.read().map(|r| r.condition)
    }

    fn notify(&self, reading: &Reading) -> Vec<Alert> {
        // Snapshot the list so a listener may register another one
        let listeners = self.listeners.read().clone();
        listeners
            .iter()
            .filter_map(|listener| listener.on_measurement(reading))
            .collect()
    }
}

impl Sensor for MeasurementStore {
    fn version(&self) -> u64 {
        self.current.read().map_or(0, |r| r.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WeatherError;
    use assert_matches::assert_matches;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records the order it was called in relative to other recorders.
    struct OrderRecorder {
        tag: usize,
        log: Arc<Mutex<Vec<usize>>>,
    }

    impl MeasurementListener for OrderRecorder {
        fn on_measurement(&self, _reading: &Reading) -> Option<Alert> {
            self.log.lock().push(self.tag);
            None
        }
    }

    /// Reads the store back while being notified.
    struct ConsistencyCheck {
        store: Arc<MeasurementStore>,
        checks: AtomicUsize,
    }

    impl MeasurementListener for ConsistencyCheck {
        fn on_measurement(&self, reading: &Reading) -> Option<Alert> {
            assert_eq!(self.store.current_reading(), Some(*reading));
            assert_eq!(
                self.store.current_condition(),
                Some(WeatherCondition::classify(reading.measurement.temperature_celsius))
            );
            self.checks.fetch_add(1, Ordering::SeqCst);
            None
        }
    }

    #[test]
    fn test_empty_store() {
        let store = MeasurementStore::new();
        assert_eq!(store.current_measurement(), None);
        assert_eq!(store.current_condition(), None);
        assert_eq!(store.version(), 0);
        assert!(store.check_alerts().is_empty());
    }

    #[test]
    fn test_update_recomputes_condition() {
        let store = MeasurementStore::new();

        let outcome = store.update(22.0, 60.0, 1015.0);
        assert_eq!(outcome.reading.condition, WeatherCondition::Cloudy);
        assert_eq!(store.current_condition(), Some(WeatherCondition::Cloudy));
        assert_eq!(
            store.current_measurement(),
            Some(Measurement::new(22.0, 60.0, 1015.0))
        );

        store.update(-3.0, 80.0, 1020.0);
        assert_eq!(store.current_condition(), Some(WeatherCondition::Snowy));
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_fahrenheit_threshold_fires_on_cold_update() {
        let store = MeasurementStore::new();
        // 50°F is 10°C; an update at -10°C (14°F) is below it
        let listener = store.register_listener(50.0, "Fahrenheit").unwrap();

        let outcome = store.update(-10.0, 55.0, 1013.0);
        assert_eq!(outcome.alerts.len(), 1);
        assert_eq!(outcome.alerts[0].listener_id, listener.id());
        assert_eq!(listener.fired_count(), 1);

        let outcome = store.update(12.0, 55.0, 1013.0);
        assert!(outcome.alerts.is_empty());
        assert_eq!(listener.fired_count(), 1);
    }

    #[test]
    fn test_alerts_repeat_without_debounce() {
        let store = MeasurementStore::new();
        let listener = store.register_listener(5.0, "Celsius").unwrap();
        for _ in 0..4 {
            assert_eq!(store.update(1.0, 70.0, 1015.0).alerts.len(), 1);
        }
        assert_eq!(listener.fired_count(), 4);
    }

    #[test]
    fn test_listeners_notified_in_registration_order() {
        let store = MeasurementStore::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        for tag in 0..4 {
            store.add_listener(Arc::new(OrderRecorder {
                tag,
                log: log.clone(),
            }));
        }

        store.update(10.0, 60.0, 1015.0);
        store.update(11.0, 60.0, 1015.0);
        assert_eq!(*log.lock(), vec![0, 1, 2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn test_alerts_returned_in_registration_order() {
        let store = MeasurementStore::new();
        let warm = store.register_listener(30.0, "Celsius").unwrap();
        let mild = store.register_listener(20.0, "C").unwrap();
        let freezing = store.register_listener(0.0, "Celsius").unwrap();

        let outcome = store.update(15.0, 60.0, 1015.0);
        let ids: Vec<usize> = outcome.alerts.iter().map(|a| a.listener_id).collect();
        assert_eq!(ids, vec![warm.id(), mild.id()]);
        assert_eq!(freezing.fired_count(), 0);
        assert_eq!(store.listener_count(), 3);
    }

    #[test]
    fn test_listener_sees_consistent_state() {
        let store = Arc::new(MeasurementStore::new());
        let checker = Arc::new(ConsistencyCheck {
            store: store.clone(),
            checks: AtomicUsize::new(0),
        });
        store.add_listener(checker.clone());

        for t in [-10.0, 0.0, 14.9, 15.0, 25.0, 39.0] {
            store.update(t, 50.0, 1013.0);
        }
        assert_eq!(checker.checks.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_check_alerts_reuses_current_reading() {
        let store = MeasurementStore::new();
        store.update(2.0, 60.0, 1015.0);
        let listener = store.register_listener(5.0, "Celsius").unwrap();

        let alerts = store.check_alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(listener.fired_count(), 1);
        // Nothing new was stored
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_register_rejects_unknown_unit() {
        let store = MeasurementStore::new();
        assert_matches!(
            store.register_listener(10.0, "Rankine"),
            Err(WeatherError::UnknownScale(name)) if name == "Rankine"
        );
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_concurrent_updates_keep_pairs_consistent() {
        let store = Arc::new(MeasurementStore::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for j in 0..50 {
                        let t = -10.0 + (i * 50 + j) as f64 * 0.25;
                        store.update(t, 60.0, 1015.0);
                        let reading = store.current_reading().unwrap();
                        assert_eq!(
                            reading.condition,
                            WeatherCondition::classify(reading.measurement.temperature_celsius)
                        );
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.version(), 200);
    }

    #[test]
    fn test_version_saturates_instead_of_wrapping() {
        let store = MeasurementStore::new();
        let last = Reading::new(Measurement::new(20.0, 50.0, 1013.0), u64::MAX);
        *store.current.write() = Some(last);

        let outcome = store.update(21.0, 55.0, 1014.0);
        assert_eq!(outcome.reading.version, u64::MAX);
        assert_eq!(store.version(), u64::MAX);
        assert_ne!(store.version(), 0);
        assert!(store.current_reading().is_some());
    }
}
