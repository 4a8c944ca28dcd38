//! Interactive session state.
//!
//! A session owns the measurement store, the active source and the display
//! scale setting. The display scale is stored exactly as entered; bad names
//! only surface when rendering.

use crate::config::Config;
use crate::error::Result;
use crate::input::{SourceKind, SyntheticSource};
use crate::presenter;
use crate::sensors::{Alert, AlertListener, MeasurementStore, UpdateOutcome, parse_threshold};
use crate::units::TemperatureScale;
use log::info;
use std::sync::Arc;

pub struct Session {
    store: MeasurementStore,
    source: SyntheticSource,
    display_scale: String,
    seed: Option<u64>,
    /// Number of sources created so far, mixed into the seed so switching
    /// sources does not replay the same sequence.
    sources_created: u64,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            store: MeasurementStore::new(),
            source: seeded_source(config.source.kind, config.source.seed, 0),
            display_scale: config.display.scale.clone(),
            seed: config.source.seed,
            sources_created: 1,
        }
    }

    pub fn store(&self) -> &MeasurementStore {
        &self.store
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }

    /// Switch to the named source. On error the current source is kept.
    pub fn select_source(&mut self, name: &str) -> Result<SourceKind> {
        let kind: SourceKind = name.parse()?;
        self.source = self.make_source(kind);
        info!("[Session] source set to {}", kind);
        Ok(kind)
    }

    /// Collect one reading from the active source.
    pub fn collect(&mut self) -> UpdateOutcome {
        self.source.collect(&self.store)
    }

    /// Register an alert from raw user input. An empty unit means Celsius.
    pub fn add_alert(&self, threshold: &str, unit: &str) -> Result<Arc<AlertListener>> {
        let threshold = parse_threshold(threshold)?;
        let scale = match unit.trim() {
            "" => TemperatureScale::Celsius,
            name => name.parse()?,
        };
        self.store.register_alert(threshold, scale)
    }

    pub fn check_alerts(&self) -> Vec<Alert> {
        self.store.check_alerts()
    }

    /// Accepts any name; see [`presenter::render`] for the fallback.
    pub fn set_display_scale(&mut self, name: &str) {
        self.display_scale = name.trim().to_string();
    }

    pub fn display_scale(&self) -> &str {
        &self.display_scale
    }

    pub fn render(&self) -> String {
        presenter::render(&self.store, &self.display_scale)
    }

    pub fn render_condition(&self) -> String {
        presenter::render_condition(&self.store)
    }

    fn make_source(&mut self, kind: SourceKind) -> SyntheticSource {
        let source = seeded_source(kind, self.seed, self.sources_created);
        self.sources_created += 1;
        source
    }
}

fn seeded_source(kind: SourceKind, seed: Option<u64>, offset: u64) -> SyntheticSource {
    let source = SyntheticSource::new(kind);
    match seed {
        Some(seed) => source.with_seed(seed.wrapping_add(offset)),
        None => source,
    }
}
