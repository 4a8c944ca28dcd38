//! Simulated weather input.

mod source;

pub use source::{
    HUMIDITY_RANGE_PERCENT, PRESSURE_RANGE_HPA, SourceKind, SyntheticSource,
    TEMPERATURE_RANGE_CELSIUS, select_source,
};
