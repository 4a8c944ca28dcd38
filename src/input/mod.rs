//! Input sources feeding the measurement store.
//!
//! Current input sources:
//! - `simulation`: synthetic "remote" and "local" weather generators

pub mod simulation;

pub use simulation::{SourceKind, SyntheticSource, select_source};
