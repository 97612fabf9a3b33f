//! Core types for the Shoreline box-model workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental data used throughout the workspace: the discretized
//! time axis, simulation and slope parameters, the computed time series,
//! and the configuration error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod params;
pub mod series;

pub use axis::{TimeAxis, DEFAULT_TIME_STEP_COUNT};
pub use error::ConfigError;
pub use params::{
    SeaLevelForcing, SimulationParameters, SlopeGeometry, Sinusoid, DEFAULT_MIN_WATER_DEPTH,
};
pub use series::{Sample, TimeSeries};
