//! Scenario execution for the Shoreline box models.
//!
//! A [`ScenarioConfig`] names a parameter set and a model kind. Building a
//! [`Scenario`] validates it; [`Scenario::run`] recomputes the whole
//! [`TimeSeries`](shoreline_core::TimeSeries) in one synchronous pass and
//! returns it with [`ComputeMetrics`]. Two scenarios are compared through a
//! [`ScenarioPair`], and [`plot`] turns runs into figure descriptions for
//! an external plotting collaborator.
//!
//! Nothing here holds state between runs: every parameter change is a
//! fresh computation.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod domain;
pub mod metrics;
pub mod pair;
pub mod plot;
pub mod scenario;

pub use config::{ModelKind, ScenarioConfig};
pub use domain::{check_domains, parameter_domains, ParameterDomain};
pub use metrics::ComputeMetrics;
pub use pair::{PairError, PairRun, ScenarioPair, ScenarioSlot};
pub use plot::{
    assemble_pair, assemble_single, trace_color, Figure, FigureLayout, FigureSet, PlotKind,
    UnifiedRanges,
};
pub use scenario::{run_scenario, Scenario, ScenarioRun};
