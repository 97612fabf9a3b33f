//! Shoreline: box models of shoreline migration under sea-level forcing.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Shoreline sub-crates. For most users, adding `shoreline` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use shoreline::prelude::*;
//!
//! // Two scenarios: the simple box model and the slope-wedge model.
//! let first = ScenarioConfig::new("S1", ModelKind::Simple);
//! let second = ScenarioConfig::new("S2", ModelKind::advanced());
//!
//! let pair = ScenarioPair::new(first, second).unwrap();
//! let run = pair.run().unwrap();
//! assert_eq!(run.first.series.shoreline_position()[0], 0.0);
//!
//! // Figure descriptions for an external plotting library.
//! let figures = assemble_pair(&run, FigureLayout::Combined);
//! assert_eq!(figures.figure_count(), 3);
//! ```
//!
//! A custom position model plugs in through [`ShorelineModel`](prelude::ShorelineModel):
//!
//! ```rust
//! use shoreline::prelude::*;
//!
//! struct Stationary;
//! impl ShorelineModel for Stationary {
//!     fn name(&self) -> &str { "stationary" }
//!     fn position(&self, _qs: f64, _t: f64, _eta: f64) -> f64 { 0.0 }
//! }
//!
//! let scenario =
//!     Scenario::with_model("still", SimulationParameters::default(), Box::new(Stationary))
//!         .unwrap();
//! let run = scenario.run().unwrap();
//! assert!(run.series.shoreline_position().iter().all(|&x| x == 0.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `shoreline-core` | Time axis, parameters, time series, errors |
//! | [`model`] | `shoreline-model` | Sea level, water depth, position models |
//! | [`engine`] | `shoreline-engine` | Scenarios, pairs, domains, figure assembly |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`shoreline-core`).
///
/// Contains the [`types::TimeAxis`], the parameter structs, the computed
/// [`types::TimeSeries`], and [`types::ConfigError`].
pub use shoreline_core as types;

/// Numeric stages (`shoreline-model`).
///
/// The [`model::ShorelineModel`] trait is the main extension point for
/// user-defined position models. Built-in models are
/// [`model::SimpleBoxModel`] and [`model::SlopeWedgeModel`].
pub use shoreline_model as model;

/// Scenario execution (`shoreline-engine`).
///
/// [`engine::Scenario`] runs one configuration, [`engine::ScenarioPair`]
/// runs two for comparison, and [`engine::plot`] assembles figures.
pub use shoreline_engine as engine;

/// Common imports for typical Shoreline usage.
///
/// ```rust
/// use shoreline::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use shoreline_core::{
        SeaLevelForcing, SimulationParameters, Sinusoid, SlopeGeometry, TimeAxis, TimeSeries,
    };

    // Errors
    pub use shoreline_core::ConfigError;
    pub use shoreline_engine::PairError;

    // Models
    pub use shoreline_model::{ShorelineModel, SimpleBoxModel, SlopeWedgeModel};

    // Engine
    pub use shoreline_engine::{
        assemble_pair, assemble_single, run_scenario, ComputeMetrics, FigureLayout, FigureSet,
        ModelKind, Scenario, ScenarioConfig, ScenarioPair, ScenarioRun,
    };
}
