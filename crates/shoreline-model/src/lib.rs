//! Numeric core of the Shoreline box models.
//!
//! Each stage is a pure function of its inputs, evaluated over a whole
//! time axis in one pass:
//!
//! 1. [`sea_level_series`]: linear trend plus optional sinusoids.
//! 2. [`water_depth_series`]: `η = max(η0 − Z, ηmin)`.
//! 3. [`shoreline_position_series`]: any [`ShorelineModel`], such as
//!    [`SimpleBoxModel`] (`X = Qs·t/η`) or [`SlopeWedgeModel`]
//!    (topset/foreset/basement geometry).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod advanced;
pub mod depth;
pub mod model;
pub mod sea_level;
pub mod simple;

pub use advanced::SlopeWedgeModel;
pub use depth::{water_depth_series, DepthFloor, DepthSeries};
pub use model::{shoreline_position_series, ShorelineModel};
pub use sea_level::{sea_level_series, SeaLevelModel};
pub use simple::SimpleBoxModel;
