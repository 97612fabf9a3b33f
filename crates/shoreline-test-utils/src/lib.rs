//! Test utilities and fixtures for Shoreline development.
//!
//! Provides canonical parameter sets with known closed-form results,
//! mock [`ShorelineModel`](shoreline_model::ShorelineModel)
//! implementations, and float comparison helpers.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    assert_close, oscillating_parameters, reference_parameters, ConstModel, CountingModel,
    RejectingModel,
};
