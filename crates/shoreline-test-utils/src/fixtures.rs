//! Reusable parameter sets and model fixtures.
//!
//! - [`reference_parameters`]: linear rise that drives depth onto the floor.
//! - [`oscillating_parameters`]: a single short-period sinusoid, no trend.
//! - [`ConstModel`]: returns a constant position.
//! - [`RejectingModel`]: always fails validation.
//! - [`CountingModel`]: counts `position()` calls through a shared handle.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use shoreline_core::{ConfigError, SeaLevelForcing, SimulationParameters, Sinusoid};
use shoreline_model::ShorelineModel;

/// Qs = 250, T = 100, 101 steps (t = 0..=100), rate 0.3, η0 = 10, ηmin = 0.01.
///
/// Known values: `Z(100) = 30`, `η(100) = 0.01` (floored),
/// `X(100) = 250·100/0.01 = 2 500 000`.
pub fn reference_parameters() -> SimulationParameters {
    SimulationParameters {
        sediment_supply: 250.0,
        total_time: 100.0,
        time_step_count: 101,
        forcing: SeaLevelForcing {
            baseline: 0.0,
            linear_rate: 0.3,
            short: None,
            long: None,
        },
        initial_water_depth: 10.0,
        min_water_depth: 0.01,
    }
}

/// Short sinusoid `A = 1`, `P = 10`, no trend, long term disabled.
///
/// 101 steps over `0..=100`, so every integer time is sampled.
pub fn oscillating_parameters() -> SimulationParameters {
    SimulationParameters {
        forcing: SeaLevelForcing {
            baseline: 0.0,
            linear_rate: 0.0,
            short: Some(Sinusoid {
                amplitude: 1.0,
                period: 10.0,
            }),
            long: None,
        },
        ..reference_parameters()
    }
}

/// Assert `actual` is within relative tolerance `rel` of `expected`.
///
/// Falls back to an absolute comparison when `expected` is zero.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, rel: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= rel * scale,
        "expected {expected}, got {actual} (rel tol {rel})"
    );
}

/// Returns the same position for every sample.
pub struct ConstModel {
    pub name: String,
    pub value: f64,
}

impl ConstModel {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl ShorelineModel for ConstModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self, _: f64, _: f64, _: f64) -> f64 {
        self.value
    }
}

/// Fails validation with a fixed slope-ordering error.
///
/// `position()` panics: a caller that evaluates a rejected model is a bug.
pub struct RejectingModel;

impl ShorelineModel for RejectingModel {
    fn name(&self) -> &str {
        "rejecting"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        Err(ConfigError::SlopeOrdering {
            topset: 0.2,
            basement: 0.1,
            foreset: 0.05,
        })
    }

    fn position(&self, _: f64, _: f64, _: f64) -> f64 {
        panic!("position() called on a model that failed validation")
    }
}

/// Simple-box positions with a call counter readable after the model
/// has been boxed and moved.
pub struct CountingModel {
    calls: Arc<AtomicUsize>,
}

impl CountingModel {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the call counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Default for CountingModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ShorelineModel for CountingModel {
    fn name(&self) -> &str {
        "counting"
    }

    fn position(&self, sediment_supply: f64, time: f64, water_depth: f64) -> f64 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if time <= 0.0 {
            0.0
        } else {
            sediment_supply * time / water_depth
        }
    }
}
