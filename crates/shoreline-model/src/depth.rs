//! Water depth derived from sea level, floored to stay strictly positive.
//!
//! `η(t) = max(η0 − Z(t), ηmin)`. Clamping is the model's only
//! failure-avoidance policy; it is not an error path.

use shoreline_core::{ConfigError, DEFAULT_MIN_WATER_DEPTH};

/// A strictly positive, finite water-depth floor `ηmin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthFloor(f64);

impl DepthFloor {
    /// Create a floor. Rejects zero, negative, and non-finite values.
    pub fn new(min_water_depth: f64) -> Result<Self, ConfigError> {
        if !min_water_depth.is_finite() {
            return Err(ConfigError::NonFinite {
                parameter: "min_water_depth",
                value: min_water_depth,
            });
        }
        if min_water_depth <= 0.0 {
            return Err(ConfigError::NonPositive {
                parameter: "min_water_depth",
                value: min_water_depth,
            });
        }
        Ok(Self(min_water_depth))
    }

    /// The floor value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Floor a raw depth. NaN input also lands on the floor.
    pub fn apply(self, raw_depth: f64) -> f64 {
        raw_depth.max(self.0)
    }
}

impl Default for DepthFloor {
    fn default() -> Self {
        Self(DEFAULT_MIN_WATER_DEPTH)
    }
}

/// Floored water depth plus the number of samples the floor clamped.
#[derive(Clone, Debug, PartialEq)]
pub struct DepthSeries {
    /// `max(η0 − Z, ηmin)` per sample.
    pub values: Vec<f64>,
    /// Samples whose raw depth `η0 − Z` fell below the floor.
    pub floored: usize,
}

/// Water depth for every sea-level sample.
///
/// `initial_water_depth` must be positive and finite.
pub fn water_depth_series(
    initial_water_depth: f64,
    sea_level: &[f64],
    floor: DepthFloor,
) -> Result<DepthSeries, ConfigError> {
    if !initial_water_depth.is_finite() {
        return Err(ConfigError::NonFinite {
            parameter: "initial_water_depth",
            value: initial_water_depth,
        });
    }
    if initial_water_depth <= 0.0 {
        return Err(ConfigError::NonPositive {
            parameter: "initial_water_depth",
            value: initial_water_depth,
        });
    }
    let mut floored = 0;
    let values = sea_level
        .iter()
        .map(|&z| {
            let raw = initial_water_depth - z;
            if raw.is_nan() || raw < floor.value() {
                floored += 1;
            }
            floor.apply(raw)
        })
        .collect();
    Ok(DepthSeries { values, floored })
}
