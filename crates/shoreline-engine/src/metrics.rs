//! Per-run computation metrics.
//!
//! [`ComputeMetrics`] captures stage timings and flooring statistics for a
//! single scenario run.

use serde::Serialize;

/// Timing and flooring data collected during one [`Scenario::run`](crate::Scenario::run).
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ComputeMetrics {
    /// Name of the position model that produced the series.
    pub model: String,
    /// Number of samples on the time axis.
    pub samples: usize,
    /// Samples whose raw water depth fell below the floor `ηmin`.
    pub floored_samples: usize,
    /// Wall-clock time for the whole run, in microseconds.
    pub total_us: u64,
    /// Time spent evaluating sea level, in microseconds.
    pub sea_level_us: u64,
    /// Time spent deriving water depth, in microseconds.
    pub water_depth_us: u64,
    /// Time spent evaluating the position model, in microseconds.
    pub position_us: u64,
}

impl ComputeMetrics {
    /// Fraction of samples whose depth was clamped, in `[0, 1]`.
    pub fn floored_fraction(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.floored_samples as f64 / self.samples as f64
        }
    }
}
