//! Benchmark profiles for the Shoreline box models.
//!
//! Provides pre-built [`ScenarioConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: default parameters, 500 samples, simple box model
//! - [`stress_profile`]: 1M samples with both sinusoids active
//! - [`advanced_profile`]: same axis as the stress profile, slope-wedge model
//! - [`full_forcing`]: linear trend with both sinusoids active

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use shoreline_core::{SeaLevelForcing, SimulationParameters, Sinusoid, SlopeGeometry};
use shoreline_engine::{ModelKind, ScenarioConfig};

/// Sample count used by the stress profiles.
pub const STRESS_SAMPLES: usize = 1_000_000;

/// Default parameters on the default 500-sample axis.
pub fn reference_profile() -> ScenarioConfig {
    ScenarioConfig::new("reference", ModelKind::Simple)
}

/// 500 time units sampled one million times.
///
/// Both sinusoids are switched on at their default amplitude and period
/// so every sample evaluates the full sea-level expression.
pub fn stress_profile() -> ScenarioConfig {
    ScenarioConfig {
        name: "stress".into(),
        parameters: stress_parameters(),
        model: ModelKind::Simple,
    }
}

/// [`stress_profile`] with the slope-wedge model and default slopes.
pub fn advanced_profile() -> ScenarioConfig {
    ScenarioConfig {
        name: "advanced".into(),
        parameters: stress_parameters(),
        model: ModelKind::Advanced {
            slopes: SlopeGeometry::default(),
        },
    }
}

/// Default trend plus both sinusoids at their default settings.
pub fn full_forcing() -> SeaLevelForcing {
    SeaLevelForcing {
        short: Some(Sinusoid::SHORT_DEFAULT),
        long: Some(Sinusoid::LONG_DEFAULT),
        ..SeaLevelForcing::default()
    }
}

fn stress_parameters() -> SimulationParameters {
    SimulationParameters {
        total_time: 500.0,
        time_step_count: STRESS_SAMPLES,
        forcing: full_forcing(),
        ..SimulationParameters::default()
    }
}
