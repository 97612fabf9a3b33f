//! Interactive parameter domains.
//!
//! Each tunable parameter has a slider range, step, and default in the
//! interactive tool. Front ends use [`parameter_domains`] to lay out their
//! controls; [`check_domains`] lets a caller reject values the sliders
//! could never produce. The numeric core does not depend on these ranges;
//! it only needs the positivity and ordering checks of
//! [`ScenarioConfig::validate`].

use indexmap::IndexMap;
use serde::Serialize;
use shoreline_core::ConfigError;

use crate::config::{ModelKind, ScenarioConfig};

/// Inclusive range, step, and default of one control.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ParameterDomain {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Slider increment.
    pub step: f64,
    /// Initial value.
    pub default: f64,
}

impl ParameterDomain {
    /// Construct a domain.
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Whether `value` lies in `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// `Err(OutOfDomain)` unless `value` lies in `[min, max]`.
    pub fn check(&self, parameter: &'static str, value: f64) -> Result<(), ConfigError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfDomain {
                parameter,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Sediment supply `Qs`.
pub const SEDIMENT_SUPPLY: ParameterDomain = ParameterDomain::new(10.0, 500.0, 10.0, 250.0);
/// Simulation time.
pub const TOTAL_TIME: ParameterDomain = ParameterDomain::new(10.0, 500.0, 10.0, 100.0);
/// Initial water depth `η0`.
pub const INITIAL_WATER_DEPTH: ParameterDomain = ParameterDomain::new(1.0, 100.0, 0.5, 10.0);
/// Linear sea-level rate `Ż`.
pub const LINEAR_RATE: ParameterDomain = ParameterDomain::new(-1.0, 10.0, 0.1, 0.3);
/// Short-term sinusoid amplitude.
pub const SHORT_AMPLITUDE: ParameterDomain = ParameterDomain::new(0.0, 10.0, 0.1, 1.0);
/// Short-term sinusoid period.
pub const SHORT_PERIOD: ParameterDomain = ParameterDomain::new(1.0, 100.0, 1.0, 10.0);
/// Long-term sinusoid amplitude.
pub const LONG_AMPLITUDE: ParameterDomain = ParameterDomain::new(0.0, 50.0, 0.5, 5.0);
/// Long-term sinusoid period.
pub const LONG_PERIOD: ParameterDomain = ParameterDomain::new(50.0, 500.0, 10.0, 100.0);
/// Topset slope `St`.
pub const TOPSET_SLOPE: ParameterDomain = ParameterDomain::new(0.001, 0.1, 0.001, 0.01);
/// Foreset slope `Sf`.
pub const FORESET_SLOPE: ParameterDomain = ParameterDomain::new(0.01, 1.0, 0.01, 0.1);
/// Basement slope `Sb`.
pub const BASEMENT_SLOPE: ParameterDomain = ParameterDomain::new(0.001, 0.1, 0.001, 0.05);

/// Every control domain, keyed by parameter name, in display order.
///
/// Slope domains are included only for the advanced model.
pub fn parameter_domains(model: &ModelKind) -> IndexMap<&'static str, ParameterDomain> {
    let mut domains = IndexMap::new();
    domains.insert("sediment_supply", SEDIMENT_SUPPLY);
    domains.insert("total_time", TOTAL_TIME);
    if matches!(model, ModelKind::Advanced { .. }) {
        domains.insert("topset_slope", TOPSET_SLOPE);
        domains.insert("foreset_slope", FORESET_SLOPE);
        domains.insert("basement_slope", BASEMENT_SLOPE);
    }
    domains.insert("initial_water_depth", INITIAL_WATER_DEPTH);
    domains.insert("linear_rate", LINEAR_RATE);
    domains.insert("short_amplitude", SHORT_AMPLITUDE);
    domains.insert("short_period", SHORT_PERIOD);
    domains.insert("long_amplitude", LONG_AMPLITUDE);
    domains.insert("long_period", LONG_PERIOD);
    domains
}

/// Reject any configured value outside its control domain.
///
/// Disabled sinusoids are not checked. Parameters without a control
/// (`baseline`, `time_step_count`, `min_water_depth`) are not checked.
pub fn check_domains(config: &ScenarioConfig) -> Result<(), ConfigError> {
    let p = &config.parameters;
    SEDIMENT_SUPPLY.check("sediment_supply", p.sediment_supply)?;
    TOTAL_TIME.check("total_time", p.total_time)?;
    INITIAL_WATER_DEPTH.check("initial_water_depth", p.initial_water_depth)?;
    LINEAR_RATE.check("linear_rate", p.forcing.linear_rate)?;
    if let Some(s) = &p.forcing.short {
        SHORT_AMPLITUDE.check("short_amplitude", s.amplitude)?;
        SHORT_PERIOD.check("short_period", s.period)?;
    }
    if let Some(s) = &p.forcing.long {
        LONG_AMPLITUDE.check("long_amplitude", s.amplitude)?;
        LONG_PERIOD.check("long_period", s.period)?;
    }
    if let ModelKind::Advanced { slopes } = &config.model {
        TOPSET_SLOPE.check("topset_slope", slopes.topset)?;
        FORESET_SLOPE.check("foreset_slope", slopes.foreset)?;
        BASEMENT_SLOPE.check("basement_slope", slopes.basement)?;
    }
    Ok(())
}
