//! Simulation and slope parameters with validation.
//!
//! All parameter structs carry the defaults of the interactive comparison
//! tool and derive `serde` so front ends can load and persist them. The
//! numeric core never trusts its caller: [`SimulationParameters::validate`]
//! and [`SlopeGeometry::validate`] are run before any series is computed.

use serde::{Deserialize, Serialize};

use crate::axis::{TimeAxis, DEFAULT_TIME_STEP_COUNT};
use crate::error::{require_finite, require_positive, ConfigError};

/// Default water-depth floor `ηmin`.
///
/// A tunable constant, not a physical law: it only has to keep the
/// divisor in `X = Qs·t/η` strictly positive.
pub const DEFAULT_MIN_WATER_DEPTH: f64 = 0.01;

// ── Sinusoid ───────────────────────────────────────────────────────

/// One sinusoidal sea-level component `A·sin(2π·t/P)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sinusoid {
    /// Amplitude `A`.
    pub amplitude: f64,
    /// Period `P`. Zero or negative disables the term.
    pub period: f64,
}

impl Sinusoid {
    /// Short-period component defaults: `A = 1`, `P = 10`.
    pub const SHORT_DEFAULT: Sinusoid = Sinusoid {
        amplitude: 1.0,
        period: 10.0,
    };

    /// Long-period component defaults: `A = 5`, `P = 100`.
    pub const LONG_DEFAULT: Sinusoid = Sinusoid {
        amplitude: 5.0,
        period: 100.0,
    };

    /// Whether this term contributes to sea level.
    ///
    /// A zero amplitude or a zero/negative period switches the term off.
    /// This is policy, never an error.
    pub fn is_active(&self) -> bool {
        self.amplitude != 0.0 && self.period > 0.0
    }

    /// Value of the term at time `t`.
    pub fn at(&self, t: f64) -> f64 {
        if self.is_active() {
            self.amplitude * (std::f64::consts::TAU * t / self.period).sin()
        } else {
            0.0
        }
    }

    fn validate(&self, amplitude: &'static str, period: &'static str) -> Result<(), ConfigError> {
        require_finite(amplitude, self.amplitude)?;
        require_finite(period, self.period)
    }
}

// ── SeaLevelForcing ────────────────────────────────────────────────

/// Sea-level forcing: baseline, linear trend, and up to two sinusoids.
///
/// `Z(t) = baseline + linear_rate·t + short(t) + long(t)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeaLevelForcing {
    /// Sea level `Z0` at `t = 0`, before sinusoids. Default: 0.
    pub baseline: f64,
    /// Linear rate `Ż`. Default: 0.3.
    pub linear_rate: f64,
    /// Optional short-period component. Default: disabled.
    pub short: Option<Sinusoid>,
    /// Optional long-period component. Default: disabled.
    pub long: Option<Sinusoid>,
}

impl Default for SeaLevelForcing {
    fn default() -> Self {
        Self {
            baseline: 0.0,
            linear_rate: 0.3,
            short: None,
            long: None,
        }
    }
}

impl SeaLevelForcing {
    /// Constant sea level at `baseline`.
    pub fn still(baseline: f64) -> Self {
        Self {
            baseline,
            linear_rate: 0.0,
            short: None,
            long: None,
        }
    }

    /// Check that every coefficient is finite.
    ///
    /// Degenerate sinusoids are accepted; they are simply inactive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("baseline", self.baseline)?;
        require_finite("linear_rate", self.linear_rate)?;
        if let Some(s) = &self.short {
            s.validate("short_amplitude", "short_period")?;
        }
        if let Some(s) = &self.long {
            s.validate("long_amplitude", "long_period")?;
        }
        Ok(())
    }
}

// ── SimulationParameters ───────────────────────────────────────────

/// Inputs shared by the simple and advanced shoreline models.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Sediment supply `Qs`. Must be positive. Default: 250.
    pub sediment_supply: f64,
    /// End of the time axis. Must be positive. Default: 100.
    pub total_time: f64,
    /// Number of samples on the time axis. Must be at least 1. Default: 500.
    pub time_step_count: usize,
    /// Sea-level forcing.
    pub forcing: SeaLevelForcing,
    /// Water depth `η0` at baseline sea level. Must be positive. Default: 10.
    pub initial_water_depth: f64,
    /// Water-depth floor `ηmin`. Must be positive. Default: 0.01.
    pub min_water_depth: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            sediment_supply: 250.0,
            total_time: 100.0,
            time_step_count: DEFAULT_TIME_STEP_COUNT,
            forcing: SeaLevelForcing::default(),
            initial_water_depth: 10.0,
            min_water_depth: DEFAULT_MIN_WATER_DEPTH,
        }
    }
}

impl SimulationParameters {
    /// Validate every domain constraint the numeric core relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("sediment_supply", self.sediment_supply)?;
        require_positive("total_time", self.total_time)?;
        if self.time_step_count == 0 {
            return Err(ConfigError::ZeroStepCount);
        }
        require_positive("initial_water_depth", self.initial_water_depth)?;
        require_positive("min_water_depth", self.min_water_depth)?;
        self.forcing.validate()
    }

    /// Build the evenly spaced time axis `0..=total_time`.
    pub fn time_axis(&self) -> Result<TimeAxis, ConfigError> {
        TimeAxis::linspace(self.total_time, self.time_step_count)
    }
}

// ── SlopeGeometry ──────────────────────────────────────────────────

/// Topset, foreset, and basement slope gradients of the advanced model.
///
/// Valid geometry is strictly positive and ordered
/// `topset < basement < foreset`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlopeGeometry {
    /// Topset slope `St`. Default: 0.01.
    pub topset: f64,
    /// Foreset slope `Sf`. Default: 0.1.
    pub foreset: f64,
    /// Basement slope `Sb`. Default: 0.05.
    pub basement: f64,
}

impl Default for SlopeGeometry {
    fn default() -> Self {
        Self {
            topset: 0.01,
            foreset: 0.1,
            basement: 0.05,
        }
    }
}

impl SlopeGeometry {
    /// Check positivity and the `topset < basement < foreset` ordering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("topset_slope", self.topset)?;
        require_positive("foreset_slope", self.foreset)?;
        require_positive("basement_slope", self.basement)?;
        if !(self.topset < self.basement && self.basement < self.foreset) {
            return Err(ConfigError::SlopeOrdering {
                topset: self.topset,
                basement: self.basement,
                foreset: self.foreset,
            });
        }
        Ok(())
    }
}
