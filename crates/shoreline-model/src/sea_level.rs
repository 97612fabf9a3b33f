//! Sea-level forcing evaluated over a time axis.

use shoreline_core::{ConfigError, SeaLevelForcing, Sinusoid};
use smallvec::SmallVec;

/// A validated [`SeaLevelForcing`] with inactive sinusoids dropped.
///
/// `Z(t) = baseline + rate·t + Σ Aᵢ·sin(2π·t/Pᵢ)` over the active terms.
#[derive(Clone, Debug)]
pub struct SeaLevelModel {
    baseline: f64,
    linear_rate: f64,
    terms: SmallVec<[Sinusoid; 2]>,
}

impl SeaLevelModel {
    /// Validate `forcing` and keep only the sinusoids that contribute.
    pub fn new(forcing: &SeaLevelForcing) -> Result<Self, ConfigError> {
        forcing.validate()?;
        let terms = [forcing.short, forcing.long]
            .into_iter()
            .flatten()
            .filter(Sinusoid::is_active)
            .collect();
        Ok(Self {
            baseline: forcing.baseline,
            linear_rate: forcing.linear_rate,
            terms,
        })
    }

    /// Number of sinusoidal terms that contribute.
    pub fn active_terms(&self) -> usize {
        self.terms.len()
    }

    /// Sea level at time `t`.
    pub fn at(&self, t: f64) -> f64 {
        let periodic: f64 = self.terms.iter().map(|s| s.at(t)).sum();
        self.baseline + self.linear_rate * t + periodic
    }

    /// Sea level at every time in `times`.
    pub fn series(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.at(t)).collect()
    }
}

/// Sea level at every time in `times` for the given forcing.
///
/// Degenerate sinusoids are skipped, never reported.
pub fn sea_level_series(times: &[f64], forcing: &SeaLevelForcing) -> Result<Vec<f64>, ConfigError> {
    Ok(SeaLevelModel::new(forcing)?.series(times))
}
