//! Slope-wedge model with topset, foreset, and basement slopes.
//!
//! With `α = St/(Sb − St)` and `β = Sf/(Sf − Sb)`:
//!
//! ```text
//! s(t) = −η(t)/Sb + sqrt( 2·Qs·t / (Sb·(α + β)) )    t > 0
//! s(0) = 0
//! ```
//!
//! The foreset and basement slopes bound the deposited wedge; the topset
//! slope governs how far the subaerial surface extends behind the
//! shoreline.

use shoreline_core::{ConfigError, SlopeGeometry};

use crate::model::ShorelineModel;

/// Shoreline position from a validated slope geometry.
#[derive(Clone, Copy, Debug)]
pub struct SlopeWedgeModel {
    geometry: SlopeGeometry,
    alpha: f64,
    beta: f64,
}

impl SlopeWedgeModel {
    /// Validate `geometry` (positive, `topset < basement < foreset`) and
    /// precompute the wedge coefficients.
    pub fn new(geometry: SlopeGeometry) -> Result<Self, ConfigError> {
        geometry.validate()?;
        let SlopeGeometry {
            topset,
            foreset,
            basement,
        } = geometry;
        Ok(Self {
            geometry,
            alpha: topset / (basement - topset),
            beta: foreset / (foreset - basement),
        })
    }

    /// The slope geometry this model was built from.
    pub fn geometry(&self) -> SlopeGeometry {
        self.geometry
    }

    /// Topset coefficient `α = St/(Sb − St)`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Foreset coefficient `β = Sf/(Sf − Sb)`.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl ShorelineModel for SlopeWedgeModel {
    fn name(&self) -> &str {
        "slope_wedge"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()
    }

    fn position(&self, sediment_supply: f64, time: f64, water_depth: f64) -> f64 {
        if time <= 0.0 {
            return 0.0;
        }
        let basement = self.geometry.basement;
        let wedge = 2.0 * sediment_supply * time / (basement * (self.alpha + self.beta));
        -water_depth / basement + wedge.max(0.0).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_model() -> SlopeWedgeModel {
        SlopeWedgeModel::new(SlopeGeometry::default()).unwrap()
    }

    #[test]
    fn coefficients_for_default_geometry() {
        let m = default_model();
        assert!((m.alpha() - 0.25).abs() < 1e-12);
        assert!((m.beta() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn closed_form_at_hundred() {
        // α + β = 2.25, Sb·(α + β) = 0.1125
        // sqrt(2·250·100 / 0.1125) = 666.67, −10/0.05 = −200
        let s = default_model().position(250.0, 100.0, 10.0);
        let expected = -200.0 + (50_000.0f64 / 0.1125).sqrt();
        assert!((s - expected).abs() < 1e-9, "s = {s}");
    }

    #[test]
    fn origin_is_zero() {
        assert_eq!(default_model().position(250.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn misordered_slopes_rejected_at_construction() {
        let err = SlopeWedgeModel::new(SlopeGeometry {
            topset: 0.1,
            foreset: 0.5,
            basement: 0.05,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::SlopeOrdering { .. }));
    }

    #[test]
    fn zero_supply_leaves_depth_term_only() {
        let s = default_model().position(0.0, 10.0, 2.0);
        assert!((s - (-40.0)).abs() < 1e-12);
    }
}
