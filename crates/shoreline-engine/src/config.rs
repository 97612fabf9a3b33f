//! Scenario configuration and validation.
//!
//! [`ScenarioConfig`] is the view-model a front end edits: one parameter
//! set plus the model to run it through. [`validate()`](ScenarioConfig::validate)
//! checks every invariant the numeric core relies on, and
//! [`build_model()`](ScenarioConfig::build_model) turns the model kind into
//! a boxed [`ShorelineModel`].

use serde::{Deserialize, Serialize};
use shoreline_core::{ConfigError, SimulationParameters, SlopeGeometry};
use shoreline_model::{ShorelineModel, SimpleBoxModel, SlopeWedgeModel};

// ── ModelKind ──────────────────────────────────────────────────────

/// Which shoreline position model a scenario uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelKind {
    /// `X(t) = Qs·t/η(t)`.
    #[default]
    Simple,
    /// Slope-wedge geometry with topset, foreset, and basement slopes.
    Advanced {
        /// Slope gradients. Must satisfy `topset < basement < foreset`.
        slopes: SlopeGeometry,
    },
}

impl ModelKind {
    /// Advanced model with default slopes.
    pub fn advanced() -> Self {
        Self::Advanced {
            slopes: SlopeGeometry::default(),
        }
    }
}

// ── ScenarioConfig ─────────────────────────────────────────────────

/// Complete description of one scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Display name, used for plot legends and log fields.
    pub name: String,
    /// Supply, time axis, forcing, and depth parameters.
    pub parameters: SimulationParameters,
    /// Position model.
    pub model: ModelKind,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: "Scenario".to_string(),
            parameters: SimulationParameters::default(),
            model: ModelKind::Simple,
        }
    }
}

impl ScenarioConfig {
    /// Default parameters under the given name and model.
    pub fn new(name: impl Into<String>, model: ModelKind) -> Self {
        Self {
            name: name.into(),
            model,
            ..Self::default()
        }
    }

    /// Validate parameters and, for the advanced model, slope geometry.
    ///
    /// Pure validation pass: builds nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parameters.validate()?;
        if let ModelKind::Advanced { slopes } = &self.model {
            slopes.validate()?;
        }
        Ok(())
    }

    /// Build the position model named by [`model`](Self::model).
    pub fn build_model(&self) -> Result<Box<dyn ShorelineModel>, ConfigError> {
        Ok(match self.model {
            ModelKind::Simple => Box::new(SimpleBoxModel),
            ModelKind::Advanced { slopes } => Box::new(SlopeWedgeModel::new(slopes)?),
        })
    }
}
