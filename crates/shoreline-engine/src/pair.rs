//! Side-by-side comparison of two independent scenarios.
//!
//! The pairing is a presentation convenience: the two scenarios share no
//! state and are computed independently. Both are validated before either
//! is run, and a pair with any rejected scenario produces no output.

use std::error::Error;
use std::fmt;

use shoreline_core::ConfigError;

use crate::config::ScenarioConfig;
use crate::scenario::{Scenario, ScenarioRun};

/// Position of a scenario within a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScenarioSlot {
    /// Scenario 1.
    First,
    /// Scenario 2.
    Second,
}

impl ScenarioSlot {
    /// One-based index, as shown to users.
    pub fn number(self) -> usize {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

impl fmt::Display for ScenarioSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scenario {}", self.number())
    }
}

// ── PairError ──────────────────────────────────────────────────────

/// One or both scenarios of a pair were rejected.
///
/// Both scenarios are always checked so the user sees every problem at
/// once.
#[derive(Clone, Debug, PartialEq)]
pub struct PairError {
    /// Rejection of scenario 1, if any.
    pub first: Option<ConfigError>,
    /// Rejection of scenario 2, if any.
    pub second: Option<ConfigError>,
}

impl PairError {
    /// The rejection for `slot`, if that scenario failed.
    pub fn get(&self, slot: ScenarioSlot) -> Option<&ConfigError> {
        match slot {
            ScenarioSlot::First => self.first.as_ref(),
            ScenarioSlot::Second => self.second.as_ref(),
        }
    }
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for slot in [ScenarioSlot::First, ScenarioSlot::Second] {
            if let Some(e) = self.get(slot) {
                write!(f, "{sep}{slot}: {e}")?;
                sep = "; ";
            }
        }
        Ok(())
    }
}

impl Error for PairError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.first
            .as_ref()
            .or(self.second.as_ref())
            .map(|e| e as &(dyn Error + 'static))
    }
}

// ── ScenarioPair ───────────────────────────────────────────────────

/// Output of [`ScenarioPair::run()`].
#[derive(Clone, Debug)]
pub struct PairRun {
    /// Scenario 1.
    pub first: ScenarioRun,
    /// Scenario 2.
    pub second: ScenarioRun,
}

impl PairRun {
    /// The run for `slot`.
    pub fn get(&self, slot: ScenarioSlot) -> &ScenarioRun {
        match slot {
            ScenarioSlot::First => &self.first,
            ScenarioSlot::Second => &self.second,
        }
    }
}

/// Two independent scenarios computed for comparison.
#[derive(Debug)]
pub struct ScenarioPair {
    first: Scenario,
    second: Scenario,
}

impl ScenarioPair {
    /// Validate and build both scenarios.
    pub fn new(first: ScenarioConfig, second: ScenarioConfig) -> Result<Self, PairError> {
        match (Scenario::new(first), Scenario::new(second)) {
            (Ok(first), Ok(second)) => Ok(Self { first, second }),
            (first, second) => Err(PairError {
                first: first.err(),
                second: second.err(),
            }),
        }
    }

    /// Pair two already-built scenarios.
    pub fn from_scenarios(first: Scenario, second: Scenario) -> Self {
        Self { first, second }
    }

    /// The scenario in `slot`.
    pub fn get(&self, slot: ScenarioSlot) -> &Scenario {
        match slot {
            ScenarioSlot::First => &self.first,
            ScenarioSlot::Second => &self.second,
        }
    }

    /// Compute both scenarios.
    ///
    /// Either both series are returned or neither is.
    pub fn run(&self) -> Result<PairRun, PairError> {
        let first = self.first.run();
        let second = self.second.run();
        match (first, second) {
            (Ok(first), Ok(second)) => Ok(PairRun { first, second }),
            (first, second) => Err(PairError {
                first: first.err(),
                second: second.err(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelKind;
    use shoreline_core::SlopeGeometry;

    fn bad_slopes() -> ScenarioConfig {
        ScenarioConfig::new(
            "bad",
            ModelKind::Advanced {
                slopes: SlopeGeometry {
                    topset: 0.3,
                    foreset: 0.1,
                    basement: 0.05,
                },
            },
        )
    }

    #[test]
    fn valid_pair_runs_both() {
        let pair = ScenarioPair::new(
            ScenarioConfig::new("S1", ModelKind::Simple),
            ScenarioConfig::new("S2", ModelKind::advanced()),
        )
        .unwrap();
        let run = pair.run().unwrap();
        assert_eq!(run.get(ScenarioSlot::First).name, "S1");
        assert_eq!(run.get(ScenarioSlot::Second).metrics.model, "slope_wedge");
        assert_eq!(pair.get(ScenarioSlot::Second).model_name(), "slope_wedge");
    }

    #[test]
    fn one_bad_scenario_rejects_the_pair() {
        let err = ScenarioPair::new(ScenarioConfig::default(), bad_slopes()).unwrap_err();
        assert!(err.first.is_none());
        assert!(matches!(err.second, Some(ConfigError::SlopeOrdering { .. })));
        assert!(err.to_string().starts_with("scenario 2: "));
    }

    #[test]
    fn both_bad_scenarios_are_reported() {
        let mut first = ScenarioConfig::default();
        first.parameters.total_time = 0.0;
        let err = ScenarioPair::new(first, bad_slopes()).unwrap_err();
        assert!(err.first.is_some());
        assert!(err.second.is_some());
        let msg = err.to_string();
        assert!(msg.contains("scenario 1: total_time must be positive"));
        assert!(msg.contains("; scenario 2: slopes must satisfy"));
        assert!(err.source().is_some());
    }

    #[test]
    fn scenarios_are_independent() {
        let mut wet = ScenarioConfig::new("wet", ModelKind::Simple);
        wet.parameters.initial_water_depth = 50.0;
        let alone = crate::run_scenario(wet.clone()).unwrap();
        let pair = ScenarioPair::new(ScenarioConfig::default(), wet).unwrap();
        let run = pair.run().unwrap();
        assert_eq!(run.second.series, alone.series);
    }
}
