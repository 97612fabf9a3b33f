//! Single-scenario execution.
//!
//! [`Scenario`] holds a validated configuration, its time axis, and a
//! boxed position model. [`run()`](Scenario::run) evaluates
//! sea level → water depth → position over the whole axis and returns the
//! resulting [`TimeSeries`] together with [`ComputeMetrics`].
//!
//! Runs take `&self` and touch no shared state, so repeated runs with the
//! same scenario are bit-identical.

use std::time::Instant;

use shoreline_core::{ConfigError, SimulationParameters, TimeAxis, TimeSeries};
use shoreline_model::{
    shoreline_position_series, water_depth_series, DepthFloor, SeaLevelModel, ShorelineModel,
};

use crate::config::ScenarioConfig;
use crate::metrics::ComputeMetrics;

// Compile-time proof that scenarios can move to another thread.
const _: fn() = || {
    fn assert<T: Send>() {}
    assert::<Scenario>();
    assert::<ScenarioRun>();
};

// ── ScenarioRun ────────────────────────────────────────────────────

/// Output of one [`Scenario::run()`].
#[derive(Clone, Debug)]
pub struct ScenarioRun {
    /// Scenario display name.
    pub name: String,
    /// End of the time axis.
    pub total_time: f64,
    /// The computed series.
    pub series: TimeSeries,
    /// Timing and flooring data for this run.
    pub metrics: ComputeMetrics,
}

// ── Scenario ───────────────────────────────────────────────────────

/// A validated, ready-to-run scenario.
///
/// # Example
///
/// ```
/// use shoreline_engine::{ModelKind, Scenario, ScenarioConfig};
///
/// let scenario = Scenario::new(ScenarioConfig::new("S1", ModelKind::Simple)).unwrap();
/// let run = scenario.run().unwrap();
/// assert_eq!(run.series.len(), 500);
/// assert_eq!(run.series.shoreline_position()[0], 0.0);
/// ```
pub struct Scenario {
    name: String,
    parameters: SimulationParameters,
    axis: TimeAxis,
    sea_level: SeaLevelModel,
    floor: DepthFloor,
    model: Box<dyn ShorelineModel>,
}

impl Scenario {
    /// Validate `config` and build its model and time axis.
    pub fn new(config: ScenarioConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let model = config.build_model()?;
        Self::with_model(config.name, config.parameters, model)
    }

    /// Build a scenario around a caller-supplied position model.
    ///
    /// The model's own [`validate()`](ShorelineModel::validate) runs here,
    /// so a rejected model never reaches [`run()`](Self::run).
    pub fn with_model(
        name: impl Into<String>,
        parameters: SimulationParameters,
        model: Box<dyn ShorelineModel>,
    ) -> Result<Self, ConfigError> {
        parameters.validate()?;
        model.validate()?;
        let axis = parameters.time_axis()?;
        let sea_level = SeaLevelModel::new(&parameters.forcing)?;
        let floor = DepthFloor::new(parameters.min_water_depth)?;
        Ok(Self {
            name: name.into(),
            parameters,
            axis,
            sea_level,
            floor,
            model,
        })
    }

    /// Replace the evenly spaced axis with an explicit one.
    ///
    /// `total_time` and `time_step_count` are then informational only.
    pub fn with_time_axis(mut self, axis: TimeAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The validated parameters.
    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// The time axis every run evaluates.
    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// Name of the position model.
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Compute the full series.
    ///
    /// # Errors
    ///
    /// If the position model rejects itself at run time, or with
    /// [`ConfigError::NonFiniteOutput`] if any column would contain NaN or
    /// an infinity (a very short sinusoid period, or `Qs·t/η` overflowing).
    /// A series is only ever returned fully finite.
    pub fn run(&self) -> Result<ScenarioRun, ConfigError> {
        let start = Instant::now();
        let times = self.axis.as_slice();

        let stage = Instant::now();
        let sea_level = self.sea_level.series(times);
        let sea_level_us = stage.elapsed().as_micros() as u64;

        let stage = Instant::now();
        let depth = water_depth_series(self.parameters.initial_water_depth, &sea_level, self.floor)?;
        let water_depth_us = stage.elapsed().as_micros() as u64;

        let stage = Instant::now();
        let position = shoreline_position_series(
            &*self.model,
            self.parameters.sediment_supply,
            times,
            &depth.values,
        )?;
        let position_us = stage.elapsed().as_micros() as u64;

        let series = TimeSeries::from_columns(times.to_vec(), sea_level, depth.values, position)?;
        if let Err(e) = series.check_finite() {
            tracing::warn!(scenario = %self.name, model = self.model.name(), "{e}");
            return Err(e);
        }
        let metrics = ComputeMetrics {
            model: self.model.name().to_string(),
            samples: series.len(),
            floored_samples: depth.floored,
            total_us: start.elapsed().as_micros() as u64,
            sea_level_us,
            water_depth_us,
            position_us,
        };

        tracing::debug!(
            scenario = %self.name,
            model = self.model.name(),
            samples = metrics.samples,
            floored = metrics.floored_samples,
            total_us = metrics.total_us,
            "scenario computed"
        );

        Ok(ScenarioRun {
            name: self.name.clone(),
            total_time: self.axis.total_time(),
            series,
            metrics,
        })
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("model", &self.model.name())
            .field("samples", &self.axis.len())
            .field("parameters", &self.parameters)
            .finish()
    }
}

/// Validate, build, and run `config` in one call.
pub fn run_scenario(config: ScenarioConfig) -> Result<ScenarioRun, ConfigError> {
    Scenario::new(config)?.run()
}
