//! The [`ShorelineModel`] trait and the series driver that evaluates it.
//!
//! Position models are pluggable strategies: the engine only needs a
//! name for telemetry, an up-front validation hook, and a per-sample
//! position function.

use shoreline_core::ConfigError;

/// A closed-form shoreline position model.
///
/// # Contract
///
/// - `position()` MUST be deterministic: same inputs produce identical outputs.
/// - `&self`: models are stateless once constructed.
/// - `validate()` is called once per series, before any `position()` call.
///   A model that returns `Err` never has `position()` evaluated.
/// - `water_depth` passed to `position()` is always strictly positive
///   (floored upstream by [`DepthFloor`](crate::DepthFloor)).
///
/// # Examples
///
/// A model that pins the shoreline at a fixed offset:
///
/// ```
/// use shoreline_model::{shoreline_position_series, ShorelineModel};
///
/// struct Fixed(f64);
///
/// impl ShorelineModel for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn position(&self, _qs: f64, _t: f64, _eta: f64) -> f64 { self.0 }
/// }
///
/// let x = shoreline_position_series(&Fixed(3.0), 100.0, &[0.0, 1.0], &[5.0, 5.0]).unwrap();
/// assert_eq!(x, vec![3.0, 3.0]);
/// ```
pub trait ShorelineModel: Send + 'static {
    /// Human-readable name for logging and metrics.
    fn name(&self) -> &str;

    /// Reject configurations that would produce meaningless output.
    ///
    /// Default: accept.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Shoreline position for sediment supply `sediment_supply` at
    /// time `time` with floored water depth `water_depth`.
    fn position(&self, sediment_supply: f64, time: f64, water_depth: f64) -> f64;
}

/// Evaluate `model` over a time axis and its aligned water-depth series.
///
/// # Errors
///
/// - whatever [`ShorelineModel::validate`] returns;
/// - [`ConfigError::NonFinite`] / [`ConfigError::Negative`] for a
///   non-finite or negative sediment supply (zero is allowed and yields a
///   stationary shoreline);
/// - [`ConfigError::LengthMismatch`] if `water_depth` is not aligned with
///   `times`.
pub fn shoreline_position_series(
    model: &dyn ShorelineModel,
    sediment_supply: f64,
    times: &[f64],
    water_depth: &[f64],
) -> Result<Vec<f64>, ConfigError> {
    model.validate()?;
    if !sediment_supply.is_finite() {
        return Err(ConfigError::NonFinite {
            parameter: "sediment_supply",
            value: sediment_supply,
        });
    }
    if sediment_supply < 0.0 {
        return Err(ConfigError::Negative {
            parameter: "sediment_supply",
            value: sediment_supply,
        });
    }
    if water_depth.len() != times.len() {
        return Err(ConfigError::LengthMismatch {
            expected: times.len(),
            actual: water_depth.len(),
        });
    }
    Ok(times
        .iter()
        .zip(water_depth)
        .map(|(&t, &eta)| model.position(sediment_supply, t, eta))
        .collect())
}
