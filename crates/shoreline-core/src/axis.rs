//! Discretized time axis.

use crate::error::{require_positive, ConfigError};

/// Number of samples used when a scenario does not say otherwise.
pub const DEFAULT_TIME_STEP_COUNT: usize = 500;

/// An ordered, strictly increasing sequence of non-negative times.
///
/// Construction validates the ordering, so every consumer can index the
/// axis without re-checking it.
///
/// # Examples
///
/// ```
/// use shoreline_core::TimeAxis;
///
/// let axis = TimeAxis::linspace(100.0, 101).unwrap();
/// assert_eq!(axis.len(), 101);
/// assert_eq!(axis.as_slice()[0], 0.0);
/// assert_eq!(axis.as_slice()[1], 1.0);
/// assert_eq!(axis.total_time(), 100.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimeAxis {
    times: Vec<f64>,
}

impl TimeAxis {
    /// `count` evenly spaced samples from `0` to `total_time` inclusive.
    ///
    /// A single sample yields the axis `[0]`. The final sample is pinned to
    /// `total_time` exactly so the axis end never drifts by rounding.
    ///
    /// Each sample is the fraction `i / (count − 1)` scaled by `total_time`,
    /// so no intermediate exceeds `total_time` and totals up to `f64::MAX`
    /// stay finite. A total too small to separate `count` samples is
    /// rejected with [`ConfigError::TimeAxisNotIncreasing`].
    pub fn linspace(total_time: f64, count: usize) -> Result<Self, ConfigError> {
        require_positive("total_time", total_time)?;
        if count == 0 {
            return Err(ConfigError::ZeroStepCount);
        }
        if count == 1 {
            return Ok(Self { times: vec![0.0] });
        }
        let last = count - 1;
        let denom = last as f64;
        let mut times: Vec<f64> = (0..count)
            .map(|i| (i as f64 / denom) * total_time)
            .collect();
        times[last] = total_time;
        // Subnormal totals round neighbouring samples together.
        if let Some(index) = (1..count).find(|&i| times[i] <= times[i - 1]) {
            return Err(ConfigError::TimeAxisNotIncreasing { index });
        }
        Ok(Self { times })
    }

    /// Wrap an explicit sequence of times.
    ///
    /// Rejects empty input, non-finite or negative samples, and any pair of
    /// neighbours that is not strictly increasing.
    pub fn from_times(times: Vec<f64>) -> Result<Self, ConfigError> {
        if times.is_empty() {
            return Err(ConfigError::EmptyTimeAxis);
        }
        for (index, &value) in times.iter().enumerate() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite {
                    parameter: "time",
                    value,
                });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeTime { index, value });
            }
            if index > 0 && value <= times[index - 1] {
                return Err(ConfigError::TimeAxisNotIncreasing { index });
            }
        }
        Ok(Self { times })
    }

    /// The samples as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.times
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always returns `false`: construction rejects empty axes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Time of the final sample.
    pub fn total_time(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Consume the axis, returning the underlying samples.
    pub fn into_vec(self) -> Vec<f64> {
        self.times
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn linspace_includes_both_ends() {
        let axis = TimeAxis::linspace(10.0, 5).unwrap();
        assert_eq!(axis.as_slice(), &[0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn linspace_single_sample_is_origin() {
        let axis = TimeAxis::linspace(42.0, 1).unwrap();
        assert_eq!(axis.as_slice(), &[0.0]);
        assert_eq!(axis.total_time(), 0.0);
    }

    #[test]
    fn linspace_rejects_zero_steps() {
        assert_eq!(TimeAxis::linspace(10.0, 0), Err(ConfigError::ZeroStepCount));
    }

    #[test]
    fn linspace_rejects_non_positive_total_time() {
        assert!(matches!(
            TimeAxis::linspace(0.0, 10),
            Err(ConfigError::NonPositive { parameter: "total_time", .. })
        ));
        assert!(matches!(
            TimeAxis::linspace(-5.0, 10),
            Err(ConfigError::NonPositive { .. })
        ));
        assert!(matches!(
            TimeAxis::linspace(f64::INFINITY, 10),
            Err(ConfigError::NonFinite { .. })
        ));
    }

    #[test]
    fn linspace_near_f64_max_stays_finite_and_ordered() {
        let axis = TimeAxis::linspace(1e308, 5).unwrap();
        let t = axis.as_slice();
        assert_eq!(&t[..3], &[0.0, 2.5e307, 5e307]);
        assert!((t[3] / 7.5e307 - 1.0).abs() < 1e-15);
        assert_eq!(t[4], 1e308);
        assert!(TimeAxis::from_times(axis.clone().into_vec()).is_ok());

        let axis = TimeAxis::linspace(f64::MAX, 3).unwrap();
        assert_eq!(axis.as_slice(), &[0.0, f64::MAX / 2.0, f64::MAX]);
    }

    #[test]
    fn linspace_rejects_total_too_small_to_separate_samples() {
        let tiny = f64::from_bits(1);
        assert_eq!(
            TimeAxis::linspace(tiny, 3),
            Err(ConfigError::TimeAxisNotIncreasing { index: 1 })
        );
    }

    #[test]
    fn from_times_rejects_empty() {
        assert_eq!(TimeAxis::from_times(vec![]), Err(ConfigError::EmptyTimeAxis));
    }

    #[test]
    fn from_times_rejects_negative() {
        assert_eq!(
            TimeAxis::from_times(vec![-1.0, 0.0]),
            Err(ConfigError::NegativeTime {
                index: 0,
                value: -1.0
            })
        );
    }

    #[test]
    fn from_times_rejects_repeated_sample() {
        assert_eq!(
            TimeAxis::from_times(vec![0.0, 1.0, 1.0, 2.0]),
            Err(ConfigError::TimeAxisNotIncreasing { index: 2 })
        );
    }

    #[test]
    fn from_times_accepts_irregular_spacing() {
        let axis = TimeAxis::from_times(vec![0.0, 0.5, 3.0, 3.25]).unwrap();
        assert_eq!(axis.len(), 4);
        assert_eq!(axis.total_time(), 3.25);
    }

    proptest! {
        #[test]
        fn linspace_is_strictly_increasing(total in 0.1f64..1.0e4, count in 2usize..2000) {
            let axis = TimeAxis::linspace(total, count).unwrap();
            prop_assert_eq!(axis.len(), count);
            prop_assert_eq!(axis.as_slice()[0], 0.0);
            prop_assert_eq!(axis.total_time(), total);
            for w in axis.as_slice().windows(2) {
                prop_assert!(w[1] > w[0]);
            }
            // A linspace axis always survives re-validation.
            prop_assert!(TimeAxis::from_times(axis.clone().into_vec()).is_ok());
        }

        #[test]
        fn linspace_huge_totals_are_finite(total in 1.0e300f64..f64::MAX, count in 2usize..500) {
            let axis = TimeAxis::linspace(total, count).unwrap();
            prop_assert_eq!(axis.total_time(), total);
            prop_assert!(axis.as_slice().iter().all(|t| t.is_finite()));
            prop_assert!(TimeAxis::from_times(axis.into_vec()).is_ok());
        }
    }
}
