//! Error types for the Shoreline workspace.
//!
//! Every failure in the box models is a configuration problem: the
//! computations are pure and deterministic, so there is nothing transient
//! to retry. [`ConfigError`] is raised synchronously, before any series is
//! produced, and callers must not render a plot for a rejected
//! configuration.
//!
//! Degenerate sinusoidal forcing (zero amplitude, or an unset or zero
//! period) is *not* an error. The term is simply switched off.

use std::error::Error;
use std::fmt;

/// An invalid model configuration.
///
/// Raised when a required parameter is non-positive or non-finite, when an
/// explicit time axis is malformed, when the slope ordering
/// `topset < basement < foreset` is violated, when a value falls outside
/// an enforced parameter domain, or when the computed series would contain
/// NaN or an infinity.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A parameter that must be strictly positive was zero or negative.
    NonPositive {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A parameter that must be non-negative was negative.
    Negative {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A parameter was NaN or infinite.
    NonFinite {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The time axis was requested with zero steps.
    ZeroStepCount,
    /// An explicit time axis contained no samples.
    EmptyTimeAxis,
    /// An explicit time axis contained a negative time.
    NegativeTime {
        /// Position of the offending sample.
        index: usize,
        /// The rejected time.
        value: f64,
    },
    /// An explicit time axis was not strictly increasing.
    TimeAxisNotIncreasing {
        /// Position of the first sample that does not exceed its predecessor.
        index: usize,
    },
    /// The slope ordering `topset < basement < foreset` does not hold.
    SlopeOrdering {
        /// Topset slope `St`.
        topset: f64,
        /// Basement slope `Sb`.
        basement: f64,
        /// Foreset slope `Sf`.
        foreset: f64,
    },
    /// A value lies outside its allowed parameter domain.
    OutOfDomain {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// An accepted configuration produced NaN or an infinity.
    ///
    /// Raised instead of returning the series, for example when a very
    /// short sinusoid period overflows the phase or `Qs·t/η` overflows.
    NonFiniteOutput {
        /// Column holding the first non-finite value.
        column: &'static str,
        /// Sample index of that value.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// Two series that must be sample-aligned have different lengths.
    LengthMismatch {
        /// Length of the time axis.
        expected: usize,
        /// Length of the mismatched series.
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { parameter, value } => {
                write!(f, "{parameter} must be positive, got {value}")
            }
            Self::Negative { parameter, value } => {
                write!(f, "{parameter} must not be negative, got {value}")
            }
            Self::NonFinite { parameter, value } => {
                write!(f, "{parameter} must be finite, got {value}")
            }
            Self::ZeroStepCount => write!(f, "time_step_count must be at least 1"),
            Self::EmptyTimeAxis => write!(f, "time axis has no samples"),
            Self::NegativeTime { index, value } => {
                write!(f, "time axis sample {index} is negative ({value})")
            }
            Self::TimeAxisNotIncreasing { index } => {
                write!(f, "time axis is not strictly increasing at sample {index}")
            }
            Self::SlopeOrdering {
                topset,
                basement,
                foreset,
            } => write!(
                f,
                "slopes must satisfy topset < basement < foreset, \
                 got topset={topset}, basement={basement}, foreset={foreset}"
            ),
            Self::OutOfDomain {
                parameter,
                value,
                min,
                max,
            } => write!(f, "{parameter}={value} is outside [{min}, {max}]"),
            Self::NonFiniteOutput {
                column,
                index,
                value,
            } => write!(f, "{column} is not finite at sample {index} ({value})"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "series length {actual} does not match time axis length {expected}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Reject NaN and infinities.
pub(crate) fn require_finite(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { parameter, value })
    }
}

/// Reject non-finite, zero, and negative values.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    require_finite(parameter, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { parameter, value })
    }
}
