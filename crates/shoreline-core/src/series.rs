//! Computed time series.

use serde::Serialize;

use crate::error::ConfigError;

/// One time step of a computed scenario.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sample {
    /// Time `t`.
    pub time: f64,
    /// Sea level `Z(t)`.
    pub sea_level: f64,
    /// Floored water depth `η(t)`.
    pub water_depth: f64,
    /// Shoreline position `X(t)`.
    pub shoreline_position: f64,
}

/// Sample-aligned columns of time, sea level, water depth, and position.
///
/// Stored column-wise because the plotting layer consumes whole columns.
/// Immutable once built: only read accessors are exposed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimeSeries {
    time: Vec<f64>,
    sea_level: Vec<f64>,
    water_depth: Vec<f64>,
    shoreline_position: Vec<f64>,
}

impl TimeSeries {
    /// Assemble a series from its four columns.
    ///
    /// Every column must have the same length as `time`.
    pub fn from_columns(
        time: Vec<f64>,
        sea_level: Vec<f64>,
        water_depth: Vec<f64>,
        shoreline_position: Vec<f64>,
    ) -> Result<Self, ConfigError> {
        let expected = time.len();
        for actual in [sea_level.len(), water_depth.len(), shoreline_position.len()] {
            if actual != expected {
                return Err(ConfigError::LengthMismatch { expected, actual });
            }
        }
        Ok(Self {
            time,
            sea_level,
            water_depth,
            shoreline_position,
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Time column.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Sea-level column.
    pub fn sea_level(&self) -> &[f64] {
        &self.sea_level
    }

    /// Water-depth column.
    pub fn water_depth(&self) -> &[f64] {
        &self.water_depth
    }

    /// Shoreline-position column.
    pub fn shoreline_position(&self) -> &[f64] {
        &self.shoreline_position
    }

    /// The sample at `index`, if in range.
    pub fn sample(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            time: *self.time.get(index)?,
            sea_level: self.sea_level[index],
            water_depth: self.water_depth[index],
            shoreline_position: self.shoreline_position[index],
        })
    }

    /// The final sample, if any.
    pub fn last(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|i| self.sample(i))
    }

    /// Iterate over samples in time order.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).map(move |i| Sample {
            time: self.time[i],
            sea_level: self.sea_level[i],
            water_depth: self.water_depth[i],
            shoreline_position: self.shoreline_position[i],
        })
    }

    /// Whether every value in every column is finite.
    pub fn is_finite(&self) -> bool {
        self.check_finite().is_ok()
    }

    /// `Err(NonFiniteOutput)` naming the first NaN or infinity, scanning
    /// columns in order (time, sea level, water depth, position).
    pub fn check_finite(&self) -> Result<(), ConfigError> {
        let columns = [
            ("time", &self.time),
            ("sea_level", &self.sea_level),
            ("water_depth", &self.water_depth),
            ("shoreline_position", &self.shoreline_position),
        ];
        for (column, values) in columns {
            let bad = values.iter().enumerate().find(|(_, v)| !v.is_finite());
            if let Some((index, &value)) = bad {
                return Err(ConfigError::NonFiniteOutput {
                    column,
                    index,
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> TimeSeries {
        TimeSeries::from_columns(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 0.5, 1.0],
            vec![10.0, 9.5, 9.0],
            vec![0.0, 26.3, 55.5],
        )
        .unwrap()
    }

    #[test]
    fn mismatched_columns_rejected() {
        let err = TimeSeries::from_columns(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 0.5],
            vec![10.0, 9.5, 9.0],
            vec![0.0, 1.0, 2.0],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn sample_access() {
        let s = three();
        assert_eq!(s.len(), 3);
        let mid = s.sample(1).unwrap();
        assert_eq!(mid.time, 1.0);
        assert_eq!(mid.water_depth, 9.5);
        assert!(s.sample(3).is_none());
        assert_eq!(s.last().unwrap().shoreline_position, 55.5);
    }

    #[test]
    fn iter_yields_rows_in_order() {
        let times: Vec<f64> = three().iter().map(|r| r.time).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn finiteness_check_sees_every_column() {
        assert!(three().is_finite());
        let s = TimeSeries::from_columns(
            vec![0.0, 1.0],
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, f64::INFINITY],
        )
        .unwrap();
        assert!(!s.is_finite());
        assert_eq!(
            s.check_finite(),
            Err(ConfigError::NonFiniteOutput {
                column: "shoreline_position",
                index: 1,
                value: f64::INFINITY,
            })
        );
    }

    #[test]
    fn empty_series_has_no_last_sample() {
        let s = TimeSeries::from_columns(vec![], vec![], vec![], vec![]).unwrap();
        assert!(s.is_empty());
        assert!(s.last().is_none());
    }
}
