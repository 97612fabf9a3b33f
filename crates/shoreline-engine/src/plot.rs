//! Figure assembly for an external plotting collaborator.
//!
//! Every scenario yields three 2-D line figures:
//!
//! 1. time vs. sea level,
//! 2. time vs. shoreline position,
//! 3. shoreline position vs. sea level (the shoreline trajectory).
//!
//! [`assemble_pair`] lays two runs out either side by side (three figures
//! per scenario, optionally on unified axes) or combined (three figures
//! with both scenarios overlaid, always on unified axes). The output is
//! plain serializable data; rendering is left to the caller.

use indexmap::IndexMap;
use serde::Serialize;
use shoreline_core::TimeSeries;

use crate::pair::{PairRun, ScenarioSlot};
use crate::scenario::ScenarioRun;

/// Margin applied to the data extent on value axes.
const AXIS_MARGIN: f64 = 1.1;

// ── PlotKind ───────────────────────────────────────────────────────

/// The three comparison plots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    /// Time on x, sea level on y.
    TimeVsSeaLevel,
    /// Time on x, shoreline position on y.
    TimeVsPosition,
    /// Shoreline position on x, sea level on y.
    PositionVsSeaLevel,
}

impl PlotKind {
    /// All kinds in display order.
    pub const ALL: [PlotKind; 3] = [
        PlotKind::TimeVsSeaLevel,
        PlotKind::TimeVsPosition,
        PlotKind::PositionVsSeaLevel,
    ];

    /// Figure title, numbered in display order.
    pub fn title(self) -> &'static str {
        match self {
            Self::TimeVsSeaLevel => "1. Time vs. Sea Level",
            Self::TimeVsPosition => "2. Time vs. Shoreline Position",
            Self::PositionVsSeaLevel => "3. Shoreline Position vs. Sea Level",
        }
    }

    /// X-axis label.
    pub fn x_label(self) -> &'static str {
        match self {
            Self::TimeVsSeaLevel | Self::TimeVsPosition => "Time (t)",
            Self::PositionVsSeaLevel => "Shoreline Position (X)",
        }
    }

    /// Y-axis label.
    pub fn y_label(self) -> &'static str {
        match self {
            Self::TimeVsSeaLevel | Self::PositionVsSeaLevel => "Sea Level (Z)",
            Self::TimeVsPosition => "Shoreline Position (X)",
        }
    }

    /// Legend entry when a figure shows a single scenario.
    pub fn trace_label(self) -> &'static str {
        match self {
            Self::TimeVsSeaLevel => "Sea Level",
            Self::TimeVsPosition => "Shoreline",
            Self::PositionVsSeaLevel => "Trajectory",
        }
    }

    fn columns(self, series: &TimeSeries) -> (&[f64], &[f64]) {
        match self {
            Self::TimeVsSeaLevel => (series.time(), series.sea_level()),
            Self::TimeVsPosition => (series.time(), series.shoreline_position()),
            Self::PositionVsSeaLevel => (series.shoreline_position(), series.sea_level()),
        }
    }
}

/// Line colour for `kind` in scenario `slot`.
pub fn trace_color(slot: ScenarioSlot, kind: PlotKind) -> &'static str {
    match (slot, kind) {
        (ScenarioSlot::First, PlotKind::TimeVsSeaLevel) => "mediumseagreen",
        (ScenarioSlot::First, PlotKind::TimeVsPosition) => "royalblue",
        (ScenarioSlot::First, PlotKind::PositionVsSeaLevel) => "purple",
        (ScenarioSlot::Second, PlotKind::TimeVsSeaLevel) => "darkorange",
        (ScenarioSlot::Second, PlotKind::TimeVsPosition) => "firebrick",
        (ScenarioSlot::Second, PlotKind::PositionVsSeaLevel) => "green",
    }
}

// ── Figure data ────────────────────────────────────────────────────

/// Inclusive axis extent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

/// One line on a figure.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trace {
    /// Legend entry.
    pub name: String,
    /// CSS colour name.
    pub color: &'static str,
    /// X values.
    pub x: Vec<f64>,
    /// Y values.
    pub y: Vec<f64>,
}

/// A 2-D line figure.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    /// Which of the three plots this is.
    pub kind: PlotKind,
    /// Title shown above the figure.
    pub title: String,
    /// X-axis label.
    pub x_label: &'static str,
    /// Y-axis label.
    pub y_label: &'static str,
    /// Lines in legend order.
    pub traces: Vec<Trace>,
    /// Fixed x extent, or `None` to auto-range.
    pub x_range: Option<AxisRange>,
    /// Fixed y extent, or `None` to auto-range.
    pub y_range: Option<AxisRange>,
}

impl Figure {
    fn new(kind: PlotKind, title: String) -> Self {
        Self {
            kind,
            title,
            x_label: kind.x_label(),
            y_label: kind.y_label(),
            traces: Vec::new(),
            x_range: None,
            y_range: None,
        }
    }

    fn push_trace(&mut self, name: impl Into<String>, color: &'static str, series: &TimeSeries) {
        let (x, y) = self.kind.columns(series);
        self.traces.push(Trace {
            name: name.into(),
            color,
            x: x.to_vec(),
            y: y.to_vec(),
        });
    }

    fn apply_ranges(&mut self, ranges: &UnifiedRanges) {
        let (x, y) = ranges.for_kind(self.kind);
        self.x_range = Some(x);
        self.y_range = Some(y);
    }
}

// ── Axis unification ───────────────────────────────────────────────

/// Shared axis extents across scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct UnifiedRanges {
    /// `[0, longest total time]`.
    pub time: AxisRange,
    /// `[min·1.1, max·1.1]` of sea level over all runs.
    pub sea_level: AxisRange,
    /// `[min(min, 0), max·1.1]` of shoreline position over all runs.
    pub position: AxisRange,
}

impl UnifiedRanges {
    /// Extents covering every run.
    ///
    /// Non-finite samples are ignored. A run with no finite samples
    /// contributes `0` to both ends of a value axis.
    pub fn from_runs(runs: &[&ScenarioRun]) -> Self {
        let time_max = runs.iter().map(|r| r.total_time).fold(0.0, f64::max);

        let sea = extent(runs.iter().map(|r| r.series.sea_level()));
        let pos = extent(runs.iter().map(|r| r.series.shoreline_position()));

        Self {
            time: AxisRange {
                min: 0.0,
                max: time_max,
            },
            sea_level: AxisRange {
                min: sea.min * AXIS_MARGIN,
                max: sea.max * AXIS_MARGIN,
            },
            position: AxisRange {
                min: pos.min.min(0.0),
                max: pos.max * AXIS_MARGIN,
            },
        }
    }

    /// `(x, y)` extents for a figure of `kind`.
    pub fn for_kind(&self, kind: PlotKind) -> (AxisRange, AxisRange) {
        match kind {
            PlotKind::TimeVsSeaLevel => (self.time, self.sea_level),
            PlotKind::TimeVsPosition => (self.time, self.position),
            PlotKind::PositionVsSeaLevel => (self.position, self.sea_level),
        }
    }
}

/// Per-column finite min/max, defaulting to 0 for a column with none,
/// then combined across columns.
fn extent<'a>(columns: impl Iterator<Item = &'a [f64]>) -> AxisRange {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut any = false;
    for col in columns {
        any = true;
        let (col_lo, col_hi) = col
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((a, b)) => Some((a.min(v), b.max(v))),
            })
            .unwrap_or((0.0, 0.0));
        lo = lo.min(col_lo);
        hi = hi.max(col_hi);
    }
    if any {
        AxisRange { min: lo, max: hi }
    } else {
        AxisRange { min: 0.0, max: 0.0 }
    }
}

// ── Layout ─────────────────────────────────────────────────────────

/// How two scenarios are arranged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum FigureLayout {
    /// Three figures per scenario in two columns.
    SideBySide {
        /// Put both columns on identical axis extents.
        unify_axes: bool,
    },
    /// Three figures, each overlaying both scenarios on unified axes.
    Combined,
}

impl Default for FigureLayout {
    fn default() -> Self {
        Self::SideBySide { unify_axes: true }
    }
}

/// Assembled figures, grouped into display panels.
///
/// Side-by-side layouts have one panel per scenario (keyed by scenario
/// name); the combined layout has a single `"Combined"` panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FigureSet {
    /// Layout that produced this set.
    pub layout: FigureLayout,
    /// Panels in display order.
    pub panels: IndexMap<String, Vec<Figure>>,
}

impl FigureSet {
    /// Total figures across all panels.
    pub fn figure_count(&self) -> usize {
        self.panels.values().map(Vec::len).sum()
    }
}

fn scenario_figures(run: &ScenarioRun, slot: ScenarioSlot) -> Vec<Figure> {
    PlotKind::ALL
        .iter()
        .map(|&kind| {
            let mut fig = Figure::new(kind, format!("S{}: {}", slot.number(), kind.title()));
            fig.push_trace(kind.trace_label(), trace_color(slot, kind), &run.series);
            fig
        })
        .collect()
}

/// Three auto-ranged figures for a single run.
pub fn assemble_single(run: &ScenarioRun) -> FigureSet {
    let mut panels = IndexMap::new();
    panels.insert(run.name.clone(), scenario_figures(run, ScenarioSlot::First));
    FigureSet {
        layout: FigureLayout::SideBySide { unify_axes: false },
        panels,
    }
}

/// Lay out both runs of a pair.
pub fn assemble_pair(run: &PairRun, layout: FigureLayout) -> FigureSet {
    let ranges = UnifiedRanges::from_runs(&[&run.first, &run.second]);
    let mut panels = IndexMap::new();

    match layout {
        FigureLayout::SideBySide { unify_axes } => {
            for slot in [ScenarioSlot::First, ScenarioSlot::Second] {
                let scenario = run.get(slot);
                let mut figures = scenario_figures(scenario, slot);
                if unify_axes {
                    figures.iter_mut().for_each(|f| f.apply_ranges(&ranges));
                }
                // Two scenarios may share a display name.
                let mut key = scenario.name.clone();
                if panels.contains_key(&key) {
                    key = format!("{key} ({})", slot.number());
                }
                panels.insert(key, figures);
            }
        }
        FigureLayout::Combined => {
            let figures = PlotKind::ALL
                .iter()
                .map(|&kind| {
                    let mut fig = Figure::new(kind, kind.title().to_string());
                    for slot in [ScenarioSlot::First, ScenarioSlot::Second] {
                        let scenario = run.get(slot);
                        fig.push_trace(
                            scenario.name.clone(),
                            trace_color(slot, kind),
                            &scenario.series,
                        );
                    }
                    fig.apply_ranges(&ranges);
                    fig
                })
                .collect();
            panels.insert("Combined".to_string(), figures);
        }
    }

    let set = FigureSet { layout, panels };
    tracing::debug!(?layout, figures = set.figure_count(), "figures assembled");
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ComputeMetrics;

    fn run(name: &str, total: f64, sea: Vec<f64>, pos: Vec<f64>) -> ScenarioRun {
        let n = sea.len();
        let time: Vec<f64> = (0..n).map(|i| total * i as f64 / (n - 1) as f64).collect();
        ScenarioRun {
            name: name.to_string(),
            total_time: total,
            series: TimeSeries::from_columns(time, sea, vec![1.0; n], pos).unwrap(),
            metrics: ComputeMetrics::default(),
        }
    }

    fn pair() -> PairRun {
        PairRun {
            first: run("S1", 100.0, vec![0.0, 5.0, 10.0], vec![0.0, 20.0, 40.0]),
            second: run("S2", 200.0, vec![-2.0, 1.0, 4.0], vec![0.0, -5.0, 60.0]),
        }
    }

    #[test]
    fn unified_ranges_follow_margin_rules() {
        let p = pair();
        let r = UnifiedRanges::from_runs(&[&p.first, &p.second]);
        assert_eq!(r.time, AxisRange { min: 0.0, max: 200.0 });
        assert!((r.sea_level.min - -2.2).abs() < 1e-12);
        assert!((r.sea_level.max - 11.0).abs() < 1e-12);
        assert_eq!(r.position.min, -5.0);
        assert!((r.position.max - 66.0).abs() < 1e-12);
    }

    #[test]
    fn position_axis_starts_at_zero_when_all_positive() {
        let a = run("a", 10.0, vec![1.0, 2.0], vec![3.0, 4.0]);
        let r = UnifiedRanges::from_runs(&[&a]);
        assert_eq!(r.position.min, 0.0);
    }

    #[test]
    fn non_finite_samples_ignored() {
        let a = run("a", 10.0, vec![1.0, f64::NAN, 2.0], vec![0.0, f64::INFINITY, 4.0]);
        let r = UnifiedRanges::from_runs(&[&a]);
        assert!((r.sea_level.max - 2.2).abs() < 1e-12);
        assert!((r.position.max - 4.4).abs() < 1e-12);
    }

    #[test]
    fn side_by_side_has_two_panels_of_three() {
        let set = assemble_pair(&pair(), FigureLayout::SideBySide { unify_axes: false });
        assert_eq!(set.panels.len(), 2);
        assert_eq!(set.figure_count(), 6);
        let s2 = &set.panels["S2"];
        assert_eq!(s2[0].title, "S2: 1. Time vs. Sea Level");
        assert_eq!(s2[1].traces[0].color, "firebrick");
        assert_eq!(s2[2].traces[0].name, "Trajectory");
        assert!(s2.iter().all(|f| f.x_range.is_none() && f.y_range.is_none()));
    }

    #[test]
    fn side_by_side_unified_shares_extents() {
        let set = assemble_pair(&pair(), FigureLayout::SideBySide { unify_axes: true });
        let s1 = &set.panels["S1"];
        let s2 = &set.panels["S2"];
        for (a, b) in s1.iter().zip(s2) {
            assert_eq!(a.x_range, b.x_range);
            assert_eq!(a.y_range, b.y_range);
            assert!(a.x_range.is_some());
        }
        // Trajectory plot puts position on x.
        assert_eq!(s1[2].x_range.unwrap().min, -5.0);
    }

    #[test]
    fn combined_overlays_both_scenarios() {
        let set = assemble_pair(&pair(), FigureLayout::Combined);
        assert_eq!(set.panels.len(), 1);
        let figs = &set.panels["Combined"];
        assert_eq!(figs.len(), 3);
        assert_eq!(figs[1].title, "2. Time vs. Shoreline Position");
        assert_eq!(figs[1].traces.len(), 2);
        assert_eq!(figs[1].traces[0].name, "S1");
        assert_eq!(figs[1].traces[1].color, "firebrick");
        assert_eq!(figs[0].x_range, Some(AxisRange { min: 0.0, max: 200.0 }));
    }

    #[test]
    fn trajectory_uses_position_as_x() {
        let set = assemble_single(&run("only", 10.0, vec![1.0, 2.0], vec![0.0, 9.0]));
        let traj = &set.panels["only"][2];
        assert_eq!(traj.kind, PlotKind::PositionVsSeaLevel);
        assert_eq!(traj.traces[0].x, vec![0.0, 9.0]);
        assert_eq!(traj.traces[0].y, vec![1.0, 2.0]);
    }

    #[test]
    fn duplicate_names_get_distinct_panels() {
        let mut p = pair();
        p.second.name = "S1".to_string();
        let set = assemble_pair(&p, FigureLayout::default());
        assert_eq!(set.panels.len(), 2);
        assert!(set.panels.contains_key("S1 (2)"));
    }
}
