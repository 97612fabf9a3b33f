//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shoreline_core::{Sinusoid, SlopeGeometry};
use shoreline_engine::{FigureLayout, ModelKind, ScenarioConfig};

#[derive(Parser, Debug)]
#[command(name = "shoreline")]
#[command(about = "Shoreline box models with sea-level forcing")]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute one scenario and write its time series
    Run {
        /// Start from a JSON scenario file instead of the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Model used when no config file is given
        #[arg(short, long, value_enum, default_value_t = ModelChoice::Simple)]
        model: ModelChoice,

        #[command(flatten)]
        overrides: ScenarioOverrides,

        /// Series output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Write the series here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write figure descriptions as JSON
        #[arg(long)]
        figures: Option<PathBuf>,

        /// Reject values outside the interactive control ranges
        #[arg(long)]
        strict_domains: bool,
    },

    /// Compute two scenarios side by side
    Compare {
        /// Scenario 1 JSON file
        first: PathBuf,

        /// Scenario 2 JSON file
        second: PathBuf,

        /// Figure arrangement
        #[arg(short, long, value_enum, default_value_t = LayoutChoice::SideBySide)]
        layout: LayoutChoice,

        /// Give each side-by-side column its own axis extents
        #[arg(long)]
        no_unify_axes: bool,

        /// Series output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write both series here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write figure descriptions as JSON
        #[arg(long)]
        figures: Option<PathBuf>,

        /// Reject values outside the interactive control ranges
        #[arg(long)]
        strict_domains: bool,
    },

    /// Print a default scenario as JSON
    Defaults {
        #[arg(short, long, value_enum, default_value_t = ModelChoice::Simple)]
        model: ModelChoice,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModelChoice {
    /// X = Qs·t/η
    Simple,
    /// Topset/foreset/basement slope wedge
    Advanced,
}

impl ModelChoice {
    pub fn default_kind(self) -> ModelKind {
        match self {
            Self::Simple => ModelKind::Simple,
            Self::Advanced => ModelKind::advanced(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutChoice {
    SideBySide,
    Combined,
}

impl LayoutChoice {
    pub fn layout(self, unify_axes: bool) -> FigureLayout {
        match self {
            Self::SideBySide => FigureLayout::SideBySide { unify_axes },
            Self::Combined => FigureLayout::Combined,
        }
    }
}

/// Per-field overrides applied on top of the starting scenario.
#[derive(Args, Debug, Default)]
pub struct ScenarioOverrides {
    /// Scenario display name
    #[arg(long)]
    pub name: Option<String>,

    /// Sediment supply Qs
    #[arg(long)]
    pub sediment_supply: Option<f64>,

    /// Simulation time T
    #[arg(long)]
    pub total_time: Option<f64>,

    /// Number of samples on the time axis
    #[arg(long)]
    pub steps: Option<usize>,

    /// Initial water depth η0
    #[arg(long)]
    pub initial_depth: Option<f64>,

    /// Water-depth floor ηmin
    #[arg(long)]
    pub min_depth: Option<f64>,

    /// Sea-level baseline Z0
    #[arg(long, allow_hyphen_values = true)]
    pub baseline: Option<f64>,

    /// Linear sea-level rate
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<f64>,

    /// Short-term sinusoid amplitude
    #[arg(long)]
    pub short_amplitude: Option<f64>,

    /// Short-term sinusoid period
    #[arg(long)]
    pub short_period: Option<f64>,

    /// Disable the short-term sinusoid
    #[arg(long, conflicts_with_all = ["short_amplitude", "short_period"])]
    pub no_short: bool,

    /// Long-term sinusoid amplitude
    #[arg(long)]
    pub long_amplitude: Option<f64>,

    /// Long-term sinusoid period
    #[arg(long)]
    pub long_period: Option<f64>,

    /// Disable the long-term sinusoid
    #[arg(long, conflicts_with_all = ["long_amplitude", "long_period"])]
    pub no_long: bool,

    /// Topset slope St (advanced model)
    #[arg(long)]
    pub topset: Option<f64>,

    /// Foreset slope Sf (advanced model)
    #[arg(long)]
    pub foreset: Option<f64>,

    /// Basement slope Sb (advanced model)
    #[arg(long)]
    pub basement: Option<f64>,
}

impl ScenarioOverrides {
    /// Whether any slope flag was given.
    fn has_slopes(&self) -> bool {
        self.topset.is_some() || self.foreset.is_some() || self.basement.is_some()
    }

    /// Apply every given flag to `config`.
    ///
    /// A slope flag on a simple-model scenario switches it to the advanced
    /// model with default slopes before applying the override.
    pub fn apply(&self, config: &mut ScenarioConfig) {
        if let Some(name) = &self.name {
            config.name = name.clone();
        }

        let p = &mut config.parameters;
        set(&mut p.sediment_supply, self.sediment_supply);
        set(&mut p.total_time, self.total_time);
        set(&mut p.time_step_count, self.steps);
        set(&mut p.initial_water_depth, self.initial_depth);
        set(&mut p.min_water_depth, self.min_depth);

        let f = &mut p.forcing;
        set(&mut f.baseline, self.baseline);
        set(&mut f.linear_rate, self.rate);
        apply_sinusoid(
            &mut f.short,
            self.no_short,
            self.short_amplitude,
            self.short_period,
            Sinusoid::SHORT_DEFAULT,
        );
        apply_sinusoid(
            &mut f.long,
            self.no_long,
            self.long_amplitude,
            self.long_period,
            Sinusoid::LONG_DEFAULT,
        );

        if self.has_slopes() {
            if let ModelKind::Simple = config.model {
                config.model = ModelKind::Advanced {
                    slopes: SlopeGeometry::default(),
                };
            }
            if let ModelKind::Advanced { slopes } = &mut config.model {
                set(&mut slopes.topset, self.topset);
                set(&mut slopes.foreset, self.foreset);
                set(&mut slopes.basement, self.basement);
            }
        }
    }
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

fn apply_sinusoid(
    slot: &mut Option<Sinusoid>,
    disable: bool,
    amplitude: Option<f64>,
    period: Option<f64>,
    fallback: Sinusoid,
) {
    if disable {
        *slot = None;
        return;
    }
    if amplitude.is_none() && period.is_none() {
        return;
    }
    let term = slot.get_or_insert(fallback);
    set(&mut term.amplitude, amplitude);
    set(&mut term.period, period);
}
