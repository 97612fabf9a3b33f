//! `shoreline` command-line front end.
//!
//! Loads or builds scenario configurations, runs them through the engine,
//! and writes series and figure descriptions as CSV or JSON.

mod args;
mod output;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use shoreline_engine::{
    assemble_pair, assemble_single, check_domains, Scenario, ScenarioConfig, ScenarioPair,
    ScenarioRun,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<ScenarioConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Enforce control domains when `strict`, otherwise only warn.
fn check_ranges(config: &ScenarioConfig, strict: bool) -> Result<()> {
    if let Err(e) = check_domains(config) {
        if strict {
            return Err(e).with_context(|| format!("scenario {:?}", config.name));
        }
        warn!(scenario = %config.name, "{e}");
    }
    Ok(())
}

fn log_run(run: &ScenarioRun) {
    info!(
        scenario = %run.name,
        model = %run.metrics.model,
        samples = run.metrics.samples,
        floored = run.metrics.floored_samples,
        total_us = run.metrics.total_us,
        "scenario computed"
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            model,
            overrides,
            format,
            output: out_path,
            figures,
            strict_domains,
        } => {
            let mut cfg = match &config {
                Some(path) => load_config(path)?,
                None => ScenarioConfig {
                    model: model.default_kind(),
                    ..ScenarioConfig::default()
                },
            };
            overrides.apply(&mut cfg);
            check_ranges(&cfg, strict_domains)?;

            let run = Scenario::new(cfg)?.run()?;
            log_run(&run);

            output::write_run(output::open(out_path.as_deref())?, &run, format)?;
            if let Some(path) = figures {
                output::write_figures(&path, &assemble_single(&run))?;
                info!(path = %path.display(), "figures written");
            }
        }

        Commands::Compare {
            first,
            second,
            layout,
            no_unify_axes,
            format,
            output: out_path,
            figures,
            strict_domains,
        } => {
            let first = load_config(&first)?;
            let second = load_config(&second)?;
            check_ranges(&first, strict_domains)?;
            check_ranges(&second, strict_domains)?;

            let run = ScenarioPair::new(first, second)?.run()?;
            log_run(&run.first);
            log_run(&run.second);

            output::write_runs(
                output::open(out_path.as_deref())?,
                &[&run.first, &run.second],
                format,
            )?;
            if let Some(path) = figures {
                let set = assemble_pair(&run, layout.layout(!no_unify_axes));
                output::write_figures(&path, &set)?;
                info!(path = %path.display(), figures = set.figure_count(), "figures written");
            }
        }

        Commands::Defaults { model } => {
            let cfg = ScenarioConfig {
                model: model.default_kind(),
                ..ScenarioConfig::default()
            };
            output::write_json(std::io::stdout().lock(), &cfg)?;
        }
    }

    Ok(())
}
