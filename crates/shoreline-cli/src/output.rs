//! Series and figure writers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use shoreline_core::TimeSeries;
use shoreline_engine::{ComputeMetrics, FigureSet, ScenarioRun};

use crate::args::OutputFormat;

/// Buffered writer to `path`, or stdout when `None`.
pub fn open(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => {
            let file =
                File::create(p).with_context(|| format!("creating {}", p.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

/// JSON body for one computed scenario.
#[derive(Serialize)]
struct RunReport<'a> {
    name: &'a str,
    metrics: &'a ComputeMetrics,
    series: &'a TimeSeries,
}

impl<'a> From<&'a ScenarioRun> for RunReport<'a> {
    fn from(run: &'a ScenarioRun) -> Self {
        Self {
            name: &run.name,
            metrics: &run.metrics,
            series: &run.series,
        }
    }
}

/// One CSV row in multi-scenario output.
#[derive(Serialize)]
struct ScenarioRow<'a> {
    scenario: &'a str,
    time: f64,
    sea_level: f64,
    water_depth: f64,
    shoreline_position: f64,
}

/// Write one run as CSV (`time,sea_level,water_depth,shoreline_position`)
/// or as a JSON report.
pub fn write_run<W: Write>(out: W, run: &ScenarioRun, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for sample in run.series.iter() {
                wtr.serialize(sample)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => write_json(out, &RunReport::from(run))?,
    }
    Ok(())
}

/// Write several runs. CSV output gains a leading `scenario` column; JSON
/// output is an array of reports.
pub fn write_runs<W: Write>(out: W, runs: &[&ScenarioRun], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for run in runs {
                for s in run.series.iter() {
                    wtr.serialize(ScenarioRow {
                        scenario: &run.name,
                        time: s.time,
                        sea_level: s.sea_level,
                        water_depth: s.water_depth,
                        shoreline_position: s.shoreline_position,
                    })?;
                }
            }
            wtr.flush()?;
        }
        OutputFormat::Json => {
            let reports: Vec<RunReport<'_>> = runs.iter().map(|r| RunReport::from(*r)).collect();
            write_json(out, &reports)?;
        }
    }
    Ok(())
}

/// Write figure descriptions to `path` as pretty JSON.
pub fn write_figures(path: &Path, figures: &FigureSet) -> Result<()> {
    let out = open(Some(path))?;
    write_json(out, figures).with_context(|| format!("writing figures to {}", path.display()))
}

/// Pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut out: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoreline_engine::{assemble_single, Scenario, ScenarioConfig};
    use shoreline_test_utils::reference_parameters;

    fn reference_run(name: &str) -> ScenarioRun {
        let cfg = ScenarioConfig {
            name: name.to_string(),
            parameters: reference_parameters(),
            ..ScenarioConfig::default()
        };
        Scenario::new(cfg).unwrap().run().unwrap()
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let run = reference_run("ref");
        let mut buf = Vec::new();
        write_run(&mut buf, &run, OutputFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("time,sea_level,water_depth,shoreline_position")
        );
        assert_eq!(lines.next(), Some("0.0,0.0,10.0,0.0"));
        assert_eq!(text.lines().count(), 102);
    }

    #[test]
    fn json_report_carries_metrics() {
        let run = reference_run("ref");
        let mut buf = Vec::new();
        write_run(&mut buf, &run, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["name"], "ref");
        assert_eq!(v["metrics"]["floored_samples"], 67);
        assert_eq!(v["metrics"]["model"], "simple_box");
    }

    #[test]
    fn multi_csv_prefixes_scenario() {
        let a = reference_run("a");
        let b = reference_run("b");
        let mut buf = Vec::new();
        write_runs(&mut buf, &[&a, &b], OutputFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("scenario,time,sea_level,water_depth,shoreline_position\n"));
        assert_eq!(text.lines().count(), 1 + 2 * 101);
        assert!(text.lines().nth(102).unwrap().starts_with("b,"));
    }

    #[test]
    fn multi_json_is_an_array() {
        let a = reference_run("a");
        let b = reference_run("b");
        let mut buf = Vec::new();
        write_runs(&mut buf, &[&a, &b], OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v.as_array().unwrap().len(), 2);
        assert_eq!(v[1]["name"], "b");
    }

    #[test]
    fn figures_written_to_file() {
        let run = reference_run("ref");
        let path = std::env::temp_dir().join(format!("shoreline-figs-{}.json", std::process::id()));
        write_figures(&path, &assemble_single(&run)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["panels"]["ref"].as_array().unwrap().len(), 3);
    }
}
