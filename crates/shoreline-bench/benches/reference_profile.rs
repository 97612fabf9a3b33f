//! Criterion benchmarks for whole-scenario runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use shoreline_bench::{advanced_profile, reference_profile, stress_profile};
use shoreline_engine::{assemble_pair, FigureLayout, Scenario, ScenarioPair};

fn bench_run_500(c: &mut Criterion) {
    let scenario = Scenario::new(reference_profile()).unwrap();

    c.bench_function("run_500", |b| {
        b.iter(|| {
            let run = scenario.run().unwrap();
            black_box(&run);
        });
    });
}

fn bench_run_1m_simple(c: &mut Criterion) {
    let scenario = Scenario::new(stress_profile()).unwrap();

    c.bench_function("run_1m_simple", |b| {
        b.iter(|| {
            let run = scenario.run().unwrap();
            black_box(&run);
        });
    });
}

fn bench_run_1m_advanced(c: &mut Criterion) {
    let scenario = Scenario::new(advanced_profile()).unwrap();

    c.bench_function("run_1m_advanced", |b| {
        b.iter(|| {
            let run = scenario.run().unwrap();
            black_box(&run);
        });
    });
}

fn bench_pair_with_figures(c: &mut Criterion) {
    let mut second = reference_profile();
    second.name = "second".into();
    let pair = ScenarioPair::new(reference_profile(), second).unwrap();

    c.bench_function("pair_500_combined_figures", |b| {
        b.iter(|| {
            let run = pair.run().unwrap();
            let figures = assemble_pair(&run, FigureLayout::Combined);
            black_box(&figures);
        });
    });
}

criterion_group!(
    benches,
    bench_run_500,
    bench_run_1m_simple,
    bench_run_1m_advanced,
    bench_pair_with_figures
);
criterion_main!(benches);
