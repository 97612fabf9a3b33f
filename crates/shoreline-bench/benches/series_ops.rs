//! Criterion benchmarks for the individual series stages.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use shoreline_bench::{full_forcing, STRESS_SAMPLES};
use shoreline_core::{SlopeGeometry, TimeAxis};
use shoreline_model::{
    shoreline_position_series, water_depth_series, DepthFloor, SeaLevelModel, SimpleBoxModel,
    SlopeWedgeModel,
};

fn bench_linspace(c: &mut Criterion) {
    c.bench_function("linspace_1m", |b| {
        b.iter(|| {
            let axis = TimeAxis::linspace(black_box(500.0), STRESS_SAMPLES).unwrap();
            black_box(&axis);
        });
    });
}

fn bench_sea_level(c: &mut Criterion) {
    let axis = TimeAxis::linspace(500.0, STRESS_SAMPLES).unwrap();
    let model = SeaLevelModel::new(&full_forcing()).unwrap();

    c.bench_function("sea_level_1m_two_sinusoids", |b| {
        b.iter(|| {
            let z = model.series(axis.as_slice());
            black_box(&z);
        });
    });
}

fn bench_water_depth(c: &mut Criterion) {
    let axis = TimeAxis::linspace(500.0, STRESS_SAMPLES).unwrap();
    let z = SeaLevelModel::new(&full_forcing())
        .unwrap()
        .series(axis.as_slice());

    c.bench_function("water_depth_1m", |b| {
        b.iter(|| {
            let depth = water_depth_series(10.0, &z, DepthFloor::default()).unwrap();
            black_box(&depth);
        });
    });
}

fn bench_positions(c: &mut Criterion) {
    let axis = TimeAxis::linspace(500.0, STRESS_SAMPLES).unwrap();
    let z = SeaLevelModel::new(&full_forcing())
        .unwrap()
        .series(axis.as_slice());
    let depth = water_depth_series(10.0, &z, DepthFloor::default()).unwrap();
    let wedge = SlopeWedgeModel::new(SlopeGeometry::default()).unwrap();

    c.bench_function("position_1m_simple", |b| {
        b.iter(|| {
            let x =
                shoreline_position_series(&SimpleBoxModel, 250.0, axis.as_slice(), &depth.values)
                    .unwrap();
            black_box(&x);
        });
    });

    c.bench_function("position_1m_wedge", |b| {
        b.iter(|| {
            let x = shoreline_position_series(&wedge, 250.0, axis.as_slice(), &depth.values)
                .unwrap();
            black_box(&x);
        });
    });
}

criterion_group!(
    benches,
    bench_linspace,
    bench_sea_level,
    bench_water_depth,
    bench_positions
);
criterion_main!(benches);
