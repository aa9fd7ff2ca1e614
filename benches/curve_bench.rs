//! Benchmarks for curve generation and record analysis

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use biomat_explorer::prelude::*;

fn reference_input() -> StressStrainInput {
    StressStrainInput::new(70_000.0, 90_000.0, 28_000_000.0, 0.1)
}

fn benchmark_default_curve(c: &mut Criterion) {
    let input = reference_input();
    c.bench_function("curve_default_100", |b| {
        b.iter(|| {
            let curve = generate_default(black_box(&input)).unwrap();
            black_box(curve);
        })
    });
}

fn benchmark_dense_curve(c: &mut Criterion) {
    let input = reference_input();
    let options = CurveOptions::default().with_sample_count(10_000);
    c.bench_function("curve_dense_10000", |b| {
        b.iter(|| {
            let curve = generate(black_box(&input), &options).unwrap();
            black_box(curve);
        })
    });
}

fn benchmark_parse_sample(c: &mut Criterion) {
    c.bench_function("parse_sample_table", |b| {
        b.iter(|| {
            let records = parse_materials_csv(black_box(SAMPLE_CSV));
            black_box(records);
        })
    });
}

fn benchmark_filter_and_deviation(c: &mut Criterion) {
    let records = parse_materials_csv(SAMPLE_CSV);
    let filter = PropertyFilter::new()
        .with_range(Property::ElasticModulus, ValueRange::new(40.0, 120.0).unwrap())
        .with_range(Property::TensileStrength, ValueRange::new(500.0, 1200.0).unwrap());
    c.bench_function("filter_then_deviation", |b| {
        b.iter(|| {
            let matched = filter.apply(black_box(&records));
            let report = deviation(matched.iter().copied(), Property::YieldStrength);
            black_box(report);
        })
    });
}

criterion_group!(
    benches,
    benchmark_default_curve,
    benchmark_dense_curve,
    benchmark_parse_sample,
    benchmark_filter_and_deviation,
);

criterion_main!(benches);
