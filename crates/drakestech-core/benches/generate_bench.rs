//! Criterion benchmarks for catalog generation.
//!
//! - `generate`: full build + validation for a single metal and for the
//!   default sixteen-metal, twelve-tier configuration.
//! - `validate`: the progression check alone over a prebuilt default catalog.

use criterion::{Criterion, criterion_group, criterion_main};
use drakestech_core::Config;
use drakestech_core::generate::generate;
use drakestech_core::test_utils::*;
use drakestech_core::validation::validate;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(30);

    let small = copper_only(12);
    group.bench_function("copper_12_tiers", |b| {
        b.iter(|| generate(black_box(&small)).unwrap());
    });

    let full = Config::default();
    group.bench_function("default_16_metals_12_tiers", |b| {
        b.iter(|| generate(black_box(&full)).unwrap());
    });

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    group.sample_size(50);

    let catalog = catalog_for(&Config::default());
    group.bench_function("default_catalog", |b| {
        b.iter(|| validate(black_box(&catalog)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_validate);
criterion_main!(benches);
