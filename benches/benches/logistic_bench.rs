//! # Logistic Transform Benchmarks
//!
//! Measures odds, sigmoid and logit, including name resolution in logit.
//!
//! Run: `cargo bench --bench logistic_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use logreg_core::{odds, sigmoid, LogisticRegression, Transform};

fn bench_scalar_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_transforms");

    group.bench_function("odds", |b| {
        b.iter(|| black_box(odds(black_box(0.6))))
    });

    group.bench_function("sigmoid", |b| {
        b.iter(|| black_box(sigmoid(black_box(-2.0))))
    });

    group.finish();
}

fn bench_logit(c: &mut Criterion) {
    let mut group = c.benchmark_group("logit");

    let lr = LogisticRegression::new();
    group.bench_function("by_name", |b| {
        b.iter(|| black_box(lr.logit(black_box(0.6), "odds")))
    });

    group.bench_function("typed", |b| {
        b.iter(|| black_box(lr.logit_with(black_box(0.6), Transform::Odds)))
    });

    let extended = LogisticRegression::new()
        .with_transform("complement", |p| 1.0 - p)
        .expect("fresh name");
    group.bench_function("registered", |b| {
        b.iter(|| black_box(extended.logit(black_box(0.6), "complement")))
    });

    group.finish();
}

criterion_group!(benches, bench_scalar_transforms, bench_logit);
criterion_main!(benches);
