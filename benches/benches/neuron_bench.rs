//! # Neuron Benchmarks
//!
//! Measures weighted-sum scoring and both decision rules across vector sizes.
//!
//! Run: `cargo bench --bench neuron_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use logreg_core::{linear_algebra, Neuron};

fn vectors(n: usize) -> (Vec<f64>, Vec<f64>) {
    let w = (0..n).map(|i| (i % 7) as f64 * 0.25).collect();
    let x = (0..n).map(|i| ((i * 3) % 11) as f64 / 11.0).collect();
    (w, x)
}

fn bench_linear_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_algebra");

    for size in [3usize, 16, 256, 4096] {
        let (w, x) = vectors(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("len", size), &(w, x), |b, (w, x)| {
            b.iter(|| black_box(linear_algebra(w, x)))
        });
    }

    group.finish();
}

fn bench_decisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("decisions");

    let neuron = Neuron::new();
    let (w, x) = vectors(16);

    group.bench_function("decide", |b| {
        b.iter(|| black_box(neuron.decide(&w, &x, black_box(0.5))))
    });

    group.bench_function("decide_bias", |b| {
        b.iter(|| black_box(neuron.decide_bias(&w, &x, black_box(0.5))))
    });

    group.bench_function("construct_by_name", |b| {
        b.iter(|| black_box(Neuron::with_algorithm(black_box("linear_algebra"))))
    });

    group.finish();
}

criterion_group!(benches, bench_linear_algebra, bench_decisions);
criterion_main!(benches);
