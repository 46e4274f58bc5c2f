//! Criterion benchmarks for the lookback sweep.
//!
//! Run with: `cargo bench -p channellab-runner`
//!
//! The sweep rescans every window per candidate, so cost grows with
//! `bars * max_window`; these cases bracket typical daily and hourly inputs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use channellab_runner::{synthetic_series, Optimizer};

fn bench_sweep_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_sequential");
    group.sample_size(10);

    for bars in [1_000, 5_000] {
        let series = synthetic_series(7, bars);
        let optimizer = Optimizer::new(168);
        group.bench_with_input(BenchmarkId::from_parameter(bars), &series, |b, s| {
            b.iter(|| optimizer.sweep(black_box(s)).unwrap());
        });
    }

    group.finish();
}

fn bench_sweep_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_parallel");
    group.sample_size(10);

    for bars in [1_000, 5_000] {
        let series = synthetic_series(7, bars);
        let optimizer = Optimizer::new(168).with_parallelism(true);
        group.bench_with_input(BenchmarkId::from_parameter(bars), &series, |b, s| {
            b.iter(|| optimizer.sweep(black_box(s)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sweep_sequential, bench_sweep_parallel);
criterion_main!(benches);
