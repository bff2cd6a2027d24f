// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Benchmarks comparing square search with a linear scan.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use square_search::engine::{MatchPolicy, NoopObserver, SquareEngine};
use square_search::square_search;

fn haystack(len: usize) -> Vec<u64> {
    (0..len as u64).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect()
}

fn bench_absent_needle(c: &mut Criterion) {
    let mut group = c.benchmark_group("absent_needle");

    for len in [23usize, 256, 4096, 65536].iter() {
        let data = haystack(*len);
        group.throughput(Throughput::Elements(*len as u64));

        group.bench_with_input(BenchmarkId::new("square_search", len), &data, |b, data| {
            b.iter(|| black_box(square_search(black_box(data), &u64::MAX)));
        });

        group.bench_with_input(BenchmarkId::new("last_match", len), &data, |b, data| {
            let engine = SquareEngine::new(data);
            b.iter(|| {
                black_box(engine.run(black_box(&u64::MAX), MatchPolicy::LastMatch, &mut NoopObserver))
            });
        });

        group.bench_with_input(BenchmarkId::new("linear", len), &data, |b, data| {
            b.iter(|| black_box(data.iter().position(|v| *v == black_box(u64::MAX))));
        });
    }

    group.finish();
}

fn bench_grid_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_setup");
    for len in [23usize, 1 << 20, 1 << 40].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, &len| {
            b.iter(|| black_box(square_search::SquareGrid::new(black_box(len))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_absent_needle, bench_grid_setup);
criterion_main!(benches);
