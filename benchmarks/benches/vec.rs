// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tensile::TensileVec;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench vec
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

fn sizes() -> &'static [usize] {
    if is_fast_mode() {
        &[1_000, 100_000]
    } else {
        &[100, 1_000, 10_000, 100_000, 1_000_000]
    }
}

/// Seeded so both containers see the same positions.
fn positions(len: usize, count: usize) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(0x7e45_11e);

    (0..count).map(|i| rng.random_range(0..=len + i)).collect()
}

// =============================================================================
// Vec vs TensileVec: push from empty
// =============================================================================

fn bench_push_from_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_from_empty");
    configure_group(&mut group);

    for &size in sizes() {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s as u64 {
                    vec.push(i);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("TensileVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = TensileVec::new();
                for i in 0..s as u64 {
                    vec.push(i).expect("Failed to push(..)");
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Vec vs TensileVec: push into reserved storage
// =============================================================================

fn bench_push_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_reserved");
    configure_group(&mut group);

    for &size in sizes() {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s as u64 {
                    vec.push(i);
                }
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("TensileVec", size), &size, |b, &s| {
            let mut vec = TensileVec::with_capacity(s).expect("Failed to with_capacity(..)");
            b.iter(|| {
                vec.clear();
                for i in 0..s as u64 {
                    vec.push(i).expect("Failed to push(..)");
                }
                black_box(&vec);
            });
        });
    }

    group.finish();
}

// =============================================================================
// Vec vs TensileVec: insert at random positions
// =============================================================================

fn bench_insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");
    configure_group(&mut group);

    const INSERTS: usize = 256;

    for &size in sizes().iter().filter(|&&s| s <= 100_000) {
        let at = positions(size, INSERTS);
        group.throughput(Throughput::Elements(INSERTS as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u64).collect::<Vec<_>>(),
                |mut vec| {
                    for &index in &at {
                        vec.insert(index, 0);
                    }
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("TensileVec", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u64).collect::<TensileVec<_>>(),
                |mut vec| {
                    for &index in &at {
                        vec.insert(index, 0).expect("Failed to insert(..)");
                    }
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Vec vs TensileVec: erase from the front
// =============================================================================

fn bench_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase_front");
    configure_group(&mut group);

    const ERASES: usize = 64;

    for &size in sizes().iter().filter(|&&s| s >= ERASES && s <= 100_000) {
        group.throughput(Throughput::Elements(ERASES as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u64).collect::<Vec<_>>(),
                |mut vec| {
                    for _ in 0..ERASES {
                        vec.remove(0);
                    }
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("TensileVec", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u64).collect::<TensileVec<_>>(),
                |mut vec| {
                    for _ in 0..ERASES {
                        vec.erase(0);
                    }
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Vec vs TensileVec: resize with clones
// =============================================================================

fn bench_resize_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_strings");
    configure_group(&mut group);

    for &size in sizes().iter().filter(|&&s| s <= 100_000) {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec: Vec<String> = Vec::new();
                vec.resize(s, String::from("tensile"));
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("TensileVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec: TensileVec<String> = TensileVec::new();
                vec.resize(s, String::from("tensile"))
                    .expect("Failed to resize(..)");
                black_box(vec)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_from_empty,
    bench_push_reserved,
    bench_insert_random,
    bench_erase_front,
    bench_resize_strings,
);
criterion_main!(benches);
