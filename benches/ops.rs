//! Micro-operation benchmarks for the forgetting map.
//!
//! Run with: `cargo bench --bench ops`
//!
//! Measures per-operation latency for find and add, with and without
//! eviction pressure.

use std::hint::black_box;
use std::time::Instant;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use forgetmap::map::ForgettingMap;
use rand::Rng;

const CAPACITY: usize = 16_384;
const OPS: u64 = 100_000;

fn bench_find_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_hit_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("forgetting_map", |b| {
        b.iter_custom(|iters| {
            let map: ForgettingMap<u64, u64> = ForgettingMap::new(CAPACITY);
            for i in 0..CAPACITY as u64 {
                map.add(i, i).unwrap();
            }
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    let key = i % (CAPACITY as u64);
                    black_box(map.find(&key).unwrap());
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

fn bench_find_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_miss_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("forgetting_map", |b| {
        b.iter_custom(|iters| {
            let map: ForgettingMap<u64, u64> = ForgettingMap::new(CAPACITY);
            for i in 0..CAPACITY as u64 {
                map.add(i, i).unwrap();
            }
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    let key = (CAPACITY as u64) + i;
                    black_box(map.find(&key).unwrap());
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

fn bench_add_below_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("below_capacity", |b| {
        b.iter_custom(|iters| {
            let mut elapsed = std::time::Duration::ZERO;
            for _ in 0..iters {
                let map: ForgettingMap<u64, u64> = ForgettingMap::new(OPS as usize + 1);
                let start = Instant::now();
                for i in 0..OPS {
                    black_box(map.add(i, i).unwrap());
                }
                elapsed += start.elapsed();
            }
            elapsed
        })
    });

    group.finish();
}

// Smaller batch: each eviction pays an O(capacity) selection scan.
const EVICT_OPS: u64 = 10_000;

fn bench_add_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_evict_ns");
    group.throughput(Throughput::Elements(EVICT_OPS));

    // Every add over a full, fully-tracked map pays one min-scan.
    group.bench_function("eviction_pressure", |b| {
        b.iter_custom(|iters| {
            let capacity = 1_024;
            let mut rng = rand::rng();
            let mut elapsed = std::time::Duration::ZERO;
            for _ in 0..iters {
                let map: ForgettingMap<u64, u64> = ForgettingMap::new(capacity);
                for i in 0..capacity as u64 {
                    map.add(i, i).unwrap();
                    map.find(&i).unwrap();
                }
                let start = Instant::now();
                for i in 0..EVICT_OPS {
                    let key = capacity as u64 + i;
                    black_box(map.add(key, key).unwrap());
                    // Re-track so the next eviction has candidates; skew
                    // counts so ties stay common.
                    let finds = rng.random_range(1..=2);
                    for _ in 0..finds {
                        map.find(&key).unwrap();
                    }
                }
                elapsed += start.elapsed();
            }
            elapsed
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_find_hit,
    bench_find_miss,
    bench_add_below_capacity,
    bench_add_with_eviction
);
criterion_main!(benches);
