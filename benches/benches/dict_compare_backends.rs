// Copyright 2025 the Pointdict Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pointdict_index::{BstPointDict, Point, PointDict};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_points(count: usize, extent: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

/// Sorted by x: worst case for both trees (degenerate chains).
fn gen_sorted_points(count: usize) -> Vec<Point> {
    (0..count).map(|i| Point::new(i as f64, 0.0)).collect()
}

fn gen_queries(count: usize, extent: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1024usize, 4096, 16384] {
        let points = gen_uniform_points(n, 1000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("kd_uniform_n{}", n), |b| {
            b.iter_batched(
                || (points.clone(), (0..n).collect::<Vec<usize>>()),
                |(pts, vals)| {
                    let dict: PointDict<usize> = PointDict::from_pairs(pts, vals);
                    black_box(dict.len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("bst_uniform_n{}", n), |b| {
            b.iter_batched(
                || (points.clone(), (0..n).collect::<Vec<usize>>()),
                |(pts, vals)| {
                    let dict: BstPointDict<usize> = BstPointDict::from_pairs(pts, vals);
                    black_box(dict.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_ball_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("ball_search");
    let n = 16384usize;
    let points = gen_uniform_points(n, 1000.0);
    let queries = gen_queries(256, 1000.0);

    let kd: PointDict<usize> = PointDict::from_pairs(points.iter().copied(), 0..n);
    let bst: BstPointDict<usize> = BstPointDict::from_pairs(points.iter().copied(), 0..n);

    for &radius in &[10.0f64, 50.0, 200.0] {
        group.bench_function(format!("kd_r{}", radius), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for q in &queries {
                    total += kd.ball_search(*q, radius).len();
                }
                black_box(total);
            })
        });
        group.bench_function(format!("bst_r{}", radius), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for q in &queries {
                    total += bst.ball_search(*q, radius).len();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_exact_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_search");
    let n = 16384usize;
    let points = gen_uniform_points(n, 1000.0);

    let kd: PointDict<usize> = PointDict::from_pairs(points.iter().copied(), 0..n);
    let bst: BstPointDict<usize> = BstPointDict::from_pairs(points.iter().copied(), 0..n);

    group.bench_function("kd_hit_all", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for p in &points {
                hits += usize::from(kd.exact_search(*p).is_some());
            }
            black_box(hits);
        })
    });
    group.bench_function("bst_hit_all", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for p in &points {
                hits += usize::from(bst.exact_search(*p).is_some());
            }
            black_box(hits);
        })
    });
    group.finish();
}

fn bench_degenerate_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("degenerate_chain");
    let n = 2048usize;
    let points = gen_sorted_points(n);
    let queries = gen_queries(64, n as f64);

    let kd: PointDict<usize> = PointDict::from_pairs(points.iter().copied(), 0..n);
    let bst: BstPointDict<usize> = BstPointDict::from_pairs(points.iter().copied(), 0..n);

    group.bench_function("kd_ball_sorted_input", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in &queries {
                total += kd.ball_search(*q, 16.0).len();
            }
            black_box(total);
        })
    });
    group.bench_function("bst_ball_sorted_input", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in &queries {
                total += bst.ball_search(*q, 16.0).len();
            }
            black_box(total);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_ball_search,
    bench_exact_search,
    bench_degenerate_chain,
);
criterion_main!(benches);
