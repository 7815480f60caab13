// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_kdtree::KdTree;

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

fn gen_uniform_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64(), rng.next_f64()))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64(), rng.next_f64()));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let x = (cx + (rng.next_f64() - 0.5) * spread).clamp(0.0, 1.0);
            let y = (cy + (rng.next_f64() - 0.5) * spread).clamp(0.0, 1.0);
            out.push(Point::new(x, y));
        }
    }
    out
}

/// Strictly increasing coordinates: every point hangs off the previous one.
fn gen_sorted_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            Point::new(t, t)
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_insert");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter_batched(
                KdTree::new,
                |mut tree| {
                    for &p in &points {
                        tree.insert(p);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_clustered_points(20, 500, 0.05);
    group.bench_function("clustered_n10000", |b| {
        b.iter_batched(
            KdTree::new,
            |mut tree| {
                tree.extend(points.iter().copied());
                black_box(tree.height());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_query");
    for &n in &[1_000usize, 10_000, 100_000] {
        let tree: KdTree = gen_uniform_points(n).into_iter().collect();
        let mut rng = Rng::new(0xBADC_F00D_1234_5678);
        let targets: Vec<Point> = (0..256)
            .map(|_| Point::new(rng.next_f64(), rng.next_f64()))
            .collect();
        group.throughput(Throughput::Elements(targets.len() as u64));

        group.bench_function(format!("nearest_n{}", n), |b| {
            b.iter(|| {
                for &q in &targets {
                    black_box(tree.nearest(q));
                }
            })
        });

        group.bench_function(format!("contains_n{}", n), |b| {
            b.iter(|| {
                for &q in &targets {
                    black_box(tree.contains(q));
                }
            })
        });

        group.bench_function(format!("range_small_n{}", n), |b| {
            b.iter(|| {
                for &q in &targets {
                    let r = Rect::new(q.x, q.y, q.x + 0.05, q.y + 0.05);
                    black_box(tree.range(r).count());
                }
            })
        });
    }
    group.finish();
}

fn bench_degenerate_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_sorted_chain");
    let tree: KdTree = gen_sorted_points(4_096).into_iter().collect();
    group.bench_function("nearest_n4096", |b| {
        b.iter(|| black_box(tree.nearest(Point::new(0.5, 0.25))))
    });
    group.bench_function("range_n4096", |b| {
        b.iter(|| black_box(tree.range(Rect::new(0.0, 0.0, 0.1, 0.1)).count()))
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_queries, bench_degenerate_chain);
criterion_main!(benches);
