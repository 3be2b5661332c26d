//! Criterion benchmarks for point-in-polygon.
//! Ring sizes n in {4, 32, 256}; query batches of 10k points.
//! Compares the batched edge-outer loop against per-point calls.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geometry_utils::{polygon_inside, polygon_inside_many, Point};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_star(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|k| {
            let theta = k as f64 / n as f64 * std::f64::consts::TAU;
            let r = rng.gen_range(0.5..1.5);
            Vector2::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}

fn random_queries(m: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| Vector2::new(rng.gen_range(-1.6..1.6), rng.gen_range(-1.6..1.6)))
        .collect()
}

fn bench_inside(c: &mut Criterion) {
    let mut group = c.benchmark_group("inside");
    let queries = random_queries(10_000, 7);
    for &n in &[4usize, 32, 256] {
        let ring = random_star(n, 42);
        group.bench_with_input(BenchmarkId::new("batched", n), &ring, |b, ring| {
            b.iter(|| polygon_inside_many(ring, &queries).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("per_point", n), &ring, |b, ring| {
            b.iter(|| {
                queries
                    .iter()
                    .map(|q| polygon_inside(ring, *q).unwrap())
                    .filter(|x| *x)
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_inside);
criterion_main!(benches);
