//! Criterion benchmarks for the quadratic simple-polygon scan, plus bounding
//! boxes of the same rings in a separate group.
//! Focus sizes: n in {8, 64, 512}. Star rings are simple, so every pair is
//! visited (worst case for the scan).

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use geometry_utils::{polygon_is_simple, BoundingBox, Point};
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

fn bench_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("simple");
    for &n in &[8usize, 64, 512] {
        let ring = random_star(n, 43);
        group.bench_with_input(BenchmarkId::new("polygon_is_simple", n), &ring, |b, ring| {
            b.iter(|| polygon_is_simple(black_box(ring)).unwrap())
        });
    }
    group.finish();
}

fn bench_bbox(c: &mut Criterion) {
    let mut group = c.benchmark_group("bbox");
    for &n in &[8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::new("from_points", n), &n, |b, &n| {
            b.iter_batched(
                || random_star(n, 44),
                |pts| BoundingBox::from_points(black_box(&pts)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_simple, bench_bbox);
criterion_main!(benches);
