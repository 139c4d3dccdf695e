//! Criterion benchmarks for the quickhull engine.
//!
//! Measures `build` over random point clouds of increasing size, plus the
//! two degenerate paths (coplanar, collinear) that skip the 3-D driver
//! entirely.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quickhull::Engine;
use quickhull_math::Point3;

struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 11) as f64) / ((1u64 << 53) as f64)
    }
}

fn random_cloud(seed: u64, n: usize) -> Vec<Point3> {
    let mut lcg = Lcg(seed);
    (0..n)
        .map(|_| {
            Point3::new(
                lcg.next_f64() * 10.0 - 5.0,
                lcg.next_f64() * 10.0 - 5.0,
                lcg.next_f64() * 10.0 - 5.0,
            )
        })
        .collect()
}

fn coplanar_grid(n: usize) -> Vec<Point3> {
    let side = (n as f64).sqrt().ceil() as usize;
    let mut points = Vec::with_capacity(side * side);
    for i in 0..side {
        for j in 0..side {
            points.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }
    points
}

fn bench_random_clouds(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_random_cloud");

    for &n in &[50usize, 200, 1000, 5000] {
        let points = random_cloud(0xC0FFEE, n);
        group.bench_with_input(BenchmarkId::new("build", n), &points, |bencher, points| {
            bencher.iter(|| {
                let mut engine = Engine::new();
                engine.initialize(black_box(points)).unwrap();
                engine.build().unwrap()
            })
        });
    }

    group.finish();
}

fn bench_coplanar_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_coplanar");

    for &n in &[64usize, 1024] {
        let points = coplanar_grid(n);
        group.bench_with_input(BenchmarkId::new("build", n), &points, |bencher, points| {
            bencher.iter(|| {
                let mut engine = Engine::new();
                engine.initialize(black_box(points)).unwrap();
                engine.build().unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_clouds, bench_coplanar_fallback);
criterion_main!(benches);
