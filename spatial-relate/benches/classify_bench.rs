use std::f64::consts::TAU;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

use spatial_relate::Relator;
use spatial_relate::geometry::Geometry;
use spatial_relate::geometry::primitives::{Point, Polygon, Segment};
use spatial_relate::util::{PolygonMode, RelateConfig};

criterion_main!(benches);
criterion_group!(benches, pairwise_bench, polygon_mode_bench);

const N_GEOMETRIES: usize = 60;

/// Regular polygon with `n` vertices
fn regular_polygon(center: Point, radius: f64, n: usize) -> Polygon {
    let vertices = (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            Point(center.0 + radius * angle.cos(), center.1 + radius * angle.sin())
        })
        .collect();
    Polygon::new(vertices).unwrap()
}

fn random_geometries(rng: &mut SmallRng, n_vertices: usize) -> Vec<Geometry> {
    (0..N_GEOMETRIES)
        .map(|i| {
            let p = Point(rng.random_range(0.0..50.0), rng.random_range(0.0..50.0));
            match i % 3 {
                0 => Geometry::Point(p),
                1 => {
                    let q = Point(p.0 + rng.random_range(1.0..10.0), p.1 - rng.random_range(1.0..10.0));
                    Geometry::Segment(Segment::new(p, q).unwrap())
                }
                _ => Geometry::Polygon(regular_polygon(p, rng.random_range(2.0..10.0), n_vertices)),
            }
        })
        .collect()
}

fn pairwise_bench(c: &mut Criterion) {
    let relator = Relator::default();
    let mut group = c.benchmark_group("pairwise");
    for n_vertices in [4, 16, 64] {
        let geoms = random_geometries(&mut SmallRng::seed_from_u64(0), n_vertices);
        group.bench_function(BenchmarkId::from_parameter(n_vertices), |b| {
            b.iter(|| relator.pairwise(black_box(&geoms)).unwrap())
        });
    }
    group.finish();
}

fn polygon_mode_bench(c: &mut Criterion) {
    let a = regular_polygon(Point(0.0, 0.0), 10.0, 32);
    let b = regular_polygon(Point(8.0, 3.0), 10.0, 32);
    let (a, b) = (Geometry::Polygon(a), Geometry::Polygon(b));

    let mut group = c.benchmark_group("polygon_mode");
    for mode in [PolygonMode::VertexSampling, PolygonMode::EdgeIntersection] {
        let relator = Relator::new(RelateConfig {
            polygon_mode: mode,
            ..RelateConfig::default()
        })
        .unwrap();
        group.bench_function(format!("{mode:?}"), |bencher| {
            bencher.iter(|| relator.classify(black_box(&a), black_box(&b)).unwrap())
        });
    }
    let relator = Relator::default();
    group.bench_function("Matrix", |bencher| {
        bencher.iter(|| relator.relate_matrix(black_box(&a), black_box(&b)))
    });
    group.finish();
}
