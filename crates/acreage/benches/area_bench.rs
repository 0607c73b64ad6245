//! Criterion benchmarks for the geometry engine.
//! Focus sizes: n taps in {4, 16, 64, 256, 1024}.
//! Results land under target/criterion by default.

use acreage::geo::rand::{sample_ring, ReplayToken, RingCfg, VertexCount};
use acreage::geo::{centroid_bounds, fit_region, geodesic_area};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn ring_of(n: usize) -> Vec<acreage::geo::GeoPoint> {
    sample_ring(
        RingCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RingCfg::default()
        },
        ReplayToken { seed: 43, index: 0 },
    )
}

fn bench_geo(c: &mut Criterion) {
    let mut group = c.benchmark_group("geo");
    for &n in &[4usize, 16, 64, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("geodesic_area", n), &n, |b, &n| {
            b.iter_batched(
                || ring_of(n),
                |ring| {
                    let _a = geodesic_area(&ring);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("centroid_bounds", n), &n, |b, &n| {
            b.iter_batched(
                || ring_of(n),
                |ring| {
                    let _c = centroid_bounds(&ring);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("fit_region", n), &n, |b, &n| {
            b.iter_batched(
                || ring_of(n),
                |ring| {
                    let _r = fit_region(&ring);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geo);
criterion_main!(benches);
