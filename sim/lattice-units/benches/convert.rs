//! Benchmarks for coordinate conversion.
//!
//! Run with: cargo bench -p lattice-units
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p lattice-units -- --save-baseline main
//! 2. After changes: cargo bench -p lattice-units -- --baseline main

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use lattice_units::{CoordinateConverter, DomainConfig};
use nalgebra::Point3;

// =============================================================================
// Sample Generation
// =============================================================================

/// Deterministic positions spread across the physical bounding box.
fn sample_points(count: usize) -> Vec<Point3<f64>> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            let jitter = (i % 97) as f64 / 97.0;
            Point3::new(2.0 * t, 4.0 * (1.0 - t), 8.0 * jitter)
        })
        .collect()
}

// =============================================================================
// Conversion Benchmarks
// =============================================================================

fn bench_coordinate(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate");

    let config = DomainConfig::new([(0.0, 2.0), (0.0, 4.0), (0.0, 8.0)], [256, 128, 64])
        .padding([2, 2, 2, 2, 2, 2]);
    let converter = CoordinateConverter::new(&config).expect("valid domain");

    let points = sample_points(4096);
    let nodes: Vec<[i32; 3]> = points.iter().map(|p| converter.to_lattice(*p)).collect();

    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("to_lattice", |b| {
        b.iter(|| {
            for point in &points {
                black_box(converter.to_lattice(black_box(*point)));
            }
        });
    });

    group.bench_function("from_lattice", |b| {
        b.iter(|| {
            for node in &nodes {
                black_box(converter.from_lattice(black_box(*node)));
            }
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_coordinate);
criterion_main!(benches);
