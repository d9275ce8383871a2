//! Benchmarks for tup-rs kernel operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tup_core::sink::{new, Assign};
use tup_math::{batch, ops3, simd, Mat4, StdMath, TableMath, Vec3};

/// Scalar lerp formulas, both through the kernel.
fn bench_lerp(c: &mut Criterion) {
    let mut group = c.benchmark_group("lerp");
    let a = Vec3::new(0.1, 2.0, -3.0);
    let b = Vec3::new(5.0, -1.0, 0.25);

    group.bench_function("lerp", |bench| {
        bench.iter(|| -> Vec3 { ops3::lerp(black_box(a), black_box(b), black_box(0.37), new()) })
    });

    group.bench_function("fast_lerp", |bench| {
        bench.iter(|| -> Vec3 {
            ops3::fast_lerp(black_box(a), black_box(b), black_box(0.37), new())
        })
    });

    group.bench_function("lerp_assign", |bench| {
        let mut v = a;
        bench.iter(|| {
            ops3::lerp(v, black_box(b), black_box(0.01), Assign(&mut v));
        })
    });

    group.finish();
}

/// Axis-angle rotation with the standard and table providers.
fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate");
    let v = Vec3::new(1.0, 2.0, 3.0);
    let axis = Vec3::new(1.0, 1.0, 0.0).normalize();
    let table = TableMath::default();

    group.bench_function("std", |bench| {
        bench.iter(|| -> Vec3 {
            ops3::rotate_rad_with(black_box(v), axis, black_box(0.7), &StdMath, new())
        })
    });

    group.bench_function("table", |bench| {
        bench.iter(|| -> Vec3 {
            ops3::rotate_rad_with(black_box(v), axis, black_box(0.7), &table, new())
        })
    });

    group.finish();
}

/// SIMD batch interpolation against a per-element scalar loop.
fn bench_batch_lerp(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_lerp");

    for size in [1_000, 100_000].iter() {
        let a: Vec<f32> = (0..*size).map(|i| i as f32 * 0.001).collect();
        let b: Vec<f32> = (0..*size).map(|i| 1.0 - i as f32 * 0.002).collect();
        let mut out = vec![0.0f32; *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("simd", size), &(), |bench, _| {
            bench.iter(|| simd::batch_lerp_into(&a, &b, black_box(0.4), &mut out))
        });

        group.bench_with_input(BenchmarkId::new("scalar", size), &(), |bench, _| {
            bench.iter(|| {
                for ((o, &x), &y) in out.iter_mut().zip(&a).zip(&b) {
                    *o = tup_math::lerp(x, y, black_box(0.4));
                }
            })
        });
    }

    group.finish();
}

/// Packed point cloud transforms, serial and parallel.
fn bench_transform_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_points");
    let m = Mat4::from_translation([1.0f32, 2.0, 3.0]) * Mat4::from_axis_angle([0.0f32, 1.0, 0.0], 0.5);

    for count in [1_000, 100_000].iter() {
        let src: Vec<f32> = (0..count * 3).map(|i| (i as f32 * 0.01).sin()).collect();
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("serial", count), &src, |bench, src| {
            let mut buf = src.clone();
            bench.iter(|| batch::transform_points(&mut buf, &m))
        });

        group.bench_with_input(BenchmarkId::new("parallel", count), &src, |bench, src| {
            let mut buf = src.clone();
            bench.iter(|| batch::par_transform_points(&mut buf, &m))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lerp,
    bench_rotate,
    bench_batch_lerp,
    bench_transform_points,
);
criterion_main!(benches);
