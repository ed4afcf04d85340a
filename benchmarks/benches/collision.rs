//! Collision query benchmarks (criterion - wall-clock time).
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench collision
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- narrowphase

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Mat4, Vec3};
use glidemesh::{Collidable, SphereQuery, Transformable};
use glidemesh_bench::*;

const SIZES: [usize; 4] = [8, 16, 32, 64];
const DT: f32 = 1.0 / 60.0;

// ---------------------------------------------------------------------------
// Broadphase
// ---------------------------------------------------------------------------

fn bench_broadphase(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadphase/miss");
    let far = Mat4::from_translation(Vec3::new(1000.0, 0.0, 0.0));
    let query = SphereQuery::new(Vec3::new(0.0, 0.5, 0.0), 0.5).with_padding(0.1, 0.2);

    for &n in &SIZES {
        let mut body = setup_body(n);
        group.bench_with_input(BenchmarkId::from_parameter(n * n * 2), &n, |b, _| {
            b.iter(|| body.react_to_collision(&far, &query, &DT));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Mesh transform
// ---------------------------------------------------------------------------

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/faces");
    let matrix = Mat4::from_rotation_y(0.3) * Mat4::from_translation(Vec3::new(1.0, 0.0, 2.0));

    for &n in &SIZES {
        let mut body = setup_body(n);
        group.bench_with_input(BenchmarkId::from_parameter(n * n * 2), &n, |b, _| {
            b.iter(|| body.transform(&matrix));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Narrowphase + resolution
// ---------------------------------------------------------------------------

fn bench_narrowphase(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("narrowphase/floor_hit");
        let query = SphereQuery::new(Vec3::new(0.3, 0.0, 0.2), 0.5).with_padding(0.1, 0.2);
        for &n in &SIZES {
            let mut body = setup_body(n);
            group.bench_with_input(BenchmarkId::from_parameter(n * n * 2), &n, |b, _| {
                b.iter(|| body.react_to_collision_in_place(&query, &DT));
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("narrowphase/full_query");
        for &n in &SIZES {
            let mut body = setup_body(n);
            // Near the +z border wall.
            let edge = n as f32 * 0.5 - 0.1;
            let query = SphereQuery::new(Vec3::new(0.0, 0.3, edge), 0.5).with_padding(0.1, 0.2);
            group.bench_with_input(BenchmarkId::from_parameter(n * n * 2), &n, |b, _| {
                b.iter(|| body.react_to_collision(&Mat4::IDENTITY, &query, &DT));
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_broadphase, bench_transform, bench_narrowphase);
criterion_main!(benches);
