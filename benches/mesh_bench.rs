//! Benchmarks for lattice meshing on analytic and noise-backed fields.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use marching_terrain::{
  chunk_bounds, mesh_volume, Aabb, LayeredTerrain, ScalarField, Sphere,
};

/// Benchmark a sphere at a fixed resolution.
fn bench_sphere(c: &mut Criterion) {
  let sphere = Sphere::new(12.0);
  let bounds = sphere.bounds();

  c.bench_function("mesh_volume (sphere r=12, cell 0.5)", |b| {
    b.iter(|| {
      let triangles = mesh_volume(black_box(&sphere), black_box(&bounds), 0.5);
      black_box(triangles)
    })
  });
}

/// Cell size sweep over the same sphere.
fn bench_resolution_sweep(c: &mut Criterion) {
  let mut group = c.benchmark_group("resolution_sweep");
  let sphere = Sphere::new(12.0);
  let bounds = sphere.bounds();

  for cell_size in [2.0f32, 1.0, 0.5, 0.25] {
    group.bench_with_input(
      BenchmarkId::from_parameter(format!("cell={}", cell_size)),
      &cell_size,
      |b, &cell_size| b.iter(|| mesh_volume(black_box(&sphere), black_box(&bounds), cell_size)),
    );
  }

  group.finish();
}

/// One streaming-sized chunk of layered noise terrain, the hot path of the
/// worker pool.
fn bench_terrain_chunk(c: &mut Criterion) {
  let terrain = LayeredTerrain::new();
  let bounds = chunk_bounds(glam::IVec3::new(0, -1, 0), 8.0);

  c.bench_function("mesh_volume (terrain chunk 8³, cell 1.0)", |b| {
    b.iter(|| {
      let triangles = mesh_volume(black_box(&terrain), black_box(&bounds), 1.0);
      black_box(triangles)
    })
  });
}

/// Field sampling cost alone, to separate it from table lookups.
fn bench_field_sampling(c: &mut Criterion) {
  let terrain = LayeredTerrain::new();

  c.bench_function("LayeredTerrain::sample (4096 points)", |b| {
    b.iter(|| {
      let mut acc = 0.0f32;
      for i in 0..4096 {
        let p = Vec3::splat(i as f32 * 0.37);
        acc += terrain.sample(black_box(p.x), black_box(p.y), -black_box(p.z));
      }
      black_box(acc)
    })
  });
}

/// Empty volumes still pay the full sampling cost.
fn bench_empty_volume(c: &mut Criterion) {
  let air = |_x: f32, _y: f32, _z: f32| -1.0f32;
  let bounds = Aabb::new(Vec3::new(0.0, 0.0, 16.0), Vec3::new(16.0, 16.0, 0.0));

  c.bench_function("mesh_volume (empty 16³, cell 1.0)", |b| {
    b.iter(|| mesh_volume(black_box(&air), black_box(&bounds), 1.0))
  });
}

criterion_group!(
  benches,
  bench_sphere,
  bench_resolution_sweep,
  bench_terrain_chunk,
  bench_field_sampling,
  bench_empty_volume
);
criterion_main!(benches);
