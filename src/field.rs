//! Scalar field sources.
//!
//! A field is a pure `(x, y, z) -> signed distance` function: positive
//! inside the surface, negative outside. Fields are sampled concurrently
//! from every worker thread, so implementors must be `Sync` and stateless
//! per call.

use glam::Vec3;
use libnoise::{Generator, Simplex, Source};

use crate::types::Aabb;

/// Signed-distance field evaluated at world-space points.
///
/// Total over the real domain; NaN/Inf inputs are undefined behavior rather
/// than handled.
pub trait ScalarField: Sync {
  fn sample(&self, x: f32, y: f32, z: f32) -> f32;
}

/// Any thread-safe closure works as a field.
impl<F> ScalarField for F
where
  F: Fn(f32, f32, f32) -> f32 + Sync,
{
  #[inline]
  fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
    self(x, y, z)
  }
}

/// Analytic sphere field.
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
  pub radius: f32,
  pub center: Vec3,
}

impl Sphere {
  pub fn new(radius: f32) -> Self {
    Self {
      radius,
      center: Vec3::ZERO,
    }
  }

  pub fn with_center(mut self, center: Vec3) -> Self {
    self.center = center;
    self
  }

  /// Tight query volume around the surface, in descending-z convention.
  pub fn bounds(&self) -> Aabb {
    Aabb::new(
      self.center + Vec3::new(-self.radius, -self.radius, self.radius),
      self.center + Vec3::new(self.radius, self.radius, -self.radius),
    )
  }
}

impl ScalarField for Sphere {
  #[inline]
  fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
    self.radius - Vec3::new(x, y, z).distance(self.center)
  }
}

/// Analytic axis-aligned cube field (Chebyshev distance).
#[derive(Clone, Copy, Debug)]
pub struct Cube {
  /// Half the edge length.
  pub radius: f32,
  pub center: Vec3,
}

impl Cube {
  pub fn new(radius: f32) -> Self {
    Self {
      radius,
      center: Vec3::ZERO,
    }
  }

  pub fn with_center(mut self, center: Vec3) -> Self {
    self.center = center;
    self
  }

  /// Tight query volume around the surface, in descending-z convention.
  pub fn bounds(&self) -> Aabb {
    Aabb::new(
      self.center + Vec3::new(-self.radius, -self.radius, self.radius),
      self.center + Vec3::new(self.radius, self.radius, -self.radius),
    )
  }
}

impl ScalarField for Cube {
  #[inline]
  fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
    let d = (Vec3::new(x, y, z) - self.center).abs();
    self.radius - d.x.max(d.y).max(d.z)
  }
}

/// Seeds, amplitudes, and frequency factors of the terrain's nine simplex
/// layers.
const LAYER_SEEDS: [i64; 9] = [-9999, 100, 2500, -2300, 500, 12345, -12345, 10, 9999];
const LAYER_AMPLITUDES: [f32; 9] = [2.0, 1.0, 5.0, 3.0, 0.5, 3.0, 8.0, 0.75, 1.0];
const LAYER_FREQUENCIES: [f32; 9] = [1.0, 0.2, 0.5, 3.25, 2.0, 0.2, 0.25, 0.1, 3.0];

struct TerrainLayer {
  noise: Simplex<3>,
  amplitude: f32,
  frequency: f32,
}

/// Terrain density: a ground-plane bias plus nine simplex octaves at mixed
/// amplitudes and frequencies.
///
/// Density is positive underground and fades negative with height, giving
/// rolling hills with overhangs where the high-amplitude layers dominate.
pub struct LayeredTerrain {
  layers: Vec<TerrainLayer>,
}

impl Default for LayeredTerrain {
  fn default() -> Self {
    Self::new()
  }
}

impl LayeredTerrain {
  pub fn new() -> Self {
    let layers = (0..9)
      .map(|i| TerrainLayer {
        noise: Source::simplex(LAYER_SEEDS[i] as u64),
        amplitude: LAYER_AMPLITUDES[i],
        frequency: LAYER_FREQUENCIES[i],
      })
      .collect();
    Self { layers }
  }
}

impl ScalarField for LayeredTerrain {
  fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
    // Below y=0 the base density saturates at +5, so caves only come from
    // the noise layers overpowering it.
    let mut density = (-y).clamp(0.0, 1.0) * 5.0;
    for layer in &self.layers {
      let f = layer.frequency as f64;
      let n = layer.noise.sample([x as f64 * f, y as f64 * f, z as f64 * f]);
      density += n as f32 * layer.amplitude;
    }
    density
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
