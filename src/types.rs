//! Core data types shared by the mesher and the streaming pipeline.

use glam::{Vec3, Vec4};

/// A single output triangle in world space.
///
/// Normals are never stored; they are derived on demand for flat shading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
  pub vertices: [Vec3; 3],
}

impl Triangle {
  pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
    Self {
      vertices: [v0, v1, v2],
    }
  }

  /// Face normal via the cross product of the two edge vectors.
  ///
  /// Points out of the solid region for triangles produced by the cell
  /// classifier. Degenerate triangles yield a non-finite result; the
  /// classifier never emits them.
  #[inline]
  pub fn normal(&self) -> Vec3 {
    let [v0, v1, v2] = self.vertices;
    (v1 - v0).cross(v2 - v0).normalize()
  }
}

/// Renderable vertex written by the worker pool, uploaded verbatim.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
  pub position: Vec3,
  pub color: Vec4,
  pub normal: Vec3,
}

/// Axis-aligned bounding box with a descending z axis.
///
/// The lattice walks z in a right-handed, decreasing direction, so by crate
/// convention `min.x < max.x`, `min.y < max.y`, and `min.z > max.z`. Chunk
/// bounds, window bounds, and mesher query volumes all use this shape; a box
/// built with an ascending z span makes the lattice iteration produce zero
/// cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
  pub min: Vec3,
  pub max: Vec3,
}

impl Aabb {
  /// Create an AABB from its corners.
  ///
  /// # Panics
  /// Debug-asserts the descending-z convention.
  pub fn new(min: Vec3, max: Vec3) -> Self {
    debug_assert!(
      min.x < max.x && min.y < max.y && min.z > max.z,
      "Aabb expects min.x < max.x, min.y < max.y, min.z > max.z"
    );
    Self { min, max }
  }

  /// Check whether two boxes share any point. Touching faces count.
  #[inline]
  pub fn intersects(&self, other: &Aabb) -> bool {
    self.min.x <= other.max.x
      && other.min.x <= self.max.x
      && self.min.y <= other.max.y
      && other.min.y <= self.max.y
      // z spans are [max.z, min.z]
      && self.max.z <= other.min.z
      && other.max.z <= self.min.z
  }

  /// Check whether a point lies inside the box (boundary inclusive).
  #[inline]
  pub fn contains_point(&self, point: Vec3) -> bool {
    point.x >= self.min.x
      && point.x <= self.max.x
      && point.y >= self.min.y
      && point.y <= self.max.y
      && point.z <= self.min.z
      && point.z >= self.max.z
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
