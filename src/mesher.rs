//! Lattice iteration over a query volume.

use glam::Vec3;

use crate::cell::cell_triangles;
use crate::field::ScalarField;
use crate::tables::CORNER_OFFSETS;
use crate::types::{Aabb, Triangle};

/// Mesh every cell in the lattice that tiles `bounds`.
///
/// Steps x and y ascending and z descending (the bounds' descending-z
/// convention, see [`Aabb`]), in increments of `cell_size`. Loop bounds are
/// strict, so a fractional remainder cell at the far boundary is left
/// unscanned. Floating-point stepping accumulates rounding drift over long
/// spans; fine for visual meshing, not for exactness-sensitive use.
///
/// Iteration order is deterministic, so for a stateless field two calls with
/// the same arguments produce bit-identical triangle lists.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "mesher::mesh_volume"))]
pub fn mesh_volume<F: ScalarField + ?Sized>(field: &F, bounds: &Aabb, cell_size: f32) -> Vec<Triangle> {
  let mut triangles = Vec::new();

  let mut x = bounds.min.x;
  while x < bounds.max.x {
    let mut y = bounds.min.y;
    while y < bounds.max.y {
      let mut z = bounds.min.z;
      while z > bounds.max.z {
        // Right-handed system, z decreasing. The cell base sits one step
        // below z so the cell volume stays inside the bounds.
        mesh_cell(field, Vec3::new(x, y, z - cell_size), cell_size, &mut triangles);
        z -= cell_size;
      }
      y += cell_size;
    }
    x += cell_size;
  }

  triangles
}

/// Sample one cell's 8 corners and append its triangles.
fn mesh_cell<F: ScalarField + ?Sized>(
  field: &F,
  cell_min: Vec3,
  cell_size: f32,
  out: &mut Vec<Triangle>,
) {
  let mut samples = [0.0f32; 8];
  for (i, sample) in samples.iter_mut().enumerate() {
    let corner = cell_min + CORNER_OFFSETS[i] * cell_size;
    *sample = field.sample(corner.x, corner.y, corner.z);
  }

  out.extend(cell_triangles(&samples, cell_min, cell_size));
}

#[cfg(test)]
#[path = "mesher_test.rs"]
mod mesher_test;
