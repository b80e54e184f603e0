//! Cell classification: 8 corner samples in, triangles out.
//!
//! A cell is an axis-aligned cube identified by its minimum corner and edge
//! length. It exists only for the duration of a classification call; nothing
//! here is stored or shared, so the classifier is safe to call from any
//! number of threads at once.

use glam::Vec3;
use smallvec::SmallVec;

use crate::tables::{CORNER_OFFSETS, REGULAR_CELL_CLASS, REGULAR_CELL_DATA, REGULAR_VERTEX_DATA};
use crate::types::Triangle;

/// Most cases emit at most 4 triangles; one class emits 5.
pub type CellTriangles = SmallVec<[Triangle; 5]>;

/// Build the 8-bit case index from corner samples.
///
/// Bit i is set when corner i is strictly inside (`sample > 0`). A sample
/// exactly on the surface counts as outside.
#[inline]
pub fn case_index(samples: &[f32; 8]) -> u8 {
  let mut case = 0u8;
  for (i, &s) in samples.iter().enumerate() {
    if s > 0.0 {
      case |= 1 << i;
    }
  }
  case
}

/// Triangulate one cell.
///
/// Each triangle vertex is the midpoint of a cube edge whose corner samples
/// straddle the surface, scaled by `cell_size` and translated by `cell_min`
/// into world space. Homogeneous cells (all corners one sign) emit nothing.
/// Total over all 256 cases; there is no failure path.
pub fn cell_triangles(samples: &[f32; 8], cell_min: Vec3, cell_size: f32) -> CellTriangles {
  let case = case_index(samples) as usize;
  let class = REGULAR_CELL_CLASS[case] as usize;
  let data = &REGULAR_CELL_DATA[class];

  let mut out = CellTriangles::new();
  if data.vertex_count() == 0 {
    return out;
  }

  for tri in 0..data.triangle_count() {
    let mut vertices = [Vec3::ZERO; 3];
    for (j, vertex) in vertices.iter_mut().enumerate() {
      let index = data.vertex_index[tri * 3 + j] as usize;

      let edge = REGULAR_VERTEX_DATA[case][index];
      let c0 = (edge >> 4) as usize;
      let c1 = (edge & 0x0F) as usize;

      let midpoint = (CORNER_OFFSETS[c0] + CORNER_OFFSETS[c1]) * 0.5;
      *vertex = midpoint * cell_size + cell_min;
    }
    out.push(Triangle { vertices });
  }

  out
}

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;
