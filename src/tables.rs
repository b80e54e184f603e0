//! Marching-cubes lookup tables for the regular cubic cell.
//!
//! Transvoxel-style two-level indexing: the 8-bit corner case maps to one of
//! 16 canonical triangulation classes, and a second per-case table resolves
//! each class vertex to the cube edge it sits on.
//!
//! # Cube Topology
//!
//! ```text
//!       6──────7         Corners (binary zyx):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     4─┼────5 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! # Usage
//!
//! Given 8 corner samples, build the case index (bit i set when corner i is
//! inside), then:
//!
//! ```text
//! class = REGULAR_CELL_CLASS[case]
//! data  = REGULAR_CELL_DATA[class]       // triangle fan over class vertices
//! edge  = REGULAR_VERTEX_DATA[case][v]   // high nibble, low nibble = corners
//! ```
//!
//! The vertex placed on an edge is the midpoint of its two corners. Triangles
//! wind so their face normals point out of the solid (positive) region.
//!
//! Table contents are fixed data; the class table's choice of triangulation
//! at ambiguous saddle configurations is deliberate and changing any entry
//! changes visible mesh topology.

use glam::Vec3;

/// Corner offsets of the unit cell, in canonical corner order.
pub const CORNER_OFFSETS: [Vec3; 8] = [
  Vec3::new(0.0, 0.0, 0.0),
  Vec3::new(1.0, 0.0, 0.0),
  Vec3::new(0.0, 1.0, 0.0),
  Vec3::new(1.0, 1.0, 0.0),
  Vec3::new(0.0, 0.0, 1.0),
  Vec3::new(1.0, 0.0, 1.0),
  Vec3::new(0.0, 1.0, 1.0),
  Vec3::new(1.0, 1.0, 1.0),
];

/// One canonical triangulation class: packed geometry counts plus the
/// triangle list as indices into the class's vertex set.
#[derive(Clone, Copy, Debug)]
pub struct CellData {
  /// High nibble: vertex count. Low nibble: triangle count.
  pub geometry_counts: u8,
  /// Triangle vertex indices, 3 per triangle, `triangle_count() * 3` used.
  pub vertex_index: [u8; 15],
}

impl CellData {
  /// Number of distinct edge vertices this class emits.
  pub const fn vertex_count(&self) -> usize {
    (self.geometry_counts >> 4) as usize
  }

  /// Number of triangles this class emits.
  pub const fn triangle_count(&self) -> usize {
    (self.geometry_counts & 0x0F) as usize
  }
}

/// Case index (8-bit corner mask) to canonical class.
pub const REGULAR_CELL_CLASS: [u8; 256] = [
  0x00, 0x01, 0x01, 0x03, 0x01, 0x03, 0x02, 0x04, 0x01, 0x02, 0x03, 0x04, 0x03, 0x04, 0x04, 0x03,
  0x01, 0x03, 0x02, 0x04, 0x02, 0x04, 0x06, 0x0C, 0x02, 0x05, 0x05, 0x0B, 0x05, 0x0A, 0x07, 0x04,
  0x01, 0x02, 0x03, 0x04, 0x02, 0x05, 0x05, 0x0A, 0x02, 0x06, 0x04, 0x0C, 0x05, 0x07, 0x0B, 0x04,
  0x03, 0x04, 0x04, 0x03, 0x05, 0x0B, 0x07, 0x04, 0x05, 0x07, 0x0A, 0x04, 0x08, 0x0E, 0x0E, 0x03,
  0x01, 0x02, 0x02, 0x05, 0x03, 0x04, 0x05, 0x0B, 0x02, 0x06, 0x05, 0x07, 0x04, 0x0C, 0x0A, 0x04,
  0x03, 0x04, 0x05, 0x0A, 0x04, 0x03, 0x07, 0x04, 0x05, 0x07, 0x08, 0x0E, 0x0B, 0x04, 0x0E, 0x03,
  0x02, 0x06, 0x05, 0x07, 0x05, 0x07, 0x08, 0x0E, 0x06, 0x09, 0x07, 0x0F, 0x07, 0x0F, 0x0E, 0x0D,
  0x04, 0x0C, 0x0B, 0x04, 0x0A, 0x04, 0x0E, 0x03, 0x07, 0x0F, 0x0E, 0x0D, 0x0E, 0x0D, 0x02, 0x01,
  0x01, 0x02, 0x02, 0x05, 0x02, 0x05, 0x06, 0x07, 0x03, 0x05, 0x04, 0x0A, 0x04, 0x0B, 0x0C, 0x04,
  0x02, 0x05, 0x06, 0x07, 0x06, 0x07, 0x09, 0x0F, 0x05, 0x08, 0x07, 0x0E, 0x07, 0x0E, 0x0F, 0x0D,
  0x03, 0x05, 0x04, 0x0B, 0x05, 0x08, 0x07, 0x0E, 0x04, 0x07, 0x03, 0x04, 0x0A, 0x0E, 0x04, 0x03,
  0x04, 0x0A, 0x0C, 0x04, 0x07, 0x0E, 0x0F, 0x0D, 0x0B, 0x0E, 0x04, 0x03, 0x0E, 0x02, 0x0D, 0x01,
  0x03, 0x05, 0x05, 0x08, 0x04, 0x0A, 0x07, 0x0E, 0x04, 0x07, 0x0B, 0x0E, 0x03, 0x04, 0x04, 0x03,
  0x04, 0x0B, 0x07, 0x0E, 0x0C, 0x04, 0x0F, 0x0D, 0x0A, 0x0E, 0x0E, 0x02, 0x04, 0x03, 0x0D, 0x01,
  0x04, 0x07, 0x0A, 0x0E, 0x0B, 0x0E, 0x0E, 0x02, 0x0C, 0x0F, 0x04, 0x0D, 0x04, 0x0D, 0x03, 0x01,
  0x03, 0x04, 0x04, 0x03, 0x04, 0x03, 0x0D, 0x01, 0x04, 0x0D, 0x03, 0x01, 0x03, 0x01, 0x01, 0x00,
];

/// Canonical triangulation per class.
pub const REGULAR_CELL_DATA: [CellData; 16] = [
  CellData { geometry_counts: 0x00, vertex_index: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0] },
  CellData { geometry_counts: 0x31, vertex_index: [0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0] },
  CellData { geometry_counts: 0x62, vertex_index: [0, 1, 2, 3, 4, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0] },
  CellData { geometry_counts: 0x42, vertex_index: [0, 1, 2, 0, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0] },
  CellData { geometry_counts: 0x53, vertex_index: [0, 1, 4, 1, 3, 4, 1, 2, 3, 0, 0, 0, 0, 0, 0] },
  CellData { geometry_counts: 0x73, vertex_index: [0, 1, 2, 0, 2, 3, 4, 5, 6, 0, 0, 0, 0, 0, 0] },
  CellData { geometry_counts: 0x93, vertex_index: [0, 1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0, 0, 0] },
  CellData { geometry_counts: 0x84, vertex_index: [0, 1, 4, 1, 3, 4, 1, 2, 3, 5, 6, 7, 0, 0, 0] },
  CellData { geometry_counts: 0x84, vertex_index: [0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7, 0, 0, 0] },
  CellData { geometry_counts: 0xC4, vertex_index: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 0, 0] },
  CellData { geometry_counts: 0x64, vertex_index: [0, 4, 5, 0, 1, 4, 1, 3, 4, 1, 2, 3, 0, 0, 0] },
  CellData { geometry_counts: 0x64, vertex_index: [0, 5, 4, 0, 4, 1, 1, 4, 3, 1, 3, 2, 0, 0, 0] },
  CellData { geometry_counts: 0x64, vertex_index: [0, 4, 5, 0, 3, 4, 0, 1, 3, 1, 2, 3, 0, 0, 0] },
  CellData { geometry_counts: 0x64, vertex_index: [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 0, 0] },
  CellData { geometry_counts: 0x75, vertex_index: [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 0, 5, 6] },
  CellData { geometry_counts: 0x95, vertex_index: [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 5, 6, 7, 8] },
];

/// Per case, per class vertex: the cube edge the vertex lies on, packed as
/// two 4-bit corner indices. Entries beyond the class's vertex count are
/// unused padding.
pub const REGULAR_VERTEX_DATA: [[u8; 12]; 256] = [
  [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x15, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x26, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x13, 0x02, 0x23, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x15, 0x13, 0x23, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x04, 0x13, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x15, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x37, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x37, 0x26, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x37, 0x26, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x15, 0x37, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x13, 0x04, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x46, 0x45, 0x15, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x26, 0x04, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x26, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x13, 0x02, 0x23, 0x26, 0x04, 0x46, 0x45, 0x00, 0x00, 0x00],
  [0x13, 0x23, 0x26, 0x46, 0x45, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x46, 0x45, 0x13, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x46, 0x45, 0x13, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x37, 0x23, 0x04, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x37, 0x15, 0x45, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x37, 0x26, 0x04, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x37, 0x26, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x37, 0x26, 0x02, 0x04, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00],
  [0x15, 0x37, 0x26, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x15, 0x45, 0x57, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x04, 0x15, 0x45, 0x57, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x57, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x45, 0x57, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x26, 0x15, 0x45, 0x57, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x26, 0x04, 0x15, 0x45, 0x57, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x57, 0x13, 0x02, 0x23, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x45, 0x57, 0x13, 0x23, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x37, 0x23, 0x15, 0x45, 0x57, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x04, 0x13, 0x37, 0x23, 0x15, 0x45, 0x57, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x57, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x45, 0x57, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x37, 0x26, 0x15, 0x45, 0x57, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x37, 0x26, 0x04, 0x15, 0x45, 0x57, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x26, 0x37, 0x57, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x45, 0x57, 0x37, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x46, 0x57, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x46, 0x57, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x46, 0x57, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x46, 0x57, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x46, 0x57, 0x15, 0x02, 0x23, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x57, 0x46, 0x26, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x46, 0x57, 0x13, 0x02, 0x23, 0x26, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x23, 0x26, 0x46, 0x57, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x46, 0x57, 0x15, 0x13, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x46, 0x57, 0x15, 0x13, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x46, 0x57, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x46, 0x57, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x37, 0x26, 0x04, 0x46, 0x57, 0x15, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x37, 0x26, 0x46, 0x57, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x46, 0x57, 0x37, 0x26, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x26, 0x46, 0x57, 0x37, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x26, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x04, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x13, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x15, 0x13, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x67, 0x46, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x67, 0x46, 0x01, 0x15, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x46, 0x67, 0x23, 0x13, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x37, 0x23, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x04, 0x13, 0x37, 0x23, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x37, 0x23, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x15, 0x37, 0x23, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x37, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x37, 0x67, 0x46, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x37, 0x67, 0x46, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x15, 0x37, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x26, 0x67, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x26, 0x67, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x26, 0x67, 0x45, 0x01, 0x15, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x26, 0x67, 0x45, 0x15, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x67, 0x45, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x67, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x67, 0x45, 0x04, 0x01, 0x15, 0x13, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x23, 0x67, 0x45, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x26, 0x67, 0x45, 0x13, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x26, 0x67, 0x45, 0x13, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x37, 0x23, 0x04, 0x26, 0x67, 0x45, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x26, 0x67, 0x45, 0x15, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x45, 0x67, 0x37, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x37, 0x67, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x37, 0x67, 0x45, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x15, 0x37, 0x67, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x15, 0x45, 0x57, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x04, 0x15, 0x45, 0x57, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x57, 0x13, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x45, 0x57, 0x13, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x67, 0x46, 0x15, 0x45, 0x57, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x67, 0x46, 0x04, 0x15, 0x45, 0x57, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x57, 0x13, 0x02, 0x23, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x45, 0x57, 0x13, 0x23, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x37, 0x23, 0x15, 0x45, 0x57, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x04, 0x13, 0x37, 0x23, 0x15, 0x45, 0x57, 0x26, 0x67, 0x46],
  [0x01, 0x45, 0x57, 0x37, 0x23, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x45, 0x57, 0x37, 0x23, 0x26, 0x67, 0x46, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x37, 0x67, 0x46, 0x15, 0x45, 0x57, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x37, 0x67, 0x46, 0x04, 0x15, 0x45, 0x57, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x57, 0x37, 0x67, 0x46, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x45, 0x57, 0x37, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x26, 0x67, 0x57, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x26, 0x67, 0x57, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x57, 0x67, 0x26, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x26, 0x67, 0x57, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x67, 0x57, 0x15, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x67, 0x57, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x02, 0x23, 0x67, 0x57, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x23, 0x67, 0x57, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x26, 0x67, 0x57, 0x15, 0x13, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x26, 0x67, 0x57, 0x15, 0x13, 0x37, 0x23, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x26, 0x67, 0x57, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x26, 0x67, 0x57, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x37, 0x67, 0x57, 0x15, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x37, 0x67, 0x57, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x02, 0x37, 0x67, 0x57, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x37, 0x67, 0x57, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x37, 0x57, 0x67, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x04, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x13, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x15, 0x13, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x26, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x26, 0x04, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x13, 0x02, 0x23, 0x26, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00],
  [0x04, 0x15, 0x13, 0x23, 0x26, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x57, 0x67, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x57, 0x67, 0x23, 0x01, 0x02, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x57, 0x67, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x15, 0x57, 0x67, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x57, 0x67, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x26, 0x67, 0x57, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x57, 0x67, 0x26, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x15, 0x57, 0x67, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x46, 0x45, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x46, 0x45, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x13, 0x04, 0x46, 0x45, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00],
  [0x02, 0x46, 0x45, 0x15, 0x13, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x26, 0x04, 0x46, 0x45, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x26, 0x46, 0x45, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x13, 0x02, 0x23, 0x26, 0x04, 0x46, 0x45, 0x37, 0x57, 0x67],
  [0x13, 0x23, 0x26, 0x46, 0x45, 0x15, 0x37, 0x57, 0x67, 0x00, 0x00, 0x00],
  [0x13, 0x57, 0x67, 0x23, 0x04, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x46, 0x45, 0x13, 0x57, 0x67, 0x23, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x57, 0x67, 0x23, 0x04, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x46, 0x45, 0x15, 0x57, 0x67, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x57, 0x67, 0x26, 0x04, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x57, 0x67, 0x26, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x57, 0x67, 0x26, 0x02, 0x04, 0x46, 0x45, 0x00, 0x00, 0x00],
  [0x15, 0x57, 0x67, 0x26, 0x46, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x15, 0x45, 0x67, 0x37, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x15, 0x45, 0x67, 0x37, 0x01, 0x02, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x67, 0x37, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x37, 0x67, 0x45, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x15, 0x45, 0x67, 0x37, 0x02, 0x23, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x26, 0x04, 0x15, 0x45, 0x67, 0x37, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x67, 0x37, 0x13, 0x02, 0x23, 0x26, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x45, 0x67, 0x37, 0x13, 0x23, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x15, 0x45, 0x67, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x15, 0x45, 0x67, 0x23, 0x01, 0x02, 0x04, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x67, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x45, 0x67, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x15, 0x45, 0x67, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x15, 0x45, 0x67, 0x26, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x67, 0x26, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x45, 0x67, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x46, 0x67, 0x37, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x46, 0x67, 0x37, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x46, 0x67, 0x37, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x46, 0x67, 0x37, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x46, 0x67, 0x37, 0x15, 0x02, 0x23, 0x26, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x26, 0x46, 0x67, 0x37, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x46, 0x67, 0x37, 0x13, 0x02, 0x23, 0x26, 0x00, 0x00, 0x00],
  [0x13, 0x23, 0x26, 0x46, 0x67, 0x37, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x15, 0x13, 0x23, 0x67, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x46, 0x67, 0x23, 0x13, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x46, 0x67, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x46, 0x67, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x15, 0x04, 0x46, 0x67, 0x26, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x15, 0x26, 0x46, 0x67, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x46, 0x67, 0x26, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x26, 0x46, 0x67, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x26, 0x37, 0x57, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x26, 0x37, 0x57, 0x46, 0x01, 0x02, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x26, 0x37, 0x57, 0x46, 0x01, 0x15, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x15, 0x13, 0x26, 0x37, 0x57, 0x46, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x37, 0x57, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x37, 0x57, 0x46, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x37, 0x57, 0x46, 0x01, 0x15, 0x13, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x15, 0x13, 0x23, 0x37, 0x57, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x57, 0x46, 0x26, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x57, 0x46, 0x26, 0x23, 0x01, 0x02, 0x04, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x26, 0x46, 0x57, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x15, 0x57, 0x46, 0x26, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x57, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x57, 0x46, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x57, 0x46, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x15, 0x57, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x26, 0x37, 0x57, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x57, 0x37, 0x26, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x26, 0x37, 0x57, 0x45, 0x01, 0x15, 0x13, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x26, 0x37, 0x57, 0x45, 0x15, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x37, 0x57, 0x45, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x37, 0x57, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x37, 0x57, 0x45, 0x04, 0x01, 0x15, 0x13, 0x00, 0x00, 0x00],
  [0x13, 0x23, 0x37, 0x57, 0x45, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x26, 0x23, 0x13, 0x57, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x26, 0x23, 0x13, 0x57, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x57, 0x45, 0x04, 0x26, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x26, 0x23, 0x15, 0x57, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x57, 0x45, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x57, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x15, 0x57, 0x45, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x15, 0x57, 0x45, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x15, 0x45, 0x46, 0x26, 0x37, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x15, 0x45, 0x46, 0x26, 0x37, 0x01, 0x02, 0x04, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x46, 0x26, 0x37, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x45, 0x46, 0x26, 0x37, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x46, 0x45, 0x15, 0x37, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x37, 0x15, 0x45, 0x46, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x46, 0x02, 0x23, 0x37, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x45, 0x46, 0x13, 0x23, 0x37, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x15, 0x45, 0x46, 0x26, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x15, 0x45, 0x46, 0x26, 0x23, 0x01, 0x02, 0x04, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x46, 0x26, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x04, 0x45, 0x46, 0x26, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x15, 0x45, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x15, 0x45, 0x46, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x45, 0x46, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x45, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x26, 0x37, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x26, 0x37, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x26, 0x37, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x26, 0x37, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x23, 0x37, 0x15, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x23, 0x37, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x02, 0x23, 0x37, 0x13, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x13, 0x23, 0x37, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x04, 0x26, 0x23, 0x13, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x02, 0x26, 0x23, 0x13, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x26, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x26, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x02, 0x13, 0x15, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x13, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x01, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
  [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
];

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;
