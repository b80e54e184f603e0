use glam::Vec3;

use super::*;
use crate::tables::{REGULAR_CELL_CLASS, REGULAR_CELL_DATA};

fn samples_for_case(case: u8) -> [f32; 8] {
  let mut samples = [0.0f32; 8];
  for (i, s) in samples.iter_mut().enumerate() {
    *s = if case >> i & 1 != 0 { 1.0 } else { -1.0 };
  }
  samples
}

#[test]
fn test_case_index_roundtrip() {
  for case in 0..=255u8 {
    assert_eq!(case_index(&samples_for_case(case)), case);
  }
}

#[test]
fn test_on_surface_sample_counts_as_outside() {
  // Strict > 0: exactly-zero samples never set a bit.
  assert_eq!(case_index(&[0.0; 8]), 0);
  let mut samples = [0.0f32; 8];
  samples[3] = f32::MIN_POSITIVE;
  assert_eq!(case_index(&samples), 1 << 3);
}

#[test]
fn test_homogeneous_cells_are_empty() {
  let inside = cell_triangles(&[1.0; 8], Vec3::ZERO, 1.0);
  let outside = cell_triangles(&[-1.0; 8], Vec3::ZERO, 1.0);
  assert!(inside.is_empty());
  assert!(outside.is_empty());

  // Magnitude is irrelevant when all signs agree.
  let large = cell_triangles(&[1e6; 8], Vec3::ZERO, 1.0);
  assert!(large.is_empty());
}

#[test]
fn test_single_corner_cuts_one_triangle() {
  for corner in 0..8usize {
    let triangles = cell_triangles(&samples_for_case(1 << corner), Vec3::ZERO, 1.0);
    assert_eq!(triangles.len(), 1, "corner {corner}");

    // All three vertices sit on edges incident to the solid corner: each is
    // half a cell away from the corner along exactly one axis.
    let origin = crate::tables::CORNER_OFFSETS[corner];
    for vertex in triangles[0].vertices {
      let d = (vertex - origin).abs();
      let mut half_axes = 0;
      let mut zero_axes = 0;
      for v in d.to_array() {
        if (v - 0.5).abs() < 1e-6 {
          half_axes += 1;
        } else if v.abs() < 1e-6 {
          zero_axes += 1;
        }
      }
      assert_eq!((half_axes, zero_axes), (1, 2), "corner {corner} vertex {vertex:?}");
    }

    // Winding: face normal points away from the solid corner.
    let center = Vec3::splat(0.5);
    let away = center - origin;
    assert!(
      triangles[0].normal().dot(away) > 0.0,
      "corner {corner}: normal points into the solid"
    );
  }
}

#[test]
fn test_triangle_count_matches_class_for_all_cases() {
  for case in 0..=255u8 {
    let triangles = cell_triangles(&samples_for_case(case), Vec3::ZERO, 1.0);
    let class = REGULAR_CELL_CLASS[case as usize] as usize;
    assert_eq!(
      triangles.len(),
      REGULAR_CELL_DATA[class].triangle_count(),
      "case {case}"
    );
  }
}

#[test]
fn test_vertices_scale_and_translate() {
  let samples = samples_for_case(1);
  let local = cell_triangles(&samples, Vec3::ZERO, 1.0);
  let moved = cell_triangles(&samples, Vec3::new(10.0, -4.0, 2.0), 2.0);
  assert_eq!(local.len(), moved.len());
  for (a, b) in local[0].vertices.iter().zip(moved[0].vertices.iter()) {
    assert_eq!(*a * 2.0 + Vec3::new(10.0, -4.0, 2.0), *b);
  }
}

#[test]
fn test_vertices_stay_inside_cell() {
  for case in 0..=255u8 {
    for triangle in cell_triangles(&samples_for_case(case), Vec3::ZERO, 1.0) {
      for vertex in triangle.vertices {
        assert!(vertex.min_element() >= 0.0 && vertex.max_element() <= 1.0, "case {case}");
      }
    }
  }
}
