use glam::{IVec3, Vec3, Vec4};

use super::*;

fn bounds_at(index: IVec3) -> Aabb {
  let base = index.as_vec3() * 8.0;
  Aabb::new(
    Vec3::new(base.x, base.y, base.z + 8.0),
    Vec3::new(base.x + 8.0, base.y + 8.0, base.z),
  )
}

fn some_vertices(count: usize) -> Vec<Vertex> {
  (0..count)
    .map(|i| Vertex {
      position: Vec3::splat(i as f32),
      color: Vec4::ONE,
      normal: Vec3::Y,
    })
    .collect()
}

#[test]
fn test_insert_starts_pending() {
  let store = ChunkStore::new();
  let key = store.insert(IVec3::ZERO, bounds_at(IVec3::ZERO));

  assert_eq!(store.len(), 1);
  assert!(!store.is_done(key));
  assert_eq!(store.counts(), (1, 0));

  let mut visited = 0;
  store.visit_done(|_| visited += 1);
  assert_eq!(visited, 0);
}

#[test]
fn test_write_mesh_publishes() {
  let store = ChunkStore::new();
  let key = store.insert(IVec3::new(1, 2, 3), bounds_at(IVec3::new(1, 2, 3)));

  assert!(store.write_mesh(key, some_vertices(6)));
  assert!(store.is_done(key));
  assert_eq!(store.counts(), (0, 1));

  let mut seen = Vec::new();
  store.visit_done(|chunk| {
    seen.push((chunk.index, chunk.vertices.len()));
    assert!(chunk.done);
  });
  assert_eq!(seen, vec![(IVec3::new(1, 2, 3), 6)]);
}

#[test]
fn test_evict_outside_removes_disjoint_done_chunks() {
  let store = ChunkStore::new();
  let near = store.insert(IVec3::ZERO, bounds_at(IVec3::ZERO));
  let far = store.insert(IVec3::new(10, 0, 0), bounds_at(IVec3::new(10, 0, 0)));
  store.write_mesh(near, some_vertices(3));
  store.write_mesh(far, some_vertices(3));

  // Target covers chunk (0,0,0) only.
  let evicted = store.evict_outside(&bounds_at(IVec3::ZERO));
  assert_eq!(evicted, 1);
  assert_eq!(store.len(), 1);
  assert!(store.is_done(near));
  assert!(!store.is_done(far));
}

#[test]
fn test_evict_keeps_pending_chunks() {
  let store = ChunkStore::new();
  let pending = store.insert(IVec3::new(10, 0, 0), bounds_at(IVec3::new(10, 0, 0)));

  // Pending and disjoint from the target, but a worker may still be meshing
  // it; only done chunks leave.
  assert_eq!(store.evict_outside(&bounds_at(IVec3::ZERO)), 0);
  assert_eq!(store.len(), 1);

  store.write_mesh(pending, some_vertices(3));
  assert_eq!(store.evict_outside(&bounds_at(IVec3::ZERO)), 1);
  assert_eq!(store.len(), 0);
  assert!(store.is_empty());
}

#[test]
fn test_evict_keeps_touching_chunks() {
  let store = ChunkStore::new();
  let flush = store.insert(IVec3::new(1, 0, 0), bounds_at(IVec3::new(1, 0, 0)));
  store.write_mesh(flush, some_vertices(3));

  // Face contact with the target counts as intersecting.
  assert_eq!(store.evict_outside(&bounds_at(IVec3::ZERO)), 0);
  assert!(store.is_done(flush));
}

#[test]
fn test_stale_key_after_eviction() {
  let store = ChunkStore::new();
  let key = store.insert(IVec3::new(10, 0, 0), bounds_at(IVec3::new(10, 0, 0)));
  store.write_mesh(key, some_vertices(3));
  assert_eq!(store.evict_outside(&bounds_at(IVec3::ZERO)), 1);

  // The chunk is gone; a late worker write lands nowhere.
  assert!(!store.write_mesh(key, some_vertices(9)));
  assert!(!store.is_done(key));
}

#[test]
fn test_stale_key_survives_slot_reuse() {
  let store = ChunkStore::new();
  let old = store.insert(IVec3::new(10, 0, 0), bounds_at(IVec3::new(10, 0, 0)));
  store.write_mesh(old, some_vertices(3));
  store.evict_outside(&bounds_at(IVec3::ZERO));

  // The freed slot is reused; the old key's generation no longer matches.
  let new = store.insert(IVec3::ZERO, bounds_at(IVec3::ZERO));
  assert_eq!(store.len(), 1);
  assert!(!store.write_mesh(old, some_vertices(9)));
  assert!(!store.is_done(old));

  assert!(store.write_mesh(new, some_vertices(3)));
  assert!(store.is_done(new));
}

#[test]
fn test_counts_track_mixed_states() {
  let store = ChunkStore::new();
  let keys: Vec<_> = (0..5)
    .map(|i| store.insert(IVec3::new(i, 0, 0), bounds_at(IVec3::new(i, 0, 0))))
    .collect();
  store.write_mesh(keys[0], some_vertices(3));
  store.write_mesh(keys[3], some_vertices(3));

  assert_eq!(store.counts(), (3, 2));
  assert_eq!(store.len(), 5);
}
