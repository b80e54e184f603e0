use crossbeam_channel::{unbounded, Receiver};
use glam::{IVec3, Vec3};

use super::*;

fn test_config() -> StreamConfig {
  StreamConfig::new().with_chunk_size(8.0).with_render_distance(1)
}

/// Grid index of a job's chunk. The base corner is (min.x, min.y, max.z)
/// because chunk bounds carry a descending z span.
fn job_index(job: &Job) -> IVec3 {
  chunk_index(
    Vec3::new(job.bounds.min.x, job.bounds.min.y, job.bounds.max.z),
    8.0,
  )
}

/// Drain the queue and mark every queued chunk done with an empty mesh.
fn finish_all(store: &ChunkStore, jobs: &Receiver<Job>) {
  while let Ok(job) = jobs.try_recv() {
    assert!(store.write_mesh(job.key, Vec::new()));
  }
}

#[test]
fn test_chunk_index_floors() {
  assert_eq!(chunk_index(Vec3::new(0.0, 0.0, 0.0), 8.0), IVec3::ZERO);
  assert_eq!(chunk_index(Vec3::new(7.9, 0.1, 3.0), 8.0), IVec3::ZERO);
  assert_eq!(chunk_index(Vec3::new(8.0, 0.0, 0.0), 8.0), IVec3::new(1, 0, 0));
  assert_eq!(
    chunk_index(Vec3::new(-0.1, -8.0, -8.1), 8.0),
    IVec3::new(-1, -1, -2)
  );
}

#[test]
fn test_chunk_bounds_descending_z() {
  let bounds = chunk_bounds(IVec3::new(1, 0, -1), 8.0);
  assert_eq!(bounds.min, Vec3::new(8.0, 0.0, 0.0));
  assert_eq!(bounds.max, Vec3::new(16.0, 8.0, -8.0));
  assert!(bounds.min.z > bounds.max.z);
}

#[test]
fn test_first_update_fills_the_window() {
  let store = ChunkStore::new();
  let (sender, receiver) = unbounded();
  let mut scheduler = StreamingScheduler::new(test_config());

  let stats = scheduler.update(Vec3::ZERO, &store, &sender);

  // Render distance 1 keeps a 3x3x3 window loaded.
  assert_eq!(stats, StreamStats { enqueued: 27, evicted: 0 });
  assert_eq!(store.len(), 27);
  assert_eq!(receiver.len(), 27);

  let mut indices: Vec<IVec3> = receiver.try_iter().map(|job| job_index(&job)).collect();
  indices.sort_by_key(|i| (i.x, i.y, i.z));
  indices.dedup();
  assert_eq!(indices.len(), 27);
  for index in indices {
    assert!(index.cmpge(IVec3::splat(-1)).all() && index.cmple(IVec3::ONE).all());
  }
}

#[test]
fn test_sub_chunk_movement_is_a_noop() {
  let store = ChunkStore::new();
  let (sender, receiver) = unbounded();
  let mut scheduler = StreamingScheduler::new(test_config());

  scheduler.update(Vec3::ZERO, &store, &sender);
  finish_all(&store, &receiver);

  // Still inside chunk (0,0,0).
  let stats = scheduler.update(Vec3::new(7.9, 7.9, 0.1), &store, &sender);
  assert_eq!(stats, StreamStats::default());
  assert_eq!(store.len(), 27);
  assert_eq!(receiver.len(), 0);
}

#[test]
fn test_step_to_neighbor_chunk_loads_one_face() {
  let store = ChunkStore::new();
  let (sender, receiver) = unbounded();
  let mut scheduler = StreamingScheduler::new(test_config());

  scheduler.update(Vec3::ZERO, &store, &sender);
  finish_all(&store, &receiver);

  // One chunk along +x: the window gains the x=2 face. The x=-1 column is
  // flush against the new window, so nothing is evicted yet.
  let stats = scheduler.update(Vec3::new(8.5, 0.0, 0.0), &store, &sender);
  assert_eq!(stats, StreamStats { enqueued: 9, evicted: 0 });
  assert_eq!(store.len(), 36);

  for job in receiver.try_iter() {
    assert_eq!(job_index(&job).x, 2);
  }
}

#[test]
fn test_jump_evicts_chunks_left_behind() {
  let store = ChunkStore::new();
  let (sender, receiver) = unbounded();
  let mut scheduler = StreamingScheduler::new(test_config());

  scheduler.update(Vec3::ZERO, &store, &sender);
  finish_all(&store, &receiver);
  scheduler.update(Vec3::new(8.5, 0.0, 0.0), &store, &sender);
  finish_all(&store, &receiver);
  assert_eq!(store.len(), 36);

  // Two chunks at once, to (3,0,0). The x=3 and x=4 faces are clear of the
  // shrunk previous window; the x=-1 and x=0 columns fall out of reach.
  let stats = scheduler.update(Vec3::new(25.0, 0.0, 0.0), &store, &sender);
  assert_eq!(stats, StreamStats { enqueued: 18, evicted: 18 });
  assert_eq!(store.len(), 36);

  for job in receiver.try_iter() {
    let x = job_index(&job).x;
    assert!(x == 3 || x == 4, "unexpected new chunk column {x}");
  }
}

#[test]
fn test_pending_chunks_survive_a_jump() {
  let store = ChunkStore::new();
  let (sender, receiver) = unbounded();
  let mut scheduler = StreamingScheduler::new(test_config());

  scheduler.update(Vec3::ZERO, &store, &sender);
  // No worker ran; every chunk is still pending.
  let stats = scheduler.update(Vec3::new(100.0, 100.0, 100.0), &store, &sender);

  assert_eq!(stats.evicted, 0);
  assert_eq!(stats.enqueued, 27);
  assert_eq!(store.len(), 54);
  drop(receiver);
}

#[test]
fn test_enqueue_after_disconnect_counts_nothing() {
  let store = ChunkStore::new();
  let (sender, receiver) = unbounded();
  drop(receiver);
  let mut scheduler = StreamingScheduler::new(test_config());

  let stats = scheduler.update(Vec3::ZERO, &store, &sender);
  assert_eq!(stats.enqueued, 0);
  // Chunks are still inserted; they just never get meshed.
  assert_eq!(store.len(), 27);
}
