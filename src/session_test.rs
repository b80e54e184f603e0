use std::time::{Duration, Instant};

use glam::Vec3;

use super::*;
use crate::field::Sphere;

fn wait_until(deadline: Duration, mut condition: impl FnMut() -> bool) -> bool {
  let start = Instant::now();
  while start.elapsed() < deadline {
    if condition() {
      return true;
    }
    std::thread::sleep(Duration::from_millis(10));
  }
  condition()
}

fn small_config() -> StreamConfig {
  StreamConfig::new()
    .with_voxel_size(1.0)
    .with_chunk_size(4.0)
    .with_render_distance(1)
    .with_worker_threads(2)
}

#[test]
fn test_session_streams_the_initial_window() {
  let mut session = TerrainSession::start(small_config(), Sphere::new(6.0));

  let stats = session.update(Vec3::ZERO);
  assert_eq!(stats.enqueued, 27);
  assert_eq!(stats.evicted, 0);

  let settled = wait_until(Duration::from_secs(10), || {
    session.stats() == SessionStats { pending: 0, done: 27 }
  });
  assert!(settled, "workers stalled at {:?}", session.stats());

  let mut chunks = 0;
  let mut meshed = 0;
  session.visit_done(|chunk| {
    chunks += 1;
    assert_eq!(chunk.vertices.len() % 3, 0);
    if !chunk.vertices.is_empty() {
      meshed += 1;
    }
  });
  assert_eq!(chunks, 27);
  // The sphere surface crosses part of the window.
  assert!(meshed > 0);
}

#[test]
fn test_session_streams_on_movement() {
  let mut session = TerrainSession::start(small_config(), Sphere::new(6.0));
  session.update(Vec3::ZERO);
  let settled = wait_until(Duration::from_secs(10), || session.stats().pending == 0);
  assert!(settled);

  // Crossing into the next chunk along +x exposes one new face of chunks.
  let stats = session.update(Vec3::new(4.5, 0.0, 0.0));
  assert_eq!(stats.enqueued, 9);

  let settled = wait_until(Duration::from_secs(10), || session.stats().pending == 0);
  assert!(settled);
  assert_eq!(session.stats().done, session.store().len());
}

#[test]
fn test_finish_is_idempotent() {
  let mut session = TerrainSession::start(small_config(), Sphere::new(2.0));
  session.update(Vec3::ZERO);
  session.finish();
  session.finish();

  // Workers are gone; updates still bookkeep the store, jobs just queue
  // nowhere useful.
  let stats = session.stats();
  assert_eq!(stats.pending + stats.done, 27);
}

#[test]
fn test_drop_joins_workers() {
  let session = TerrainSession::start(small_config(), Sphere::new(2.0));
  drop(session);
}
