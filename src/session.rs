//! Store + scheduler + pool glued into one session.
//!
//! Owns the whole streaming pipeline for the lifetime of a scene: workers
//! start with the session, chunks stream as the viewer moves, and everything
//! joins cleanly on finish (or drop).

use std::sync::Arc;

use crossbeam_channel::{unbounded, Sender};
use glam::Vec3;

use crate::field::ScalarField;
use crate::store::{Chunk, ChunkStore};
use crate::streaming::{Job, StreamConfig, StreamStats, StreamingScheduler};
use crate::worker::WorkerPool;

/// Resident chunk counts, for debug overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
  pub pending: usize,
  pub done: usize,
}

/// A running terrain streaming session.
pub struct TerrainSession {
  store: Arc<ChunkStore>,
  scheduler: StreamingScheduler,
  jobs: Sender<Job>,
  pool: Option<WorkerPool>,
}

impl TerrainSession {
  /// Spawn the worker pool and return a session ready for updates.
  pub fn start<F>(config: StreamConfig, field: F) -> Self
  where
    F: ScalarField + Send + Sync + 'static,
  {
    let store = Arc::new(ChunkStore::new());
    let (jobs, receiver) = unbounded();
    let pool = WorkerPool::spawn(
      config.worker_threads,
      Arc::new(field),
      Arc::clone(&store),
      config.voxel_size,
      receiver,
    );

    Self {
      store,
      scheduler: StreamingScheduler::new(config),
      jobs,
      pool: Some(pool),
    }
  }

  /// Feed the current viewer position; streams chunks in and out when the
  /// viewer crosses a chunk boundary.
  pub fn update(&mut self, viewer: Vec3) -> StreamStats {
    self.scheduler.update(viewer, &self.store, &self.jobs)
  }

  /// Visit every completed chunk under the store's lock.
  pub fn visit_done(&self, f: impl FnMut(&Chunk)) {
    self.store.visit_done(f);
  }

  pub fn store(&self) -> &Arc<ChunkStore> {
    &self.store
  }

  pub fn stats(&self) -> SessionStats {
    let (pending, done) = self.store.counts();
    SessionStats { pending, done }
  }

  /// Shut the pool down: discard queued jobs, finish in-flight ones, join
  /// every worker. Idempotent; also runs on drop.
  pub fn finish(&mut self) {
    if let Some(pool) = self.pool.take() {
      pool.shutdown();
    }
  }
}

impl Drop for TerrainSession {
  fn drop(&mut self) {
    self.finish();
  }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
