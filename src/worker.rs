//! Long-lived meshing threads.
//!
//! Workers pull jobs from a blocking channel, mesh the job's volume against
//! the shared field, and publish vertices through the chunk store. The
//! channel replaces the busy-wait poll a naive implementation would use;
//! observable behavior is the same, the CPU cost is not.
//!
//! Shutdown is cooperative: the queue is drained, a shared done flag is set,
//! and every worker is joined. A worker that already dequeued a job finishes
//! it; the store's generation check absorbs the result if the chunk is gone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use glam::Vec4;

use crate::field::ScalarField;
use crate::mesher::mesh_volume;
use crate::store::ChunkStore;
use crate::streaming::Job;
use crate::types::Vertex;

/// How long a worker blocks on the queue before re-checking the done flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Generated chunks all render in one uniform color; lighting comes from the
/// flat normals.
const CHUNK_COLOR: Vec4 = Vec4::ONE;

/// Fixed set of meshing threads bound to one store and one field.
pub struct WorkerPool {
  workers: Vec<JoinHandle<()>>,
  jobs: Receiver<Job>,
  done: Arc<AtomicBool>,
}

impl WorkerPool {
  /// Start `count` workers consuming from `jobs`.
  pub fn spawn<F>(
    count: usize,
    field: Arc<F>,
    store: Arc<ChunkStore>,
    voxel_size: f32,
    jobs: Receiver<Job>,
  ) -> Self
  where
    F: ScalarField + Send + Sync + 'static,
  {
    let done = Arc::new(AtomicBool::new(false));

    let workers = (0..count)
      .map(|index| {
        let field = Arc::clone(&field);
        let store = Arc::clone(&store);
        let jobs = jobs.clone();
        let done = Arc::clone(&done);
        thread::Builder::new()
          .name(format!("mesh-worker-{index}"))
          .spawn(move || worker_loop(index, &*field, &store, voxel_size, &jobs, &done))
          .expect("spawn mesh worker")
      })
      .collect();

    Self {
      workers,
      jobs,
      done,
    }
  }

  /// Number of worker threads.
  pub fn worker_count(&self) -> usize {
    self.workers.len()
  }

  /// Drain the queue, set the done flag, and join every worker.
  ///
  /// In-flight jobs complete; queued jobs are discarded.
  pub fn shutdown(self) {
    while self.jobs.try_recv().is_ok() {}
    self.done.store(true, Ordering::SeqCst);
    for worker in self.workers {
      let _ = worker.join();
    }
  }
}

fn worker_loop<F: ScalarField + ?Sized>(
  index: usize,
  field: &F,
  store: &ChunkStore,
  voxel_size: f32,
  jobs: &Receiver<Job>,
  done: &AtomicBool,
) {
  #[cfg(feature = "tracing")]
  tracing::debug!(worker = index, "mesh worker started");
  #[cfg(not(feature = "tracing"))]
  let _ = index;

  loop {
    match jobs.recv_timeout(POLL_INTERVAL) {
      Ok(job) => run_job(field, store, voxel_size, job),
      Err(RecvTimeoutError::Timeout) => {
        if done.load(Ordering::SeqCst) {
          break;
        }
      }
      Err(RecvTimeoutError::Disconnected) => break,
    }
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(worker = index, "mesh worker done");
}

fn run_job<F: ScalarField + ?Sized>(field: &F, store: &ChunkStore, voxel_size: f32, job: Job) {
  #[cfg(feature = "tracing")]
  let start = std::time::Instant::now();

  let triangles = mesh_volume(field, &job.bounds, voxel_size);

  let mut vertices = Vec::with_capacity(triangles.len() * 3);
  for triangle in &triangles {
    let normal = triangle.normal();
    for &position in &triangle.vertices {
      vertices.push(Vertex {
        position,
        color: CHUNK_COLOR,
        normal,
      });
    }
  }

  #[cfg(feature = "tracing")]
  tracing::trace!(
    triangles = triangles.len(),
    mesh_time_us = start.elapsed().as_micros() as u64,
    "chunk meshed"
  );

  store.write_mesh(job.key, vertices);
}

#[cfg(test)]
#[path = "worker_test.rs"]
mod worker_test;
