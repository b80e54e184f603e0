//! Viewpoint-driven chunk scheduling.
//!
//! The scheduler watches the viewer's chunk-grid index. When it changes (or
//! on the very first update) it diffs the new render window against the
//! previous one, evicts completed chunks that fell out, and inserts plus
//! enqueues the newly exposed ones. Sub-chunk movement is a no-op.

use crossbeam_channel::Sender;
use glam::{IVec3, Vec3};

use crate::store::{ChunkKey, ChunkStore};
use crate::types::Aabb;

/// Session configuration, fixed at start.
#[derive(Clone, Debug)]
pub struct StreamConfig {
  /// World units per lattice cell.
  pub voxel_size: f32,
  /// World units per chunk, per axis.
  pub chunk_size: f32,
  /// Chunks kept loaded outward from the viewpoint along each axis, so the
  /// window is `(2 * render_distance + 1)^3` chunks.
  pub render_distance: IVec3,
  /// Worker thread count.
  pub worker_threads: usize,
}

impl Default for StreamConfig {
  fn default() -> Self {
    Self {
      voxel_size: 1.0,
      chunk_size: 8.0,
      render_distance: IVec3::splat(8),
      worker_threads: 4,
    }
  }
}

impl StreamConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_voxel_size(mut self, size: f32) -> Self {
    self.voxel_size = size;
    self
  }

  pub fn with_chunk_size(mut self, size: f32) -> Self {
    self.chunk_size = size;
    self
  }

  pub fn with_render_distance(mut self, chunks: i32) -> Self {
    self.render_distance = IVec3::splat(chunks);
    self
  }

  pub fn with_worker_threads(mut self, count: usize) -> Self {
    self.worker_threads = count;
    self
  }
}

/// A meshing job: the chunk to fill and the volume to mesh.
#[derive(Clone, Copy, Debug)]
pub struct Job {
  pub key: ChunkKey,
  pub bounds: Aabb,
}

/// What one scheduler update did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamStats {
  pub enqueued: usize,
  pub evicted: usize,
}

/// World bounds of the chunk at a grid index, in descending-z convention.
pub fn chunk_bounds(index: IVec3, chunk_size: f32) -> Aabb {
  let base = index.as_vec3() * chunk_size;
  Aabb::new(
    Vec3::new(base.x, base.y, base.z + chunk_size),
    Vec3::new(base.x + chunk_size, base.y + chunk_size, base.z),
  )
}

/// Grid index of the chunk containing a world position.
pub fn chunk_index(position: Vec3, chunk_size: f32) -> IVec3 {
  (position / chunk_size).floor().as_ivec3()
}

/// Tracks the viewer's chunk index across frames and drives the store and
/// job queue on window transitions.
pub struct StreamingScheduler {
  config: StreamConfig,
  prev_index: IVec3,
  first_update: bool,
}

impl StreamingScheduler {
  pub fn new(config: StreamConfig) -> Self {
    Self {
      config,
      prev_index: IVec3::ZERO,
      first_update: true,
    }
  }

  pub fn config(&self) -> &StreamConfig {
    &self.config
  }

  /// Process a viewpoint update.
  ///
  /// The store lock and the queue are never held together: each chunk is
  /// inserted, then separately enqueued. A chunk can be visible in the store
  /// briefly before its job exists, which is benign since it is pending and
  /// not rendered yet.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "streaming::update"))]
  pub fn update(&mut self, viewer: Vec3, store: &ChunkStore, jobs: &Sender<Job>) -> StreamStats {
    let current = chunk_index(viewer, self.config.chunk_size);
    if !self.first_update && current == self.prev_index {
      return StreamStats::default();
    }

    let rd = self.config.render_distance;
    let min = current - rd;
    let max = current + rd;

    // Shrink the previous window by one chunk per axis. A new chunk sitting
    // flush against the old window would otherwise count as "intersecting"
    // and never get loaded:
    //
    // |---|-| <- new chunk beside the old window, touching but not
    // |   |-|    overlapping; the shrunk bounds leave a gap so the
    // |---|      intersection test classifies it as newly exposed.
    let prev_min = self.prev_index - (rd - IVec3::ONE);
    let prev_max = self.prev_index + (rd - IVec3::ONE);

    let target_bounds = window_bounds(min, max, self.config.chunk_size);
    let evicted = store.evict_outside(&target_bounds);

    let prev_bounds = window_bounds(prev_min, prev_max, self.config.chunk_size);

    let mut enqueued = 0;
    for x in min.x..=max.x {
      for y in min.y..=max.y {
        for z in min.z..=max.z {
          let bounds = chunk_bounds(IVec3::new(x, y, z), self.config.chunk_size);
          if self.first_update || !prev_bounds.intersects(&bounds) {
            let key = store.insert(IVec3::new(x, y, z), bounds);
            if jobs.send(Job { key, bounds }).is_ok() {
              enqueued += 1;
            }
          }
        }
      }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(?current, enqueued, evicted, "window transition");

    self.first_update = false;
    self.prev_index = current;
    StreamStats { enqueued, evicted }
  }
}

/// World bounds of an inclusive chunk-index window, in descending-z
/// convention.
fn window_bounds(min: IVec3, max: IVec3, chunk_size: f32) -> Aabb {
  let lo = min.as_vec3() * chunk_size;
  let hi = (max + IVec3::ONE).as_vec3() * chunk_size;
  Aabb::new(
    Vec3::new(lo.x, lo.y, hi.z),
    Vec3::new(hi.x, hi.y, lo.z),
  )
}

#[cfg(test)]
#[path = "streaming_test.rs"]
mod streaming_test;
