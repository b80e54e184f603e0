//! Chunk arena with generation-counted handles.
//!
//! Chunks live in slots behind one mutex. A [`ChunkKey`] names a slot plus
//! the generation it was issued for; eviction bumps the generation, so a
//! worker finishing a job for an already-evicted chunk writes into nothing
//! instead of someone else's memory. This replaces raw owning pointers with
//! the one access pattern the pipeline needs:
//!
//! - scheduler: `insert` pending chunks, `evict_outside` stale ones
//! - workers: `write_mesh` exactly once per key
//! - render path: `visit_done` under the store's lock

use std::sync::Mutex;

use glam::IVec3;

use crate::types::{Aabb, Vertex};

/// Stable handle to a chunk slot. Stale after the chunk is evicted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkKey {
  slot: u32,
  generation: u32,
}

/// One spatial chunk: grid index, world bounds, and the mesh its worker
/// produced. `done` is the publication signal; vertices are never read
/// before it flips.
#[derive(Debug)]
pub struct Chunk {
  pub index: IVec3,
  pub bounds: Aabb,
  pub vertices: Vec<Vertex>,
  pub done: bool,
}

struct Slot {
  generation: u32,
  chunk: Option<Chunk>,
}

struct Slots {
  slots: Vec<Slot>,
  free: Vec<u32>,
  /// Occupied slot ids, swap-and-pop on eviction; order carries no meaning.
  live: Vec<u32>,
}

/// Thread-guarded collection of resident chunks.
pub struct ChunkStore {
  inner: Mutex<Slots>,
}

impl Default for ChunkStore {
  fn default() -> Self {
    Self::new()
  }
}

impl ChunkStore {
  pub fn new() -> Self {
    Self {
      inner: Mutex::new(Slots {
        slots: Vec::new(),
        free: Vec::new(),
        live: Vec::new(),
      }),
    }
  }

  /// Insert a new pending chunk and return its handle.
  pub fn insert(&self, index: IVec3, bounds: Aabb) -> ChunkKey {
    let mut inner = self.inner.lock().unwrap();
    let chunk = Chunk {
      index,
      bounds,
      vertices: Vec::new(),
      done: false,
    };

    let slot = match inner.free.pop() {
      Some(slot) => {
        inner.slots[slot as usize].chunk = Some(chunk);
        slot
      }
      None => {
        inner.slots.push(Slot {
          generation: 0,
          chunk: Some(chunk),
        });
        (inner.slots.len() - 1) as u32
      }
    };
    inner.live.push(slot);

    ChunkKey {
      slot,
      generation: inner.slots[slot as usize].generation,
    }
  }

  /// Publish a chunk's mesh and mark it done.
  ///
  /// Returns false (and drops the vertices) when the key is stale, which
  /// happens when a fast-moving viewpoint evicted the chunk while a worker
  /// was still meshing it.
  pub fn write_mesh(&self, key: ChunkKey, vertices: Vec<Vertex>) -> bool {
    let mut inner = self.inner.lock().unwrap();
    let slot = &mut inner.slots[key.slot as usize];
    if slot.generation != key.generation {
      return false;
    }
    match slot.chunk.as_mut() {
      Some(chunk) => {
        chunk.vertices = vertices;
        chunk.done = true;
        true
      }
      None => false,
    }
  }

  /// Evict every completed chunk whose bounds do not intersect `target`.
  ///
  /// Pending chunks are never force-evicted mid-generation; they stay until
  /// a later pass finds them done. Returns the number evicted.
  pub fn evict_outside(&self, target: &Aabb) -> usize {
    let mut inner = self.inner.lock().unwrap();
    let mut evicted = 0;
    let mut i = 0;
    while i < inner.live.len() {
      let slot = inner.live[i];
      let stale = {
        let entry = &inner.slots[slot as usize];
        match &entry.chunk {
          Some(chunk) => chunk.done && !chunk.bounds.intersects(target),
          None => true,
        }
      };
      if stale {
        inner.live.swap_remove(i);
        let entry = &mut inner.slots[slot as usize];
        entry.chunk = None;
        entry.generation = entry.generation.wrapping_add(1);
        inner.free.push(slot);
        evicted += 1;
      } else {
        i += 1;
      }
    }
    evicted
  }

  /// Visit every completed chunk under the store's lock.
  ///
  /// The render path draws from here; keep the callback short.
  pub fn visit_done(&self, mut f: impl FnMut(&Chunk)) {
    let inner = self.inner.lock().unwrap();
    for &slot in &inner.live {
      if let Some(chunk) = &inner.slots[slot as usize].chunk {
        if chunk.done {
          f(chunk);
        }
      }
    }
  }

  /// True while the key still names its chunk and that chunk is done.
  pub fn is_done(&self, key: ChunkKey) -> bool {
    let inner = self.inner.lock().unwrap();
    let slot = &inner.slots[key.slot as usize];
    slot.generation == key.generation
      && slot.chunk.as_ref().map(|c| c.done).unwrap_or(false)
  }

  /// (pending, done) chunk counts, for debug overlays.
  pub fn counts(&self) -> (usize, usize) {
    let inner = self.inner.lock().unwrap();
    let mut pending = 0;
    let mut done = 0;
    for &slot in &inner.live {
      if let Some(chunk) = &inner.slots[slot as usize].chunk {
        if chunk.done {
          done += 1;
        } else {
          pending += 1;
        }
      }
    }
    (pending, done)
  }

  /// Number of resident chunks, pending or done.
  pub fn len(&self) -> usize {
    self.inner.lock().unwrap().live.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
