//! marching_terrain - Marching-cubes volumetric meshing with streamed chunks
//!
//! This crate converts an implicit signed-distance field over 3D space into
//! triangle meshes, one chunk at a time, while a fixed pool of worker threads
//! keeps meshing off the caller's thread and chunks stream in and out around
//! a moving viewpoint.
//!
//! # Features
//!
//! - **Marching Cubes**: classic 256-case cell classification with midpoint
//!   edge vertices and flat per-triangle normals
//! - **Chunked streaming**: render-distance window tracking with insert on
//!   entry and evict on exit
//! - **Worker pool**: long-lived threads fed by a blocking job queue, with a
//!   generation-counted chunk arena so late results land harmlessly
//! - **Analytic and noise fields**: sphere, cube, and a layered simplex
//!   terrain density function
//!
//! # Example
//!
//! ```ignore
//! use marching_terrain::{StreamConfig, TerrainSession, Sphere};
//!
//! let field = Sphere::new(20.0);
//! let config = StreamConfig::default().with_render_distance(2);
//! let mut session = TerrainSession::start(config, field);
//!
//! // Each frame: feed the viewer position, then draw finished chunks.
//! session.update(glam::Vec3::ZERO);
//! session.visit_done(|chunk| {
//!     // upload chunk.vertices verbatim
//! });
//! ```
//!
//! # Sign convention
//!
//! A sample is *inside* the surface when the field value is positive and
//! *outside* when it is negative or exactly zero. Every field source and the
//! cell classifier share this convention.

pub mod tables;
pub mod types;

// Re-export commonly used items
pub use tables::{CellData, CORNER_OFFSETS, REGULAR_CELL_CLASS, REGULAR_CELL_DATA, REGULAR_VERTEX_DATA};
pub use types::{Aabb, Triangle, Vertex};

// Cell classification and per-cell triangulation
pub mod cell;
pub use cell::{case_index, cell_triangles};

// Lattice iteration over a query volume
pub mod mesher;
pub use mesher::mesh_volume;

// Scalar field sources
pub mod field;
pub use field::{Cube, LayeredTerrain, ScalarField, Sphere};

// Chunk arena with generation-counted handles
pub mod store;
pub use store::{Chunk, ChunkKey, ChunkStore};

// Viewpoint-driven chunk scheduling
pub mod streaming;
pub use streaming::{chunk_bounds, chunk_index, Job, StreamConfig, StreamStats, StreamingScheduler};

// Long-lived meshing threads
pub mod worker;
pub use worker::WorkerPool;

// Store + scheduler + pool glued together
pub mod session;
pub use session::{SessionStats, TerrainSession};
