//! Geometry extraction for the voxel world.
//!
//! This module turns voxels into triangle meshes a renderer can draw. It does not
//! draw anything itself.
//!
//! * [`meshing`]: face-culled chunk meshes and the edit-aware mesh cache
//! * [`texture`]: texture coordinate lookup for face corners
//! * [`vertex`]: the interleaved vertex format

pub mod meshing;
pub mod texture;
pub mod vertex;

// Re-export commonly used types
pub use vertex::Vertex;
