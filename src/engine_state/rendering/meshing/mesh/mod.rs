//! Mesh generation for voxel chunks.
//!
//! This module converts voxel data into triangle meshes with per-corner normals
//! and texture coordinates.
//!
//! # Architecture
//! - [`ChunkMesh`]: The vertex and index buffers of one chunk
//! - [`FaceDescriptor`]: The static corner, normal and winding data of each cube face
//! - [`MeshBuilder`]: Face culling that emits only faces next to air
//!
//! # Usage
//! ```
//! use cgmath::Point3;
//! use voxel_world::{MeshBuilder, World};
//!
//! let mut world = World::new();
//! world.set_voxel(Point3::new(0, 0, 0), 1);
//! world.set_voxel(Point3::new(1, 0, 0), 1);
//!
//! // Two touching blocks hide the pair of faces between them.
//! let mesh = MeshBuilder::new(&world).build_chunk_mesh(Point3::new(0, 0, 0)).unwrap();
//! assert_eq!(mesh.face_count(), 10);
//! ```

mod culled;
mod face;
mod mesh;

pub use culled::{fallback_uv, MeshBuilder};
pub use face::{FaceDescriptor, FACE_DESCRIPTORS};
pub use mesh::ChunkMesh;
