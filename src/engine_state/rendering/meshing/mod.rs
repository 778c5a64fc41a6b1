//! Mesh generation and caching for voxel chunks.
//!
//! Meshes are derived data: they are built from the world on demand and thrown
//! away whenever an edit could change them.
//!
//! # Architecture
//! - `mesh/`: Face-culled mesh extraction ([`MeshBuilder`], [`ChunkMesh`])
//! - [`ChunkMeshCache`]: Least-recently-used store of built meshes with edit invalidation
//!
//! # Invalidation
//! An edit can change the mesh of its own chunk and, when the edited block lies on
//! the chunk boundary, the mesh of the chunk across that boundary, whose faces
//! against the edited block appear or disappear. [`ChunkMeshCache::invalidate_block`]
//! drops exactly those entries.

use std::num::NonZeroUsize;

use cgmath::Point3;
use lru::LruCache;

mod mesh;

// Re-export the mesh module's public interface for external use
pub use mesh::*;

use crate::engine_state::{
    rendering::texture::TextureResolver,
    voxels::{
        chunk::{BlockPosition, ChunkPosition},
        world::World,
    },
};

/// Built chunk meshes, keyed by chunk position.
///
/// A cached `None` records that the chunk has no visible geometry, so empty
/// chunks are not rebuilt on every request either.
#[derive(Debug)]
pub struct ChunkMeshCache {
    meshes: LruCache<ChunkPosition, Option<ChunkMesh>>,
}

impl ChunkMeshCache {
    /// Creates a cache holding at most `capacity` chunk meshes.
    pub fn new(capacity: NonZeroUsize) -> Self {
        ChunkMeshCache {
            meshes: LruCache::new(capacity),
        }
    }

    /// Creates a cache holding at most `capacity` chunk meshes; zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN))
    }

    /// Returns the mesh of the chunk at `position`, building it first if it is not cached.
    ///
    /// # Returns
    /// `None` when the chunk has no visible geometry.
    pub fn get_or_build(
        &mut self,
        world: &World,
        texture_resolver: Option<&dyn TextureResolver>,
        position: ChunkPosition,
    ) -> Option<&ChunkMesh> {
        if !self.meshes.contains(&position) {
            let mut builder = MeshBuilder::new(world);
            if let Some(resolver) = texture_resolver {
                builder = builder.with_texture_resolver(resolver);
            }
            let mesh = builder.build_chunk_mesh(position);
            if let Some((evicted, _)) = self.meshes.push(position, mesh) {
                if evicted != position {
                    log::trace!("Evicted mesh of chunk {:?}", evicted);
                }
            }
        }
        self.meshes.get(&position).and_then(Option::as_ref)
    }

    /// Whether a result, including "no geometry", is cached for `position`.
    pub fn contains(&self, position: ChunkPosition) -> bool {
        self.meshes.contains(&position)
    }

    /// Drops the cached mesh of the chunk at `position`.
    pub fn invalidate_chunk(&mut self, position: ChunkPosition) {
        self.meshes.pop(&position);
    }

    /// Drops every cached mesh an edit of `block` can affect.
    pub fn invalidate_block(&mut self, world: &World, block: BlockPosition) {
        let chunk = world.chunk_position_of(block);
        let local = world.local_position_of(block);
        let last = world.chunk_dimension() as usize - 1;

        self.invalidate_chunk(chunk);
        for axis in 0..3 {
            let step = match local[axis] {
                0 => -1,
                l if l == last => 1,
                _ => continue,
            };
            let mut neighbor = chunk;
            neighbor[axis] += step;
            self.invalidate_chunk(neighbor);
            // A one-block chunk touches both neighbors on every axis.
            if last == 0 {
                let mut other = chunk;
                other[axis] -= step;
                self.invalidate_chunk(other);
            }
        }
    }

    /// Drops every cached mesh.
    pub fn clear(&mut self) {
        self.meshes.clear();
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}
