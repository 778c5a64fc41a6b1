//! # World Module
//!
//! This module provides the `World` struct, the sparse chunked voxel store that is
//! the authoritative state of the game.
//!
//! ## Architecture
//!
//! The world keeps only chunks that have been written. Reading anywhere else
//! returns air, and writing anywhere creates the owning chunk first, so the world
//! is conceptually unbounded and no access can fail.
//!
//! ## Performance Considerations
//!
//! - Chunk lookup is O(1) using a hash map keyed by the chunk's integer position
//! - Voxel access is one hash lookup plus one array index
//! - Chunks are never evicted; everything generated stays resident

use std::collections::HashMap;

use cgmath::Point3;

use super::{
    block::{block_type::BlockType, is_solid, BlockTypeSize, AIR_ID},
    chunk::{
        chunk_coordinate, local_coordinate, BlockPosition, Chunk, ChunkPosition,
        DEFAULT_CHUNK_DIMENSION,
    },
};

/// World-space bounds of a chunk. `max` is exclusive: `max = min + dimension`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkBounds {
    /// Smallest world coordinate inside the chunk on every axis.
    pub min: BlockPosition,
    /// One past the largest world coordinate inside the chunk on every axis.
    pub max: BlockPosition,
}

impl ChunkBounds {
    /// Whether `position` lies inside these bounds.
    pub fn contains(&self, position: BlockPosition) -> bool {
        (self.min.x..self.max.x).contains(&position.x)
            && (self.min.y..self.max.y).contains(&position.y)
            && (self.min.z..self.max.z).contains(&position.z)
    }
}

/// Represents a voxel world composed of multiple chunks.
///
/// The world is stored as a sparse 3D grid of chunks, where each chunk is a
/// `dimension³` cube of blocks. Chunks are created on their first write.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_world::World;
///
/// let mut world = World::new();
/// world.set_voxel(Point3::new(-1, 4, 70), 3);
///
/// assert_eq!(world.get_voxel(Point3::new(-1, 4, 70)), 3);
/// assert!(world.chunk_exists(Point3::new(-1, 0, 2)));
/// assert_eq!(world.get_voxel(Point3::new(1000, 0, 0)), 0);
/// ```
#[derive(Debug, Clone)]
pub struct World {
    /// Edge length of every chunk in this world.
    chunk_dimension: i32,
    /// A mapping from chunk coordinates to chunk data.
    chunks: HashMap<ChunkPosition, Chunk>,
    /// Smallest and largest chunk coordinates created so far, per axis.
    extent: Option<(ChunkPosition, ChunkPosition)>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates a new, empty world with the default chunk dimension.
    pub fn new() -> Self {
        Self::with_chunk_dimension(DEFAULT_CHUNK_DIMENSION)
    }

    /// Creates a new, empty world whose chunks have edge length `chunk_dimension`.
    ///
    /// Non-positive dimensions are raised to 1.
    pub fn with_chunk_dimension(chunk_dimension: i32) -> Self {
        World {
            chunk_dimension: chunk_dimension.max(1),
            chunks: HashMap::new(),
            extent: None,
        }
    }

    /// Edge length of every chunk in this world.
    pub fn chunk_dimension(&self) -> i32 {
        self.chunk_dimension
    }

    /// Chunk that owns the given world position.
    pub fn chunk_position_of(&self, position: BlockPosition) -> ChunkPosition {
        let d = self.chunk_dimension;
        Point3::new(
            chunk_coordinate(position.x, d),
            chunk_coordinate(position.y, d),
            chunk_coordinate(position.z, d),
        )
    }

    /// Position of a world position inside its owning chunk; every axis is in `[0, dimension)`.
    pub fn local_position_of(&self, position: BlockPosition) -> Point3<usize> {
        let d = self.chunk_dimension;
        Point3::new(
            local_coordinate(position.x, d) as usize,
            local_coordinate(position.y, d) as usize,
            local_coordinate(position.z, d) as usize,
        )
    }

    /// Gets the block id at a world position.
    ///
    /// Never fails: positions in chunks that do not exist read as air (`0`).
    pub fn get_voxel(&self, position: BlockPosition) -> BlockTypeSize {
        match self.chunks.get(&self.chunk_position_of(position)) {
            Some(chunk) => chunk.get_block_at(self.local_position_of(position)),
            None => AIR_ID,
        }
    }

    /// Whether the block at a world position is anything other than air.
    pub fn is_solid(&self, position: BlockPosition) -> bool {
        is_solid(self.get_voxel(position))
    }

    /// Sets the block id at a world position, creating the owning chunk (filled
    /// with air) if it does not exist yet.
    pub fn set_voxel(&mut self, position: BlockPosition, block_type: BlockTypeSize) {
        let chunk_position = self.chunk_position_of(position);
        let local = self.local_position_of(position);
        let dimension = self.chunk_dimension;
        if !self.chunks.contains_key(&chunk_position) {
            self.grow_extent(chunk_position);
        }
        self.chunks
            .entry(chunk_position)
            .or_insert_with(|| {
                log::trace!("Creating chunk {:?}", chunk_position);
                Chunk::empty(chunk_position, dimension)
            })
            .set_block_at(local, block_type);
    }

    /// Whether a chunk has been created at the given chunk coordinates.
    pub fn chunk_exists(&self, position: ChunkPosition) -> bool {
        self.chunks.contains_key(&position)
    }

    /// World-space bounds of the chunk at the given chunk coordinates.
    ///
    /// Coordinates saturate at the `i32` limits, so the exclusive `max` of the
    /// chunk holding `i32::MAX` is `i32::MAX` itself.
    pub fn chunk_bounds(&self, position: ChunkPosition) -> ChunkBounds {
        let d = self.chunk_dimension;
        let min = position.map(|c| c.saturating_mul(d));
        ChunkBounds {
            min,
            max: min.map(|c| c.saturating_add(d)),
        }
    }

    /// Inclusive world-space box around every chunk created so far.
    ///
    /// # Returns
    /// `(min, max)` voxel coordinates, or `None` for a world without chunks.
    pub fn voxel_extent(&self) -> Option<(BlockPosition, BlockPosition)> {
        let (low, high) = self.extent?;
        let d = self.chunk_dimension;
        Some((
            low.map(|c| c.saturating_mul(d)),
            high.map(|c| c.saturating_mul(d).saturating_add(d - 1)),
        ))
    }

    fn grow_extent(&mut self, position: ChunkPosition) {
        self.extent = Some(match self.extent {
            None => (position, position),
            Some((low, high)) => (
                Point3::new(low.x.min(position.x), low.y.min(position.y), low.z.min(position.z)),
                Point3::new(high.x.max(position.x), high.y.max(position.y), high.z.max(position.z)),
            ),
        });
    }

    /// Retrieves the chunk at the specified chunk coordinates, if it exists.
    pub fn get_chunk_at(&self, position: ChunkPosition) -> Option<&Chunk> {
        self.chunks.get(&position)
    }

    /// Stores a whole chunk, replacing any chunk already at its position.
    ///
    /// Chunks whose dimension differs from the world's are rejected and logged.
    pub fn insert_chunk(&mut self, chunk: Chunk) {
        if chunk.dimension() as i32 != self.chunk_dimension {
            log::warn!(
                "Rejecting chunk {:?} with dimension {} in a world of dimension {}",
                chunk.position,
                chunk.dimension(),
                self.chunk_dimension
            );
            return;
        }
        self.grow_extent(chunk.position);
        self.chunks.insert(chunk.position, chunk);
    }

    /// Number of chunks created so far.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Positions of every chunk created so far, in no particular order.
    pub fn chunk_positions(&self) -> impl Iterator<Item = ChunkPosition> + '_ {
        self.chunks.keys().copied()
    }

    /// Fills a flat 32×32 slab of grass from Y 0 through Y 10 at the origin.
    ///
    /// Useful for exercising meshing and movement without terrain generation.
    pub fn fill_flat_test_terrain(&mut self) {
        for x in 0..32 {
            for z in 0..32 {
                for y in 0..=10 {
                    self.set_voxel(Point3::new(x, y, z), BlockType::GRASS.id());
                }
            }
        }
        log::info!("Flat test terrain generated: 32x32 surface at y=0-10");
    }
}
