//! # Chunk Module
//!
//! This module provides the `Chunk` struct and the coordinate transforms that map
//! world coordinates onto chunks.
//!
//! ## Storage
//!
//! A chunk is a cube of `dimension³` block ids stored as one flat array in
//! y-major order: the block at local `(x, y, z)` lives at
//! `y * dimension² + z * dimension + x`. Every chunk holds exactly `dimension³`
//! entries; air is stored as `0` like any other id.
//!
//! ## Coordinates
//!
//! Chunk coordinates use floor division and local coordinates use floor modulo, so
//! negative world coordinates land in the right chunk: with a dimension of 32, world
//! x `-1` is chunk `-1`, local `31`.

use cgmath::Point3;

use super::block::{BlockTypeSize, AIR_ID};

/// The default dimension (width, height, depth) of a chunk in blocks.
pub const DEFAULT_CHUNK_DIMENSION: i32 = 32;

/// Position of a chunk in chunk coordinates (world coordinates divided by the dimension).
pub type ChunkPosition = Point3<i32>;

/// Position of a single voxel in world coordinates.
pub type BlockPosition = Point3<i32>;

/// Chunk coordinate of a world coordinate along one axis.
#[inline]
pub fn chunk_coordinate(world: i32, dimension: i32) -> i32 {
    world.div_euclid(dimension)
}

/// Local coordinate, always in `[0, dimension)`, of a world coordinate along one axis.
#[inline]
pub fn local_coordinate(world: i32, dimension: i32) -> i32 {
    world.rem_euclid(dimension)
}

/// Represents a cube of voxel blocks in the world.
///
/// Chunks are the unit of allocation and of mesh regeneration. Each chunk knows
/// its own position so it can be handed around on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: ChunkPosition,
    /// Edge length in blocks.
    dimension: usize,
    /// Block ids in `y * dimension² + z * dimension + x` order.
    blocks: Vec<BlockTypeSize>,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air).
    pub fn empty(position: ChunkPosition, dimension: i32) -> Self {
        Self::solid(position, dimension, AIR_ID)
    }

    /// Creates a new chunk with every block set to `block_type`.
    pub fn solid(position: ChunkPosition, dimension: i32, block_type: BlockTypeSize) -> Self {
        let dimension = dimension.max(1) as usize;
        Chunk {
            position,
            dimension,
            blocks: vec![block_type; dimension * dimension * dimension],
        }
    }

    /// Creates a chunk from already laid out block ids.
    ///
    /// `blocks` is expected to hold exactly `dimension³` ids in storage order;
    /// a shorter array is padded with air and a longer one truncated, with a warning.
    pub fn from_blocks(
        position: ChunkPosition,
        dimension: i32,
        mut blocks: Vec<BlockTypeSize>,
    ) -> Self {
        let dimension = dimension.max(1) as usize;
        let volume = dimension * dimension * dimension;
        if blocks.len() != volume {
            log::warn!(
                "Chunk {:?} got {} blocks, expected {}; resizing",
                position,
                blocks.len(),
                volume
            );
        }
        blocks.resize(volume, AIR_ID);
        Chunk {
            position,
            dimension,
            blocks,
        }
    }

    /// Edge length of this chunk in blocks.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// All block ids in storage order.
    pub fn blocks(&self) -> &[BlockTypeSize] {
        &self.blocks
    }

    /// Index into the storage array of a local position.
    #[inline]
    pub fn index_of(&self, local: Point3<usize>) -> usize {
        local.y * self.dimension * self.dimension + local.z * self.dimension + local.x
    }

    /// Gets the block id at the specified chunk-relative coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn get_block_at(&self, local: Point3<usize>) -> BlockTypeSize {
        self.blocks[self.index_of(local)]
    }

    /// Sets the block id at the specified chunk-relative coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn set_block_at(&mut self, local: Point3<usize>, block_type: BlockTypeSize) {
        let index = self.index_of(local);
        self.blocks[index] = block_type;
    }

    /// Number of non-air blocks.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|&&b| b != AIR_ID).count()
    }

    /// True when every block is air.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&b| b == AIR_ID)
    }

    /// World position of this chunk's minimum corner, saturating at the `i32` limits.
    pub fn world_origin(&self) -> Point3<i32> {
        let d = self.dimension as i32;
        self.position.map(|c| c.saturating_mul(d))
    }
}
