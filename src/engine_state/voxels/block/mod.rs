//! # Block Module
//!
//! This module provides the block-level vocabulary of the voxel world:
//! block type ids and names, the six block sides and their face orientation,
//! and the texture tiles each block type uses.

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
///
/// `0` is empty space; every other value is a solid block id. Ids without a
/// [`block_type::BlockType`] variant are still stored and treated as solid.
pub type BlockTypeSize = u8;

/// The value stored for empty space.
pub const AIR_ID: BlockTypeSize = 0;

/// Maps each block type to its texture atlas tiles.
///
/// The outer array is indexed by `BlockType` as a `usize`.
/// The inner array holds the tile index for each face orientation in the order:
/// [Top, Side, Bottom]. A negative tile means "no texture".
pub static BLOCK_TYPE_TO_TEXTURE_TILES: [[i32; 3]; 11] = [
    [-1, -1, -1], // AIR
    [0, 1, 2],    // GRASS (green top, grass side, dirt bottom)
    [2, 2, 2],    // DIRT
    [3, 3, 3],    // STONE
    [6, 7, 6],    // WOOD (rings top and bottom, bark on the sides)
    [4, 4, 4],    // SAND
    [8, 8, 8],    // LEAVES
    [11, 11, 11], // PLANKS
    [9, 9, 9],    // GLASS
    [10, 10, 10], // COBBLESTONE
    [5, 5, 5],    // BEDROCK
];

/// True when `block_type` is anything other than empty space.
#[inline]
pub fn is_solid(block_type: BlockTypeSize) -> bool {
    block_type != AIR_ID
}
