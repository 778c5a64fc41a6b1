//! # Block Type Module
//!
//! This module defines the named block types of the voxel world.
//! It provides conversion from stored ids and lookup by configuration name.

use num_derive::FromPrimitive;
use phf::phf_map;

use super::BlockTypeSize;

/// Enumerates the named block types in the voxel world.
///
/// The discriminant is the id stored in chunks. The `FromPrimitive` derive
/// allows conversion back from stored ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// Empty space, non-solid and never meshed.
    AIR = 0,

    /// Surface block above the shoreline.
    /// The top is green, the sides have grass over dirt, and the bottom is plain dirt.
    GRASS = 1,

    /// Shallow subsurface layer and submerged surface.
    DIRT = 2,

    /// Deep layer, four or more blocks under the surface.
    STONE = 3,

    /// Tree trunk with rings on top and bottom.
    WOOD = 4,

    /// Surface block along the shoreline.
    SAND = 5,

    /// Tree foliage.
    LEAVES = 6,

    /// Crafted wooden planks.
    PLANKS = 7,

    /// Glass pane block.
    GLASS = 8,

    /// Crafted stone.
    COBBLESTONE = 9,

    /// The unbreakable floor at world Y 0.
    BEDROCK = 10,
}

/// Configuration names for every block type.
static BLOCK_TYPE_NAMES: phf::Map<&'static str, BlockType> = phf_map! {
    "air" => BlockType::AIR,
    "grass" => BlockType::GRASS,
    "dirt" => BlockType::DIRT,
    "stone" => BlockType::STONE,
    "wood" => BlockType::WOOD,
    "sand" => BlockType::SAND,
    "leaves" => BlockType::LEAVES,
    "planks" => BlockType::PLANKS,
    "glass" => BlockType::GLASS,
    "cobblestone" => BlockType::COBBLESTONE,
    "bedrock" => BlockType::BEDROCK,
};

impl BlockType {
    /// Converts a stored id to a `BlockType`.
    ///
    /// # Returns
    /// The matching variant, or `None` for ids without a name.
    pub fn from_int(id: BlockTypeSize) -> Option<Self> {
        num_traits::FromPrimitive::from_u8(id)
    }

    /// Looks up a block type by its lowercase configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        BLOCK_TYPE_NAMES.get(name).copied()
    }

    /// The lowercase configuration name of this block type.
    pub fn name(self) -> &'static str {
        match self {
            BlockType::AIR => "air",
            BlockType::GRASS => "grass",
            BlockType::DIRT => "dirt",
            BlockType::STONE => "stone",
            BlockType::WOOD => "wood",
            BlockType::SAND => "sand",
            BlockType::LEAVES => "leaves",
            BlockType::PLANKS => "planks",
            BlockType::GLASS => "glass",
            BlockType::COBBLESTONE => "cobblestone",
            BlockType::BEDROCK => "bedrock",
        }
    }

    /// The id stored in chunks for this block type.
    #[inline]
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Whether the edit layer may remove this block.
    pub fn is_breakable(self) -> bool {
        self != BlockType::BEDROCK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_int() {
        for id in 0..=10 {
            let block_type = BlockType::from_int(id).unwrap();
            assert_eq!(block_type.id(), id);
        }
        assert_eq!(BlockType::from_int(11), None);
    }

    #[test]
    fn names_round_trip_through_phf_map() {
        for id in 0..=10 {
            let block_type = BlockType::from_int(id).unwrap();
            assert_eq!(BlockType::from_name(block_type.name()), Some(block_type));
        }
        assert_eq!(BlockType::from_name("lava"), None);
    }
}
