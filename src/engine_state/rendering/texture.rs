//! Texture coordinate lookup for chunk meshes.
//!
//! Meshes do not carry textures themselves. Instead every face corner gets a UV
//! from a [`TextureResolver`], normally an [`AtlasTextureResolver`] that maps
//! block types onto tiles of a square texture atlas.

use crate::engine_state::voxels::block::{
    block_side::FaceOrientation, BlockTypeSize, BLOCK_TYPE_TO_TEXTURE_TILES,
};

/// Number of tiles along each edge of the default atlas.
pub const DEFAULT_TILES_PER_ROW: u32 = 16;

/// UV offsets inside a tile for face corners 0 to 3:
/// bottom-left, bottom-right, top-right, top-left.
///
/// The atlas V axis points down, so the bottom edge of a face is `v = 1`.
const CORNER_UV_OFFSETS: [(f32, f32); 4] = [(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)];

/// Maps a face corner to a texture coordinate.
pub trait TextureResolver {
    /// UV of corner `corner` (0 to 3) of a face of `block_type` with the given orientation.
    fn resolve(&self, block_type: BlockTypeSize, orientation: FaceOrientation, corner: usize) -> (f32, f32);
}

impl<F> TextureResolver for F
where
    F: Fn(BlockTypeSize, FaceOrientation, usize) -> (f32, f32),
{
    fn resolve(&self, block_type: BlockTypeSize, orientation: FaceOrientation, corner: usize) -> (f32, f32) {
        self(block_type, orientation, corner)
    }
}

/// Resolves UVs against a square atlas of equally sized tiles, indexed row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasTextureResolver {
    tiles_per_row: u32,
}

impl Default for AtlasTextureResolver {
    fn default() -> Self {
        Self::new(DEFAULT_TILES_PER_ROW)
    }
}

impl AtlasTextureResolver {
    /// Creates a resolver for an atlas `tiles_per_row` tiles wide and high.
    pub fn new(tiles_per_row: u32) -> Self {
        AtlasTextureResolver {
            tiles_per_row: tiles_per_row.max(1),
        }
    }

    /// Width of one tile in UV units.
    pub fn tile_uv_size(&self) -> f32 {
        1.0 / self.tiles_per_row as f32
    }

    /// Atlas tile used by a face of `block_type`, or `None` for air and unknown ids.
    pub fn tile_for(&self, block_type: BlockTypeSize, orientation: FaceOrientation) -> Option<u32> {
        let tiles = BLOCK_TYPE_TO_TEXTURE_TILES.get(block_type as usize)?;
        u32::try_from(tiles[orientation as usize]).ok()
    }
}

impl TextureResolver for AtlasTextureResolver {
    fn resolve(&self, block_type: BlockTypeSize, orientation: FaceOrientation, corner: usize) -> (f32, f32) {
        let Some(tile) = self.tile_for(block_type, orientation) else {
            return (0.0, 0.0);
        };
        let Some(&(offset_u, offset_v)) = CORNER_UV_OFFSETS.get(corner) else {
            return (0.0, 0.0);
        };

        let tile_x = (tile % self.tiles_per_row) as f32;
        let tile_y = (tile / self.tiles_per_row) as f32;
        let size = self.tile_uv_size();
        ((tile_x + offset_u) * size, (tile_y + offset_v) * size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::block::block_type::BlockType;

    #[test]
    fn grass_uses_different_tiles_per_orientation() {
        let atlas = AtlasTextureResolver::default();
        let grass = BlockType::GRASS.id();
        assert_eq!(atlas.tile_for(grass, FaceOrientation::TOP), Some(0));
        assert_eq!(atlas.tile_for(grass, FaceOrientation::SIDE), Some(1));
        assert_eq!(atlas.tile_for(grass, FaceOrientation::BOTTOM), Some(2));
    }

    #[test]
    fn corners_span_one_tile() {
        let atlas = AtlasTextureResolver::default();
        let planks = BlockType::PLANKS.id();
        assert_eq!(atlas.resolve(planks, FaceOrientation::SIDE, 0), (11.0 / 16.0, 1.0 / 16.0));
        assert_eq!(atlas.resolve(planks, FaceOrientation::SIDE, 2), (12.0 / 16.0, 0.0));
    }

    #[test]
    fn untextured_blocks_map_to_origin() {
        let atlas = AtlasTextureResolver::default();
        assert_eq!(atlas.resolve(BlockType::AIR.id(), FaceOrientation::TOP, 1), (0.0, 0.0));
        assert_eq!(atlas.resolve(200, FaceOrientation::SIDE, 1), (0.0, 0.0));
    }

    #[test]
    fn closures_are_resolvers() {
        let flat = |_: BlockTypeSize, _: FaceOrientation, corner: usize| (corner as f32, 0.5);
        assert_eq!(flat.resolve(3, FaceOrientation::TOP, 2), (2.0, 0.5));
    }
}
