//! # Terrain Module
//!
//! Height-map terrain built on [`NoiseField`].
//!
//! Each column gets a surface height from the fractal noise; blocks are then
//! chosen by depth below that surface:
//!
//! | depth | block |
//! |-------|-------|
//! | above surface | air |
//! | 0 | grass above the shoreline, sand on it, dirt under water |
//! | 1-3 | dirt |
//! | 4+ | stone |
//!
//! World Y 0 is always bedrock.

use cgmath::Point3;
use serde::{Deserialize, Serialize};

use super::noise_field::NoiseField;
use crate::engine_state::voxels::{
    block::{block_type::BlockType, BlockTypeSize},
    chunk::{Chunk, ChunkPosition},
    world::World,
};

/// Octaves summed for the height map.
const HEIGHT_OCTAVES: u32 = 4;
/// Amplitude falloff per octave for the height map.
const HEIGHT_PERSISTENCE: f64 = 0.5;
/// How far above and below sea level the surface counts as shoreline.
const SHORELINE_BAND: i32 = 2;
/// Depth at which dirt gives way to stone.
const STONE_DEPTH: i32 = 4;

/// Tunables of the terrain generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Seed of the noise permutation.
    pub seed: i64,
    /// Water level; decides between grass, sand and dirt on the surface.
    pub sea_level: i32,
    /// Lowest possible surface height.
    pub min_height: i32,
    /// Highest possible surface height.
    pub max_height: i32,
    /// Noise frequency; lower values give smoother terrain.
    pub height_scale: f64,
    /// Total height variation around sea level.
    pub height_amplitude: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            seed: 12345,
            sea_level: 8,
            min_height: 0,
            max_height: 24,
            height_scale: 0.03,
            height_amplitude: 16.0,
        }
    }
}

/// Fills chunks with layered terrain.
///
/// The generator holds no per-chunk state: the same seed and tunables always
/// produce the same block at the same world position.
#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    config: TerrainConfig,
    noise: NoiseField,
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        Self::new(TerrainConfig::default())
    }
}

impl TerrainGenerator {
    /// Creates a generator from a full set of tunables.
    pub fn new(config: TerrainConfig) -> Self {
        log::info!("TerrainGenerator initialized with seed: {}", config.seed);
        TerrainGenerator {
            noise: NoiseField::new(config.seed),
            config,
        }
    }

    /// Creates a generator with default tunables and the given seed.
    pub fn with_seed(seed: i64) -> Self {
        Self::new(TerrainConfig {
            seed,
            ..TerrainConfig::default()
        })
    }

    /// The tunables this generator was built with.
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// The noise field behind the height map.
    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    /// Surface height of the column at `(x, z)`.
    ///
    /// Always within `[min_height, max_height]`.
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let c = &self.config;
        let value = self.noise.fractal_sum(
            x as f64 * c.height_scale,
            z as f64 * c.height_scale,
            HEIGHT_OCTAVES,
            HEIGHT_PERSISTENCE,
        );
        let height = c.sea_level as f64 + (value - 0.5) * c.height_amplitude;
        height
            .min(c.max_height as f64)
            .max(c.min_height as f64)
            .floor() as i32
    }

    /// Block at world height `y` in a column whose surface is at `height`.
    pub fn layer_block(&self, y: i32, height: i32) -> BlockType {
        if y == 0 {
            return BlockType::BEDROCK;
        }
        if y > height {
            return BlockType::AIR;
        }

        let sea_level = self.config.sea_level;
        match height - y {
            0 if y > sea_level + SHORELINE_BAND => BlockType::GRASS,
            0 if y >= sea_level - SHORELINE_BAND => BlockType::SAND,
            0 => BlockType::DIRT,
            depth if depth < STONE_DEPTH => BlockType::DIRT,
            _ => BlockType::STONE,
        }
    }

    /// Generates the block ids of one chunk without touching a world.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates to generate
    /// * `dimension` - Edge length of the chunk in blocks
    ///
    /// # Returns
    /// `dimension³` ids in chunk storage order.
    pub fn generate_chunk_data(&self, position: ChunkPosition, dimension: i32) -> Vec<BlockTypeSize> {
        let d = dimension.max(1);
        let base = Point3::new(position.x * d, position.y * d, position.z * d);

        let mut heights = Vec::with_capacity((d * d) as usize);
        for local_z in 0..d {
            for local_x in 0..d {
                heights.push(self.height_at(base.x + local_x, base.z + local_z));
            }
        }

        let mut blocks = Vec::with_capacity((d * d * d) as usize);
        for local_y in 0..d {
            let y = base.y + local_y;
            for &height in &heights {
                blocks.push(self.layer_block(y, height).id());
            }
        }
        blocks
    }

    /// Generates the chunk at `position` and stores it in `world`, replacing
    /// whatever was there.
    pub fn fill_chunk(&self, world: &mut World, position: ChunkPosition) {
        let dimension = world.chunk_dimension();
        let blocks = self.generate_chunk_data(position, dimension);
        let chunk = Chunk::from_blocks(position, dimension, blocks);
        log::debug!(
            "Generated terrain for chunk {:?}: {} solid blocks",
            position,
            chunk.solid_count()
        );
        world.insert_chunk(chunk);
    }
}
