//! # Configuration
//!
//! Serializable settings for the world, terrain, agent physics and raycasting.
//! Every field has a default, so a configuration file only needs to name the
//! values it changes:
//!
//! ```json
//! { "chunk_size": 16, "terrain": { "seed": 42 } }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine_state::{
    physics::{raycast::DEFAULT_MAX_DISTANCE, AgentDimensions},
    voxels::{
        block::block_type::BlockType, chunk::DEFAULT_CHUNK_DIMENSION,
        generation::terrain::TerrainConfig,
    },
};

/// Errors produced while loading or validating a [`WorldConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text is not valid JSON for [`WorldConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration parsed but holds values the world cannot use.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Movement tunables applied by [`crate::EngineState::update`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration in blocks per second squared.
    pub gravity: f32,
    /// Vertical speed given by a jump.
    pub jump_speed: f32,
    /// Horizontal walking speed in blocks per second.
    pub move_speed: f32,
    /// Upper bound on a single tick's elapsed time, in seconds.
    pub max_delta: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gravity: 9.8,
            jump_speed: 5.0,
            move_speed: 5.0,
            max_delta: 0.1,
        }
    }
}

/// Reach of block selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaycastConfig {
    /// Maximum distance, in blocks, a selection ray travels.
    pub max_distance: f32,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        RaycastConfig {
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

/// Top-level configuration, fixed at construction of an [`crate::EngineState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Edge length of a chunk in voxels.
    pub chunk_size: i32,
    /// Terrain generation parameters.
    pub terrain: TerrainConfig,
    /// Agent collision box.
    pub agent: AgentDimensions,
    /// Agent movement.
    pub physics: PhysicsConfig,
    /// Block selection reach.
    pub raycast: RaycastConfig,
    /// Chunk radius around the origin generated at startup (at chunk Y 0).
    pub generation_radius: i32,
    /// Number of chunk meshes kept before the least recently used is rebuilt on demand.
    pub mesh_cache_capacity: usize,
    /// Name of the block placed by the demo, e.g. `"grass"`.
    pub place_block: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            chunk_size: DEFAULT_CHUNK_DIMENSION,
            terrain: TerrainConfig::default(),
            agent: AgentDimensions::default(),
            physics: PhysicsConfig::default(),
            raycast: RaycastConfig::default(),
            generation_radius: 1,
            mesh_cache_capacity: 64,
            place_block: "grass".to_string(),
        }
    }
}

impl WorldConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Checks the invariants the world components rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "chunk_size must be positive, got {}",
                self.chunk_size
            )));
        }
        if self.terrain.min_height > self.terrain.max_height {
            return Err(ConfigError::Invalid(format!(
                "terrain.min_height ({}) exceeds terrain.max_height ({})",
                self.terrain.min_height, self.terrain.max_height
            )));
        }
        if !(self.raycast.max_distance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "raycast.max_distance must be positive, got {}",
                self.raycast.max_distance
            )));
        }
        if !(self.physics.max_delta > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "physics.max_delta must be positive, got {}",
                self.physics.max_delta
            )));
        }
        if self.mesh_cache_capacity == 0 {
            return Err(ConfigError::Invalid(
                "mesh_cache_capacity must be at least 1".to_string(),
            ));
        }
        if self.generation_radius < 0 {
            return Err(ConfigError::Invalid(format!(
                "generation_radius must not be negative, got {}",
                self.generation_radius
            )));
        }
        self.place_block_type()?;
        Ok(())
    }

    /// Resolves [`WorldConfig::place_block`] to a placeable block type.
    pub fn place_block_type(&self) -> Result<BlockType, ConfigError> {
        match BlockType::from_name(&self.place_block) {
            Some(BlockType::AIR) => Err(ConfigError::Invalid(
                "place_block cannot be air".to_string(),
            )),
            Some(block_type) => Ok(block_type),
            None => Err(ConfigError::Invalid(format!(
                "unknown place_block `{}`",
                self.place_block
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = WorldConfig::from_json_str(r#"{ "terrain": { "seed": 42 } }"#).unwrap();
        assert_eq!(config.terrain.seed, 42);
        assert_eq!(config.terrain.sea_level, 8);
        assert_eq!(config.chunk_size, 32);
        assert_eq!(config.agent, AgentDimensions::default());
    }

    #[test]
    fn rejects_inverted_height_range() {
        let result = WorldConfig::from_json_str(
            r#"{ "terrain": { "min_height": 30, "max_height": 10 } }"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_non_positive_max_delta() {
        for text in [
            r#"{ "physics": { "max_delta": -1.0 } }"#,
            r#"{ "physics": { "max_delta": 0.0 } }"#,
        ] {
            let result = WorldConfig::from_json_str(text);
            assert!(matches!(result, Err(ConfigError::Invalid(_))), "{text} accepted");
        }

        let mut config = WorldConfig::default();
        config.physics.max_delta = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_air_as_placement_block() {
        let result = WorldConfig::from_json_str(r#"{ "place_block": "air" }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
