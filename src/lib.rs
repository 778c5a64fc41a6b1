#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! The world-side core of a block-building game: chunked sparse voxel storage,
//! deterministic procedural terrain, face-culled chunk meshing, agent collision
//! and grid raycasting for block selection.
//!
//! ## Key Modules
//!
//! * `config` - Serializable configuration for every tunable in the crate
//! * `math` - Plain vector helpers used by collision, raycasting and movement
//! * `engine_state` - The world components and the per-tick orchestrator
//!
//! ## Architecture
//!
//! Components are leaf-first and communicate only through the [`World`] store:
//! * Terrain generation reads a [`NoiseField`] and writes chunks into the world
//! * Meshing reads the world and produces renderable [`ChunkMesh`] geometry
//! * Collision and raycasting read the world against the agent's position
//!
//! Nothing here draws, polls input or touches a GPU. A renderer consumes the
//! generated meshes, and an input layer feeds [`PlayerAction`]s into
//! [`EngineState::update`].
//!
//! ## Usage
//!
//! ```no_run
//! use voxel_world::{EngineState, PlayerAction, WorldConfig};
//!
//! let mut engine = EngineState::new(WorldConfig::default());
//! engine.generate_area(1);
//! engine.respawn();
//!
//! loop {
//!     engine.update(1.0 / 60.0, PlayerAction::default());
//! }
//! ```

use log::info;

pub mod config;
pub mod engine_state;
pub mod math;

pub use config::{ConfigError, PhysicsConfig, RaycastConfig, WorldConfig};
pub use engine_state::{
    physics::{
        collision::Collision,
        raycast::{GridRaycaster, RaycastHit},
        AgentDimensions, AgentState,
    },
    rendering::{
        meshing::{ChunkMesh, ChunkMeshCache, MeshBuilder},
        texture::{AtlasTextureResolver, TextureResolver},
        vertex::Vertex,
    },
    voxels::{
        block::{block_side::BlockSide, block_side::FaceOrientation, block_type::BlockType, BlockTypeSize},
        chunk::{BlockPosition, Chunk, ChunkPosition, DEFAULT_CHUNK_DIMENSION},
        generation::{noise_field::NoiseField, terrain::TerrainConfig, terrain::TerrainGenerator},
        world::{ChunkBounds, World},
    },
    BreakOutcome, EngineState, PlaceOutcome, PlayerAction,
};

/// Number of simulated ticks the demo walks the agent forward.
const DEMO_TICKS: usize = 120;

/// Runs the headless demo used by the binary.
///
/// Initializes logging, loads the configuration named by the first command line
/// argument (or the defaults), generates the starting area, walks the agent forward
/// and exercises block breaking and placing.
pub fn run() -> Result<(), ConfigError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match std::env::args().nth(1) {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::default(),
    };
    let radius = config.generation_radius;
    let place_type = config.place_block_type()?;

    let mut engine = EngineState::new(config);
    let total_faces = engine.generate_area(radius);
    info!(
        "Generated {} chunks with {} total faces",
        engine.world.chunk_count(),
        total_faces
    );

    engine.respawn();
    info!("Agent spawned at {:?}", engine.agent.position);

    let walk = PlayerAction {
        forward: true,
        ..Default::default()
    };
    for _ in 0..DEMO_TICKS {
        engine.update(1.0 / 60.0, walk);
    }
    info!("Agent walked to {:?}", engine.agent.position);

    engine.set_facing(cgmath::Vector3::new(0.0, -1.0, -1.0));
    match engine.selection() {
        Some(hit) => info!(
            "Looking at block {} at {:?} (side {:?}, {:.2} away)",
            hit.voxel,
            hit.cell,
            hit.side(),
            hit.distance
        ),
        None => info!("Nothing within reach"),
    }

    info!("Break: {:?}", engine.break_block());
    info!("Place: {:?}", engine.place_block(place_type));

    Ok(())
}
