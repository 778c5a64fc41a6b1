//! # Engine State Module
//!
//! The core module that owns the voxel world and drives it one tick at a time.
//!
//! ## Key Components
//!
//! * `EngineState` - The main state container and per-tick orchestrator
//! * `physics` - Collision queries and grid raycasting against the world
//! * `rendering` - Chunk mesh extraction, texture lookup and mesh caching
//! * `voxels` - Block types, chunks, the world store and terrain generation
//!
//! ## Architecture
//!
//! Every subsystem is a plain value or a short-lived borrow of the [`World`].
//! `EngineState` owns the world and the cached meshes; collision and raycasting
//! borrow the world for the duration of one query. Edits go through
//! `EngineState`, which invalidates the affected meshes so the next request
//! rebuilds them.
//!
//! ## Tick Order
//!
//! [`EngineState::update`] runs, in order: delta clamping, horizontal intent,
//! gravity, jumping, ground snapping, per-axis collision, integration and the
//! floor safety net.

use cgmath::{Point3, Vector3};
use log::{debug, info, warn};
use web_time::Instant;

use physics::{
    collision::Collision,
    raycast::{GridRaycaster, RaycastHit},
    AgentState,
};
use rendering::{
    meshing::{ChunkMesh, ChunkMeshCache},
    texture::{AtlasTextureResolver, TextureResolver},
};
use voxels::{
    block::{block_side::BlockSide, block_type::BlockType, AIR_ID},
    chunk::{BlockPosition, ChunkPosition},
    generation::terrain::TerrainGenerator,
    world::World,
};

use crate::{
    config::WorldConfig,
    math::{cross, is_zero, normalize, UP},
};

pub mod physics;
pub mod rendering;
pub mod voxels;

/// World X and Z of the spawn column.
const SPAWN_COLUMN: i32 = 16;
/// Ground snapping applies when the eye is within this distance of its resting height.
const SNAP_TOLERANCE: f32 = 0.1;
/// Ground snapping lifts the agent by at most this much.
const MAX_SNAP_RISE: f32 = 1.0;

/// Movement intents for one tick, supplied by the input layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerAction {
    /// Move along the facing direction
    pub forward: bool,
    /// Move against the facing direction
    pub backward: bool,
    /// Strafe left
    pub left: bool,
    /// Strafe right
    pub right: bool,
    /// Jump if standing on the ground
    pub jump: bool,
}

/// Result of [`EngineState::break_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakOutcome {
    /// The block at this position was removed.
    Broken(BlockPosition),
    /// No block within reach.
    NoTarget,
    /// The targeted block cannot be removed.
    Unbreakable(BlockPosition),
}

/// Result of [`EngineState::place_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The block was written at this position.
    Placed(BlockPosition),
    /// No block within reach to place against.
    NoTarget,
    /// The target cell already holds a block.
    Occupied(BlockPosition),
    /// The new block would overlap the agent.
    IntersectsAgent(BlockPosition),
    /// Air cannot be placed.
    NotPlaceable,
}

/// The main state container for the voxel world.
///
/// Owns the world, the terrain generator, the mesh cache and the agent, and
/// composes collision, raycasting and meshing into ticks and edits.
///
/// # Examples
///
/// ```
/// use voxel_world::{EngineState, PlayerAction, WorldConfig};
///
/// let mut engine = EngineState::new(WorldConfig::default());
/// engine.world.fill_flat_test_terrain();
/// engine.respawn();
///
/// for _ in 0..10 {
///     engine.update(1.0 / 60.0, PlayerAction { forward: true, ..Default::default() });
/// }
/// ```
#[derive(Debug)]
pub struct EngineState {
    /// Settings the engine was built with
    pub config: WorldConfig,
    /// The voxel world
    pub world: World,
    /// Terrain generator used by [`Self::generate_area`]
    pub generator: TerrainGenerator,
    /// Built chunk meshes
    pub mesh_cache: ChunkMeshCache,
    /// Texture coordinates for built meshes
    pub texture_resolver: AtlasTextureResolver,
    /// The agent's eye position and velocity
    pub agent: AgentState,
    /// Unit view direction of the agent
    pub facing: Vector3<f32>,
}

impl EngineState {
    /// Creates an engine with an empty world.
    ///
    /// The configuration is taken as is; call [`WorldConfig::validate`] first
    /// when it comes from an untrusted source.
    pub fn new(config: WorldConfig) -> Self {
        let world = World::with_chunk_dimension(config.chunk_size);
        let generator = TerrainGenerator::new(config.terrain.clone());
        let mesh_cache = ChunkMeshCache::with_capacity(config.mesh_cache_capacity);

        EngineState {
            world,
            generator,
            mesh_cache,
            texture_resolver: AtlasTextureResolver::default(),
            agent: AgentState::default(),
            facing: Vector3::new(0.0, 0.0, -1.0),
            config,
        }
    }

    /// Generates and meshes the `(2r+1)×(2r+1)` grid of chunks around the origin at chunk Y 0.
    ///
    /// # Returns
    /// The total number of visible faces in the generated chunks.
    pub fn generate_area(&mut self, radius: i32) -> usize {
        let start = Instant::now();
        let radius = radius.max(0);
        let mut total_faces = 0;

        let positions: Vec<ChunkPosition> = (-radius..=radius)
            .flat_map(|x| (-radius..=radius).map(move |z| Point3::new(x, 0, z)))
            .collect();

        // Fill everything before meshing so seams between new chunks are culled.
        for &position in &positions {
            self.generator.fill_chunk(&mut self.world, position);
            self.invalidate_around_chunk(position);
        }
        for &position in &positions {
            if let Some(mesh) = self.chunk_mesh(position) {
                total_faces += mesh.face_count();
            }
        }

        info!(
            "Generated {} chunks with {} faces in {:?}",
            positions.len(),
            total_faces,
            start.elapsed()
        );
        total_faces
    }

    /// Eye position standing on the terrain surface of the spawn column.
    pub fn spawn_position(&self) -> Point3<f32> {
        let height = self.generator.height_at(SPAWN_COLUMN, SPAWN_COLUMN);
        Point3::new(
            SPAWN_COLUMN as f32,
            (height + 1) as f32 + self.config.agent.eye_height,
            SPAWN_COLUMN as f32,
        )
    }

    /// Puts the agent at rest at [`Self::spawn_position`].
    pub fn respawn(&mut self) {
        self.agent = AgentState::at(self.spawn_position());
    }

    /// Mesh of the chunk at `position`, building it if it is not cached.
    ///
    /// # Returns
    /// `None` when the chunk has nothing to draw.
    pub fn chunk_mesh(&mut self, position: ChunkPosition) -> Option<&ChunkMesh> {
        let resolver: &dyn TextureResolver = &self.texture_resolver;
        self.mesh_cache.get_or_build(&self.world, Some(resolver), position)
    }

    /// Collision queries for the configured agent size.
    pub fn collision(&self) -> Collision<'_> {
        Collision::new(&self.world, self.config.agent)
    }

    /// Raycaster over the world.
    pub fn raycaster(&self) -> GridRaycaster<'_> {
        GridRaycaster::new(&self.world)
    }

    /// Points the agent's view along `direction`. Zero vectors are ignored.
    pub fn set_facing(&mut self, direction: Vector3<f32>) {
        if is_zero(direction) {
            warn!("Ignoring zero facing direction");
            return;
        }
        self.facing = normalize(direction);
    }

    /// The block the agent is looking at, if any is within reach.
    pub fn selection(&self) -> Option<RaycastHit> {
        self.raycaster().cast(
            self.agent.position,
            self.facing,
            self.config.raycast.max_distance,
        )
    }

    /// Removes the block the agent is looking at.
    pub fn break_block(&mut self) -> BreakOutcome {
        let Some(hit) = self.selection() else {
            return BreakOutcome::NoTarget;
        };

        let breakable = BlockType::from_int(hit.voxel).map_or(true, BlockType::is_breakable);
        if !breakable {
            debug!("Refusing to break block {} at {:?}", hit.voxel, hit.cell);
            return BreakOutcome::Unbreakable(hit.cell);
        }

        self.world.set_voxel(hit.cell, AIR_ID);
        self.mesh_cache.invalidate_block(&self.world, hit.cell);
        debug!("Broke block {} at {:?}", hit.voxel, hit.cell);
        BreakOutcome::Broken(hit.cell)
    }

    /// Places `block_type` against the face of the block the agent is looking at.
    ///
    /// The placement is undone when the new block would overlap the agent.
    pub fn place_block(&mut self, block_type: BlockType) -> PlaceOutcome {
        if block_type == BlockType::AIR {
            warn!("Ignoring request to place air");
            return PlaceOutcome::NotPlaceable;
        }
        let Some(hit) = self.selection() else {
            return PlaceOutcome::NoTarget;
        };

        let target = hit.adjacent_cell();
        if self.world.is_solid(target) {
            return PlaceOutcome::Occupied(target);
        }

        self.world.set_voxel(target, block_type.id());
        if self.collision().agent_intersects(self.agent.position) {
            self.world.set_voxel(target, AIR_ID);
            debug!("Placement at {:?} would intersect the agent", target);
            return PlaceOutcome::IntersectsAgent(target);
        }

        self.mesh_cache.invalidate_block(&self.world, target);
        debug!("Placed {} at {:?}", block_type.name(), target);
        PlaceOutcome::Placed(target)
    }

    /// Advances the agent by `delta_time` seconds.
    ///
    /// # Arguments
    /// * `delta_time` - Time since the last tick; clamped to the configured maximum
    /// * `action` - Movement intents for this tick
    pub fn update(&mut self, delta_time: f32, action: PlayerAction) {
        let physics = self.config.physics;
        let dimensions = self.config.agent;
        // Never panics, even for a max_delta that skipped validation.
        let dt = delta_time.min(physics.max_delta).max(0.0);

        let mut position = self.agent.position;
        let mut velocity = self.agent.velocity;

        let forward = normalize(Vector3::new(self.facing.x, 0.0, self.facing.z));
        let right = normalize(cross(forward, UP));
        let mut horizontal = Vector3::new(0.0, 0.0, 0.0);
        if action.forward {
            horizontal = horizontal + forward;
        }
        if action.backward {
            horizontal = horizontal - forward;
        }
        if action.right {
            horizontal = horizontal + right;
        }
        if action.left {
            horizontal = horizontal - right;
        }
        velocity.x = horizontal.x * physics.move_speed;
        velocity.z = horizontal.z * physics.move_speed;

        velocity.y -= physics.gravity * dt;

        let collision = Collision::new(&self.world, dimensions);
        let grounded = collision.is_grounded(position);

        if action.jump && grounded {
            velocity.y = physics.jump_speed;
        }

        if grounded && velocity.y <= 0.0 {
            velocity.y = 0.0;
            if let Some(ground) = collision.ground_level(position.x, position.z) {
                let target = ground as f32 + dimensions.eye_height;
                let rise = target - position.y;
                if rise.abs() < SNAP_TOLERANCE || (rise > 0.0 && rise <= MAX_SNAP_RISE) {
                    position.y = target;
                }
            }
        }

        let adjusted = collision.check_collision(position, velocity, dt);
        position = position + adjusted * dt;
        velocity = adjusted;

        if position.y < dimensions.eye_height {
            position.y = dimensions.eye_height;
            velocity.y = 0.0;
        }

        self.agent.position = position;
        self.agent.velocity = velocity;
    }

    /// Drops the cached meshes of a chunk and its six face neighbors.
    fn invalidate_around_chunk(&mut self, position: ChunkPosition) {
        self.mesh_cache.invalidate_chunk(position);
        for side in BlockSide::all() {
            self.mesh_cache.invalidate_chunk(position + side.offset());
        }
    }
}
