//! # Voxel World Core
//!
//! This module contains the authoritative voxel state and the procedural
//! generation that fills it.
//!
//! ## Architecture
//!
//! The voxel system is organized into several key components:
//!
//! * **Block**: Block type ids, names and face orientation
//! * **Chunk**: Fixed-size cubes of block ids stored as flat arrays
//! * **World**: Sparse mapping from chunk coordinates to chunks, addressed in world coordinates
//! * **Generation**: Seeded coherent noise and the layered terrain rules built on it
//!
//! ## Data Flow
//!
//! 1. The terrain generator samples noise and writes whole chunks into the world
//! 2. Edits write single voxels through the world, creating chunks on demand
//! 3. Meshing, collision and raycasting read voxels back through the world
//!
//! ## Thread Safety
//!
//! The world is a plain owned value. Writers take `&mut World` and readers `&World`,
//! so the borrow checker enforces the single-mutator rule; there is no internal locking.

pub mod block;
pub mod chunk;
pub mod generation;
pub mod world;
