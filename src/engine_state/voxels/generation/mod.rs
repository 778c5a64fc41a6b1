//! # Generation Module
//!
//! Procedural content for the voxel world.
//!
//! * [`noise_field`]: seeded 2D gradient noise and its fractal sum
//! * [`terrain`]: the height map and layer rules that turn noise into blocks
//!
//! Both are pure functions of their seed and input coordinates, so any chunk can
//! be generated in any order with identical results.

pub mod noise_field;
pub mod terrain;
