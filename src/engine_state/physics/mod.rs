//! # Physics Module
//!
//! Read-only queries of the world against a moving agent.
//!
//! * [`collision`]: ground detection, per-axis velocity clamping and box overlap tests
//! * [`raycast`]: grid traversal for picking the block the agent looks at
//!
//! Neither component moves the agent. They advise the caller, which owns the
//! [`AgentState`] and integrates it.

use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};

pub mod collision;
pub mod raycast;

/// Size of the agent's axis-aligned box, measured from its eye position.
///
/// The box spans `eye_height` below the eye and `height - eye_height` above it,
/// and `half_width` to either side on X and Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentDimensions {
    /// Horizontal half extent of the box.
    pub half_width: f32,
    /// Total height of the box.
    pub height: f32,
    /// Distance from the feet up to the eye.
    pub eye_height: f32,
}

impl Default for AgentDimensions {
    fn default() -> Self {
        AgentDimensions {
            half_width: 0.4,
            height: 1.8,
            eye_height: 1.6,
        }
    }
}

impl AgentDimensions {
    /// Distance from the eye up to the top of the box.
    #[inline]
    pub fn head_room(&self) -> f32 {
        self.height - self.eye_height
    }
}

/// Position and velocity of the agent. The position is the eye, not the feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentState {
    /// Eye position in world space.
    pub position: Point3<f32>,
    /// Velocity in blocks per second.
    pub velocity: Vector3<f32>,
}

impl AgentState {
    /// An agent at rest at `position`.
    pub fn at(position: Point3<f32>) -> Self {
        AgentState {
            position,
            velocity: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

impl Default for AgentState {
    fn default() -> Self {
        Self::at(Point3::new(0.0, 0.0, 0.0))
    }
}
