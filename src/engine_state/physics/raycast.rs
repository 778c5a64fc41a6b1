//! # Raycast Module
//!
//! Grid traversal for block picking, after Amanatides and Woo's
//! "A Fast Voxel Traversal Algorithm". The ray visits every cell it passes
//! through in order, so the first solid cell is exactly the block under the
//! crosshair, and the axis of the last step gives the face that was hit.

use cgmath::{Point3, Vector3};

use crate::{
    engine_state::voxels::{
        block::{block_side::BlockSide, BlockTypeSize},
        chunk::BlockPosition,
        world::World,
    },
    math::{is_zero, normalize, point_to_cell, sign},
};

/// Default reach of a selection ray, in blocks.
pub const DEFAULT_MAX_DISTANCE: f32 = 10.0;

/// The first solid cell a ray reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// The solid cell.
    pub cell: BlockPosition,
    /// Outward normal of the face the ray entered through; zero when the ray
    /// started inside the cell.
    pub normal: Vector3<i32>,
    /// Distance along the ray to the face that was crossed.
    pub distance: f32,
    /// Block id of the cell.
    pub voxel: BlockTypeSize,
}

impl RaycastHit {
    /// The empty cell in front of the hit face, where a new block would go.
    pub fn adjacent_cell(&self) -> BlockPosition {
        self.cell + self.normal
    }

    /// The side of the hit block the ray entered through, or `None` when the
    /// ray started inside it.
    pub fn side(&self) -> Option<BlockSide> {
        BlockSide::from_normal(self.normal)
    }
}

/// Casts rays through a borrowed world.
#[derive(Debug, Clone, Copy)]
pub struct GridRaycaster<'a> {
    world: &'a World,
}

impl<'a> GridRaycaster<'a> {
    /// Creates a raycaster over `world`.
    pub fn new(world: &'a World) -> Self {
        GridRaycaster { world }
    }

    /// Upper bound on cells visited for a ray of length `max_distance`.
    ///
    /// A ray can cross at most `ceil(max_distance)` boundaries on each axis.
    /// Saturates at `usize::MAX` for very long or infinite reaches.
    pub fn max_steps(max_distance: f32) -> usize {
        (max_distance.max(0.0).ceil() as usize)
            .saturating_mul(3)
            .saturating_add(3)
    }

    /// Finds the first solid cell along a ray.
    ///
    /// # Arguments
    /// * `origin` - Start of the ray
    /// * `direction` - Direction of the ray; need not be normalized but must not be zero
    /// * `max_distance` - Reach of the ray
    ///
    /// # Returns
    /// The hit, or `None` when nothing solid lies within `max_distance`.
    pub fn cast(
        &self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
        max_distance: f32,
    ) -> Option<RaycastHit> {
        if is_zero(direction) {
            log::warn!("Ignoring raycast with a zero direction from {:?}", origin);
            return None;
        }
        let direction = normalize(direction);
        // Nothing to hit in a world without chunks.
        let (extent_min, extent_max) = self.world.voxel_extent()?;

        let mut cell = point_to_cell(origin);
        let step = Vector3::new(sign(direction.x), sign(direction.y), sign(direction.z));

        let delta = Vector3::new(
            axis_delta(direction.x),
            axis_delta(direction.y),
            axis_delta(direction.z),
        );
        let mut t_max = Vector3::new(
            first_crossing(origin.x, cell.x, step.x, direction.x),
            first_crossing(origin.y, cell.y, step.y, direction.y),
            first_crossing(origin.z, cell.z, step.z, direction.z),
        );

        let mut normal = Vector3::new(0, 0, 0);
        let mut distance = 0.0f32;

        for _ in 0..Self::max_steps(max_distance) {
            if leaves_extent(cell, step, extent_min, extent_max) {
                break;
            }

            let voxel = self.world.get_voxel(cell);
            if voxel != 0 {
                return Some(RaycastHit {
                    cell,
                    normal,
                    distance: distance.max(0.0),
                    voxel,
                });
            }

            let axis = if t_max.x < t_max.y {
                if t_max.x < t_max.z {
                    0
                } else {
                    2
                }
            } else if t_max.y < t_max.z {
                1
            } else {
                2
            };

            // The grid ends at the i32 limits.
            let Some(next) = cell[axis].checked_add(step[axis]) else {
                break;
            };
            cell[axis] = next;
            distance = t_max[axis];
            t_max[axis] += delta[axis];
            normal = Vector3::new(0, 0, 0);
            normal[axis] = -step[axis];

            if distance > max_distance {
                break;
            }
        }

        None
    }
}

/// Whether `cell` lies outside the inclusive voxel extent on some axis and the
/// ray can only move further away on it.
#[inline]
fn leaves_extent(
    cell: BlockPosition,
    step: Vector3<i32>,
    min: BlockPosition,
    max: BlockPosition,
) -> bool {
    (0..3).any(|axis| {
        (cell[axis] < min[axis] && step[axis] <= 0) || (cell[axis] > max[axis] && step[axis] >= 0)
    })
}

/// Ray parameter between two boundary crossings on one axis.
#[inline]
fn axis_delta(direction: f32) -> f32 {
    if direction != 0.0 {
        (1.0 / direction).abs()
    } else {
        f32::INFINITY
    }
}

/// Ray parameter of the first boundary crossing on one axis.
#[inline]
fn first_crossing(origin: f32, cell: i32, step: i32, direction: f32) -> f32 {
    match step {
        1 => (cell as f32 + 1.0 - origin) / direction,
        -1 => (cell as f32 - origin) / direction,
        _ => f32::INFINITY,
    }
}
