//! # Collision Module
//!
//! Agent-versus-voxel queries. The agent is an axis-aligned box hanging from its
//! eye position; every query floors box extents to cells and asks the world
//! whether those cells are solid.

use cgmath::{Point3, Vector3};

use super::AgentDimensions;
use crate::{engine_state::voxels::world::World, math::floor_to_cell};

/// How far below the feet the ground probe looks.
const GROUND_PROBE_DEPTH: f32 = 0.1;
/// Highest cell examined by [`Collision::ground_level`].
const GROUND_SCAN_TOP: i32 = 50;
/// Lowest cell examined by [`Collision::ground_level`].
const GROUND_SCAN_BOTTOM: i32 = -10;
/// Tolerance shaved off occupied extents so a box resting exactly on a cell
/// boundary does not count as overlapping the cell beyond it.
const CONTACT_SKIN: f32 = 1e-3;

/// Inclusive range of cells covered by the extent `[low, high]`.
#[inline]
fn occupied_cells(low: f32, high: f32) -> (i32, i32) {
    (floor_to_cell(low + CONTACT_SKIN), floor_to_cell(high - CONTACT_SKIN))
}

/// Collision queries against a borrowed world.
#[derive(Debug, Clone, Copy)]
pub struct Collision<'a> {
    world: &'a World,
    dimensions: AgentDimensions,
}

impl<'a> Collision<'a> {
    /// Creates a collision query for an agent of the given size.
    pub fn new(world: &'a World, dimensions: AgentDimensions) -> Self {
        Collision { world, dimensions }
    }

    /// The agent size used by every query.
    pub fn dimensions(&self) -> AgentDimensions {
        self.dimensions
    }

    /// Whether the cell just under the agent's feet is solid.
    ///
    /// # Arguments
    /// * `position` - Eye position of the agent
    pub fn is_grounded(&self, position: Point3<f32>) -> bool {
        let probe = Point3::new(
            floor_to_cell(position.x),
            floor_to_cell(position.y - self.dimensions.eye_height - GROUND_PROBE_DEPTH),
            floor_to_cell(position.z),
        );
        self.world.is_solid(probe)
    }

    /// Height of the walkable surface of the column containing `(x, z)`.
    ///
    /// Scans down from Y 50 to Y -10.
    ///
    /// # Returns
    /// One above the first solid cell found, or `None` if the column is empty
    /// over the scanned range.
    pub fn ground_level(&self, x: f32, z: f32) -> Option<i32> {
        let cell_x = floor_to_cell(x);
        let cell_z = floor_to_cell(z);
        (GROUND_SCAN_BOTTOM..=GROUND_SCAN_TOP)
            .rev()
            .find(|&y| self.world.is_solid(Point3::new(cell_x, y, cell_z)))
            .map(|y| y + 1)
    }

    /// Clamps `velocity` so one step of `delta_time` does not move the agent into a solid cell.
    ///
    /// Each axis is handled on its own: the cells on the leading face of the box
    /// are taken at the tentative next position on that axis and the current
    /// position on the other two. A solid cell zeroes that component only, which
    /// lets the agent slide along walls.
    ///
    /// # Returns
    /// The adjusted velocity.
    pub fn check_collision(
        &self,
        position: Point3<f32>,
        velocity: Vector3<f32>,
        delta_time: f32,
    ) -> Vector3<f32> {
        let w = self.dimensions.half_width;
        let eye = self.dimensions.eye_height;
        let head = self.dimensions.head_room();
        let next = position + velocity * delta_time;

        let span_x = occupied_cells(position.x - w, position.x + w);
        let span_y = occupied_cells(position.y - eye, position.y + head);
        let span_z = occupied_cells(position.z - w, position.z + w);

        let mut adjusted = velocity;

        if velocity.x != 0.0 {
            let x = if velocity.x > 0.0 {
                floor_to_cell(next.x + w)
            } else {
                floor_to_cell(next.x - w)
            };
            if self.any_solid((x, x), span_y, span_z) {
                adjusted.x = 0.0;
            }
        }

        if velocity.z != 0.0 {
            let z = if velocity.z > 0.0 {
                floor_to_cell(next.z + w)
            } else {
                floor_to_cell(next.z - w)
            };
            if self.any_solid(span_x, span_y, (z, z)) {
                adjusted.z = 0.0;
            }
        }

        if velocity.y != 0.0 {
            let y = if velocity.y > 0.0 {
                floor_to_cell(next.y + head)
            } else {
                floor_to_cell(next.y - eye)
            };
            if self.any_solid(span_x, (y, y), span_z) {
                adjusted.y = 0.0;
            }
        }

        adjusted
    }

    /// Whether a box of the given size hanging from `position` overlaps any solid cell.
    ///
    /// The eye offset comes from this query's dimensions.
    pub fn box_intersects(&self, position: Point3<f32>, half_width: f32, height: f32) -> bool {
        let eye = self.dimensions.eye_height;
        self.any_solid(
            occupied_cells(position.x - half_width, position.x + half_width),
            occupied_cells(position.y - eye, position.y + (height - eye)),
            occupied_cells(position.z - half_width, position.z + half_width),
        )
    }

    /// Whether the agent's own box at `position` overlaps any solid cell.
    pub fn agent_intersects(&self, position: Point3<f32>) -> bool {
        self.box_intersects(position, self.dimensions.half_width, self.dimensions.height)
    }

    fn any_solid(&self, xs: (i32, i32), ys: (i32, i32), zs: (i32, i32)) -> bool {
        (ys.0..=ys.1).any(|y| {
            (zs.0..=zs.1)
                .any(|z| (xs.0..=xs.1).any(|x| self.world.is_solid(Point3::new(x, y, z))))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_world() -> World {
        let mut world = World::new();
        for x in -4..4 {
            for z in -4..4 {
                world.set_voxel(Point3::new(x, 0, z), 3);
            }
        }
        world
    }

    #[test]
    fn grounded_on_floor() {
        let world = floor_world();
        let collision = Collision::new(&world, AgentDimensions::default());
        assert!(collision.is_grounded(Point3::new(0.5, 2.6, 0.5)));
        assert!(!collision.is_grounded(Point3::new(0.5, 4.0, 0.5)));
    }

    #[test]
    fn ground_level_is_top_of_column() {
        let world = floor_world();
        let collision = Collision::new(&world, AgentDimensions::default());
        assert_eq!(collision.ground_level(0.5, 0.5), Some(1));
        assert_eq!(collision.ground_level(10.5, 0.5), None);
    }

    #[test]
    fn falling_stops_at_floor() {
        let world = floor_world();
        let collision = Collision::new(&world, AgentDimensions::default());
        let adjusted =
            collision.check_collision(Point3::new(0.5, 2.65, 0.5), Vector3::new(0.0, -1.0, 0.0), 0.1);
        assert_eq!(adjusted.y, 0.0);
    }

    #[test]
    fn ceiling_stops_jump() {
        let mut world = floor_world();
        world.set_voxel(Point3::new(0, 3, 0), 3);
        let collision = Collision::new(&world, AgentDimensions::default());
        let adjusted =
            collision.check_collision(Point3::new(0.5, 2.6, 0.5), Vector3::new(0.0, 5.0, 0.0), 0.1);
        assert_eq!(adjusted.y, 0.0);
    }

    #[test]
    fn box_overlap_uses_eye_offset() {
        let world = floor_world();
        let collision = Collision::new(&world, AgentDimensions::default());
        assert!(!collision.agent_intersects(Point3::new(0.5, 2.6, 0.5)));
        assert!(collision.agent_intersects(Point3::new(0.5, 2.5, 0.5)));
    }

    #[test]
    fn standing_on_floor_does_not_block_walking() {
        let world = floor_world();
        let collision = Collision::new(&world, AgentDimensions::default());
        let eye = 1.0 + AgentDimensions::default().eye_height;
        let velocity = Vector3::new(5.0, 0.0, -5.0);
        let adjusted = collision.check_collision(Point3::new(0.5, eye, 0.5), velocity, 0.016);
        assert_eq!(adjusted, velocity);
    }
}
