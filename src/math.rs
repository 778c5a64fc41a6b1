//! # Vector Helpers
//!
//! Explicit vector operations over `cgmath`'s plain `Vector3<f32>`/`Point3<f32>`
//! values, used by collision, raycasting and agent movement.

use cgmath::{Point3, Vector3};

/// World up direction.
pub const UP: Vector3<f32> = Vector3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};

/// Sign of `value` as a grid step: `1`, `-1`, or `0` for zero (including `-0.0`).
pub fn sign(value: f32) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Dot product.
pub fn dot(a: Vector3<f32>, b: Vector3<f32>) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Cross product `a × b`.
pub fn cross(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Euclidean length.
pub fn length(v: Vector3<f32>) -> f32 {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`. A zero vector is returned unchanged.
pub fn normalize(v: Vector3<f32>) -> Vector3<f32> {
    let len = length(v);
    if len > 0.0 {
        Vector3::new(v.x / len, v.y / len, v.z / len)
    } else {
        v
    }
}

/// True when every component is exactly zero.
pub fn is_zero(v: Vector3<f32>) -> bool {
    v.x == 0.0 && v.y == 0.0 && v.z == 0.0
}

/// Floors a single world-space coordinate to the index of the cell containing it.
pub fn floor_to_cell(value: f32) -> i32 {
    value.floor() as i32
}

/// Floors a world-space point to the voxel cell containing it.
pub fn point_to_cell(point: Point3<f32>) -> Point3<i32> {
    Point3::new(
        floor_to_cell(point.x),
        floor_to_cell(point.y),
        floor_to_cell(point.z),
    )
}
