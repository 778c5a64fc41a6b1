//! # Block Side Module
//!
//! This module defines the six faces of a voxel block and how each face is
//! classified for texturing.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// Each variant is assigned a unique integer value that indexes the static
/// face descriptor table used by the mesher.
///
/// The order is: [RIGHT, LEFT, TOP, BOTTOM, FRONT, BACK]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The right face (facing positive X)
    RIGHT = 0,

    /// The left face (facing negative X)
    LEFT = 1,

    /// The top face (facing positive Y)
    TOP = 2,

    /// The bottom face (facing negative Y)
    BOTTOM = 3,

    /// The front face (facing positive Z)
    FRONT = 4,

    /// The back face (facing negative Z)
    BACK = 5,
}

/// How a face is textured: tops and bottoms may differ from the four sides.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum FaceOrientation {
    /// Upward-facing face.
    TOP = 0,
    /// Any horizontal-facing face.
    SIDE = 1,
    /// Downward-facing face.
    BOTTOM = 2,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// The order is: [RIGHT, LEFT, TOP, BOTTOM, FRONT, BACK]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::RIGHT,
            BlockSide::LEFT,
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::FRONT,
            BlockSide::BACK,
        ]
    }

    /// Unit offset from a block to the neighbor this face looks at.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
        }
    }

    /// Texturing class of this face.
    pub fn orientation(self) -> FaceOrientation {
        match self {
            BlockSide::TOP => FaceOrientation::TOP,
            BlockSide::BOTTOM => FaceOrientation::BOTTOM,
            _ => FaceOrientation::SIDE,
        }
    }

    /// The side whose face is seen when looking along `normal`'s opposite.
    ///
    /// Returns `None` unless `normal` is one of the six axis unit vectors.
    pub fn from_normal(normal: Vector3<i32>) -> Option<Self> {
        BlockSide::all()
            .into_iter()
            .find(|side| side.offset() == normal)
    }
}
