use cgmath::Vector3;

use crate::engine_state::voxels::block::block_side::{BlockSide, FaceOrientation};

/// Static geometry of one face of a unit cube.
///
/// Corners are offsets from the block's minimum corner, ordered bottom-left,
/// bottom-right, top-right, top-left as seen from outside the block. That order is
/// counter-clockwise, so triangles `0 1 2` and `0 2 3` face along `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceDescriptor {
    /// Which side of the block this face covers
    pub side: BlockSide,
    /// Unit step from the block to the neighbor that can hide this face
    pub direction: [i32; 3],
    /// Corner offsets in winding order
    pub corners: [[f32; 3]; 4],
    /// Outward normal shared by all four corners
    pub normal: [f32; 3],
}

/// The six cube faces, indexed by `BlockSide as usize`.
pub static FACE_DESCRIPTORS: [FaceDescriptor; 6] = [
    FaceDescriptor {
        side: BlockSide::RIGHT,
        direction: [1, 0, 0],
        corners: [[1.0, 0.0, 1.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]],
        normal: [1.0, 0.0, 0.0],
    },
    FaceDescriptor {
        side: BlockSide::LEFT,
        direction: [-1, 0, 0],
        corners: [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]],
        normal: [-1.0, 0.0, 0.0],
    },
    FaceDescriptor {
        side: BlockSide::TOP,
        direction: [0, 1, 0],
        corners: [[0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
        normal: [0.0, 1.0, 0.0],
    },
    FaceDescriptor {
        side: BlockSide::BOTTOM,
        direction: [0, -1, 0],
        corners: [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
        normal: [0.0, -1.0, 0.0],
    },
    FaceDescriptor {
        side: BlockSide::FRONT,
        direction: [0, 0, 1],
        corners: [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]],
        normal: [0.0, 0.0, 1.0],
    },
    FaceDescriptor {
        side: BlockSide::BACK,
        direction: [0, 0, -1],
        corners: [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
        normal: [0.0, 0.0, -1.0],
    },
];

impl FaceDescriptor {
    /// The descriptor of `side`.
    pub fn for_side(side: BlockSide) -> &'static FaceDescriptor {
        &FACE_DESCRIPTORS[side as usize]
    }

    /// [`Self::direction`] as a vector.
    pub fn offset(&self) -> Vector3<i32> {
        Vector3::new(self.direction[0], self.direction[1], self.direction[2])
    }

    /// Texturing class of this face.
    pub fn orientation(&self) -> FaceOrientation {
        self.side.orientation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::cross;

    fn corner(c: [f32; 3]) -> Vector3<f32> {
        Vector3::new(c[0], c[1], c[2])
    }

    #[test]
    fn table_is_indexed_by_side() {
        for side in BlockSide::all() {
            let face = FaceDescriptor::for_side(side);
            assert_eq!(face.side, side);
            assert_eq!(face.offset(), side.offset());
        }
    }

    #[test]
    fn every_face_winds_counter_clockwise_from_outside() {
        for face in &FACE_DESCRIPTORS {
            let c = face.corners.map(corner);
            let first = cross(c[1] - c[0], c[2] - c[0]);
            let second = cross(c[2] - c[0], c[3] - c[0]);
            assert_eq!(first, corner(face.normal), "{:?}", face.side);
            assert_eq!(second, corner(face.normal), "{:?}", face.side);
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for face in &FACE_DESCRIPTORS {
            for c in face.corners {
                for axis in 0..3 {
                    match face.direction[axis] {
                        1 => assert_eq!(c[axis], 1.0),
                        -1 => assert_eq!(c[axis], 0.0),
                        _ => {}
                    }
                }
            }
        }
    }
}
