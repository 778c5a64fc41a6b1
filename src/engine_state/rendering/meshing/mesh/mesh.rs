//! Mesh buffers for a single chunk.

use crate::engine_state::{
    rendering::Vertex,
    voxels::chunk::{BlockPosition, ChunkPosition},
};

use super::face::FaceDescriptor;

/// Renderable geometry of one chunk.
///
/// The attribute arrays run in parallel: vertex `i` has `positions[i]`,
/// `normals[i]` and `uvs[i]`. Every face adds four vertices and six indices.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkMesh {
    /// The chunk this mesh was built from
    pub position: ChunkPosition,
    /// Vertex positions in world space
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals
    pub normals: Vec<[f32; 3]>,
    /// Vertex texture coordinates
    pub uvs: Vec<[f32; 2]>,
    /// Two counter-clockwise triangles per face
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    /// Creates an empty mesh for the chunk at `position`.
    pub fn new(position: ChunkPosition) -> Self {
        ChunkMesh {
            position,
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Appends one quad.
    ///
    /// # Arguments
    /// * `block` - World position of the block the face belongs to
    /// * `face` - Which face of the block to emit
    /// * `uvs` - Texture coordinates of the four corners in winding order
    pub fn push_face(&mut self, block: BlockPosition, face: &FaceDescriptor, uvs: [(f32, f32); 4]) {
        let base = self.vertex_count() as u32;
        for (corner, (u, v)) in face.corners.iter().zip(uvs) {
            self.positions.push([
                block.x as f32 + corner[0],
                block.y as f32 + corner[1],
                block.z as f32 + corner[2],
            ]);
            self.normals.push(face.normal);
            self.uvs.push([u, v]);
        }
        self.indices.extend(Self::generate_face_indices(base));
    }

    /// Indices of the two triangles of a quad whose first vertex is `vertex_offset`.
    pub fn generate_face_indices(vertex_offset: u32) -> [u32; 6] {
        [
            vertex_offset,
            vertex_offset + 1,
            vertex_offset + 2,
            vertex_offset,
            vertex_offset + 2,
            vertex_offset + 3,
        ]
    }

    /// Number of quads in the mesh.
    pub fn face_count(&self) -> usize {
        self.positions.len() / 4
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// True when the mesh holds no faces.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Interleaves the attribute arrays into one vertex list.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((&position, &normal), &uv)| Vertex::new(position, normal, uv))
            .collect()
    }
}
