//! Interleaved vertex format for chunk meshes.
//!
//! [`ChunkMesh`](super::meshing::ChunkMesh) keeps positions, normals and UVs in
//! separate arrays. Renderers that want one interleaved vertex buffer can build it
//! with [`ChunkMesh::vertices`](super::meshing::ChunkMesh::vertices) and upload the
//! raw bytes from [`Vertex::slice_as_bytes`].

/// A single mesh vertex.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes)
/// - Normal: 3x f32 (12 bytes)
/// - Texture Coordinates: 2x f32 (8 bytes)
///
/// Total size: 32 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in world space
    pub position: [f32; 3],
    /// Outward face normal
    pub normal: [f32; 3],
    /// Texture coordinates
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Creates a new vertex.
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Vertex {
            position,
            normal,
            tex_coords,
        }
    }

    /// Views a vertex slice as raw bytes for upload.
    pub fn slice_as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        let vertices = [Vertex::new([1.0, 2.0, 3.0], [0.0, 1.0, 0.0], [0.5, 0.25]); 3];
        assert_eq!(Vertex::slice_as_bytes(&vertices).len(), 96);
    }
}
