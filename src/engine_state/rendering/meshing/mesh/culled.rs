//! Face-culled meshing.
//!
//! Every solid block contributes one quad per side whose neighbor is air.
//! Neighbors are looked up through the world, so faces against a solid block in
//! the next chunk are culled as well and chunk seams stay closed.

use cgmath::Point3;
use log::debug;
use web_time::Instant;

use crate::engine_state::{
    rendering::texture::TextureResolver,
    voxels::{
        block::{block_side::BlockSide, is_solid, BlockTypeSize, AIR_ID},
        chunk::{Chunk, ChunkPosition},
        world::World,
    },
};

use super::{face::FaceDescriptor, mesh::ChunkMesh};

/// Texture coordinate of a face corner when no resolver is configured.
///
/// Uses the corner's X offset when it is non-zero, otherwise its Z offset, and
/// its Y offset for V.
pub fn fallback_uv(corner: [f32; 3]) -> (f32, f32) {
    let u = if corner[0] != 0.0 { corner[0] } else { corner[2] };
    (u, corner[1])
}

/// Builds chunk meshes from a borrowed world.
#[derive(Clone, Copy)]
pub struct MeshBuilder<'a> {
    world: &'a World,
    texture_resolver: Option<&'a dyn TextureResolver>,
}

impl std::fmt::Debug for MeshBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshBuilder")
            .field("textured", &self.texture_resolver.is_some())
            .finish()
    }
}

impl<'a> MeshBuilder<'a> {
    /// Creates a builder that assigns [`fallback_uv`] texture coordinates.
    pub fn new(world: &'a World) -> Self {
        MeshBuilder {
            world,
            texture_resolver: None,
        }
    }

    /// Uses `resolver` for texture coordinates.
    pub fn with_texture_resolver(mut self, resolver: &'a dyn TextureResolver) -> Self {
        self.texture_resolver = Some(resolver);
        self
    }

    /// Builds the mesh of the chunk at `position`.
    ///
    /// # Returns
    /// `None` when the chunk does not exist or has no visible face.
    pub fn build_chunk_mesh(&self, position: ChunkPosition) -> Option<ChunkMesh> {
        let start = Instant::now();
        let chunk = self.world.get_chunk_at(position)?;
        let origin = chunk.world_origin();
        let dimension = chunk.dimension();

        let mut mesh = ChunkMesh::new(position);

        for y in 0..dimension {
            for z in 0..dimension {
                for x in 0..dimension {
                    let local = Point3::new(x, y, z);
                    let voxel = chunk.get_block_at(local);
                    if !is_solid(voxel) {
                        continue;
                    }

                    for side in BlockSide::all() {
                        if is_solid(self.neighbor(chunk, local, side)) {
                            continue;
                        }

                        let face = FaceDescriptor::for_side(side);
                        let block = Point3::new(
                            origin.x.saturating_add(x as i32),
                            origin.y.saturating_add(y as i32),
                            origin.z.saturating_add(z as i32),
                        );
                        mesh.push_face(block, face, self.face_uvs(voxel, face));
                    }
                }
            }
        }

        if mesh.is_empty() {
            debug!("Chunk {:?}: no visible faces", position);
            return None;
        }

        debug!(
            "Chunk {:?}: {} faces ({} vertices, {} indices) in {:?}",
            position,
            mesh.face_count(),
            mesh.vertex_count(),
            mesh.indices.len(),
            start.elapsed()
        );
        Some(mesh)
    }

    /// Block id next to `local` across `side`, reading the neighboring chunk when needed.
    fn neighbor(&self, chunk: &Chunk, local: Point3<usize>, side: BlockSide) -> BlockTypeSize {
        let offset = side.offset();
        let dimension = chunk.dimension() as i32;
        let next = Point3::new(
            local.x as i32 + offset.x,
            local.y as i32 + offset.y,
            local.z as i32 + offset.z,
        );

        let inside = |c: i32| (0..dimension).contains(&c);
        if inside(next.x) && inside(next.y) && inside(next.z) {
            return chunk.get_block_at(Point3::new(next.x as usize, next.y as usize, next.z as usize));
        }

        // Past the i32 limits there is only air.
        let origin = chunk.world_origin();
        match (
            origin.x.checked_add(next.x),
            origin.y.checked_add(next.y),
            origin.z.checked_add(next.z),
        ) {
            (Some(x), Some(y), Some(z)) => self.world.get_voxel(Point3::new(x, y, z)),
            _ => AIR_ID,
        }
    }

    fn face_uvs(&self, voxel: BlockTypeSize, face: &FaceDescriptor) -> [(f32, f32); 4] {
        let orientation = face.orientation();
        let mut uvs = [(0.0, 0.0); 4];
        for (corner, uv) in uvs.iter_mut().enumerate() {
            *uv = match self.texture_resolver {
                Some(resolver) => resolver.resolve(voxel, orientation, corner),
                None => fallback_uv(face.corners[corner]),
            };
        }
        uvs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_prefers_x_then_z() {
        assert_eq!(fallback_uv([1.0, 0.0, 1.0]), (1.0, 0.0));
        assert_eq!(fallback_uv([0.0, 1.0, 1.0]), (1.0, 1.0));
        assert_eq!(fallback_uv([0.0, 1.0, 0.0]), (0.0, 1.0));
    }

    #[test]
    fn single_block_has_six_faces() {
        let mut world = World::with_chunk_dimension(4);
        world.set_voxel(Point3::new(1, 1, 1), 3);
        let mesh = MeshBuilder::new(&world)
            .build_chunk_mesh(Point3::new(0, 0, 0))
            .unwrap();
        assert_eq!(mesh.face_count(), 6);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn blocks_at_the_grid_limits_are_fully_meshed() {
        for corner in [Point3::new(i32::MAX, i32::MAX, i32::MAX), Point3::new(i32::MIN, i32::MIN, i32::MIN)] {
            let mut world = World::new();
            world.set_voxel(corner, 3);
            let mesh = MeshBuilder::new(&world)
                .build_chunk_mesh(world.chunk_position_of(corner))
                .unwrap();
            assert_eq!(mesh.face_count(), 6);
        }
    }

    #[test]
    fn missing_chunk_has_no_mesh() {
        let world = World::new();
        assert!(MeshBuilder::new(&world).build_chunk_mesh(Point3::new(0, 0, 0)).is_none());
    }
}
