//! Finished icosphere mesh with read-only accessors.

use glam::{Vec2, Vec3};
use log::info;

use super::adjacency::VertexFaces;
use super::builder::IcosphereBuilder;
use super::Face;
use crate::error::Result;
use crate::params::SphereParams;

/// Geodesic sphere mesh
///
/// Vertices, UVs and normals are parallel arrays indexed by vertex.
#[derive(Debug, Clone)]
pub struct Icosphere {
    params: SphereParams,
    /// World-space positions
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    uvs: Vec<Vec2>,
    /// Outward unit normals
    normals: Vec<Vec3>,
    adjacency: VertexFaces,
}

impl Icosphere {
    /// Build an icosphere with the given center, radius and recursion depth.
    pub fn new(params: &SphereParams) -> Result<Self> {
        let mesh = IcosphereBuilder::new(params)?.build_full();
        info!(
            "Icosphere: radius {}, depth {}, {} vertices, {} faces",
            mesh.radius(),
            mesh.recursion_depth(),
            mesh.vertex_count(),
            mesh.face_count()
        );
        Ok(mesh)
    }

    pub(super) fn from_parts(
        params: SphereParams,
        vertices: Vec<Vec3>,
        faces: Vec<Face>,
        uvs: Vec<Vec2>,
        normals: Vec<Vec3>,
    ) -> Self {
        let adjacency = VertexFaces::build(vertices.len(), &faces);
        Self {
            params,
            vertices,
            faces,
            uvs,
            normals,
            adjacency,
        }
    }

    pub fn params(&self) -> &SphereParams {
        &self.params
    }

    pub fn center(&self) -> Vec3 {
        self.params.center
    }

    pub fn radius(&self) -> f32 {
        self.params.radius
    }

    pub fn recursion_depth(&self) -> u32 {
        self.params.recursion_depth
    }

    /// World-space vertex positions
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Outward unit normal per vertex: `normalize(vertex - center)`
    pub fn vertex_normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Equirectangular UVs in `[0, 1] x [0, 1]`. There is a seam at `u = 0 / 1`.
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Faces incident to each vertex
    pub fn adjacency(&self) -> &VertexFaces {
        &self.adjacency
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Faces flattened into a triangle-list index buffer.
    pub fn triangle_indices(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }
}
