//! Interleaved vertex layout handed to the renderer.

use bytemuck::{Pod, Zeroable};

/// Vertex data for the planet mesh (position, normals, UV, height)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PlanetVertex {
    pub position: [f32; 3],
    /// Outward normal of the undisplaced sphere
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    /// Displacement along `normal`
    pub height: f32,
    /// Shading normal of the displaced surface
    pub surface_normal: [f32; 3],
}
