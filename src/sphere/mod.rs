//! Geodesic sphere built by recursive subdivision of an icosahedron.

mod adjacency;
mod builder;
mod mesh;

// Re-export public types
pub use adjacency::VertexFaces;
pub use builder::{BuildStage, EdgeKey, IcosphereBuilder};
pub use mesh::Icosphere;

/// Triangle as three vertex indices. Winding is significant.
pub type Face = [u32; 3];
