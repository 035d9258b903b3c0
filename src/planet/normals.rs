//! Surface normals of the height-displaced mesh.

use glam::Vec3;

use crate::sphere::{Face, VertexFaces};

/// Average the displaced face normals around every vertex.
///
/// Each corner is pushed along its own outward normal by its own height before
/// the face normal is taken. A vertex with no incident faces (or whose face
/// normals cancel) keeps its outward normal.
pub fn surface_normals(
    positions: &[Vec3],
    outward: &[Vec3],
    faces: &[Face],
    adjacency: &VertexFaces,
    heights: &[f32],
) -> Vec<Vec3> {
    debug_assert_eq!(positions.len(), outward.len());
    debug_assert_eq!(positions.len(), heights.len());
    debug_assert_eq!(positions.len(), adjacency.vertex_count());

    let displaced: Vec<Vec3> = positions
        .iter()
        .zip(outward)
        .zip(heights)
        .map(|((&p, &n), &h)| p + n * h)
        .collect();

    // Same vector from whichever corner the edges start at
    let face_normals: Vec<Vec3> = faces
        .iter()
        .map(|&[a, b, c]| {
            let pa = displaced[a as usize];
            let pb = displaced[b as usize];
            let pc = displaced[c as usize];
            (pb - pa).cross(pc - pa)
        })
        .collect();

    (0..positions.len())
        .map(|v| {
            let incident = adjacency.incident(v);
            if incident.is_empty() {
                return outward[v];
            }
            let sum: Vec3 = incident.iter().map(|&f| face_normals[f as usize]).sum();
            (sum / incident.len() as f32)
                .try_normalize()
                .unwrap_or(outward[v])
        })
        .collect()
}
