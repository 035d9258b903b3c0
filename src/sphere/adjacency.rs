//! Vertex to incident-face lookup.

use super::Face;

/// For every vertex, the faces that use it as a corner.
///
/// Stored as one flat arena of face indices plus per-vertex offsets, built in a
/// single pass over the faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexFaces {
    offsets: Vec<usize>,
    faces: Vec<u32>,
}

impl VertexFaces {
    pub fn build(vertex_count: usize, faces: &[Face]) -> Self {
        let mut offsets = vec![0usize; vertex_count + 1];
        for face in faces {
            for &v in face {
                offsets[v as usize + 1] += 1;
            }
        }
        for i in 0..vertex_count {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets[..vertex_count].to_vec();
        let mut incident = vec![0u32; offsets[vertex_count]];
        for (f, face) in faces.iter().enumerate() {
            for &v in face {
                let slot = &mut cursor[v as usize];
                incident[*slot] = f as u32;
                *slot += 1;
            }
        }

        Self {
            offsets,
            faces: incident,
        }
    }

    /// Faces touching `vertex`, in ascending face order.
    pub fn incident(&self, vertex: usize) -> &[u32] {
        &self.faces[self.offsets[vertex]..self.offsets[vertex + 1]]
    }

    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of (vertex, face) incidences.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incident_faces() {
        // Two triangles sharing edge 1-2, vertex 4 unused
        let faces = [[0, 1, 2], [2, 1, 3]];
        let adjacency = VertexFaces::build(5, &faces);

        assert_eq!(adjacency.vertex_count(), 5);
        assert_eq!(adjacency.len(), 6);
        assert_eq!(adjacency.incident(0), &[0]);
        assert_eq!(adjacency.incident(1), &[0, 1]);
        assert_eq!(adjacency.incident(2), &[0, 1]);
        assert_eq!(adjacency.incident(3), &[1]);
        assert!(adjacency.incident(4).is_empty());
    }

    #[test]
    fn test_empty_mesh() {
        let adjacency = VertexFaces::build(3, &[]);
        assert!(adjacency.is_empty());
        assert!(adjacency.incident(2).is_empty());
    }
}
