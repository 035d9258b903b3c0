//! Staged icosphere construction.
//!
//! Stages run strictly in order:
//! icosahedron -> subdivision passes -> translation -> UV mapping.

use glam::{Vec2, Vec3};
use log::debug;
use std::collections::HashMap;
use std::f32::consts::PI;
use std::time::Instant;

use super::{Face, Icosphere};
use crate::error::Result;
use crate::params::SphereParams;

/// Golden ratio
const PHI: f32 = 1.618_034;

/// The 20 icosahedron faces: five around vertex 0, their five neighbours,
/// five around vertex 3, then their five neighbours.
const ICOSAHEDRON_FACES: [Face; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Where the builder is in its pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    /// 12 vertices, 20 faces
    Icosahedron,
    /// Number of subdivision passes applied so far
    Subdivided(u32),
    /// World-space positions computed
    Translated,
    /// UVs computed; ready to finish
    UvMapped,
}

/// Unordered edge between two vertices, stored as (min, max).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey(u32, u32);

impl EdgeKey {
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn vertices(&self) -> (u32, u32) {
        (self.0, self.1)
    }
}

pub struct IcosphereBuilder {
    params: SphereParams,
    stage: BuildStage,
    /// Sphere-local positions (centered on the origin)
    local: Vec<Vec3>,
    faces: Vec<Face>,
    midpoints: HashMap<EdgeKey, u32>,
    world: Vec<Vec3>,
    uvs: Vec<Vec2>,
}

impl IcosphereBuilder {
    /// Validate `params` and emit the base icosahedron.
    pub fn new(params: &SphereParams) -> Result<Self> {
        params.validate()?;

        // Puts every vertex exactly `radius` from the origin
        let s = params.radius / (2.0 * (2.0 * PI / 5.0).sin());

        let mut local = Vec::with_capacity(params.vertex_count());
        local.extend_from_slice(&[
            Vec3::new(-s, s * PHI, 0.0),
            Vec3::new(s, s * PHI, 0.0),
            Vec3::new(-s, -s * PHI, 0.0),
            Vec3::new(s, -s * PHI, 0.0),
            Vec3::new(0.0, -s, s * PHI),
            Vec3::new(0.0, s, s * PHI),
            Vec3::new(0.0, -s, -s * PHI),
            Vec3::new(0.0, s, -s * PHI),
            Vec3::new(s * PHI, 0.0, -s),
            Vec3::new(s * PHI, 0.0, s),
            Vec3::new(-s * PHI, 0.0, -s),
            Vec3::new(-s * PHI, 0.0, s),
        ]);

        Ok(Self {
            params: params.clone(),
            stage: BuildStage::Icosahedron,
            local,
            faces: ICOSAHEDRON_FACES.to_vec(),
            midpoints: HashMap::new(),
            world: Vec::new(),
            uvs: Vec::new(),
        })
    }

    pub fn stage(&self) -> BuildStage {
        self.stage
    }

    pub fn vertex_count(&self) -> usize {
        self.local.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Run every remaining stage and hand over the finished mesh.
    pub fn build_full(mut self) -> Icosphere {
        let start = Instant::now();
        while !self.build_step() {}
        debug!(
            "Icosphere depth {} built in {:.2}ms",
            self.params.recursion_depth,
            start.elapsed().as_secs_f64() * 1000.0
        );
        self.finish()
    }

    /// Advance one stage. Returns true once UVs are mapped.
    pub fn build_step(&mut self) -> bool {
        let depth = self.params.recursion_depth;
        self.stage = match self.stage {
            BuildStage::Icosahedron if depth == 0 => {
                self.translate();
                BuildStage::Translated
            }
            BuildStage::Icosahedron => {
                self.subdivide();
                BuildStage::Subdivided(1)
            }
            BuildStage::Subdivided(k) if k < depth => {
                self.subdivide();
                BuildStage::Subdivided(k + 1)
            }
            BuildStage::Subdivided(_) => {
                self.translate();
                BuildStage::Translated
            }
            BuildStage::Translated => {
                self.map_uvs();
                BuildStage::UvMapped
            }
            BuildStage::UvMapped => BuildStage::UvMapped,
        };

        self.stage == BuildStage::UvMapped
    }

    /// Split every face into four around its memoized edge midpoints.
    fn subdivide(&mut self) {
        let mut faces = Vec::with_capacity(self.faces.len() * 4);

        for [a, b, c] in std::mem::take(&mut self.faces) {
            let ab = self.midpoint(a, b);
            let bc = self.midpoint(b, c);
            let ca = self.midpoint(c, a);

            faces.extend_from_slice(&[[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
        }

        debug_assert!(
            faces.iter().all(|&[a, b, c]| a != b && b != c && c != a),
            "subdivision produced a degenerate face"
        );

        self.faces = faces;
        debug!(
            "Subdivision pass: {} vertices, {} faces",
            self.local.len(),
            self.faces.len()
        );
    }

    /// Index of the vertex bisecting edge `a`-`b`, created on first request.
    fn midpoint(&mut self, a: u32, b: u32) -> u32 {
        let key = EdgeKey::new(a, b);
        if let Some(&index) = self.midpoints.get(&key) {
            return index;
        }

        let halfway = self.local[a as usize].lerp(self.local[b as usize], 0.5);
        let index = self.local.len() as u32;
        self.local.push(halfway.normalize() * self.params.radius);
        self.midpoints.insert(key, index);
        index
    }

    fn translate(&mut self) {
        let center = self.params.center;
        self.world = self.local.iter().map(|&v| v + center).collect();
    }

    /// Equirectangular UVs of the direction from center to each vertex.
    fn map_uvs(&mut self) {
        self.uvs = self
            .local
            .iter()
            .map(|v| {
                let d = v.normalize();
                Vec2::new(
                    0.5 - d.z.atan2(d.x) / (2.0 * PI),
                    0.5 - d.y.clamp(-1.0, 1.0).asin() / PI,
                )
            })
            .collect();
    }

    fn finish(self) -> Icosphere {
        debug_assert_eq!(self.stage, BuildStage::UvMapped);
        let normals = self.local.iter().map(|v| v.normalize()).collect();
        Icosphere::from_parts(self.params, self.world, self.faces, self.uvs, normals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_is_unordered() {
        assert_eq!(EdgeKey::new(3, 9), EdgeKey::new(9, 3));
        assert_eq!(EdgeKey::new(9, 3).vertices(), (3, 9));
        assert_ne!(EdgeKey::new(3, 9), EdgeKey::new(3, 10));
        // No packing ceiling on index range
        assert_ne!(EdgeKey::new(1, 0), EdgeKey::new(0, 1 << 16));
    }

    #[test]
    fn test_stage_sequence() {
        let params = SphereParams::new(Vec3::ZERO, 1.0, 2);
        let mut builder = IcosphereBuilder::new(&params).unwrap();
        assert_eq!(builder.stage(), BuildStage::Icosahedron);
        assert_eq!((builder.vertex_count(), builder.face_count()), (12, 20));

        let mut stages = Vec::new();
        while !builder.build_step() {
            stages.push(builder.stage());
        }
        stages.push(builder.stage());

        assert_eq!(
            stages,
            vec![
                BuildStage::Subdivided(1),
                BuildStage::Subdivided(2),
                BuildStage::Translated,
                BuildStage::UvMapped,
            ]
        );

        // Finished builders stay finished
        assert!(builder.build_step());
        assert_eq!(builder.face_count(), 320);
    }

    #[test]
    fn test_depth_zero_skips_subdivision() {
        let params = SphereParams::new(Vec3::ZERO, 1.0, 0);
        let mut builder = IcosphereBuilder::new(&params).unwrap();
        assert!(!builder.build_step());
        assert_eq!(builder.stage(), BuildStage::Translated);
        assert!(builder.build_step());
    }

    #[test]
    fn test_base_vertices_on_sphere() {
        let params = SphereParams::new(Vec3::ZERO, 3.0, 0);
        let builder = IcosphereBuilder::new(&params).unwrap();
        for v in &builder.local {
            assert!((v.length() - 3.0).abs() < 1e-4, "{} not on sphere", v);
        }
    }

    #[test]
    fn test_invalid_params_build_nothing() {
        let params = SphereParams::new(Vec3::ZERO, -5.0, 2);
        assert!(IcosphereBuilder::new(&params).is_err());
    }
}
