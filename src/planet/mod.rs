//! Planet terrain: an icosphere displaced by fractal noise.
//!
//! Heights come from fBm blended with a hybrid multifractal continent signal;
//! shading normals are averaged from the displaced faces around each vertex.
//! Both are recomputed in full whenever the mesh or the noise seed changes.

mod height;
mod normals;
mod vertex;

pub use height::{height_map, shape_elevation};
pub use normals::surface_normals;
pub use vertex::PlanetVertex;

use glam::Vec3;
use log::info;
use std::time::Instant;

use crate::error::Result;
use crate::noise::TerrainNoise;
use crate::params::{PlanetParams, SphereParams};
use crate::sphere::Icosphere;

/// Displaced planet mesh with its water shell
pub struct Planet {
    mesh: Icosphere,
    water: Icosphere,
    noise: TerrainNoise,
    params: PlanetParams,
    heights: Vec<f32>,
    surface_normals: Vec<Vec3>,
}

impl Planet {
    /// Build the noise engine and water shell, then compute heights and normals.
    pub fn new(mesh: Icosphere, params: PlanetParams) -> Result<Self> {
        params.validate()?;
        let noise = TerrainNoise::perlin(&params.noise)?;
        let water = Self::build_water(&mesh, &params)?;

        let mut planet = Self {
            mesh,
            water,
            noise,
            params,
            heights: Vec::new(),
            surface_normals: Vec::new(),
        };
        planet.regenerate();
        Ok(planet)
    }

    /// Replace the mesh (and its water shell) and recompute the terrain.
    pub fn set_mesh(&mut self, mesh: Icosphere) -> Result<()> {
        self.water = Self::build_water(&mesh, &self.params)?;
        self.mesh = mesh;
        self.regenerate();
        Ok(())
    }

    /// Rebuild the noise tables from `seed` and recompute the terrain.
    pub fn reseed(&mut self, seed: u32) -> Result<()> {
        let noise_params = self.params.noise.clone().with_seed(seed);
        self.noise = TerrainNoise::perlin(&noise_params)?;
        self.params.noise = noise_params;
        self.regenerate();
        Ok(())
    }

    fn build_water(mesh: &Icosphere, params: &PlanetParams) -> Result<Icosphere> {
        Icosphere::new(&SphereParams::new(
            mesh.center(),
            mesh.radius() * params.water.radius_scale,
            params.water.recursion_depth,
        ))
    }

    fn regenerate(&mut self) {
        let start = Instant::now();

        self.heights = height_map(
            self.mesh.vertices(),
            self.mesh.radius(),
            &self.noise,
            self.params.noise.period,
            &self.params.shaping,
        );
        self.surface_normals = surface_normals(
            self.mesh.vertices(),
            self.mesh.vertex_normals(),
            self.mesh.faces(),
            self.mesh.adjacency(),
            &self.heights,
        );

        let (lo, hi) = self.height_range();
        info!(
            "Terrain (seed {}): {} heights in [{:.3}, {:.3}] in {:.2}ms",
            self.params.noise.seed,
            self.heights.len(),
            lo,
            hi,
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    pub fn mesh(&self) -> &Icosphere {
        &self.mesh
    }

    pub fn water(&self) -> &Icosphere {
        &self.water
    }

    pub fn noise(&self) -> &TerrainNoise {
        &self.noise
    }

    pub fn params(&self) -> &PlanetParams {
        &self.params
    }

    pub fn seed(&self) -> u32 {
        self.params.noise.seed
    }

    /// Height per vertex, parallel to `mesh().vertices()`
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Displaced shading normal per vertex
    pub fn surface_normals(&self) -> &[Vec3] {
        &self.surface_normals
    }

    /// Lowest and highest vertex height.
    pub fn height_range(&self) -> (f32, f32) {
        self.heights
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }

    /// Interleave the per-vertex arrays for upload.
    pub fn vertex_buffer(&self) -> Vec<PlanetVertex> {
        let mesh = &self.mesh;
        mesh.vertices()
            .iter()
            .zip(mesh.vertex_normals())
            .zip(mesh.uvs())
            .zip(&self.heights)
            .zip(&self.surface_normals)
            .map(|((((p, n), uv), &height), s)| PlanetVertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: uv.to_array(),
                height,
                surface_normal: s.to_array(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::NoiseParams;

    fn reference_planet(seed: u32) -> Planet {
        let mesh = Icosphere::new(&SphereParams::new(Vec3::ZERO, 50.0, 2)).unwrap();
        let params = PlanetParams {
            noise: NoiseParams {
                seed,
                octaves: 8,
                lacunarity: 2.0,
                h: 0.9,
                offset: 0.0,
                period: 20.0,
                ..Default::default()
            },
            ..Default::default()
        };
        Planet::new(mesh, params).unwrap()
    }

    #[test]
    fn test_reference_planet_heights() {
        let planet = reference_planet(2021);
        let bound = 50f32.sqrt() * 1.5;
        for (i, &h) in planet.heights().iter().enumerate() {
            assert!(h.abs() <= bound, "height {} at vertex {} exceeds {}", h, i, bound);
        }

        // Not flat
        let (lo, hi) = planet.height_range();
        assert!(hi > lo);

        let again = reference_planet(2021);
        assert_eq!(planet.heights(), again.heights());
        assert_eq!(planet.surface_normals(), again.surface_normals());
    }

    #[test]
    fn test_parallel_arrays() {
        let planet = reference_planet(7);
        let n = planet.mesh().vertex_count();
        assert_eq!(planet.heights().len(), n);
        assert_eq!(planet.surface_normals().len(), n);
        assert_eq!(planet.mesh().uvs().len(), n);
        assert_eq!(planet.vertex_buffer().len(), n);

        for normal in planet.surface_normals() {
            assert!((normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_reseed_recomputes() {
        let mut planet = reference_planet(2021);
        let before = planet.heights().to_vec();

        planet.reseed(77).unwrap();
        assert_eq!(planet.seed(), 77);
        assert_ne!(planet.heights(), before.as_slice());
        assert_eq!(planet.heights(), reference_planet(77).heights());
    }

    #[test]
    fn test_set_mesh_rebuilds_everything() {
        let mut planet = reference_planet(2021);
        let mesh = Icosphere::new(&SphereParams::new(Vec3::new(10.0, 0.0, 0.0), 20.0, 3)).unwrap();
        planet.set_mesh(mesh).unwrap();

        assert_eq!(planet.heights().len(), 642);
        assert_eq!(planet.surface_normals().len(), 642);
        assert_eq!(planet.water().center(), Vec3::new(10.0, 0.0, 0.0));
        assert!((planet.water().radius() - 20.4).abs() < 1e-4);
    }

    #[test]
    fn test_water_shell() {
        let planet = reference_planet(1);
        let water = planet.water();
        assert_eq!(water.recursion_depth(), 5);
        assert_eq!(water.vertex_count(), 10_242);
        assert!((water.radius() - 51.0).abs() < 1e-4);
    }

    #[test]
    fn test_vertex_buffer_interleaves() {
        let planet = reference_planet(3);
        let buffer = planet.vertex_buffer();
        let i = 17;
        assert_eq!(buffer[i].position, planet.mesh().vertices()[i].to_array());
        assert_eq!(buffer[i].uv, planet.mesh().uvs()[i].to_array());
        assert_eq!(buffer[i].height, planet.heights()[i]);
        assert_eq!(buffer[i].surface_normal, planet.surface_normals()[i].to_array());
    }

    #[test]
    fn test_zero_octaves_rejected() {
        let mesh = Icosphere::new(&SphereParams::new(Vec3::ZERO, 1.0, 0)).unwrap();
        let mut params = PlanetParams::default();
        params.noise.octaves = 0;
        assert!(Planet::new(mesh, params).is_err());
    }
}
