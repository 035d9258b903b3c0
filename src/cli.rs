//! Command-line argument parsing.

use clap::Parser;
use glam::Vec3;
use rand::Rng;

use crate::params::{NoiseParams, PlanetParams, SphereParams, TerrainShaping, WaterParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "icoplanet")]
#[command(about = "Procedural icosphere planet with fractal noise terrain", long_about = None)]
pub struct Args {
    /// Planet radius (world units)
    #[arg(long, default_value_t = 50.0)]
    pub radius: f32,

    /// Subdivision passes applied to the icosahedron
    #[arg(long, default_value_t = 5)]
    pub depth: u32,

    /// Planet center
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    #[arg(default_values_t = vec![0.0, 0.0, 0.0])]
    pub center: Vec<f32>,

    /// Noise seed (random in 0..=100000 when omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Number of noise octaves
    #[arg(long, default_value_t = 8)]
    pub octaves: u32,

    /// Per-octave frequency multiplier
    #[arg(long, default_value_t = 2.0)]
    pub lacunarity: f32,

    /// Fractal increment (per-octave amplitude falloff exponent)
    #[arg(long = "h", default_value_t = 0.9)]
    pub h: f32,

    /// Hybrid multifractal offset
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub offset: f32,

    /// World units per noise lattice cell
    #[arg(long, default_value_t = 20.0)]
    pub period: f32,

    /// Subdivision passes for the water sphere
    #[arg(long, default_value_t = 5)]
    pub water_depth: u32,

    /// Write a grayscale PNG of the planar fBm noise to this path
    #[arg(long, value_name = "PATH")]
    pub noise_map: Option<String>,

    /// Noise map width and height (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 512)]
    pub noise_map_size: u32,
}

impl Args {
    pub fn sphere_params(&self) -> SphereParams {
        let center = match self.center.as_slice() {
            &[x, y, z] => Vec3::new(x, y, z),
            _ => Vec3::ZERO,
        };
        SphereParams::new(center, self.radius, self.depth)
    }

    /// Seed from the command line, or a fresh one per run.
    pub fn resolve_seed(&self) -> u32 {
        self.seed
            .unwrap_or_else(|| rand::thread_rng().gen_range(0..=100_000))
    }

    pub fn planet_params(&self, seed: u32) -> PlanetParams {
        PlanetParams {
            noise: NoiseParams {
                h: self.h,
                lacunarity: self.lacunarity,
                offset: self.offset,
                octaves: self.octaves,
                seed,
                period: self.period,
                ..Default::default()
            },
            shaping: TerrainShaping::default(),
            water: WaterParams {
                recursion_depth: self.water_depth,
                ..Default::default()
            },
        }
    }
}
