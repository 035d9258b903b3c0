//! Gradient noise and fractal compositing for planet terrain.
//!
//! A seeded [`GradientTable`] feeds [`PerlinNoise`], a single-octave
//! [`NoiseSource`]. [`FractalNoise`] layers any source into fractal Brownian
//! motion or a hybrid multifractal using a precomputed [`ExponentTable`].

mod fractal;
mod map;
mod perlin;
mod table;

pub use fractal::{ExponentTable, FractalNoise, NoiseFnSource, TerrainNoise};
pub use map::{NoiseKind, NoiseMap};
pub use perlin::PerlinNoise;
pub use table::GradientTable;

use glam::Vec3;

/// Single-octave noise provider consumed by the fractal compositors.
pub trait NoiseSource {
    /// Sample the noise at `point`. Output is roughly within `[-1, 1]`.
    fn evaluate(&self, point: Vec3) -> f32;
}

impl<S: NoiseSource + ?Sized> NoiseSource for &S {
    fn evaluate(&self, point: Vec3) -> f32 {
        (**self).evaluate(point)
    }
}
