//! Fractal Brownian motion and hybrid multifractal compositing.

use glam::Vec3;
use ::noise::NoiseFn;

use super::perlin::PerlinNoise;
use super::NoiseSource;
use crate::error::{PlanetError, Result};
use crate::params::NoiseParams;

/// Per-octave amplitudes `lacunarity^(-h * i)` for `i` in `[0, octaves)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentTable {
    exponents: Vec<f32>,
}

impl ExponentTable {
    pub fn new(h: f32, lacunarity: f32, octaves: u32) -> Result<Self> {
        if octaves == 0 {
            return Err(PlanetError::invalid("octaves", "must be at least 1"));
        }

        let mut frequency = 1.0f32;
        let exponents = (0..octaves)
            .map(|_| {
                let exponent = frequency.powf(-h);
                frequency *= lacunarity;
                exponent
            })
            .collect();

        Ok(Self { exponents })
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.exponents
    }

    pub fn octaves(&self) -> usize {
        self.exponents.len()
    }

    /// Upper bound on `|fbm|` for a source bounded by 1.
    pub fn sum(&self) -> f32 {
        self.exponents.iter().sum()
    }
}

/// Multi-octave compositor over any [`NoiseSource`].
#[derive(Debug, Clone)]
pub struct FractalNoise<S> {
    source: S,
    exponents: ExponentTable,
    lacunarity: f32,
    offset: f32,
}

/// The terrain engine: fractal compositing over seeded Perlin noise.
pub type TerrainNoise = FractalNoise<PerlinNoise>;

impl FractalNoise<PerlinNoise> {
    /// Build the Perlin-backed engine from `params`.
    pub fn perlin(params: &NoiseParams) -> Result<Self> {
        params.validate()?;
        let source = PerlinNoise::new(params.seed, params.table_size)?;
        Self::new(source, params)
    }
}

impl<S: NoiseSource> FractalNoise<S> {
    pub fn new(source: S, params: &NoiseParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            source,
            exponents: ExponentTable::new(params.h, params.lacunarity, params.octaves)?,
            lacunarity: params.lacunarity,
            offset: params.offset,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn exponents(&self) -> &ExponentTable {
        &self.exponents
    }

    /// Single-octave sample of the underlying source.
    pub fn evaluate(&self, point: Vec3) -> f32 {
        self.source.evaluate(point)
    }

    /// Sum of octaves at `point * lacunarity^i`, each weighted by its exponent.
    ///
    /// Octaves share phase: only the frequency changes between them.
    pub fn fbm(&self, mut point: Vec3) -> f32 {
        let mut value = 0.0;
        for &exponent in self.exponents.as_slice() {
            value += self.source.evaluate(point) * exponent;
            point *= self.lacunarity;
        }
        value
    }

    /// Ridged octaves where each contribution is scaled by a running weight
    /// built from the previous octaves, giving plateaus cut by sharp ridges.
    pub fn hybrid_multifractal(&self, mut point: Vec3) -> f32 {
        let exponents = self.exponents.as_slice();

        let mut value = (self.ridge(point) + self.offset) * exponents[0];
        let mut weight = value;
        point *= self.lacunarity;

        for &exponent in &exponents[1..] {
            weight = weight.min(1.0);
            let signal = (self.ridge(point) + self.offset) * exponent;
            value += signal * weight;
            weight *= signal;
            point *= self.lacunarity;
        }

        value
    }

    #[inline]
    fn ridge(&self, point: Vec3) -> f32 {
        1.0 - self.source.evaluate(point).abs()
    }
}

/// Adapter that lets any `noise` crate generator act as a [`NoiseSource`].
#[derive(Debug, Clone)]
pub struct NoiseFnSource<T>(pub T);

impl<T: NoiseFn<f64, 3>> NoiseSource for NoiseFnSource<T> {
    fn evaluate(&self, point: Vec3) -> f32 {
        self.0.get([point.x as f64, point.y as f64, point.z as f64]) as f32
    }
}
