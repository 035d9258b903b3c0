//! Gradient-noise and fractal compositing parameters.

use crate::error::{PlanetError, Result};

/// Noise engine parameters
///
/// Changing `h`, `lacunarity` or `octaves` means rebuilding the exponent table,
/// so the engine takes these once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseParams {
    /// Fractal increment: per-octave amplitude falls off as `lacunarity^-h`
    pub h: f32,

    /// Per-octave frequency multiplier
    pub lacunarity: f32,

    /// Constant added to each hybrid-multifractal octave signal
    pub offset: f32,

    /// Number of octaves summed (must be >= 1)
    pub octaves: u32,

    /// Seed for the gradient/permutation table
    pub seed: u32,

    /// World units per noise lattice cell when sampling the planet surface
    pub period: f32,

    /// Gradient table length (power of two; the permutation lookup is twice this)
    pub table_size: usize,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            h: 0.9,
            lacunarity: 2.0,
            offset: 0.0,
            octaves: 8,
            seed: 2021,
            period: 20.0,
            table_size: 512,
        }
    }
}

impl NoiseParams {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.octaves == 0 {
            return Err(PlanetError::invalid("octaves", "must be at least 1"));
        }
        if !self.h.is_finite() {
            return Err(PlanetError::invalid(
                "h",
                format!("must be finite, got {}", self.h),
            ));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity > 0.0) {
            return Err(PlanetError::invalid(
                "lacunarity",
                format!("must be finite and positive, got {}", self.lacunarity),
            ));
        }
        if !self.offset.is_finite() {
            return Err(PlanetError::invalid(
                "offset",
                format!("must be finite, got {}", self.offset),
            ));
        }
        if !(self.period.is_finite() && self.period > 0.0) {
            return Err(PlanetError::invalid(
                "period",
                format!("must be finite and positive, got {}", self.period),
            ));
        }
        if self.table_size < 2 || !self.table_size.is_power_of_two() {
            return Err(PlanetError::invalid(
                "table_size",
                format!("must be a power of two >= 2, got {}", self.table_size),
            ));
        }
        Ok(())
    }
}
