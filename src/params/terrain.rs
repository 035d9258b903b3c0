//! Height-map shaping and water shell parameters.

use super::NoiseParams;
use crate::error::{PlanetError, Result};

/// Everything the terrain pipeline needs besides the mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetParams {
    pub noise: NoiseParams,
    pub shaping: TerrainShaping,
    pub water: WaterParams,
}

impl PlanetParams {
    pub fn validate(&self) -> Result<()> {
        self.noise.validate()?;
        self.shaping.validate()?;
        self.water.validate()
    }
}

/// Continent and ridge blending applied to the raw fBm signal
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainShaping {
    /// fBm values above this blend in the hybrid-multifractal continent signal
    pub continent_threshold: f32,

    /// Scale applied to the hybrid-multifractal signal before blending
    pub continent_scale: f32,

    /// Values above this get the ridge boost
    pub ridge_threshold: f32,

    /// Maximum additive ridge boost (applied right at the threshold)
    pub ridge_boost: f32,
}

impl Default for TerrainShaping {
    fn default() -> Self {
        Self {
            continent_threshold: -0.1,
            continent_scale: 0.2,
            ridge_threshold: 0.4,
            ridge_boost: 0.3,
        }
    }
}

impl TerrainShaping {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("continent_threshold", self.continent_threshold),
            ("continent_scale", self.continent_scale),
            ("ridge_threshold", self.ridge_threshold),
            ("ridge_boost", self.ridge_boost),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(PlanetError::invalid(
                    field,
                    format!("must be finite, got {}", value),
                ));
            }
        }
        Ok(())
    }
}

/// Concentric water sphere drawn over the terrain
#[derive(Debug, Clone, PartialEq)]
pub struct WaterParams {
    /// Water radius as a multiple of the planet radius
    pub radius_scale: f32,

    /// Subdivision depth of the water icosphere
    pub recursion_depth: u32,
}

impl Default for WaterParams {
    fn default() -> Self {
        Self {
            radius_scale: 1.02,
            recursion_depth: 5,
        }
    }
}

impl WaterParams {
    pub fn validate(&self) -> Result<()> {
        if !(self.radius_scale.is_finite() && self.radius_scale > 0.0) {
            return Err(PlanetError::invalid(
                "water.radius_scale",
                format!("must be finite and positive, got {}", self.radius_scale),
            ));
        }
        Ok(())
    }
}
