//! Per-vertex terrain height from the fractal noise signals.

use glam::Vec3;

use crate::noise::{FractalNoise, NoiseSource};
use crate::params::TerrainShaping;

/// Blend the raw fBm value with the continent signal, then exaggerate ridges.
///
/// `continent` is the already-scaled hybrid multifractal sample.
pub fn shape_elevation(fbm: f32, continent: f32, shaping: &TerrainShaping) -> f32 {
    let mut value = fbm;

    // The higher the fBm, the less of the continent signal is added
    if value > shaping.continent_threshold {
        value += (1.0 - value) * continent;
    }

    // Full boost right at the threshold, fading as the value climbs
    if value > shaping.ridge_threshold {
        value += (1.0 - (value - shaping.ridge_threshold)) * shaping.ridge_boost;
    }

    value
}

/// One height per position, sampled at `position / period` and scaled by `sqrt(radius)`.
pub fn height_map<S: NoiseSource>(
    positions: &[Vec3],
    radius: f32,
    noise: &FractalNoise<S>,
    period: f32,
    shaping: &TerrainShaping,
) -> Vec<f32> {
    let relief = radius.sqrt();
    positions
        .iter()
        .map(|&p| {
            let coord = p / period;
            let fbm = noise.fbm(coord);
            let continent = noise.hybrid_multifractal(coord) * shaping.continent_scale;
            shape_elevation(fbm, continent, shaping) * relief
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_values_are_untouched() {
        let shaping = TerrainShaping::default();
        assert_eq!(shape_elevation(-0.5, 0.3, &shaping), -0.5);
    }

    #[test]
    fn test_continent_blend() {
        let shaping = TerrainShaping::default();
        // 0.2 + (1 - 0.2) * 0.1
        assert!((shape_elevation(0.2, 0.1, &shaping) - 0.28).abs() < 1e-6);
        // No continent signal, no change
        assert_eq!(shape_elevation(0.0, 0.0, &shaping), 0.0);
    }

    #[test]
    fn test_ridge_boost() {
        let shaping = TerrainShaping::default();
        // 0.5 stays 0.5 after the blend, then gains (1 - 0.1) * 0.3
        let value = shape_elevation(0.5, 0.0, &shaping);
        assert!((value - 0.77).abs() < 1e-6, "{}", value);
    }

    #[test]
    fn test_heights_scale_with_sqrt_radius() {
        let noise = crate::noise::TerrainNoise::perlin(&Default::default()).unwrap();
        let shaping = TerrainShaping::default();
        let positions = [Vec3::new(7.3, -2.1, 11.9)];

        let unit = height_map(&positions, 1.0, &noise, 20.0, &shaping);
        let big = height_map(&positions, 64.0, &noise, 20.0, &shaping);
        assert!((big[0] - unit[0] * 8.0).abs() < 1e-5);
    }
}
