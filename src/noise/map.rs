//! Planar noise maps: the fractal signal sampled on the `z = 0` plane.

use glam::Vec3;
use image::{GrayImage, Luma};

use super::fractal::FractalNoise;
use super::NoiseSource;
use crate::error::{PlanetError, Result};

/// Which fractal signal to sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseKind {
    #[default]
    Fbm,
    HybridMultifractal,
}

/// Row-major grid of noise samples (`x + y * width`)
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseMap {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl NoiseMap {
    /// Sample pixel `(x, y)` at `(x / period, y / period, 0)`.
    pub fn sample<S: NoiseSource>(
        fractal: &FractalNoise<S>,
        width: u32,
        height: u32,
        period: f32,
        kind: NoiseKind,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PlanetError::invalid(
                "noise_map_size",
                format!("must be non-empty, got {}x{}", width, height),
            ));
        }
        if !(period.is_finite() && period > 0.0) {
            return Err(PlanetError::invalid(
                "period",
                format!("must be finite and positive, got {}", period),
            ));
        }

        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let p = Vec3::new(x as f32 / period, y as f32 / period, 0.0);
                values.push(match kind {
                    NoiseKind::Fbm => fractal.fbm(p),
                    NoiseKind::HybridMultifractal => fractal.hybrid_multifractal(p),
                });
            }
        }

        Ok(Self {
            width,
            height,
            values,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values
            .get(x as usize + y as usize * self.width as usize)
            .copied()
    }

    /// Smallest and largest sample.
    pub fn range(&self) -> (f32, f32) {
        self.values
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Grayscale preview, stretched so the minimum is black and the maximum white.
    pub fn to_image(&self) -> GrayImage {
        let (lo, hi) = self.range();
        let span = hi - lo;

        GrayImage::from_fn(self.width, self.height, |x, y| {
            let v = self.values[x as usize + y as usize * self.width as usize];
            let t = if span > 0.0 { (v - lo) / span } else { 0.5 };
            Luma([(t * 255.0).round().clamp(0.0, 255.0) as u8])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::TerrainNoise;
    use crate::params::NoiseParams;

    fn fractal() -> TerrainNoise {
        TerrainNoise::perlin(&NoiseParams::default()).unwrap()
    }

    #[test]
    fn test_map_layout_matches_direct_sampling() {
        let fractal = fractal();
        let map = NoiseMap::sample(&fractal, 16, 8, 4.0, NoiseKind::Fbm).unwrap();
        assert_eq!(map.values().len(), 128);

        let expected = fractal.fbm(Vec3::new(5.0 / 4.0, 3.0 / 4.0, 0.0));
        assert_eq!(map.get(5, 3), Some(expected));
        assert_eq!(map.get(16, 0), None);
    }

    #[test]
    fn test_hybrid_map_uses_hybrid_signal() {
        let fractal = fractal();
        let map = NoiseMap::sample(&fractal, 4, 4, 2.0, NoiseKind::HybridMultifractal).unwrap();
        let expected = fractal.hybrid_multifractal(Vec3::new(1.5, 0.5, 0.0));
        assert_eq!(map.get(3, 1), Some(expected));
    }

    #[test]
    fn test_image_spans_full_range() {
        let map = NoiseMap::sample(&fractal(), 32, 32, 8.0, NoiseKind::Fbm).unwrap();
        let image = map.to_image();
        assert_eq!(image.dimensions(), (32, 32));

        let pixels: Vec<u8> = image.pixels().map(|p| p.0[0]).collect();
        assert_eq!(pixels.iter().min(), Some(&0));
        assert_eq!(pixels.iter().max(), Some(&255));
    }

    #[test]
    fn test_rejects_empty_map() {
        assert!(NoiseMap::sample(&fractal(), 0, 10, 20.0, NoiseKind::Fbm).is_err());
        assert!(NoiseMap::sample(&fractal(), 10, 10, 0.0, NoiseKind::Fbm).is_err());
    }
}
