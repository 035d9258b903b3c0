//! Classic 3-D gradient (Perlin) noise with a quintic fade.

use glam::Vec3;
use ::noise::NoiseFn;

use super::table::GradientTable;
use super::NoiseSource;
use crate::error::Result;

/// Single-octave gradient noise over a seeded [`GradientTable`].
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    table: GradientTable,
}

impl PerlinNoise {
    /// Create a noise generator with `table_size` gradients (power of two).
    pub fn new(seed: u32, table_size: usize) -> Result<Self> {
        Ok(Self {
            table: GradientTable::new(seed, table_size)?,
        })
    }

    pub fn table(&self) -> &GradientTable {
        &self.table
    }
}

/// Quintic interpolation curve `6t^5 - 15t^4 + 10t^3`
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

impl NoiseSource for PerlinNoise {
    fn evaluate(&self, point: Vec3) -> f32 {
        let mask = self.table.mask() as i32;
        let cell = point.floor();

        let x0 = (cell.x as i32 & mask) as usize;
        let y0 = (cell.y as i32 & mask) as usize;
        let z0 = (cell.z as i32 & mask) as usize;
        let x1 = (x0 + 1) & mask as usize;
        let y1 = (y0 + 1) & mask as usize;
        let z1 = (z0 + 1) & mask as usize;

        // Offsets from the near (0) and far (1) corners
        let p0 = point - cell;
        let p1 = p0 - Vec3::ONE;

        let dot = |x, y, z, offset: Vec3| self.table.corner(x, y, z).dot(offset);

        let d000 = dot(x0, y0, z0, Vec3::new(p0.x, p0.y, p0.z));
        let d100 = dot(x1, y0, z0, Vec3::new(p1.x, p0.y, p0.z));
        let d010 = dot(x0, y1, z0, Vec3::new(p0.x, p1.y, p0.z));
        let d110 = dot(x1, y1, z0, Vec3::new(p1.x, p1.y, p0.z));
        let d001 = dot(x0, y0, z1, Vec3::new(p0.x, p0.y, p1.z));
        let d101 = dot(x1, y0, z1, Vec3::new(p1.x, p0.y, p1.z));
        let d011 = dot(x0, y1, z1, Vec3::new(p0.x, p1.y, p1.z));
        let d111 = dot(x1, y1, z1, Vec3::new(p1.x, p1.y, p1.z));

        let u = fade(p0.x);
        let v = fade(p0.y);
        let w = fade(p0.z);

        let a = lerp(d000, d100, u);
        let b = lerp(d010, d110, u);
        let c = lerp(d001, d101, u);
        let d = lerp(d011, d111, u);

        let e = lerp(a, b, v);
        let f = lerp(c, d, v);

        lerp(e, f, w)
    }
}

impl NoiseFn<f64, 3> for PerlinNoise {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.evaluate(Vec3::new(point[0] as f32, point[1] as f32, point[2] as f32)) as f64
    }
}
