//! Seeded gradient vectors and permutation lookup.

use glam::Vec3;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f32::consts::PI;

use crate::error::{PlanetError, Result};

/// Unit gradients plus a permutation of `[0, N)` stored twice so that
/// `perm[perm[x] + y]` never needs to wrap.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientTable {
    gradients: Vec<Vec3>,
    perm: Vec<usize>,
}

impl GradientTable {
    /// Build the table for `seed`. The same seed always yields the same table.
    pub fn new(seed: u32, size: usize) -> Result<Self> {
        if size < 2 || !size.is_power_of_two() {
            return Err(PlanetError::invalid(
                "table_size",
                format!("must be a power of two >= 2, got {}", size),
            ));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);

        // Inverse-transform sampling: uniform on the unit sphere
        let gradients = (0..size)
            .map(|_| {
                let u: f32 = rng.gen();
                let v: f32 = rng.gen();
                let theta = (2.0 * u - 1.0).clamp(-1.0, 1.0).acos();
                let phi = 2.0 * PI * v;
                Vec3::new(
                    phi.cos() * theta.sin(),
                    phi.sin() * theta.sin(),
                    theta.cos(),
                )
            })
            .collect();

        let mut perm: Vec<usize> = (0..size).collect();
        perm.shuffle(&mut rng);
        perm.extend_from_within(..);

        Ok(Self { gradients, perm })
    }

    /// Number of gradients (the lattice period).
    pub fn size(&self) -> usize {
        self.gradients.len()
    }

    /// Mask for wrapping lattice coordinates into the table.
    pub fn mask(&self) -> usize {
        self.gradients.len() - 1
    }

    pub fn gradients(&self) -> &[Vec3] {
        &self.gradients
    }

    /// The doubled permutation (length `2 * size()`).
    pub fn permutation(&self) -> &[usize] {
        &self.perm
    }

    /// Gradient at a wrapped lattice corner.
    #[inline]
    pub fn corner(&self, x: usize, y: usize, z: usize) -> Vec3 {
        let p = &self.perm;
        self.gradients[p[p[p[x] + y] + z]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_table() {
        let a = GradientTable::new(2021, 512).unwrap();
        let b = GradientTable::new(2021, 512).unwrap();
        assert_eq!(a, b);

        let c = GradientTable::new(2022, 512).unwrap();
        assert_ne!(a.permutation(), c.permutation());
    }

    #[test]
    fn test_gradients_are_unit_length() {
        let table = GradientTable::new(7, 256).unwrap();
        for (i, g) in table.gradients().iter().enumerate() {
            assert!(
                (g.length() - 1.0).abs() < 1e-5,
                "gradient {} has length {}",
                i,
                g.length()
            );
        }
    }

    #[test]
    fn test_permutation_is_doubled_permutation() {
        let table = GradientTable::new(99, 64).unwrap();
        let perm = table.permutation();
        assert_eq!(perm.len(), 128);
        assert_eq!(&perm[..64], &perm[64..]);

        let mut sorted = perm[..64].to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn test_gradients_cover_both_hemispheres() {
        let table = GradientTable::new(3, 512).unwrap();
        let up = table.gradients().iter().filter(|g| g.z > 0.0).count();
        // Loose bound; a uniform sphere puts half the samples above the equator
        assert!(up > 180 && up < 332, "{} of 512 gradients in upper hemisphere", up);
        let mean = table.gradients().iter().copied().sum::<Vec3>() / 512.0;
        assert!(mean.length() < 0.15, "mean gradient {} is biased", mean);
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        assert!(GradientTable::new(1, 300).is_err());
        assert!(GradientTable::new(1, 1).is_err());
    }
}
