//! Geodesic sphere construction parameters.

use glam::Vec3;

use crate::error::{PlanetError, Result};

/// Deepest subdivision whose vertex count (`10 * 4^k + 2`) still fits a `u32` index buffer.
pub const MAX_RECURSION_DEPTH: u32 = 14;

/// Icosphere construction parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SphereParams {
    /// World-space center of the sphere
    pub center: Vec3,

    /// Distance from center to every vertex (world units, must be > 0)
    pub radius: f32,

    /// Number of subdivision passes applied to the base icosahedron
    /// 0 = icosahedron (12 vertices), 5 = 10,242 vertices
    pub recursion_depth: u32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 50.0,
            recursion_depth: 5,
        }
    }
}

impl SphereParams {
    pub fn new(center: Vec3, radius: f32, recursion_depth: u32) -> Self {
        Self {
            center,
            radius,
            recursion_depth,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(PlanetError::invalid(
                "radius",
                format!("must be finite and positive, got {}", self.radius),
            ));
        }
        if !self.center.is_finite() {
            return Err(PlanetError::invalid(
                "center",
                format!("must be finite, got {}", self.center),
            ));
        }
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            return Err(PlanetError::invalid(
                "recursion_depth",
                format!(
                    "{} exceeds the maximum of {}",
                    self.recursion_depth, MAX_RECURSION_DEPTH
                ),
            ));
        }
        Ok(())
    }

    /// Vertex count after all subdivision passes.
    pub fn vertex_count(&self) -> usize {
        12 + 10 * (4usize.pow(self.recursion_depth) - 1)
    }

    /// Face count after all subdivision passes.
    pub fn face_count(&self) -> usize {
        20 * 4usize.pow(self.recursion_depth)
    }
}
