//! Parameter definitions with units and documented semantics.
//!
//! Every tunable constant of the generator lives here:
//! - Reference values as `Default` impls
//! - Documented ranges and meanings
//! - `validate()` so builders fail before doing any work

mod noise;
mod sphere;
mod terrain;

// Re-export all types
pub use self::noise::NoiseParams;
pub use sphere::{SphereParams, MAX_RECURSION_DEPTH};
pub use terrain::{PlanetParams, TerrainShaping, WaterParams};
