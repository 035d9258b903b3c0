//! Icoplanet library - procedural planet geometry and terrain noise

pub mod cli;
pub mod error;
pub mod noise;
pub mod params;
pub mod planet;
pub mod sphere;

pub use error::{PlanetError, Result};
