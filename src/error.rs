//! Error types for planet generation.

use thiserror::Error;

/// Errors raised while configuring the mesh builder, noise engine or terrain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanetError {
    /// A construction parameter is out of range. Nothing is built.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl PlanetError {
    /// Create an invalid-configuration error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PlanetError>;
