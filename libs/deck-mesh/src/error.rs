//! # Mesh Errors
//!
//! Error types for profile construction and mesh generation.
//!
//! ## Error Policy
//!
//! - No clamping of invalid inputs and no partial meshes
//! - Every failure is returned synchronously to the caller
//! - Nothing is retried internally

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while building a profile or extruding it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Malformed profile definition. Raised once, at construction.
    #[error("Invalid profile configuration: {message}")]
    Configuration { message: String },

    /// Extrusion length that is zero, negative, or not finite.
    #[error("Invalid extrusion length: {length} (must be positive)")]
    InvalidDimension { length: f64 },

    /// Polygon that cannot be triangulated.
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Rejected global configuration values.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates a profile configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an invalid dimension error for the given length.
    pub fn invalid_dimension(length: f64) -> Self {
        Self::InvalidDimension { length }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
