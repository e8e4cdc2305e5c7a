//! Error types for ray generation.

use lumen_math::MathError;
use thiserror::Error;

/// Errors that can occur while setting up a camera or its view plane.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    /// Forward and up vectors are not perpendicular.
    #[error("forward and up vectors are not orthogonal (dot product {dot})")]
    NotOrthogonal {
        /// The offending dot product.
        dot: f64,
    },

    /// View plane parameters are out of range.
    #[error("invalid view plane: {0}")]
    InvalidViewPlane(String),

    /// A frame vector has zero length.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type for camera operations.
pub type Result<T> = std::result::Result<T, CameraError>;
