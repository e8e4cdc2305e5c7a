#![warn(missing_docs)]

//! Math types for the lumen ray tracing core.
//!
//! Thin wrappers around nalgebra providing the value types every
//! surface and the camera are built from: points, vectors, unit
//! directions, rays, and the tolerance convention used to snap
//! rounding noise to exact zero.

use nalgebra::{Unit, Vector3};
use thiserror::Error;

mod ray;

pub use ray::Ray;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Errors raised by vector algebra.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// A direction was requested from a vector of (near) zero length.
    #[error("cannot normalize a zero-length vector")]
    ZeroVector,
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;

/// Normalize `v` into a direction, rejecting the zero vector.
///
/// Uses [`Tolerance::DEFAULT`] to decide what counts as zero length.
pub fn direction(v: Vec3) -> Result<Dir3> {
    Tolerance::DEFAULT.direction(v)
}

/// Tolerance used for near-zero and near-equal comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Absolute threshold below which a scalar is treated as zero.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance shared by every surface and the camera.
    pub const DEFAULT: Self = Self { linear: 1e-10 };

    /// Check if a scalar is effectively zero.
    #[inline]
    pub fn is_zero(&self, x: f64) -> bool {
        x.abs() < self.linear
    }

    /// Snap `x` to exactly `0.0` when it is effectively zero.
    #[inline]
    pub fn align_zero(&self, x: f64) -> f64 {
        if self.is_zero(x) {
            0.0
        } else {
            x
        }
    }

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if two vectors agree componentwise within tolerance.
    pub fn vectors_equal(&self, a: &Vec3, b: &Vec3) -> bool {
        (a - b).iter().all(|c| self.is_zero(*c))
    }

    /// Normalize `v`, failing when its length is effectively zero.
    pub fn direction(&self, v: Vec3) -> Result<Dir3> {
        Unit::try_new(v, self.linear).ok_or(MathError::ZeroVector)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
