//! Radius shared by all solids of revolution.

use crate::{GeometryError, Result};
use lumen_math::Tolerance;

/// A strictly positive radius.
///
/// Embedded by every radially symmetric surface rather than inherited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGeometry {
    radius: f64,
}

impl RadialGeometry {
    /// Validate `radius`, rejecting zero and negative values.
    pub fn new(radius: f64) -> Result<Self> {
        if Tolerance::DEFAULT.is_zero(radius) || radius < 0.0 || radius.is_nan() {
            log::trace!("rejected radius {radius}");
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { radius })
    }

    /// The radius value.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}
