//! Ray representation.

use crate::{Dir3, Point3, Result, Tolerance, Vec3};

/// A ray in 3D space defined by origin and unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction will be normalized; a zero-length direction is rejected.
    pub fn new(origin: Point3, direction: Vec3) -> Result<Self> {
        let direction = Tolerance::DEFAULT.direction(direction)?;
        Ok(Self { origin, direction })
    }

    /// Create a ray from an already normalized direction.
    pub fn from_dir(origin: Point3, direction: Dir3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }
}
