//! Infinite cylindrical surface.

use crate::{RadialGeometry, Result};
use lumen_math::{Dir3, Point3, Ray, Tolerance};

/// An infinite cylindrical surface of constant radius around an axis ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    axis: Ray,
    radial: RadialGeometry,
}

impl Tube {
    /// Create a tube around `axis`; fails if `radius` is not strictly positive.
    pub fn new(axis: Ray, radius: f64) -> Result<Self> {
        let radial = RadialGeometry::new(radius)?;
        log::debug!(
            "tube: axis origin {:?}, direction {:?}, radius {radius}",
            axis.origin,
            axis.direction
        );
        Ok(Self { axis, radial })
    }

    /// The axis ray.
    #[inline]
    pub fn axis(&self) -> &Ray {
        &self.axis
    }

    /// The tube radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radial.radius()
    }

    /// Signed distance of `p` along the axis from the axis origin, snapped to
    /// zero within tolerance.
    ///
    /// Returns `None` when `p` coincides with the axis origin.
    pub fn axial_offset(&self, p: &Point3) -> Option<f64> {
        let tol = Tolerance::DEFAULT;
        if tol.points_equal(p, &self.axis.origin) {
            return None;
        }
        Some(tol.align_zero((p - self.axis.origin).dot(self.axis.direction.as_ref())))
    }

    /// Outward normal of the lateral surface at `p`.
    ///
    /// The component of `p - axis.origin` orthogonal to the axis. Points with
    /// no such component (on the axis itself) get the axis direction.
    pub fn normal_at(&self, p: &Point3) -> Dir3 {
        let Some(t) = self.axial_offset(p) else {
            log::trace!("tube normal requested at the axis origin");
            return self.axis.direction;
        };
        let foot = self.axis.at(t);
        Tolerance::DEFAULT.direction(p - foot).unwrap_or_else(|_| {
            log::trace!("tube normal requested on the axis at t = {t}");
            self.axis.direction
        })
    }
}
