//! Finite cylinder: a tube bounded by two flat caps.

use crate::{GeometryError, Result, Tube};
use lumen_math::{Dir3, Point3, Ray, Tolerance};

/// A [`Tube`] truncated to `[0, height]` along its axis.
///
/// The bottom cap lies in the plane through the axis origin, the top cap at
/// `height` along the axis direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    tube: Tube,
    height: f64,
}

impl Cylinder {
    /// Create a cylinder; fails if `radius` or `height` is not strictly positive.
    pub fn new(axis: Ray, radius: f64, height: f64) -> Result<Self> {
        let tube = Tube::new(axis, radius)?;
        if Tolerance::DEFAULT.is_zero(height) || height < 0.0 || height.is_nan() {
            log::trace!("rejected cylinder height {height}");
            return Err(GeometryError::InvalidHeight(height));
        }
        log::debug!("cylinder: radius {radius}, height {height}");
        Ok(Self { tube, height })
    }

    /// The unbounded lateral surface.
    #[inline]
    pub fn tube(&self) -> &Tube {
        &self.tube
    }

    /// The axis ray; its origin is the center of the bottom cap.
    #[inline]
    pub fn axis(&self) -> &Ray {
        self.tube.axis()
    }

    /// The cylinder radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.tube.radius()
    }

    /// Distance between the two caps.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Outward normal at `p`.
    ///
    /// Points on either cap (and the axis origin) get the axis direction as
    /// is, so the bottom cap shares the top cap's orientation. Everything else
    /// uses the lateral surface normal.
    pub fn normal_at(&self, p: &Point3) -> Dir3 {
        let axis_dir = self.axis().direction;
        let Some(t) = self.tube.axial_offset(p) else {
            return axis_dir;
        };
        if t == 0.0 || Tolerance::DEFAULT.is_zero(self.height - t) {
            return axis_dir;
        }
        self.tube.normal_at(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lumen_math::Vec3;

    fn z_cylinder() -> Cylinder {
        let axis = Ray::new(Point3::origin(), Vec3::z()).unwrap();
        Cylinder::new(axis, 1.0, 3.0).unwrap()
    }

    #[test]
    fn test_invalid_height() {
        let axis = Ray::new(Point3::origin(), Vec3::z()).unwrap();
        assert_eq!(
            Cylinder::new(axis, 1.0, 0.0),
            Err(GeometryError::InvalidHeight(0.0))
        );
        assert_eq!(
            Cylinder::new(axis, 1.0, -2.0),
            Err(GeometryError::InvalidHeight(-2.0))
        );
    }

    #[test]
    fn test_invalid_radius_checked_first() {
        let axis = Ray::new(Point3::origin(), Vec3::z()).unwrap();
        assert_eq!(
            Cylinder::new(axis, -1.0, -2.0),
            Err(GeometryError::InvalidRadius(-1.0))
        );
    }

    #[test]
    fn test_normal_lateral() {
        let cyl = z_cylinder();
        let n = cyl.normal_at(&Point3::new(0.0, 1.0, 1.5));
        assert_relative_eq!(n.into_inner(), Vec3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_normal_bottom_cap() {
        let cyl = z_cylinder();
        let n = cyl.normal_at(&Point3::new(0.5, 0.2, 0.0));
        assert_eq!(n, cyl.axis().direction);
    }

    #[test]
    fn test_normal_top_cap() {
        let cyl = z_cylinder();
        let n = cyl.normal_at(&Point3::new(-0.3, 0.4, 3.0));
        assert_eq!(n, cyl.axis().direction);
    }

    #[test]
    fn test_normal_axis_origin() {
        let cyl = z_cylinder();
        assert_eq!(cyl.normal_at(&Point3::origin()), cyl.axis().direction);
    }

    #[test]
    fn test_accessors() {
        let cyl = z_cylinder();
        assert_eq!(cyl.radius(), 1.0);
        assert_eq!(cyl.height(), 3.0);
        assert_eq!(cyl.tube().radius(), 1.0);
    }
}
