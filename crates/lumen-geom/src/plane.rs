//! Infinite plane.

use crate::{GeometryError, Result};
use lumen_math::{Dir3, Point3, Tolerance, Vec3};

/// An infinite plane defined by an anchor point and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    anchor: Point3,
    normal: Dir3,
}

impl Plane {
    /// Create a plane from a point on it and a normal.
    ///
    /// The normal is normalized but its orientation is taken as given.
    pub fn new(anchor: Point3, normal: Vec3) -> Result<Self> {
        let normal = Tolerance::DEFAULT
            .direction(normal)
            .map_err(|_| GeometryError::ZeroNormal)?;
        log::debug!("plane: anchor {anchor:?}, normal {normal:?}");
        Ok(Self { anchor, normal })
    }

    /// Create the plane through three points.
    ///
    /// The normal is `-(p2 - p1) x (p3 - p1)`, normalized. `p1` becomes the
    /// anchor. Coincident or collinear points are rejected.
    pub fn from_points(p1: Point3, p2: Point3, p3: Point3) -> Result<Self> {
        let u = p2 - p1;
        let v = p3 - p1;
        let normal = Tolerance::DEFAULT.direction(u.cross(&v)).map_err(|_| {
            log::trace!("rejected collinear plane points {p1:?}, {p2:?}, {p3:?}");
            GeometryError::Collinear
        })?;
        let normal = -normal;
        log::debug!("plane: anchor {p1:?}, normal {normal:?}");
        Ok(Self { anchor: p1, normal })
    }

    /// The anchor point.
    #[inline]
    pub fn anchor(&self) -> &Point3 {
        &self.anchor
    }

    /// The unit normal.
    #[inline]
    pub fn normal(&self) -> Dir3 {
        self.normal
    }

    /// Normal at `p`; a plane has the same normal everywhere.
    #[inline]
    pub fn normal_at(&self, _p: &Point3) -> Dir3 {
        self.normal
    }

    /// Signed distance from a point to this plane.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        (p - self.anchor).dot(self.normal.as_ref())
    }
}
