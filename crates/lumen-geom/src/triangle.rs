//! Triangle.

use crate::{Plane, Polygon, Result};
use lumen_math::{Dir3, Point3};

/// A [`Polygon`] with exactly three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    polygon: Polygon,
}

impl Triangle {
    /// Create a triangle; collinear or coincident vertices are rejected.
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> Result<Self> {
        let polygon = Polygon::new(vec![p1, p2, p3])?;
        Ok(Self { polygon })
    }

    /// The three vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> [Point3; 3] {
        let v = self.polygon.vertices();
        [v[0], v[1], v[2]]
    }

    /// The underlying polygon.
    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// The supporting plane.
    #[inline]
    pub fn plane(&self) -> &Plane {
        self.polygon.plane()
    }

    /// Normal at `p`; the supporting plane's normal.
    #[inline]
    pub fn normal_at(&self, p: &Point3) -> Dir3 {
        self.polygon.normal_at(p)
    }
}
