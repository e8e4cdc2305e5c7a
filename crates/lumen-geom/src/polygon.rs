//! Convex planar polygon.

use crate::{GeometryError, Plane, Result};
use lumen_math::{Dir3, Point3, Tolerance};

/// A convex polygon given by an ordered vertex loop.
///
/// The supporting [`Plane`] is built from the first three vertices, so the
/// winding order fixes the outward normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
}

impl Polygon {
    /// Create a polygon from an ordered list of vertices.
    ///
    /// The vertices must all lie in one plane, form a convex loop, and be
    /// listed in a consistent winding order (either direction).
    pub fn new(vertices: Vec<Point3>) -> Result<Self> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeometryError::TooFewVertices(n));
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        let tol = Tolerance::DEFAULT;

        // Every edge must have length; edge `i` runs from `i - 1` to `i`.
        for i in 0..n {
            let prev = vertices[(i + n - 1) % n];
            if tol.points_equal(&prev, &vertices[i]) {
                return Err(GeometryError::DegenerateEdge { index: i });
            }
        }

        if n > 3 {
            let normal = plane.normal();
            let mut edge1 = vertices[n - 1] - vertices[n - 2];
            let mut edge2 = vertices[0] - vertices[n - 1];
            let positive = edge1.cross(&edge2).dot(normal.as_ref()) > 0.0;

            for i in 1..n {
                if !tol.is_zero(plane.signed_distance(&vertices[i])) {
                    return Err(GeometryError::NotCoplanar { index: i });
                }
                // Turn at vertex `i - 1`.
                edge1 = edge2;
                edge2 = vertices[i] - vertices[i - 1];
                if positive != (edge1.cross(&edge2).dot(normal.as_ref()) > 0.0) {
                    return Err(GeometryError::NotConvex { index: i - 1 });
                }
            }

            // Equal turns alone admit star loops; every vertex must also lie
            // on the inner side of every edge.
            for j in 0..n {
                let start = vertices[j];
                let next = (j + 1) % n;
                let edge = vertices[next] - start;
                for k in (0..n).filter(|&k| k != j && k != next) {
                    let side = edge.cross(&(vertices[k] - start)).dot(normal.as_ref());
                    if positive != (side > 0.0) {
                        return Err(GeometryError::NotConvex { index: k });
                    }
                }
            }
        }

        log::debug!("polygon: {n} vertices, normal {:?}", plane.normal());
        Ok(Self { vertices, plane })
    }

    /// The vertex loop in winding order.
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// The supporting plane.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Normal at `p`; the supporting plane's normal.
    #[inline]
    pub fn normal_at(&self, p: &Point3) -> Dir3 {
        self.plane.normal_at(p)
    }
}
