//! The intersectable-surface capability and the closed set of shapes.

use crate::intersect::{
    intersect_cylinder, intersect_plane, intersect_polygon, intersect_triangle, intersect_tube,
};
use lumen_geom::{Cylinder, Plane, Polygon, Triangle, Tube};
use lumen_math::{Dir3, Point3, Ray};

/// Anything a ray can be traced against.
pub trait Geometry: Send + Sync + std::fmt::Debug {
    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: &Point3) -> Dir3;

    /// Intersection points with `ray`, ordered along the ray.
    ///
    /// An empty result means no intersection.
    fn intersect(&self, ray: &Ray) -> Vec<Point3>;
}

impl Geometry for Plane {
    fn normal_at(&self, point: &Point3) -> Dir3 {
        Plane::normal_at(self, point)
    }

    fn intersect(&self, ray: &Ray) -> Vec<Point3> {
        intersect_plane(ray, self).into_iter().collect()
    }
}

impl Geometry for Tube {
    fn normal_at(&self, point: &Point3) -> Dir3 {
        Tube::normal_at(self, point)
    }

    fn intersect(&self, ray: &Ray) -> Vec<Point3> {
        intersect_tube(ray, self)
    }
}

impl Geometry for Cylinder {
    fn normal_at(&self, point: &Point3) -> Dir3 {
        Cylinder::normal_at(self, point)
    }

    fn intersect(&self, ray: &Ray) -> Vec<Point3> {
        intersect_cylinder(ray, self)
    }
}

impl Geometry for Polygon {
    fn normal_at(&self, point: &Point3) -> Dir3 {
        Polygon::normal_at(self, point)
    }

    fn intersect(&self, ray: &Ray) -> Vec<Point3> {
        intersect_polygon(ray, self).into_iter().collect()
    }
}

impl Geometry for Triangle {
    fn normal_at(&self, point: &Point3) -> Dir3 {
        Triangle::normal_at(self, point)
    }

    fn intersect(&self, ray: &Ray) -> Vec<Point3> {
        intersect_triangle(ray, self).into_iter().collect()
    }
}

/// The kind of a shape (for match-based dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Infinite plane.
    Plane,
    /// Infinite cylindrical surface.
    Tube,
    /// Capped finite cylinder.
    Cylinder,
    /// Convex polygon.
    Polygon,
    /// Triangle.
    Triangle,
}

/// One primitive of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Infinite plane.
    Plane(Plane),
    /// Infinite cylindrical surface.
    Tube(Tube),
    /// Capped finite cylinder.
    Cylinder(Cylinder),
    /// Convex polygon.
    Polygon(Polygon),
    /// Triangle.
    Triangle(Triangle),
}

impl Shape {
    /// The kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Plane(_) => ShapeKind::Plane,
            Shape::Tube(_) => ShapeKind::Tube,
            Shape::Cylinder(_) => ShapeKind::Cylinder,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }

    fn as_geometry(&self) -> &dyn Geometry {
        match self {
            Shape::Plane(s) => s,
            Shape::Tube(s) => s,
            Shape::Cylinder(s) => s,
            Shape::Polygon(s) => s,
            Shape::Triangle(s) => s,
        }
    }
}

impl Geometry for Shape {
    fn normal_at(&self, point: &Point3) -> Dir3 {
        self.as_geometry().normal_at(point)
    }

    fn intersect(&self, ray: &Ray) -> Vec<Point3> {
        self.as_geometry().intersect(ray)
    }
}

impl From<Plane> for Shape {
    fn from(s: Plane) -> Self {
        Shape::Plane(s)
    }
}

impl From<Tube> for Shape {
    fn from(s: Tube) -> Self {
        Shape::Tube(s)
    }
}

impl From<Cylinder> for Shape {
    fn from(s: Cylinder) -> Self {
        Shape::Cylinder(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Shape::Triangle(s)
    }
}
