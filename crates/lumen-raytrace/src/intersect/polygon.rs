//! Ray-polygon intersection (plane hit plus edge sign test).

use super::intersect_plane;
use lumen_geom::{Polygon, Triangle};
use lumen_math::{Point3, Ray, Tolerance};

/// Intersect a ray with a convex polygon.
///
/// The supporting plane is hit first. Then for each edge `(v_i, v_{i+1})`,
/// taken relative to the ray origin, `s_i = d . (v_i x v_{i+1})` is the signed
/// volume of the ray against that edge. The ray is inside when every `s_i`
/// has the same sign; a ray through an edge or vertex (`s_i == 0`) misses.
pub fn intersect_polygon(ray: &Ray, polygon: &Polygon) -> Option<Point3> {
    let hit = intersect_plane(ray, polygon.plane())?;
    if inside_edges(ray, polygon.vertices()) {
        Some(hit)
    } else {
        None
    }
}

/// Intersect a ray with a triangle.
pub fn intersect_triangle(ray: &Ray, triangle: &Triangle) -> Option<Point3> {
    intersect_polygon(ray, triangle.polygon())
}

fn inside_edges(ray: &Ray, vertices: &[Point3]) -> bool {
    let tol = Tolerance::DEFAULT;
    let d = ray.direction.as_ref();
    let n = vertices.len();

    let mut positive = None;
    for i in 0..n {
        let v1 = vertices[i] - ray.origin;
        let v2 = vertices[(i + 1) % n] - ray.origin;
        let s = d.dot(&v1.cross(&v2));
        if tol.is_zero(s) {
            return false;
        }
        match positive {
            None => positive = Some(s > 0.0),
            Some(sign) if sign != (s > 0.0) => return false,
            Some(_) => {}
        }
    }
    true
}
