//! Ray-cylinder intersection: clipped lateral surface plus two cap disks.

use super::tube::tube_hits;
use lumen_geom::Cylinder;
use lumen_math::{Point3, Ray, Tolerance};

/// Intersect a ray with a finite cylinder.
///
/// Lateral hits are kept when their axial coordinate lies in `[0, height]`.
/// Cap hits must fall strictly inside the radius, so a point on a rim is
/// reported once. Results are ordered along the ray.
pub fn intersect_cylinder(ray: &Ray, cylinder: &Cylinder) -> Vec<Point3> {
    let tol = Tolerance::DEFAULT;
    let axis = cylinder.axis();
    let height = cylinder.height();

    let mut hits: Vec<(f64, Point3)> = tube_hits(ray, cylinder.tube())
        .into_iter()
        .map(|t| (t, ray.at(t)))
        .filter(|(_, p)| {
            let v = tol.align_zero((p - axis.origin).dot(axis.direction.as_ref()));
            v >= 0.0 && tol.align_zero(v - height) <= 0.0
        })
        .collect();

    let top = axis.at(height);
    for center in [axis.origin, top] {
        if let Some(hit) = cap_hit(ray, cylinder, &center) {
            hits.push(hit);
        }
    }

    hits.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    hits.into_iter().map(|(_, p)| p).collect()
}

/// Hit of `ray` with the cap disk centered at `center`, as `(t, point)`.
fn cap_hit(ray: &Ray, cylinder: &Cylinder, center: &Point3) -> Option<(f64, Point3)> {
    let tol = Tolerance::DEFAULT;
    let normal = cylinder.axis().direction;

    let denom = normal.dot(ray.direction.as_ref());
    if tol.is_zero(denom) {
        return None;
    }

    let t = tol.align_zero(normal.dot(&(center - ray.origin)) / denom);
    if t <= 0.0 {
        return None;
    }

    let point = ray.at(t);
    let r = cylinder.radius();
    if tol.align_zero((point - center).norm_squared() - r * r) < 0.0 {
        Some((t, point))
    } else {
        None
    }
}
