//! Ray-tube intersection (quadratic equation).

use lumen_geom::Tube;
use lumen_math::{Point3, Ray, Tolerance};

/// Ray parameters where `ray` crosses the lateral surface of `tube`.
///
/// Sorted ascending; only strictly positive parameters are kept. A tangent
/// ray yields a single parameter.
pub(crate) fn tube_hits(ray: &Ray, tube: &Tube) -> Vec<f64> {
    let tol = Tolerance::DEFAULT;
    let axis = tube.axis().direction.into_inner();
    let d = ray.direction.into_inner();
    let oc = ray.origin - tube.axis().origin;

    // Project ray direction and origin offset onto the plane perpendicular to axis
    let d_perp = d - d.dot(&axis) * axis;
    let oc_perp = oc - oc.dot(&axis) * axis;

    // |oc_perp + t * d_perp|^2 = r^2
    let a = d_perp.dot(&d_perp);
    let b = 2.0 * oc_perp.dot(&d_perp);
    let c = oc_perp.dot(&oc_perp) - tube.radius() * tube.radius();

    // Ray is parallel to axis
    if tol.is_zero(a) {
        return Vec::new();
    }

    let discriminant = tol.align_zero(b * b - 4.0 * a * c);
    if discriminant < 0.0 {
        return Vec::new();
    }

    let roots = if discriminant == 0.0 {
        vec![-b / (2.0 * a)]
    } else {
        let sqrt_disc = discriminant.sqrt();
        // a > 0, so the roots come out ordered
        vec![(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)]
    };

    roots
        .into_iter()
        .map(|t| tol.align_zero(t))
        .filter(|&t| t > 0.0)
        .collect()
}

/// Intersect a ray with an infinite tube.
///
/// Returns up to 2 points (entry and exit) ordered along the ray.
pub fn intersect_tube(ray: &Ray, tube: &Tube) -> Vec<Point3> {
    tube_hits(ray, tube).into_iter().map(|t| ray.at(t)).collect()
}
