//! Ray-plane intersection (closed-form).

use lumen_geom::Plane;
use lumen_math::{Point3, Ray, Tolerance};

/// Intersect a ray with a plane.
///
/// Returns `None` if the ray starts at the plane anchor, runs parallel to the
/// plane, or meets it at or behind its origin.
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> Option<Point3> {
    let tol = Tolerance::DEFAULT;
    if tol.points_equal(plane.anchor(), &ray.origin) {
        return None;
    }
    let p0_q = plane.anchor() - ray.origin;

    let normal = plane.normal();
    let denom = normal.dot(ray.direction.as_ref());

    // Ray is parallel to plane
    if tol.is_zero(denom) {
        return None;
    }

    let t = tol.align_zero(normal.dot(&p0_q) / denom);
    if t <= 0.0 {
        return None;
    }

    Some(ray.at(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lumen_math::Vec3;

    fn xy_plane() -> Plane {
        Plane::new(Point3::origin(), Vec3::z()).unwrap()
    }

    #[test]
    fn test_ray_plane_perpendicular() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0)).unwrap();
        let hit = intersect_plane(&ray, &xy_plane()).unwrap();
        assert_relative_eq!(hit, Point3::origin(), epsilon = 1e-12);
    }

    #[test]
    fn test_ray_plane_offset() {
        let ray = Ray::new(Point3::new(3.0, 4.0, 10.0), Vec3::new(0.0, 0.0, -1.0)).unwrap();
        let hit = intersect_plane(&ray, &xy_plane()).unwrap();
        assert_relative_eq!(hit, Point3::new(3.0, 4.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_ray_plane_parallel() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 0.0)).unwrap();
        assert!(intersect_plane(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_ray_plane_parallel_in_plane() {
        let ray = Ray::new(Point3::new(1.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)).unwrap();
        assert!(intersect_plane(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_ray_plane_behind() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0)).unwrap();
        assert!(intersect_plane(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_ray_starts_on_plane() {
        // Origin on the plane but away from the anchor: t == 0.
        let ray = Ray::new(Point3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 1.0)).unwrap();
        assert!(intersect_plane(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_ray_starts_at_anchor() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0)).unwrap();
        assert!(intersect_plane(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_ray_plane_angled() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Vec3::new(1.0, 0.0, -1.0)).unwrap();
        let hit = intersect_plane(&ray, &xy_plane()).unwrap();
        assert_relative_eq!(hit, Point3::new(10.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_normal_orientation_does_not_matter() {
        let flipped = Plane::new(Point3::origin(), -Vec3::z()).unwrap();
        let ray = Ray::new(Point3::new(1.0, 2.0, 4.0), Vec3::new(0.0, 0.0, -1.0)).unwrap();
        let hit = intersect_plane(&ray, &flipped).unwrap();
        assert_relative_eq!(hit, Point3::new(1.0, 2.0, 0.0), epsilon = 1e-12);
    }
}
