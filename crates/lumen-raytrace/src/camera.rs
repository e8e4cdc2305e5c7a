//! Pinhole camera that turns pixel coordinates into world-space rays.

use crate::{CameraError, Result};
use lumen_math::{direction, Dir3, Point3, Ray, Tolerance, Vec3};

/// The virtual screen in front of the camera: its pixel grid, its distance
/// along the forward axis, and its physical size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlane {
    columns: u32,
    rows: u32,
    distance: f64,
    width: f64,
    height: f64,
}

impl ViewPlane {
    /// Create a view plane of `columns` x `rows` pixels spanning
    /// `width` x `height` world units at `distance` from the camera.
    ///
    /// All parameters must be strictly positive.
    pub fn new(columns: u32, rows: u32, distance: f64, width: f64, height: f64) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(CameraError::InvalidViewPlane(format!(
                "pixel grid {columns}x{rows} is empty"
            )));
        }
        for (name, value) in [("distance", distance), ("width", width), ("height", height)] {
            if !(value > 0.0) || Tolerance::DEFAULT.is_zero(value) || value.is_infinite() {
                return Err(CameraError::InvalidViewPlane(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(Self {
            columns,
            rows,
            distance,
            width,
            height,
        })
    }

    /// Number of pixel columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of pixel rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Distance from the camera to the view plane.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Width of one pixel in world units.
    pub fn pixel_width(&self) -> f64 {
        self.width / f64::from(self.columns)
    }

    /// Height of one pixel in world units.
    pub fn pixel_height(&self) -> f64 {
        self.height / f64::from(self.rows)
    }
}

/// A camera position with an orthonormal `(right, up, forward)` frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Point3,
    forward: Dir3,
    up: Dir3,
    right: Dir3,
}

impl Camera {
    /// Create a camera at `position` looking along `forward`.
    ///
    /// `forward` and `up` must be nonzero and orthogonal; the right vector is
    /// `forward x up`.
    pub fn new(position: Point3, forward: Vec3, up: Vec3) -> Result<Self> {
        let dot = forward.dot(&up);
        if !Tolerance::DEFAULT.is_zero(dot) {
            return Err(CameraError::NotOrthogonal { dot });
        }
        let right = direction(forward.cross(&up))?;
        let forward = direction(forward)?;
        let up = direction(up)?;
        log::debug!("camera at {position:?}: forward {forward:?}, up {up:?}, right {right:?}");
        Ok(Self {
            position,
            forward,
            up,
            right,
        })
    }

    /// Camera position.
    pub fn position(&self) -> &Point3 {
        &self.position
    }

    /// Viewing direction.
    pub fn forward(&self) -> Dir3 {
        self.forward
    }

    /// Up direction.
    pub fn up(&self) -> Dir3 {
        self.up
    }

    /// Right direction.
    pub fn right(&self) -> Dir3 {
        self.right
    }

    /// Ray from the camera through the center of pixel `(x, y)`.
    ///
    /// `x` counts columns to the right, `y` counts rows downward. Pixel
    /// `(columns / 2, rows / 2)` sits at the view plane center.
    pub fn ray_through_pixel(&self, view: &ViewPlane, x: u32, y: u32) -> Ray {
        let tol = Tolerance::DEFAULT;
        let center = self.position + self.forward.as_ref() * view.distance;

        let pixel_w = view.pixel_width();
        let pixel_h = view.pixel_height();
        let offset_x =
            (f64::from(x) - f64::from(view.columns) / 2.0) * pixel_w + pixel_w / 2.0;
        let offset_y = (f64::from(y) - f64::from(view.rows) / 2.0) * pixel_h + pixel_h / 2.0;

        let mut point = center;
        if !tol.is_zero(offset_x) {
            point += self.right.as_ref() * offset_x;
        }
        // Rows grow downward while `up` points up.
        if !tol.is_zero(offset_y) {
            point -= self.up.as_ref() * offset_y;
        }

        // The forward component is `distance > 0`, so this never degenerates.
        Ray::from_dir(self.position, Dir3::new_normalize(point - self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> Camera {
        Camera::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, -1.0, 0.0))
            .unwrap()
    }

    #[test]
    fn test_frame_is_orthonormal() {
        let cam = Camera::new(
            Point3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
        )
        .unwrap();
        let (f, u, r) = (cam.forward(), cam.up(), cam.right());
        assert_relative_eq!(r.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.dot(f.as_ref()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.dot(u.as_ref()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.into_inner(), Vec3::x(), epsilon = 1e-12);
        assert_relative_eq!(f.into_inner(), Vec3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_not_orthogonal() {
        let result = Camera::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 1.0));
        assert_eq!(result, Err(CameraError::NotOrthogonal { dot: 1.0 }));
    }

    #[test]
    fn test_nearly_orthogonal_accepted() {
        let result = Camera::new(
            Point3::origin(),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1e-12),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_zero_frame_vector() {
        let result = Camera::new(Point3::origin(), Vec3::zeros(), Vec3::y());
        assert!(matches!(result, Err(CameraError::Math(_))));
    }

    #[test]
    fn test_view_plane_validation() {
        assert!(ViewPlane::new(0, 3, 1.0, 3.0, 3.0).is_err());
        assert!(ViewPlane::new(3, 0, 1.0, 3.0, 3.0).is_err());
        assert!(ViewPlane::new(3, 3, 0.0, 3.0, 3.0).is_err());
        assert!(ViewPlane::new(3, 3, 1.0, -3.0, 3.0).is_err());
        assert!(ViewPlane::new(3, 3, 1.0, 3.0, f64::NAN).is_err());
        let view = ViewPlane::new(4, 2, 1.0, 8.0, 1.0).unwrap();
        assert_relative_eq!(view.pixel_width(), 2.0);
        assert_relative_eq!(view.pixel_height(), 0.5);
    }

    #[test]
    fn test_3x3_grid() {
        let cam = camera();
        let view = ViewPlane::new(3, 3, 1.0, 3.0, 3.0).unwrap();
        let cases = [
            ((0, 0), Vec3::new(-1.0, -1.0, 1.0)),
            ((1, 0), Vec3::new(0.0, -1.0, 1.0)),
            ((0, 1), Vec3::new(-1.0, 0.0, 1.0)),
            ((1, 1), Vec3::new(0.0, 0.0, 1.0)),
            ((2, 2), Vec3::new(1.0, 1.0, 1.0)),
        ];
        for ((x, y), expected) in cases {
            let ray = cam.ray_through_pixel(&view, x, y);
            assert_eq!(ray.origin, Point3::origin());
            assert_relative_eq!(
                ray.direction.into_inner(),
                expected.normalize(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_4x4_grid_corners() {
        let cam = camera();
        let view = ViewPlane::new(4, 4, 1.0, 4.0, 4.0).unwrap();
        let ray = cam.ray_through_pixel(&view, 0, 0);
        assert_relative_eq!(
            ray.direction.into_inner(),
            Vec3::new(-1.5, -1.5, 1.0).normalize(),
            epsilon = 1e-12
        );
        let ray = cam.ray_through_pixel(&view, 3, 1);
        assert_relative_eq!(
            ray.direction.into_inner(),
            Vec3::new(1.5, -0.5, 1.0).normalize(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rows_grow_downward() {
        let cam = Camera::new(Point3::origin(), -Vec3::z(), Vec3::y()).unwrap();
        let view = ViewPlane::new(3, 3, 1.0, 3.0, 3.0).unwrap();
        let top = cam.ray_through_pixel(&view, 1, 0);
        let bottom = cam.ray_through_pixel(&view, 1, 2);
        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);
    }

    #[test]
    fn test_camera_offset_position() {
        let position = Point3::new(0.0, 0.0, 10.0);
        let cam = Camera::new(position, -Vec3::z(), Vec3::y()).unwrap();
        let view = ViewPlane::new(3, 3, 10.0, 3.0, 3.0).unwrap();
        let ray = cam.ray_through_pixel(&view, 1, 1);
        assert_eq!(ray.origin, position);
        assert_relative_eq!(ray.direction.into_inner(), -Vec3::z(), epsilon = 1e-12);
    }
}
