#![warn(missing_docs)]

//! Ray generation and exact ray-surface intersection for the lumen core.
//!
//! Every operation is a closed-form computation over immutable values, so
//! cameras and shapes can be shared freely across rendering threads.
//!
//! # Architecture
//!
//! - [`Camera`] / [`ViewPlane`] - primary ray generation per pixel
//! - [`intersect`] - ray-surface intersection algorithms for each surface type
//! - [`Geometry`] - the `normal_at` / `intersect` capability
//! - [`Shape`] - closed set of supported primitives behind [`Geometry`]
//!
//! # Example
//!
//! ```
//! use lumen_geom::Triangle;
//! use lumen_math::{Point3, Vec3};
//! use lumen_raytrace::{Camera, Geometry, Shape, ViewPlane};
//!
//! let camera = Camera::new(Point3::new(0.25, 0.25, 5.0), -Vec3::z(), Vec3::y()).unwrap();
//! let view = ViewPlane::new(3, 3, 1.0, 0.3, 0.3).unwrap();
//!
//! let shape = Shape::from(
//!     Triangle::new(
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     )
//!     .unwrap(),
//! );
//!
//! let ray = camera.ray_through_pixel(&view, 1, 1);
//! let hits = shape.intersect(&ray);
//! assert_eq!(hits.len(), 1);
//! ```

mod camera;
mod error;
mod geometry;
pub mod intersect;

pub use camera::{Camera, ViewPlane};
pub use error::{CameraError, Result};
pub use geometry::{Geometry, Shape, ShapeKind};
