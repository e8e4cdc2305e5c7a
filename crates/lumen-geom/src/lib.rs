#![warn(missing_docs)]

//! Analytic surface types for the lumen ray tracing core.
//!
//! Every surface is an immutable value validated once at construction
//! time. Each type knows its own outward normal; ray intersection lives
//! in `lumen-raytrace`.
//!
//! - [`RadialGeometry`] - a strictly positive radius
//! - [`Tube`] - infinite cylindrical surface around an axis ray
//! - [`Cylinder`] - a [`Tube`] bounded by two flat caps
//! - [`Plane`] - infinite flat surface
//! - [`Polygon`] - convex planar vertex loop
//! - [`Triangle`] - a three vertex [`Polygon`]

mod cylinder;
mod error;
mod plane;
mod polygon;
mod radial;
mod triangle;
mod tube;

pub use cylinder::Cylinder;
pub use error::{GeometryError, Result};
pub use plane::Plane;
pub use polygon::Polygon;
pub use radial::RadialGeometry;
pub use triangle::Triangle;
pub use tube::Tube;
