//! Ray-surface intersection algorithms.
//!
//! Each surface type has a dedicated closed-form intersector. A miss is an
//! empty result, never an error. Intersections at or behind the ray origin
//! are excluded.

mod cylinder;
mod plane;
mod polygon;
mod tube;

pub use cylinder::intersect_cylinder;
pub use plane::intersect_plane;
pub use polygon::{intersect_polygon, intersect_triangle};
pub use tube::intersect_tube;
