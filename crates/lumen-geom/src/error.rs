//! Error types for surface construction.

use thiserror::Error;

/// Errors that can occur while building a surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Radius is zero or negative.
    #[error("radius {0} is not valid")]
    InvalidRadius(f64),

    /// Cylinder height is zero or negative.
    #[error("height {0} is not valid")]
    InvalidHeight(f64),

    /// Plane normal has zero length.
    #[error("plane normal must not be the zero vector")]
    ZeroNormal,

    /// Points defining a plane are coincident or collinear.
    #[error("points are collinear and do not define a plane")]
    Collinear,

    /// Polygon has fewer than three vertices.
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// Polygon vertex lies off the plane of the first three.
    #[error("vertex {index} does not lie in the polygon plane")]
    NotCoplanar {
        /// Offending vertex index.
        index: usize,
    },

    /// Polygon is concave or its vertices are out of order.
    #[error("vertex {index} breaks convexity or winding order")]
    NotConvex {
        /// Offending vertex index.
        index: usize,
    },

    /// Two consecutive polygon vertices coincide.
    #[error("edge ending at vertex {index} has zero length")]
    DegenerateEdge {
        /// Index of the vertex that repeats its predecessor.
        index: usize,
    },
}

/// Result type for surface construction.
pub type Result<T> = std::result::Result<T, GeometryError>;
