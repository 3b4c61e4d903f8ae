//! Error types for the geometry core.
//!
//! Only malformed caller data and the optional convexity validation report
//! errors. Degenerate-but-representable geometry (zero-size rectangles,
//! repeated vertices) is handled by the algorithms themselves, which treat
//! the offending shape as non-contributing.

use thiserror::Error;

/// Geometry error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A polygon was built from fewer than three vertices
    #[error("Polygon requires at least 3 vertices, got {count}")]
    TooFewVertices {
        /// The number of vertices supplied.
        count: usize,
    },

    /// A flat coordinate list had an odd number of entries
    #[error("Flat coordinate list has odd length {len}")]
    OddCoordinateList {
        /// The length of the supplied list.
        len: usize,
    },

    /// Convexity validation found a reflex vertex
    #[error("Polygon is not convex at vertex {index}")]
    NotConvex {
        /// The index of the first reflex vertex.
        index: usize,
    },
}
