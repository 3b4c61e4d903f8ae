//! # Panelkit Core
//!
//! Core geometry types for the Panelkit layout tool: 2D vectors, oriented
//! rectangles, and convex polygons, together with the queries the layout
//! algorithms are built on (corners, bounding boxes, centroids, point
//! containment, outline inflation).
//!
//! Everything in this crate is a plain value type: construction is cheap,
//! nothing is cached, and every operation is a pure function of its inputs.
//! Degenerate geometry (empty rectangles, zero-length edges) is tolerated
//! and answered with neutral results rather than errors; the only fallible
//! paths are the constructors that accept raw caller data.

pub mod error;
pub mod geometry;
pub mod model;

pub use error::GeometryError;
pub use geometry::Vec2;
pub use model::{BoundingBox, OrientedRect, Polygon};
