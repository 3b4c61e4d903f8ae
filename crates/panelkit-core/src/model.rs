//! Shape model for panel layout: oriented rectangles and boundary polygons.

mod polygon;
mod rect;

pub use polygon::{BoundingBox, Polygon};
pub use rect::OrientedRect;
