use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::Vec2;

use super::OrientedRect;

/// Distance at which a point counts as lying on a polygon edge.
const EDGE_EPS: f64 = 1e-9;

/// Axis-aligned bounds of a polygon. Used for coarse culling only, never
/// for exact containment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when the boxes share any point, edges included.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }
}

/// A closed polygon given as an ordered vertex list. The edge from the last
/// vertex back to the first is implicit.
///
/// The collision and containment queries assume a convex, non-self-
/// intersecting outline; that precondition is not checked at runtime (see
/// [`Polygon::validate_convex`] for the optional check).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a polygon from a vertex list.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Creates a polygon from a flat coordinate list `[x0, y0, x1, y1, ...]`,
    /// the form canvas callers deliver boundary outlines in. A trailing
    /// repeat of the first vertex (closed outlines) is dropped.
    pub fn from_flat(points: &[f64]) -> Result<Self, GeometryError> {
        if points.len() % 2 != 0 {
            return Err(GeometryError::OddCoordinateList { len: points.len() });
        }
        let mut vertices: Vec<Vec2> = points
            .chunks_exact(2)
            .map(|pair| Vec2::new(pair[0], pair[1]))
            .collect();
        if vertices.len() > 3 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self::new(vertices)
    }

    /// The polygon over an oriented rectangle's four corners.
    pub fn from_rect(rect: &OrientedRect) -> Self {
        Self {
            vertices: rect.corners().to_vec(),
        }
    }

    /// Iterates the edges, including the closing edge back to the first
    /// vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Min/max over the vertex coordinates.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bounds = BoundingBox {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for v in &self.vertices {
            bounds.min_x = bounds.min_x.min(v.x);
            bounds.min_y = bounds.min_y.min(v.y);
            bounds.max_x = bounds.max_x.max(v.x);
            bounds.max_y = bounds.max_y.max(v.y);
        }
        bounds
    }

    /// Arithmetic mean of the vertices. Exact for rectangles and other
    /// point-symmetric outlines; callers needing an area-weighted centroid
    /// must compute their own.
    pub fn centroid(&self) -> Vec2 {
        if self.vertices.is_empty() {
            return Vec2::ZERO;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vec2::ZERO, |acc, v| acc + *v);
        sum * (1.0 / self.vertices.len() as f64)
    }

    /// The polygon translated by `offset`.
    pub fn translated(&self, offset: Vec2) -> Polygon {
        Polygon {
            vertices: self.vertices.iter().map(|v| *v + offset).collect(),
        }
    }

    /// Twice the signed area is accumulated by the shoelace formula;
    /// positive for counterclockwise winding.
    pub fn signed_area(&self) -> f64 {
        self.edges().map(|(a, b)| a.cross(b)).sum::<f64>() / 2.0
    }

    /// Even-odd point containment. Points on an edge count as inside so
    /// that a cell flush against a boundary still passes containment.
    pub fn contains_point(&self, p: Vec2) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        for (a, b) in self.edges() {
            if point_segment_distance(p, a, b) <= EDGE_EPS {
                return true;
            }
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > p.y) != (vj.y > p.y) {
                let t = (p.y - vi.y) / (vj.y - vi.y);
                if p.x < vi.x + t * (vj.x - vi.x) {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Pushes every vertex outward by `amount` along the unit normal of its
    /// leading edge, growing the outline for within-margin proximity tests.
    /// Winding is detected from the signed area so the offset is outward for
    /// both orientations; vertices on zero-length edges stay in place.
    pub fn inflate(&self, amount: f64) -> Polygon {
        let orientation = if self.signed_area() >= 0.0 { 1.0 } else { -1.0 };
        let vertices = self
            .edges()
            .map(|(a, b)| {
                let normal = (b - a).perpendicular().normalize();
                a + normal * (amount * orientation)
            })
            .collect();
        Polygon { vertices }
    }

    /// Optional validation pass: checks that consecutive edge cross products
    /// share a sign. Zero-length edges and collinear runs are tolerated.
    pub fn validate_convex(&self) -> Result<(), GeometryError> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(GeometryError::TooFewVertices { count: n });
        }
        let mut orientation = 0.0f64;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let cross = (b - a).cross(c - b);
            if cross == 0.0 {
                continue;
            }
            if orientation == 0.0 {
                orientation = cross;
            } else if orientation.signum() != cross.signum() {
                return Err(GeometryError::NotConvex { index: (i + 1) % n });
            }
        }
        Ok(())
    }
}

fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.dot(ab);
    if len_sq == 0.0 {
        return p.distance_to(&a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&(a + ab * t))
}
