//! Convex polygon collision testing via the separating axis theorem.
//!
//! Every edge normal of both polygons is a candidate separating axis. If the
//! vertex projections onto any axis form disjoint intervals the polygons do
//! not overlap; otherwise the axis with the smallest interval overlap gives
//! the minimum translation vector. Inputs are assumed convex; concave
//! outlines yield undefined results (see `Polygon::validate_convex` for the
//! optional precondition check).

use panelkit_core::{Polygon, Vec2};
use smallvec::SmallVec;

/// Interval overlap at or below this counts as touching, not colliding, so
/// flush-adjacent panels coexist without fighting each other.
const CONTACT_EPS: f64 = 1e-9;

/// Result of a collision test between two convex polygons.
///
/// When `collided` is true, `overlap` is the minimum translation vector,
/// pointing from the first polygon toward the second: translating the first
/// polygon by `-overlap` separates the pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    pub collided: bool,
    pub overlap: Vec2,
}

impl CollisionResult {
    /// The non-colliding result.
    pub fn separated() -> Self {
        Self {
            collided: false,
            overlap: Vec2::ZERO,
        }
    }
}

/// Tests two convex polygons for overlap.
///
/// Degenerate input (fewer than three vertices, or no valid edge normal at
/// all) reports no collision. Shapes that merely touch along an edge or at
/// a corner report no collision either.
pub fn test_collision(a: &Polygon, b: &Polygon) -> CollisionResult {
    if a.vertices.len() < 3 || b.vertices.len() < 3 {
        return CollisionResult::separated();
    }
    if !a.bounding_box().intersects(&b.bounding_box()) {
        return CollisionResult::separated();
    }

    let mut axes: SmallVec<[Vec2; 8]> = SmallVec::new();
    push_axes(a, &mut axes);
    push_axes(b, &mut axes);
    if axes.is_empty() {
        return CollisionResult::separated();
    }

    let mut min_separation = f64::INFINITY;
    let mut mtv_axis = Vec2::ZERO;
    for axis in axes {
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        // For partially overlapping intervals this is the overlap length;
        // when one interval contains the other it is the nearer exit
        // distance, so the MTV still separates contained shapes.
        let separation = (max_a - min_b).min(max_b - min_a);
        if separation <= CONTACT_EPS {
            return CollisionResult::separated();
        }
        if separation < min_separation {
            min_separation = separation;
            mtv_axis = axis;
        }
    }

    // Orient the MTV from `a` toward `b`.
    let toward_b = b.centroid() - a.centroid();
    let direction = if toward_b.dot(mtv_axis) < 0.0 {
        -mtv_axis
    } else {
        mtv_axis
    };
    CollisionResult {
        collided: true,
        overlap: direction * min_separation,
    }
}

/// Tests whether two convex polygons come within `margin` of each other:
/// both outlines are inflated by `margin` and the inflated pair is SAT
/// tested. With a zero margin this degenerates to plain overlap detection.
pub fn test_collision_within(a: &Polygon, b: &Polygon, margin: f64) -> bool {
    if margin <= 0.0 {
        return test_collision(a, b).collided;
    }
    test_collision(&a.inflate(margin), &b.inflate(margin)).collided
}

/// Collects the unit edge normals of `polygon`, skipping zero-length edges.
fn push_axes(polygon: &Polygon, axes: &mut SmallVec<[Vec2; 8]>) {
    for (a, b) in polygon.edges() {
        let normal = (b - a).perpendicular().normalize();
        if normal == Vec2::ZERO {
            continue;
        }
        axes.push(normal);
    }
}

/// Projects every vertex onto `axis`, returning the scalar interval.
fn project(polygon: &Polygon, axis: Vec2) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in &polygon.vertices {
        let d = v.dot(axis);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelkit_core::OrientedRect;

    fn rect_poly(cx: f64, cy: f64, w: f64, h: f64, rotation: f64) -> Polygon {
        Polygon::from_rect(&OrientedRect::new(Vec2::new(cx, cy), w, h, rotation))
    }

    #[test]
    fn test_separated_squares() {
        let a = rect_poly(50.0, 50.0, 100.0, 100.0, 0.0);
        let b = rect_poly(250.0, 50.0, 100.0, 100.0, 0.0);
        let result = test_collision(&a, &b);
        assert!(!result.collided);
        assert_eq!(result.overlap, Vec2::ZERO);
    }

    #[test]
    fn test_overlapping_squares_mtv() {
        let a = rect_poly(50.0, 50.0, 100.0, 100.0, 0.0);
        let b = rect_poly(140.0, 50.0, 100.0, 100.0, 0.0);
        let result = test_collision(&a, &b);
        assert!(result.collided);
        assert!((result.overlap.x - 10.0).abs() < 1e-9);
        assert!(result.overlap.y.abs() < 1e-9);
    }

    #[test]
    fn test_mtv_separates_the_pair() {
        let a = rect_poly(50.0, 50.0, 100.0, 100.0, 0.0);
        let b = rect_poly(140.0, 50.0, 100.0, 100.0, 0.0);
        let result = test_collision(&a, &b);
        let moved = a.translated(-result.overlap);
        assert!(!test_collision(&moved, &b).collided);
    }

    #[test]
    fn test_detection_is_symmetric() {
        let a = rect_poly(0.0, 0.0, 40.0, 20.0, 0.4);
        let b = rect_poly(25.0, 5.0, 30.0, 30.0, -0.9);
        let ab = test_collision(&a, &b);
        let ba = test_collision(&b, &a);
        assert_eq!(ab.collided, ba.collided);
        // The MTV flips direction with the argument order.
        assert!((ab.overlap.x + ba.overlap.x).abs() < 1e-9);
        assert!((ab.overlap.y + ba.overlap.y).abs() < 1e-9);
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = rect_poly(10.0, 10.0, 20.0, 20.0, 0.0);
        let b = rect_poly(30.0, 10.0, 20.0, 20.0, 0.0);
        assert!(!test_collision(&a, &b).collided);
    }

    #[test]
    fn test_rotated_diamond_gap() {
        // A diamond whose tip slots into the gap next to a square: the
        // bounding boxes overlap, only the diagonal axes separate them.
        let square = rect_poly(0.0, 0.0, 10.0, 10.0, 0.0);
        let diamond = rect_poly(12.0, 12.0, 10.0, 10.0, std::f64::consts::FRAC_PI_4);
        assert!(!test_collision(&square, &diamond).collided);
    }

    #[test]
    fn test_containment_counts_as_collision() {
        let outer = rect_poly(0.0, 0.0, 100.0, 100.0, 0.0);
        let inner = rect_poly(5.0, 0.0, 10.0, 10.0, 0.0);
        let result = test_collision(&inner, &outer);
        assert!(result.collided);
        // The nearest exit is through the right edge of the outer square.
        assert!((result.overlap.x + 50.0).abs() < 1e-9);
        assert!(!test_collision(&inner.translated(-result.overlap), &outer).collided);
    }

    #[test]
    fn test_degenerate_polygon_never_collides() {
        let line = Polygon {
            vertices: vec![Vec2::ZERO, Vec2::new(10.0, 0.0)],
        };
        let square = rect_poly(5.0, 0.0, 10.0, 10.0, 0.0);
        assert!(!test_collision(&line, &square).collided);
        assert!(!test_collision(&square, &line).collided);
    }

    #[test]
    fn test_collision_within_margin() {
        // Two 10x10 squares with a 10 unit gap between facing edges.
        let a = rect_poly(0.0, 0.0, 10.0, 10.0, 0.0);
        let b = rect_poly(20.0, 0.0, 10.0, 10.0, 0.0);
        assert!(!test_collision_within(&a, &b, 3.0));
        assert!(test_collision_within(&a, &b, 12.0));
        assert!(!test_collision_within(&a, &b, 0.0));
    }
}
