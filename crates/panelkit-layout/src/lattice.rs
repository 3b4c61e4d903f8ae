//! Bulk panel placement: tiling an oriented lattice of cells against a
//! boundary polygon.
//!
//! A seed cell defines the lattice basis: its rotated width and height
//! vectors. A drag gesture spans some number of steps along each basis
//! vector; every cell in the spanned index rectangle is generated and kept
//! if it fits the boundary and does not overlap an already placed panel or
//! an earlier cell of the same sweep. Acceptance is sequential in
//! enumeration order, which keeps the result deterministic.

use panelkit_core::{OrientedRect, Polygon, Vec2};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::collision::test_collision;

/// Displacement covered by a tiling drag, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragExtent {
    pub dx: f64,
    pub dy: f64,
}

impl DragExtent {
    /// Creates a drag extent from its components.
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// The extent between a drag's start and current pointer positions.
    pub fn from_points(start: Vec2, current: Vec2) -> Self {
        Self::new(current.x - start.x, current.y - start.y)
    }

    /// Projects a raw drag into a frame rotated by `rotation`: the result
    /// is the drag expressed along the rotated X/Y axes. This is the extent
    /// of the oriented rubber-band rectangle a caller draws while the user
    /// sweeps out an area.
    pub fn project_onto(start: Vec2, current: Vec2, rotation: f64) -> Self {
        let local = (current - start).rotated(-rotation);
        Self::new(local.x, local.y)
    }
}

/// Whether a cell must sit fully inside the boundary or merely overlap it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContainmentPolicy {
    /// Every cell vertex inside the boundary, edges inclusive. The default:
    /// with a convex boundary this is exact containment, and a sweep across
    /// a rectangular boundary yields exactly the cells that fit.
    #[default]
    FullyInside,
    /// Any overlap with the boundary keeps the cell.
    AnyOverlap,
}

/// Configuration for [`generate_lattice`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatticeConfig {
    pub containment: ContainmentPolicy,
}

/// Tiles cells shaped like `seed` across the lattice spanned by `drag`,
/// keeping those that fit `boundary` and overlap neither `existing` panels
/// nor earlier cells. Cells come back in enumeration order (row-major over
/// the index rectangle, the seed cell first when the drag is positive).
///
/// A degenerate seed or a drag with a zero component yields an empty
/// result; the step-count projection would otherwise divide by zero.
pub fn generate_lattice(
    seed: &OrientedRect,
    boundary: &Polygon,
    drag: DragExtent,
    existing: &[Polygon],
    config: &LatticeConfig,
) -> Vec<Polygon> {
    if seed.is_degenerate() || drag.dx == 0.0 || drag.dy == 0.0 {
        return Vec::new();
    }

    let step_x = Vec2::new(seed.width, 0.0).rotated(seed.rotation);
    let step_y = Vec2::new(0.0, seed.height).rotated(seed.rotation);
    let drag_vec = Vec2::new(drag.dx, drag.dy);
    let count_x = (drag_vec.dot(step_x) / step_x.dot(step_x)).round() as i64;
    let count_y = (drag_vec.dot(step_y) / step_y.dot(step_y)).round() as i64;
    trace!(
        "Lattice sweep spans {}..={} x {}..={} steps",
        count_x.min(0),
        count_x.max(0),
        count_y.min(0),
        count_y.max(0)
    );

    let mut accepted: Vec<Polygon> = Vec::new();
    for j in count_y.min(0)..=count_y.max(0) {
        for i in count_x.min(0)..=count_x.max(0) {
            let center = seed.center + step_x * (i as f64) + step_y * (j as f64);
            let cell = Polygon::from_rect(&seed.at(center));
            if !fits_boundary(&cell, boundary, config.containment) {
                continue;
            }
            let overlaps = existing
                .iter()
                .chain(accepted.iter())
                .any(|placed| test_collision(&cell, placed).collided);
            if overlaps {
                continue;
            }
            accepted.push(cell);
        }
    }
    debug!("Lattice sweep accepted {} cells", accepted.len());
    accepted
}

fn fits_boundary(cell: &Polygon, boundary: &Polygon, policy: ContainmentPolicy) -> bool {
    match policy {
        ContainmentPolicy::FullyInside => cell
            .vertices
            .iter()
            .all(|v| boundary.contains_point(*v)),
        ContainmentPolicy::AnyOverlap => test_collision(cell, boundary).collided,
    }
}
