//! Drag-time move resolution: collision push-out and proximity snapping.
//!
//! Each pointer-move event resolves one frame: the moving panel is placed at
//! the raw drag position, pushed out of any static panel it overlaps, and
//! then snapped toward the nearest static panel within the configured
//! threshold. The resolver is a pure function of its inputs; the caller owns
//! the scene and applies the returned transform itself.

use panelkit_core::{OrientedRect, Polygon, Vec2};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::collision::test_collision;

/// The axis a single-axis snap correction moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// How a proximity snap picks its correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapStrategy {
    /// Align centers along the axis with the smaller nonzero delta.
    AxisCenter,
    /// Pull the closest corner pair together.
    CornerMagnet,
}

/// Tie-break rule between the two axes of a center snap. Only the
/// smaller-delta rule survived the consolidation of the historical
/// variants, but the knob stays explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    SmallerDelta,
}

/// Configuration for [`resolve_move`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Maximum distance at which proximity triggers a snap.
    pub threshold: f64,
    /// When true (the default), overlap corrections run before any snap and
    /// overlapping statics never contribute snap candidates. When false the
    /// resolver is snap-only.
    pub collision_priority: bool,
    /// The snap strategy, see [`SnapStrategy`].
    pub strategy: SnapStrategy,
    /// Axis tie-break rule, see [`TieBreak`].
    pub tie_break: TieBreak,
    /// Statics whose center is farther than this from the moving center are
    /// skipped entirely. `None` disables the cull.
    pub proximity_cull: Option<f64>,
}

impl SnapConfig {
    /// Creates a config with the given snap threshold and default behavior:
    /// collision priority on, center-axis snapping, no proximity cull.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            collision_priority: true,
            strategy: SnapStrategy::AxisCenter,
            tie_break: TieBreak::SmallerDelta,
            proximity_cull: None,
        }
    }
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self::new(15.0)
    }
}

/// One proposed single-axis correction toward a static shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapCandidate {
    /// The axis the correction moves along.
    pub axis: Axis,
    /// Signed displacement that aligns the moving shape with the source.
    pub delta: f64,
    /// Pointer-to-source-center distance, used to pick between sources.
    pub distance: f64,
    /// Index of the source shape in the static list.
    pub source: usize,
}

impl SnapCandidate {
    fn apply(&self, center: Vec2) -> Vec2 {
        match self.axis {
            Axis::X => Vec2::new(center.x + self.delta, center.y),
            Axis::Y => Vec2::new(center.x, center.y + self.delta),
        }
    }
}

/// Resolves one drag frame.
///
/// The moving rectangle is evaluated at `pointer` (the raw drag position,
/// which is also the fallback result). Statics are visited in input order:
/// overlapping ones contribute sequential push-out corrections, the rest
/// may offer proximity snap candidates. The candidate set of the source
/// closest to the pointer wins, ties going to the earlier static. Rotation
/// passes through unchanged; only the position is corrected.
pub fn resolve_move(
    moving: &OrientedRect,
    statics: &[OrientedRect],
    pointer: Vec2,
    config: &SnapConfig,
) -> OrientedRect {
    let mut resolved = moving.at(pointer);
    if moving.is_degenerate() {
        return resolved;
    }

    let mut collided: SmallVec<[bool; 16]> = SmallVec::new();
    collided.resize(statics.len(), false);

    if config.collision_priority {
        for (index, stat) in statics.iter().enumerate() {
            if stat.is_degenerate() {
                continue;
            }
            let result = test_collision(
                &Polygon::from_rect(&resolved),
                &Polygon::from_rect(stat),
            );
            if result.collided {
                collided[index] = true;
                resolved.center = resolved.center - result.overlap;
                debug!(
                    "Push-out from static {}: ({:.3}, {:.3})",
                    index, -result.overlap.x, -result.overlap.y
                );
            }
        }
    }

    let mut best: SmallVec<[SnapCandidate; 2]> = SmallVec::new();
    for (index, stat) in statics.iter().enumerate() {
        if collided[index] || stat.is_degenerate() {
            continue;
        }
        if let Some(cull) = config.proximity_cull {
            if resolved.center.distance_to(&stat.center) > cull {
                continue;
            }
        }
        let candidates = proximity_candidates(&resolved, stat, index, pointer, config);
        if candidates.is_empty() {
            continue;
        }
        if best.is_empty() || candidates[0].distance < best[0].distance {
            best = candidates;
        }
    }

    if !best.is_empty() {
        trace!(
            "Snapping to static {} ({} axis corrections)",
            best[0].source,
            best.len()
        );
        for candidate in &best {
            resolved.center = candidate.apply(resolved.center);
        }
    }
    resolved
}

/// Snap candidates offered by one non-overlapping static shape: one axis for
/// the center strategy, up to two for the corner magnet. Empty when the
/// shape is out of range or already aligned.
fn proximity_candidates(
    moving: &OrientedRect,
    stat: &OrientedRect,
    source: usize,
    pointer: Vec2,
    config: &SnapConfig,
) -> SmallVec<[SnapCandidate; 2]> {
    let mut candidates: SmallVec<[SnapCandidate; 2]> = SmallVec::new();
    if min_reference_distance(moving, stat) > config.threshold {
        return candidates;
    }
    let distance = pointer.distance_to(&stat.center);

    match config.strategy {
        SnapStrategy::AxisCenter => {
            let dx = stat.center.x - moving.center.x;
            let dy = stat.center.y - moving.center.y;
            // A zero delta means that axis is already aligned; the choice
            // falls to the other axis.
            let x_ok = dx != 0.0 && dx.abs() <= config.threshold;
            let y_ok = dy != 0.0 && dy.abs() <= config.threshold;
            let axis = match (x_ok, y_ok) {
                (true, true) => Some(match config.tie_break {
                    TieBreak::SmallerDelta => {
                        if dx.abs() <= dy.abs() {
                            Axis::X
                        } else {
                            Axis::Y
                        }
                    }
                }),
                (true, false) => Some(Axis::X),
                (false, true) => Some(Axis::Y),
                (false, false) => None,
            };
            if let Some(axis) = axis {
                let delta = match axis {
                    Axis::X => dx,
                    Axis::Y => dy,
                };
                candidates.push(SnapCandidate {
                    axis,
                    delta,
                    distance,
                    source,
                });
            }
        }
        SnapStrategy::CornerMagnet => {
            let mut closest: Option<(f64, Vec2)> = None;
            for mc in moving.corners() {
                for sc in stat.corners() {
                    let d = mc.distance_to(&sc);
                    if closest.is_none_or(|(best, _)| d < best) {
                        closest = Some((d, sc - mc));
                    }
                }
            }
            if let Some((d, correction)) = closest {
                if d <= config.threshold {
                    if correction.x != 0.0 {
                        candidates.push(SnapCandidate {
                            axis: Axis::X,
                            delta: correction.x,
                            distance,
                            source,
                        });
                    }
                    if correction.y != 0.0 {
                        candidates.push(SnapCandidate {
                            axis: Axis::Y,
                            delta: correction.y,
                            distance,
                            source,
                        });
                    }
                }
            }
        }
    }
    candidates
}

/// The gate distance for proximity snapping: the minimum over the
/// corner-to-corner distances and the center-to-center distance.
fn min_reference_distance(a: &OrientedRect, b: &OrientedRect) -> f64 {
    let mut min = a.center.distance_to(&b.center);
    for ca in a.corners() {
        for cb in b.corners() {
            min = min.min(ca.distance_to(&cb));
        }
    }
    min
}
