//! # Panelkit Layout
//!
//! Interactive layout algorithms for the Panelkit design tool: placing
//! rectangular panels against an irregular boundary polygon with automatic
//! collision avoidance, edge/corner snapping, and bulk lattice generation.
//!
//! ## Core Components
//!
//! - **Collision**: separating-axis overlap testing between convex
//!   polygons, with minimum translation vectors for push-out
//! - **Snapping**: per-frame drag resolution combining collision avoidance
//!   with proximity snapping toward nearby panels
//! - **Lattice**: sweeping an oriented grid of panel cells across a
//!   boundary, keeping the cells that fit
//! - **Scene**: explicit immutable snapshots of the shapes a frame
//!   computation may see
//!
//! ## Architecture
//!
//! Every operation is a pure, synchronous function of an explicit snapshot:
//! the caller (canvas layer, input widgets, state store) captures its state,
//! calls in, renders the result, and owns all mutation. The crate keeps no
//! state between calls, so identical inputs always produce identical
//! results and independent interaction sessions cannot interfere.
//!
//! ```text
//! pointer event ──> SceneSnapshot ──> resolve_move ──> new transform
//! drag sweep    ──> SceneSnapshot ──> generate_lattice ──> accepted cells
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use panelkit_core::Vec2;
//! use panelkit_layout::{resolve_move, SnapConfig};
//!
//! let resolved = resolve_move(&moving, &statics, pointer, &SnapConfig::default());
//! canvas.set_position(resolved.center);
//! ```

pub mod collision;
pub mod lattice;
pub mod scene;
pub mod snapping;

pub use collision::{test_collision, test_collision_within, CollisionResult};
pub use lattice::{generate_lattice, ContainmentPolicy, DragExtent, LatticeConfig};
pub use scene::{Panel, SceneSnapshot};
pub use snapping::{resolve_move, Axis, SnapCandidate, SnapConfig, SnapStrategy, TieBreak};

// Re-export the core geometry types for convenience.
pub use panelkit_core::{BoundingBox, GeometryError, OrientedRect, Polygon, Vec2};
