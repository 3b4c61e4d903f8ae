//! Explicit per-frame scene snapshots.
//!
//! The layout algorithms never reach into live application state. Instead
//! the caller assembles an immutable [`SceneSnapshot`] before each frame:
//! the placed panels, each with a stable id, and the boundary polygon the
//! panels live in. The snapshot is what lets the resolver exclude the panel
//! being dragged from its own static set.

use anyhow::{Context, Result};
use panelkit_core::{OrientedRect, Polygon, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::snapping::{resolve_move, SnapConfig};

/// A placed panel: a stable identity plus its transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub id: Uuid,
    pub rect: OrientedRect,
}

impl Panel {
    /// Creates a panel with a fresh id.
    pub fn new(rect: OrientedRect) -> Self {
        Self {
            id: Uuid::new_v4(),
            rect,
        }
    }

    /// Creates a panel with a caller-supplied id.
    pub fn with_id(id: Uuid, rect: OrientedRect) -> Self {
        Self { id, rect }
    }

    /// The panel outline as a polygon.
    pub fn outline(&self) -> Polygon {
        Polygon::from_rect(&self.rect)
    }
}

/// The shapes visible to the layout algorithms at one instant. Owned by the
/// caller and rebuilt per frame; nothing in here survives a call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub panels: Vec<Panel>,
    pub boundary: Option<Polygon>,
}

impl SceneSnapshot {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a snapshot from raw caller data: panel tuples of
    /// `(center_x, center_y, width, height, rotation_degrees)` and an
    /// optional flat boundary coordinate list.
    pub fn from_parts(
        panels: &[(f64, f64, f64, f64, f64)],
        boundary: Option<&[f64]>,
    ) -> Result<Self> {
        let boundary = boundary
            .map(|points| Polygon::from_flat(points).context("Invalid boundary outline"))
            .transpose()?;
        let panels = panels
            .iter()
            .map(|&(cx, cy, w, h, deg)| {
                Panel::new(OrientedRect::from_degrees(Vec2::new(cx, cy), w, h, deg))
            })
            .collect();
        Ok(Self { panels, boundary })
    }

    /// Looks up a panel by id.
    pub fn panel(&self, id: Uuid) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Every panel transform except the one with the given id - the static
    /// set the dragged panel resolves against.
    pub fn statics_excluding(&self, id: Uuid) -> Vec<OrientedRect> {
        self.panels
            .iter()
            .filter(|p| p.id != id)
            .map(|p| p.rect)
            .collect()
    }

    /// The outlines of every panel, for feeding a lattice sweep's
    /// `existing` list.
    pub fn outlines(&self) -> Vec<Polygon> {
        self.panels.iter().map(Panel::outline).collect()
    }

    /// Resolves a drag of the identified panel to `pointer` against the
    /// rest of the scene. Returns `None` when the id is not in the
    /// snapshot.
    pub fn resolve_drag(
        &self,
        moving_id: Uuid,
        pointer: Vec2,
        config: &SnapConfig,
    ) -> Option<OrientedRect> {
        let moving = self.panel(moving_id)?;
        let statics = self.statics_excluding(moving_id);
        Some(resolve_move(&moving.rect, &statics, pointer, config))
    }
}

/// Serializes a snapshot for interchange with the application shell.
pub fn to_json(snapshot: &SceneSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("Failed to serialize scene snapshot")
}

/// Restores a snapshot serialized with [`to_json`].
pub fn from_json(json: &str) -> Result<SceneSnapshot> {
    serde_json::from_str(json).context("Failed to parse scene snapshot")
}
