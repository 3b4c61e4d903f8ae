use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

/// An axis-aligned rectangle rotated about its own center.
///
/// This is the shape a panel occupies on the canvas. `width` and `height`
/// are the unrotated extents and must be non-negative; `rotation` is in
/// radians, counterclockwise-positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedRect {
    pub center: Vec2,
    pub width: f64,
    pub height: f64,
    /// Rotation angle in radians, counterclockwise-positive.
    pub rotation: f64,
}

impl OrientedRect {
    /// Creates a new oriented rectangle.
    pub fn new(center: Vec2, width: f64, height: f64, rotation: f64) -> Self {
        debug_assert!(width >= 0.0, "width must be non-negative, got {width}");
        debug_assert!(height >= 0.0, "height must be non-negative, got {height}");
        Self {
            center,
            width,
            height,
            rotation,
        }
    }

    /// Creates an oriented rectangle from a rotation given in degrees, the
    /// unit canvas callers deliver.
    pub fn from_degrees(center: Vec2, width: f64, height: f64, rotation_deg: f64) -> Self {
        Self::new(center, width, height, rotation_deg.to_radians())
    }

    /// The rotation angle in degrees.
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }

    /// The same rectangle moved to a new center.
    pub fn at(&self, center: Vec2) -> Self {
        Self { center, ..*self }
    }

    /// True when the rectangle encloses no area and cannot contribute to
    /// collision or snapping.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// The four corners in a fixed winding: the `(-w/2, -h/2)`, `(w/2, -h/2)`,
    /// `(w/2, h/2)`, `(-w/2, h/2)` offsets rotated about the center. The
    /// order is preserved under rotation.
    pub fn corners(&self) -> [Vec2; 4] {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let local = [
            Vec2::new(-half_w, -half_h),
            Vec2::new(half_w, -half_h),
            Vec2::new(half_w, half_h),
            Vec2::new(-half_w, half_h),
        ];
        local.map(|offset| self.center + offset.rotated(self.rotation))
    }
}
