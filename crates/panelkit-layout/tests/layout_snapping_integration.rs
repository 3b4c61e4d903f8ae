// Integration tests for drag-move resolution against a panel grid.

use panelkit_core::{OrientedRect, Polygon, Vec2};
use panelkit_layout::{resolve_move, test_collision, SceneSnapshot, SnapConfig};

/// A 2x5 grid of flush 100x50 panels, the layout an interactive shell
/// would hand over before a drag.
fn panel_grid() -> SceneSnapshot {
    let mut panels = Vec::new();
    for row in 0..2 {
        for col in 0..5 {
            panels.push((
                150.0 + col as f64 * 100.0,
                125.0 + row as f64 * 50.0,
                100.0,
                50.0,
                0.0,
            ));
        }
    }
    SceneSnapshot::from_parts(&panels, None).unwrap()
}

#[test]
fn test_dragged_panel_is_excluded_from_its_own_statics() {
    let scene = panel_grid();
    let id = scene.panels[0].id;
    let statics = scene.statics_excluding(id);
    assert_eq!(statics.len(), 9);

    // Re-dropping the panel exactly where it sits must be stable: the
    // flush neighbors touch but do not collide, and every center delta is
    // either zero or beyond the threshold.
    let home = scene.panels[0].rect.center;
    let resolved = scene.resolve_drag(id, home, &SnapConfig::default()).unwrap();
    assert_eq!(resolved.center, home);
}

#[test]
fn test_small_overlap_is_pushed_back_into_place() {
    let scene = panel_grid();
    let id = scene.panels[0].id;
    // Nudged 13 units into the right-hand neighbor; the push-out lands the
    // panel back on its grid position.
    let resolved = scene
        .resolve_drag(id, Vec2::new(163.0, 125.0), &SnapConfig::default())
        .unwrap();
    assert!((resolved.center.x - 150.0).abs() < 1e-9);
    assert!((resolved.center.y - 125.0).abs() < 1e-9);

    for stat in scene.statics_excluding(id) {
        assert!(!test_collision(&Polygon::from_rect(&resolved), &Polygon::from_rect(&stat)).collided);
    }
}

#[test]
fn test_snap_only_config_aligns_with_static_center() {
    // The snap-only variant: a panel dropped 13 units off a static's
    // center aligns on X, threshold 15.
    let moving = OrientedRect::new(Vec2::ZERO, 100.0, 50.0, 0.0);
    let statics = [OrientedRect::new(Vec2::new(200.0, 200.0), 100.0, 50.0, 0.0)];
    let config = SnapConfig {
        collision_priority: false,
        ..SnapConfig::new(15.0)
    };
    let resolved = resolve_move(&moving, &statics, Vec2::new(213.0, 200.0), &config);
    assert!((resolved.center.x - 200.0).abs() < 1e-9);
    assert!((resolved.center.y - 200.0).abs() < 1e-9);
}

#[test]
fn test_free_drag_in_open_space_is_untouched() {
    let scene = panel_grid();
    let id = scene.panels[0].id;
    let pointer = Vec2::new(800.0, 600.0);
    let resolved = scene.resolve_drag(id, pointer, &SnapConfig::default()).unwrap();
    assert_eq!(resolved.center, pointer);
}

#[test]
fn test_sequential_push_out_with_two_colliders() {
    // Dragged into the seam between two stacked panels: the corrections
    // apply in input order and the result overlaps neither.
    let moving = OrientedRect::new(Vec2::ZERO, 100.0, 50.0, 0.0);
    let statics = [
        OrientedRect::new(Vec2::new(200.0, 100.0), 100.0, 50.0, 0.0),
        OrientedRect::new(Vec2::new(200.0, 150.0), 100.0, 50.0, 0.0),
    ];
    let resolved = resolve_move(&moving, &statics, Vec2::new(295.0, 125.0), &SnapConfig::default());
    for stat in &statics {
        assert!(!test_collision(&Polygon::from_rect(&resolved), &Polygon::from_rect(stat)).collided);
    }
}
