use super::*;
use crate::consts::{GRID_COLUMNS, GRID_ROWS};

// =============================================================
// SurfaceCore construction
// =============================================================

#[test]
fn light_theme_uses_the_light_brightness() {
    let core = SurfaceCore::new(GridConfig::default(), false);
    assert!(core.grid.points().iter().all(|p| p.brightness == LIGHT_BRIGHTNESS));
}

#[test]
fn dark_theme_uses_the_dark_brightness() {
    let core = SurfaceCore::new(GridConfig::default(), true);
    assert!(core.grid.points().iter().all(|p| p.brightness == DARK_BRIGHTNESS));
}

#[test]
fn core_starts_with_the_full_grid_and_an_empty_viewport() {
    let core = SurfaceCore::new(GridConfig::default(), false);
    assert_eq!(core.grid.points().len(), GRID_COLUMNS * GRID_ROWS);
    assert_eq!(core.viewport_width, 0.0);
    assert_eq!(core.viewport_height, 0.0);
    assert_eq!(core.dpr, 1.0);
}

// =============================================================
// Viewport updates
// =============================================================

#[test]
fn set_viewport_updates_projection_inputs_only() {
    let mut core = SurfaceCore::new(GridConfig::default(), false);
    core.step();
    let phase = core.grid.phase();
    let first_point = core.grid.points()[0];

    core.set_viewport(1440.0, 900.0, 2.0);

    assert_eq!(core.viewport_width, 1440.0);
    assert_eq!(core.viewport_height, 900.0);
    assert_eq!(core.dpr, 2.0);
    // The grid is untouched by a resize.
    assert_eq!(core.grid.phase(), phase);
    assert_eq!(core.grid.points()[0], first_point);
}

// =============================================================
// Stepping
// =============================================================

#[test]
fn step_delegates_to_the_grid() {
    let mut core = SurfaceCore::new(GridConfig::default(), true);
    let before = core.grid.phase();
    core.step();
    assert!(core.grid.phase() > before);
}
