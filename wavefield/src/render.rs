//! Frame drawing: projects the wave grid and draws it to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of
//! the surface core and produces pixels — it does not mutate any
//! simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::surface::Surface::render`]) handles the
//! result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::WorldPoint;
use crate::consts::{POINT_ALPHA, POINT_SIZE};
use crate::surface::SurfaceCore;

/// Smallest projected radius worth a draw call, in screen pixels.
const MIN_RADIUS_PX: f64 = 0.2;

/// Draw the full wave surface for the current frame.
///
/// `core.viewport_width` / `core.viewport_height` are in CSS pixels; the
/// device pixel ratio is applied as a transform so all drawing happens in
/// CSS coordinates.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &SurfaceCore) -> Result<(), JsValue> {
    let width = core.viewport_width;
    let height = core.viewport_height;

    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_global_alpha(POINT_ALPHA);

    for point in core.grid.points() {
        let world = WorldPoint { x: point.base_x, y: point.y, z: point.base_z };
        let Some(screen) = core.camera.project(world, width, height) else {
            continue;
        };
        let radius = POINT_SIZE * screen.scale;
        if radius < MIN_RADIUS_PX || !on_screen(screen.x, screen.y, radius, width, height) {
            continue;
        }
        let channel = (point.brightness.clamp(0.0, 1.0) * 255.0).round() as u8;
        ctx.set_fill_style_str(&format!("rgb({channel},{channel},{channel})"));
        ctx.begin_path();
        ctx.arc(screen.x, screen.y, radius, 0.0, TAU)?;
        ctx.fill();
    }

    ctx.set_global_alpha(1.0);
    Ok(())
}

fn on_screen(x: f64, y: f64, radius: f64, width: f64, height: f64) -> bool {
    x + radius >= 0.0 && x - radius <= width && y + radius >= 0.0 && y - radius <= height
}
