//! Surface lifecycle: the testable simulation core plus the canvas-bound
//! wrapper used by the browser host.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::Camera;
use crate::consts::{DARK_BRIGHTNESS, LIGHT_BRIGHTNESS};
use crate::grid::{GridConfig, WaveGrid};
use crate::render;

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// Failure to bind the rendering backend.
///
/// The background is purely decorative: callers drop the surface and carry
/// on without it rather than surfacing an error to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("2d canvas context unavailable")]
    ContextUnavailable,
}

/// Core animator state — everything that doesn't depend on the canvas
/// element.
///
/// Separated from [`Surface`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Clone)]
pub struct SurfaceCore {
    pub grid: WaveGrid,
    pub camera: Camera,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl SurfaceCore {
    /// Build the grid with the point brightness for the given theme.
    ///
    /// Brightness is fixed for the lifetime of the core; a theme change
    /// means constructing a new one.
    #[must_use]
    pub fn new(config: GridConfig, is_dark: bool) -> Self {
        let brightness = if is_dark { DARK_BRIGHTNESS } else { LIGHT_BRIGHTNESS };
        Self {
            grid: WaveGrid::new(config, brightness),
            camera: Camera::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    /// Advance the simulation one frame.
    pub fn step(&mut self) {
        self.grid.step();
    }

    /// Update viewport dimensions and device pixel ratio.
    ///
    /// A resize re-projects the existing grid; it never rebuilds it.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }
}

/// The full background surface. Wraps [`SurfaceCore`] and owns the browser
/// canvas element and its 2D context.
pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: SurfaceCore,
}

impl Surface {
    /// Bind to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::ContextUnavailable`] when a 2D context
    /// cannot be created.
    pub fn new(canvas: HtmlCanvasElement, is_dark: bool) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| SurfaceError::ContextUnavailable)?
            .ok_or(SurfaceError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable)?;
        Ok(Self {
            canvas,
            ctx,
            core: SurfaceCore::new(GridConfig::default(), is_dark),
        })
    }

    /// Advance the simulation one frame.
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Resize the backing store and the projection viewport.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr).max(0.0) as u32);
        self.canvas.set_height((height_css * dpr).max(0.0) as u32);
    }

    /// Draw the current frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails; the caller drops the
    /// frame and tries again on the next one.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core)
    }
}
