use crate::consts::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Y, CAMERA_Z};

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A projected point in screen space (CSS pixels).
///
/// `scale` is the depth attenuation factor: multiply a world-space size by
/// it to get the on-screen size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Perspective camera fixed above and behind the surface, looking down −Z.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub fov_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { x: 0.0, y: CAMERA_Y, z: CAMERA_Z, fov_deg: CAMERA_FOV_DEG }
    }
}

impl Camera {
    /// Focal length in pixels for a viewport of the given height, derived
    /// from the vertical field of view.
    #[must_use]
    pub fn focal_px(&self, viewport_h: f64) -> f64 {
        (viewport_h * 0.5) / (self.fov_deg.to_radians() * 0.5).tan()
    }

    /// Project a world point onto the viewport.
    ///
    /// Returns `None` when the point is outside the near/far depth range.
    /// World +Y is up; screen +Y is down.
    #[must_use]
    pub fn project(&self, p: WorldPoint, viewport_w: f64, viewport_h: f64) -> Option<ScreenPoint> {
        let depth = self.z - p.z;
        if depth <= CAMERA_NEAR || depth >= CAMERA_FAR {
            return None;
        }
        let scale = self.focal_px(viewport_h) / depth;
        Some(ScreenPoint {
            x: viewport_w * 0.5 + (p.x - self.x) * scale,
            y: viewport_h * 0.5 - (p.y - self.y) * scale,
            scale,
        })
    }
}
