//! Shared numeric constants for the wavefield crate.

// ── Grid ────────────────────────────────────────────────────────

/// Points per row (X axis).
pub const GRID_COLUMNS: usize = 50;

/// Points per column (Z axis).
pub const GRID_ROWS: usize = 50;

/// Distance between neighboring points, in world units.
pub const SEPARATION: f64 = 100.0;

// ── Wave shape ──────────────────────────────────────────────────

/// Peak height contribution of each of the two sine waves.
pub const WAVE_AMPLITUDE: f64 = 50.0;

/// Angular frequency of the wave running along grid columns.
pub const COLUMN_FREQUENCY: f64 = 0.3;

/// Angular frequency of the wave running along grid rows.
pub const ROW_FREQUENCY: f64 = 0.5;

/// Phase counter advance per animation frame.
pub const PHASE_STEP: f64 = 0.1;

// ── Appearance ──────────────────────────────────────────────────

/// Point brightness in light mode, on a 0–1 grayscale.
pub const LIGHT_BRIGHTNESS: f64 = 0.85;

/// Point brightness in dark mode.
pub const DARK_BRIGHTNESS: f64 = 0.2;

/// Base point radius in world units before distance attenuation.
pub const POINT_SIZE: f64 = 4.0;

/// Global alpha applied to every drawn point.
pub const POINT_ALPHA: f64 = 0.3;

// ── Camera ──────────────────────────────────────────────────────

/// Vertical field of view, in degrees.
pub const CAMERA_FOV_DEG: f64 = 60.0;

/// Camera height above the surface plane, in world units.
pub const CAMERA_Y: f64 = 350.0;

/// Camera distance along +Z; the camera looks down −Z.
pub const CAMERA_Z: f64 = 1200.0;

/// Near clipping distance; points closer than this are culled.
pub const CAMERA_NEAR: f64 = 1.0;

/// Far clipping distance; points beyond this are culled.
pub const CAMERA_FAR: f64 = 10_000.0;
