use crate::consts::{
    COLUMN_FREQUENCY, GRID_COLUMNS, GRID_ROWS, PHASE_STEP, ROW_FREQUENCY, SEPARATION,
    WAVE_AMPLITUDE,
};

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

/// One point of the wave surface.
///
/// `base_x` / `base_z` and `brightness` are fixed at creation; `y` is
/// recomputed on every [`WaveGrid::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub base_x: f64,
    pub base_z: f64,
    pub y: f64,
    /// Grayscale brightness on a 0–1 scale, chosen from the theme at
    /// construction time.
    pub brightness: f64,
}

/// Grid dimensions and spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,
    pub separation: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            separation: SEPARATION,
        }
    }
}

/// A regular grid of points perturbed into a wave surface.
///
/// Base positions are centered at the origin. The surface shape is driven
/// entirely by the phase counter: heights are a pure function of
/// `(ix, iy, phase)`, so skipped frames only skip ahead, they never
/// corrupt state.
#[derive(Debug, Clone)]
pub struct WaveGrid {
    config: GridConfig,
    phase: f64,
    points: Vec<GridPoint>,
}

impl WaveGrid {
    #[must_use]
    pub fn new(config: GridConfig, brightness: f64) -> Self {
        let mut points = Vec::with_capacity(config.columns * config.rows);
        let half_width = config.columns as f64 * config.separation / 2.0;
        let half_depth = config.rows as f64 * config.separation / 2.0;
        for ix in 0..config.columns {
            for iy in 0..config.rows {
                points.push(GridPoint {
                    base_x: ix as f64 * config.separation - half_width,
                    base_z: iy as f64 * config.separation - half_depth,
                    y: Self::wave_height(ix, iy, 0.0),
                    brightness,
                });
            }
        }
        Self { config, phase: 0.0, points }
    }

    /// Height of point `(ix, iy)` at the given phase: the sum of a wave
    /// running along columns and a wave running along rows.
    ///
    /// Pure — identical inputs always produce identical output.
    #[must_use]
    pub fn wave_height(ix: usize, iy: usize, phase: f64) -> f64 {
        ((ix as f64 + phase) * COLUMN_FREQUENCY).sin() * WAVE_AMPLITUDE
            + ((iy as f64 + phase) * ROW_FREQUENCY).sin() * WAVE_AMPLITUDE
    }

    /// Advance the phase counter one frame and recompute every height.
    pub fn step(&mut self) {
        self.phase += PHASE_STEP;
        let phase = self.phase;
        let rows = self.config.rows;
        for (index, point) in self.points.iter_mut().enumerate() {
            point.y = Self::wave_height(index / rows, index % rows, phase);
        }
    }

    #[must_use]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    #[must_use]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    #[must_use]
    pub fn config(&self) -> GridConfig {
        self.config
    }
}
