use crate::constants::{
    CELL_SIZE_PX, FASTEST_STEP_INTERVAL_SECS, INITIAL_STEP_INTERVAL_SECS,
    SLOWEST_STEP_INTERVAL_SECS, STEP_INTERVAL_ADJUST_SECS, WINDOW_HEIGHT, WINDOW_WIDTH,
};

/// Board geometry, fixed for the lifetime of the process. Dimensions are
/// derived from the viewport once at startup; later window resizes do not
/// change them.
#[derive(Debug, Clone, Copy)]
pub struct GridConfig {
    pub cell_size_px: u32,
    pub width: usize,
    pub height: usize,
}

impl GridConfig {
    pub fn for_viewport(viewport_width: u32, viewport_height: u32, cell_size_px: u32) -> Self {
        Self {
            cell_size_px,
            width: (viewport_width / cell_size_px) as usize,
            height: (viewport_height / cell_size_px) as usize,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::for_viewport(WINDOW_WIDTH, WINDOW_HEIGHT, CELL_SIZE_PX)
    }
}

/// Step cadence bounds. `adjust_step_secs` is how far one speed command moves
/// the interval.
#[derive(Debug, Clone, Copy)]
pub struct TimingConfig {
    pub initial_interval_secs: f64,
    pub fastest_interval_secs: f64,
    pub slowest_interval_secs: f64,
    pub adjust_step_secs: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            initial_interval_secs: INITIAL_STEP_INTERVAL_SECS,
            fastest_interval_secs: FASTEST_STEP_INTERVAL_SECS,
            slowest_interval_secs: SLOWEST_STEP_INTERVAL_SECS,
            adjust_step_secs: STEP_INTERVAL_ADJUST_SECS,
        }
    }
}
