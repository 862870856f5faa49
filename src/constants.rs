use glam::Vec4;

// --- Global Simulation Constants ---
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 640;
pub const CELL_SIZE_PX: u32 = 10;

pub const WINDOW_TITLE: &str = "Conway's Game of Life";
pub const CONTROLS_HINT: &str =
    "'S' run/pause, 'Z' slower, 'X' faster, 'C' clear, 'R' random, LMB set, RMB erase";

// Seconds between generations. Adjusted in fixed steps, clamped to
// [fastest, slowest].
pub const INITIAL_STEP_INTERVAL_SECS: f64 = 0.25;
pub const SLOWEST_STEP_INTERVAL_SECS: f64 = 2.0;
pub const FASTEST_STEP_INTERVAL_SECS: f64 = 0.020;
pub const STEP_INTERVAL_ADJUST_SECS: f64 = 0.040;

// Probability that a cell comes up alive when the board is reseeded randomly.
pub const RANDOM_FILL_PROBABILITY: f64 = 0.18;

pub const TITLE_UPDATE_INTERVAL_SECS: f64 = 0.5;

// --- Colors ---
pub const BACKGROUND_COLOR: wgpu::Color = wgpu::Color {
    r: 0.96,
    g: 0.96,
    b: 0.96,
    a: 1.0,
};
pub const ALIVE_CELL_COLOR: Vec4 = Vec4::new(0.31, 0.31, 0.31, 1.0);
pub const CURSOR_OUTLINE_COLOR: Vec4 = Vec4::new(0.78, 0.78, 0.78, 1.0);
pub const CURSOR_OUTLINE_THICKNESS_PX: f32 = 1.0;
