use glam::Vec2;

use crate::config::GridConfig;

// --- Helper Functions ---

/// Cell under the pointer, or `None` when the pointer lies outside the grid
/// area.
pub fn cell_under_pointer(pointer: Vec2, grid: &GridConfig) -> Option<(usize, usize)> {
    if pointer.x < 0.0 || pointer.y < 0.0 {
        return None;
    }
    let col = (pointer.x / grid.cell_size_px as f32) as usize;
    let row = (pointer.y / grid.cell_size_px as f32) as usize;
    if col < grid.width && row < grid.height {
        Some((col, row))
    } else {
        None
    }
}

/// Like [`cell_under_pointer`], but clamps to the nearest edge cell so edits
/// stay defined when the pointer sits outside the grid area.
pub fn clamped_cell_under_pointer(pointer: Vec2, grid: &GridConfig) -> (usize, usize) {
    let col = (pointer.x.max(0.0) / grid.cell_size_px as f32) as usize;
    let row = (pointer.y.max(0.0) / grid.cell_size_px as f32) as usize;
    (col.min(grid.width - 1), row.min(grid.height - 1))
}
