use rand::Rng;

use crate::config::GridConfig;

/// Per-cell tag. Four states rather than a plain bool so one raster pass can
/// read the current generation while recording the next one in place: the two
/// "-Next" variants still tell whether the cell entered the pass alive, so no
/// second buffer is needed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
    /// Alive this generation, dead after the next collapse.
    AliveDyingNext,
    /// Dead this generation, alive after the next collapse.
    DeadBornNext,
}

impl Cell {
    /// Liveness as of the start of the current step pass.
    #[inline]
    fn was_alive(self) -> bool {
        matches!(self, Cell::Alive | Cell::AliveDyingNext)
    }

    /// Liveness once the pending transition is applied.
    #[inline]
    fn alive_next(self) -> bool {
        matches!(self, Cell::Alive | Cell::DeadBornNext)
    }
}

/// The toroidal board: a contiguous row-major buffer of cell tags with
/// explicit dimensions. Created once at startup and only ever mutated in
/// place.
pub struct GridState {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridState {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.width, config.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        debug_assert!(col < self.width && row < self.height);
        row * self.width + col
    }

    /// Liveness of one cell, accounting for any not-yet-collapsed transition.
    pub fn is_alive(&self, col: usize, row: usize) -> bool {
        self.cells[self.index(col, row)].alive_next()
    }

    /// Writes `Alive` or `Dead` directly, discarding any in-progress
    /// transition tag at that position. Edits therefore win over a computed
    /// step even when applied between [`step`](Self::step) and
    /// [`classify_and_collapse`](Self::classify_and_collapse).
    pub fn set_cell(&mut self, col: usize, row: usize, alive: bool) {
        let idx = self.index(col, row);
        self.cells[idx] = if alive { Cell::Alive } else { Cell::Dead };
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Advances every cell one generation in a single in-place raster pass.
    ///
    /// Neighbor counts use pre-step liveness: cells already rewritten to a
    /// "-Next" tag earlier in the pass still count as what they were when the
    /// pass began, so the outcome does not depend on scan order. A surviving
    /// `Alive` cell keeps its tag unchanged; later cells in the same pass must
    /// keep seeing it as alive. After the pass every tag encodes both the
    /// current and the next generation until `classify_and_collapse` resolves
    /// it.
    pub fn step(&mut self) {
        for row in 0..self.height {
            let row_above = if row == 0 { self.height - 1 } else { row - 1 };
            let row_below = if row == self.height - 1 { 0 } else { row + 1 };
            for col in 0..self.width {
                let col_left = if col == 0 { self.width - 1 } else { col - 1 };
                let col_right = if col == self.width - 1 { 0 } else { col + 1 };

                let mut live_neighbors = 0;
                for r in [row_above, row, row_below] {
                    for c in [col_left, col, col_right] {
                        if (c, r) != (col, row) && self.cells[r * self.width + c].was_alive() {
                            live_neighbors += 1;
                        }
                    }
                }

                let idx = self.index(col, row);
                match self.cells[idx] {
                    Cell::Alive if live_neighbors == 2 || live_neighbors == 3 => {}
                    Cell::Alive => self.cells[idx] = Cell::AliveDyingNext,
                    Cell::Dead if live_neighbors == 3 => self.cells[idx] = Cell::DeadBornNext,
                    _ => {}
                }
            }
        }
    }

    /// Resolves every pending transition tag back to plain `Alive`/`Dead`,
    /// preparing the board for the next step. Idempotent; invoked once per
    /// rendered frame.
    pub fn classify_and_collapse(&mut self) {
        for cell in &mut self.cells {
            *cell = if cell.alive_next() {
                Cell::Alive
            } else {
                Cell::Dead
            };
        }
    }

    /// Coordinates of every cell that renders as alive, in raster order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.alive_next())
            .map(move |(idx, _)| (idx % width, idx / width))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive_next()).count()
    }

    /// Stamps a list of `(col, row)` cells alive. Out-of-range entries are
    /// ignored so fixtures can be authored without knowing the board size.
    pub fn stamp(&mut self, cells: &[(usize, usize)]) {
        for &(col, row) in cells {
            if col < self.width && row < self.height {
                self.set_cell(col, row, true);
            }
        }
    }

    /// Clears the board and sets each cell alive with probability `p`.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, p: f64) {
        let p = p.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            *cell = if rng.gen_bool(p) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn alive_set(grid: &GridState) -> Vec<(usize, usize)> {
        grid.alive_cells().collect()
    }

    fn advance(grid: &mut GridState, steps: usize) {
        for _ in 0..steps {
            grid.step();
            grid.classify_and_collapse();
        }
    }

    #[test]
    fn lone_cell_dies() {
        let mut grid = GridState::new(5, 5);
        grid.set_cell(2, 2, true);
        advance(&mut grid, 1);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn overcrowded_cell_dies() {
        // Center of a full 3x3 block has 8 neighbors.
        let mut grid = GridState::new(7, 7);
        for row in 2..5 {
            for col in 2..5 {
                grid.set_cell(col, row, true);
            }
        }
        advance(&mut grid, 1);
        assert!(!grid.is_alive(3, 3));
        // Edge midpoints had 5 neighbors and die too; corners had 3 and live.
        assert!(!grid.is_alive(3, 2));
        assert!(grid.is_alive(2, 2));
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        let mut grid = GridState::new(6, 6);
        grid.stamp(&[(1, 1), (2, 1), (1, 2)]);
        advance(&mut grid, 1);
        assert!(grid.is_alive(2, 2));
    }

    #[test]
    fn corner_cell_counts_wrapped_neighbors() {
        // Three corners adjacent to (0,0) only through the torus seams.
        let mut grid = GridState::new(5, 5);
        grid.stamp(&[(4, 4), (4, 0), (0, 4)]);
        advance(&mut grid, 1);
        assert!(grid.is_alive(0, 0));
    }

    #[test]
    fn block_is_a_still_life() {
        let mut grid = GridState::new(8, 8);
        let block = [(3, 3), (4, 3), (3, 4), (4, 4)];
        grid.stamp(&block);
        advance(&mut grid, 5);
        assert_eq!(alive_set(&grid), block);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut grid = GridState::new(5, 5);
        grid.stamp(&[(2, 1), (2, 2), (2, 3)]);

        advance(&mut grid, 1);
        assert_eq!(alive_set(&grid), vec![(1, 2), (2, 2), (3, 2)]);

        advance(&mut grid, 1);
        assert_eq!(alive_set(&grid), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn glider_translates_across_the_torus() {
        let mut grid = GridState::new(8, 8);
        grid.stamp(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let before = grid.live_count();
        // Four generations move a glider one cell diagonally.
        advance(&mut grid, 4);
        assert_eq!(grid.live_count(), before);
        assert_eq!(alive_set(&grid), vec![(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn edits_between_step_and_collapse_take_precedence() {
        let mut grid = GridState::new(5, 5);
        grid.stamp(&[(2, 1), (2, 2), (2, 3)]);

        grid.step();
        // The rule kept (2,2) alive and is about to kill (2,1); both edits
        // must override the computed transition.
        grid.set_cell(2, 2, false);
        grid.set_cell(2, 1, true);
        grid.classify_and_collapse();

        assert!(!grid.is_alive(2, 2));
        assert!(grid.is_alive(2, 1));
    }

    #[test]
    fn collapse_is_idempotent() {
        let mut grid = GridState::new(5, 5);
        grid.stamp(&[(2, 1), (2, 2), (2, 3)]);
        grid.step();

        grid.classify_and_collapse();
        let first = alive_set(&grid);
        grid.classify_and_collapse();
        assert_eq!(alive_set(&grid), first);
    }

    #[test]
    fn clear_kills_every_cell() {
        let mut grid = GridState::new(5, 5);
        grid.stamp(&[(0, 0), (1, 1), (2, 2), (3, 3)]);
        grid.clear();
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn stamp_ignores_out_of_range_cells() {
        let mut grid = GridState::new(4, 4);
        grid.stamp(&[(1, 1), (4, 1), (1, 4), (100, 100)]);
        assert_eq!(alive_set(&grid), vec![(1, 1)]);
    }

    #[test]
    fn random_fill_respects_probability_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = GridState::new(10, 10);

        grid.fill_random(&mut rng, 0.0);
        assert_eq!(grid.live_count(), 0);

        grid.fill_random(&mut rng, 1.0);
        assert_eq!(grid.live_count(), 100);
    }
}
