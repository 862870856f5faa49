//! Named board fixtures stamped onto the grid at startup.

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// Cells are `(col, row)` pairs near the top-left of the board.
pub const STARTUP_PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Blinker",
        cells: &[(5, 5), (5, 6), (5, 7)],
    },
    Pattern {
        name: "Toad",
        cells: &[(10, 10), (11, 10), (12, 10), (9, 11), (10, 11), (11, 11)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 1), (2, 2), (2, 3), (1, 3), (0, 3)],
    },
];
