//! Fill patterns for the 5×5 LED matrix.
//!
//! Row-major, top row first, so the last five cells are the bottom row.
//! Tier `n` lights the bottom `n + 1` rows: the water rises from the
//! bottom of the grid.

/// Cells in the matrix.
pub const MATRIX_CELLS: usize = 25;
/// Cells per row (and rows per grid).
pub const MATRIX_SIDE: usize = 5;
/// Number of fill tiers.
pub const TIER_COUNT: usize = 5;

/// Per-cell brightness, `0.0` (off) or `1.0` (on).
pub type Pattern = [f32; MATRIX_CELLS];

#[rustfmt::skip]
pub const PATTERNS: [Pattern; TIER_COUNT] = [
    // 100L
    [0.0, 0.0, 0.0, 0.0, 0.0,
     0.0, 0.0, 0.0, 0.0, 0.0,
     0.0, 0.0, 0.0, 0.0, 0.0,
     0.0, 0.0, 0.0, 0.0, 0.0,
     1.0, 1.0, 1.0, 1.0, 1.0],
    // 200L
    [0.0, 0.0, 0.0, 0.0, 0.0,
     0.0, 0.0, 0.0, 0.0, 0.0,
     0.0, 0.0, 0.0, 0.0, 0.0,
     1.0, 1.0, 1.0, 1.0, 1.0,
     1.0, 1.0, 1.0, 1.0, 1.0],
    // 300L
    [0.0, 0.0, 0.0, 0.0, 0.0,
     0.0, 0.0, 0.0, 0.0, 0.0,
     1.0, 1.0, 1.0, 1.0, 1.0,
     1.0, 1.0, 1.0, 1.0, 1.0,
     1.0, 1.0, 1.0, 1.0, 1.0],
    // 400L
    [0.0, 0.0, 0.0, 0.0, 0.0,
     1.0, 1.0, 1.0, 1.0, 1.0,
     1.0, 1.0, 1.0, 1.0, 1.0,
     1.0, 1.0, 1.0, 1.0, 1.0,
     1.0, 1.0, 1.0, 1.0, 1.0],
    // 500L
    [1.0, 1.0, 1.0, 1.0, 1.0,
     1.0, 1.0, 1.0, 1.0, 1.0,
     1.0, 1.0, 1.0, 1.0, 1.0,
     1.0, 1.0, 1.0, 1.0, 1.0,
     1.0, 1.0, 1.0, 1.0, 1.0],
];

/// Pattern for `tier`, saturating at the top tier.
pub fn pattern(tier: usize) -> &'static Pattern {
    &PATTERNS[tier.min(TIER_COUNT - 1)]
}

/// Number of lit cells in `pattern`.
pub fn lit_cells(pattern: &Pattern) -> usize {
    pattern.iter().filter(|&&b| b > 0.0).count()
}
