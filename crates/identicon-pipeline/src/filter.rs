//! Parity filter: decides which cells get drawn.

use crate::types::Grid;

/// Keep only cells with an even value.
///
/// Order and original indices are preserved; survivors are not
/// renumbered, so drawn cells stay at their original positions. An
/// all-odd grid yields an empty grid.
#[must_use = "returns the filtered grid"]
pub fn filter_even(grid: &Grid) -> Grid {
    Grid::new(grid.iter().copied().filter(|cell| cell.is_even()).collect())
}
