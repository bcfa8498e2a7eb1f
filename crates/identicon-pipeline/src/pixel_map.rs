//! Cell-to-rectangle mapping.
//!
//! Each cell index maps to a fixed 50x50 square: column `index % 5`,
//! row `index / 5`. The mapping uses the original grid index, so
//! filtered-out cells leave gaps.

use crate::types::{CELL_SIZE, Cell, GRID_SIZE, Grid, PixelMap, Point, Rectangle};

/// The canvas rectangle covered by the cell at row-major `index`.
///
/// Indices outside `0..25` produce rectangles beyond the canvas; the
/// rasterizer clips them.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn cell_rectangle(index: usize) -> Rectangle {
    let horizontal = (index % GRID_SIZE) as u32 * CELL_SIZE;
    let vertical = (index / GRID_SIZE) as u32 * CELL_SIZE;
    Rectangle::new(
        Point::new(horizontal, vertical),
        Point::new(horizontal + CELL_SIZE, vertical + CELL_SIZE),
    )
}

/// Map every cell to its rectangle, preserving order.
#[must_use = "returns the pixel map"]
pub fn build_pixel_map(grid: &Grid) -> PixelMap {
    PixelMap::new(grid.iter().map(|&Cell { index, .. }| cell_rectangle(index)).collect())
}
