//! Grid construction from the digest.
//!
//! The first [`SOURCE_BYTES`] digest bytes are cut into five rows of
//! three. Each row is mirrored around its third value so the finished
//! 5x5 grid is left-right symmetric, then every value is tagged with its
//! row-major position.

use crate::types::{CELL_COUNT, Cell, Digest, Grid, ROW_SOURCE_LEN, SOURCE_BYTES};

/// Mirror a three-value row into five values: `[a, b, c] -> [a, b, c, b, a]`.
///
/// Only the first two values are reflected; the middle column is `c`.
#[must_use]
pub const fn mirror_row(row: [u8; ROW_SOURCE_LEN]) -> [u8; 5] {
    let [a, b, c] = row;
    [a, b, c, b, a]
}

/// Build the 25-cell grid from a digest.
///
/// The trailing digest byte is discarded. Indices run `0..25` in
/// row-major order.
#[must_use = "returns the unfiltered grid"]
pub fn build_grid(digest: &Digest) -> Grid {
    let (rows, _) = digest.as_bytes()[..SOURCE_BYTES].as_chunks::<ROW_SOURCE_LEN>();

    let cells: Vec<Cell> = rows
        .iter()
        .flat_map(|&row| mirror_row(row))
        .enumerate()
        .map(|(index, value)| Cell::new(value, index))
        .collect();
    debug_assert_eq!(cells.len(), CELL_COUNT);

    Grid::new(cells)
}
