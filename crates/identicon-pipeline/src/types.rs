//! Shared types for the identicon pipeline.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Re-export `RgbImage` so downstream crates can reference the rendered
/// canvas without depending on `image` directly.
pub use image::RgbImage;

/// Number of bytes in a [`Digest`] (128-bit hash).
pub const DIGEST_LEN: usize = 16;

/// Cells per grid row and per grid column.
pub const GRID_SIZE: usize = 5;

/// Total number of cells in the unfiltered grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Source values per row before mirroring.
pub const ROW_SOURCE_LEN: usize = 3;

/// Leading digest bytes consumed by the grid builder. The remaining
/// byte is discarded.
pub const SOURCE_BYTES: usize = GRID_SIZE * ROW_SOURCE_LEN;

/// Edge length of one cell in pixels.
pub const CELL_SIZE: u32 = 50;

/// Edge length of the square canvas in pixels.
pub const CANVAS_SIZE: u32 = 250;

const _: () = assert!(SOURCE_BYTES <= DIGEST_LEN);
#[allow(clippy::cast_possible_truncation)]
const _: () = assert!(CELL_SIZE * GRID_SIZE as u32 == CANVAS_SIZE);

/// Fixed-length hash of the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap raw digest bytes.
    #[must_use]
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// The digest bytes in hash output order.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hexadecimal rendering, two characters per byte.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0
            .iter()
            .fold(String::with_capacity(DIGEST_LEN * 2), |mut out, b| {
                let _ = write!(out, "{b:02x}");
                out
            })
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = PipelineError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array = <[u8; DIGEST_LEN]>::try_from(bytes).map_err(|_| {
            PipelineError::InvalidDigestLength {
                expected: DIGEST_LEN,
                actual: bytes.len(),
            }
        })?;
        Ok(Self(array))
    }
}

/// Solid fill color for every drawn cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// Create a color from its three channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Take the first three digest bytes as red, green and blue.
    ///
    /// The color depends on the digest alone, never on which grid cells
    /// survive filtering.
    #[must_use]
    pub const fn from_digest(digest: &Digest) -> Self {
        let [red, green, blue, ..] = *digest.as_bytes();
        Self { red, green, blue }
    }

    /// Convert to an `image` pixel.
    #[must_use]
    pub const fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.red, self.green, self.blue])
    }
}

/// One grid entry: a digest-derived value and its row-major position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Byte value copied from the digest.
    pub value: u8,
    /// Zero-based row-major position in the unfiltered 5x5 grid.
    pub index: usize,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(value: u8, index: usize) -> Self {
        Self { value, index }
    }

    /// Whether the value is even, i.e. the cell will be drawn.
    #[must_use]
    pub const fn is_even(self) -> bool {
        self.value % 2 == 0
    }

    /// Grid row of this cell (`index / 5`).
    #[must_use]
    pub const fn row(self) -> usize {
        self.index / GRID_SIZE
    }

    /// Grid column of this cell (`index % 5`).
    #[must_use]
    pub const fn column(self) -> usize {
        self.index % GRID_SIZE
    }
}

/// Ordered sequence of cells.
///
/// Holds all 25 cells after grid building and a subsequence of them
/// after filtering. Indices are never renumbered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid(Vec<Cell>);

impl Grid {
    /// Create a grid from cells in order.
    #[must_use]
    pub const fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a slice of all cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// Iterate over the cells in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.0.iter()
    }

    /// Consumes the grid and returns the underlying vector of cells.
    #[must_use]
    pub fn into_cells(self) -> Vec<Cell> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A 2D integer point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from left edge).
    pub x: u32,
    /// Vertical position (pixels from top edge).
    pub y: u32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle spanning `top_left` (inclusive) to
/// `bottom_right` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    /// Top-left corner, inclusive.
    pub top_left: Point,
    /// Bottom-right corner, exclusive.
    pub bottom_right: Point,
}

impl Rectangle {
    /// Create a rectangle from its two corners.
    #[must_use]
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Width in pixels (zero if the corners are inverted).
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.bottom_right.x.saturating_sub(self.top_left.x)
    }

    /// Height in pixels (zero if the corners are inverted).
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.bottom_right.y.saturating_sub(self.top_left.y)
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether the pixel at `(x, y)` lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.top_left.x
            && x < self.bottom_right.x
            && y >= self.top_left.y
            && y < self.bottom_right.y
    }
}

/// Ordered rectangles to fill, one per drawn cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelMap(Vec<Rectangle>);

impl PixelMap {
    /// Create a pixel map from rectangles in draw order.
    #[must_use]
    pub const fn new(rectangles: Vec<Rectangle>) -> Self {
        Self(rectangles)
    }

    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of rectangles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a slice of all rectangles.
    #[must_use]
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.0
    }

    /// Iterate over the rectangles in draw order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a PixelMap {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Every intermediate produced by a single pipeline run.
///
/// Created fresh per call and owned by the caller; nothing is cached
/// between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct IdenticonState {
    /// Stage 1: hash of the input string.
    pub digest: Digest,
    /// Fill color, taken from the first three digest bytes.
    pub color: Color,
    /// Stage 2: the full 25-cell mirrored grid.
    pub grid: Grid,
    /// Stage 3: cells that survived the parity filter.
    pub filtered: Grid,
    /// Stage 4: one rectangle per filtered cell.
    pub pixel_map: PixelMap,
    /// Stage 5: the rasterized 250x250 canvas.
    pub image: RgbImage,
}

/// Errors produced when constructing pipeline values from raw data.
///
/// The stages themselves are total functions and never fail.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A byte slice of the wrong length was offered as a digest.
    #[error("digest must be {expected} bytes, got {actual}")]
    InvalidDigestLength {
        /// Required number of bytes.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn digest_hex_is_lowercase_and_padded() {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes[0] = 0x0a;
        bytes[15] = 0xff;
        let hex = Digest::new(bytes).to_hex();
        assert_eq!(hex.len(), 32);
        assert!(hex.starts_with("0a00"));
        assert!(hex.ends_with("00ff"));
    }

    #[test]
    fn digest_from_slice_rejects_wrong_length() {
        let result = Digest::try_from(&[1u8, 2, 3][..]);
        assert!(matches!(
            result,
            Err(PipelineError::InvalidDigestLength {
                expected: 16,
                actual: 3
            })
        ));
    }

    #[test]
    fn digest_from_slice_accepts_sixteen_bytes() {
        let bytes: Vec<u8> = (0..16).collect();
        let digest = Digest::try_from(bytes.as_slice()).unwrap();
        assert_eq!(digest.as_bytes()[15], 15);
    }

    #[test]
    fn color_uses_first_three_bytes() {
        let mut bytes = [9u8; DIGEST_LEN];
        bytes[..3].copy_from_slice(&[1, 2, 3]);
        assert_eq!(Color::from_digest(&Digest::new(bytes)), Color::new(1, 2, 3));
    }

    #[test]
    fn cell_row_and_column() {
        let cell = Cell::new(0, 13);
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.column(), 3);
    }

    #[test]
    fn rectangle_contains_is_half_open() {
        let rect = Rectangle::new(Point::new(50, 0), Point::new(100, 50));
        assert!(rect.contains(50, 0));
        assert!(rect.contains(99, 49));
        assert!(!rect.contains(100, 0));
        assert!(!rect.contains(50, 50));
        assert_eq!(rect.width(), 50);
        assert_eq!(rect.height(), 50);
    }

    #[test]
    fn inverted_rectangle_is_empty() {
        let rect = Rectangle::new(Point::new(10, 10), Point::new(5, 20));
        assert!(rect.is_empty());
    }

    #[test]
    fn grid_serializes_as_cell_list() {
        let grid = Grid::new(vec![Cell::new(46, 1)]);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[{"value":46,"index":1}]"#);
    }
}
