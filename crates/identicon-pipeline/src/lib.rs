//! identicon-pipeline: Pure identicon derivation pipeline (sans-IO).
//!
//! Turns an arbitrary string into a 250x250 symmetric identicon through:
//! hash -> grid -> parity filter -> pixel map -> raster.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! values and returns structured data. Encoding lives in
//! `identicon-export` and persistence in `identicon-io`.

pub mod diagnostics;
pub mod filter;
pub mod grid;
pub mod hash;
pub mod pipeline;
pub mod pixel_map;
pub mod raster;
pub mod types;

pub use pipeline::Pipeline;
pub use types::{
    CANVAS_SIZE, CELL_COUNT, CELL_SIZE, Cell, Color, DIGEST_LEN, Digest, GRID_SIZE, Grid,
    IdenticonState, PipelineError, PixelMap, Point, Rectangle, RgbImage,
};

/// Run the full identicon pipeline.
///
/// Produces an [`IdenticonState`] carrying the digest, color, full and
/// filtered grids, pixel map, and the rendered canvas. The same input
/// always yields an identical state.
///
/// # Pipeline steps
///
/// 1. MD5-hash the input; the first three bytes become the color
/// 2. Build the mirrored 5x5 grid from the first 15 bytes
/// 3. Keep only even-valued cells
/// 4. Map each kept cell to its 50x50 rectangle
/// 5. Fill the rectangles on a white 250x250 canvas
#[must_use = "returns every pipeline intermediate"]
pub fn process(input: &str) -> IdenticonState {
    Pipeline::new(input)
        .hash()
        .build_grid()
        .filter()
        .map_pixels()
        .rasterize()
        .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_is_deterministic() {
        assert_eq!(process("alice"), process("alice"));
    }

    #[test]
    fn process_known_vector() {
        let state = process("asdf");
        assert_eq!(state.color, Color::new(145, 46, 200));
        assert_eq!(state.grid.len(), CELL_COUNT);
        assert_eq!(state.filtered.len(), 12);
        assert_eq!(state.pixel_map.len(), 12);
        assert_eq!(
            state.pixel_map.rectangles()[0],
            Rectangle::new(Point::new(50, 0), Point::new(100, 50))
        );
        assert_eq!(*state.image.get_pixel(60, 10), state.color.to_rgb());
        // Index 0 (value 145) is odd and stays background.
        assert_eq!(*state.image.get_pixel(10, 10), raster::BACKGROUND.to_rgb());
    }

    #[test]
    fn process_all_odd_prefix_renders_blank_canvas() {
        // md5("ein") = ffef75ef03094771fb011905bf579fdb; the first 15
        // bytes are all odd.
        let state = process("ein");
        assert!(state.filtered.is_empty());
        assert!(state.pixel_map.is_empty());
        assert_eq!(state.image.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
        let background = raster::BACKGROUND.to_rgb();
        assert!(state.image.pixels().all(|p| *p == background));
    }

    #[test]
    fn color_is_independent_of_filtering() {
        let state = process("ein");
        assert_eq!(state.color, Color::from_digest(&state.digest));
        assert_eq!(state.color, Color::new(255, 239, 117));
    }
}
