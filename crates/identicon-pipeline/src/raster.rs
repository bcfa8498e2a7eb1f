//! Rasterization of the pixel map onto a fixed 250x250 canvas.
//!
//! Canvas creation and rectangle filling happen here, in memory.
//! Turning the canvas into container bytes is left to the encoders in
//! `identicon-export`.

use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::types::{CANVAS_SIZE, Color, PixelMap, Rectangle, RgbImage};

/// Color of every pixel not covered by a drawn cell.
pub const BACKGROUND: Color = Color::new(255, 255, 255);

/// A blank `CANVAS_SIZE` x `CANVAS_SIZE` canvas filled with [`BACKGROUND`].
#[must_use = "returns the blank canvas"]
pub fn blank_canvas() -> RgbImage {
    RgbImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND.to_rgb())
}

/// Fill `rect` on `canvas` with a solid `color`.
///
/// The top-left corner is inclusive and the bottom-right corner is
/// exclusive, so adjacent cells share no pixels. Anything outside the
/// canvas is clipped; empty rectangles are ignored.
#[allow(clippy::cast_possible_wrap)]
pub fn fill_rectangle(canvas: &mut RgbImage, rect: &Rectangle, color: Color) {
    if rect.is_empty() {
        return;
    }
    // Coordinates are bounded by the canvas size, far below i32::MAX.
    let area = Rect::at(rect.top_left.x as i32, rect.top_left.y as i32)
        .of_size(rect.width(), rect.height());
    draw_filled_rect_mut(canvas, area, color.to_rgb());
}

/// Draw every rectangle of `pixel_map` in `color` on a fresh canvas.
///
/// An empty pixel map yields a blank canvas.
#[must_use = "returns the rendered canvas"]
pub fn rasterize(color: Color, pixel_map: &PixelMap) -> RgbImage {
    let mut canvas = blank_canvas();
    for rect in pixel_map {
        fill_rectangle(&mut canvas, rect, color);
    }
    canvas
}

/// Count pixels that differ from [`BACKGROUND`].
pub(crate) fn filled_pixel_count(canvas: &RgbImage) -> u64 {
    let background = BACKGROUND.to_rgb();
    canvas
        .pixels()
        .map(|p| u64::from(u8::from(*p != background)))
        .sum()
}
