//! PNG encoding.

use identicon_pipeline::RgbImage;
use image::ImageEncoder;

use crate::format::ExportError;

/// Encode an RGB canvas as PNG bytes.
///
/// # Errors
///
/// Returns [`ExportError::Encode`] if the PNG encoder fails.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, ExportError> {
    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(png_bytes)
}
