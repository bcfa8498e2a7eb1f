//! BMP encoding.

use identicon_pipeline::RgbImage;
use image::ImageEncoder;

use crate::format::ExportError;

/// Encode an RGB canvas as an uncompressed 24-bit BMP.
///
/// # Errors
///
/// Returns [`ExportError::Encode`] if the BMP encoder fails.
pub fn encode_bmp(image: &RgbImage) -> Result<Vec<u8>, ExportError> {
    let mut bmp_bytes = Vec::new();
    let encoder = image::codecs::bmp::BmpEncoder::new(&mut bmp_bytes);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(bmp_bytes)
}
