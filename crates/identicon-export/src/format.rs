//! Encoder selection.
//!
//! [`RasterEncoder`] is the capability the rest of the workspace depends
//! on: "turn this canvas into bytes". [`EncodeFormat`] picks a concrete
//! implementation at runtime, the same way a strategy enum would.

use identicon_pipeline::RgbImage;
use serde::{Deserialize, Serialize};

/// Errors that can occur while encoding a canvas.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The underlying image encoder failed.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Container format for the rendered identicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodeFormat {
    /// Portable Network Graphics.
    #[default]
    Png,
    /// Windows bitmap, uncompressed 24-bit.
    Bmp,
}

/// Trait for canvas encoders.
///
/// Implementations must be lossless: decoding the output has to yield
/// exactly the pixels of the input canvas.
pub trait RasterEncoder {
    /// Encode `image` into container bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Encode`] if the encoder fails.
    fn encode(&self, image: &RgbImage) -> Result<Vec<u8>, ExportError>;

    /// File extension for the produced bytes, without the leading dot.
    fn extension(&self) -> &'static str;
}

impl RasterEncoder for EncodeFormat {
    fn encode(&self, image: &RgbImage) -> Result<Vec<u8>, ExportError> {
        match *self {
            Self::Png => crate::png::encode_png(image),
            Self::Bmp => crate::bmp::encode_bmp(image),
        }
    }

    fn extension(&self) -> &'static str {
        match *self {
            Self::Png => "png",
            Self::Bmp => "bmp",
        }
    }
}
