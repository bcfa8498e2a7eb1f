//! identicon-export: Pure image encoders (sans-IO)
//!
//! Turns a rendered identicon canvas into container bytes. Supports
//! PNG (the default) and BMP; both are lossless, so decoded pixels match
//! the canvas exactly.

pub mod bmp;
pub mod format;
pub mod png;

pub use format::{EncodeFormat, ExportError, RasterEncoder};
