//! Byte decoding

use herobar_core::ImageData;

use crate::error::{ImageError, Result};

/// Decode an encoded image (PNG, JPEG, ...) into RGBA pixels
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let img = image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    ImageData::from_rgba(rgba.into_raw(), width, height)
        .map_err(|e| ImageError::Decode(e.to_string()))
}
