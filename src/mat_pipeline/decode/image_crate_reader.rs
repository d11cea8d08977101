//! Image reader implementation backed by the `image` crate.
//!
//! Handles format detection from the byte stream itself, so a single reader
//! covers every raster format the pipeline accepts (JPEG, PNG, BMP, TIFF).

use tracing::debug;

use crate::mat_pipeline::common::error::{ConversionError, Result};
use crate::mat_pipeline::decode::reader::ImageReader;
use crate::mat_pipeline::decode::types::DecodedImage;

/// Image reader that uses the `image` crate for decoding.
///
/// Whatever the source colour model (grayscale, RGBA, 16-bit), the output is
/// always 8-bit samples in red-green-blue channel order, which is the
/// canonical order the record builder expects.
pub struct ImageCrateReader;

impl ImageReader for ImageCrateReader {
    fn read_image(&self, data: &[u8]) -> Result<DecodedImage> {
        if data.is_empty() {
            return Err(ConversionError::DecodeError("empty input buffer".to_string()));
        }

        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let rgb = decoded.to_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);

        debug!("Decoded image: {}x{}", width, height);

        Ok(DecodedImage {
            width,
            height,
            data: rgb.into_raw(),
        })
    }
}
