//! Decoded image data types

/// Represents a decoded 8-bit RGB raster.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Interleaved pixel data in row-major order: [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}
