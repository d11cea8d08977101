//! Record data types

use ndarray::{Array2, Array3, ArrayView3};

/// Canonical raster width expected by the downstream algorithm.
pub const CANONICAL_WIDTH: usize = 640;
/// Canonical raster height expected by the downstream algorithm.
pub const CANONICAL_HEIGHT: usize = 480;

/// MAT variable name for the red channel matrix.
pub const FIELD_RED: &str = "I0R";
/// MAT variable name for the green channel matrix.
pub const FIELD_GREEN: &str = "I0G";
/// MAT variable name for the blue channel matrix.
pub const FIELD_BLUE: &str = "I0B";
/// MAT variable name for the 3x3 alignment transform.
pub const FIELD_TRANSFORM: &str = "transfm";
/// MAT variable name for the 2x4 region-of-interest corner matrix.
pub const FIELD_ROI: &str = "ROI";

/// A raster normalized to exactly 480x640 pixels in red-green-blue order.
///
/// Only [`MatrixRecordBuilder::normalize`] produces these, so the pixel
/// array always has shape `(CANONICAL_HEIGHT, CANONICAL_WIDTH, 3)`.
///
/// [`MatrixRecordBuilder::normalize`]: super::MatrixRecordBuilder::normalize
#[derive(Debug, Clone)]
pub struct CanonicalImage {
    pub(crate) pixels: Array3<u8>,
}

impl CanonicalImage {
    pub fn pixels(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }
}

/// The five-variable record serialized for the downstream environment.
///
/// Owns all of its matrices; nothing aliases the source image buffer, so
/// the source may be mutated or dropped after assembly.
#[derive(Debug, Clone)]
pub struct MatrixRecord {
    /// Red channel intensities, 480x640, unscaled 0-255
    pub i0r: Array2<f64>,
    /// Green channel intensities, 480x640, unscaled 0-255
    pub i0g: Array2<f64>,
    /// Blue channel intensities, 480x640, unscaled 0-255
    pub i0b: Array2<f64>,
    /// 3x3 alignment transform, identity for a single still image
    pub transfm: Array2<f64>,
    /// 2x4 full-image corner matrix, (x, y) pairs TL, TR, BR, BL
    pub roi: Array2<f64>,
}

impl MatrixRecord {
    /// Variables in the order they are written to the MAT file.
    pub fn fields(&self) -> [(&'static str, &Array2<f64>); 5] {
        [
            (FIELD_RED, &self.i0r),
            (FIELD_GREEN, &self.i0g),
            (FIELD_BLUE, &self.i0b),
            (FIELD_TRANSFORM, &self.transfm),
            (FIELD_ROI, &self.roi),
        ]
    }
}
