use ndarray::{Array2, Array3, Axis, array};
use tracing::{debug, info};

use crate::mat_pipeline::common::error::{ConversionError, Result};
use crate::mat_pipeline::decode::types::DecodedImage;
use crate::mat_pipeline::mat::types::ResizeFilter;
use crate::mat_pipeline::record::types::{
    CANONICAL_HEIGHT, CANONICAL_WIDTH, CanonicalImage, MatrixRecord,
};

/// Builds the five-variable matrix record from one decoded image.
///
/// Stateless per image: each call either produces a complete record or
/// fails outright, there are no partial results.
pub struct MatrixRecordBuilder {
    filter: ResizeFilter,
}

impl Default for MatrixRecordBuilder {
    fn default() -> Self {
        Self::new(ResizeFilter::Bilinear)
    }
}

impl MatrixRecordBuilder {
    pub fn new(filter: ResizeFilter) -> Self {
        Self { filter }
    }

    /// Normalizes a decoded raster to the canonical 480x640 RGB layout.
    ///
    /// Inputs with other dimensions are resampled, which is reported but
    /// never an error. The output shape is always `(480, 640, 3)`.
    pub fn normalize(&self, image: &DecodedImage) -> Result<CanonicalImage> {
        if image.width == 0 || image.height == 0 {
            return Err(ConversionError::DecodeError(format!(
                "empty image: {}x{}",
                image.width, image.height
            )));
        }
        if image.data.len() != image.width * image.height * 3 {
            return Err(ConversionError::DecodeError(format!(
                "pixel buffer has {} bytes, expected {} for {}x{} RGB",
                image.data.len(),
                image.width * image.height * 3,
                image.width,
                image.height
            )));
        }

        let rgb = if image.width != CANONICAL_WIDTH || image.height != CANONICAL_HEIGHT {
            info!(
                "Image is not {}x{}, resizing from {}x{}",
                CANONICAL_WIDTH, CANONICAL_HEIGHT, image.width, image.height
            );
            let buffer: image::RgbImage = image::ImageBuffer::from_raw(
                image.width as u32,
                image.height as u32,
                image.data.clone(),
            )
            .ok_or_else(|| {
                ConversionError::DecodeError("pixel buffer does not match dimensions".to_string())
            })?;
            image::imageops::resize(
                &buffer,
                CANONICAL_WIDTH as u32,
                CANONICAL_HEIGHT as u32,
                self.filter.into(),
            )
            .into_raw()
        } else {
            debug!("Image already {}x{}, no resampling", CANONICAL_WIDTH, CANONICAL_HEIGHT);
            image.data.clone()
        };

        let pixels = Array3::from_shape_vec((CANONICAL_HEIGHT, CANONICAL_WIDTH, 3), rgb)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        Ok(CanonicalImage { pixels })
    }

    /// Extracts the three channel matrices, cast to f64, unscaled.
    ///
    /// The shape check is a defensive invariant: `normalize` already
    /// guarantees it, but a violation surfaces as a typed `ShapeError`
    /// rather than propagating a malformed matrix downstream.
    pub fn build_channels(
        &self,
        canonical: &CanonicalImage,
    ) -> Result<(Array2<f64>, Array2<f64>, Array2<f64>)> {
        let r = Self::extract_channel(&canonical.pixels, 0, "R")?;
        let g = Self::extract_channel(&canonical.pixels, 1, "G")?;
        let b = Self::extract_channel(&canonical.pixels, 2, "B")?;
        Ok((r, g, b))
    }

    fn extract_channel(
        pixels: &Array3<u8>,
        index: usize,
        channel: &'static str,
    ) -> Result<Array2<f64>> {
        // mapv copies, so the result owns its data and never aliases the source
        let matrix = pixels.index_axis(Axis(2), index).mapv(f64::from);
        let (rows, cols) = matrix.dim();
        if rows != CANONICAL_HEIGHT || cols != CANONICAL_WIDTH {
            return Err(ConversionError::ShapeError {
                channel,
                rows,
                cols,
                expected_rows: CANONICAL_HEIGHT,
                expected_cols: CANONICAL_WIDTH,
            });
        }
        Ok(matrix)
    }

    /// The 3x3 identity: no alignment transform for a single still image.
    pub fn build_transform(&self) -> Array2<f64> {
        Array2::eye(3)
    }

    /// Full-image corner matrix: row 0 x-coordinates, row 1 y-coordinates,
    /// corner order top-left, top-right, bottom-right, bottom-left.
    ///
    /// Zero-sized dimensions collapse to a zero-extent rectangle rather
    /// than underflowing.
    pub fn build_roi(&self, width: usize, height: usize) -> Array2<f64> {
        let w = width.saturating_sub(1) as f64;
        let h = height.saturating_sub(1) as f64;
        array![[0.0, w, w, 0.0], [0.0, 0.0, h, h]]
    }

    /// Runs the full normalize -> extract -> package sequence.
    pub fn assemble_record(&self, image: &DecodedImage) -> Result<MatrixRecord> {
        let canonical = self.normalize(image)?;
        let (i0r, i0g, i0b) = self.build_channels(&canonical)?;

        Ok(MatrixRecord {
            i0r,
            i0g,
            i0b,
            transfm: self.build_transform(),
            roi: self.build_roi(CANONICAL_WIDTH, CANONICAL_HEIGHT),
        })
    }
}
