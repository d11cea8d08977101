//! Image to MAT-file pipeline module
//!
//! This module provides a structured approach to converting raster images
//! into the five-variable MATLAB data files consumed by the RPCA
//! specularity-removal step, with separate modules for image decoding,
//! record construction, MAT serialization, and conversion orchestration.

pub mod common;
pub mod conversions;
pub mod decode;
pub mod mat;
pub mod record;

pub use common::{
    ConversionError,
    Result,
};

pub use decode::{
    DecodedImage,
    ImageCrateReader,
    ImageReader,
};

pub use record::{
    CANONICAL_HEIGHT,
    CANONICAL_WIDTH,
    CanonicalImage,
    MatrixRecord,
    MatrixRecordBuilder,
};

pub use mat::{
    ConversionConfig,
    ConversionConfigBuilder,
    Mat5Writer,
    MatWriter,
    ResizeFilter,
};

pub use conversions::{
    BatchSummary,
    ImageToMatPipeline,
};
