//! Raster image decoding module
//!
//! This module provides support for reading the common raster formats
//! (JPEG, PNG, BMP, TIFF) behind a reader trait, so that the conversion
//! pipeline never depends on a concrete decoder library.

pub mod image_crate_reader;
pub mod reader;
pub mod types;

pub use image_crate_reader::ImageCrateReader;
pub use reader::ImageReader;
pub use types::DecodedImage;
