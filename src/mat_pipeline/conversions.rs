//! Pipeline conversions module
//!
//! This module contains orchestration logic for turning image files into
//! MAT data files, one at a time or a directory at a time.

mod batch;
mod image_to_mat;

#[cfg(test)]
mod tests;

pub use batch::{BatchSummary, SUPPORTED_EXTENSIONS};
pub use image_to_mat::ImageToMatPipeline;
