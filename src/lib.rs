//! Prepares raster images for a downstream robust-PCA specularity-removal
//! algorithm by packing per-channel intensity matrices into MATLAB level-5
//! data files.

pub mod logger;
pub mod mat_pipeline;
