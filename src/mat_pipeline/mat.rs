//! MAT container module
//!
//! Serialization of matrix records into the MATLAB level-5 binary
//! container, plus the conversion configuration types.

pub mod mat5_writer;
pub mod types;
pub mod writer;

pub use mat5_writer::Mat5Writer;
pub use types::{ConversionConfig, ConversionConfigBuilder, ResizeFilter};
pub use writer::MatWriter;
