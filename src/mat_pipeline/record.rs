//! Matrix record construction module
//!
//! This is the core of the pipeline: shape normalization, channel
//! extraction, and construction of the auxiliary transform and ROI
//! matrices that the downstream RPCA algorithm expects.

pub mod builder;
pub mod types;


pub use builder::MatrixRecordBuilder;
pub use types::{
    CANONICAL_HEIGHT, CANONICAL_WIDTH, CanonicalImage, FIELD_BLUE, FIELD_GREEN, FIELD_RED,
    FIELD_ROI, FIELD_TRANSFORM, MatrixRecord,
};
