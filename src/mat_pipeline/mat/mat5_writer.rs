//! MATLAB level-5 MAT-file writer.
//!
//! Emits the uncompressed level-5 container (the pre-HDF5 variant, chosen
//! for broad compatibility): a 128-byte header followed by one `miMATRIX`
//! data element per variable. Numeric payloads are 64-bit floats in
//! column-major order, which is what MATLAB's `load` expects.

use std::io::Write;

use ndarray::Array2;
use tracing::debug;

use crate::mat_pipeline::common::error::{ConversionError, Result};
use crate::mat_pipeline::mat::writer::MatWriter;
use crate::mat_pipeline::record::types::MatrixRecord;

// MAT-file data type tags
const MI_INT8: u32 = 1;
const MI_INT32: u32 = 5;
const MI_UINT32: u32 = 6;
const MI_DOUBLE: u32 = 9;
const MI_MATRIX: u32 = 14;

// Array class for double-precision matrices
const MX_DOUBLE_CLASS: u32 = 6;

const HEADER_TEXT_LEN: usize = 116;
const VERSION: u16 = 0x0100;

pub struct Mat5Writer;

impl MatWriter for Mat5Writer {
    fn write_mat(&self, record: &MatrixRecord, output: &mut dyn Write) -> Result<()> {
        let mut buffer = Vec::new();

        write_header(&mut buffer);
        for (name, matrix) in record.fields() {
            debug!("Encoding MAT variable '{}' {:?}", name, matrix.dim());
            write_matrix_element(&mut buffer, name, matrix)?;
        }

        output
            .write_all(&buffer)
            .map_err(|e| ConversionError::SerializationError(e.to_string()))?;

        debug!("MAT encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

/// 128-byte file header: descriptive text padded with spaces, an unused
/// subsystem-data offset, the format version, and the endian indicator.
fn write_header(buffer: &mut Vec<u8>) {
    let description = format!(
        "MATLAB 5.0 MAT-file, Platform: {}, Created by: rpca_datamat {}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
    );

    let mut text = [b' '; HEADER_TEXT_LEN];
    let len = description.len().min(HEADER_TEXT_LEN);
    text[..len].copy_from_slice(&description.as_bytes()[..len]);
    buffer.extend_from_slice(&text);

    buffer.extend_from_slice(&[0u8; 8]);
    buffer.extend_from_slice(&VERSION.to_le_bytes());
    // The 'MI' endian indicator, written as a little-endian u16 so the
    // bytes on disk read "IM"
    buffer.extend_from_slice(&u16::from_be_bytes(*b"MI").to_le_bytes());
}

/// One `miMATRIX` element: array flags, dimensions, name, then the real
/// part. Every sub-element carries its own 8-byte tag and is padded to an
/// 8-byte boundary.
fn write_matrix_element(buffer: &mut Vec<u8>, name: &str, matrix: &Array2<f64>) -> Result<()> {
    let (rows, cols) = matrix.dim();
    let name_bytes = name.as_bytes();
    let name_padded = name_bytes.len().div_ceil(8) * 8;
    let data_size = rows
        .checked_mul(cols)
        .and_then(|n| n.checked_mul(8))
        .filter(|&n| n <= u32::MAX as usize)
        .ok_or_else(|| {
            ConversionError::SerializationError(format!(
                "matrix '{name}' of {rows}x{cols} exceeds the level-5 element size limit"
            ))
        })?;

    // Sub-element sizes, each including its own tag
    let total = 16 + 16 + (8 + name_padded) + (8 + data_size);

    buffer.extend_from_slice(&MI_MATRIX.to_le_bytes());
    buffer.extend_from_slice(&(total as u32).to_le_bytes());

    // Array flags: class in the low byte, no complex/global/logical flags
    buffer.extend_from_slice(&MI_UINT32.to_le_bytes());
    buffer.extend_from_slice(&8u32.to_le_bytes());
    buffer.extend_from_slice(&MX_DOUBLE_CLASS.to_le_bytes());
    buffer.extend_from_slice(&0u32.to_le_bytes());

    // Dimensions
    buffer.extend_from_slice(&MI_INT32.to_le_bytes());
    buffer.extend_from_slice(&8u32.to_le_bytes());
    buffer.extend_from_slice(&(rows as i32).to_le_bytes());
    buffer.extend_from_slice(&(cols as i32).to_le_bytes());

    // Array name, zero-padded to the 8-byte boundary
    buffer.extend_from_slice(&MI_INT8.to_le_bytes());
    buffer.extend_from_slice(&(name_bytes.len() as u32).to_le_bytes());
    buffer.extend_from_slice(name_bytes);
    buffer.resize(buffer.len() + (name_padded - name_bytes.len()), 0);

    // Real part, column-major
    buffer.extend_from_slice(&MI_DOUBLE.to_le_bytes());
    buffer.extend_from_slice(&(data_size as u32).to_le_bytes());
    for value in matrix.t().iter() {
        buffer.extend_from_slice(&value.to_le_bytes());
    }

    Ok(())
}
