//! Directory batch driver.
//!
//! Per-file failures are logged and collected; the run continues. The only
//! fatal condition is failing to create the output directory, since no
//! output at all can be produced in that case.

use std::path::{Path, PathBuf};

use tracing::{error, info, instrument};

use crate::mat_pipeline::common::error::{ConversionError, Result};
use crate::mat_pipeline::conversions::image_to_mat::ImageToMatPipeline;
use crate::mat_pipeline::decode::ImageReader;
use crate::mat_pipeline::mat::MatWriter;

/// Image extensions considered for batch processing
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tif", "tiff"];

/// Outcome of a directory run: every input is accounted for in one of the
/// two lists.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub converted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, ConversionError)>,
}

impl<R: ImageReader, W: MatWriter> ImageToMatPipeline<R, W> {
    #[instrument(skip(self, input_dir, output_dir))]
    pub fn convert_dir<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Q,
    ) -> Result<BatchSummary> {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();

        std::fs::create_dir_all(output_dir).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", output_dir.display(), e))
        })?;

        let inputs = collect_images(input_dir, self.config().case_insensitive_extensions)?;
        info!(
            input = %input_dir.display(),
            count = inputs.len(),
            "Batch conversion starting"
        );

        let mut summary = BatchSummary::default();
        for input in inputs {
            // Matched files always have an extension, so a stem exists
            let Some(stem) = input.file_stem() else {
                continue;
            };
            let output = output_dir.join(format!("{}.mat", stem.to_string_lossy()));

            match self.convert_file(&input, &output) {
                Ok(()) => {
                    info!(
                        input = %input.display(),
                        output = %output.display(),
                        "Converted"
                    );
                    summary.converted.push(output);
                }
                Err(e) => {
                    error!(
                        input = %input.display(),
                        error = %e,
                        "Conversion failed, continuing with remaining files"
                    );
                    summary.failed.push((input, e));
                }
            }
        }

        info!(
            converted = summary.converted.len(),
            failed = summary.failed.len(),
            "Batch conversion complete"
        );
        Ok(summary)
    }
}

/// Collects supported image files from a directory, sorted for a
/// deterministic processing order. Subdirectories are not descended into.
fn collect_images(dir: &Path, case_insensitive: bool) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| ConversionError::InputReadError(format!("{}: {}", dir.display(), e)))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let matches = if case_insensitive {
            SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
        } else {
            SUPPORTED_EXTENSIONS.contains(&ext)
        };
        if matches {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
