use std::path::PathBuf;

use clap::Parser;
use rpca_datamat::logger;
use rpca_datamat::mat_pipeline::{ConversionConfig, ImageToMatPipeline};
use tracing::{error, info};

/// Convert raster images into the five-variable MAT data files consumed by
/// the RPCA specularity-removal step.
#[derive(Parser)]
#[command(name = "rpca_datamat", version)]
#[command(about = "Convert images to RPCA-ready .mat data files")]
struct Cli {
    /// Input image file, or a directory of images for batch mode
    input: PathBuf,
    /// Output .mat file, or a directory (created if absent)
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    let pipeline = ImageToMatPipeline::new(ConversionConfig::default());

    if cli.input.is_dir() {
        // Only output-directory creation failure aborts a batch
        let summary = pipeline.convert_dir(&cli.input, &cli.output)?;
        info!(
            converted = summary.converted.len(),
            failed = summary.failed.len(),
            "Batch finished"
        );
    } else {
        let output = if cli.output.is_dir() {
            let stem = cli
                .input
                .file_stem()
                .ok_or_else(|| anyhow::anyhow!("invalid input path: {}", cli.input.display()))?;
            cli.output.join(format!("{}.mat", stem.to_string_lossy()))
        } else {
            cli.output.clone()
        };

        match pipeline.convert_file(&cli.input, &output) {
            Ok(_) => info!(output = %output.display(), "Conversion successful!"),
            Err(e) => error!("Conversion failed: {}", e),
        }
    }

    Ok(())
}
