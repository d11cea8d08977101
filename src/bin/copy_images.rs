//! Stages PNG files from one directory into another, ahead of a batch
//! conversion run. Per-file copy failures are reported and the run
//! continues.

use std::path::PathBuf;

use clap::Parser;
use rpca_datamat::logger;
use tracing::{error, info, warn};

/// Copy all PNG files from one directory to another.
#[derive(Parser)]
#[command(name = "copy_images", version)]
#[command(about = "Copy PNG files between directories")]
struct Cli {
    /// Source directory
    source: PathBuf,
    /// Target directory, created if absent
    target: PathBuf,
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();

    if !cli.target.exists() {
        std::fs::create_dir_all(&cli.target)?;
        info!(target = %cli.target.display(), "Created target directory");
    }

    let mut png_files = Vec::new();
    for entry in std::fs::read_dir(&cli.source)? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if path.is_file() && is_png {
            png_files.push(path);
        }
    }

    if png_files.is_empty() {
        warn!(source = %cli.source.display(), "No PNG files in source directory");
        return Ok(());
    }

    png_files.sort();
    let mut copied = 0usize;
    for path in png_files {
        let Some(name) = path.file_name() else {
            continue;
        };
        match std::fs::copy(&path, cli.target.join(name)) {
            Ok(_) => {
                copied += 1;
                info!(file = %name.to_string_lossy(), "Copied");
            }
            Err(e) => error!(file = %name.to_string_lossy(), "Copy failed: {}", e),
        }
    }

    info!(copied, target = %cli.target.display(), "Copy complete");
    Ok(())
}
