use std::path::PathBuf;

use anyhow::{Context, Result};
use binview_core::consts::{DEFAULT_BAND_COUNT, DEFAULT_BAND_ROWS, DEFAULT_BAND_WIDTH};
use binview_core::io::banded::{write_banded_file, BandSpec};
use clap::Args;

#[derive(Args)]
pub struct GenerateArgs {
    /// Output file
    pub output: PathBuf,

    /// Bytes per row
    #[arg(long, default_value_t = DEFAULT_BAND_WIDTH)]
    pub width: usize,

    /// Rows per band
    #[arg(long, default_value_t = DEFAULT_BAND_ROWS)]
    pub band_rows: usize,

    /// Number of (zero, 0xFF) band pairs
    #[arg(long, default_value_t = DEFAULT_BAND_COUNT)]
    pub bands: usize,
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    let spec = BandSpec {
        width: args.width,
        band_rows: args.band_rows,
        band_count: args.bands,
    };
    let written = write_banded_file(&args.output, &spec)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Wrote {} bytes ({} band pairs of {}x{}) to {}",
        written,
        spec.band_count,
        spec.width,
        spec.band_rows,
        args.output.display()
    );
    Ok(())
}
