use std::path::PathBuf;

use anyhow::{Context, Result};
use binview_core::frame::SourceInfo;
use binview_core::io::stream::ByteStream;
use clap::Args;

use super::ViewArgs;
use crate::summary::print_source_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input file
    pub file: PathBuf,

    #[command(flatten)]
    pub view: ViewArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = args.view.resolve()?;
    let geometry = config.geometry()?;

    let stream = ByteStream::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let info = SourceInfo {
        filename: args.file.clone(),
        size_bytes: stream.size(),
    };

    print_source_summary(&info, geometry, &config);
    Ok(())
}
