mod app;
mod convert;
mod input;
mod messages;
mod panels;
mod sink;
mod state;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use binview_core::config::ViewerConfig;
use clap::Parser;

#[derive(Parser)]
#[command(name = "binview-gui", about = "Interactive binary file viewer")]
#[command(version)]
struct Args {
    /// File to open
    file: Option<PathBuf>,

    /// Initial viewport width in pixels
    width: Option<usize>,

    /// Initial viewport height in pixels
    height: Option<usize>,

    /// Viewer config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let mut config = match args.config {
        Some(ref path) => load_config(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    config.validate()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32, config.height as f32])
            .with_min_inner_size([160.0, 120.0])
            .with_title("binview"),
        ..Default::default()
    };

    eframe::run_native(
        "binview",
        options,
        Box::new(move |cc| Ok(Box::new(app::BinviewApp::new(&cc.egui_ctx, config, args.file)))),
    )
    .map_err(|e| anyhow::anyhow!("Viewer window failed: {e}"))
}

fn load_config(path: &Path) -> Result<ViewerConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid viewer config")
}
