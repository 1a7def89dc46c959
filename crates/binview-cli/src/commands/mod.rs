pub mod config;
pub mod generate;
pub mod info;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use binview_core::color::ColorMode;
use binview_core::config::ViewerConfig;
use clap::{Args, ValueEnum};

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Grayscale,
    BiThreshold,
    Rainbow,
}

impl From<ModeArg> for ColorMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Grayscale => ColorMode::Grayscale,
            ModeArg::BiThreshold => ColorMode::BiThreshold,
            ModeArg::Rainbow => ColorMode::Rainbow,
        }
    }
}

/// Viewport flags shared by `info` and `render`. Flags override the config file.
#[derive(Args)]
pub struct ViewArgs {
    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bytes (= pixels) per row
    #[arg(long)]
    pub width: Option<usize>,

    /// Rows per frame
    #[arg(long)]
    pub height: Option<usize>,
}

impl ViewArgs {
    pub fn resolve(&self) -> Result<ViewerConfig> {
        let mut config = match self.config {
            Some(ref path) => load_config(path)?,
            None => ViewerConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn load_config(path: &Path) -> Result<ViewerConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid viewer config")
}
