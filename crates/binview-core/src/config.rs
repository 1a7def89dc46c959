use serde::{Deserialize, Serialize};

use crate::color::ColorMode;
use crate::consts::{DEFAULT_HEIGHT, DEFAULT_MAX_BATCH_ROWS, DEFAULT_SCROLL_SPEED, DEFAULT_WIDTH};
use crate::error::{BinviewError, Result};
use crate::frame::Geometry;

/// Viewer settings, stored as TOML. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Bytes (= pixels) per row.
    pub width: usize,
    /// Rows per frame.
    pub height: usize,
    /// Upper bound on rows loaded by one scroll step.
    pub max_batch_rows: usize,
    /// Rows scrolled per mouse-wheel notch.
    pub scroll_speed: usize,
    pub color_mode: ColorMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_batch_rows: DEFAULT_MAX_BATCH_ROWS,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            color_mode: ColorMode::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BinviewError::InvalidConfig(format!(
                "viewport must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_batch_rows == 0 {
            return Err(BinviewError::InvalidConfig(
                "max_batch_rows must be positive".into(),
            ));
        }
        if self.scroll_speed == 0 {
            return Err(BinviewError::InvalidConfig(
                "scroll_speed must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn geometry(&self) -> Result<Geometry> {
        self.validate()?;
        Geometry::new(self.width, self.height)
    }
}
