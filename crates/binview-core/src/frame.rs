use std::fmt;
use std::path::PathBuf;

use crate::consts::{BYTES_PER_KB, CHANNEL_COUNT};
use crate::error::{BinviewError, Result};

/// One decoded pixel, RGBA8.
pub type Rgba = [u8; CHANNEL_COUNT];

/// Viewport dimensions: `width` bytes (= pixels) per row, `height` rows.
/// Both are nonzero and the decoded frame size fits in `usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    width: usize,
    height: usize,
}

impl Geometry {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let pixel_bytes = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNEL_COUNT));
        if width == 0 || height == 0 || pixel_bytes.is_none() {
            return Err(BinviewError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw bytes covered by one full frame.
    pub fn frame_bytes(&self) -> usize {
        self.width * self.height
    }

    /// Decoded bytes of one pixel row.
    pub fn row_stride(&self) -> usize {
        self.width * CHANNEL_COUNT
    }

    /// Decoded bytes of one full frame.
    pub fn pixel_bytes(&self) -> usize {
        self.frame_bytes() * CHANNEL_COUNT
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Row-major RGBA8 pixel buffer of exactly `width * height * CHANNEL_COUNT` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaFrame {
    geometry: Geometry,
    data: Vec<u8>,
}

impl RgbaFrame {
    /// A frame filled with transparent black.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            data: vec![0; geometry.pixel_bytes()],
        }
    }

    pub fn from_pixels(geometry: Geometry, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            geometry.pixel_bytes(),
            "pixel buffer does not match {geometry}"
        );
        Self { geometry, data }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn width(&self) -> usize {
        self.geometry.width
    }

    pub fn height(&self) -> usize {
        self.geometry.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn row(&self, row: usize) -> &[u8] {
        let stride = self.geometry.row_stride();
        &self.data[row * stride..(row + 1) * stride]
    }

    pub fn pixel(&self, col: usize, row: usize) -> Rgba {
        let idx = (row * self.geometry.width + col) * CHANNEL_COUNT;
        let mut px = [0u8; CHANNEL_COUNT];
        px.copy_from_slice(&self.data[idx..idx + CHANNEL_COUNT]);
        px
    }

    /// Move rows `[0, h - n)` to `[n, h)`. The last `n` rows are dropped and
    /// rows `[0, n)` keep stale content until overwritten.
    pub fn shift_rows_toward_end(&mut self, n: usize) {
        let h = self.geometry.height;
        assert!(n <= h, "cannot shift {n} rows in a {h}-row frame");
        let stride = self.geometry.row_stride();
        self.data.copy_within(0..(h - n) * stride, n * stride);
    }

    /// Move rows `[n, h)` to `[0, h - n)`. The first `n` rows are dropped and
    /// rows `[h - n, h)` keep stale content until overwritten.
    pub fn shift_rows_toward_start(&mut self, n: usize) {
        let h = self.geometry.height;
        assert!(n <= h, "cannot shift {n} rows in a {h}-row frame");
        let stride = self.geometry.row_stride();
        self.data.copy_within(n * stride..h * stride, 0);
    }

    /// Overwrite whole rows starting at `first_row` with `pixels`.
    pub fn write_rows(&mut self, first_row: usize, pixels: &[u8]) {
        let stride = self.geometry.row_stride();
        assert_eq!(pixels.len() % stride, 0, "partial row in pixel patch");
        let start = first_row * stride;
        self.data[start..start + pixels.len()].copy_from_slice(pixels);
    }
}

/// Metadata about the opened file.
#[derive(Clone, Debug)]
pub struct SourceInfo {
    pub filename: PathBuf,
    pub size_bytes: u64,
}

impl SourceInfo {
    /// Rows needed to show the whole file at `width` bytes per row.
    pub fn total_rows(&self, width: usize) -> u64 {
        self.size_bytes.div_ceil(width as u64)
    }

    /// Full frames needed to page through the whole file.
    pub fn pages(&self, geometry: Geometry) -> u64 {
        self.size_bytes.div_ceil(geometry.frame_bytes() as u64)
    }

    pub fn size_kb(&self) -> u64 {
        self.size_bytes / BYTES_PER_KB
    }

    /// "`pos`KB of `total`KB", the title-bar position report.
    pub fn position_label(&self, position: u64) -> String {
        format!("{}KB of {}KB", position / BYTES_PER_KB, self.size_kb())
    }
}
