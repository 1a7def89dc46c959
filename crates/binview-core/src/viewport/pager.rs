use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::color::{decode_rows, ColorMode};
use crate::config::ViewerConfig;
use crate::consts::{CHANNEL_COUNT, DEFAULT_MAX_BATCH_ROWS};
use crate::error::Result;
use crate::frame::{Geometry, RgbaFrame};
use crate::io::stream::ByteStream;

use super::update::{apply_shift, FrameUpdate, ScrollDirection};

/// Pager settings that are not part of the geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerOptions {
    /// Upper bound on rows loaded by one scroll call.
    pub max_batch_rows: usize,
    pub color_mode: ColorMode,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            max_batch_rows: DEFAULT_MAX_BATCH_ROWS,
            color_mode: ColorMode::default(),
        }
    }
}

impl From<&ViewerConfig> for PagerOptions {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            max_batch_rows: config.max_batch_rows,
            color_mode: config.color_mode,
        }
    }
}

/// Page-key jump direction. Each jump moves the window by one full frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpDirection {
    Forward,
    Back,
}

/// Keeps a decoded window of `width * height` bytes in step with a position
/// inside a much larger stream.
///
/// `top_offset` is the logical stream offset just past the last loaded row.
/// It is always a multiple of the row width and always equals
/// `window_start + frame_bytes`, even when a read near the end of the data
/// came up short and the missing rows were filled with zeros.
///
/// Frame rows are stored most recently read first: frame row `r` holds window
/// row `height - 1 - r`.
pub struct ViewportPager<R = File> {
    stream: ByteStream<R>,
    geometry: Geometry,
    mode: ColorMode,
    max_batch_rows: usize,
    top_offset: u64,
    /// Window bytes in stream order.
    raw: Vec<u8>,
    /// Read target for full loads, swapped with `raw` on success.
    spare_raw: Vec<u8>,
    frame: RgbaFrame,
    scratch_raw: Vec<u8>,
    scratch_pixels: Vec<u8>,
    eof_notified: bool,
}

impl ViewportPager<File> {
    /// Open `path` and load its first frame.
    pub fn open(path: &Path, geometry: Geometry, options: PagerOptions) -> Result<Self> {
        Self::init(ByteStream::open(path)?, geometry, options)
    }
}

impl<R: Read + Seek> ViewportPager<R> {
    /// Load the first frame of `stream`.
    pub fn init(mut stream: ByteStream<R>, geometry: Geometry, options: PagerOptions) -> Result<Self> {
        assert!(options.max_batch_rows > 0, "max_batch_rows must be positive");
        if stream.position() != 0 {
            stream.seek(SeekFrom::Start(0))?;
        }

        let mut pager = Self {
            stream,
            geometry,
            mode: options.color_mode,
            max_batch_rows: options.max_batch_rows,
            top_offset: 0,
            raw: Vec::new(),
            spare_raw: Vec::new(),
            frame: RgbaFrame::new(geometry),
            scratch_raw: Vec::new(),
            scratch_pixels: Vec::new(),
            eof_notified: false,
        };
        pager.load_window(geometry)?;
        info!(%geometry, mode = %pager.mode, size = pager.stream.size(), "Viewport initialized");
        Ok(pager)
    }

    /// Reveal later data: read up to `requested_rows` new rows and push them in
    /// at the start of the frame.
    pub fn scroll_down(&mut self, requested_rows: usize) -> Result<FrameUpdate<'_>> {
        self.check_alignment();
        let n = self.batch_rows(requested_rows);
        if n == 0 {
            return Ok(FrameUpdate::None);
        }
        if self.stream.at_end() {
            return Ok(self.notify_end_of_file());
        }

        let saved = self.stream.position();
        let want = n * self.geometry.width();
        let got = match self.stream.read(&mut self.scratch_raw[..want]) {
            Ok(got) => got,
            Err(e) => {
                self.restore_position(saved);
                return Err(e);
            }
        };
        if got == 0 {
            return Ok(self.notify_end_of_file());
        }
        self.scratch_raw[got..want].fill(0);

        let frame_bytes = self.geometry.frame_bytes();
        self.raw.copy_within(want.., 0);
        self.raw[frame_bytes - want..].copy_from_slice(&self.scratch_raw[..want]);
        self.top_offset += want as u64;

        debug!(rows = n, bytes = got, top_offset = self.top_offset, "Scrolled down");
        Ok(self.patch(ScrollDirection::Down, n))
    }

    /// Reveal earlier data: read up to `requested_rows` rows preceding the
    /// window and push them in at the end of the frame.
    pub fn scroll_up(&mut self, requested_rows: usize) -> Result<FrameUpdate<'_>> {
        self.check_alignment();
        let width = self.geometry.width() as u64;
        let frame_bytes = self.geometry.frame_bytes() as u64;
        let current = self.top_offset;
        if current <= frame_bytes {
            return Ok(FrameUpdate::None);
        }

        let available = ((current - frame_bytes) / width) as usize;
        let n = self.batch_rows(requested_rows).min(available);
        if n == 0 {
            return Ok(FrameUpdate::None);
        }

        let saved = self.stream.position();
        if let Err(e) = self.read_rows_before_window(n) {
            self.restore_position(saved);
            return Err(e);
        }

        let want = n * self.geometry.width();
        let frame_len = frame_bytes as usize;
        self.raw.copy_within(..frame_len - want, want);
        self.raw[..want].copy_from_slice(&self.scratch_raw[..want]);
        self.top_offset = current - want as u64;
        self.eof_notified = false;

        debug!(rows = n, top_offset = self.top_offset, "Scrolled up");
        Ok(self.patch(ScrollDirection::Up, n))
    }

    /// Change the row width and height, keeping the window start as close to
    /// its old position as the new row alignment allows.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<FrameUpdate<'_>> {
        let geometry = Geometry::new(width, height)?;
        self.check_alignment();

        let old_frame_bytes = self.geometry.frame_bytes() as u64;
        let mut start = self.top_offset.saturating_sub(old_frame_bytes);
        start -= start % width as u64;

        let saved = self.stream.position();
        if let Err(e) = self.seek_and_load(start, geometry) {
            self.restore_position(saved);
            return Err(e);
        }
        self.eof_notified = false;

        debug!(%geometry, window_start = start, "Viewport resized");
        Ok(self.full_frame())
    }

    /// Switch the color mapping and re-decode the loaded bytes. No I/O.
    pub fn set_mode(&mut self, mode: ColorMode) -> FrameUpdate<'_> {
        self.mode = mode;
        decode_rows(
            &self.raw,
            self.geometry.width(),
            mode,
            self.frame.as_bytes_mut(),
        );
        debug!(%mode, "Color mode changed");
        self.full_frame()
    }

    /// Page by one full frame.
    ///
    /// Forward (PageDown) reloads from `top_offset`, i.e. `window_start + 1`
    /// frame. Back (PageUp) reloads from `top_offset - 2` frames, floored at
    /// zero, i.e. `window_start - 1` frame. The two-frame distance is measured
    /// from the top offset, not from the window start.
    pub fn jump(&mut self, direction: JumpDirection) -> Result<FrameUpdate<'_>> {
        self.check_alignment();
        let frame_bytes = self.geometry.frame_bytes() as u64;
        let target = match direction {
            JumpDirection::Forward => {
                if self.stream.at_end() || self.top_offset >= self.stream.size() {
                    return Ok(FrameUpdate::None);
                }
                self.top_offset
            }
            JumpDirection::Back => {
                if self.window_start() == 0 {
                    return Ok(FrameUpdate::None);
                }
                self.top_offset.saturating_sub(2 * frame_bytes)
            }
        };

        let saved = self.stream.position();
        if let Err(e) = self.seek_and_load(target, self.geometry) {
            self.restore_position(saved);
            return Err(e);
        }
        self.eof_notified = false;

        debug!(?direction, window_start = target, "Jumped");
        Ok(self.full_frame())
    }

    /// The whole current frame as an update.
    pub fn full_frame(&self) -> FrameUpdate<'_> {
        FrameUpdate::FullFrame {
            geometry: self.geometry,
            pixels: self.frame.as_bytes(),
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn color_mode(&self) -> ColorMode {
        self.mode
    }

    pub fn max_batch_rows(&self) -> usize {
        self.max_batch_rows
    }

    /// Stream offset just past the last loaded row.
    pub fn top_offset(&self) -> u64 {
        self.top_offset
    }

    /// Stream offset of the first loaded byte.
    pub fn window_start(&self) -> u64 {
        self.top_offset - self.geometry.frame_bytes() as u64
    }

    /// Physical cursor of the underlying stream.
    pub fn stream_position(&self) -> u64 {
        self.stream.position()
    }

    pub fn stream_size(&self) -> u64 {
        self.stream.size()
    }

    pub fn at_end(&self) -> bool {
        self.stream.at_end()
    }

    pub fn frame(&self) -> &RgbaFrame {
        &self.frame
    }

    /// Loaded window bytes in stream order, zero-padded past the end of data.
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw
    }

    fn batch_rows(&self, requested_rows: usize) -> usize {
        requested_rows
            .min(self.max_batch_rows)
            .min(self.geometry.height())
    }

    /// Read `n` rows ending where the window starts into scratch, leaving the
    /// cursor `n` rows before the old top offset.
    fn read_rows_before_window(&mut self, n: usize) -> Result<()> {
        let width = self.geometry.width() as i64;
        let height = self.geometry.height() as i64;
        let want = n * self.geometry.width();

        // A short read at the end of the data can leave the cursor mid-row.
        if self.stream.position() != self.top_offset {
            self.stream.seek(SeekFrom::Start(self.top_offset))?;
        }
        self.stream.seek(SeekFrom::Current(-width * (n as i64 + height)))?;
        let got = self.stream.read(&mut self.scratch_raw[..want])?;
        self.scratch_raw[got..want].fill(0);
        self.stream.seek(SeekFrom::Current(width * height - got as i64))?;

        debug_assert_eq!(self.stream.position(), self.top_offset - want as u64);
        Ok(())
    }

    fn seek_and_load(&mut self, start: u64, geometry: Geometry) -> Result<()> {
        self.stream.seek(SeekFrom::Start(start))?;
        self.load_window(geometry)
    }

    /// Read one full frame from the cursor. State is only touched once the
    /// read has succeeded.
    fn load_window(&mut self, geometry: Geometry) -> Result<()> {
        let start = self.stream.position();
        let frame_bytes = geometry.frame_bytes();

        if self.spare_raw.len() != frame_bytes {
            self.spare_raw = vec![0; frame_bytes];
        }
        let got = self.stream.read(&mut self.spare_raw)?;
        self.spare_raw[got..].fill(0);
        std::mem::swap(&mut self.raw, &mut self.spare_raw);

        if self.frame.geometry() != geometry {
            self.frame = RgbaFrame::new(geometry);
        }
        let batch_bytes = self.max_batch_rows * geometry.width();
        if self.scratch_raw.len() != batch_bytes {
            self.scratch_raw = vec![0; batch_bytes];
            self.scratch_pixels = vec![0; batch_bytes * CHANNEL_COUNT];
        }

        self.geometry = geometry;
        decode_rows(&self.raw, geometry.width(), self.mode, self.frame.as_bytes_mut());
        self.top_offset = start + frame_bytes as u64;

        debug!(window_start = start, bytes = got, %geometry, "Loaded full frame");
        self.check_alignment();
        Ok(())
    }

    /// Decode the `n` rows in scratch and patch them into the frame.
    fn patch(&mut self, direction: ScrollDirection, n: usize) -> FrameUpdate<'_> {
        let width = self.geometry.width();
        let bytes = n * width;
        let pixels = bytes * CHANNEL_COUNT;

        decode_rows(
            &self.scratch_raw[..bytes],
            width,
            self.mode,
            &mut self.scratch_pixels[..pixels],
        );
        apply_shift(&mut self.frame, direction, n, &self.scratch_pixels[..pixels]);

        FrameUpdate::PartialShift {
            direction,
            rows: n,
            new_rows: &self.scratch_pixels[..pixels],
            geometry: self.geometry,
        }
    }

    fn notify_end_of_file(&mut self) -> FrameUpdate<'static> {
        if self.eof_notified {
            return FrameUpdate::None;
        }
        self.eof_notified = true;
        info!(size = self.stream.size(), "End of file");
        FrameUpdate::EndOfFile
    }

    fn restore_position(&mut self, saved: u64) {
        match self.stream.seek(SeekFrom::Start(saved)) {
            Ok(_) => warn!(offset = saved, "Stream position restored after I/O error"),
            Err(e) => warn!(error = %e, offset = saved, "Failed to restore stream position"),
        }
    }

    fn check_alignment(&self) {
        let width = self.geometry.width() as u64;
        assert!(
            self.top_offset % width == 0,
            "viewport offset {} is not a multiple of row width {}",
            self.top_offset,
            width
        );
        assert!(
            self.top_offset >= self.geometry.frame_bytes() as u64,
            "viewport offset {} precedes one full frame",
            self.top_offset
        );
    }
}
