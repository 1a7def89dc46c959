use tracing::warn;

use crate::frame::{Geometry, RgbaFrame};

/// Which scroll operation produced a partial update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Earlier data revealed: rows move toward the start of the frame and the
    /// new rows land in the last `rows` rows.
    Up,
    /// Later data revealed: rows move toward the end of the frame and the new
    /// rows land in the first `rows` rows.
    Down,
}

impl ScrollDirection {
    /// Frame row where the first newly decoded row lands.
    pub fn first_new_row(self, rows: usize, height: usize) -> usize {
        match self {
            Self::Up => height - rows,
            Self::Down => 0,
        }
    }
}

/// What a pager operation asks the display to do.
#[derive(Debug, PartialEq, Eq)]
pub enum FrameUpdate<'a> {
    /// Blocked by geometry (start or end of data). Nothing changed.
    None,
    /// Replace everything.
    FullFrame {
        geometry: Geometry,
        pixels: &'a [u8],
    },
    /// Shift the previous frame by `rows` and patch in `new_rows`.
    PartialShift {
        direction: ScrollDirection,
        rows: usize,
        new_rows: &'a [u8],
        geometry: Geometry,
    },
    /// The stream has just reached its end. Sent once per arrival.
    EndOfFile,
}

impl FrameUpdate<'_> {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Hand the update to a sink.
    pub fn deliver<S: DisplaySink + ?Sized>(&self, sink: &mut S) {
        match *self {
            Self::None => {}
            Self::FullFrame { geometry, pixels } => sink.full_frame(geometry, pixels),
            Self::PartialShift {
                direction,
                rows,
                new_rows,
                geometry,
            } => sink.partial_shift(direction, rows, new_rows, geometry),
            Self::EndOfFile => sink.end_of_file(),
        }
    }
}

/// Receiver of viewport updates, responsible for presenting them.
pub trait DisplaySink {
    fn full_frame(&mut self, geometry: Geometry, pixels: &[u8]);

    fn partial_shift(
        &mut self,
        direction: ScrollDirection,
        rows: usize,
        new_rows: &[u8],
        geometry: Geometry,
    );

    fn end_of_file(&mut self) {}
}

/// Shift `frame` by `rows` in `direction` and write `new_rows` into the gap.
pub fn apply_shift(
    frame: &mut RgbaFrame,
    direction: ScrollDirection,
    rows: usize,
    new_rows: &[u8],
) {
    match direction {
        ScrollDirection::Up => frame.shift_rows_toward_start(rows),
        ScrollDirection::Down => frame.shift_rows_toward_end(rows),
    }
    frame.write_rows(direction.first_new_row(rows, frame.height()), new_rows);
}

/// A sink that rebuilds the displayed frame purely from updates.
#[derive(Debug, Default)]
pub struct FrameMirror {
    frame: Option<RgbaFrame>,
    eof_notifications: usize,
}

impl FrameMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Option<&RgbaFrame> {
        self.frame.as_ref()
    }

    pub fn eof_notifications(&self) -> usize {
        self.eof_notifications
    }
}

impl DisplaySink for FrameMirror {
    fn full_frame(&mut self, geometry: Geometry, pixels: &[u8]) {
        match self.frame {
            Some(ref mut frame) if frame.geometry() == geometry => {
                frame.as_bytes_mut().copy_from_slice(pixels);
            }
            _ => self.frame = Some(RgbaFrame::from_pixels(geometry, pixels.to_vec())),
        }
    }

    fn partial_shift(
        &mut self,
        direction: ScrollDirection,
        rows: usize,
        new_rows: &[u8],
        geometry: Geometry,
    ) {
        match self.frame {
            Some(ref mut frame) if frame.geometry() == geometry => {
                apply_shift(frame, direction, rows, new_rows);
            }
            _ => warn!(%geometry, "Partial update without a matching full frame; ignored"),
        }
    }

    fn end_of_file(&mut self) {
        self.eof_notifications += 1;
    }
}
