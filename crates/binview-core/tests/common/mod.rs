#![allow(dead_code)]

use std::cell::Cell;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::rc::Rc;

use binview_core::color::{decode_rows, ColorMode};
use binview_core::frame::{Geometry, RgbaFrame};
use binview_core::io::stream::ByteStream;
use binview_core::viewport::{PagerOptions, ViewportPager};

/// Bytes 1..=251 repeating. Never zero, so padding is distinguishable from data.
pub fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8 + 1).collect()
}

pub fn options(max_batch_rows: usize, color_mode: ColorMode) -> PagerOptions {
    PagerOptions {
        max_batch_rows,
        color_mode,
    }
}

/// Pager over an in-memory stream.
pub fn open_pager(
    data: Vec<u8>,
    width: usize,
    height: usize,
    max_batch_rows: usize,
) -> ViewportPager<Cursor<Vec<u8>>> {
    let stream = ByteStream::from_reader(Cursor::new(data)).expect("cursor stream");
    let geometry = Geometry::new(width, height).expect("geometry");
    ViewportPager::init(stream, geometry, options(max_batch_rows, ColorMode::BiThreshold))
        .expect("init pager")
}

/// The frame a pager should show for the window starting at `start`,
/// computed straight from the source bytes.
pub fn expected_frame(data: &[u8], start: usize, geometry: Geometry, mode: ColorMode) -> RgbaFrame {
    let mut raw = vec![0u8; geometry.frame_bytes()];
    if start < data.len() {
        let end = (start + raw.len()).min(data.len());
        raw[..end - start].copy_from_slice(&data[start..end]);
    }
    let mut frame = RgbaFrame::new(geometry);
    decode_rows(&raw, geometry.width(), mode, frame.as_bytes_mut());
    frame
}

/// Write a buffer to a temporary file and return the handle.
///
/// The file stays alive as long as the returned `NamedTempFile` is not dropped.
pub fn write_test_file(data: &[u8]) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(data).expect("write test data");
    f.flush().expect("flush");
    f
}

/// In-memory reader whose reads fail while the shared flag is set.
pub struct FlakyReader {
    inner: Cursor<Vec<u8>>,
    fail: Rc<Cell<bool>>,
}

impl FlakyReader {
    pub fn new(data: Vec<u8>) -> (Self, Rc<Cell<bool>>) {
        let fail = Rc::new(Cell::new(false));
        (
            Self {
                inner: Cursor::new(data),
                fail: Rc::clone(&fail),
            },
            fail,
        )
    }
}

impl Read for FlakyReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fail.get() {
            return Err(io::Error::other("injected read failure"));
        }
        self.inner.read(buf)
    }
}

impl Seek for FlakyReader {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}
