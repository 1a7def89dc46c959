use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::consts::{DEFAULT_BAND_COUNT, DEFAULT_BAND_ROWS, DEFAULT_BAND_WIDTH};
use crate::error::Result;

/// Layout of a banded test file: `band_count` pairs of a zero band followed by
/// a 0xFF band, each `width * band_rows` bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandSpec {
    pub width: usize,
    pub band_rows: usize,
    pub band_count: usize,
}

impl Default for BandSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_BAND_WIDTH,
            band_rows: DEFAULT_BAND_ROWS,
            band_count: DEFAULT_BAND_COUNT,
        }
    }
}

impl BandSpec {
    pub fn band_bytes(&self) -> usize {
        self.width * self.band_rows
    }

    pub fn total_bytes(&self) -> u64 {
        (self.band_bytes() * 2 * self.band_count) as u64
    }
}

/// Write the banded pattern to `writer`. Returns the number of bytes written.
pub fn write_banded(writer: &mut impl Write, spec: &BandSpec) -> Result<u64> {
    let low = vec![0u8; spec.band_bytes()];
    let high = vec![0xFFu8; spec.band_bytes()];

    for _ in 0..spec.band_count {
        writer.write_all(&low)?;
        writer.write_all(&high)?;
    }
    writer.flush()?;

    Ok(spec.total_bytes())
}

/// Create `path` and fill it with the banded pattern.
pub fn write_banded_file(path: &Path, spec: &BandSpec) -> Result<u64> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_banded(&mut writer, spec)
}

/// The banded pattern as an in-memory buffer.
pub fn banded_bytes(spec: &BandSpec) -> Vec<u8> {
    let mut buf = Vec::with_capacity(spec.total_bytes() as usize);
    for _ in 0..spec.band_count {
        buf.resize(buf.len() + spec.band_bytes(), 0x00);
        buf.resize(buf.len() + spec.band_bytes(), 0xFF);
    }
    buf
}
