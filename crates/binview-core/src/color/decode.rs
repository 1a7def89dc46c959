use crate::consts::CHANNEL_COUNT;

use super::mapper::{map_byte, ColorMode};

/// Decode one row of raw bytes into `out` (`raw.len() * CHANNEL_COUNT` bytes).
#[inline]
pub fn decode_row(raw: &[u8], mode: ColorMode, out: &mut [u8]) {
    debug_assert_eq!(out.len(), raw.len() * CHANNEL_COUNT);
    for (&byte, px) in raw.iter().zip(out.chunks_exact_mut(CHANNEL_COUNT)) {
        px.copy_from_slice(&map_byte(byte, mode));
    }
}

/// Decode whole rows, flipping them vertically.
///
/// `raw` holds rows in stream order. Output row `r` is raw row `rows - 1 - r`,
/// so the most recently read row comes first. Rows carry no state between
/// each other, which lets callers decode just the rows a scroll revealed.
pub fn decode_rows(raw: &[u8], width: usize, mode: ColorMode, out: &mut [u8]) {
    assert!(width > 0, "row width must be positive");
    assert_eq!(raw.len() % width, 0, "raw buffer is not a whole number of rows");
    assert_eq!(out.len(), raw.len() * CHANNEL_COUNT, "output buffer size mismatch");

    let rows = raw.len() / width;
    let stride = width * CHANNEL_COUNT;
    for (r, out_row) in out.chunks_exact_mut(stride).enumerate() {
        let src = rows - 1 - r;
        decode_row(&raw[src * width..(src + 1) * width], mode, out_row);
    }
}
