/// Number of channels in a decoded pixel (R, G, B, A).
pub const CHANNEL_COUNT: usize = 4;

/// Default viewport width in bytes (= pixels) per row.
pub const DEFAULT_WIDTH: usize = 500;

/// Default viewport height in rows.
pub const DEFAULT_HEIGHT: usize = 800;

/// Upper bound on rows loaded by a single scroll step.
pub const DEFAULT_MAX_BATCH_ROWS: usize = 40;

/// Rows scrolled per mouse-wheel notch.
pub const DEFAULT_SCROLL_SPEED: usize = 8;

/// Bytes per kilobyte in position reports (decimal, as shown in the title bar).
pub const BYTES_PER_KB: u64 = 1000;

/// Width in bytes of each row written by the banded test-file generator.
pub const DEFAULT_BAND_WIDTH: usize = 400;

/// Rows per band written by the banded test-file generator.
pub const DEFAULT_BAND_ROWS: usize = 200;

/// Number of (zero, 0xFF) band pairs written by the banded test-file generator.
pub const DEFAULT_BAND_COUNT: usize = 10;
