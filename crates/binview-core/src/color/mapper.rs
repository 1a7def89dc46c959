use std::fmt;

use serde::{Deserialize, Serialize};

use crate::frame::Rgba;

const OPAQUE: u8 = 255;
const BLACK: Rgba = [0, 0, 0, OPAQUE];
/// Rainbow's "no data" marker. Fully transparent, so it never equals a hue.
const RAINBOW_SENTINEL: Rgba = [0, 0, 0, 0];

/// Byte-to-color visualization mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorMode {
    /// Intensity ramp: the byte value on every channel.
    Grayscale,
    /// Zero black, low nonzero (1..=126) blue, high (127..=255) red.
    #[default]
    BiThreshold,
    /// Cyclic hue ramp over 1..=255 with zero as a transparent sentinel.
    Rainbow,
}

impl ColorMode {
    pub const ALL: [ColorMode; 3] = [Self::Grayscale, Self::BiThreshold, Self::Rainbow];

    /// The following mode, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Grayscale => Self::BiThreshold,
            Self::BiThreshold => Self::Rainbow,
            Self::Rainbow => Self::Grayscale,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grayscale => write!(f, "Grayscale"),
            Self::BiThreshold => write!(f, "Bi-threshold"),
            Self::Rainbow => write!(f, "Rainbow"),
        }
    }
}

/// Map one byte to its display color. Total over all 256 values.
#[inline]
pub fn map_byte(byte: u8, mode: ColorMode) -> Rgba {
    match mode {
        ColorMode::Grayscale => [byte, byte, byte, OPAQUE],
        ColorMode::BiThreshold => match byte {
            0 => BLACK,
            1..=126 => [0, 0, byte + 128, OPAQUE],
            127..=255 => [byte, 0, 0, OPAQUE],
        },
        ColorMode::Rainbow => {
            if byte == 0 {
                RAINBOW_SENTINEL
            } else {
                let [r, g, b] = hue_to_rgb(byte as f32 / 255.0);
                [r, g, b, OPAQUE]
            }
        }
    }
}

/// Fully saturated, full value HSV color for `hue` in [0, 1].
///
/// Six linear phases, one per sixth of the hue circle; hue 1.0 wraps to red.
fn hue_to_rgb(hue: f32) -> [u8; 3] {
    let h = hue.clamp(0.0, 1.0) * 6.0;
    let phase = (h as usize) % 6;
    let rising = h - h.floor();
    let falling = 1.0 - rising;

    let (r, g, b) = match phase {
        0 => (1.0, rising, 0.0),
        1 => (falling, 1.0, 0.0),
        2 => (0.0, 1.0, rising),
        3 => (0.0, falling, 1.0),
        4 => (rising, 0.0, 1.0),
        _ => (1.0, 0.0, falling),
    };

    [to_channel(r), to_channel(g), to_channel(b)]
}

fn to_channel(v: f32) -> u8 {
    (v * 255.0).round() as u8
}
