use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::Result;
use crate::frame::RgbaFrame;

/// Save a frame as 8-bit RGB PNG. Alpha is dropped, matching what a display
/// shows: the Rainbow sentinel comes out black.
pub fn save_png(frame: &RgbaFrame, path: &Path) -> Result<()> {
    let w = frame.width();
    let h = frame.height();

    let mut img = RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let [r, g, b, _] = frame.pixel(col, row);
            img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
