use binview_core::frame::RgbaFrame;

/// Convert a decoded frame to an egui ColorImage.
///
/// Alpha is dropped, so the Rainbow "no data" sentinel shows as black.
pub fn frame_to_color_image(frame: &RgbaFrame) -> egui::ColorImage {
    let pixels = frame
        .as_bytes()
        .chunks_exact(4)
        .map(|px| egui::Color32::from_rgb(px[0], px[1], px[2]))
        .collect();

    egui::ColorImage {
        size: [frame.width(), frame.height()],
        pixels,
        source_size: Default::default(),
    }
}
