use binview_core::frame::Geometry;
use binview_core::viewport::{DisplaySink, FrameMirror, ScrollDirection};

use crate::convert::frame_to_color_image;
use crate::state::ViewportState;

/// Display sink that rebuilds the frame from updates and uploads it to an
/// egui texture at most once per UI frame.
#[derive(Default)]
pub struct TextureSink {
    mirror: FrameMirror,
    dirty: bool,
    eof_seen: usize,
}

impl TextureSink {
    /// Push the mirrored frame to the GPU if anything changed since the last upload.
    pub fn upload(&mut self, ctx: &egui::Context, viewport: &mut ViewportState) {
        if !self.dirty {
            return;
        }
        let Some(frame) = self.mirror.frame() else {
            return;
        };

        let image = frame_to_color_image(frame);
        let size = image.size;
        match viewport.texture {
            Some(ref mut texture) if texture.size() == size => {
                texture.set(image, egui::TextureOptions::NEAREST);
            }
            _ => {
                viewport.texture =
                    Some(ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST));
            }
        }
        viewport.image_size = Some(size);
        self.dirty = false;
    }

    /// Whether an end-of-file notification arrived since the last call.
    pub fn take_end_of_file(&mut self) -> bool {
        let count = self.mirror.eof_notifications();
        let fresh = count > self.eof_seen;
        self.eof_seen = count;
        fresh
    }

    pub fn frame(&self) -> Option<&binview_core::frame::RgbaFrame> {
        self.mirror.frame()
    }
}

impl DisplaySink for TextureSink {
    fn full_frame(&mut self, geometry: Geometry, pixels: &[u8]) {
        self.mirror.full_frame(geometry, pixels);
        self.dirty = true;
    }

    fn partial_shift(
        &mut self,
        direction: ScrollDirection,
        rows: usize,
        new_rows: &[u8],
        geometry: Geometry,
    ) {
        self.mirror.partial_shift(direction, rows, new_rows, geometry);
        self.dirty = true;
    }

    fn end_of_file(&mut self) {
        self.mirror.end_of_file();
    }
}
