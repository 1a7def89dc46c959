use std::path::PathBuf;

use binview_core::frame::SourceInfo;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,
    pub source_info: Option<SourceInfo>,
    pub log_messages: Vec<String>,
    /// Set once the pager reports the end of the data, cleared by any move back.
    pub at_eof: bool,
    pub show_about: bool,
    /// Last title sent to the window, to avoid resending every frame.
    pub window_title: String,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Size in pixels of the uploaded frame.
    pub image_size: Option<[usize; 2]>,
    /// Central panel size in physical pixels at the last resize.
    pub panel_pixels: Option<[usize; 2]>,
    /// Wheel delta not yet converted into whole notches.
    pub scroll_remainder: f32,
}
