use std::path::PathBuf;
use std::sync::mpsc;

use binview_core::color::ColorMode;
use binview_core::config::ViewerConfig;
use binview_core::error::Result as CoreResult;
use binview_core::frame::{Geometry, SourceInfo};
use binview_core::io::snapshot::save_png;
use binview_core::viewport::{FrameUpdate, PagerOptions, ViewportPager};
use tracing::{info, warn};

use crate::input::{self, FrameInput};
use crate::messages::DialogResult;
use crate::panels;
use crate::sink::TextureSink;
use crate::state::{UIState, ViewportState};

/// An open file and the pager walking it.
pub struct Session {
    pub pager: ViewportPager,
    pub info: SourceInfo,
}

pub struct BinviewApp {
    pub dialog_tx: mpsc::Sender<DialogResult>,
    pub dialog_rx: mpsc::Receiver<DialogResult>,
    pub config: ViewerConfig,
    pub session: Option<Session>,
    pub sink: TextureSink,
    pub ui_state: UIState,
    pub viewport: ViewportState,
}

impl BinviewApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig, file: Option<PathBuf>) -> Self {
        let (dialog_tx, dialog_rx) = mpsc::channel();
        let mut app = Self {
            dialog_tx,
            dialog_rx,
            config,
            session: None,
            sink: TextureSink::default(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
        };
        if let Some(path) = file {
            app.open_file(path);
        }
        ctx.request_repaint();
        app
    }

    pub fn open_file(&mut self, path: PathBuf) {
        let geometry = match self.viewport.panel_pixels {
            Some([w, h]) => Geometry::new(w, h),
            None => self.config.geometry(),
        };
        let options = PagerOptions::from(&self.config);
        let opened = geometry.and_then(|g| ViewportPager::open(&path, g, options));

        match opened {
            Ok(pager) => {
                let info = SourceInfo {
                    filename: path.clone(),
                    size_bytes: pager.stream_size(),
                };
                self.ui_state.add_log(format!(
                    "Opened: {} ({} KB, {} at {})",
                    path.display(),
                    info.size_kb(),
                    pager.color_mode(),
                    pager.geometry()
                ));
                pager.full_frame().deliver(&mut self.sink);
                self.ui_state.source_info = Some(info.clone());
                self.ui_state.file_path = Some(path);
                self.ui_state.at_eof = false;
                self.session = Some(Session { pager, info });
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Open failed");
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }

    pub fn save_snapshot(&mut self, path: PathBuf) {
        let Some(frame) = self.sink.frame() else {
            self.ui_state.add_log("Nothing to save".into());
            return;
        };
        match save_png(frame, &path) {
            Ok(()) => self.ui_state.add_log(format!("Saved: {}", path.display())),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Resize the pager to the central panel's size in physical pixels.
    pub fn resize_viewport(&mut self, pixels: [usize; 2]) {
        if pixels[0] == 0 || pixels[1] == 0 || self.viewport.panel_pixels == Some(pixels) {
            return;
        }
        self.viewport.panel_pixels = Some(pixels);
        self.config.width = pixels[0];
        self.config.height = pixels[1];

        if let Some(session) = self.session.as_mut() {
            let result = session.pager.resize(pixels[0], pixels[1]);
            deliver(result, &mut self.sink, &mut self.ui_state);
        }
    }

    pub fn set_mode(&mut self, mode: ColorMode) {
        self.config.color_mode = mode;
        if let Some(session) = self.session.as_mut() {
            if session.pager.color_mode() != mode {
                let update = session.pager.set_mode(mode);
                update.deliver(&mut self.sink);
                self.ui_state.add_log(format!("Color mode: {mode}"));
            }
        }
    }

    fn poll_dialogs(&mut self) {
        while let Ok(result) = self.dialog_rx.try_recv() {
            match result {
                DialogResult::Open { path } => self.open_file(path),
                DialogResult::SaveSnapshot { path } => self.save_snapshot(path),
            }
        }
    }

    /// Run this frame's coalesced input against the pager: at most one scroll
    /// call, one jump and one mode change.
    fn handle_input(&mut self, input: FrameInput) {
        if let Some(change) = input.mode {
            let mode = change.apply(self.config.color_mode);
            self.set_mode(mode);
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };

        if input.scroll_rows > 0 {
            let result = session.pager.scroll_up(input.scroll_rows as usize);
            deliver(result, &mut self.sink, &mut self.ui_state);
        } else if input.scroll_rows < 0 {
            let result = session.pager.scroll_down(input.scroll_rows.unsigned_abs() as usize);
            deliver(result, &mut self.sink, &mut self.ui_state);
        }

        if let Some(direction) = input.jump {
            let result = session.pager.jump(direction);
            deliver(result, &mut self.sink, &mut self.ui_state);
        }
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let Some(ref session) = self.session else {
            return;
        };
        let position = session.pager.top_offset().min(session.info.size_bytes);
        let title = format!("binview: {}", session.info.position_label(position));
        if title != self.ui_state.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.ui_state.window_title = title;
        }
    }
}

/// Hand a pager result to the sink, logging end of file and errors. On error
/// the sink keeps showing the last good frame.
fn deliver(result: CoreResult<FrameUpdate<'_>>, sink: &mut TextureSink, ui_state: &mut UIState) {
    match result {
        Ok(update) => {
            if !update.is_none() && !matches!(update, FrameUpdate::EndOfFile) {
                ui_state.at_eof = false;
            }
            update.deliver(sink);
            if sink.take_end_of_file() {
                info!("End of file reached");
                ui_state.at_eof = true;
                ui_state.add_log("End of file".into());
            }
        }
        Err(e) => {
            warn!(error = %e, "Viewport update failed");
            ui_state.add_log(format!("ERROR: {e}"));
        }
    }
}

impl eframe::App for BinviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_dialogs();

        let input = input::collect(ctx, &mut self.viewport.scroll_remainder, self.config.scroll_speed);
        self.handle_input(input);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        self.sink.upload(ctx, &mut self.viewport);
        self.update_title(ctx);

        if self.ui_state.show_about {
            egui::Window::new("About binview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("binview");
                        ui.label("Binary file viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        ui.label("Wheel: scroll   PgUp/PgDn: page   M, 1-3: color mode");
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
