use crate::app::BinviewApp;

pub fn show(ctx: &egui::Context, app: &mut BinviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref session) = app.session {
                let pager = &session.pager;
                ui.label(pager.geometry().to_string());
                ui.separator();
                ui.label(pager.color_mode().to_string());
                ui.separator();
                let position = pager.top_offset().min(session.info.size_bytes);
                ui.label(session.info.position_label(position));
                if app.ui_state.at_eof {
                    ui.separator();
                    ui.colored_label(egui::Color32::YELLOW, "EOF");
                }
            } else {
                ui.label("No file");
            }
        });

        ui.add_space(2.0);
    });
}
