use crate::app::BinviewApp;

pub fn show(ctx: &egui::Context, app: &mut BinviewApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            paint_background(ui, rect);

            let ppp = ctx.pixels_per_point();
            let pixels = [
                (rect.width() * ppp).floor() as usize,
                (rect.height() * ppp).floor() as usize,
            ];
            app.resize_viewport(pixels);

            let texture_info = app
                .viewport
                .texture
                .as_ref()
                .map(|t| (t.id(), t.size()));

            if let Some((texture_id, size)) = texture_info {
                // One texel per physical pixel, anchored top-left.
                let img_size = egui::vec2(size[0] as f32, size[1] as f32) / ppp;
                let img_rect = egui::Rect::from_min_size(rect.min, img_size);
                draw_image(ui, texture_id, img_rect);
            } else {
                show_placeholder(ui);
            }
        });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Frame row 0 holds the most recently read row, so the texture is drawn
/// vertically flipped to show the file top to bottom.
fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 1.0), egui::pos2(1.0, 0.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a file to begin (Ctrl+O)")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
