use binview_core::color::ColorMode;
use binview_core::viewport::JumpDirection;

/// Wheel travel in points that counts as one notch.
pub const POINTS_PER_NOTCH: f32 = 50.0;

/// One UI frame's worth of viewer input, coalesced.
#[derive(Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Signed rows: positive reveals earlier data, negative later data.
    pub scroll_rows: i64,
    pub jump: Option<JumpDirection>,
    pub mode: Option<ModeChange>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeChange {
    Next,
    Set(ColorMode),
}

impl ModeChange {
    pub fn apply(self, current: ColorMode) -> ColorMode {
        match self {
            Self::Next => current.next(),
            Self::Set(mode) => mode,
        }
    }
}

/// Fold a wheel delta into whole notches, carrying the fraction over in
/// `remainder`. Returns the signed row count for `scroll_speed` rows per notch.
pub fn wheel_rows(remainder: &mut f32, delta_y: f32, scroll_speed: usize) -> i64 {
    *remainder += delta_y;
    let notches = (*remainder / POINTS_PER_NOTCH).trunc();
    *remainder -= notches * POINTS_PER_NOTCH;
    notches as i64 * scroll_speed as i64
}

/// Gather wheel and key input for this frame.
pub fn collect(ctx: &egui::Context, remainder: &mut f32, scroll_speed: usize) -> FrameInput {
    ctx.input(|i| {
        let mut input = FrameInput {
            scroll_rows: wheel_rows(remainder, i.raw_scroll_delta.y, scroll_speed),
            ..Default::default()
        };

        if i.key_pressed(egui::Key::PageUp) {
            input.jump = Some(JumpDirection::Back);
        } else if i.key_pressed(egui::Key::PageDown) {
            input.jump = Some(JumpDirection::Forward);
        }

        if i.key_pressed(egui::Key::M) {
            input.mode = Some(ModeChange::Next);
        } else if i.key_pressed(egui::Key::Num1) {
            input.mode = Some(ModeChange::Set(ColorMode::Grayscale));
        } else if i.key_pressed(egui::Key::Num2) {
            input.mode = Some(ModeChange::Set(ColorMode::BiThreshold));
        } else if i.key_pressed(egui::Key::Num3) {
            input.mode = Some(ModeChange::Set(ColorMode::Rainbow));
        }

        input
    })
}
