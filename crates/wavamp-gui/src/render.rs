//! Drawing of the player window.

use egui::{Align2, Color32, FontId, Painter, pos2, vec2};
use wavamp_core::{ControlLayout, Rect, Volume, knob_rect};

/// Width of the volume knob in points.
pub const KNOB_WIDTH: i32 = 12;

const TRACK_COLOR: Color32 = Color32::from_rgb(128, 128, 128);
const STATUS_FONT_SIZE: f32 = 14.0;

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    /// Green channel of the background.
    pub green: u8,
    /// Control rectangles.
    pub layout: &'a ControlLayout,
    /// Volume knob position; `None` hides the slider.
    pub volume: Option<Volume>,
    /// Text drawn in the top-left corner.
    pub status: &'a str,
}

/// Convert a layout rectangle into egui coordinates.
pub fn to_egui_rect(r: Rect) -> egui::Rect {
    egui::Rect::from_min_size(pos2(r.x as f32, r.y as f32), vec2(r.w as f32, r.h as f32))
}

/// Background color for a pulse value.
pub fn background(green: u8) -> Color32 {
    Color32::from_rgb(0, green, 0)
}

/// Paint `scene` over the whole area of `painter`.
pub fn draw(painter: &Painter, scene: &Scene<'_>) {
    painter.rect_filled(painter.clip_rect(), 0.0, background(scene.green));

    painter.rect_filled(to_egui_rect(scene.layout.rewind), 0.0, Color32::WHITE);
    painter.rect_filled(to_egui_rect(scene.layout.pause), 0.0, Color32::WHITE);

    if let Some(volume) = scene.volume {
        let track = scene.layout.volume;
        painter.rect_filled(to_egui_rect(track), 0.0, TRACK_COLOR);
        painter.rect_filled(
            to_egui_rect(knob_rect(track, volume, KNOB_WIDTH)),
            0.0,
            Color32::WHITE,
        );
    }

    if !scene.status.is_empty() {
        painter.text(
            pos2(10.0, 10.0),
            Align2::LEFT_TOP,
            scene.status,
            FontId::proportional(STATUS_FONT_SIZE),
            Color32::WHITE,
        );
    }
}

/// Status line text.
///
/// Shows the loaded file name and whether it is playing, or a drop hint
/// when nothing is loaded. A pending stream error is appended.
pub fn status_text(file_name: Option<&str>, paused: bool, error: Option<&str>) -> String {
    let mut text = match file_name {
        Some(name) => format!("{name} [{}]", if paused { "paused" } else { "playing" }),
        None => "Drop a .wav file here".to_string(),
    };
    if let Some(err) = error {
        text.push_str(" | ");
        text.push_str(err);
    }
    text
}
