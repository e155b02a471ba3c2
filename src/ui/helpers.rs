// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Color del texto según la puntuación de la muestra.
pub fn score_color(score: u32) -> Color32 {
    match score {
        100 => Color32::from_rgb(22, 163, 74),
        70 => Color32::from_rgb(202, 138, 4),
        _ => Color32::from_rgb(220, 38, 38),
    }
}

pub fn muted(text: impl Into<String>) -> RichText {
    RichText::new(text).italics().weak()
}
