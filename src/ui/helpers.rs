// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Same as [`big_list_button`] with a hover hint.
pub fn mode_button(ui: &mut Ui, label: &str, hint: &str, width: f32, height: f32) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height)))
        .on_hover_text(hint)
        .clicked()
}

/// Big number with a caption above it, like a dashboard tile.
pub fn metric(ui: &mut Ui, caption: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(caption).small());
        ui.label(RichText::new(value).heading().strong());
    });
}

/// Status line coloured by its leading emoji.
pub fn status_message(ui: &mut Ui, message: &str) {
    if message.is_empty() {
        return;
    }
    let color = if message.starts_with('❌') {
        Color32::LIGHT_RED
    } else if message.starts_with('⚠') {
        Color32::YELLOW
    } else {
        Color32::LIGHT_GREEN
    };
    ui.label(RichText::new(message).color(color).strong());
}
