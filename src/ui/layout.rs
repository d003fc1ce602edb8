use crate::QuizApp;
use crate::i18n::Lang;
use egui::{Button, CentralPanel, ComboBox, Context, Frame, Ui};

/// Home / topic overview / back, shown above the quiz.
pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    let t = app.texts();
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button(t.main_page).clicked() {
                app.open_main_menu();
                ctx.request_repaint();
                return;
            }

            // topic overview only makes sense outside the exam
            if !app.is_exam() && ui.button(t.topic_overview).clicked() {
                app.open_topic_overview();
                ctx.request_repaint();
                return;
            }

            if app.can_go_back() && ui.button(t.back).clicked() {
                app.go_back();
            }
        });
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let t = app.texts();
            if ui.button(t.dark_mode).clicked() {
                app.set_dark_mode(ctx, true);
            }
            if ui.button(t.light_mode).clicked() {
                app.set_dark_mode(ctx, false);
            }

            ui.separator();

            let mut lang = app.language;
            ComboBox::from_id_salt("language_select")
                .selected_text(lang.texts().name)
                .show_ui(ui, |ui| {
                    for option in Lang::ALL {
                        ui.selectable_value(&mut lang, option, option.texts().name);
                    }
                });
            ui.label(t.language);
            if lang != app.language {
                app.select_language(lang);
            }
        });
    });
}

/// Panel centred both ways, with a maximum content width.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Two equally sized buttons in one row. Returns (left clicked, right clicked).
pub fn two_button_row(ui: &mut Ui, panel_width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui.add_sized([btn_w, 36.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 36.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}
