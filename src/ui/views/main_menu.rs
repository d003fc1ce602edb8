use crate::QuizApp;
use crate::ui::helpers::{big_list_button, metric, mode_button, status_message};
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_main_menu(app: &mut QuizApp, ctx: &Context) {
    let t = app.texts();
    let stats = app.catalog_stats();

    centered_panel(ctx, 420.0, 560.0, |ui| {
        let panel_width = ui.available_width();
        let btn_w = (panel_width * 0.9).clamp(120.0, 400.0);
        let btn_h = 40.0;

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(t.title).strong());
            ui.label(t.subtitle);
            ui.add_space(14.0);

            // No catalog yet: loading is the only way forward
            if stats.questions == 0 {
                ui.label(RichText::new(format!("⚠ {}", t.no_questions)).color(egui::Color32::YELLOW));
                ui.label(t.load_info);
                ui.add_space(10.0);
                if big_list_button(ui, &format!("📁 {}", t.load_questions), btn_w, btn_h, true) {
                    app.open_loader();
                }
                ui.add_space(6.0);
                status_message(ui, &app.message);
                return;
            }

            ui.horizontal(|ui| {
                let col = panel_width / 3.0 - 8.0;
                ui.allocate_ui(egui::vec2(col, 48.0), |ui| {
                    metric(ui, t.available_topics, &stats.topics.to_string())
                });
                ui.allocate_ui(egui::vec2(col, 48.0), |ui| {
                    metric(ui, t.total_questions, &stats.questions.to_string())
                });
                ui.allocate_ui(egui::vec2(col, 48.0), |ui| {
                    metric(ui, t.avg_per_topic, &format!("{:.1}", stats.avg_per_topic))
                });
            });

            ui.add_space(12.0);
            ui.separator();
            ui.label(RichText::new(t.mode_select).strong());
            ui.add_space(6.0);

            if mode_button(ui, &format!("📚 {}", t.mode_topic), t.topic_learning_help, btn_w, btn_h) {
                app.open_topic_overview();
            }
            ui.add_space(5.0);
            if mode_button(ui, &format!("🎯 {}", t.mode_exam), t.exam_help, btn_w, btn_h) {
                app.open_exam_intro();
            }

            ui.add_space(12.0);
            ui.separator();
            ui.label(RichText::new(t.further_options).strong());
            ui.add_space(6.0);

            if big_list_button(ui, &format!("📁 {}", t.load_questions), btn_w, btn_h, true) {
                app.open_loader();
            }
            ui.add_space(5.0);
            if big_list_button(ui, &format!("🔄 {}", t.reload_questions), btn_w, btn_h, true) {
                app.reload_catalog();
            }

            ui.add_space(8.0);
            status_message(ui, &app.message);
        });
    });
}
