use crate::QuizApp;
use crate::ui::helpers::status_message;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, RichText};

pub fn ui_exam_intro(app: &mut QuizApp, ctx: &Context) {
    let t = app.texts();
    let stats = app.catalog_stats();

    centered_panel(ctx, 260.0, 540.0, |ui| {
        let panel_width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading(format!("🎯 {}", t.mode_exam));
            ui.add_space(10.0);
            ui.label(t.simulation_info);
            ui.add_space(6.0);
            ui.label(RichText::new(format!("{}: {}", t.total_questions, stats.questions)).strong());
            ui.label(format!("{}: {}", t.available_topics, stats.topics));
        });

        ui.add_space(16.0);
        let (back, go) = two_button_row(ui, panel_width, t.back, &format!("🚀 {}", t.start_quiz));
        ui.add_space(6.0);
        status_message(ui, &app.message);

        if back {
            app.open_main_menu();
        } else if go {
            app.start_exam();
        }
    });
}
