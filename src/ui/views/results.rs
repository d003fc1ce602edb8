use crate::QuizApp;
use crate::ui::helpers::metric;
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Color32, Context, Grid, RichText, ScrollArea};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(summary) = app.results_summary() else {
        return;
    };
    let t = app.texts();
    let title = app.session_title();
    let feedback = app.feedback_text(summary.feedback);

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_width(panel_width);

                ui.heading(format!("🏁 {}", t.results_title));
                ui.label(RichText::new(title.as_str()).italics());
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    let col = panel_width / 3.0 - 8.0;
                    ui.allocate_ui(egui::vec2(col, 48.0), |ui| metric(ui, t.score, &summary.score_label()));
                    ui.allocate_ui(egui::vec2(col, 48.0), |ui| {
                        metric(ui, t.percentage, &summary.percentage_label())
                    });
                    ui.allocate_ui(egui::vec2(col, 48.0), |ui| {
                        metric(ui, t.grade, t.grade_label(summary.results.grade))
                    });
                });

                ui.add_space(10.0);
                ui.label(RichText::new(feedback).heading());
                ui.add_space(10.0);
            });

            if summary.is_perfect() {
                ui.label(RichText::new(format!("🎉 {}", t.perfect)).color(Color32::LIGHT_GREEN).strong());
            } else if let Some(analysis) = &summary.analysis {
                if !analysis.weak_topics.is_empty() {
                    ui.label(RichText::new(format!("⚠ {}", t.weak_topics)).color(Color32::YELLOW).strong());
                    for weak in &analysis.weak_topics {
                        ui.label(format!(
                            "• {}: {:.1}% ({} {})",
                            weak.topic, weak.percentage, weak.errors, t.errors
                        ));
                    }
                }
            }

            ui.add_space(10.0);
            egui::CollapsingHeader::new(t.detailed_evaluation)
                .default_open(false)
                .show(ui, |ui| {
                    Grid::new("quiz_review_grid")
                        .striped(true)
                        .spacing([8.0, 4.0])
                        .show(ui, |ui| {
                            for row in &summary.review {
                                ui.label(row.number.to_string());
                                ui.label(if row.was_correct { "✅" } else { "❌" });
                                ui.label(row.prompt.as_str());
                                ui.end_row();
                            }
                        });
                });

            ui.add_space(14.0);
            let (repeat, menu) = two_button_row(
                ui,
                panel_width,
                &format!("🔄 {}", t.repeat_quiz),
                &format!("🏠 {}", t.to_main_menu),
            );
            if repeat {
                app.repeat_quiz();
            } else if menu {
                app.open_main_menu();
            }
        });
    });
}
