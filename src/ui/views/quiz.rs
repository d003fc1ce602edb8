use crate::QuizApp;
use crate::model::AppState;
use crate::ui::helpers::status_message;
use crate::ui::views::results::ui_results;
use egui::{Button, CentralPanel, Color32, Context, ProgressBar, RichText, ScrollArea, TextEdit};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Session dropped elsewhere: nothing to show here
    if app.session().is_none() {
        app.state = AppState::MainMenu;
        return;
    }
    if app.results_summary().is_some() {
        ui_results(app, ctx);
        return;
    }

    let t = app.texts();
    let Some(line) = app.progress_line() else {
        return;
    };
    let Some(question) = app.current_question().cloned() else {
        return;
    };
    let feedback = app.last_feedback().map(|(ok, model)| (ok, model.to_string()));
    let title = app.session_title();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 720.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_width(panel_width);

            ui.heading(title.as_str());
            ui.add_space(6.0);
            ui.add(
                ProgressBar::new(line.fraction)
                    .desired_width(panel_width)
                    .text(format!("{} {} {} {}", t.question, line.number, t.of, line.progress.total)),
            );
            if let Some(status) = line.status() {
                ui.label(format!("{}: {status}", t.current_status));
            }
            ui.add_space(10.0);
        });

        ScrollArea::vertical().show(ui, |ui| {
            ui.set_width(panel_width);

            ui.label(RichText::new(format!("{}: {}", t.topic_label, question.topic)).italics());
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{} {}: {}", t.question, line.number, question.question_text))
                    .heading()
                    .strong(),
            );
            ui.add_space(10.0);

            match feedback {
                None => {
                    ui.label(t.your_answer);
                    ui.add(
                        TextEdit::multiline(&mut app.input)
                            .desired_rows(5)
                            .desired_width(panel_width)
                            .hint_text(t.answer_hint),
                    );
                    ui.add_space(8.0);
                    if ui
                        .add_sized([panel_width, 36.0], Button::new(format!("✔ {}", t.confirm_answer)))
                        .clicked()
                    {
                        app.submit_answer();
                    }
                    ui.add_space(6.0);
                    status_message(ui, &app.message);
                }
                Some((correct, model_answer)) => {
                    ui.label(RichText::new(t.evaluation).strong());
                    if correct {
                        ui.label(RichText::new(format!("✅ {}", t.correct)).color(Color32::LIGHT_GREEN).heading());
                    } else {
                        ui.label(RichText::new(format!("❌ {}", t.incorrect)).color(Color32::LIGHT_RED).heading());
                    }
                    ui.add_space(6.0);
                    ui.label(format!("{}:", t.your_answer));
                    ui.label(RichText::new(app.input.as_str()).monospace());
                    ui.add_space(6.0);
                    ui.label(RichText::new(format!("{}:", t.model_answer)).strong());
                    ui.label(model_answer);
                    ui.add_space(10.0);

                    if ui
                        .add_sized([panel_width, 36.0], Button::new(format!("➡ {}", t.next_question)))
                        .clicked()
                    {
                        app.next_question();
                    }
                }
            }
        });
    });
}
