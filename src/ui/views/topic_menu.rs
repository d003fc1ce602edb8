use crate::QuizApp;
use crate::app::TopicInfo;
use crate::ui::helpers::status_message;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Button, ComboBox, Context, RichText, ScrollArea};

pub fn ui_topic_menu(app: &mut QuizApp, ctx: &Context) {
    let t = app.texts();
    let topics: Vec<TopicInfo> = app.topic_infos();

    centered_panel(ctx, 560.0, 620.0, |ui| {
        let panel_width = ui.available_width();

        ui.heading(t.topic_overview);
        ui.add_space(10.0);

        if topics.is_empty() {
            ui.label(t.no_questions);
            ui.add_space(10.0);
            if ui.add_sized([panel_width, 36.0], Button::new(t.back)).clicked() {
                app.open_main_menu();
            }
            return;
        }

        let mut start: Option<String> = None;

        ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
            for info in &topics {
                ui.horizontal(|ui| {
                    let label_w = panel_width * 0.5;
                    ui.add_sized([label_w, 28.0], egui::Label::new(RichText::new(info.label()).strong()));
                    ui.label(info.count_label(t.questions_word));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(format!("▶ {}", t.start)).clicked() {
                            start = Some(info.name.clone());
                        }
                    });
                });
                ui.separator();
            }
        });

        ui.add_space(10.0);
        ui.label(RichText::new(t.topic_select).strong());

        // Dropdown alternative to the list
        let selected_text = app.selected_topic.clone().unwrap_or_else(|| t.topic_dropdown.to_string());
        ComboBox::from_id_salt("topic_select")
            .width(panel_width)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for info in &topics {
                    ui.selectable_value(&mut app.selected_topic, Some(info.name.clone()), info.name.as_str());
                }
            });

        ui.add_space(10.0);
        let (back, go) = two_button_row(ui, panel_width, t.back, &format!("🚀 {}", t.start_quiz));
        if go {
            start = app.selected_topic.clone();
        }

        ui.add_space(6.0);
        status_message(ui, &app.message);

        if back {
            app.open_main_menu();
        } else if let Some(topic) = start {
            app.start_topic(&topic);
        }
    });
}
