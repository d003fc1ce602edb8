use crate::QuizApp;
use crate::ui::helpers::status_message;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, TextEdit};

pub fn ui_loader(app: &mut QuizApp, ctx: &Context) {
    let t = app.texts();

    centered_panel(ctx, 240.0, 560.0, |ui| {
        let panel_width = ui.available_width();

        ui.heading(format!("📁 {}", t.load_questions));
        ui.add_space(8.0);
        ui.label(t.load_info);
        ui.add_space(10.0);

        ui.label(t.folder_path);
        let response = ui.add(
            TextEdit::singleline(&mut app.folder_input)
                .desired_width(panel_width)
                .hint_text("/home/user/lernen"),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(12.0);
        let (back, load) = two_button_row(ui, panel_width, t.back, t.load);
        ui.add_space(6.0);
        status_message(ui, &app.message);

        if back {
            app.open_main_menu();
        } else if load || submitted {
            app.load_folder_input();
        }
    });
}
