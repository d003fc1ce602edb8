mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Navigation bar only while a quiz is on screen
        if matches!(self.state, AppState::Quiz) {
            top_panel(self, ctx);
        }

        // Theme and language
        bottom_panel(self, ctx);

        match self.state {
            AppState::MainMenu => views::main_menu::ui_main_menu(self, ctx),
            AppState::TopicOverview => views::topic_menu::ui_topic_menu(self, ctx),
            AppState::ExamIntro => views::exam::ui_exam_intro(self, ctx),
            AppState::LoadQuestions => views::loader::ui_loader(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
