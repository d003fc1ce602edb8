use super::*;
use crate::model::QuizMode;

impl QuizApp {
    /// Leaves any quiz; the session is dropped.
    pub fn open_main_menu(&mut self) {
        self.session = None;
        self.input.clear();
        self.state = AppState::MainMenu;
        self.message.clear();
    }

    pub fn open_topic_overview(&mut self) {
        self.session = None;
        self.input.clear();
        if self.selected_topic.is_none() {
            self.selected_topic = self.catalog.topics().into_iter().next();
        }
        self.state = AppState::TopicOverview;
        self.message.clear();
    }

    pub fn open_exam_intro(&mut self) {
        self.state = AppState::ExamIntro;
        self.message.clear();
    }

    pub fn open_loader(&mut self) {
        self.folder_input = self
            .catalog_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.state = AppState::LoadQuestions;
        self.message.clear();
    }

    /// Starts a topic quiz in catalog order.
    pub fn start_topic(&mut self, topic: &str) {
        let questions = self.catalog.questions_for_topic(topic);
        if questions.is_empty() {
            self.message = format!("❌ {}", self.texts().no_questions);
            return;
        }
        log::info!("starting topic '{topic}' ({} questions)", questions.len());
        self.session = Some(QuizSession::new(
            &questions,
            QuizMode::Topic(topic.to_string()),
            false,
        ));
        self.selected_topic = Some(topic.to_string());
        self.enter_quiz();
    }

    /// Starts the exam simulation: every question, shuffled.
    pub fn start_exam(&mut self) {
        if self.catalog.is_empty() {
            self.message = format!("❌ {}", self.texts().no_questions);
            return;
        }
        log::info!("starting exam ({} questions)", self.catalog.questions().len());
        self.session = Some(QuizSession::new(
            self.catalog.questions(),
            QuizMode::Exam,
            true,
        ));
        self.enter_quiz();
    }

    pub fn select_language(&mut self, lang: Lang) {
        self.language = lang;
    }

    pub fn set_dark_mode(&mut self, ctx: &egui::Context, dark: bool) {
        self.dark_mode = dark;
        self.apply_visuals(ctx);
    }

    fn enter_quiz(&mut self) {
        self.input.clear();
        self.state = AppState::Quiz;
        self.message.clear();
    }
}
