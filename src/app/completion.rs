use super::*;
use crate::analysis::{Feedback, analyze, review_rows};
use crate::model::QuizMode;

impl QuizApp {
    /// Everything the results screen shows. `None` while the quiz is running.
    pub fn results_summary(&self) -> Option<ResultsSummary> {
        let session = self.session.as_ref()?;
        if !session.is_finished() {
            return None;
        }
        let results = session.results();
        let feedback = Feedback::from_percentage(results.percentage);
        Some(ResultsSummary {
            analysis: analyze(session),
            review: review_rows(session),
            feedback,
            results,
        })
    }

    pub fn feedback_text(&self, feedback: Feedback) -> &'static str {
        let t = self.texts();
        match feedback {
            Feedback::Excellent => t.excellent,
            Feedback::Good => t.good,
            Feedback::Practice => t.practice,
        }
    }

    /// Localized session title: the topic, or the exam label.
    pub fn session_title(&self) -> String {
        match self.session.as_ref().map(|s| s.mode()) {
            Some(QuizMode::Topic(name)) => name.clone(),
            Some(QuizMode::Exam) => self.texts().mode_exam.to_string(),
            None => String::new(),
        }
    }
}
