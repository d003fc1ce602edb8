// src/view_models.rs

use crate::analysis::{Feedback, QuizAnalysis, ReviewRow};
use crate::session::{Progress, QuizResults};

#[derive(Clone, Debug, PartialEq)]
pub struct TopicInfo {
    pub idx: usize,             // 0-based position in the sorted topic list
    pub name: String,
    pub question_count: usize,
}

impl TopicInfo {
    pub fn label(&self) -> String {
        format!("{}. {}", self.idx + 1, self.name)
    }

    pub fn count_label(&self, questions_word: &str) -> String {
        format!("📚 {} {}", self.question_count, questions_word)
    }
}

/// Header line of the quiz screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressLine {
    pub progress: Progress,
    /// 1-based number of the question on screen, capped at the total.
    pub number: usize,
    pub fraction: f32,
}

impl ProgressLine {
    pub fn from_progress(progress: Progress) -> Self {
        let number = (progress.current + 1).min(progress.total);
        Self {
            progress,
            number,
            fraction: (progress.percentage / 100.0) as f32,
        }
    }

    pub fn status(&self) -> Option<String> {
        if self.progress.current == 0 {
            return None;
        }
        Some(format!(
            "{}/{} ({:.1}%)",
            self.progress.correct, self.progress.current, self.progress.accuracy
        ))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsSummary {
    pub results: QuizResults,
    pub analysis: Option<QuizAnalysis>,
    pub feedback: Feedback,
    pub review: Vec<ReviewRow>,
}

impl ResultsSummary {
    pub fn score_label(&self) -> String {
        format!(
            "{}/{}",
            self.results.correct_answers, self.results.total_questions
        )
    }

    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.results.percentage)
    }

    pub fn is_perfect(&self) -> bool {
        self.results.total_questions > 0
            && self.results.correct_answers == self.results.total_questions
    }
}
