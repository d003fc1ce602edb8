use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("question record has an empty {0}")]
    EmptyField(&'static str),
}

/// One catalog question. Immutable once built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionRecord {
    pub topic: String,
    pub question_text: String,
    pub reference_answer: String,
    /// Lower-case keywords accepted as a correct answer.
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl QuestionRecord {
    /// Trims every field, lower-cases the synonyms and drops empty ones.
    pub fn new(
        topic: &str,
        question_text: &str,
        reference_answer: &str,
        synonyms: &[&str],
    ) -> Result<Self, RecordError> {
        let topic = non_empty(topic, "topic")?;
        let question_text = non_empty(question_text, "question")?;
        let reference_answer = non_empty(reference_answer, "answer")?;
        let synonyms = synonyms
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            topic,
            question_text,
            reference_answer,
            synonyms,
        })
    }
}

fn non_empty(value: &str, field: &'static str) -> Result<String, RecordError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(RecordError::EmptyField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuizMode {
    Topic(String),
    Exam,
}

impl QuizMode {
    pub fn is_exam(&self) -> bool {
        matches!(self, QuizMode::Exam)
    }

    pub fn label(&self) -> &str {
        match self {
            QuizMode::Topic(name) => name,
            QuizMode::Exam => "Exam",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    MainMenu,
    TopicOverview,
    ExamIntro,
    LoadQuestions,
    Quiz,
}
