use super::*;
use crate::data::CatalogStats;
use crate::model::QuestionRecord;

impl QuizApp {
    pub fn topics(&self) -> Vec<String> {
        self.catalog.topics()
    }

    pub fn catalog_stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.session.as_ref()?.current_question()
    }

    pub fn is_exam(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.mode().is_exam())
    }

    /// Verdict of the answer just confirmed, with the model answer to show.
    pub fn last_feedback(&self) -> Option<(bool, &str)> {
        let session = self.session.as_ref()?;
        let verdict = session.pending_verdict()?;
        let question = session.current_question()?;
        Some((verdict, question.reference_answer.as_str()))
    }
}
