use super::*;

impl QuizApp {
    // Accessors
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Header data for the quiz screen.
    pub fn progress_line(&self) -> Option<ProgressLine> {
        self.session
            .as_ref()
            .map(|s| ProgressLine::from_progress(s.progress()))
    }

    /// `true` between confirming an answer and moving on.
    pub fn showing_feedback(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.pending_verdict().is_some())
    }

    pub fn can_go_back(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.current_index() > 0)
    }
}
