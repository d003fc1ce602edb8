use super::*;

impl QuizApp {
    /// Grades the text in the answer box against the current question.
    pub fn submit_answer(&mut self) {
        if self.input.trim().is_empty() {
            self.message = self.texts().empty_answer.to_string();
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.is_finished() {
            return;
        }

        let correct = session.submit_answer(&self.input);
        log::debug!(
            "answer to question {} graded {}",
            session.current_index() + 1,
            if correct { "correct" } else { "wrong" }
        );
        self.message.clear();
    }

    pub fn next_question(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(e) = session.advance() {
            log::warn!("{e}");
            return;
        }
        self.input.clear();
        self.message.clear();
    }

    /// Steps back one question and puts the withdrawn answer back into the box.
    pub fn go_back(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let idx = session.current_index();
        if idx == 0 {
            return;
        }
        let previous = session.user_answers().get(idx - 1).cloned();
        if session.go_back() {
            self.input = previous.unwrap_or_default();
            self.message.clear();
        }
    }
}
