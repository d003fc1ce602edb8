use crate::grader::grade;
use crate::model::{QuestionRecord, QuizMode};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot advance: quiz already finished at question {index} of {total}")]
    InvalidTransition { index: usize, total: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    pub percentage: f64,
    pub correct: usize,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    Excellent,
    VeryGood,
    Good,
    Satisfactory,
    Sufficient,
    Failed,
}

impl Grade {
    /// Bands are inclusive at their lower bound.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::Excellent
        } else if percentage >= 80.0 {
            Grade::VeryGood
        } else if percentage >= 70.0 {
            Grade::Good
        } else if percentage >= 60.0 {
            Grade::Satisfactory
        } else if percentage >= 50.0 {
            Grade::Sufficient
        } else {
            Grade::Failed
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::VeryGood => "Very good",
            Grade::Good => "Good",
            Grade::Satisfactory => "Satisfactory",
            Grade::Sufficient => "Sufficient",
            Grade::Failed => "Failed",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResults {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub wrong_answers: usize,
    pub percentage: f64,
    pub grade: Grade,
    pub mode: QuizMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerDetail<'a> {
    pub question: &'a QuestionRecord,
    pub user_answer: &'a str,
    pub was_correct: bool,
    pub correct_answer: &'a str,
}

/// Sequencer over one learner's run through a list of questions.
///
/// `answer_history` and `user_answers` stay parallel and hold one entry per
/// position before `current_index`, plus at most one pending entry for the
/// current question between `submit_answer` and `advance`.
#[derive(Debug, Clone)]
pub struct QuizSession {
    original_questions: Vec<QuestionRecord>,
    questions: Vec<QuestionRecord>,
    mode: QuizMode,
    current_index: usize,
    correct_count: usize,
    answer_history: Vec<bool>,
    user_answers: Vec<String>,
}

impl QuizSession {
    pub fn new(questions: &[QuestionRecord], mode: QuizMode, shuffle: bool) -> Self {
        Self::new_with_rng(questions, mode, shuffle, &mut rand::thread_rng())
    }

    pub fn new_with_rng<R: Rng + ?Sized>(
        questions: &[QuestionRecord],
        mode: QuizMode,
        shuffle: bool,
        rng: &mut R,
    ) -> Self {
        let original_questions = questions.to_vec();
        let mut working = original_questions.clone();
        if shuffle {
            working.shuffle(rng);
        }
        log::debug!(
            "new quiz session '{}' with {} questions (shuffled: {shuffle})",
            mode.label(),
            working.len()
        );

        Self {
            original_questions,
            questions: working,
            mode,
            current_index: 0,
            correct_count: 0,
            answer_history: Vec::new(),
            user_answers: Vec::new(),
        }
    }

    pub fn mode(&self) -> &QuizMode {
        &self.mode
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn original_questions(&self) -> &[QuestionRecord] {
        &self.original_questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn answer_history(&self) -> &[bool] {
        &self.answer_history
    }

    pub fn user_answers(&self) -> &[String] {
        &self.user_answers
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current_index)
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Verdict already submitted for the current question, if any.
    pub fn pending_verdict(&self) -> Option<bool> {
        self.answer_history.get(self.current_index).copied()
    }

    /// Grades `user_answer` against the current question without moving on.
    /// Submitting again before `advance` replaces the earlier answer.
    pub fn submit_answer(&mut self, user_answer: &str) -> bool {
        let Some(question) = self.questions.get(self.current_index) else {
            return false;
        };

        let verdict = grade(
            user_answer,
            &question.reference_answer,
            question.synonyms.as_slice(),
        );

        self.answer_history.truncate(self.current_index);
        self.user_answers.truncate(self.current_index);
        self.answer_history.push(verdict);
        self.user_answers.push(user_answer.to_string());
        self.recount();

        verdict
    }

    /// Moves to the next question. An unanswered question is recorded as an
    /// empty, wrong answer.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if self.is_finished() {
            return Err(SessionError::InvalidTransition {
                index: self.current_index,
                total: self.questions.len(),
            });
        }
        if self.pending_verdict().is_none() {
            log::debug!("skipping unanswered question {}", self.current_index + 1);
            self.submit_answer("");
        }
        self.current_index += 1;
        Ok(())
    }

    /// Steps back one question and withdraws the answer given there.
    /// Returns `false` at the first question.
    pub fn go_back(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        self.answer_history.truncate(self.current_index);
        self.user_answers.truncate(self.current_index);
        self.recount();
        true
    }

    pub fn progress(&self) -> Progress {
        let current = self.current_index;
        let total = self.questions.len();
        let correct = self.correct_count;

        Progress {
            current,
            total,
            percentage: ratio(current, total),
            correct,
            accuracy: ratio(correct, current),
        }
    }

    pub fn results(&self) -> QuizResults {
        let total_questions = self.questions.len();
        let correct_answers = self.correct_count;
        let percentage = ratio(correct_answers, total_questions);

        QuizResults {
            total_questions,
            correct_answers,
            wrong_answers: total_questions.saturating_sub(correct_answers),
            percentage,
            grade: Grade::from_percentage(percentage),
            mode: self.mode.clone(),
        }
    }

    pub fn restart(&mut self, reshuffle_if_exam: bool) {
        self.restart_with_rng(reshuffle_if_exam, &mut rand::thread_rng());
    }

    pub fn restart_with_rng<R: Rng + ?Sized>(&mut self, reshuffle_if_exam: bool, rng: &mut R) {
        self.questions = self.original_questions.clone();
        if reshuffle_if_exam && self.mode.is_exam() {
            self.questions.shuffle(rng);
        }
        self.current_index = 0;
        self.correct_count = 0;
        self.answer_history.clear();
        self.user_answers.clear();
    }

    /// Fresh session over the same questions, reshuffled for exams.
    pub fn repeat(&self) -> QuizSession {
        QuizSession::new(
            &self.original_questions,
            self.mode.clone(),
            self.mode.is_exam(),
        )
    }

    pub fn answer_detail(&self, index: usize) -> Option<AnswerDetail<'_>> {
        let question = self.questions.get(index)?;
        let was_correct = *self.answer_history.get(index)?;
        Some(AnswerDetail {
            question,
            user_answer: self.user_answers.get(index).map_or("", String::as_str),
            was_correct,
            correct_answer: &question.reference_answer,
        })
    }

    fn recount(&mut self) {
        self.correct_count = self.answer_history.iter().filter(|c| **c).count();
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn q(topic: &str, n: usize, synonym: &str) -> QuestionRecord {
        QuestionRecord::new(
            topic,
            &format!("Frage {n}"),
            &format!("Antwort {n}"),
            &[synonym],
        )
        .unwrap()
    }

    fn three() -> Vec<QuestionRecord> {
        vec![q("A", 1, "eins"), q("A", 2, "zwei"), q("B", 3, "drei")]
    }

    fn ten() -> Vec<QuestionRecord> {
        (0..10).map(|i| q("T", i, "richtig")).collect()
    }

    fn assert_parity(s: &QuizSession) {
        assert_eq!(s.answer_history().len(), s.user_answers().len());
        assert_eq!(
            s.correct_count(),
            s.answer_history().iter().filter(|c| **c).count()
        );
    }

    #[test]
    fn starts_at_first_question() {
        let s = QuizSession::new(&three(), QuizMode::Topic("A".into()), false);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.current_question().unwrap().question_text, "Frage 1");
        assert!(!s.is_finished());
        assert!(s.pending_verdict().is_none());
    }

    #[test]
    fn construction_copies_the_source() {
        let mut source = three();
        let s = QuizSession::new(&source, QuizMode::Exam, false);
        source.clear();
        assert_eq!(s.total(), 3);
        assert_eq!(s.original_questions().len(), 3);
    }

    #[test]
    fn submit_grades_without_advancing() {
        let mut s = QuizSession::new(&three(), QuizMode::Exam, false);
        assert!(s.submit_answer("eins"));
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.pending_verdict(), Some(true));
        assert_eq!(s.correct_count(), 1);
        assert_eq!(s.user_answers(), ["eins"]);
    }

    #[test]
    fn resubmitting_replaces_pending_answer() {
        let mut s = QuizSession::new(&three(), QuizMode::Exam, false);
        assert!(s.submit_answer("eins"));
        assert!(!s.submit_answer("falsch"));
        assert_eq!(s.answer_history(), [false]);
        assert_eq!(s.user_answers(), ["falsch"]);
        assert_eq!(s.correct_count(), 0);
    }

    #[test]
    fn finishes_exactly_after_last_advance() {
        let mut s = QuizSession::new(&three(), QuizMode::Exam, false);
        for answer in ["eins", "zwei", "drei"] {
            assert!(!s.is_finished());
            s.submit_answer(answer);
            s.advance().unwrap();
        }
        assert!(s.is_finished());
        assert!(s.current_question().is_none());
        assert_eq!(s.correct_count(), 3);
    }

    #[test]
    fn finished_session_ignores_submit_and_rejects_advance() {
        let mut s = QuizSession::new(&three()[..1], QuizMode::Exam, false);
        s.submit_answer("eins");
        s.advance().unwrap();

        assert!(!s.submit_answer("eins"));
        assert_eq!(s.answer_history(), [true]);
        assert_eq!(
            s.advance(),
            Err(SessionError::InvalidTransition { index: 1, total: 1 })
        );
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn advancing_unanswered_counts_as_wrong() {
        let mut s = QuizSession::new(&three(), QuizMode::Exam, false);
        s.advance().unwrap();
        assert_eq!(s.answer_history(), [false]);
        assert_eq!(s.user_answers(), [""]);
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn back_navigation_rolls_back_history() {
        let mut s = QuizSession::new(&three(), QuizMode::Exam, false);
        assert!(s.submit_answer("eins"));
        s.advance().unwrap();
        assert!(!s.submit_answer("nope"));
        s.advance().unwrap();
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.correct_count(), 1);
        assert_eq!(s.answer_history(), [true, false]);

        assert!(s.go_back());
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.answer_history(), [true]);
        assert_eq!(s.user_answers(), ["eins"]);
        assert_eq!(s.correct_count(), 1);
    }

    #[test]
    fn back_from_feedback_drops_both_answers() {
        let mut s = QuizSession::new(&three(), QuizMode::Exam, false);
        s.submit_answer("eins");
        s.advance().unwrap();
        s.submit_answer("zwei");

        assert!(s.go_back());
        assert_eq!(s.current_index(), 0);
        assert!(s.answer_history().is_empty());
        assert_eq!(s.correct_count(), 0);
    }

    #[test]
    fn back_at_start_is_noop() {
        let mut s = QuizSession::new(&three(), QuizMode::Exam, false);
        s.submit_answer("eins");
        assert!(!s.go_back());
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.answer_history(), [true]);
    }

    #[test]
    fn progress_reports_accuracy() {
        let mut s = QuizSession::new(&three(), QuizMode::Exam, false);
        let p = s.progress();
        assert_eq!((p.current, p.total, p.correct), (0, 3, 0));
        assert_eq!(p.percentage, 0.0);
        assert_eq!(p.accuracy, 0.0);

        s.submit_answer("eins");
        s.advance().unwrap();
        s.submit_answer("x");
        s.advance().unwrap();
        let p = s.progress();
        assert_eq!(p.current, 2);
        assert!((p.percentage - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(p.accuracy, 50.0);
    }

    fn finish_with(correct: usize) -> QuizResults {
        let mut s = QuizSession::new(&ten(), QuizMode::Topic("T".into()), false);
        for i in 0..10 {
            s.submit_answer(if i < correct { "richtig" } else { "daneben" });
            s.advance().unwrap();
        }
        s.results()
    }

    #[test]
    fn results_are_banded() {
        let r = finish_with(9);
        assert_eq!(r.percentage, 90.0);
        assert_eq!(r.grade, Grade::Excellent);
        assert_eq!(r.wrong_answers, 1);

        let r = finish_with(7);
        assert_eq!(r.percentage, 70.0);
        assert_eq!(r.grade, Grade::Good);

        let r = finish_with(4);
        assert_eq!(r.percentage, 40.0);
        assert_eq!(r.grade, Grade::Failed);
        assert_eq!(r.mode, QuizMode::Topic("T".into()));
    }

    #[test]
    fn grade_band_edges() {
        assert_eq!(Grade::from_percentage(100.0), Grade::Excellent);
        assert_eq!(Grade::from_percentage(89.9), Grade::VeryGood);
        assert_eq!(Grade::from_percentage(80.0), Grade::VeryGood);
        assert_eq!(Grade::from_percentage(60.0), Grade::Satisfactory);
        assert_eq!(Grade::from_percentage(50.0), Grade::Sufficient);
        assert_eq!(Grade::from_percentage(49.99), Grade::Failed);
        assert_eq!(Grade::Satisfactory.to_string(), "Satisfactory");
    }

    #[test]
    fn empty_session_is_finished_and_safe() {
        let mut s = QuizSession::new(&[], QuizMode::Exam, true);
        assert!(s.is_finished());
        assert_eq!(s.progress().percentage, 0.0);
        assert!(!s.submit_answer("x"));
        assert!(!s.go_back());
        assert!(s.advance().is_err());
        let r = s.results();
        assert_eq!(r.percentage, 0.0);
        assert_eq!(r.grade, Grade::Failed);
    }

    #[test]
    fn shuffle_keeps_the_same_questions() {
        let questions = ten();
        let mut rng = StdRng::seed_from_u64(7);
        let s = QuizSession::new_with_rng(&questions, QuizMode::Exam, true, &mut rng);

        assert_eq!(s.original_questions(), questions.as_slice());
        let mut working = s.questions().to_vec();
        let mut original = questions.clone();
        working.sort();
        original.sort();
        assert_eq!(working, original);
    }

    #[test]
    fn restart_resets_and_reshuffles_only_exams() {
        let questions = ten();
        let mut rng = StdRng::seed_from_u64(1);

        let mut topic = QuizSession::new(&questions, QuizMode::Topic("T".into()), false);
        topic.submit_answer("richtig");
        topic.advance().unwrap();
        topic.restart_with_rng(true, &mut rng);
        assert_eq!(topic.current_index(), 0);
        assert_eq!(topic.correct_count(), 0);
        assert!(topic.answer_history().is_empty());
        assert!(topic.user_answers().is_empty());
        assert_eq!(topic.questions(), questions.as_slice());

        let mut exam = QuizSession::new_with_rng(&questions, QuizMode::Exam, true, &mut rng);
        exam.submit_answer("richtig");
        exam.restart_with_rng(false, &mut rng);
        assert_eq!(exam.questions(), questions.as_slice());
        assert!(exam.answer_history().is_empty());
    }

    #[test]
    fn restarting_an_exam_reshuffles_the_same_questions() {
        let questions = ten();
        let mut rng = StdRng::seed_from_u64(7);
        let mut exam = QuizSession::new_with_rng(&questions, QuizMode::Exam, true, &mut rng);
        exam.submit_answer("richtig");
        exam.advance().unwrap();

        let mut sorted_original = questions.clone();
        sorted_original.sort();
        let mut reordered = false;
        for _ in 0..5 {
            let before = exam.questions().to_vec();
            exam.restart_with_rng(true, &mut rng);

            assert_eq!(exam.current_index(), 0);
            assert_eq!(exam.correct_count(), 0);
            assert!(exam.answer_history().is_empty());
            assert_eq!(exam.original_questions(), questions.as_slice());

            let mut after = exam.questions().to_vec();
            reordered |= after != before;
            after.sort();
            assert_eq!(after, sorted_original);
        }
        assert!(reordered);
    }

    #[test]
    fn restart_with_default_rng() {
        let questions = three();
        let mut topic = QuizSession::new(&questions, QuizMode::Topic("A".into()), false);
        topic.submit_answer("eins");
        topic.advance().unwrap();
        topic.restart(true);
        assert_eq!(topic.current_index(), 0);
        assert_eq!(topic.progress().correct, 0);
        assert_eq!(topic.questions(), questions.as_slice());

        let mut exam = QuizSession::new(&questions, QuizMode::Exam, true);
        exam.submit_answer("zwei");
        exam.restart(true);
        assert!(!exam.is_finished());
        assert!(exam.user_answers().is_empty());
        let mut working = exam.questions().to_vec();
        working.sort();
        let mut original = questions.clone();
        original.sort();
        assert_eq!(working, original);
    }

    #[test]
    fn repeat_builds_a_fresh_session() {
        let mut s = QuizSession::new(&three(), QuizMode::Topic("A".into()), false);
        s.submit_answer("eins");
        s.advance().unwrap();

        let again = s.repeat();
        assert_eq!(again.current_index(), 0);
        assert!(again.answer_history().is_empty());
        assert_eq!(again.questions(), s.original_questions());
        assert_eq!(again.mode(), s.mode());
    }

    #[test]
    fn answer_detail_only_for_answered_positions() {
        let mut s = QuizSession::new(&three(), QuizMode::Exam, false);
        s.submit_answer("zwei eins");
        s.advance().unwrap();

        let d = s.answer_detail(0).unwrap();
        assert!(d.was_correct);
        assert_eq!(d.user_answer, "zwei eins");
        assert_eq!(d.correct_answer, "Antwort 1");
        assert!(s.answer_detail(1).is_none());
        assert!(s.answer_detail(7).is_none());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Submit(bool),
        Advance,
        Back,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<bool>().prop_map(Op::Submit),
            Just(Op::Advance),
            Just(Op::Back),
        ]
    }

    proptest! {
        #[test]
        fn history_stays_parallel_to_index(ops in prop::collection::vec(op(), 0..40)) {
            let questions = ten();
            let mut s = QuizSession::new(&questions, QuizMode::Exam, false);
            for op in ops {
                match op {
                    Op::Submit(right) => {
                        s.submit_answer(if right { "richtig" } else { "falsch" });
                        let pending = usize::from(!s.is_finished() && s.pending_verdict().is_some());
                        prop_assert_eq!(s.answer_history().len(), s.current_index() + pending);
                    }
                    Op::Advance => {
                        let _ = s.advance();
                        prop_assert_eq!(s.answer_history().len(), s.current_index());
                    }
                    Op::Back => {
                        if s.go_back() {
                            prop_assert_eq!(s.answer_history().len(), s.current_index());
                        }
                    }
                }
                assert_parity(&s);
                prop_assert!(s.current_index() <= s.total());
            }
        }
    }
}
