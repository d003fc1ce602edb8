// src/analysis.rs
use crate::session::QuizSession;
use serde::Serialize;

/// Topics answered correctly less often than this (in %) are reported as weak.
pub const WEAK_TOPIC_THRESHOLD: f64 = 70.0;

const REVIEW_PROMPT_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TopicStats {
    pub total: usize,
    pub correct: usize,
}

impl TopicStats {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeakTopic {
    pub topic: String,
    pub percentage: f64,
    pub errors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizAnalysis {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub percentage: f64,
    /// Per-topic counts, in the order topics first appear in the quiz.
    pub topics: Vec<(String, TopicStats)>,
    /// Worst first.
    pub weak_topics: Vec<WeakTopic>,
}

/// Encouragement shown under the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Excellent,
    Good,
    Practice,
}

impl Feedback {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Feedback::Excellent
        } else if percentage >= 60.0 {
            Feedback::Good
        } else {
            Feedback::Practice
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub number: usize,
    pub was_correct: bool,
    pub prompt: String,
}

/// Groups the answered questions by topic. `None` until something was answered.
pub fn analyze(session: &QuizSession) -> Option<QuizAnalysis> {
    let history = session.answer_history();
    if history.is_empty() {
        return None;
    }

    let mut topics: Vec<(String, TopicStats)> = Vec::new();
    for (correct, question) in history.iter().zip(session.questions()) {
        let idx = match topics.iter().position(|(t, _)| *t == question.topic) {
            Some(i) => i,
            None => {
                topics.push((question.topic.clone(), TopicStats::default()));
                topics.len() - 1
            }
        };
        let stats = &mut topics[idx].1;
        stats.total += 1;
        if *correct {
            stats.correct += 1;
        }
    }

    let mut weak_topics: Vec<WeakTopic> = topics
        .iter()
        .filter(|(_, stats)| stats.percentage() < WEAK_TOPIC_THRESHOLD)
        .map(|(topic, stats)| WeakTopic {
            topic: topic.clone(),
            percentage: stats.percentage(),
            errors: stats.total - stats.correct,
        })
        .collect();
    weak_topics.sort_by(|a, b| a.percentage.total_cmp(&b.percentage));

    let correct_answers = history.iter().filter(|c| **c).count();
    Some(QuizAnalysis {
        total_questions: history.len(),
        correct_answers,
        percentage: correct_answers as f64 / history.len() as f64 * 100.0,
        topics,
        weak_topics,
    })
}

/// One line per answered question, prompt cut to 50 characters.
pub fn review_rows(session: &QuizSession) -> Vec<ReviewRow> {
    session
        .questions()
        .iter()
        .zip(session.answer_history())
        .enumerate()
        .map(|(i, (question, correct))| ReviewRow {
            number: i + 1,
            was_correct: *correct,
            prompt: truncate_prompt(&question.question_text),
        })
        .collect()
}

fn truncate_prompt(text: &str) -> String {
    let mut short: String = text.chars().take(REVIEW_PROMPT_CHARS).collect();
    short.push_str("...");
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionRecord, QuizMode};

    fn q(topic: &str, n: usize) -> QuestionRecord {
        QuestionRecord::new(topic, &format!("Frage {n}"), "egal", &["ok"]).unwrap()
    }

    fn play(questions: &[QuestionRecord], answers: &[bool]) -> QuizSession {
        let mut s = QuizSession::new(questions, QuizMode::Exam, false);
        for right in answers {
            s.submit_answer(if *right { "ok" } else { "nein" });
            s.advance().unwrap();
        }
        s
    }

    #[test]
    fn nothing_answered_gives_no_analysis() {
        let s = QuizSession::new(&[q("A", 1)], QuizMode::Exam, false);
        assert!(analyze(&s).is_none());
        assert!(review_rows(&s).is_empty());
    }

    #[test]
    fn groups_by_topic_in_first_seen_order() {
        let questions = vec![q("Hygiene", 1), q("Anatomie", 2), q("Hygiene", 3), q("Anatomie", 4)];
        let s = play(&questions, &[true, false, true, true]);
        let a = analyze(&s).unwrap();

        assert_eq!(a.total_questions, 4);
        assert_eq!(a.correct_answers, 3);
        assert_eq!(a.percentage, 75.0);
        assert_eq!(
            a.topics,
            vec![
                ("Hygiene".to_string(), TopicStats { total: 2, correct: 2 }),
                ("Anatomie".to_string(), TopicStats { total: 2, correct: 1 }),
            ]
        );
        assert_eq!(
            a.weak_topics,
            vec![WeakTopic {
                topic: "Anatomie".into(),
                percentage: 50.0,
                errors: 1,
            }]
        );
    }

    #[test]
    fn weak_topics_sorted_worst_first() {
        let questions = vec![
            q("A", 1),
            q("A", 2),
            q("B", 3),
            q("C", 4),
            q("C", 5),
            q("C", 6),
            q("D", 7),
        ];
        // A 50 %, B 0 %, C 66.7 %, D 100 %
        let s = play(&questions, &[true, false, false, true, true, false, true]);
        let weak: Vec<_> = analyze(&s)
            .unwrap()
            .weak_topics
            .into_iter()
            .map(|w| w.topic)
            .collect();
        assert_eq!(weak, ["B", "A", "C"]);
    }

    #[test]
    fn exactly_seventy_percent_is_not_weak() {
        let questions: Vec<_> = (0..10).map(|i| q("T", i)).collect();
        let answers: Vec<bool> = (0..10).map(|i| i < 7).collect();
        let s = play(&questions, &answers);
        assert!(analyze(&s).unwrap().weak_topics.is_empty());
    }

    #[test]
    fn partial_session_only_counts_answered() {
        let questions = vec![q("A", 1), q("B", 2), q("B", 3)];
        let s = play(&questions, &[false]);
        let a = analyze(&s).unwrap();
        assert_eq!(a.total_questions, 1);
        assert_eq!(a.topics.len(), 1);
        assert_eq!(a.weak_topics[0].topic, "A");
    }

    #[test]
    fn feedback_bands() {
        assert_eq!(Feedback::from_percentage(80.0), Feedback::Excellent);
        assert_eq!(Feedback::from_percentage(79.9), Feedback::Good);
        assert_eq!(Feedback::from_percentage(60.0), Feedback::Good);
        assert_eq!(Feedback::from_percentage(10.0), Feedback::Practice);
    }

    #[test]
    fn review_rows_truncate_long_prompts() {
        let long = "x".repeat(80);
        let questions = vec![
            QuestionRecord::new("A", &long, "egal", &["ok"]).unwrap(),
            q("A", 2),
        ];
        let s = play(&questions, &[true, false]);
        let rows = review_rows(&s);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].prompt.chars().count(), 53);
        assert!(rows[0].was_correct);
        assert_eq!(rows[1].number, 2);
        assert_eq!(rows[1].prompt, "Frage 2...");
    }
}
