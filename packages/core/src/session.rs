//! Practice-session state and point scoring.
//!
//! A session is a run of [`SESSION_QUESTIONS`] questions of one exercise
//! kind. Points per correct answer start high and decay toward a floor of
//! 10 as the session progresses. The session keeps its own recent-question
//! history for the generator and folds nothing into persistent progress
//! itself; the caller reads the summary when the run ends.

use serde::Serialize;

use crate::generator::{ExerciseKind, FocusItem, Question, RecentHistory};
use crate::types::SESSION_QUESTIONS;

/// Result of answering one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub correct: bool,
    pub points_awarded: u32,
}

/// End-of-session aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub correct: u32,
    pub total: u32,
    /// `round(100 * correct / total)`; 0 for an empty session
    pub average_percent: u8,
    pub points: u32,
}

/// One in-flight practice run.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    kind: ExerciseKind,
    question_number: u32,
    points: u32,
    correct: u32,
    total: u32,
    history: RecentHistory,
    last_focus: Option<FocusItem>,
}

impl PracticeSession {
    pub fn new(kind: ExerciseKind) -> Self {
        Self {
            kind,
            question_number: 1,
            points: 0,
            correct: 0,
            total: 0,
            history: RecentHistory::new(),
            last_focus: None,
        }
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    /// Current question number, 1-based.
    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    pub fn is_finished(&self) -> bool {
        self.total >= SESSION_QUESTIONS
    }

    pub fn history(&self) -> &RecentHistory {
        &self.history
    }

    /// Focus of the most recently answered question; the caller folds the
    /// session average into this item when a letter run ends.
    pub fn last_focus(&self) -> Option<FocusItem> {
        self.last_focus
    }

    /// Points a correct answer is worth at a given question number.
    /// Phrase questions pay slightly more than letter questions.
    pub fn points_for(kind: ExerciseKind, question_number: u32) -> u32 {
        let base: u32 = match kind {
            ExerciseKind::Letter(_) => 20,
            ExerciseKind::Phrase(_) => 25,
        };
        base.saturating_sub(question_number.saturating_mul(2)).max(10)
    }

    /// Score an answer to the current question and advance the session.
    /// Unanswerable sentinel questions are not scored.
    pub fn record_answer(&mut self, question: &Question, answer: &str) -> AnswerOutcome {
        if !question.is_answerable() || self.is_finished() {
            return AnswerOutcome {
                correct: false,
                points_awarded: 0,
            };
        }

        let correct = question.is_correct(answer);
        let points_awarded = if correct {
            Self::points_for(self.kind, self.question_number)
        } else {
            0
        };

        self.total += 1;
        if correct {
            self.correct += 1;
            self.points += points_awarded;
        }
        self.history.note(question);
        self.last_focus = question.focus;
        if self.question_number < SESSION_QUESTIONS {
            self.question_number += 1;
        }

        AnswerOutcome {
            correct,
            points_awarded,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        let average_percent = if self.total == 0 {
            0
        } else {
            ((f64::from(self.correct) / f64::from(self.total)) * 100.0).round() as u8
        };
        SessionSummary {
            correct: self.correct,
            total: self.total,
            average_percent,
            points: self.points,
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::LetterExerciseKind;

    const LETTER_KIND: ExerciseKind = ExerciseKind::Letter(LetterExerciseKind::MultipleChoice);
    const PHRASE_KIND: ExerciseKind =
        ExerciseKind::Phrase(crate::generator::PhraseExerciseKind::TranslationToGreek);

    fn question(kind: ExerciseKind, correct: &str) -> Question {
        Question {
            kind,
            prompt: "p".to_string(),
            correct_answer: correct.to_string(),
            options: vec![
                correct.to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            focus: Some(FocusItem::Letter(1)),
            audio_text: None,
            hint: None,
            context: None,
        }
    }

    #[test]
    fn test_letter_points_decay_to_floor() {
        let expected = [18, 16, 14, 12, 10, 10, 10, 10, 10, 10];
        for (i, &points) in expected.iter().enumerate() {
            assert_eq!(PracticeSession::points_for(LETTER_KIND, i as u32 + 1), points);
        }
    }

    #[test]
    fn test_phrase_points_decay_to_floor() {
        let expected = [23, 21, 19, 17, 15, 13, 11, 10, 10, 10];
        for (i, &points) in expected.iter().enumerate() {
            assert_eq!(PracticeSession::points_for(PHRASE_KIND, i as u32 + 1), points);
        }
    }

    #[test]
    fn test_all_correct_letter_session_totals() {
        let mut session = PracticeSession::new(LETTER_KIND);
        let q = question(LETTER_KIND, "a");
        for _ in 0..SESSION_QUESTIONS {
            let outcome = session.record_answer(&q, "a");
            assert!(outcome.correct);
        }
        assert!(session.is_finished());
        let summary = session.summary();
        assert_eq!(summary.correct, 10);
        assert_eq!(summary.total, 10);
        assert_eq!(summary.average_percent, 100);
        assert_eq!(summary.points, 120);
    }

    #[test]
    fn test_all_correct_phrase_session_totals() {
        let mut session = PracticeSession::new(PHRASE_KIND);
        let q = question(PHRASE_KIND, "a");
        for _ in 0..SESSION_QUESTIONS {
            session.record_answer(&q, "a");
        }
        assert_eq!(session.summary().points, 149);
    }

    #[test]
    fn test_mixed_answers_round_average() {
        let mut session = PracticeSession::new(LETTER_KIND);
        let q = question(LETTER_KIND, "a");
        // 7 correct, 3 wrong: round(70.0) == 70
        for i in 0..10 {
            let answer = if i < 7 { "a" } else { "b" };
            session.record_answer(&q, answer);
        }
        let summary = session.summary();
        assert_eq!(summary.correct, 7);
        assert_eq!(summary.average_percent, 70);
    }

    #[test]
    fn test_wrong_answer_awards_nothing() {
        let mut session = PracticeSession::new(LETTER_KIND);
        let q = question(LETTER_KIND, "a");
        let outcome = session.record_answer(&q, "b");
        assert!(!outcome.correct);
        assert_eq!(outcome.points_awarded, 0);
        assert_eq!(session.summary().points, 0);
        assert_eq!(session.question_number(), 2);
    }

    #[test]
    fn test_sentinel_question_is_not_scored() {
        let mut session = PracticeSession::new(LETTER_KIND);
        let mut q = question(LETTER_KIND, "a");
        q.options.clear();
        let outcome = session.record_answer(&q, "a");
        assert!(!outcome.correct);
        assert_eq!(session.summary().total, 0);
        assert_eq!(session.question_number(), 1);
    }

    #[test]
    fn test_finished_session_ignores_further_answers() {
        let mut session = PracticeSession::new(LETTER_KIND);
        let q = question(LETTER_KIND, "a");
        for _ in 0..SESSION_QUESTIONS {
            session.record_answer(&q, "a");
        }
        let outcome = session.record_answer(&q, "a");
        assert!(!outcome.correct);
        assert_eq!(session.summary().total, 10);
    }

    #[test]
    fn test_history_and_last_focus_track_answers() {
        let mut session = PracticeSession::new(LETTER_KIND);
        let q = question(LETTER_KIND, "a");
        assert!(session.last_focus().is_none());
        session.record_answer(&q, "a");
        assert_eq!(session.last_focus(), Some(FocusItem::Letter(1)));
        assert!(session.history().prompt_seen("p"));
    }

    #[test]
    fn test_empty_session_summary() {
        let session = PracticeSession::new(LETTER_KIND);
        let summary = session.summary();
        assert_eq!(summary.average_percent, 0);
        assert_eq!(summary.points, 0);
    }
}
