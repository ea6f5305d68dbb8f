//! Practice flow: wires the question generator, the session state, and
//! the progress store together.
//!
//! One service instance drives one practice run at a time:
//!
//! - `start` opens a session and generates the first question
//! - `submit_answer` scores the answer, credits streak/points/phrase
//!   scores through the store, and folds the session average into the
//!   focus letter when a letter run ends
//! - `advance` generates the next question, or reports the run finished

use alfavita_core::{
    AchievementId, AnswerOutcome, ExerciseKind, FocusItem, GenerateError, PhraseCategory,
    PracticeSession, Question, QuestionGenerator, SessionSummary,
};

use crate::storage::ProgressStore;

/// What the learner sees after answering.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerFeedback {
    pub outcome: AnswerOutcome,
    /// Achievements earned by this answer
    pub new_achievements: Vec<AchievementId>,
    /// Present when this answer ended the session
    pub summary: Option<SessionSummary>,
}

struct ActiveSession {
    session: PracticeSession,
    question: Question,
    category: Option<PhraseCategory>,
}

/// Drives practice sessions. Holds the RNG; progress mutations go
/// through the [`ProgressStore`] passed to each call.
pub struct PracticeService {
    generator: QuestionGenerator,
    active: Option<ActiveSession>,
    last_summary: Option<SessionSummary>,
}

impl Default for PracticeService {
    fn default() -> Self {
        Self::new()
    }
}

impl PracticeService {
    pub fn new() -> Self {
        Self {
            generator: QuestionGenerator::new(),
            active: None,
            last_summary: None,
        }
    }

    /// Seeded construction for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: QuestionGenerator::with_seed(seed),
            active: None,
            last_summary: None,
        }
    }

    /// Begin a session of the given kind, replacing any session in
    /// progress, and generate its first question.
    pub fn start(
        &mut self,
        store: &ProgressStore,
        kind: ExerciseKind,
        category: Option<PhraseCategory>,
    ) -> Result<&Question, GenerateError> {
        let session = PracticeSession::new(kind);
        let question = self.generate(store, &session, category)?;
        self.last_summary = None;
        let active = self.active.insert(ActiveSession {
            session,
            question,
            category,
        });
        Ok(&active.question)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.active.as_ref().map(|a| &a.question)
    }

    pub fn question_number(&self) -> Option<u32> {
        self.active.as_ref().map(|a| a.session.question_number())
    }

    /// Summary of the most recently finished session.
    pub fn last_summary(&self) -> Option<SessionSummary> {
        self.last_summary
    }

    /// Score the answer to the current question.
    ///
    /// A correct letter answer credits points and the streak; a correct
    /// phrase answer additionally marks the phrase completed. When this
    /// answer finishes a letter run, the session average is folded into
    /// the last focus letter's best score.
    pub async fn submit_answer(
        &mut self,
        store: &mut ProgressStore,
        answer: &str,
    ) -> Option<AnswerFeedback> {
        let active = self.active.as_mut()?;
        let outcome = active.session.record_answer(&active.question, answer);
        let kind = active.session.kind();
        let focus = active.question.focus;
        let finished = active.session.is_finished();

        let mut new_achievements = Vec::new();
        if outcome.correct {
            new_achievements.extend(store.add_points(outcome.points_awarded).await);
            match kind {
                ExerciseKind::Letter(_) => {
                    new_achievements.extend(store.increment_streak().await);
                }
                ExerciseKind::Phrase(_) => {
                    if let Some(FocusItem::Phrase(id)) = focus {
                        new_achievements.extend(store.update_phrase_score(id, 100).await);
                    }
                }
            }
        }

        let summary = if finished {
            let finished_run = self.active.take()?;
            let summary = finished_run.session.summary();
            if summary.total > 0 {
                if let (ExerciseKind::Letter(_), Some(FocusItem::Letter(id))) =
                    (kind, finished_run.session.last_focus())
                {
                    new_achievements.extend(store.update_score(id, summary.average_percent).await);
                }
            }
            self.last_summary = Some(summary);
            Some(summary)
        } else {
            None
        };

        Some(AnswerFeedback {
            outcome,
            new_achievements,
            summary,
        })
    }

    /// Generate the next question, or return `None` when no session is
    /// in progress (including just-finished runs).
    pub fn advance(&mut self, store: &ProgressStore) -> Result<Option<&Question>, GenerateError> {
        let Some(active) = self.active.as_mut() else {
            return Ok(None);
        };
        active.question = match active.session.kind() {
            ExerciseKind::Letter(kind) => self.generator.generate_letter(
                kind,
                store.record(),
                store.policy(),
                active.session.history(),
                None,
            )?,
            ExerciseKind::Phrase(kind) => self.generator.generate_phrase(
                kind,
                store.record(),
                store.policy(),
                active.session.history(),
                active.category,
                None,
            )?,
        };
        Ok(Some(&active.question))
    }

    /// Abandon the session without folding its aggregate into progress.
    pub fn abandon(&mut self) {
        self.active = None;
    }

    fn generate(
        &mut self,
        store: &ProgressStore,
        session: &PracticeSession,
        category: Option<PhraseCategory>,
    ) -> Result<Question, GenerateError> {
        match session.kind() {
            ExerciseKind::Letter(kind) => self.generator.generate_letter(
                kind,
                store.record(),
                store.policy(),
                session.history(),
                None,
            ),
            ExerciseKind::Phrase(kind) => self.generator.generate_phrase(
                kind,
                store.record(),
                store.policy(),
                session.history(),
                category,
                None,
            ),
        }
    }
}
