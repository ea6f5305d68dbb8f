//! Multiple-choice question synthesis.
//!
//! One generation strategy per exercise kind, all sharing the same
//! contract:
//!
//! 1. Candidate pool = unlocked items (plus any caller filter); pools
//!    smaller than [`MIN_POOL_SIZE`] fall back to the full catalog
//! 2. Focus item = caller target, else an item practiced fewer than
//!    [`FOCUS_PRACTICE_LIMIT`] times this session, else uniform random
//! 3. Three distractors sampled without replacement from the pool
//! 4. Options = correct answer + distractor values, Fisher-Yates shuffled
//! 5. Prompt built from one of several templates, chosen at random
//! 6. Bounded reject-and-retry against recent prompts and the previous
//!    focus item; the last attempt is accepted regardless
//!
//! Generation never mutates progress; the RNG is the only state, and a
//! seeded generator replays the exact same question stream.

mod letters;
mod phrases;

use std::collections::{HashMap, VecDeque};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{self, Letter, Phrase};
use crate::progress::ProgressRecord;
use crate::types::{
    DISTRACTOR_COUNT, FOCUS_PRACTICE_LIMIT, HISTORY_CAPACITY, MAX_GENERATION_ATTEMPTS,
    MIN_POOL_SIZE, PhraseCategory,
};
use crate::unlock::UnlockPolicy;

// ==================== Exercise kinds ====================

/// Letter exercise kinds, one generation strategy each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterExerciseKind {
    MultipleChoice,
    LetterToSound,
    SoundToLetter,
    LetterMatching,
    WordAssociation,
    SoundIdentification,
}

impl LetterExerciseKind {
    pub const ALL: [LetterExerciseKind; 6] = [
        LetterExerciseKind::MultipleChoice,
        LetterExerciseKind::LetterToSound,
        LetterExerciseKind::SoundToLetter,
        LetterExerciseKind::LetterMatching,
        LetterExerciseKind::WordAssociation,
        LetterExerciseKind::SoundIdentification,
    ];
}

/// Phrase exercise kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhraseExerciseKind {
    TranslationToGreek,
    GreekToTranslation,
    PronunciationMatching,
    ConversationContext,
}

impl PhraseExerciseKind {
    pub const ALL: [PhraseExerciseKind; 4] = [
        PhraseExerciseKind::TranslationToGreek,
        PhraseExerciseKind::GreekToTranslation,
        PhraseExerciseKind::PronunciationMatching,
        PhraseExerciseKind::ConversationContext,
    ];
}

/// Any exercise kind; dispatch is exhaustive over this sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExerciseKind {
    Letter(LetterExerciseKind),
    Phrase(PhraseExerciseKind),
}

// ==================== Question ====================

/// The content item a question is testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusItem {
    Letter(u32),
    Phrase(u32),
}

impl FocusItem {
    pub fn id(&self) -> u32 {
        match self {
            FocusItem::Letter(id) | FocusItem::Phrase(id) => *id,
        }
    }
}

/// One generated multiple-choice question. Ephemeral; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub kind: ExerciseKind,
    pub prompt: String,
    pub correct_answer: String,
    /// Shuffled options including the correct answer; empty when the
    /// catalog could not yield a question
    pub options: Vec<String>,
    pub focus: Option<FocusItem>,
    /// Text to play through the speech collaborator, when the exercise
    /// is audio-driven
    pub audio_text: Option<String>,
    /// Short hint shown alongside the prompt
    pub hint: Option<String>,
    /// Situational framing for context exercises
    pub context: Option<String>,
}

impl Question {
    /// Sentinel for a catalog too small to form a question. Callers must
    /// not allow answer submission for it.
    fn insufficient_content(kind: ExerciseKind, prompt: &str) -> Self {
        Question {
            kind,
            prompt: prompt.to_string(),
            correct_answer: String::new(),
            options: Vec::new(),
            focus: None,
            audio_text: None,
            hint: None,
            context: None,
        }
    }

    pub fn is_answerable(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.is_answerable() && answer == self.correct_answer
    }
}

// ==================== Errors ====================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Caller-supplied target id not present in the catalog
    #[error("unknown content item id {0}")]
    UnknownItem(u32),
}

// ==================== Recent history ====================

/// Per-session memory used to bias generation away from repeats.
#[derive(Debug, Clone, Default)]
pub struct RecentHistory {
    prompts: VecDeque<String>,
    last_focus: Option<FocusItem>,
    practice_counts: HashMap<FocusItem, u32>,
}

impl RecentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an asked question.
    pub fn note(&mut self, question: &Question) {
        if self.prompts.len() == HISTORY_CAPACITY {
            self.prompts.pop_front();
        }
        self.prompts.push_back(question.prompt.clone());
        if let Some(focus) = question.focus {
            self.last_focus = Some(focus);
            *self.practice_counts.entry(focus).or_insert(0) += 1;
        }
    }

    pub fn prompt_seen(&self, prompt: &str) -> bool {
        self.prompts.iter().any(|p| p == prompt)
    }

    pub fn last_focus(&self) -> Option<FocusItem> {
        self.last_focus
    }

    pub fn practice_count(&self, focus: FocusItem) -> u32 {
        self.practice_counts.get(&focus).copied().unwrap_or(0)
    }
}

// ==================== Generator ====================

/// Question factory holding the RNG.
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    rng: ChaCha8Rng,
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionGenerator {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeded construction; the same seed replays the same questions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate one question of any kind.
    pub fn generate(
        &mut self,
        kind: ExerciseKind,
        record: &ProgressRecord,
        policy: &UnlockPolicy,
        history: &RecentHistory,
        target: Option<u32>,
    ) -> Result<Question, GenerateError> {
        match kind {
            ExerciseKind::Letter(kind) => {
                self.generate_letter(kind, record, policy, history, target)
            }
            ExerciseKind::Phrase(kind) => {
                self.generate_phrase(kind, record, policy, history, None, target)
            }
        }
    }

    /// Generate a letter question from the currently unlocked alphabet.
    pub fn generate_letter(
        &mut self,
        kind: LetterExerciseKind,
        record: &ProgressRecord,
        policy: &UnlockPolicy,
        history: &RecentHistory,
        target: Option<u32>,
    ) -> Result<Question, GenerateError> {
        if let Some(id) = target {
            if catalog::letter_by_id(id).is_none() {
                return Err(GenerateError::UnknownItem(id));
            }
        }
        let mut pool = policy.available_letters(record);
        if pool.len() < MIN_POOL_SIZE {
            pool = catalog::letters().iter().collect();
        }
        Ok(self.letter_from_pool(kind, &pool, history, target))
    }

    /// Generate a phrase question, optionally restricted to one category.
    pub fn generate_phrase(
        &mut self,
        kind: PhraseExerciseKind,
        record: &ProgressRecord,
        policy: &UnlockPolicy,
        history: &RecentHistory,
        category: Option<PhraseCategory>,
        target: Option<u32>,
    ) -> Result<Question, GenerateError> {
        if let Some(id) = target {
            if catalog::phrase_by_id(id).is_none() {
                return Err(GenerateError::UnknownItem(id));
            }
        }
        let mut pool: Vec<&'static Phrase> = policy
            .available_phrases(record)
            .into_iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect();

        // spread practice onto not-yet-completed phrases when enough exist
        let uncompleted: Vec<&'static Phrase> = pool
            .iter()
            .copied()
            .filter(|p| !policy.is_phrase_completed(record, p.id))
            .collect();
        if uncompleted.len() >= MIN_POOL_SIZE {
            pool = uncompleted;
        }

        if pool.len() < MIN_POOL_SIZE {
            pool = catalog::phrases().iter().collect();
        }
        Ok(self.phrase_from_pool(kind, &pool, history, target))
    }

    // ==================== Pool-level generation ====================

    fn letter_from_pool(
        &mut self,
        kind: LetterExerciseKind,
        pool: &[&'static Letter],
        history: &RecentHistory,
        target: Option<u32>,
    ) -> Question {
        if pool.len() < 2 {
            return Question::insufficient_content(
                ExerciseKind::Letter(kind),
                "Complete more letters to unlock practice exercises!",
            );
        }
        self.with_retries(history, |this| {
            let focus = this.pick_focus(pool, history, target, |l| FocusItem::Letter(l.id));
            let distractors = this.pick_distractors(pool, focus.id);
            letters::build(kind, &mut this.rng, focus, &distractors)
        })
    }

    fn phrase_from_pool(
        &mut self,
        kind: PhraseExerciseKind,
        pool: &[&'static Phrase],
        history: &RecentHistory,
        target: Option<u32>,
    ) -> Question {
        if pool.len() < 2 {
            return Question::insufficient_content(
                ExerciseKind::Phrase(kind),
                "Complete more phrases to unlock practice exercises!",
            );
        }
        self.with_retries(history, |this| {
            let focus = this.pick_focus(pool, history, target, |p| FocusItem::Phrase(p.id));
            let distractors = this.pick_distractors(pool, focus.id);
            phrases::build(kind, &mut this.rng, focus, &distractors)
        })
    }

    // ==================== Shared mechanics ====================

    /// Reject-and-retry against the recent history; accept the last
    /// attempt unconditionally so a small pool cannot livelock.
    fn with_retries<F>(&mut self, history: &RecentHistory, mut attempt: F) -> Question
    where
        F: FnMut(&mut Self) -> Question,
    {
        let mut question = attempt(self);
        for _ in 1..MAX_GENERATION_ATTEMPTS {
            let repeated_prompt = history.prompt_seen(&question.prompt);
            let repeated_focus =
                question.focus.is_some() && question.focus == history.last_focus();
            if !repeated_prompt && !repeated_focus {
                break;
            }
            question = attempt(self);
        }
        question
    }

    /// Caller target wins; otherwise prefer under-practiced items, then
    /// uniform random over the pool.
    fn pick_focus<T: Copy>(
        &mut self,
        pool: &[T],
        history: &RecentHistory,
        target: Option<u32>,
        to_focus: impl Fn(T) -> FocusItem,
    ) -> T
    where
        T: HasId,
    {
        if let Some(id) = target {
            if let Some(item) = pool.iter().find(|item| item.item_id() == id) {
                return *item;
            }
        }
        let fresh: Vec<T> = pool
            .iter()
            .copied()
            .filter(|item| history.practice_count(to_focus(*item)) < FOCUS_PRACTICE_LIMIT)
            .collect();
        let candidates = if fresh.is_empty() { pool } else { &fresh };
        // candidates is never empty here; pools of <2 bail out earlier
        *candidates
            .choose(&mut self.rng)
            .unwrap_or(&pool[0])
    }

    fn pick_distractors<T: Copy + HasId>(&mut self, pool: &[T], focus_id: u32) -> Vec<T> {
        let others: Vec<T> = pool
            .iter()
            .copied()
            .filter(|item| item.item_id() != focus_id)
            .collect();
        others
            .choose_multiple(&mut self.rng, DISTRACTOR_COUNT)
            .copied()
            .collect()
    }
}

trait HasId {
    fn item_id(&self) -> u32;
}

impl HasId for &'static Letter {
    fn item_id(&self) -> u32 {
        self.id
    }
}

impl HasId for &'static Phrase {
    fn item_id(&self) -> u32 {
        self.id
    }
}

/// Assemble and shuffle the option list for a built question.
fn shuffle_options(rng: &mut ChaCha8Rng, correct: String, distractors: Vec<String>) -> Vec<String> {
    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(correct);
    options.extend(distractors);
    options.shuffle(rng);
    options
}

/// Uniform template pick.
fn pick_template<'a, T>(rng: &mut ChaCha8Rng, templates: &'a [T]) -> &'a T {
    &templates[rng.gen_range(0..templates.len())]
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_policy_record() -> (UnlockPolicy, ProgressRecord) {
        let policy = UnlockPolicy::default();
        let mut record = ProgressRecord::new();
        for letter in catalog::letters() {
            record.record_letter_score(letter.id, 50);
        }
        for phrase in catalog::phrases() {
            record.record_phrase_score(phrase.id, 50);
        }
        (policy, record)
    }

    #[test]
    fn test_letter_question_shape() {
        let (policy, record) = full_policy_record();
        let mut gen = QuestionGenerator::with_seed(7);
        let history = RecentHistory::new();

        for kind in LetterExerciseKind::ALL {
            let question = gen
                .generate_letter(kind, &record, &policy, &history, None)
                .unwrap();
            assert!(question.is_answerable());
            assert_eq!(question.options.len(), 4, "{:?}", kind);
            assert!(question.options.contains(&question.correct_answer));
            assert!(matches!(question.focus, Some(FocusItem::Letter(_))));
            assert!(!question.prompt.is_empty());
        }
    }

    #[test]
    fn test_phrase_question_shape() {
        let (policy, record) = full_policy_record();
        let mut gen = QuestionGenerator::with_seed(7);
        let history = RecentHistory::new();

        for kind in PhraseExerciseKind::ALL {
            let question = gen
                .generate_phrase(kind, &record, &policy, &history, None, None)
                .unwrap();
            assert!(question.is_answerable());
            assert_eq!(question.options.len(), 4);
            assert!(question.options.contains(&question.correct_answer));
            assert!(matches!(question.focus, Some(FocusItem::Phrase(_))));
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let (policy, record) = full_policy_record();
        let history = RecentHistory::new();

        let mut a = QuestionGenerator::with_seed(42);
        let mut b = QuestionGenerator::with_seed(42);
        for kind in LetterExerciseKind::ALL {
            let qa = a
                .generate_letter(kind, &record, &policy, &history, None)
                .unwrap();
            let qb = b
                .generate_letter(kind, &record, &policy, &history, None)
                .unwrap();
            assert_eq!(qa, qb);
        }
    }

    #[test]
    fn test_caller_target_fixes_focus() {
        let (policy, record) = full_policy_record();
        let mut gen = QuestionGenerator::with_seed(3);
        let history = RecentHistory::new();

        let question = gen
            .generate_letter(
                LetterExerciseKind::MultipleChoice,
                &record,
                &policy,
                &history,
                Some(24),
            )
            .unwrap();
        assert_eq!(question.focus, Some(FocusItem::Letter(24)));
    }

    #[test]
    fn test_unknown_target_is_an_error() {
        let (policy, record) = full_policy_record();
        let mut gen = QuestionGenerator::with_seed(3);
        let history = RecentHistory::new();

        let err = gen
            .generate_letter(
                LetterExerciseKind::MultipleChoice,
                &record,
                &policy,
                &history,
                Some(999),
            )
            .unwrap_err();
        assert_eq!(err, GenerateError::UnknownItem(999));
    }

    #[test]
    fn test_small_unlocked_pool_falls_back_to_catalog() {
        // fresh record: only tier-1 phrases unlocked, but questions can
        // still draw 4 options
        let policy = UnlockPolicy::default();
        let record = ProgressRecord::new();
        let mut gen = QuestionGenerator::with_seed(9);
        let history = RecentHistory::new();

        let question = gen
            .generate_letter(
                LetterExerciseKind::LetterToSound,
                &record,
                &policy,
                &history,
                None,
            )
            .unwrap();
        assert_eq!(question.options.len(), 4);
    }

    #[test]
    fn test_insufficient_pool_yields_sentinel() {
        let mut gen = QuestionGenerator::with_seed(1);
        let history = RecentHistory::new();
        let alpha = catalog::letter_by_id(1).unwrap();

        let question = gen.letter_from_pool(
            LetterExerciseKind::MultipleChoice,
            &[alpha],
            &history,
            None,
        );
        assert!(!question.is_answerable());
        assert!(question.options.is_empty());
        assert!(question.focus.is_none());
        assert!(!question.is_correct(""));
    }

    #[test]
    fn test_category_filter_restricts_phrase_focus() {
        let (policy, record) = full_policy_record();
        let mut gen = QuestionGenerator::with_seed(5);
        let history = RecentHistory::new();

        for _ in 0..20 {
            let question = gen
                .generate_phrase(
                    PhraseExerciseKind::GreekToTranslation,
                    &record,
                    &policy,
                    &history,
                    Some(PhraseCategory::Dining),
                    None,
                )
                .unwrap();
            let Some(FocusItem::Phrase(id)) = question.focus else {
                panic!("phrase focus expected");
            };
            assert_eq!(
                catalog::phrase_by_id(id).unwrap().category,
                PhraseCategory::Dining
            );
        }
    }

    #[test]
    fn test_retry_avoids_immediate_focus_repeat() {
        let (policy, record) = full_policy_record();
        let mut gen = QuestionGenerator::with_seed(11);
        let mut history = RecentHistory::new();
        let mut repeats = 0;

        let mut previous: Option<FocusItem> = None;
        for _ in 0..100 {
            let question = gen
                .generate_letter(
                    LetterExerciseKind::MultipleChoice,
                    &record,
                    &policy,
                    &history,
                    None,
                )
                .unwrap();
            if question.focus == previous {
                repeats += 1;
            }
            previous = question.focus;
            history.note(&question);
        }
        // soft constraint: with 24 letters and 15 attempts, back-to-back
        // repeats should essentially never survive the retry loop
        assert!(repeats <= 2, "{} immediate repeats", repeats);
    }

    #[test]
    fn test_focus_distribution_is_not_degenerate() {
        let (policy, record) = full_policy_record();
        let mut gen = QuestionGenerator::with_seed(17);
        let history = RecentHistory::new();
        let mut counts: HashMap<FocusItem, u32> = HashMap::new();

        for _ in 0..1000 {
            let question = gen
                .generate_letter(
                    LetterExerciseKind::MultipleChoice,
                    &record,
                    &policy,
                    &history,
                    None,
                )
                .unwrap();
            *counts.entry(question.focus.unwrap()).or_insert(0) += 1;
        }
        let max = counts.values().copied().max().unwrap();
        assert!(max < 600, "one focus item drew {} of 1000 picks", max);
    }

    #[test]
    fn test_history_tracks_prompts_and_counts() {
        let mut history = RecentHistory::new();
        let focus = FocusItem::Letter(1);
        let question = Question {
            kind: ExerciseKind::Letter(LetterExerciseKind::MultipleChoice),
            prompt: "p1".to_string(),
            correct_answer: "Alpha".to_string(),
            options: vec!["Alpha".to_string(); 4],
            focus: Some(focus),
            audio_text: None,
            hint: None,
            context: None,
        };

        assert!(!history.prompt_seen("p1"));
        history.note(&question);
        assert!(history.prompt_seen("p1"));
        assert_eq!(history.last_focus(), Some(focus));
        assert_eq!(history.practice_count(focus), 1);

        // capacity bound: old prompts age out
        for i in 0..HISTORY_CAPACITY {
            let mut q = question.clone();
            q.prompt = format!("p{}", i + 2);
            history.note(&q);
        }
        assert!(!history.prompt_seen("p1"));
        assert_eq!(
            history.practice_count(focus),
            1 + HISTORY_CAPACITY as u32
        );
    }
}
