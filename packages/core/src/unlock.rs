//! Difficulty-tier unlock policy.
//!
//! Letters and phrases are gated by tier: tier 1 is always available, and
//! a higher tier opens once every item of every lower tier has been
//! attempted (any positive score counts). Completion is a separate,
//! stricter bar controlled by the mastery threshold.

use crate::catalog::{self, Letter, Phrase};
use crate::progress::ProgressRecord;
use crate::types::{DEFAULT_MASTERY_THRESHOLD, MAX_LETTER_TIER, MAX_PHRASE_TIER};

/// Tier-gating policy over the catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockPolicy {
    /// Best-score percentage at which an item counts as completed
    pub mastery_threshold: u8,
}

impl Default for UnlockPolicy {
    fn default() -> Self {
        Self {
            mastery_threshold: DEFAULT_MASTERY_THRESHOLD,
        }
    }
}

impl UnlockPolicy {
    pub fn new(mastery_threshold: u8) -> Self {
        Self {
            mastery_threshold: mastery_threshold.min(100),
        }
    }

    // ==================== Tier gating ====================

    /// A letter tier is open when every letter of every lower tier has
    /// been attempted. An empty tier gates nothing.
    pub fn is_letter_tier_unlocked(&self, record: &ProgressRecord, tier: u8) -> bool {
        (1..tier).all(|lower| {
            catalog::letters_in_tier(lower).all(|letter| record.letter_attempted(letter.id))
        })
    }

    /// Phrase counterpart of [`is_letter_tier_unlocked`](Self::is_letter_tier_unlocked).
    pub fn is_phrase_tier_unlocked(&self, record: &ProgressRecord, tier: u8) -> bool {
        (1..tier).all(|lower| {
            catalog::phrases_in_tier(lower).all(|phrase| record.phrase_attempted(phrase.id))
        })
    }

    /// Whether a letter is currently available. Unknown ids are locked.
    pub fn is_letter_unlocked(&self, record: &ProgressRecord, letter_id: u32) -> bool {
        match catalog::letter_by_id(letter_id) {
            Some(letter) => self.is_letter_tier_unlocked(record, letter.tier),
            None => false,
        }
    }

    /// Whether a phrase is currently available. Unknown ids are locked.
    pub fn is_phrase_unlocked(&self, record: &ProgressRecord, phrase_id: u32) -> bool {
        match catalog::phrase_by_id(phrase_id) {
            Some(phrase) => self.is_phrase_tier_unlocked(record, phrase.tier),
            None => false,
        }
    }

    // ==================== Availability ====================

    /// All currently unlocked letters, in catalog order.
    pub fn available_letters(&self, record: &ProgressRecord) -> Vec<&'static Letter> {
        let open: Vec<bool> = (1..=MAX_LETTER_TIER)
            .map(|tier| self.is_letter_tier_unlocked(record, tier))
            .collect();
        catalog::letters()
            .iter()
            .filter(|letter| open[usize::from(letter.tier) - 1])
            .collect()
    }

    /// All currently unlocked phrases, in catalog order.
    pub fn available_phrases(&self, record: &ProgressRecord) -> Vec<&'static Phrase> {
        let open: Vec<bool> = (1..=MAX_PHRASE_TIER)
            .map(|tier| self.is_phrase_tier_unlocked(record, tier))
            .collect();
        catalog::phrases()
            .iter()
            .filter(|phrase| open[usize::from(phrase.tier) - 1])
            .collect()
    }

    pub fn locked_letter_count(&self, record: &ProgressRecord) -> usize {
        catalog::letters().len() - self.available_letters(record).len()
    }

    pub fn locked_phrase_count(&self, record: &ProgressRecord) -> usize {
        catalog::phrases().len() - self.available_phrases(record).len()
    }

    // ==================== Completion ====================

    pub fn is_letter_completed(&self, record: &ProgressRecord, letter_id: u32) -> bool {
        record.letter_score(letter_id) >= self.mastery_threshold
    }

    pub fn is_phrase_completed(&self, record: &ProgressRecord, phrase_id: u32) -> bool {
        record.phrase_score(phrase_id) >= self.mastery_threshold
    }

    /// Percentage of the alphabet completed, rounded to the nearest whole.
    pub fn overall_letter_progress(&self, record: &ProgressRecord) -> u8 {
        percentage(
            record.completed_letter_count(self.mastery_threshold),
            catalog::letters().len(),
        )
    }

    /// Percentage of the phrase catalog completed, rounded to the nearest whole.
    pub fn overall_phrase_progress(&self, record: &ProgressRecord) -> u8 {
        percentage(
            record.completed_phrase_count(self.mastery_threshold),
            catalog::phrases().len(),
        )
    }
}

fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u8
}

// ==================== Tests ====================
