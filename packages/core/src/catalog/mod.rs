//! Static content catalogs.
//!
//! The catalogs are fixed, load-time-constant tables shipped with the app:
//! 24 Greek letters and 100 common phrases. They are never mutated at
//! runtime; everything else in the crate derives from them.

mod letters;
mod phrases;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::types::{LetterCategory, PhraseCategory};

pub use letters::LETTERS;
pub use phrases::PHRASES;

// ============================================================================
// Catalog entry types
// ============================================================================

/// A Greek word with its English gloss, as shown in the letter word bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GreekWord {
    pub greek: &'static str,
    pub gloss: &'static str,
}

/// One letter of the Greek alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Letter {
    pub id: u32,
    /// English letter name ("Alpha", "Beta", ...)
    pub name: &'static str,
    pub uppercase: &'static str,
    pub lowercase: &'static str,
    /// Short phonetic tag ("ah", "beh", ...)
    pub sound: &'static str,
    /// English sound comparison shown as a hint
    pub comparison: &'static str,
    /// English words starting with a similar sound
    pub example_words: &'static [&'static str],
    pub category: LetterCategory,
    /// Difficulty tier, 1-4
    pub tier: u8,
    /// Mnemonic describing the letter's shape
    pub visual_aid: &'static str,
    /// Common Greek words using this letter
    pub common_words: &'static [GreekWord],
}

/// One catalog phrase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Phrase {
    pub id: u32,
    pub category: PhraseCategory,
    pub greek: &'static str,
    /// Syllable-stress pronunciation guide ("YAH-sahs")
    pub pronunciation: &'static str,
    pub english: &'static str,
    /// Difficulty tier, 1-3
    pub tier: u8,
    /// Free-text usage note
    pub notes: &'static str,
}

// ============================================================================
// Accessors
// ============================================================================

/// The full alphabet in catalog order (id ascending).
pub fn letters() -> &'static [Letter] {
    &LETTERS
}

/// All phrases in catalog order (id ascending).
pub fn phrases() -> &'static [Phrase] {
    &PHRASES
}

pub fn letter_by_id(id: u32) -> Option<&'static Letter> {
    LETTERS.iter().find(|letter| letter.id == id)
}

/// Phrase lookup by id. Backed by a lazily built index since the phrase
/// table is the larger of the two.
pub fn phrase_by_id(id: u32) -> Option<&'static Phrase> {
    static INDEX: OnceLock<BTreeMap<u32, &'static Phrase>> = OnceLock::new();
    let index = INDEX.get_or_init(|| PHRASES.iter().map(|phrase| (phrase.id, phrase)).collect());
    index.get(&id).copied()
}

pub fn letter_by_name(name: &str) -> Option<&'static Letter> {
    LETTERS
        .iter()
        .find(|letter| letter.name.eq_ignore_ascii_case(name))
}

/// Letters of a single difficulty tier, in catalog order.
pub fn letters_in_tier(tier: u8) -> impl Iterator<Item = &'static Letter> {
    LETTERS.iter().filter(move |letter| letter.tier == tier)
}

/// Phrases of a single difficulty tier, in catalog order.
pub fn phrases_in_tier(tier: u8) -> impl Iterator<Item = &'static Phrase> {
    PHRASES.iter().filter(move |phrase| phrase.tier == tier)
}

/// Letters at or below a difficulty cap, in catalog order.
pub fn letters_up_to_tier(max_tier: u8) -> impl Iterator<Item = &'static Letter> {
    LETTERS.iter().filter(move |letter| letter.tier <= max_tier)
}

/// Phrases at or below a difficulty cap, in catalog order.
pub fn phrases_up_to_tier(max_tier: u8) -> impl Iterator<Item = &'static Phrase> {
    PHRASES.iter().filter(move |phrase| phrase.tier <= max_tier)
}

pub fn vowels() -> impl Iterator<Item = &'static Letter> {
    LETTERS
        .iter()
        .filter(|letter| letter.category == LetterCategory::Vowel)
}

pub fn consonants() -> impl Iterator<Item = &'static Letter> {
    LETTERS
        .iter()
        .filter(|letter| letter.category == LetterCategory::Consonant)
}

pub fn phrases_in_category(category: PhraseCategory) -> impl Iterator<Item = &'static Phrase> {
    PHRASES
        .iter()
        .filter(move |phrase| phrase.category == category)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAX_LETTER_TIER, MAX_PHRASE_TIER};
    use std::collections::HashSet;

    #[test]
    fn test_letter_catalog_size() {
        assert_eq!(LETTERS.len(), 24);
    }

    #[test]
    fn test_phrase_catalog_size() {
        assert_eq!(PHRASES.len(), 100);
    }

    #[test]
    fn test_letter_ids_unique_and_ascending() {
        let ids: Vec<u32> = LETTERS.iter().map(|l| l.id).collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), LETTERS.len());
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted, "catalog order must be id ascending");
    }

    #[test]
    fn test_phrase_ids_unique_and_ascending() {
        let ids: Vec<u32> = PHRASES.iter().map(|p| p.id).collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), PHRASES.len());
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted, "catalog order must be id ascending");
    }

    #[test]
    fn test_letter_tiers_in_range_and_populated() {
        for letter in letters() {
            assert!(
                (1..=MAX_LETTER_TIER).contains(&letter.tier),
                "{} has tier {}",
                letter.name,
                letter.tier
            );
        }
        for tier in 1..=MAX_LETTER_TIER {
            assert!(
                letters_in_tier(tier).count() > 0,
                "tier {} has no letters",
                tier
            );
        }
    }

    #[test]
    fn test_phrase_tiers_in_range_and_populated() {
        for phrase in phrases() {
            assert!((1..=MAX_PHRASE_TIER).contains(&phrase.tier));
        }
        for tier in 1..=MAX_PHRASE_TIER {
            assert!(phrases_in_tier(tier).count() > 0);
        }
    }

    #[test]
    fn test_tier_caps_are_cumulative() {
        assert_eq!(letters_up_to_tier(MAX_LETTER_TIER).count(), 24);
        assert_eq!(phrases_up_to_tier(MAX_PHRASE_TIER).count(), 100);
        let capped = letters_up_to_tier(2).count();
        assert_eq!(
            capped,
            letters_in_tier(1).count() + letters_in_tier(2).count()
        );
    }

    #[test]
    fn test_vowel_consonant_partition() {
        assert_eq!(vowels().count(), 7);
        assert_eq!(consonants().count(), 17);
    }

    #[test]
    fn test_every_phrase_category_populated() {
        for category in PhraseCategory::ALL {
            assert!(
                phrases_in_category(category).count() > 0,
                "category {} has no phrases",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_lookups() {
        let alpha = letter_by_id(1).unwrap();
        assert_eq!(alpha.name, "Alpha");
        assert_eq!(alpha.uppercase, "Α");
        assert!(letter_by_id(0).is_none());
        assert!(letter_by_id(25).is_none());

        assert_eq!(letter_by_name("omega").unwrap().id, 24);
        assert!(letter_by_name("Digamma").is_none());

        let hello = phrase_by_id(1).unwrap();
        assert_eq!(hello.greek, "Γεια σας");
        assert!(phrase_by_id(101).is_none());
    }

    #[test]
    fn test_letters_have_example_material() {
        for letter in letters() {
            assert!(!letter.example_words.is_empty(), "{}", letter.name);
            assert!(!letter.sound.is_empty());
            assert!(!letter.visual_aid.is_empty());
        }
    }
}
