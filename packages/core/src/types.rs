//! Shared types and constants used across the core modules.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Number of answer options in a generated question
pub const OPTION_COUNT: usize = 4;

/// Number of incorrect options drawn alongside the correct answer
pub const DISTRACTOR_COUNT: usize = 3;

/// Minimum candidate-pool size before the generator falls back to the
/// full catalog
pub const MIN_POOL_SIZE: usize = 4;

/// Questions per practice session
pub const SESSION_QUESTIONS: u32 = 10;

/// Best-score percentage at which an item counts as completed
pub const DEFAULT_MASTERY_THRESHOLD: u8 = 100;

/// Bounded retries against the recent-question history before accepting
/// whatever the last attempt produced
pub const MAX_GENERATION_ATTEMPTS: usize = 15;

/// An item practiced this many times in one session stops being preferred
/// as a focus item
pub const FOCUS_PRACTICE_LIMIT: u32 = 3;

/// Recent prompts remembered for anti-repetition
pub const HISTORY_CAPACITY: usize = 5;

/// Highest letter difficulty tier
pub const MAX_LETTER_TIER: u8 = 4;

/// Highest phrase difficulty tier
pub const MAX_PHRASE_TIER: u8 = 3;

// ==================== Categories ====================

/// Letter category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCategory {
    Vowel,
    Consonant,
}

impl LetterCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterCategory::Vowel => "vowel",
            LetterCategory::Consonant => "consonant",
        }
    }
}

/// Phrase category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseCategory {
    Greetings,
    Communication,
    Directions,
    Dining,
    Shopping,
    Numbers,
    Emergencies,
    Social,
}

impl PhraseCategory {
    /// All categories in catalog order
    pub const ALL: [PhraseCategory; 8] = [
        PhraseCategory::Greetings,
        PhraseCategory::Communication,
        PhraseCategory::Directions,
        PhraseCategory::Dining,
        PhraseCategory::Shopping,
        PhraseCategory::Numbers,
        PhraseCategory::Emergencies,
        PhraseCategory::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseCategory::Greetings => "greetings",
            PhraseCategory::Communication => "communication",
            PhraseCategory::Directions => "directions",
            PhraseCategory::Dining => "dining",
            PhraseCategory::Shopping => "shopping",
            PhraseCategory::Numbers => "numbers",
            PhraseCategory::Emergencies => "emergencies",
            PhraseCategory::Social => "social",
        }
    }

    /// Human-readable category name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            PhraseCategory::Greetings => "Greetings & Politeness",
            PhraseCategory::Communication => "Basic Communication",
            PhraseCategory::Directions => "Directions & Travel",
            PhraseCategory::Dining => "Dining & Food",
            PhraseCategory::Shopping => "Shopping",
            PhraseCategory::Numbers => "Numbers & Time",
            PhraseCategory::Emergencies => "Emergencies",
            PhraseCategory::Social => "Social Interactions",
        }
    }

    /// Icon shown next to the category name
    pub fn icon(&self) -> &'static str {
        match self {
            PhraseCategory::Greetings => "👋",
            PhraseCategory::Communication => "💬",
            PhraseCategory::Directions => "🗺️",
            PhraseCategory::Dining => "🍽️",
            PhraseCategory::Shopping => "🛍️",
            PhraseCategory::Numbers => "🕐",
            PhraseCategory::Emergencies => "🚨",
            PhraseCategory::Social => "👥",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "greetings" => Some(PhraseCategory::Greetings),
            "communication" => Some(PhraseCategory::Communication),
            "directions" => Some(PhraseCategory::Directions),
            "dining" => Some(PhraseCategory::Dining),
            "shopping" => Some(PhraseCategory::Shopping),
            "numbers" => Some(PhraseCategory::Numbers),
            "emergencies" => Some(PhraseCategory::Emergencies),
            "social" => Some(PhraseCategory::Social),
            _ => None,
        }
    }
}

// ==================== Tests ====================
