//! Achievement catalog and evaluation.
//!
//! Achievements are milestones over the progress record. Evaluation is
//! monotone: once a criterion holds it keeps holding (scores, streak and
//! points never decrease), so an earned achievement is never re-checked
//! and its timestamp never changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::progress::ProgressRecord;
use crate::types::LetterCategory;

// ==================== Definitions ====================

/// Stable achievement identifier, serialized kebab-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementId {
    FirstSteps,
    VowelVirtuoso,
    AlphabetExplorer,
    AlphabetMaster,
    FirstWords,
    Conversationalist,
    OnFire,
    Centurion,
}

/// One achievement definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Bonus points granted when earned
    pub reward: u32,
}

pub static ACHIEVEMENTS: [Achievement; 8] = [
    Achievement {
        id: AchievementId::FirstSteps,
        name: "First Steps",
        description: "Practice your first letter",
        icon: "👣",
        reward: 10,
    },
    Achievement {
        id: AchievementId::VowelVirtuoso,
        name: "Vowel Virtuoso",
        description: "Practice all seven vowels",
        icon: "🎵",
        reward: 25,
    },
    Achievement {
        id: AchievementId::AlphabetExplorer,
        name: "Alphabet Explorer",
        description: "Practice every letter of the alphabet",
        icon: "🧭",
        reward: 50,
    },
    Achievement {
        id: AchievementId::AlphabetMaster,
        name: "Alphabet Master",
        description: "Master every letter of the alphabet",
        icon: "🏛️",
        reward: 100,
    },
    Achievement {
        id: AchievementId::FirstWords,
        name: "First Words",
        description: "Complete your first phrase",
        icon: "💬",
        reward: 10,
    },
    Achievement {
        id: AchievementId::Conversationalist,
        name: "Conversationalist",
        description: "Complete 50 phrases",
        icon: "🗣️",
        reward: 75,
    },
    Achievement {
        id: AchievementId::OnFire,
        name: "On Fire",
        description: "Reach a streak of 25 correct answers",
        icon: "🔥",
        reward: 50,
    },
    Achievement {
        id: AchievementId::Centurion,
        name: "Centurion",
        description: "Earn 1000 points",
        icon: "🏆",
        reward: 100,
    },
];

pub fn achievement_by_id(id: AchievementId) -> &'static Achievement {
    // ACHIEVEMENTS covers every variant
    ACHIEVEMENTS
        .iter()
        .find(|a| a.id == id)
        .unwrap_or(&ACHIEVEMENTS[0])
}

// ==================== Evaluation ====================

fn earned(record: &ProgressRecord, id: AchievementId, threshold: u8) -> bool {
    match id {
        AchievementId::FirstSteps => record.attempted_letter_count() >= 1,
        AchievementId::VowelVirtuoso => catalog::letters()
            .iter()
            .filter(|l| l.category == LetterCategory::Vowel)
            .all(|l| record.letter_attempted(l.id)),
        AchievementId::AlphabetExplorer => catalog::letters()
            .iter()
            .all(|l| record.letter_attempted(l.id)),
        AchievementId::AlphabetMaster => catalog::letters()
            .iter()
            .all(|l| record.letter_score(l.id) >= threshold),
        AchievementId::FirstWords => record.completed_phrase_count(threshold) >= 1,
        AchievementId::Conversationalist => record.completed_phrase_count(threshold) >= 50,
        AchievementId::OnFire => record.streak_count >= 25,
        AchievementId::Centurion => record.total_score >= 1000,
    }
}

/// Evaluate all criteria against the current record, stamp any newly
/// earned achievements with `now`, credit their reward points, and return
/// the new ids in catalog order.
///
/// Criteria are checked against the state before rewards are credited;
/// a reward that pushes the record over another criterion's bar is picked
/// up on the next evaluation.
pub fn unlock_earned(
    record: &mut ProgressRecord,
    threshold: u8,
    now: DateTime<Utc>,
) -> Vec<AchievementId> {
    let mut new_ids = Vec::new();
    for achievement in &ACHIEVEMENTS {
        if record.achievements.contains_key(&achievement.id) {
            continue;
        }
        if earned(record, achievement.id, threshold) {
            record.achievements.insert(achievement.id, now);
            new_ids.push(achievement.id);
        }
    }
    let reward: u32 = new_ids
        .iter()
        .map(|&id| achievement_by_id(id).reward)
        .sum();
    record.add_points(reward);
    new_ids
}

// ==================== Tests ====================
