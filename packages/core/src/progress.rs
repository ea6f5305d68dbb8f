//! The learner's progress record.
//!
//! `ProgressRecord` is the single persisted aggregate: best scores per
//! letter and phrase, the running answer streak, accumulated points, and
//! earned achievements. All mutation goes through the methods here so the
//! invariants hold no matter where an update originates:
//!
//! - scores are percentages clamped to 0-100
//! - a recorded score only ever replaces a lower one
//! - the streak and total score are monotonically non-decreasing
//! - achievements, once earned, are never removed

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::achievements::AchievementId;
use crate::catalog;

/// Persisted learner progress.
///
/// Serializes to camelCase JSON. Missing fields deserialize to their
/// defaults so records written by older versions keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    /// Best score percentage per letter id, 0-100
    pub letter_scores: BTreeMap<u32, u8>,
    /// Best score percentage per phrase id, 0-100
    pub phrase_scores: BTreeMap<u32, u8>,
    /// Count of correct answers given; never reset
    pub streak_count: u32,
    /// Accumulated points across all sessions
    pub total_score: u64,
    /// Earned achievements with the time each was first earned
    pub achievements: BTreeMap<AchievementId, DateTime<Utc>>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            letter_scores: BTreeMap::new(),
            phrase_scores: BTreeMap::new(),
            streak_count: 0,
            total_score: 0,
            achievements: BTreeMap::new(),
        }
    }
}

impl ProgressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Score recording ====================

    /// Record a letter score, keeping the best. Returns true when the
    /// stored score improved.
    pub fn record_letter_score(&mut self, letter_id: u32, score: u8) -> bool {
        let score = score.min(100);
        let entry = self.letter_scores.entry(letter_id).or_insert(0);
        if score > *entry {
            *entry = score;
            true
        } else {
            false
        }
    }

    /// Record a phrase score, keeping the best. Returns true when the
    /// stored score improved.
    pub fn record_phrase_score(&mut self, phrase_id: u32, score: u8) -> bool {
        let score = score.min(100);
        let entry = self.phrase_scores.entry(phrase_id).or_insert(0);
        if score > *entry {
            *entry = score;
            true
        } else {
            false
        }
    }

    pub fn increment_streak(&mut self) {
        self.streak_count = self.streak_count.saturating_add(1);
    }

    pub fn add_points(&mut self, points: u32) {
        self.total_score = self.total_score.saturating_add(u64::from(points));
    }

    // ==================== Queries ====================

    /// Best score for a letter; 0 when never attempted.
    pub fn letter_score(&self, letter_id: u32) -> u8 {
        self.letter_scores.get(&letter_id).copied().unwrap_or(0)
    }

    /// Best score for a phrase; 0 when never attempted.
    pub fn phrase_score(&self, phrase_id: u32) -> u8 {
        self.phrase_scores.get(&phrase_id).copied().unwrap_or(0)
    }

    /// A letter counts as attempted once it has a positive score.
    pub fn letter_attempted(&self, letter_id: u32) -> bool {
        self.letter_score(letter_id) > 0
    }

    pub fn phrase_attempted(&self, phrase_id: u32) -> bool {
        self.phrase_score(phrase_id) > 0
    }

    pub fn attempted_letter_count(&self) -> usize {
        self.letter_scores.values().filter(|&&s| s > 0).count()
    }

    pub fn attempted_phrase_count(&self) -> usize {
        self.phrase_scores.values().filter(|&&s| s > 0).count()
    }

    /// Letters whose best score meets the threshold.
    pub fn completed_letter_count(&self, threshold: u8) -> usize {
        self.letter_scores
            .values()
            .filter(|&&s| s >= threshold)
            .count()
    }

    /// Phrases whose best score meets the threshold.
    pub fn completed_phrase_count(&self, threshold: u8) -> usize {
        self.phrase_scores
            .values()
            .filter(|&&s| s >= threshold)
            .count()
    }

    // ==================== Hygiene ====================

    /// Drop score entries whose id no longer exists in the catalogs.
    /// Loaded records may carry ids from older content revisions.
    pub fn prune_orphans(&mut self) {
        self.letter_scores
            .retain(|&id, _| catalog::letter_by_id(id).is_some());
        self.phrase_scores
            .retain(|&id, _| catalog::phrase_by_id(id).is_some());
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let record = ProgressRecord::new();
        assert_eq!(record.letter_score(1), 0);
        assert_eq!(record.streak_count, 0);
        assert_eq!(record.total_score, 0);
        assert!(record.achievements.is_empty());
        assert!(!record.letter_attempted(1));
    }

    #[test]
    fn test_record_letter_score_keeps_best() {
        let mut record = ProgressRecord::new();
        assert!(record.record_letter_score(1, 60));
        assert_eq!(record.letter_score(1), 60);

        // lower score never downgrades
        assert!(!record.record_letter_score(1, 40));
        assert_eq!(record.letter_score(1), 60);

        assert!(record.record_letter_score(1, 90));
        assert_eq!(record.letter_score(1), 90);

        // equal score is not an improvement
        assert!(!record.record_letter_score(1, 90));
    }

    #[test]
    fn test_scores_clamp_to_100() {
        let mut record = ProgressRecord::new();
        record.record_letter_score(1, 250);
        assert_eq!(record.letter_score(1), 100);
        record.record_phrase_score(1, 101);
        assert_eq!(record.phrase_score(1), 100);
    }

    #[test]
    fn test_zero_score_is_not_attempted() {
        let mut record = ProgressRecord::new();
        record.record_letter_score(3, 0);
        assert!(!record.letter_attempted(3));
        assert_eq!(record.attempted_letter_count(), 0);

        record.record_letter_score(3, 10);
        assert!(record.letter_attempted(3));
        assert_eq!(record.attempted_letter_count(), 1);
    }

    #[test]
    fn test_completed_counts_respect_threshold() {
        let mut record = ProgressRecord::new();
        record.record_letter_score(1, 100);
        record.record_letter_score(2, 80);
        record.record_letter_score(3, 79);
        assert_eq!(record.completed_letter_count(100), 1);
        assert_eq!(record.completed_letter_count(80), 2);
    }

    #[test]
    fn test_streak_and_points_accumulate() {
        let mut record = ProgressRecord::new();
        record.increment_streak();
        record.increment_streak();
        assert_eq!(record.streak_count, 2);

        record.add_points(20);
        record.add_points(18);
        assert_eq!(record.total_score, 38);
    }

    #[test]
    fn test_prune_orphans_drops_unknown_ids() {
        let mut record = ProgressRecord::new();
        record.record_letter_score(1, 50);
        record.record_letter_score(999, 50);
        record.record_phrase_score(100, 100);
        record.record_phrase_score(101, 100);

        record.prune_orphans();

        assert_eq!(record.letter_score(1), 50);
        assert!(!record.letter_scores.contains_key(&999));
        assert_eq!(record.phrase_score(100), 100);
        assert!(!record.phrase_scores.contains_key(&101));
    }

    #[test]
    fn test_serde_camel_case_roundtrip() {
        let mut record = ProgressRecord::new();
        record.record_letter_score(1, 85);
        record.record_phrase_score(2, 100);
        record.increment_streak();
        record.add_points(120);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("letterScores"));
        assert!(json.contains("streakCount"));
        assert!(json.contains("totalScore"));

        let back: ProgressRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialize_partial_record() {
        // records written before new fields existed still load
        let json = r#"{"letterScores":{"1":70}}"#;
        let record: ProgressRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.letter_score(1), 70);
        assert_eq!(record.streak_count, 0);
        assert!(record.phrase_scores.is_empty());
    }
}
