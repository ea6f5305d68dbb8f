//! Progress persistence.
//!
//! [`KeyValueStorage`] is the platform persistence contract: an async
//! string key-value store. [`ProgressStore`] owns the in-memory progress
//! record, mediates every mutation, and writes through to storage after
//! each one. Persistence is fail-soft in both directions: a missing or
//! malformed record loads as the default, and a failed write is logged
//! and dropped rather than surfaced.

mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::warn;
use thiserror::Error;

use alfavita_core::catalog::{Letter, Phrase};
use alfavita_core::{AchievementId, ProgressRecord, UnlockPolicy};

pub use memory::{FailingStorage, MemoryStorage};

/// Storage key for the serialized progress record.
pub const PROGRESS_KEY: &str = "greekLearnerProgress";

// ==================== Contract ====================

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Platform key-value persistence.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
}

// ==================== Progress store ====================

/// Single source of truth for learner progress.
///
/// All reads are served from the in-memory record; every mutation writes
/// through to the storage collaborator exactly once.
pub struct ProgressStore {
    storage: Arc<dyn KeyValueStorage>,
    policy: UnlockPolicy,
    record: ProgressRecord,
}

impl ProgressStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_policy(storage, UnlockPolicy::default())
    }

    pub fn with_policy(storage: Arc<dyn KeyValueStorage>, policy: UnlockPolicy) -> Self {
        Self {
            storage,
            policy,
            record: ProgressRecord::default(),
        }
    }

    /// Load the persisted record. Any read or parse failure yields the
    /// default record; entries for ids no longer in the catalogs are
    /// dropped.
    pub async fn load(&mut self) {
        self.record = match self.storage.get(PROGRESS_KEY).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(record) => record,
                Err(err) => {
                    warn!("discarding malformed progress record: {}", err);
                    ProgressRecord::default()
                }
            },
            Ok(None) => ProgressRecord::default(),
            Err(err) => {
                warn!("progress load failed, starting fresh: {}", err);
                ProgressRecord::default()
            }
        };
        self.record.prune_orphans();
    }

    /// Write the current record through to storage. Failures are logged
    /// and dropped; the in-memory record stays authoritative.
    async fn persist(&self) {
        let json = match serde_json::to_string(&self.record) {
            Ok(json) => json,
            Err(err) => {
                warn!("progress serialization failed: {}", err);
                return;
            }
        };
        if let Err(err) = self.storage.set(PROGRESS_KEY, &json).await {
            warn!("progress write failed: {}", err);
        }
    }

    // ==================== Mutations ====================

    /// Record a letter score (best-score-wins) and re-evaluate
    /// achievements. Returns any newly earned achievement ids.
    pub async fn update_score(&mut self, letter_id: u32, percentage: u8) -> Vec<AchievementId> {
        self.record.record_letter_score(letter_id, percentage);
        let new_ids = self.evaluate_achievements();
        self.persist().await;
        new_ids
    }

    /// Phrase counterpart of [`update_score`](Self::update_score).
    pub async fn update_phrase_score(
        &mut self,
        phrase_id: u32,
        percentage: u8,
    ) -> Vec<AchievementId> {
        self.record.record_phrase_score(phrase_id, percentage);
        let new_ids = self.evaluate_achievements();
        self.persist().await;
        new_ids
    }

    pub async fn increment_streak(&mut self) -> Vec<AchievementId> {
        self.record.increment_streak();
        let new_ids = self.evaluate_achievements();
        self.persist().await;
        new_ids
    }

    pub async fn add_points(&mut self, points: u32) -> Vec<AchievementId> {
        self.record.add_points(points);
        let new_ids = self.evaluate_achievements();
        self.persist().await;
        new_ids
    }

    /// Clear all progress and persist the empty record.
    pub async fn reset(&mut self) {
        self.record = ProgressRecord::default();
        if let Err(err) = self.storage.remove(PROGRESS_KEY).await {
            warn!("progress reset failed: {}", err);
        }
        self.persist().await;
    }

    fn evaluate_achievements(&mut self) -> Vec<AchievementId> {
        alfavita_core::unlock_earned(
            &mut self.record,
            self.policy.mastery_threshold,
            Utc::now(),
        )
    }

    // ==================== Reads ====================

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub fn policy(&self) -> &UnlockPolicy {
        &self.policy
    }

    pub fn best_score(&self, letter_id: u32) -> u8 {
        self.record.letter_score(letter_id)
    }

    pub fn best_phrase_score(&self, phrase_id: u32) -> u8 {
        self.record.phrase_score(phrase_id)
    }

    pub fn is_letter_unlocked(&self, letter_id: u32) -> bool {
        self.policy.is_letter_unlocked(&self.record, letter_id)
    }

    pub fn is_phrase_unlocked(&self, phrase_id: u32) -> bool {
        self.policy.is_phrase_unlocked(&self.record, phrase_id)
    }

    pub fn is_letter_completed(&self, letter_id: u32) -> bool {
        self.policy.is_letter_completed(&self.record, letter_id)
    }

    pub fn is_phrase_completed(&self, phrase_id: u32) -> bool {
        self.policy.is_phrase_completed(&self.record, phrase_id)
    }

    pub fn available_letters(&self) -> Vec<&'static Letter> {
        self.policy.available_letters(&self.record)
    }

    pub fn available_phrases(&self) -> Vec<&'static Phrase> {
        self.policy.available_phrases(&self.record)
    }

    pub fn locked_letter_count(&self) -> usize {
        self.policy.locked_letter_count(&self.record)
    }

    pub fn overall_letter_progress(&self) -> u8 {
        self.policy.overall_letter_progress(&self.record)
    }

    pub fn overall_phrase_progress(&self) -> u8 {
        self.policy.overall_phrase_progress(&self.record)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use alfavita_core::catalog;

    fn in_memory() -> ProgressStore {
        ProgressStore::new(Arc::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_load_missing_record_defaults() {
        let mut store = in_memory();
        store.load().await;
        assert_eq!(store.best_score(1), 0);
        assert_eq!(store.record().streak_count, 0);
    }

    #[tokio::test]
    async fn test_mutations_round_trip_through_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ProgressStore::new(storage.clone());
        store.load().await;
        store.update_score(1, 85).await;
        store.increment_streak().await;

        let mut reloaded = ProgressStore::new(storage);
        reloaded.load().await;
        assert_eq!(reloaded.best_score(1), 85);
        assert_eq!(reloaded.record().streak_count, 1);
    }

    #[tokio::test]
    async fn test_load_malformed_record_defaults() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(PROGRESS_KEY, "{not json").await.unwrap();
        let mut store = ProgressStore::new(storage);
        store.load().await;
        assert_eq!(store.best_score(1), 0);
    }

    #[tokio::test]
    async fn test_load_prunes_orphaned_ids() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(
                PROGRESS_KEY,
                r#"{"letterScores":{"1":50,"999":90},"phraseScores":{"101":100}}"#,
            )
            .await
            .unwrap();
        let mut store = ProgressStore::new(storage);
        store.load().await;
        assert_eq!(store.best_score(1), 50);
        assert_eq!(store.best_score(999), 0);
        assert_eq!(store.best_phrase_score(101), 0);
    }

    #[tokio::test]
    async fn test_failing_storage_never_blocks_mutations() {
        let mut store = ProgressStore::new(Arc::new(FailingStorage));
        store.load().await;
        store.update_score(1, 70).await;
        store.increment_streak().await;
        // the in-memory record stays authoritative
        assert_eq!(store.best_score(1), 70);
        assert_eq!(store.record().streak_count, 1);
    }

    #[tokio::test]
    async fn test_update_score_reports_new_achievements() {
        let mut store = in_memory();
        store.load().await;
        let new_ids = store.update_score(1, 40).await;
        assert_eq!(new_ids, vec![AchievementId::FirstSteps]);
        let again = store.update_score(1, 60).await;
        assert!(again.is_empty());
    }

    #[tokio::test]
    async fn test_unlock_queries_delegate_to_policy() {
        let mut store = in_memory();
        store.load().await;

        let tier_one: Vec<u32> = catalog::letters_in_tier(1).map(|l| l.id).collect();
        let tier_two_id = catalog::letters_in_tier(2).next().unwrap().id;
        assert!(!store.is_letter_unlocked(tier_two_id));

        for id in tier_one {
            store.update_score(id, 50).await;
        }
        assert!(store.is_letter_unlocked(tier_two_id));
        assert_eq!(
            store.available_letters().len(),
            catalog::letters_in_tier(1).count() + catalog::letters_in_tier(2).count()
        );
    }

    #[tokio::test]
    async fn test_completion_and_progress() {
        let mut store = in_memory();
        store.load().await;
        store.update_phrase_score(1, 100).await;
        assert!(store.is_phrase_completed(1));
        assert!(!store.is_phrase_completed(2));
        assert_eq!(store.best_phrase_score(2), 0);
        assert_eq!(store.overall_phrase_progress(), 1);
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ProgressStore::new(storage.clone());
        store.load().await;
        store.update_score(1, 100).await;
        store.reset().await;
        assert_eq!(store.best_score(1), 0);

        let mut reloaded = ProgressStore::new(storage);
        reloaded.load().await;
        assert_eq!(reloaded.best_score(1), 0);
    }
}
