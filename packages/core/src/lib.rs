//! # alfavita-core - Greek learning core logic
//!
//! This crate provides the pure, synchronous core of the alfavita Greek
//! alphabet and phrase learning app:
//!
//! - **Catalogs** - the fixed 24-letter alphabet and 100-phrase tables
//! - **Progress** - the learner's persisted progress record
//! - **Achievements** - the fixed achievement catalog and its evaluation
//! - **Unlock policy** - difficulty-tier gating over the catalogs
//! - **Question generator** - multiple-choice question synthesis per exercise
//! - **Practice session** - the 10-question run and its scoring
//!
//! ## Design goals
//!
//! - **Pure Rust** - no I/O, no async, no platform bindings; everything here
//!   is a function of the catalogs, the progress record, and an RNG
//! - **Reusable** - the persistence and speech collaborators live in
//!   `alfavita-app`; this crate never touches them
//! - **Fully tested** - every policy and generation rule has unit tests
//!
//! ## Module structure
//!
//! - [`catalog`] - static letter and phrase tables with accessors
//! - [`progress`] - the `ProgressRecord` aggregate and its mutation rules
//! - [`achievements`] - achievement definitions and evaluation
//! - [`unlock`] - tier-gating unlock policy and derived queries
//! - [`generator`] - question synthesis per exercise kind
//! - [`session`] - practice-session state and point scoring
//! - [`types`] - shared types and constants

// ============================================================================
// Module declarations
// ============================================================================

pub mod achievements;
pub mod catalog;
pub mod generator;
pub mod progress;
pub mod session;
pub mod types;
pub mod unlock;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use achievements::{unlock_earned, Achievement, AchievementId, ACHIEVEMENTS};

pub use catalog::{Letter, Phrase};

pub use generator::{
    ExerciseKind, FocusItem, GenerateError, LetterExerciseKind, PhraseExerciseKind, Question,
    QuestionGenerator, RecentHistory,
};

pub use progress::ProgressRecord;

pub use session::{AnswerOutcome, PracticeSession, SessionSummary};

pub use unlock::UnlockPolicy;
