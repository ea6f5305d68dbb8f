//! # alfavita-app - application services
//!
//! The stateful shell around [`alfavita_core`]: everything that talks to
//! a platform collaborator lives here.
//!
//! - [`storage`] - the key-value persistence contract and the
//!   [`ProgressStore`](storage::ProgressStore) that owns the progress record
//! - [`audio`] - the speech-synthesis contract and the
//!   [`Pronouncer`](audio::Pronouncer) wrapper
//! - [`practice`] - the practice-session flow wiring generator, session,
//!   and store together
//!
//! Collaborator failures never surface to the learner: loads fall back to
//! defaults, writes and speech errors are logged and dropped.

pub mod audio;
pub mod practice;
pub mod storage;

pub use audio::{
    NullSpeech, Pronouncer, SpeechError, SpeechOptions, SpeechSynthesizer, UnsupportedSpeech,
};
pub use practice::{AnswerFeedback, PracticeService};
pub use storage::{FailingStorage, KeyValueStorage, MemoryStorage, ProgressStore, StorageError};
