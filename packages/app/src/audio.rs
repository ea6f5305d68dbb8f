//! Speech synthesis.
//!
//! [`SpeechSynthesizer`] is the platform text-to-speech contract.
//! [`Pronouncer`] wraps it with the app's playback conventions: Greek
//! locale, per-content speaking rates, stop-before-speak so a new request
//! supersedes any in-flight one, and fail-soft error handling (speech
//! failures are logged, never surfaced).

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use thiserror::Error;

use alfavita_core::catalog::{Letter, Phrase};

/// Default locale requested from the synthesizer.
pub const GREEK_LOCALE: &str = "el-GR";

/// Speaking rate for letters and words.
pub const LETTER_RATE: f32 = 0.8;
/// Speaking rate for full phrases.
pub const PHRASE_RATE: f32 = 0.7;
/// Speaking rate for the slow replay button.
pub const SLOW_RATE: f32 = 0.4;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech synthesis is not supported on this platform")]
    Unsupported,
    #[error("speech playback failed: {0}")]
    Playback(String),
}

/// Playback parameters passed to the synthesizer.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechOptions {
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            language: GREEK_LOCALE.to_string(),
            rate: LETTER_RATE,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

impl SpeechOptions {
    pub fn with_rate(rate: f32) -> Self {
        Self {
            rate,
            ..Self::default()
        }
    }
}

/// Platform text-to-speech contract.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Speak the text; resolves when playback completes.
    async fn speak(&self, text: &str, options: &SpeechOptions) -> Result<(), SpeechError>;
    /// Interrupt any in-flight playback.
    fn stop(&self);
    fn supported_languages(&self) -> Vec<String>;
}

// ==================== Pronouncer ====================

/// App-level speech wrapper. Never returns an error to the caller.
pub struct Pronouncer {
    synth: Arc<dyn SpeechSynthesizer>,
}

impl Pronouncer {
    pub fn new(synth: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synth }
    }

    /// Speak arbitrary Greek text at the given rate, superseding any
    /// in-flight playback. Failures are logged and dropped.
    pub async fn say(&self, text: &str, rate: f32) {
        self.synth.stop();
        let options = SpeechOptions::with_rate(rate);
        if let Err(err) = self.synth.speak(text, &options).await {
            warn!("speech playback dropped: {}", err);
        }
    }

    pub async fn say_letter(&self, letter: &Letter) {
        self.say(letter.lowercase, LETTER_RATE).await;
    }

    pub async fn say_phrase(&self, phrase: &Phrase) {
        self.say(phrase.greek, PHRASE_RATE).await;
    }

    /// Slow replay of any text, for the "hear it again" action.
    pub async fn say_slowly(&self, text: &str) {
        self.say(text, SLOW_RATE).await;
    }

    pub fn stop(&self) {
        self.synth.stop();
    }

    pub fn greek_supported(&self) -> bool {
        self.synth
            .supported_languages()
            .iter()
            .any(|lang| lang.starts_with("el"))
    }
}

// ==================== Stand-in synthesizers ====================

/// Synthesizer that succeeds without producing audio.
#[derive(Debug, Default)]
pub struct NullSpeech;

#[async_trait]
impl SpeechSynthesizer for NullSpeech {
    async fn speak(&self, _text: &str, _options: &SpeechOptions) -> Result<(), SpeechError> {
        Ok(())
    }

    fn stop(&self) {}

    fn supported_languages(&self) -> Vec<String> {
        vec![GREEK_LOCALE.to_string()]
    }
}

/// Synthesizer for platforms without text-to-speech.
#[derive(Debug, Default)]
pub struct UnsupportedSpeech;

#[async_trait]
impl SpeechSynthesizer for UnsupportedSpeech {
    async fn speak(&self, _text: &str, _options: &SpeechOptions) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn stop(&self) {}

    fn supported_languages(&self) -> Vec<String> {
        Vec::new()
    }
}

// ==================== Tests ====================
