//! Speech engine boundary.
//!
//! The narration manager never synthesizes audio itself. It drives an
//! external engine through [`SpeechEngine`], whose instructions are
//! fire-and-forget except `set_language`, which must resolve before `speak`
//! is issued so the utterance uses the right locale.
//!
//! - `console`: an engine that renders utterances through `tracing`
//! - `recording`: an engine that records every instruction it receives

mod console;
mod recording;

use crate::i18n::LocaleCode;
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::fmt;
use thiserror::Error;

pub use console::ConsoleSpeechEngine;
pub use recording::{RecordingSpeechEngine, SpeechCommand};

/// Default speaking rate: slower than normal so rural listeners can follow.
pub const DEFAULT_RATE: f32 = 0.5;

pub const DEFAULT_PITCH: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpeechError {
    #[error("voice for locale {0} is not installed")]
    LanguageUnavailable(LocaleCode),

    #[error("speech engine is not ready")]
    NotReady,

    #[error("speech engine error: {0}")]
    Engine(String),
}

/// What the engine can tell us about the end of an utterance.
pub enum Completion {
    /// Resolves once the utterance has finished or been interrupted.
    Signal(BoxFuture<'static, ()>),
    /// The engine cannot report completion.
    Unsupported,
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Signal(_) => f.write_str("Completion::Signal(..)"),
            Completion::Unsupported => f.write_str("Completion::Unsupported"),
        }
    }
}

/// Engine-wide defaults applied once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechSettings {
    pub rate: f32,
    pub pitch: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            pitch: DEFAULT_PITCH,
        }
    }
}

/// Adapter over a platform text-to-speech capability.
///
/// Implementations must be safe to call from any task; the narration manager
/// is the only caller that mutates engine state.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    async fn set_default_rate(&self, rate: f32) -> Result<(), SpeechError>;

    async fn set_default_pitch(&self, pitch: f32) -> Result<(), SpeechError>;

    /// Select the voice for subsequent utterances. Resolves once the locale
    /// is active.
    async fn set_language(&self, locale: LocaleCode) -> Result<(), SpeechError>;

    /// Begin speaking `text`. Returns as soon as the utterance is queued.
    async fn speak(&self, text: &str) -> Result<Completion, SpeechError>;

    /// Silence the current utterance, if any.
    async fn stop(&self) -> Result<(), SpeechError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = SpeechSettings::default();
        assert_eq!(settings.rate, 0.5);
        assert_eq!(settings.pitch, 1.0);
    }

    #[test]
    fn test_error_messages() {
        let err = SpeechError::LanguageUnavailable(LocaleCode::DEFAULT);
        assert_eq!(err.to_string(), "voice for locale en-IN is not installed");
        assert_eq!(
            SpeechError::Engine("busy".to_string()).to_string(),
            "speech engine error: busy"
        );
    }

    #[test]
    fn test_completion_debug() {
        assert_eq!(format!("{:?}", Completion::Unsupported), "Completion::Unsupported");
        let signal = Completion::Signal(Box::pin(async {}));
        assert_eq!(format!("{:?}", signal), "Completion::Signal(..)");
    }
}
