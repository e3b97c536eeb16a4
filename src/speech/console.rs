use crate::i18n::LocaleCode;
use crate::speech::{Completion, SpeechEngine, SpeechError, SpeechSettings};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::info;

/// Rough speaking time per word at rate 1.0.
const WORD_DURATION_AT_UNIT_RATE: Duration = Duration::from_millis(200);

const MIN_UTTERANCE: Duration = Duration::from_secs(1);

#[derive(Debug)]
struct ConsoleVoice {
    settings: SpeechSettings,
    locale: LocaleCode,
}

/// Engine that writes utterances to the log instead of a speaker.
///
/// Completion is simulated from the word count and the configured rate.
#[derive(Debug)]
pub struct ConsoleSpeechEngine {
    voice: Mutex<ConsoleVoice>,
}

impl ConsoleSpeechEngine {
    pub fn new() -> Self {
        Self {
            voice: Mutex::new(ConsoleVoice {
                settings: SpeechSettings::default(),
                locale: LocaleCode::DEFAULT,
            }),
        }
    }

    fn voice(&self) -> std::sync::MutexGuard<'_, ConsoleVoice> {
        self.voice.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ConsoleSpeechEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimate how long `text` takes to speak at `rate`.
fn estimate_duration(text: &str, rate: f32) -> Duration {
    let words = text.split_whitespace().count() as f64;
    let rate = if rate.is_finite() && rate > 0.0 {
        f64::from(rate)
    } else {
        1.0
    };
    let millis = WORD_DURATION_AT_UNIT_RATE.as_millis() as f64 * words / rate;
    Duration::from_millis(millis.round() as u64).max(MIN_UTTERANCE)
}

#[async_trait]
impl SpeechEngine for ConsoleSpeechEngine {
    async fn set_default_rate(&self, rate: f32) -> Result<(), SpeechError> {
        self.voice().settings.rate = rate;
        Ok(())
    }

    async fn set_default_pitch(&self, pitch: f32) -> Result<(), SpeechError> {
        self.voice().settings.pitch = pitch;
        Ok(())
    }

    async fn set_language(&self, locale: LocaleCode) -> Result<(), SpeechError> {
        self.voice().locale = locale;
        Ok(())
    }

    async fn speak(&self, text: &str) -> Result<Completion, SpeechError> {
        let (locale, rate) = {
            let voice = self.voice();
            (voice.locale, voice.settings.rate)
        };
        let duration = estimate_duration(text, rate);
        info!("🔊 [{}] {}", locale, text);

        Ok(Completion::Signal(Box::pin(tokio::time::sleep(duration))))
    }

    async fn stop(&self) -> Result<(), SpeechError> {
        info!("🔇 stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_estimate_scales_with_words_and_rate() {
        let text = "one two three four five six seven eight nine ten";
        assert_eq!(estimate_duration(text, 1.0), Duration::from_secs(2));
        assert_eq!(estimate_duration(text, 0.5), Duration::from_secs(4));
    }

    #[test]
    fn test_estimate_has_floor() {
        assert_eq!(estimate_duration("Hi", 1.0), MIN_UTTERANCE);
        assert_eq!(estimate_duration("", 1.0), MIN_UTTERANCE);
    }

    #[test]
    fn test_estimate_ignores_invalid_rate() {
        let text = "one two three four five six seven eight nine ten";
        assert_eq!(estimate_duration(text, 0.0), Duration::from_secs(2));
        assert_eq!(estimate_duration(text, f32::NAN), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_speak_signals_completion() {
        let engine = ConsoleSpeechEngine::new();
        engine
            .set_language(Language::Tamil.locale_code())
            .await
            .unwrap();

        match engine.speak("Irrigation. Water management").await.unwrap() {
            Completion::Signal(done) => done.await,
            Completion::Unsupported => panic!("Console engine should signal completion"),
        }
    }

    #[tokio::test]
    async fn test_settings_are_applied() {
        let engine = ConsoleSpeechEngine::new();
        engine.set_default_rate(0.8).await.unwrap();
        engine.set_default_pitch(1.2).await.unwrap();
        engine.set_language(Language::Hindi.locale_code()).await.unwrap();

        let voice = engine.voice();
        assert_eq!(voice.settings.rate, 0.8);
        assert_eq!(voice.settings.pitch, 1.2);
        assert_eq!(voice.locale.as_str(), "hi-IN");
    }
}
