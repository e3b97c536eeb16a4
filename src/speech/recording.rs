use crate::i18n::LocaleCode;
use crate::speech::{Completion, SpeechEngine, SpeechError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;

/// One instruction received by a [`RecordingSpeechEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechCommand {
    SetRate(f32),
    SetPitch(f32),
    SetLanguage(LocaleCode),
    Speak(String),
    Stop,
}

/// An engine that records every instruction in order and produces no audio.
///
/// Failures and a `set_language` delay can be injected. When built with
/// [`RecordingSpeechEngine::with_completion_signal`], each utterance gets a
/// completion signal that fires only when [`RecordingSpeechEngine::complete`]
/// is called for it.
#[derive(Debug, Default)]
pub struct RecordingSpeechEngine {
    commands: Mutex<Vec<SpeechCommand>>,
    completions: Mutex<Vec<Option<oneshot::Sender<()>>>>,
    signal_completion: bool,
    language_delay: Duration,
    fail_language: AtomicBool,
    fail_speak: AtomicBool,
    fail_stop: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RecordingSpeechEngine {
    /// Engine that reports [`Completion::Unsupported`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose utterances carry a manually fired completion signal.
    pub fn with_completion_signal() -> Self {
        Self {
            signal_completion: true,
            ..Self::default()
        }
    }

    /// Make `set_language` take `delay` before resolving.
    pub fn with_language_delay(mut self, delay: Duration) -> Self {
        self.language_delay = delay;
        self
    }

    pub fn fail_language(&self, fail: bool) {
        self.fail_language.store(fail, Ordering::SeqCst);
    }

    pub fn fail_speak(&self, fail: bool) {
        self.fail_speak.store(fail, Ordering::SeqCst);
    }

    pub fn fail_stop(&self, fail: bool) {
        self.fail_stop.store(fail, Ordering::SeqCst);
    }

    /// Every instruction received so far, oldest first.
    pub fn commands(&self) -> Vec<SpeechCommand> {
        lock(&self.commands).clone()
    }

    /// Texts passed to `speak`, oldest first.
    pub fn spoken(&self) -> Vec<String> {
        lock(&self.commands)
            .iter()
            .filter_map(|command| match command {
                SpeechCommand::Speak(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn stop_count(&self) -> usize {
        lock(&self.commands)
            .iter()
            .filter(|command| **command == SpeechCommand::Stop)
            .count()
    }

    pub fn clear(&self) {
        lock(&self.commands).clear();
    }

    /// Fire the completion signal of the `index`-th utterance (0-based).
    ///
    /// Returns `false` if there is no such utterance or it already fired.
    pub fn complete(&self, index: usize) -> bool {
        lock(&self.completions)
            .get_mut(index)
            .and_then(Option::take)
            .map(|sender| sender.send(()).is_ok())
            .unwrap_or(false)
    }

    /// Fire the completion signal of the most recent utterance.
    pub fn complete_latest(&self) -> bool {
        let len = lock(&self.completions).len();
        len > 0 && self.complete(len - 1)
    }

    fn record(&self, command: SpeechCommand) {
        lock(&self.commands).push(command);
    }
}

#[async_trait]
impl SpeechEngine for RecordingSpeechEngine {
    async fn set_default_rate(&self, rate: f32) -> Result<(), SpeechError> {
        self.record(SpeechCommand::SetRate(rate));
        Ok(())
    }

    async fn set_default_pitch(&self, pitch: f32) -> Result<(), SpeechError> {
        self.record(SpeechCommand::SetPitch(pitch));
        Ok(())
    }

    async fn set_language(&self, locale: LocaleCode) -> Result<(), SpeechError> {
        if !self.language_delay.is_zero() {
            tokio::time::sleep(self.language_delay).await;
        }
        if self.fail_language.load(Ordering::SeqCst) {
            return Err(SpeechError::LanguageUnavailable(locale));
        }
        self.record(SpeechCommand::SetLanguage(locale));
        Ok(())
    }

    async fn speak(&self, text: &str) -> Result<Completion, SpeechError> {
        if self.fail_speak.load(Ordering::SeqCst) {
            return Err(SpeechError::Engine("synthesis failed".to_string()));
        }
        self.record(SpeechCommand::Speak(text.to_string()));

        if !self.signal_completion {
            return Ok(Completion::Unsupported);
        }

        let (sender, receiver) = oneshot::channel();
        lock(&self.completions).push(Some(sender));
        Ok(Completion::Signal(Box::pin(async move {
            // A dropped sender means the engine went away; treat it as done.
            let _ = receiver.await;
        })))
    }

    async fn stop(&self) -> Result<(), SpeechError> {
        self.record(SpeechCommand::Stop);
        if self.fail_stop.load(Ordering::SeqCst) {
            return Err(SpeechError::NotReady);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_in_order() {
        let engine = RecordingSpeechEngine::new();
        engine.stop().await.unwrap();
        engine.set_language(LocaleCode::DEFAULT).await.unwrap();
        engine.speak("hello").await.unwrap();

        assert_eq!(
            engine.commands(),
            vec![
                SpeechCommand::Stop,
                SpeechCommand::SetLanguage(LocaleCode::DEFAULT),
                SpeechCommand::Speak("hello".to_string()),
            ]
        );
        assert_eq!(engine.spoken(), vec!["hello"]);
        assert_eq!(engine.stop_count(), 1);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let engine = RecordingSpeechEngine::new();
        engine.fail_language(true);
        engine.fail_speak(true);

        assert!(engine.set_language(LocaleCode::DEFAULT).await.is_err());
        assert!(engine.speak("hello").await.is_err());
        assert!(engine.commands().is_empty());
    }

    #[tokio::test]
    async fn test_without_signal_reports_unsupported() {
        let engine = RecordingSpeechEngine::new();
        let completion = engine.speak("hello").await.unwrap();
        assert!(matches!(completion, Completion::Unsupported));
        assert!(!engine.complete_latest());
    }

    #[tokio::test]
    async fn test_signal_fires_on_complete() {
        let engine = RecordingSpeechEngine::with_completion_signal();
        let Completion::Signal(done) = engine.speak("hello").await.unwrap() else {
            panic!("Expected a completion signal");
        };

        assert!(engine.complete(0));
        done.await;
        assert!(!engine.complete(0), "Signal fires once");
    }

    #[tokio::test]
    async fn test_clear_forgets_commands() {
        let engine = RecordingSpeechEngine::new();
        engine.stop().await.unwrap();
        engine.clear();
        assert!(engine.commands().is_empty());
    }
}
