//! Narration session manager.
//!
//! Decides, for each press on a content item, whether to start, stop or
//! ignore narration, and publishes which item (if any) is speaking. The
//! manager is the only component that drives the [`SpeechEngine`].
//!
//! ## State machine
//!
//! ```text
//! Idle          --activate(id)-->  Speaking(id)
//! Speaking(id)  --activate(id)-->  Idle            (toggle-off)
//! Speaking(id)  --activate(id2)--> Speaking(id2)   (pre-empt, stop issued first)
//! Speaking(id)  --teardown------>  Idle
//! Speaking(id)  --completion---->  Idle            (per CompletionPolicy)
//! ```
//!
//! Activations are serialized: each one issues all of its engine instructions
//! before the next is accepted, and a queued activation that has been
//! overtaken by a newer request (or a teardown) is dropped without touching
//! the engine.

use crate::i18n::{Language, LocaleCode, TranslationCatalog};
use crate::metrics::NarrationMetrics;
use crate::speech::{Completion, SpeechEngine, SpeechSettings};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// How long an utterance is assumed to last when nothing better is known.
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(5);

/// Identifier of a content item, unique within its list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A narratable entry supplied by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
}

impl ContentItem {
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Build an item whose title and description come from the catalog.
    pub fn localized(
        id: impl Into<ItemId>,
        catalog: &TranslationCatalog,
        language: Language,
        title_key: &str,
        description_key: &str,
    ) -> Self {
        Self::new(
            id,
            catalog.lookup(language, title_key),
            catalog.lookup(language, description_key),
        )
    }

    /// The text read aloud for this item.
    pub fn narration_text(&self) -> String {
        format!("{}. {}", self.title, self.description)
    }
}

/// Which item, if any, is currently speaking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpeakingState {
    pub active_item_id: Option<ItemId>,
}

impl SpeakingState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn speaking(item_id: ItemId) -> Self {
        Self {
            active_item_id: Some(item_id),
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.active_item_id.is_some()
    }

    pub fn is_active(&self, item_id: &ItemId) -> bool {
        self.active_item_id.as_ref() == Some(item_id)
    }
}

/// A single narration request.
#[derive(Debug, Clone, PartialEq)]
pub struct UtteranceIntent {
    pub item_id: ItemId,
    pub text: String,
    pub language: Language,
}

impl UtteranceIntent {
    pub fn for_item(item: &ContentItem, language: Language) -> Self {
        Self {
            item_id: item.id.clone(),
            text: item.narration_text(),
            language,
        }
    }
}

/// When a speaking item returns to idle on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionPolicy {
    /// Clear as soon as `speak` has been issued.
    Immediate,
    /// Clear after a fixed delay.
    Timed(Duration),
    /// Clear when the engine reports the end of the utterance, or after
    /// `fallback` if the engine cannot report it.
    Engine { fallback: Duration },
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        CompletionPolicy::Engine {
            fallback: DEFAULT_COMPLETION_TIMEOUT,
        }
    }
}

#[derive(Debug, Default)]
struct Session {
    /// Bumped whenever the current utterance stops being current.
    epoch: u64,
    /// Completion watcher for the current utterance.
    pending: Option<JoinHandle<()>>,
}

impl Session {
    /// Invalidate the current utterance and cancel its completion watcher.
    fn advance(&mut self) -> u64 {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.epoch += 1;
        self.epoch
    }
}

struct Shared {
    engine: Arc<dyn SpeechEngine>,
    policy: CompletionPolicy,
    session: Mutex<Session>,
    latest_ticket: AtomicU64,
    state: watch::Sender<SpeakingState>,
    metrics: NarrationMetrics,
}

impl Shared {
    fn publish(&self, next: SpeakingState) {
        self.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    fn next_ticket(&self) -> u64 {
        self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn stop_engine(&self) {
        if let Err(e) = self.engine.stop().await {
            warn!("Speech engine failed to stop: {}", e);
        }
    }

    /// Completion of the utterance started under `epoch`.
    async fn complete(&self, epoch: u64) {
        let mut session = self.session.lock().await;
        if session.epoch != epoch {
            debug!("Ignoring stale completion for epoch {}", epoch);
            return;
        }
        session.pending = None;
        self.metrics.record_completion();
        self.publish(SpeakingState::idle());
        debug!("Utterance finished, narration idle");
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        if let Some(handle) = self.session.get_mut().pending.take() {
            handle.abort();
        }
    }
}

/// Stateful controller for one presenting list.
///
/// Clones share the same session, so every component holding a clone sees
/// the same [`SpeakingState`].
#[derive(Clone)]
pub struct NarrationManager {
    shared: Arc<Shared>,
}

impl NarrationManager {
    pub fn new(engine: Arc<dyn SpeechEngine>, policy: CompletionPolicy) -> Self {
        let (state, _) = watch::channel(SpeakingState::idle());
        Self {
            shared: Arc::new(Shared {
                engine,
                policy,
                session: Mutex::new(Session::default()),
                latest_ticket: AtomicU64::new(0),
                state,
                metrics: NarrationMetrics::new(),
            }),
        }
    }

    /// Apply engine-wide defaults and select the default locale.
    ///
    /// Failures are logged; the engine keeps whatever defaults it had.
    pub async fn initialize(&self, settings: &SpeechSettings) {
        let engine = &self.shared.engine;
        if let Err(e) = engine.set_default_rate(settings.rate).await {
            warn!("Failed to set speech rate {}: {}", settings.rate, e);
        }
        if let Err(e) = engine.set_default_pitch(settings.pitch).await {
            warn!("Failed to set speech pitch {}: {}", settings.pitch, e);
        }
        if let Err(e) = engine.set_language(LocaleCode::DEFAULT).await {
            warn!("Failed to select default locale: {}", e);
        }
    }

    pub fn state(&self) -> SpeakingState {
        self.shared.state.borrow().clone()
    }

    /// Receive every subsequent state change.
    pub fn subscribe(&self) -> watch::Receiver<SpeakingState> {
        self.shared.state.subscribe()
    }

    pub fn metrics(&self) -> &NarrationMetrics {
        &self.shared.metrics
    }

    pub fn policy(&self) -> CompletionPolicy {
        self.shared.policy
    }

    /// Handle a press on `item_id`, speaking `text` in `language`.
    ///
    /// Returns the state once this request has been handled. Engine errors
    /// are logged and leave the manager idle.
    pub async fn activate(
        &self,
        item_id: impl Into<ItemId>,
        text: &str,
        language: Language,
    ) -> SpeakingState {
        let item_id = item_id.into();
        let shared = &self.shared;
        shared.metrics.record_activation();
        let ticket = shared.next_ticket();

        let mut session = shared.session.lock().await;
        if shared.latest_ticket.load(Ordering::SeqCst) != ticket {
            shared.metrics.record_superseded();
            debug!("Activation of item {} superseded by a newer request", item_id);
            return self.state();
        }

        let current = self.state();
        if current.is_active(&item_id) {
            session.advance();
            shared.stop_engine().await;
            shared.publish(SpeakingState::idle());
            shared.metrics.record_toggle_off();
            debug!("Item {} toggled off", item_id);
            return SpeakingState::idle();
        }

        if current.is_speaking() {
            shared.metrics.record_preemption();
        }
        let epoch = session.advance();
        shared.stop_engine().await;
        shared.publish(SpeakingState::speaking(item_id.clone()));
        debug!("Item {} speaking in {}", item_id, language);

        if let Err(e) = shared.engine.set_language(language.locale_code()).await {
            warn!("Narration of item {} failed: {}", item_id, e);
            return self.fail();
        }
        let completion = match shared.engine.speak(text).await {
            Ok(completion) => completion,
            Err(e) => {
                warn!("Narration of item {} failed: {}", item_id, e);
                return self.fail();
            }
        };
        shared.metrics.record_utterance_started();

        let done: BoxFuture<'static, ()> = match (shared.policy, completion) {
            (CompletionPolicy::Immediate, _) => {
                shared.metrics.record_completion();
                shared.publish(SpeakingState::idle());
                return SpeakingState::idle();
            }
            (CompletionPolicy::Timed(delay), _) => tokio::time::sleep(delay).boxed(),
            (CompletionPolicy::Engine { .. }, Completion::Signal(signal)) => signal,
            (CompletionPolicy::Engine { fallback }, Completion::Unsupported) => {
                tokio::time::sleep(fallback).boxed()
            }
        };
        session.pending = Some(self.watch_completion(epoch, done));

        self.state()
    }

    /// [`NarrationManager::activate`] with the item's narration text.
    pub async fn activate_item(&self, item: &ContentItem, language: Language) -> SpeakingState {
        self.activate(item.id.clone(), &item.narration_text(), language)
            .await
    }

    pub async fn request(&self, intent: UtteranceIntent) -> SpeakingState {
        self.activate(intent.item_id, &intent.text, intent.language)
            .await
    }

    /// Silence the engine and return to idle as the presenting list goes away.
    ///
    /// Any queued activation is dropped and any pending completion is
    /// cancelled. The manager may be used again afterwards.
    pub async fn teardown(&self) {
        let shared = &self.shared;
        shared.next_ticket();

        let mut session = shared.session.lock().await;
        session.advance();
        shared.stop_engine().await;
        shared.publish(SpeakingState::idle());
        shared.metrics.record_teardown();
        debug!("Narration torn down");
    }

    fn fail(&self) -> SpeakingState {
        self.shared.metrics.record_failure();
        self.shared.publish(SpeakingState::idle());
        SpeakingState::idle()
    }

    fn watch_completion(&self, epoch: u64, done: BoxFuture<'static, ()>) -> JoinHandle<()> {
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        tokio::spawn(async move {
            done.await;
            if let Some(shared) = shared.upgrade() {
                shared.complete(epoch).await;
            }
        })
    }
}

impl fmt::Debug for NarrationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarrationManager")
            .field("policy", &self.shared.policy)
            .field("state", &*self.shared.state.borrow())
            .finish()
    }
}
