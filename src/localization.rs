//! Process-wide current-language state backed by a [`PreferenceStore`].
//!
//! The in-memory value is authoritative for the running session. The store
//! is loaded once by [`LocalizationStore::initialize`] and written after
//! every change; persistence failures are logged and never surfaced.

use crate::db::PreferenceStore;
use crate::i18n::{Language, TranslationCatalog};
use crate::retry::{with_retry, RetryConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Preference key holding the selected language identifier.
pub const LANGUAGE_KEY: &str = "selectedLanguage";

struct Inner {
    store: Arc<dyn PreferenceStore>,
    retry: RetryConfig,
    language: watch::Sender<Language>,
    initialized: AtomicBool,
    /// Set once the user picks a language; a later load must not override it.
    user_selected: AtomicBool,
    /// Serializes writes so the last selection is the one persisted.
    write_lock: Mutex<()>,
}

/// Current-language store shared by every presentation component.
#[derive(Clone)]
pub struct LocalizationStore {
    inner: Arc<Inner>,
}

impl LocalizationStore {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        let (language, _) = watch::channel(Language::default());
        Self {
            inner: Arc::new(Inner {
                store,
                retry: RetryConfig::persistence(),
                language,
                initialized: AtomicBool::new(false),
                user_selected: AtomicBool::new(false),
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Replace the retry policy used for persistence I/O.
    ///
    /// Only meaningful before the store is shared.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        if let Some(inner) = Arc::get_mut(&mut self.inner) {
            inner.retry = retry;
        }
        self
    }

    /// Load the persisted language.
    ///
    /// A missing, unreadable or unrecognized value leaves the current
    /// language untouched, as does a selection made before loading finished.
    /// Returns the language in effect afterwards.
    pub async fn initialize(&self) -> Language {
        let inner = &self.inner;
        let stored = with_retry(&inner.retry, "Load language preference", || {
            inner.store.get(LANGUAGE_KEY)
        })
        .await;

        match stored {
            Ok(Some(code)) => match Language::from_code(&code) {
                Ok(language) => {
                    let applied = inner.language.send_if_modified(|current| {
                        if inner.user_selected.load(Ordering::SeqCst) || *current == language {
                            return false;
                        }
                        *current = language;
                        true
                    });
                    if applied {
                        info!("Restored language preference: {}", language);
                    } else {
                        debug!("Keeping current language over stored {}", language);
                    }
                }
                Err(e) => warn!("Ignoring stored language preference: {}", e),
            },
            Ok(None) => debug!("No stored language preference"),
            Err(e) => warn!("Failed to load language preference: {}", e),
        }

        inner.initialized.store(true, Ordering::SeqCst);
        self.language()
    }

    /// Select `language` and persist it in the background.
    ///
    /// Subscribers see the change before this returns. The returned handle
    /// resolves once the write has been attempted; it never carries a
    /// persistence error. Outside a Tokio runtime the write is skipped and
    /// `None` is returned.
    pub fn set_language(&self, language: Language) -> Option<JoinHandle<()>> {
        let inner = &self.inner;
        inner.user_selected.store(true, Ordering::SeqCst);
        inner.language.send_if_modified(|current| {
            let changed = *current != language;
            *current = language;
            changed
        });
        info!("Language set to {}", language);

        let Ok(runtime) = Handle::try_current() else {
            warn!("No async runtime, language {} not persisted", language);
            return None;
        };
        let inner = Arc::clone(&self.inner);
        Some(runtime.spawn(async move { inner.persist().await }))
    }

    pub fn language(&self) -> Language {
        *self.inner.language.borrow()
    }

    /// Receive every subsequent language change.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.inner.language.subscribe()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.load(Ordering::SeqCst)
    }

    /// Look up `key` in the current language.
    pub fn translate<'a>(&self, catalog: &'a TranslationCatalog, key: &'a str) -> &'a str {
        catalog.lookup(self.language(), key)
    }

    /// Look up `key` in the current language and fill in `{name}` placeholders.
    pub fn format(&self, catalog: &TranslationCatalog, key: &str, args: &[(&str, &str)]) -> String {
        catalog.format(self.language(), key, args)
    }
}

impl Inner {
    async fn persist(&self) {
        let _guard = self.write_lock.lock().await;
        // Later selections may have landed while we waited.
        let language = *self.language.borrow();
        let code = language.code();

        match with_retry(&self.retry, "Persist language preference", || {
            self.store.set(LANGUAGE_KEY, code)
        })
        .await
        {
            Ok(()) => debug!("Persisted language preference: {}", code),
            Err(e) => warn!("Failed to persist language {}: {}", code, e),
        }
    }
}
