//! Language registry: Single source of truth for language metadata.
//!
//! Holds the display names and speech-engine locale for every supported
//! language. It uses a singleton pattern with `OnceLock`; the table is
//! immutable after initialization.

use crate::i18n::Language;
use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub language: Language,

    /// English name of the language (e.g., "Hindi")
    pub name: &'static str,

    /// Native name of the language (e.g., "हिंदी")
    pub native_name: &'static str,

    /// Locale tag handed to the speech engine (e.g., "hi-IN")
    pub locale: &'static str,

    /// Whether this is the canonical language (exactly one should be true)
    pub is_canonical: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Metadata for a language.
    ///
    /// # Panics
    /// Panics if `language` has no entry, which means the table below is out
    /// of sync with the `Language` enum.
    pub fn config_for(&self, language: Language) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|config| config.language == language)
            .unwrap_or_else(|| panic!("No registry entry for {:?}", language))
    }

    /// Look up metadata by persisted identifier (e.g. "tamil").
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        let language = Language::from_code(code).ok()?;
        self.languages.iter().find(|config| config.language == language)
    }

    /// All languages in picker order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The canonical language configuration.
    ///
    /// # Panics
    /// Panics if there is not exactly one canonical language.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::English,
            name: "English",
            native_name: "English",
            locale: "en-IN",
            is_canonical: true,
        },
        LanguageConfig {
            language: Language::Hindi,
            name: "Hindi",
            native_name: "हिंदी",
            locale: "hi-IN",
            is_canonical: false,
        },
        LanguageConfig {
            language: Language::Malayalam,
            name: "Malayalam",
            native_name: "മലയാളം",
            locale: "ml-IN",
            is_canonical: false,
        },
        LanguageConfig {
            language: Language::Marathi,
            name: "Marathi",
            native_name: "मराठी",
            locale: "mr-IN",
            is_canonical: false,
        },
        LanguageConfig {
            language: Language::Tamil,
            name: "Tamil",
            native_name: "தமிழ்",
            locale: "ta-IN",
            is_canonical: false,
        },
        LanguageConfig {
            language: Language::Telugu,
            name: "Telugu",
            native_name: "తెలుగు",
            locale: "te-IN",
            is_canonical: false,
        },
        LanguageConfig {
            language: Language::Bengali,
            name: "Bengali",
            native_name: "বাংলা",
            locale: "bn-IN",
            is_canonical: false,
        },
    ]
}
