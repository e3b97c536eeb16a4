//! Language type: the closed set of supported narration languages.
//!
//! `Language` is an enum because the supported set is fixed at build time.
//! Display metadata and locale codes live in the registry; this module only
//! deals with identity, parsing and the locale mapping.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a language identifier is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language identifier: '{0}'")]
pub struct LanguageError(pub String);

/// A supported language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Malayalam,
    Marathi,
    Tamil,
    Telugu,
    Bengali,
}

impl Language {
    /// Every supported language, canonical first.
    pub const ALL: [Language; 7] = [
        Language::English,
        Language::Hindi,
        Language::Malayalam,
        Language::Marathi,
        Language::Tamil,
        Language::Telugu,
        Language::Bengali,
    ];

    /// Parse a language identifier (e.g. "hindi").
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    ///
    /// # Returns
    /// * `Ok(Language)` if the identifier names a supported language
    /// * `Err(LanguageError)` otherwise
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        let trimmed = code.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LanguageError(code.to_string()))
    }

    /// The canonical language every table is authored against.
    pub fn canonical() -> Language {
        LanguageRegistry::get().canonical().language
    }

    /// Stable identifier used for persistence (e.g. "english").
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Malayalam => "malayalam",
            Language::Marathi => "marathi",
            Language::Tamil => "tamil",
            Language::Telugu => "telugu",
            Language::Bengali => "bengali",
        }
    }

    /// Registry metadata for this language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config_for(*self)
    }

    /// English name of the language (e.g. "Hindi").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name of the language in its own script (e.g. "हिंदी").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Locale code the speech engine needs for this language.
    pub fn locale_code(&self) -> LocaleCode {
        LocaleCode(self.config().locale)
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

/// Region-qualified locale tag understood by the speech engine (e.g. "hi-IN").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocaleCode(&'static str);

impl LocaleCode {
    /// Locale used whenever a language cannot be mapped.
    pub const DEFAULT: LocaleCode = LocaleCode("en-IN");

    /// Map an arbitrary language identifier to its locale.
    ///
    /// This is total: unknown identifiers map to [`LocaleCode::DEFAULT`].
    pub fn for_identifier(identifier: &str) -> LocaleCode {
        Language::from_code(identifier)
            .map(|lang| lang.locale_code())
            .unwrap_or(LocaleCode::DEFAULT)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        LocaleCode::DEFAULT
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
