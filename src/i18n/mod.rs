//! Internationalization (i18n) module.
//!
//! All language-related logic and localized strings live here.
//!
//! # Architecture
//!
//! - `language`: the closed `Language` enum and the `LocaleCode` mapping
//! - `registry`: display names and locales for every language
//! - `strings`: pre-authored string tables
//! - `catalog`: keyed lookup with canonical fallback and interpolation
//! - `validator`: key-set and placeholder integrity checks
//!
//! # Example
//!
//! ```rust
//! use voice_for_all::i18n::{Language, TranslationCatalog};
//!
//! let catalog = TranslationCatalog::builtin();
//! assert_eq!(catalog.lookup(Language::Hindi, "farming.title"), "खेती");
//! assert_eq!(Language::Hindi.locale_code().as_str(), "hi-IN");
//! ```

mod catalog;
mod language;
mod registry;
pub mod strings;
mod validator;

pub use catalog::{TranslationCatalog, TranslationTable};
pub use language::{Language, LanguageError, LocaleCode};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{CatalogValidator, ValidationReport};
