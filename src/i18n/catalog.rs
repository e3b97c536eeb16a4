//! Translation catalog: keyed lookup over the per-language string tables.
//!
//! Lookup never fails. Resolution order is the requested language, then the
//! canonical (English) table, then the key itself, so presentation code can
//! always render something.

use crate::i18n::strings::{self, StringTable};
use crate::i18n::Language;
use regex::{Captures, Regex};
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;
use tracing::debug;

/// Strings for a single language.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    strings: HashMap<&'static str, &'static str>,
}

impl TranslationTable {
    pub fn from_pairs(pairs: StringTable) -> Self {
        Self {
            strings: pairs.iter().copied().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.strings.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.strings.iter().map(|(key, value)| (*key, *value))
    }
}

/// Immutable mapping from language to its string table.
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    tables: HashMap<Language, TranslationTable>,
}

static BUILTIN: OnceLock<TranslationCatalog> = OnceLock::new();
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches `{name}` interpolation tokens.
pub(crate) fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap())
}

impl TranslationCatalog {
    /// The catalog built from the bundled tables, loaded on first use.
    pub fn builtin() -> &'static TranslationCatalog {
        BUILTIN.get_or_init(|| {
            Self::from_tables([
                (Language::English, strings::ENGLISH),
                (Language::Hindi, strings::HINDI),
                (Language::Malayalam, strings::MALAYALAM),
                (Language::Marathi, strings::MARATHI),
                (Language::Tamil, strings::TAMIL),
                (Language::Telugu, strings::TELUGU),
                (Language::Bengali, strings::BENGALI),
            ])
        })
    }

    /// Build a catalog from explicit tables. Languages without a table fall
    /// straight through to the canonical one.
    pub fn from_tables<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Language, StringTable)>,
    {
        Self {
            tables: tables
                .into_iter()
                .map(|(language, pairs)| (language, TranslationTable::from_pairs(pairs)))
                .collect(),
        }
    }

    /// Resolve `key` for `language`.
    ///
    /// Empty values count as missing. Falls back to the canonical table, then
    /// to `key` itself, so the result is never empty for a non-empty key.
    pub fn lookup<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        if let Some(value) = self.non_empty(language, key) {
            return value;
        }

        let canonical = Language::canonical();
        if language != canonical {
            if let Some(value) = self.non_empty(canonical, key) {
                debug!("'{}' missing for {}, using {}", key, language, canonical);
                return value;
            }
        }

        debug!("'{}' missing from every table, rendering the key", key);
        key
    }

    fn non_empty(&self, language: Language, key: &str) -> Option<&'static str> {
        self.table(language)
            .and_then(|table| table.get(key))
            .filter(|value| !value.is_empty())
    }

    /// Resolve `key` and substitute `{name}` tokens from `args` in one pass.
    ///
    /// Tokens without a matching argument are left as-is.
    pub fn format(&self, language: Language, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.lookup(language, key);
        placeholder_regex()
            .replace_all(template, |caps: &Captures| {
                let name = &caps[1];
                args.iter()
                    .find(|(arg, _)| *arg == name)
                    .map(|(_, value)| (*value).to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    pub fn table(&self, language: Language) -> Option<&TranslationTable> {
        self.tables.get(&language)
    }

    /// The canonical key set, sorted.
    pub fn keys(&self) -> Vec<&'static str> {
        self.table(Language::canonical())
            .map(|table| {
                table
                    .iter()
                    .map(|(key, _)| key)
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Languages that have a table, in picker order.
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.tables.contains_key(lang))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: StringTable = &[
        ("greeting", "Hello"),
        ("farewell", "Goodbye"),
        ("now_playing", "Now playing: {title}"),
    ];
    const HI: StringTable = &[("greeting", "नमस्ते")];

    fn partial_catalog() -> TranslationCatalog {
        TranslationCatalog::from_tables([(Language::English, EN), (Language::Hindi, HI)])
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_direct_hit() {
        let catalog = partial_catalog();
        assert_eq!(catalog.lookup(Language::Hindi, "greeting"), "नमस्ते");
        assert_eq!(catalog.lookup(Language::English, "greeting"), "Hello");
    }

    #[test]
    fn test_lookup_falls_back_to_english() {
        let catalog = partial_catalog();
        assert_eq!(catalog.lookup(Language::Hindi, "farewell"), "Goodbye");
    }

    #[test]
    fn test_lookup_treats_empty_value_as_missing() {
        const EN_BLANK: StringTable = &[("greeting", "Hello"), ("blank", "")];
        const HI_BLANK: StringTable = &[("greeting", ""), ("blank", "")];
        let catalog = TranslationCatalog::from_tables([
            (Language::English, EN_BLANK),
            (Language::Hindi, HI_BLANK),
        ]);

        assert_eq!(catalog.lookup(Language::Hindi, "greeting"), "Hello");
        assert_eq!(catalog.lookup(Language::Hindi, "blank"), "blank");
        assert_eq!(catalog.lookup(Language::English, "blank"), "blank");
    }

    #[test]
    fn test_lookup_language_without_table_uses_english() {
        let catalog = partial_catalog();
        assert_eq!(catalog.lookup(Language::Tamil, "greeting"), "Hello");
    }

    #[test]
    fn test_lookup_unknown_key_returns_key() {
        let catalog = partial_catalog();
        assert_eq!(catalog.lookup(Language::Hindi, "missing.key"), "missing.key");
        assert_eq!(catalog.lookup(Language::English, "missing.key"), "missing.key");
    }

    #[test]
    fn test_builtin_example_key() {
        let catalog = TranslationCatalog::builtin();
        assert_eq!(catalog.lookup(Language::English, "farming.title"), "Farming");
        assert_eq!(catalog.lookup(Language::Hindi, "farming.title"), "खेती");
    }

    #[test]
    fn test_builtin_every_key_non_empty_in_every_language() {
        let catalog = TranslationCatalog::builtin();
        for key in catalog.keys() {
            for lang in Language::ALL {
                assert!(
                    !catalog.lookup(lang, key).is_empty(),
                    "{} resolved empty for {}",
                    key,
                    lang
                );
            }
        }
    }

    #[test]
    fn test_builtin_returns_singleton() {
        assert!(std::ptr::eq(
            TranslationCatalog::builtin(),
            TranslationCatalog::builtin()
        ));
    }

    // ==================== Format Tests ====================

    #[test]
    fn test_format_substitutes_placeholder() {
        let catalog = partial_catalog();
        let text = catalog.format(Language::English, "now_playing", &[("title", "Irrigation")]);
        assert_eq!(text, "Now playing: Irrigation");
    }

    #[test]
    fn test_format_leaves_unknown_placeholder() {
        let catalog = partial_catalog();
        let text = catalog.format(Language::English, "now_playing", &[("other", "x")]);
        assert_eq!(text, "Now playing: {title}");
    }

    #[test]
    fn test_format_is_single_pass() {
        let catalog = partial_catalog();
        let text = catalog.format(Language::English, "now_playing", &[("title", "{title}")]);
        assert_eq!(text, "Now playing: {title}");
    }

    #[test]
    fn test_format_uses_fallback_template() {
        let catalog = partial_catalog();
        let text = catalog.format(Language::Hindi, "now_playing", &[("title", "X")]);
        assert_eq!(text, "Now playing: X");
    }

    // ==================== Introspection Tests ====================

    #[test]
    fn test_keys_sorted() {
        let catalog = partial_catalog();
        assert_eq!(catalog.keys(), vec!["farewell", "greeting", "now_playing"]);
    }

    #[test]
    fn test_languages_in_picker_order() {
        let catalog = partial_catalog();
        assert_eq!(catalog.languages(), vec![Language::English, Language::Hindi]);
        assert_eq!(TranslationCatalog::builtin().languages(), Language::ALL.to_vec());
    }

    #[test]
    fn test_table_access() {
        let catalog = partial_catalog();
        let table = catalog.table(Language::Hindi).expect("Hindi table");
        assert_eq!(table.len(), 1);
        assert!(table.contains("greeting"));
        assert!(catalog.table(Language::Bengali).is_none());
    }
}
