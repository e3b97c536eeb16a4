//! Catalog integrity validation.
//!
//! Every key in the canonical table must exist in every other table, and
//! interpolation placeholders must survive translation. A failure here is a
//! data defect in `strings.rs`, not a runtime condition: lookups still
//! resolve through the catalog fallback.

use crate::i18n::catalog::placeholder_regex;
use crate::i18n::{Language, TranslationCatalog, TranslationTable};
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects that break the shared key-set invariant
    pub errors: Vec<String>,

    /// Suspicious entries that still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog completeness and placeholder consistency.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate every non-canonical table against the canonical one.
    ///
    /// Reports:
    /// - missing canonical table (error)
    /// - keys missing from a table (error)
    /// - empty values (error)
    /// - keys unknown to the canonical table (warning)
    /// - placeholder sets that differ from the canonical value (warning)
    pub fn validate(catalog: &TranslationCatalog) -> ValidationReport {
        let mut report = ValidationReport::new();
        let canonical_language = Language::canonical();

        let Some(canonical) = catalog.table(canonical_language) else {
            report
                .errors
                .push(format!("No {} table in catalog", canonical_language));
            return report;
        };

        Self::check_empty_values(canonical_language, canonical, &mut report);

        for language in Language::ALL {
            if language == canonical_language {
                continue;
            }
            match catalog.table(language) {
                Some(table) => Self::validate_table(language, canonical, table, &mut report),
                None => report.errors.push(format!("No {} table in catalog", language)),
            }
        }

        report
    }

    fn validate_table(
        language: Language,
        canonical: &TranslationTable,
        table: &TranslationTable,
        report: &mut ValidationReport,
    ) {
        let mut missing: Vec<_> = canonical
            .iter()
            .map(|(key, _)| key)
            .filter(|key| !table.contains(key))
            .collect();
        missing.sort_unstable();
        for key in missing {
            report
                .errors
                .push(format!("{} is missing key '{}'", language, key));
        }

        let mut entries: Vec<_> = table.iter().collect();
        entries.sort_unstable();
        for (key, value) in entries {
            let Some(canonical_value) = canonical.get(key) else {
                report
                    .warnings
                    .push(format!("{} has key '{}' unknown to english", language, key));
                continue;
            };

            let expected = Self::extract_placeholders(canonical_value);
            let actual = Self::extract_placeholders(value);
            if expected != actual {
                report.warnings.push(format!(
                    "Placeholder mismatch in {} '{}': english has {:?}, translation has {:?}",
                    language, key, expected, actual
                ));
            }
        }

        Self::check_empty_values(language, table, report);
    }

    fn check_empty_values(
        language: Language,
        table: &TranslationTable,
        report: &mut ValidationReport,
    ) {
        let mut empty: Vec<_> = table
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| key)
            .collect();
        empty.sort_unstable();
        for key in empty {
            report
                .errors
                .push(format!("{} has an empty value for '{}'", language, key));
        }
    }

    /// Extract the set of `{name}` placeholders from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        placeholder_regex()
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::strings::StringTable;

    const EN: StringTable = &[("title", "Farming"), ("playing", "Now playing: {title}")];

    fn catalog_with(hindi: StringTable) -> TranslationCatalog {
        TranslationCatalog::from_tables(Language::ALL.into_iter().map(|lang| match lang {
            Language::English => (lang, EN),
            Language::Hindi => (lang, hindi),
            _ => (lang, EN),
        }))
    }

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let found = CatalogValidator::extract_placeholders("Now playing: {title}");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["title"]);
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(CatalogValidator::extract_placeholders("No tokens").is_empty());
    }

    #[test]
    fn test_extract_placeholders_ignores_order() {
        let a = CatalogValidator::extract_placeholders("{a} then {b}");
        let b = CatalogValidator::extract_placeholders("{b} then {a}");
        assert_eq!(a, b);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_builtin_catalog_is_clean() {
        let report = CatalogValidator::validate(TranslationCatalog::builtin());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_complete_translation_is_clean() {
        const HI: StringTable = &[("title", "खेती"), ("playing", "अभी चल रहा है: {title}")];
        let report = CatalogValidator::validate(&catalog_with(HI));
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_missing_key_is_error() {
        const HI: StringTable = &[("title", "खेती")];
        let report = CatalogValidator::validate(&catalog_with(HI));
        assert!(report.has_errors());
        assert_eq!(report.errors, vec!["hindi is missing key 'playing'"]);
    }

    #[test]
    fn test_empty_value_is_error() {
        const HI: StringTable = &[("title", "  "), ("playing", "{title}")];
        let report = CatalogValidator::validate(&catalog_with(HI));
        assert!(report.errors[0].contains("empty value"));
    }

    #[test]
    fn test_extra_key_is_warning() {
        const HI: StringTable = &[
            ("title", "खेती"),
            ("playing", "{title}"),
            ("orphan", "अनाथ"),
        ];
        let report = CatalogValidator::validate(&catalog_with(HI));
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("unknown to english"));
    }

    #[test]
    fn test_lost_placeholder_is_warning() {
        const HI: StringTable = &[("title", "खेती"), ("playing", "अभी चल रहा है")];
        let report = CatalogValidator::validate(&catalog_with(HI));
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("Placeholder mismatch"));
    }

    #[test]
    fn test_missing_table_is_error() {
        let catalog = TranslationCatalog::from_tables([(Language::English, EN)]);
        let report = CatalogValidator::validate(&catalog);
        assert_eq!(report.errors.len(), Language::ALL.len() - 1);
    }

    #[test]
    fn test_missing_canonical_table() {
        let catalog = TranslationCatalog::from_tables([(Language::Hindi, EN)]);
        let report = CatalogValidator::validate(&catalog);
        assert_eq!(report.errors, vec!["No english table in catalog"]);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(report.has_warnings());
    }
}
