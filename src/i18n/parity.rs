//! Key-set parity between the locale dictionaries.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::i18n::language::Language;
use crate::i18n::loader::LocaleCatalog;

/// Which keys each language is missing relative to the union of all languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParityReport {
    /// Size of the union of all key sets.
    pub total_keys: usize,
    /// Keys absent per language (languages with no gaps map to an empty list).
    pub missing: BTreeMap<Language, Vec<String>>,
}

impl ParityReport {
    /// True when every language carries every key.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.values().all(Vec::is_empty)
    }

    /// Keys missing from one language.
    #[must_use]
    pub fn missing_for(&self, language: Language) -> &[String] {
        self.missing.get(&language).map_or(&[], Vec::as_slice)
    }

    /// What: Share of the key union present in `language`.
    ///
    /// Output:
    /// - Percentage in `[0, 100]`; an empty catalog counts as fully covered
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coverage_percent(&self, language: Language) -> f64 {
        if self.total_keys == 0 {
            return 100.0;
        }
        let present = self.total_keys - self.missing_for(language).len();
        present as f64 * 100.0 / self.total_keys as f64
    }
}

/// What: Compare the key sets of every dictionary in `catalog`.
///
/// Output:
/// - `ParityReport` listing, per language, keys that some other language has
#[must_use]
pub fn check_parity(catalog: &LocaleCatalog) -> ParityReport {
    let key_sets: BTreeMap<Language, BTreeSet<String>> = Language::ALL
        .into_iter()
        .map(|lang| (lang, catalog.dictionary(lang).keys()))
        .collect();

    let union: BTreeSet<&String> = key_sets.values().flatten().collect();

    let missing = key_sets
        .iter()
        .map(|(lang, keys)| {
            let gaps: Vec<String> = union
                .iter()
                .filter(|key| !keys.contains(**key))
                .map(|key| (*key).clone())
                .collect();
            if !gaps.is_empty() {
                tracing::warn!(language = %lang, count = gaps.len(), "locale is missing keys");
            }
            (*lang, gaps)
        })
        .collect();

    ParityReport {
        total_keys: union.len(),
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::loader::parse_locale_yaml;

    fn catalog(en: &str, id: &str) -> LocaleCatalog {
        LocaleCatalog::new(
            parse_locale_yaml(en).expect("en yaml"),
            parse_locale_yaml(id).expect("id yaml"),
        )
    }

    #[test]
    fn matching_catalogs_are_complete() {
        let report = check_parity(&catalog(
            "en:\n  a: A\n  b:\n    c: C\n",
            "id:\n  a: A\n  b:\n    c: C\n",
        ));
        assert!(report.is_complete());
        assert_eq!(report.total_keys, 2);
        assert!((report.coverage_percent(Language::Id) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn gaps_are_reported_per_language() {
        let report = check_parity(&catalog(
            "en:\n  a: A\n  b: B\n  c: C\n",
            "id:\n  a: A\n  d: D\n",
        ));
        assert!(!report.is_complete());
        assert_eq!(report.total_keys, 4);
        assert_eq!(report.missing_for(Language::En), ["d".to_string()]);
        assert_eq!(
            report.missing_for(Language::Id),
            ["b".to_string(), "c".to_string()]
        );
        assert!((report.coverage_percent(Language::Id) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn report_serializes_with_language_tags() {
        let report = check_parity(&catalog("en:\n  a: A\n", "id:\n  b: B\n"));
        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(json["missing"]["id"][0], "a");
        assert_eq!(json["missing"]["en"][0], "b");
    }
}
