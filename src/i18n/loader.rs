//! Locale file loading and parsing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::dictionary::{Entry, LocaleDictionary};
use crate::i18n::language::Language;

/// Bundled English dictionary.
const BUNDLED_EN: &str = include_str!("../../config/locales/en.yml");
/// Bundled Indonesian dictionary.
const BUNDLED_ID: &str = include_str!("../../config/locales/id.yml");

/// What: Load `{locales_dir}/{tag}.yml` into a `LocaleDictionary`.
///
/// Inputs:
/// - `language`: Language whose file should be read
/// - `locales_dir`: Directory containing the locale files
///
/// Output:
/// - `Result<LocaleDictionary, String>` with the parsed dictionary or a readable error
///
/// # Errors
/// - Returns `Err` when the file does not exist or cannot be read
/// - Returns `Err` when the file is empty
/// - Returns `Err` when the YAML cannot be parsed
pub fn load_locale_file(language: Language, locales_dir: &Path) -> Result<LocaleDictionary, String> {
    let file_path = locales_dir.join(format!("{}.yml", language.as_tag()));

    if !file_path.exists() {
        return Err(format!("Locale file not found: {}", file_path.display()));
    }

    let contents = fs::read_to_string(&file_path)
        .map_err(|e| format!("Failed to read locale file {}: {e}", file_path.display()))?;

    if contents.trim().is_empty() {
        return Err(format!("Locale file is empty: {}", file_path.display()));
    }

    parse_locale_yaml(&contents).map_err(|e| {
        format!(
            "Failed to parse locale file {}: {e}. Please check YAML syntax.",
            file_path.display()
        )
    })
}

/// What: Parse YAML content into a `LocaleDictionary`.
///
/// Details:
/// - Expects a top-level key naming the locale (e.g. `id:`) whose value is the nested tree
/// - Several top-level mappings are merged, later ones winning on conflicts
/// - Numbers and booleans become text; sequences and nulls are skipped
///
/// # Errors
/// - Returns `Err` when the YAML is malformed or the document is not a mapping
pub fn parse_locale_yaml(yaml_content: &str) -> Result<LocaleDictionary, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let Some(top) = doc.as_mapping() else {
        return Err("Locale document must be a mapping keyed by locale tag".to_string());
    };

    let mut root = BTreeMap::new();
    for (locale_key, locale_value) in top {
        match entry_from_value(locale_value, locale_key.as_str().unwrap_or("?")) {
            Some(Entry::Section(children)) => root.extend(children),
            _ => tracing::debug!(
                "Skipping top-level locale key {:?}: value is not a mapping",
                locale_key
            ),
        }
    }

    Ok(LocaleDictionary::from_entries(root))
}

/// Convert a YAML node into a dictionary entry. `path` is only used for logging.
fn entry_from_value(value: &serde_norway::Value, path: &str) -> Option<Entry> {
    use serde_norway::Value;

    match value {
        Value::Mapping(map) => {
            let mut children = BTreeMap::new();
            for (key, val) in map {
                let Some(key_str) = key.as_str() else {
                    tracing::debug!("Skipping non-string key under '{path}'");
                    continue;
                };
                if let Some(entry) = entry_from_value(val, &format!("{path}.{key_str}")) {
                    children.insert(key_str.to_string(), entry);
                }
            }
            Some(Entry::Section(children))
        }
        Value::String(s) => Some(Entry::Text(s.clone())),
        Value::Number(n) => Some(Entry::Text(n.to_string())),
        Value::Bool(b) => Some(Entry::Text(b.to_string())),
        Value::Tagged(tagged) => entry_from_value(&tagged.value, path),
        Value::Null | Value::Sequence(_) => {
            tracing::debug!("Skipping unsupported value at '{path}'");
            None
        }
    }
}

/// What: Find the locales directory in development and installed locations.
///
/// Output:
/// - `Some(PathBuf)` pointing to the first existing directory, or `None`
///
/// Details:
/// - Development location `CARGO_MANIFEST_DIR/config/locales` is checked first,
///   then the installed location `/usr/share/comondo/locales`
#[must_use]
pub fn find_locales_dir() -> Option<PathBuf> {
    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("locales");
    if dev_path.is_dir() {
        return Some(dev_path);
    }

    let installed_path = PathBuf::from("/usr/share/comondo/locales");
    if installed_path.is_dir() {
        return Some(installed_path);
    }

    None
}

/// One immutable dictionary per supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
    /// English strings.
    en: LocaleDictionary,
    /// Indonesian strings.
    id: LocaleDictionary,
}

impl LocaleCatalog {
    /// Assemble a catalog from explicit dictionaries.
    #[must_use]
    pub const fn new(en: LocaleDictionary, id: LocaleDictionary) -> Self {
        Self { en, id }
    }

    /// What: Catalog built from the dictionaries embedded at compile time.
    ///
    /// Details:
    /// - A bundled file that fails to parse yields an empty dictionary and a warning;
    ///   lookups then fall through to returning the key
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            en: bundled_dictionary(Language::En),
            id: bundled_dictionary(Language::Id),
        }
    }

    /// What: Load every language from `locales_dir`.
    ///
    /// Details:
    /// - A missing or invalid file is logged and replaced by the bundled dictionary,
    ///   so a partially broken directory never blanks the UI
    #[must_use]
    pub fn load(locales_dir: &Path) -> Self {
        let load_one = |language: Language| match load_locale_file(language, locales_dir) {
            Ok(dict) => {
                tracing::debug!(
                    "Loaded locale '{}' with {} translation keys",
                    language,
                    dict.len()
                );
                dict
            }
            Err(e) => {
                tracing::warn!("Failed to load locale '{}': {}. Using bundled strings.", language, e);
                bundled_dictionary(language)
            }
        };
        Self {
            en: load_one(Language::En),
            id: load_one(Language::Id),
        }
    }

    /// Dictionary for a language.
    #[must_use]
    pub const fn dictionary(&self, language: Language) -> &LocaleDictionary {
        match language {
            Language::En => &self.en,
            Language::Id => &self.id,
        }
    }
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Parse the embedded dictionary for `language`.
fn bundled_dictionary(language: Language) -> LocaleDictionary {
    let source = match language {
        Language::En => BUNDLED_EN,
        Language::Id => BUNDLED_ID,
    };
    parse_locale_yaml(source).unwrap_or_else(|e| {
        tracing::warn!("Bundled locale '{}' is invalid: {}", language, e);
        LocaleDictionary::default()
    })
}
