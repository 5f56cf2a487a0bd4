//! The language context handed to every piece of UI text.

use std::sync::Arc;

use crate::i18n::language::{Language, UnsupportedLanguage};
use crate::i18n::loader::LocaleCatalog;
use crate::i18n::storage::{LOCALE_STORAGE_KEY, PreferenceStore};
use crate::i18n::translations::{TemplateVars, interpolate, translate, translate_or_key};

/// Active language plus the dictionaries and storage it resolves against.
///
/// One provider per page tree; nothing here is global, so tests can build as many
/// independent providers as they like.
#[derive(Debug)]
pub struct LanguageProvider<S: PreferenceStore> {
    /// Shared, immutable dictionaries.
    catalog: Arc<LocaleCatalog>,
    /// Currently selected language.
    language: Language,
    /// Where the selection is persisted.
    store: S,
}

impl<S: PreferenceStore> LanguageProvider<S> {
    /// What: Create a provider, restoring the persisted language when there is one.
    ///
    /// Details:
    /// - Falls back to `Language::default()`; see [`Self::with_default`]
    pub fn new(catalog: Arc<LocaleCatalog>, store: S) -> Self {
        Self::with_default(catalog, store, Language::default())
    }

    /// What: Create a provider with an explicit default language.
    ///
    /// Inputs:
    /// - `catalog`: Dictionaries for every supported language
    /// - `store`: Durable storage holding the `locale` key
    /// - `default`: Used when storage has no value, an invalid value, or cannot be read
    pub fn with_default(catalog: Arc<LocaleCatalog>, store: S, default: Language) -> Self {
        let language = match store.read(LOCALE_STORAGE_KEY) {
            Ok(Some(tag)) => Language::from_stored_tag(&tag).unwrap_or_else(|| {
                tracing::debug!(stored = %tag, fallback = %default, "ignoring invalid stored locale");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                tracing::debug!(error = %e, fallback = %default, "locale storage unreadable");
                default
            }
        };
        tracing::debug!(language = %language, "language provider ready");
        Self {
            catalog,
            language,
            store,
        }
    }

    /// Currently active language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Dictionaries this provider resolves against.
    #[must_use]
    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }

    /// Storage backing the language preference.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// What: Resolve `key` in the active language.
    ///
    /// Output:
    /// - The template, or `key` itself when the active dictionary lacks it
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        translate_or_key(key, self.catalog.dictionary(self.language))
    }

    /// What: Resolve `key` and fill its `{name}` placeholders.
    ///
    /// Output:
    /// - Interpolated template, or `key` itself (uninterpolated) on a miss
    #[must_use]
    pub fn t_with(&self, key: &str, vars: &TemplateVars<'_>) -> String {
        translate(key, self.catalog.dictionary(self.language))
            .map_or_else(|| self.t(key), |template| interpolate(template, vars))
    }

    /// What: Switch language and persist the choice.
    ///
    /// Details:
    /// - The in-memory switch always happens; a storage failure is logged and ignored,
    ///   so the choice simply does not survive the next start
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        match self.store.write(LOCALE_STORAGE_KEY, language.as_tag()) {
            Ok(()) => tracing::info!(language = %language, "language changed"),
            Err(e) => tracing::debug!(
                language = %language,
                error = %e,
                "language changed in memory only; storage unavailable"
            ),
        }
    }

    /// What: Validate a tag, then switch to it.
    ///
    /// # Errors
    /// - Returns `UnsupportedLanguage` for tags outside `en`/`id`; the active language is unchanged
    pub fn set_language_tag(&mut self, tag: &str) -> Result<Language, UnsupportedLanguage> {
        let language: Language = tag.parse()?;
        self.set_language(language);
        Ok(language)
    }

    /// Give the storage back, e.g. to reopen it in a fresh provider.
    pub fn into_store(self) -> S {
        self.store
    }
}
