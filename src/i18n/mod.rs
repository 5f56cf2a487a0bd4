//! Internationalization (i18n) for the Comondo site.
//!
//! # Overview
//!
//! - **Dictionaries**: one nested YAML file per language (`config/locales/{tag}.yml`),
//!   loaded once into an immutable [`LocaleCatalog`]. The same files are embedded in the
//!   binary, so a missing locales directory never leaves the UI without text.
//! - **Lookup**: dot-notation keys (`home.hero.title`) walk the nested tree. A miss returns
//!   the key itself, never an empty string.
//! - **Interpolation**: `{name}` placeholders are filled from `(name, value)` pairs;
//!   unknown placeholders stay as written.
//! - **Preference**: the selected language is written under the `locale` key of a
//!   [`PreferenceStore`]. Storage failures only cost persistence, never the switch itself.
//!
//! # Locale Files
//!
//! ```yaml
//! en:
//!   home:
//!     impact:
//!       farmers: "{count} farmers supported"
//! ```
//!
//! becomes `home.impact.farmers`.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use comondo::i18n::{Language, LanguageProvider, LocaleCatalog, MemoryStore};
//!
//! let mut provider = LanguageProvider::new(Arc::new(LocaleCatalog::bundled()), MemoryStore::new());
//! assert_eq!(provider.t("nav.home"), "Home");
//!
//! provider.set_language(Language::Id);
//! let count = 40;
//! assert_eq!(provider.t_with("home.impact.farmers", &[("count", &count)]), "40 petani didukung");
//! assert_eq!(provider.t("nav.nowhere"), "nav.nowhere");
//! ```
//!
//! # Adding a New String
//!
//! Add the key to every file under `config/locales/`. `comondo check-locales` (and the
//! `bundled_locales` test) fail while the key sets differ.

mod dictionary;
mod language;
mod loader;
mod parity;
mod provider;
mod storage;
pub mod translations;

pub use dictionary::{Entry, LocaleDictionary};
pub use language::{Language, UnsupportedLanguage};
pub use loader::{LocaleCatalog, find_locales_dir, load_locale_file, parse_locale_yaml};
pub use parity::{ParityReport, check_parity};
pub use provider::LanguageProvider;
pub use storage::{
    DisabledStore, LOCALE_STORAGE_KEY, MemoryStore, PreferenceStore, SettingsFileStore,
    StoreError,
};
pub use translations::{TemplateVars, interpolate, translate, translate_or_key};
