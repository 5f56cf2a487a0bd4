//! Language selection survives a restart through the settings file.

use std::sync::Arc;

use comondo::i18n::{
    DisabledStore, LOCALE_STORAGE_KEY, Language, LanguageProvider, LocaleCatalog, MemoryStore,
    PreferenceStore, SettingsFileStore,
};
use tempfile::TempDir;

fn catalog() -> Arc<LocaleCatalog> {
    Arc::new(LocaleCatalog::bundled())
}

#[test]
/// What: `set_language("id")` then a fresh provider on the same file starts in Indonesian.
fn selection_persists_across_providers() {
    let tmp = TempDir::new().expect("temp dir");
    let path = tmp.path().join("settings.conf");

    let mut first = LanguageProvider::new(catalog(), SettingsFileStore::new(path.clone()));
    assert_eq!(first.language(), Language::En);
    assert_eq!(first.set_language_tag("id"), Ok(Language::Id));
    drop(first);

    let contents = std::fs::read_to_string(&path).expect("settings written");
    assert!(contents.lines().any(|l| l.trim() == "locale = id"));

    let second = LanguageProvider::new(catalog(), SettingsFileStore::new(path));
    assert_eq!(second.language(), Language::Id);
    assert_eq!(second.t("nav.home"), "Beranda");
}

#[test]
/// What: Switching keeps the rest of the settings file intact.
fn switching_preserves_other_settings() {
    let tmp = TempDir::new().expect("temp dir");
    let path = tmp.path().join("settings.conf");
    std::fs::write(&path, "# mine\nreduced_motion = true\nlocale = en\n").expect("seed");

    let mut provider = LanguageProvider::new(catalog(), SettingsFileStore::new(path.clone()));
    provider.set_language(Language::Id);

    let contents = std::fs::read_to_string(&path).expect("read back");
    assert!(contents.starts_with("# mine\n"));
    assert!(contents.contains("reduced_motion = true"));
    assert_eq!(contents.matches("locale").count(), 1);
    assert!(contents.contains("locale = id"));
}

#[test]
/// What: Garbage in storage falls back to the default and is overwritten on the next switch.
fn invalid_stored_value_falls_back() {
    let store = MemoryStore::with_entry(LOCALE_STORAGE_KEY, "fr");
    let mut provider = LanguageProvider::with_default(catalog(), store.clone(), Language::Id);
    assert_eq!(provider.language(), Language::Id);

    provider.set_language(Language::En);
    assert_eq!(
        store.read(LOCALE_STORAGE_KEY).expect("memory store reads"),
        Some("en".to_string())
    );
}

#[test]
/// What: Unavailable storage never blocks switching.
fn disabled_storage_still_switches() {
    let mut provider = LanguageProvider::new(catalog(), DisabledStore);
    provider.set_language(Language::Id);
    assert_eq!(provider.language(), Language::Id);
    assert_eq!(provider.t("nav.home"), "Beranda");
}

#[test]
/// What: An unsupported tag is rejected and neither state nor storage changes.
fn unsupported_tag_changes_nothing() {
    let store = MemoryStore::new();
    let mut provider = LanguageProvider::new(catalog(), store.clone());
    let err = provider.set_language_tag("de").expect_err("de is unsupported");
    assert_eq!(err.tag, "de");
    assert_eq!(provider.language(), Language::En);
    assert_eq!(store.read(LOCALE_STORAGE_KEY).expect("reads"), None);
}
