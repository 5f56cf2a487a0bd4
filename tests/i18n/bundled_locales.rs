//! The dictionaries shipped with the crate.

use std::sync::Arc;

use comondo::i18n::{
    Language, LanguageProvider, LocaleCatalog, MemoryStore, check_parity, find_locales_dir,
    load_locale_file,
};

#[test]
/// What: Every bundled language defines exactly the same keys.
fn bundled_locales_have_identical_key_sets() {
    let report = check_parity(&LocaleCatalog::bundled());
    assert!(report.total_keys > 0);
    for language in Language::ALL {
        assert!(
            report.missing_for(language).is_empty(),
            "{language} is missing {:?}",
            report.missing_for(language)
        );
    }
    assert!(report.is_complete());
}

#[test]
/// What: The checked-in locale files are the ones compiled into the binary.
fn locale_files_match_bundled_catalog() {
    let dir = find_locales_dir().expect("config/locales is found from the manifest dir");
    let bundled = LocaleCatalog::bundled();
    for language in Language::ALL {
        let on_disk = load_locale_file(language, &dir).expect("locale file parses");
        assert_eq!(&on_disk, bundled.dictionary(language), "{language} differs");
    }
}

#[test]
/// What: Known strings resolve per language and never leak across languages.
fn known_strings_per_language() {
    let catalog = Arc::new(LocaleCatalog::bundled());
    let mut provider = LanguageProvider::new(Arc::clone(&catalog), MemoryStore::new());
    assert_eq!(provider.language(), Language::En);
    assert_eq!(provider.t("nav.home"), "Home");
    assert_eq!(provider.t("nav.about"), "About");
    assert_eq!(
        provider.t("home.hero.title"),
        "Building the Future of Coconut Products"
    );

    provider.set_language(Language::Id);
    assert_eq!(provider.t("nav.home"), "Beranda");
    assert_eq!(provider.t("nav.about"), "Tentang");
    assert_ne!(
        provider.t("home.hero.title"),
        "Building the Future of Coconut Products"
    );
}

#[test]
/// What: Placeholders interpolate in both languages.
fn impact_counters_interpolate() {
    let catalog = Arc::new(LocaleCatalog::bundled());
    let mut provider = LanguageProvider::new(catalog, MemoryStore::new());
    let count = 3;
    let country = "Indonesia";
    assert_eq!(
        provider.t_with(
            "home.impact.regions",
            &[("count", &count), ("country", &country)]
        ),
        "Active in 3 regions across Indonesia"
    );
    provider.set_language(Language::Id);
    assert_eq!(
        provider.t_with("home.impact.farmers", &[("count", &1200)]),
        "1200 petani didukung"
    );
}

#[test]
/// What: A missing key and a section path both come back as the raw key.
fn missing_and_section_keys_return_key() {
    let provider = LanguageProvider::new(Arc::new(LocaleCatalog::bundled()), MemoryStore::new());
    assert_eq!(provider.t("home.hero.nope"), "home.hero.nope");
    assert_eq!(provider.t("home.hero"), "home.hero");
    assert_eq!(provider.t(""), "");
}
