//! Internationalization commands: `t`, `lang` and `check-locales`.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use comondo::i18n::{
    DisabledStore, Language, LanguageProvider, LocaleCatalog, ParityReport, PreferenceStore,
    SettingsFileStore, check_parity, find_locales_dir, load_locale_file,
};
use comondo::settings::{Settings, settings};

/// What: Load the catalog the CLI should translate with.
///
/// Inputs:
/// - `prefs`: Loaded settings.
///
/// Output:
/// - Catalog from `locales_dir` when configured, otherwise the bundled dictionaries.
///
/// Details:
/// - Files missing from a configured directory fall back to the bundled ones per language.
pub fn load_catalog(prefs: &Settings) -> LocaleCatalog {
    match &prefs.locales_dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "loading locales from configured directory");
            LocaleCatalog::load(dir)
        }
        None => LocaleCatalog::bundled(),
    }
}

/// What: Provider backed by the user's settings file.
pub fn user_provider(prefs: &Settings) -> LanguageProvider<SettingsFileStore> {
    LanguageProvider::with_default(
        Arc::new(load_catalog(prefs)),
        SettingsFileStore::user(),
        prefs.default_locale,
    )
}

/// Translate `key` with `name=value` pairs as placeholder values.
fn render<S: PreferenceStore>(
    provider: &LanguageProvider<S>,
    key: &str,
    vars: &[(String, String)],
) -> String {
    let pairs: Vec<(&str, &dyn Display)> = vars
        .iter()
        .map(|(name, value)| (name.as_str(), value as &dyn Display))
        .collect();
    provider.t_with(key, &pairs)
}

/// What: Print the translation of `key`.
///
/// Inputs:
/// - `key`: Dot-separated key.
/// - `vars`: Placeholder values.
/// - `lang`: Optional language override; not persisted.
///
/// Output:
/// - `0` after printing (an unknown key prints the key itself), `2` for an unsupported `lang`.
pub fn handle_translate(key: &str, vars: &[(String, String)], lang: Option<&str>) -> ExitCode {
    let prefs = settings();
    let text = if let Some(tag) = lang {
        let language = match tag.parse::<Language>() {
            Ok(language) => language,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::from(2);
            }
        };
        let provider =
            LanguageProvider::with_default(Arc::new(load_catalog(&prefs)), DisabledStore, language);
        render(&provider, key, vars)
    } else {
        render(&user_provider(&prefs), key, vars)
    };
    if text == key {
        tracing::warn!(key = %key, "no translation found");
    }
    println!("{text}");
    ExitCode::SUCCESS
}

/// What: Show the active language, or switch to `tag` and persist it.
///
/// Output:
/// - `0` on success, `2` for an unsupported tag (the stored preference is left untouched).
pub fn handle_lang(tag: Option<&str>) -> ExitCode {
    let prefs = settings();
    let mut provider = user_provider(&prefs);
    let Some(tag) = tag else {
        let language = provider.language();
        println!("{} ({})", language.as_tag(), language.native_name());
        return ExitCode::SUCCESS;
    };
    match provider.set_language_tag(tag) {
        Ok(language) => {
            tracing::info!(language = %language, path = %provider.store().path().display(), "language changed");
            println!("{} ({})", language.as_tag(), language.native_name());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

/// Load every language from `dir`, failing on the first unreadable file.
fn load_catalog_strict(dir: &Path) -> Result<LocaleCatalog, String> {
    let en = load_locale_file(Language::En, dir)?;
    let id = load_locale_file(Language::Id, dir)?;
    Ok(LocaleCatalog::new(en, id))
}

/// Plain-text rendering of a parity report.
fn format_report(report: &ParityReport) -> String {
    use std::fmt::Write;

    let mut out = format!("{} keys\n", report.total_keys);
    for language in Language::ALL {
        let missing = report.missing_for(language);
        let _ = write!(
            out,
            "{}: {:.1}%",
            language.as_tag(),
            report.coverage_percent(language)
        );
        if missing.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, " (missing {})", missing.len());
            for key in missing {
                let _ = writeln!(out, "  - {key}");
            }
        }
    }
    out
}

/// What: Check that every locale defines the same keys.
///
/// Inputs:
/// - `dir`: Directory to check; defaults to the configured, then installed locales directory.
/// - `json`: Emit the report as JSON.
///
/// Output:
/// - `0` when all key sets match, `1` when keys are missing or a file cannot be read.
///
/// Details:
/// - Without any directory the bundled dictionaries are checked.
/// - A file missing from `dir` is an error here, not a silent fallback.
pub fn handle_check_locales(dir: Option<&Path>, json: bool) -> ExitCode {
    let dir: Option<PathBuf> = dir
        .map(Path::to_path_buf)
        .or_else(|| settings().locales_dir)
        .or_else(find_locales_dir);
    let catalog = match &dir {
        Some(dir) => match load_catalog_strict(dir) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            tracing::info!("no locales directory found; checking bundled locales");
            LocaleCatalog::bundled()
        }
    };
    let report = check_parity(&catalog);
    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", format_report(&report));
    }
    if report.is_complete() {
        ExitCode::SUCCESS
    } else {
        tracing::warn!(total = report.total_keys, "locale key sets differ");
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comondo::i18n::{MemoryStore, parse_locale_yaml};

    #[test]
    /// What: `--var` pairs fill placeholders; unknown keys come back verbatim.
    fn render_fills_placeholders() {
        let catalog = Arc::new(LocaleCatalog::bundled());
        let provider = LanguageProvider::with_default(catalog, MemoryStore::new(), Language::En);
        let vars = vec![("count".to_string(), "12".to_string())];
        assert_eq!(
            render(&provider, "home.impact.farmers", &vars),
            "12 farmers supported"
        );
        assert_eq!(render(&provider, "no.such.key", &vars), "no.such.key");
    }

    #[test]
    /// What: Text report lists missing keys under the language that lacks them.
    fn format_report_lists_missing() {
        let en = parse_locale_yaml("en:\n  a: A\n  b: B\n").expect("en");
        let id = parse_locale_yaml("id:\n  a: A\n").expect("id");
        let report = check_parity(&LocaleCatalog::new(en, id));
        let text = format_report(&report);
        assert!(text.starts_with("2 keys\n"));
        assert!(text.contains("en: 100.0%\n"));
        assert!(text.contains("id: 50.0% (missing 1)\n  - b\n"));
    }

    #[test]
    /// What: Strict loading reports a missing file instead of falling back.
    fn strict_load_fails_on_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("en.yml"), "en:\n  a: A\n").expect("write");
        assert!(load_catalog_strict(dir.path()).is_err());
        std::fs::write(dir.path().join("id.yml"), "id:\n  a: A\n").expect("write");
        let catalog = load_catalog_strict(dir.path()).expect("both files present");
        assert!(check_parity(&catalog).is_complete());
    }
}
