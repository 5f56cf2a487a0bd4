use std::fs;
use std::path::{Path, PathBuf};

use super::parsing::{parse_bool, split_line};
use super::paths::settings_path;
use super::types::{MAX_FLIP_DURATION_MS, Settings};

/// Load user settings from `settings.conf` in the config directory.
/// Falls back to `Settings::default()` when the file is missing or unreadable.
pub fn settings() -> Settings {
    load_settings(&settings_path())
}

/// What: Load settings from an explicit file.
///
/// Inputs:
/// - `path`: Location of a `settings.conf`
///
/// Output:
/// - Parsed `Settings`; unknown keys are ignored and invalid values keep their defaults
pub fn load_settings(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "settings file not readable, using defaults");
            Settings::default()
        }
    }
}

/// Parse settings file content.
fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let Some((key, val)) = split_line(line) else {
            continue;
        };
        match key.as_str() {
            // The active language is read through `SettingsFileStore`.
            "locale" | "language" => {}
            "default_locale" | "default_language" => match val.parse() {
                Ok(lang) => out.default_locale = lang,
                Err(e) => tracing::warn!("Invalid default_locale in settings.conf: {e}"),
            },
            "locales_dir" => {
                out.locales_dir = if val.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(val))
                };
            }
            "reduced_motion" | "prefers_reduced_motion" => {
                if let Some(b) = parse_bool(val) {
                    out.reduced_motion = b;
                }
            }
            "flip_duration_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    if v > MAX_FLIP_DURATION_MS {
                        tracing::warn!(value = v, max = MAX_FLIP_DURATION_MS, "flip_duration_ms clamped");
                    }
                    out.flip_duration_ms = v.min(MAX_FLIP_DURATION_MS);
                }
            }
            "root_margin_top_pct" => {
                if let Ok(v) = val.parse::<f64>()
                    && v.is_finite()
                {
                    out.root_margin_top_pct = v;
                }
            }
            "root_margin_bottom_pct" => {
                if let Ok(v) = val.parse::<f64>()
                    && v.is_finite()
                {
                    out.root_margin_bottom_pct = v;
                }
            }
            "reveal_threshold" => {
                if let Ok(v) = val.parse::<f64>()
                    && (0.0..=1.0).contains(&v)
                {
                    out.reveal_threshold = v;
                }
            }
            "nav_hide_offset" => {
                if let Ok(v) = val.parse::<f64>()
                    && v.is_finite()
                    && v >= 0.0
                {
                    out.nav_hide_offset = v;
                }
            }
            other => {
                tracing::debug!("Ignoring unknown settings key '{other}'");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn parse_settings_reads_known_keys() {
        let content = r"
# comment
locale = id
default-locale = ID
locales_dir = /srv/comondo/locales
reduced_motion = yes
flip_duration_ms = 500 // faster
root_margin_top_pct = -30
root_margin_bottom_pct = -45.5
reveal_threshold = 0.25
nav_hide_offset = 120
";
        let s = parse_settings(content);
        assert_eq!(s.default_locale, Language::Id);
        assert_eq!(s.locales_dir, Some(PathBuf::from("/srv/comondo/locales")));
        assert!(s.reduced_motion);
        assert_eq!(s.flip_duration_ms, 500);
        assert!((s.root_margin_top_pct + 30.0).abs() < f64::EPSILON);
        assert!((s.root_margin_bottom_pct + 45.5).abs() < f64::EPSILON);
        assert!((s.reveal_threshold - 0.25).abs() < f64::EPSILON);
        assert!((s.nav_hide_offset - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_settings_keeps_defaults_on_invalid_values() {
        let content = "default_locale = fr\nflip_duration_ms = soon\nreveal_threshold = 4\nreduced_motion = perhaps\nunknown = 1\n";
        let s = parse_settings(content);
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: Oversized flip durations are clamped instead of stalling the roadmap.
    fn parse_settings_clamps_flip_duration() {
        let s = parse_settings("flip_duration_ms = 18446744073709551615\n");
        assert_eq!(s.flip_duration_ms, MAX_FLIP_DURATION_MS);
        let s = parse_settings("flip_duration_ms = 10001\n");
        assert_eq!(s.flip_duration_ms, MAX_FLIP_DURATION_MS);
        let s = parse_settings("flip_duration_ms = 10000\n");
        assert_eq!(s.flip_duration_ms, 10_000);
    }

    #[test]
    /// What: The language keys are accepted but carry no `Settings` state.
    fn parse_settings_leaves_language_to_store() {
        let s = parse_settings("locale = id\nlanguage = en\n");
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn skeleton_parses_to_defaults() {
        let s = parse_settings(crate::settings::SETTINGS_SKELETON_CONTENT);
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn load_settings_missing_file_is_default() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let s = load_settings(&tmp.path().join("nope.conf"));
        assert_eq!(s, Settings::default());
    }
}
