use std::path::PathBuf;

use crate::i18n::Language;

/// Longest accepted roadmap flip; larger values are clamped.
pub const MAX_FLIP_DURATION_MS: u64 = 10_000;

/// User-tunable settings loaded from `settings.conf`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Language used when the stored `locale` is absent or invalid.
    pub default_locale: Language,
    /// Directory holding `{tag}.yml` dictionaries; bundled dictionaries are used when unset.
    pub locales_dir: Option<PathBuf>,
    /// Skip flip and reveal animations.
    pub reduced_motion: bool,
    /// Full duration of the roadmap card flip, at most [`MAX_FLIP_DURATION_MS`].
    pub flip_duration_ms: u64,
    /// Root margin above the viewport, in CSS percent (negative shrinks).
    pub root_margin_top_pct: f64,
    /// Root margin below the viewport, in CSS percent (negative shrinks).
    pub root_margin_bottom_pct: f64,
    /// Minimum intersection ratio for one-shot reveals.
    pub reveal_threshold: f64,
    /// Scroll offset (px) below which the navigation bar is always shown.
    pub nav_hide_offset: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_locale: Language::default(),
            locales_dir: None,
            reduced_motion: false,
            flip_duration_ms: 700,
            root_margin_top_pct: -40.0,
            root_margin_bottom_pct: -40.0,
            reveal_threshold: 0.16,
            nav_hide_offset: 80.0,
        }
    }
}
