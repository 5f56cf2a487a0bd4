//! Supported language tags.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A language the site ships a dictionary for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (`en`), the default.
    #[default]
    En,
    /// Bahasa Indonesia (`id`).
    Id,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Self; 2] = [Self::En, Self::Id];

    /// Storage and file tag for the language.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
        }
    }

    /// What: Strict match against a persisted tag.
    ///
    /// Output:
    /// - `Some` only for exactly `en` or `id`; anything else counts as an invalid stored value
    #[must_use]
    pub fn from_stored_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.as_tag() == tag)
    }

    /// Human-readable name, in the language itself.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Id => "Bahasa Indonesia",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Returned when a tag does not name a supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLanguage {
    /// The rejected input, trimmed.
    pub tag: String,
}

impl fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let supported: Vec<&str> = Language::ALL.iter().map(|l| l.as_tag()).collect();
        write!(
            f,
            "unsupported language '{}' (expected one of: {})",
            self.tag,
            supported.join(", ")
        )
    }
}

impl std::error::Error for UnsupportedLanguage {}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// What: Parse a language tag.
    ///
    /// Details:
    /// - Case-insensitive; region and encoding suffixes are ignored
    ///   (`id-ID`, `en_US.UTF-8` and `ID` are all accepted)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let primary = trimmed
            .split('.')
            .next()
            .and_then(|locale| locale.split(['-', '_']).next())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Self::En),
            "id" | "in" => Ok(Self::Id),
            _ => Err(UnsupportedLanguage {
                tag: trimmed.to_string(),
            }),
        }
    }
}
