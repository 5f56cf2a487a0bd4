//! Named viewport regions observed on a page.

use std::fmt;

/// Identifier of a page section (the element id, without `#`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(String);

impl SectionId {
    /// Wrap a section id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Sections of the home page, top to bottom.
pub const HOME_SECTIONS: [&str; 7] = [
    "hero",
    "about",
    "mission",
    "impact",
    "advantage",
    "products",
    "contact",
];

/// Roadmap markers on the Techondo product page.
pub const ROADMAP_PHASES: [&str; 3] = ["phase-1", "phase-2", "phase-3"];

/// Ordered, duplicate-free list of observed sections. Static for a page view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionRegistry {
    /// Sections in document order.
    sections: Vec<SectionId>,
}

impl SectionRegistry {
    /// What: Build a registry, dropping repeated ids.
    ///
    /// Details:
    /// - The first occurrence keeps its position
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SectionId>,
    {
        let mut sections: Vec<SectionId> = Vec::new();
        for id in ids {
            let id = id.into();
            if sections.contains(&id) {
                tracing::debug!(section = %id, "duplicate section id ignored");
            } else {
                sections.push(id);
            }
        }
        Self { sections }
    }

    /// Home page sections.
    #[must_use]
    pub fn home() -> Self {
        Self::new(HOME_SECTIONS)
    }

    /// Roadmap flip-card markers.
    #[must_use]
    pub fn roadmap() -> Self {
        Self::new(ROADMAP_PHASES)
    }

    /// Position of a section, if registered.
    #[must_use]
    pub fn index_of(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s == id)
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &SectionId) -> bool {
        self.sections.contains(id)
    }

    /// Sections in document order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter()
    }

    /// Section at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SectionId> {
        self.sections.get(index)
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
