//! One-shot enter animations.

use std::collections::BTreeSet;

use crate::scroll::observer::IntersectionEntry;
use crate::scroll::registry::{SectionId, SectionRegistry};

/// Default visible ratio before an element plays its enter animation.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.16;

/// Elements that have played their enter animation. Once revealed, always revealed.
#[derive(Debug, Clone)]
pub struct RevealSet {
    /// Minimum ratio that counts as "entered".
    threshold: f64,
    /// Revealed so far.
    revealed: BTreeSet<SectionId>,
}

impl RevealSet {
    /// Empty set with the given threshold (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_REVEAL_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            revealed: BTreeSet::new(),
        }
    }

    /// What: Reveal everything at once (reduced motion).
    ///
    /// Output:
    /// - Ids that were not revealed before, in registry order
    pub fn reveal_all(&mut self, registry: &SectionRegistry) -> Vec<SectionId> {
        registry
            .iter()
            .filter(|id| self.revealed.insert((*id).clone()))
            .cloned()
            .collect()
    }

    /// What: Record a batch of intersection signals.
    ///
    /// Output:
    /// - Ids revealed by this batch, in arrival order
    pub fn apply(&mut self, entries: &[IntersectionEntry]) -> Vec<SectionId> {
        let mut newly = Vec::new();
        for entry in entries {
            if entry.is_intersecting
                && entry.ratio >= self.threshold
                && self.revealed.insert(entry.section.clone())
            {
                tracing::trace!(section = %entry.section, "revealed");
                newly.push(entry.section.clone());
            }
        }
        newly
    }

    /// Whether `id` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, id: &SectionId) -> bool {
        self.revealed.contains(id)
    }

    /// Number of revealed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    /// True when nothing has been revealed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

impl Default for RevealSet {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}
