//! "Most visible section" state machine.

use crate::scroll::observer::IntersectionEntry;
use crate::scroll::registry::{SectionId, SectionRegistry};

/// A change of active section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Previously active section (`None` before the first activation).
    pub from: Option<SectionId>,
    /// Newly active section.
    pub to: SectionId,
    /// Registry position of `to`.
    pub index: usize,
}

/// Tracks which registered section is currently the most visible.
#[derive(Debug, Clone)]
pub struct ActivationTracker {
    /// Sections that may become active.
    registry: SectionRegistry,
    /// Current state; `None` until something has intersected.
    active: Option<SectionId>,
}

impl ActivationTracker {
    /// Tracker in the initial "none" state.
    #[must_use]
    pub const fn new(registry: SectionRegistry) -> Self {
        Self {
            registry,
            active: None,
        }
    }

    /// Currently active section.
    #[must_use]
    pub const fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// Registry position of the active section.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active.as_ref().and_then(|id| self.registry.index_of(id))
    }

    /// Observed sections.
    #[must_use]
    pub const fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// What: Apply one batch of intersection signals.
    ///
    /// Inputs:
    /// - `entries`: Signals in arrival order
    ///
    /// Output:
    /// - `Some(Transition)` when the winner differs from the current state, else `None`
    ///
    /// Details:
    /// - Only intersecting entries for registered sections compete
    /// - Highest ratio wins; the stable sort keeps arrival order among equal ratios,
    ///   so the first reported of a tie wins
    /// - NaN ratios rank below every real ratio
    /// - With nothing intersecting the state holds its last value
    pub fn apply(&mut self, entries: &[IntersectionEntry]) -> Option<Transition> {
        let mut visible: Vec<&IntersectionEntry> = entries
            .iter()
            .filter(|entry| entry.is_intersecting)
            .filter(|entry| {
                let known = self.registry.contains(&entry.section);
                if !known {
                    tracing::debug!(section = %entry.section, "signal for unregistered section ignored");
                }
                known
            })
            .collect();
        visible.sort_by(|a, b| rank(b.ratio).total_cmp(&rank(a.ratio)));

        let winner = visible.first()?;
        if self.active.as_ref() == Some(&winner.section) {
            return None;
        }

        let index = self.registry.index_of(&winner.section)?;
        let from = self.active.replace(winner.section.clone());
        tracing::debug!(
            from = from.as_ref().map_or("none", SectionId::as_str),
            to = %winner.section,
            ratio = winner.ratio,
            "active section changed"
        );
        Some(Transition {
            from,
            to: winner.section.clone(),
            index,
        })
    }
}

/// Sort key for a ratio; NaN sinks to the bottom.
fn rank(ratio: f64) -> f64 {
    if ratio.is_nan() {
        f64::NEG_INFINITY
    } else {
        ratio
    }
}
