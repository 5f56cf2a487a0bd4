//! The narrow seam between the tracker and whatever reports viewport intersections.

use tokio::sync::mpsc;

use crate::scroll::registry::SectionId;

/// One section's intersection state, as handed to the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    /// Section the signal is about.
    pub section: SectionId,
    /// Visible fraction of the section inside the (margin-adjusted) viewport, `0.0..=1.0`.
    pub ratio: f64,
    /// Whether the section overlaps the viewport at all.
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Convenience constructor.
    pub fn new(section: impl Into<SectionId>, ratio: f64, is_intersecting: bool) -> Self {
        Self {
            section: section.into(),
            ratio,
            is_intersecting,
        }
    }
}

/// A ratio change for one observed section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioUpdate {
    /// Source-wide sequence number; lower values arrived first.
    pub seq: u64,
    /// Visible fraction of the section.
    pub ratio: f64,
    /// Whether the section overlaps the viewport at all.
    pub is_intersecting: bool,
}

/// Stream of ratio updates for one section.
pub type RatioStream = mpsc::UnboundedReceiver<RatioUpdate>;

/// Anything that can report how much of a section is on screen.
///
/// Implementations push updates only when something changed. After [`disconnect`]
/// every stream handed out so far must end.
///
/// [`disconnect`]: ViewportObserver::disconnect
pub trait ViewportObserver {
    /// Start observing `section` and return its update stream.
    fn observe(&mut self, section: &SectionId) -> RatioStream;

    /// Stop observing everything and close all streams.
    fn disconnect(&mut self);
}
