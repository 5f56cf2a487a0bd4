//! Geometry-backed viewport observer.
//!
//! Stands in for the browser's intersection facility: sections are vertical bands on a
//! page, the viewport is a window scrolled over it, and the root margin grows or shrinks
//! that window the way CSS `rootMargin` percentages do.

use std::collections::BTreeMap;

use tokio::sync::mpsc;

use crate::scroll::observer::{RatioStream, RatioUpdate, ViewportObserver};
use crate::scroll::registry::SectionId;

/// Vertical root margin in percent of the viewport height. Negative values shrink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    /// Margin applied to the top edge.
    pub top_pct: f64,
    /// Margin applied to the bottom edge.
    pub bottom_pct: f64,
}

impl RootMargin {
    /// No margin: the raw viewport.
    pub const NONE: Self = Self {
        top_pct: 0.0,
        bottom_pct: 0.0,
    };

    /// Margin equivalent to CSS `rootMargin: "{top}% 0px {bottom}% 0px"`.
    #[must_use]
    pub const fn new(top_pct: f64, bottom_pct: f64) -> Self {
        Self {
            top_pct,
            bottom_pct,
        }
    }
}

impl Default for RootMargin {
    /// The center band: 40% trimmed from the top and from the bottom.
    fn default() -> Self {
        Self::new(-40.0, -40.0)
    }
}

/// A section's position on the page, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    /// Distance from the page top.
    pub top: f64,
    /// Section height.
    pub height: f64,
}

/// What: Fraction of a section inside the margin-adjusted viewport.
///
/// Inputs:
/// - `bounds`: Section position
/// - `scroll_y`: Page offset of the viewport top
/// - `viewport_height`: Height of the viewport
/// - `margin`: Root margin
///
/// Output:
/// - `(ratio, is_intersecting)`; a section touching the root edge intersects with ratio 0
#[must_use]
pub fn intersection(
    bounds: SectionBounds,
    scroll_y: f64,
    viewport_height: f64,
    margin: RootMargin,
) -> (f64, bool) {
    let root_top = scroll_y - viewport_height * margin.top_pct / 100.0;
    let root_bottom = scroll_y + viewport_height + viewport_height * margin.bottom_pct / 100.0;
    if root_bottom <= root_top || bounds.height <= 0.0 {
        return (0.0, false);
    }

    let overlap_top = bounds.top.max(root_top);
    let overlap_bottom = (bounds.top + bounds.height).min(root_bottom);
    let overlap = overlap_bottom - overlap_top;
    if overlap < 0.0 {
        return (0.0, false);
    }
    ((overlap / bounds.height).clamp(0.0, 1.0), true)
}

/// Observed section state inside the simulated viewport.
#[derive(Debug)]
struct Observed {
    /// Page geometry.
    bounds: SectionBounds,
    /// Last reported state, `None` before the first report.
    last: Option<(f64, bool)>,
    /// Open stream.
    tx: mpsc::UnboundedSender<RatioUpdate>,
}

/// Simulated page with a scrollable viewport.
#[derive(Debug)]
pub struct SimulatedViewport {
    /// Viewport height in px.
    height: f64,
    /// Root margin applied to every observation.
    margin: RootMargin,
    /// Page layout: section id -> bounds.
    layout: BTreeMap<SectionId, SectionBounds>,
    /// Sections currently observed.
    observed: Vec<(SectionId, Observed)>,
    /// Current scroll offset.
    scroll_y: f64,
    /// Next sequence number.
    next_seq: u64,
}

impl SimulatedViewport {
    /// What: Create a viewport over a page layout.
    ///
    /// Inputs:
    /// - `height`: Viewport height in px
    /// - `margin`: Root margin
    /// - `layout`: Section bounds in page coordinates
    pub fn new<I>(height: f64, margin: RootMargin, layout: I) -> Self
    where
        I: IntoIterator<Item = (SectionId, SectionBounds)>,
    {
        Self {
            height,
            margin,
            layout: layout.into_iter().collect(),
            observed: Vec::new(),
            scroll_y: 0.0,
            next_seq: 0,
        }
    }

    /// What: Lay sections out back to back from the page top.
    ///
    /// Inputs:
    /// - `sections`: `(id, height)` pairs in document order
    pub fn stacked<I, T>(height: f64, margin: RootMargin, sections: I) -> Self
    where
        I: IntoIterator<Item = (T, f64)>,
        T: Into<SectionId>,
    {
        let mut top = 0.0;
        let layout: Vec<(SectionId, SectionBounds)> = sections
            .into_iter()
            .map(|(id, h)| {
                let bounds = SectionBounds { top, height: h };
                top += h;
                (id.into(), bounds)
            })
            .collect();
        Self::new(height, margin, layout)
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// What: Scroll to `offset` and report every observed section whose state changed.
    ///
    /// Output:
    /// - Number of updates emitted
    pub fn scroll_to(&mut self, offset: f64) -> usize {
        self.scroll_y = offset.max(0.0);
        self.emit_changes()
    }

    /// Send updates for observed sections whose `(ratio, intersecting)` changed.
    fn emit_changes(&mut self) -> usize {
        let mut emitted = 0;
        for (id, obs) in &mut self.observed {
            let now = intersection(obs.bounds, self.scroll_y, self.height, self.margin);
            if obs.last == Some(now) {
                continue;
            }
            // The very first report of a section that is off screen carries no news.
            if obs.last.is_none() && !now.1 {
                obs.last = Some(now);
                continue;
            }
            obs.last = Some(now);
            let update = RatioUpdate {
                seq: self.next_seq,
                ratio: now.0,
                is_intersecting: now.1,
            };
            self.next_seq += 1;
            if obs.tx.send(update).is_err() {
                tracing::debug!(section = %id, "ratio stream closed by receiver");
            } else {
                emitted += 1;
            }
        }
        emitted
    }
}

impl ViewportObserver for SimulatedViewport {
    fn observe(&mut self, section: &SectionId) -> RatioStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let Some(bounds) = self.layout.get(section).copied() else {
            tracing::debug!(section = %section, "no layout for observed section; stream stays silent");
            return rx;
        };
        self.observed.retain(|(id, _)| id != section);
        self.observed.push((
            section.clone(),
            Observed {
                bounds,
                last: None,
                tx,
            },
        ));
        // Like the browser, report the initial state right after observe().
        self.emit_changes();
        rx
    }

    fn disconnect(&mut self) {
        self.observed.clear();
    }
}
