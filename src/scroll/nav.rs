//! Navigation bar behaviour driven by scrolling.

use crate::scroll::registry::SectionId;

/// Default offset (px) below which the bar is always shown.
pub const DEFAULT_HIDE_OFFSET: f64 = 80.0;
/// Default scroll distance (px) ignored as jitter.
pub const DEFAULT_MIN_DELTA: f64 = 4.0;

/// Hide-on-scroll-down, show-on-scroll-up state of the navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NavVisibility {
    /// Offset below which the bar never hides.
    hide_offset: f64,
    /// Movements smaller than this are ignored.
    min_delta: f64,
    /// Last offset that moved the state machine.
    last_offset: f64,
    /// Current state.
    hidden: bool,
}

impl NavVisibility {
    /// Visible bar at the page top.
    #[must_use]
    pub const fn new(hide_offset: f64, min_delta: f64) -> Self {
        Self {
            hide_offset,
            min_delta,
            last_offset: 0.0,
            hidden: false,
        }
    }

    /// Whether the bar is hidden.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// What: Feed a new scroll offset.
    ///
    /// Output:
    /// - `true` when visibility changed
    ///
    /// Details:
    /// - At or above the hide offset the bar is always shown
    /// - Otherwise scrolling down hides and scrolling up shows, once the movement
    ///   exceeds the minimum delta
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let before = self.hidden;
        if offset <= self.hide_offset {
            self.hidden = false;
            self.last_offset = offset;
        } else {
            let delta = offset - self.last_offset;
            if delta.abs() > self.min_delta {
                self.hidden = delta > 0.0;
                self.last_offset = offset;
            }
        }
        before != self.hidden
    }
}

impl Default for NavVisibility {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_OFFSET, DEFAULT_MIN_DELTA)
    }
}

/// An in-page navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Locale key of the label (e.g. `nav.about`).
    pub label_key: &'static str,
    /// Section the link scrolls to.
    pub anchor: &'static str,
}

/// Links shown in the home page navigation bar.
pub const HOME_NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label_key: "nav.about",
        anchor: "about",
    },
    NavLink {
        label_key: "nav.products",
        anchor: "products",
    },
    NavLink {
        label_key: "nav.impact",
        anchor: "impact",
    },
];

/// The link to highlight for the active section, if any link points at it.
#[must_use]
pub fn highlighted_link<'a>(links: &'a [NavLink], active: Option<&SectionId>) -> Option<&'a NavLink> {
    let active = active?;
    links.iter().find(|link| link.anchor == active.as_str())
}
