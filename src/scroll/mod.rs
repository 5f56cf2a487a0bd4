//! Scroll-driven page state.
//!
//! # Overview
//!
//! - [`ActivationTracker`]: picks the most visible registered section from intersection
//!   signals; drives navigation highlighting.
//! - [`ViewportObserver`]: the seam to whatever measures intersections. Each observed
//!   section gets its own stream of ratio updates. [`SimulatedViewport`] implements it
//!   from page geometry, so everything here runs without a rendering environment.
//! - [`ScrollSession`]: mounts a [`SectionRegistry`] on an observer and processes one
//!   event-loop turn at a time. Teardown disconnects the observer and cancels timers.
//! - [`FlipSequencer`]: roadmap card flip with a midpoint swap, driven by transitions.
//! - [`RevealSet`]: one-shot enter animations.
//! - [`NavVisibility`]: hide the navigation bar while scrolling down.
//!
//! Everything is single-owner and event driven. The only background work is the two
//! flip timers, which run as tokio tasks gated so that none of them touches state after
//! teardown.

mod flip;
mod nav;
mod observer;
mod registry;
mod reveal;
mod session;
mod tracker;
mod viewport;

pub use flip::{DEFAULT_FLIP_DURATION, FlipCard, FlipFace, FlipSequencer, FlipSink};
pub use nav::{
    DEFAULT_HIDE_OFFSET, DEFAULT_MIN_DELTA, HOME_NAV_LINKS, NavLink, NavVisibility, highlighted_link,
};
pub use observer::{IntersectionEntry, RatioStream, RatioUpdate, ViewportObserver};
pub use registry::{HOME_SECTIONS, ROADMAP_PHASES, SectionId, SectionRegistry};
pub use reveal::{DEFAULT_REVEAL_THRESHOLD, RevealSet};
pub use session::{ScrollSession, TurnReport};
pub use tracker::{ActivationTracker, Transition};
pub use viewport::{RootMargin, SectionBounds, SimulatedViewport, intersection};
