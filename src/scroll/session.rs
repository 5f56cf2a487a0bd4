//! A mounted page: observer streams, tracker, reveals and the flip card, with teardown.

use std::collections::BTreeMap;

use tokio::sync::watch;

use crate::scroll::flip::FlipSequencer;
use crate::scroll::observer::{IntersectionEntry, RatioStream, RatioUpdate, ViewportObserver};
use crate::scroll::registry::{SectionId, SectionRegistry};
use crate::scroll::reveal::RevealSet;
use crate::scroll::tracker::{ActivationTracker, Transition};

/// What one event-loop turn changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnReport {
    /// Active section change, if any.
    pub transition: Option<Transition>,
    /// Elements that played their enter animation this turn.
    pub revealed: Vec<SectionId>,
    /// Number of signals processed.
    pub signals: usize,
}

impl TurnReport {
    /// True when the turn changed nothing visible.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.transition.is_none() && self.revealed.is_empty()
    }
}

/// Scroll tracking for one mounted page.
pub struct ScrollSession<O: ViewportObserver> {
    /// Source of ratio updates.
    observer: O,
    /// Active-section state machine.
    tracker: ActivationTracker,
    /// One-shot reveals.
    reveal: RevealSet,
    /// Open streams, in registry order.
    streams: Vec<(SectionId, RatioStream)>,
    /// Signals already taken off a stream but not yet processed.
    held: Vec<(u64, IntersectionEntry)>,
    /// Last reported state of every section that has reported.
    latest: BTreeMap<SectionId, RatioUpdate>,
    /// Roadmap flip card, driven by transitions.
    flip: Option<FlipSequencer>,
    /// Publishes the active section for navigation highlighting.
    active_tx: watch::Sender<Option<SectionId>>,
    /// False after teardown.
    mounted: bool,
}

impl<O: ViewportObserver> std::fmt::Debug for ScrollSession<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSession")
            .field("active", &self.tracker.active())
            .field("streams", &self.streams.len())
            .field("revealed", &self.reveal.len())
            .field("flip", &self.flip)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl<O: ViewportObserver> ScrollSession<O> {
    /// What: Mount `registry` on `observer`.
    ///
    /// Details:
    /// - Every registered section is observed immediately, in registry order
    pub fn mount(registry: SectionRegistry, mut observer: O) -> Self {
        let streams = registry
            .iter()
            .map(|id| (id.clone(), observer.observe(id)))
            .collect();
        let (active_tx, _) = watch::channel(None);
        tracing::debug!(sections = registry.len(), "scroll session mounted");
        Self {
            observer,
            tracker: ActivationTracker::new(registry),
            reveal: RevealSet::default(),
            streams,
            held: Vec::new(),
            latest: BTreeMap::new(),
            flip: None,
            active_tx,
            mounted: true,
        }
    }

    /// Replace the reveal set (e.g. to change its threshold).
    #[must_use]
    pub fn with_reveal(mut self, reveal: RevealSet) -> Self {
        self.reveal = reveal;
        self
    }

    /// Reduced motion: every section counts as revealed from the start.
    #[must_use]
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        if reduced_motion {
            self.reveal.reveal_all(self.tracker.registry());
        }
        self
    }

    /// Drive a flip card from transitions; the card index is the registry index.
    #[must_use]
    pub fn with_flip(mut self, flip: FlipSequencer) -> Self {
        self.flip = Some(flip);
        self
    }

    /// Currently active section.
    #[must_use]
    pub const fn active(&self) -> Option<&SectionId> {
        self.tracker.active()
    }

    /// Watch the active section (navigation highlighting).
    #[must_use]
    pub fn subscribe_active(&self) -> watch::Receiver<Option<SectionId>> {
        self.active_tx.subscribe()
    }

    /// Reveal state.
    #[must_use]
    pub const fn reveal(&self) -> &RevealSet {
        &self.reveal
    }

    /// The observer, e.g. to scroll a simulated viewport.
    pub const fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Whether the session is still mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// What: Run one event-loop turn over everything already delivered.
    ///
    /// Output:
    /// - `TurnReport` of what changed; empty after teardown
    ///
    /// Details:
    /// - Signals from all streams are merged in arrival (`seq`) order and folded into the
    ///   last known state of each section
    /// - The tracker then sees every section that currently intersects, not only the ones
    ///   that reported this turn, ordered by when each last reported
    /// - Reveals only look at this turn's signals
    pub fn pump(&mut self) -> TurnReport {
        if !self.mounted {
            return TurnReport::default();
        }

        let mut batch = std::mem::take(&mut self.held);
        for (id, rx) in &mut self.streams {
            while let Ok(update) = rx.try_recv() {
                batch.push((update.seq, entry_for(id, update)));
            }
        }
        if batch.is_empty() {
            return TurnReport::default();
        }
        batch.sort_by_key(|(seq, _)| *seq);
        for (seq, entry) in &batch {
            self.latest.insert(
                entry.section.clone(),
                RatioUpdate {
                    seq: *seq,
                    ratio: entry.ratio,
                    is_intersecting: entry.is_intersecting,
                },
            );
        }
        let entries: Vec<IntersectionEntry> = batch.into_iter().map(|(_, e)| e).collect();

        let revealed = self.reveal.apply(&entries);
        let transition = self.tracker.apply(&self.intersecting_now());
        if let Some(t) = &transition {
            self.active_tx.send_replace(Some(t.to.clone()));
            if let Some(flip) = self.flip.as_mut() {
                flip.flip_to(t.index);
            }
        }

        TurnReport {
            transition,
            revealed,
            signals: entries.len(),
        }
    }

    /// Sections whose last report was intersecting, oldest report first.
    fn intersecting_now(&self) -> Vec<IntersectionEntry> {
        let mut current: Vec<(u64, IntersectionEntry)> = self
            .latest
            .iter()
            .filter(|(_, update)| update.is_intersecting)
            .map(|(id, update)| (update.seq, entry_for(id, *update)))
            .collect();
        current.sort_by_key(|(seq, _)| *seq);
        current.into_iter().map(|(_, e)| e).collect()
    }

    /// What: Wait for the next signal, then run a turn.
    ///
    /// Output:
    /// - `Some(report)` per turn; `None` once torn down or every stream has closed
    pub async fn next_turn(&mut self) -> Option<TurnReport> {
        loop {
            if !self.mounted || self.streams.is_empty() {
                return None;
            }
            let (first, idx) = {
                let pending = self.streams.iter_mut().map(|(_, rx)| Box::pin(rx.recv()));
                let (first, idx, _rest) = futures::future::select_all(pending).await;
                (first, idx)
            };
            match first {
                Some(update) => {
                    let entry = entry_for(&self.streams[idx].0, update);
                    self.held.push((update.seq, entry));
                    return Some(self.pump());
                }
                None => {
                    let (id, _) = self.streams.remove(idx);
                    tracing::debug!(section = %id, "ratio stream ended");
                }
            }
        }
    }

    /// What: Unmount: disconnect the observer, drop streams, cancel flip timers.
    ///
    /// Details:
    /// - After this returns no state changes: `pump` reports nothing, the active-section
    ///   channel stays silent and no flip timer reaches its sink
    /// - Idempotent; also runs on drop
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        if let Some(flip) = self.flip.as_mut() {
            flip.cancel();
        }
        self.observer.disconnect();
        self.streams.clear();
        self.held.clear();
        self.latest.clear();
        tracing::debug!("scroll session torn down");
    }
}

impl<O: ViewportObserver> Drop for ScrollSession<O> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Build the tracker-facing entry for a stream update.
fn entry_for(id: &SectionId, update: RatioUpdate) -> IntersectionEntry {
    IntersectionEntry {
        section: id.clone(),
        ratio: update.ratio,
        is_intersecting: update.is_intersecting,
    }
}
