//! Timed flip between roadmap cards.
//!
//! A transition to card `i` marks `i` as pending and starts flipping. Halfway through
//! the animation the displayed card switches to `i`; at the end the flipping flag
//! clears. A newer flip supersedes the timers of an older one.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Flip duration used by the roadmap page.
pub const DEFAULT_FLIP_DURATION: Duration = Duration::from_millis(700);

/// Receives the state changes of a flip sequence.
pub trait FlipSink: Send + Sync {
    /// The card the flip is heading to.
    fn set_pending(&self, index: usize);
    /// The card now displayed.
    fn show_card(&self, index: usize);
    /// Whether the flip animation is running.
    fn set_flipping(&self, flipping: bool);
}

/// Visible state of the flip card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlipFace {
    /// Card currently displayed.
    pub shown: usize,
    /// Card being flipped to.
    pub pending: usize,
    /// Animation in progress.
    pub flipping: bool,
}

/// Stock [`FlipSink`] holding a [`FlipFace`].
#[derive(Debug, Default)]
pub struct FlipCard {
    /// Current face, shared with timer tasks.
    face: Mutex<FlipFace>,
}

impl FlipCard {
    /// Card showing index 0, at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current face.
    #[must_use]
    pub fn snapshot(&self) -> FlipFace {
        *self.face.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `f` to the face under the lock.
    fn update(&self, f: impl FnOnce(&mut FlipFace)) {
        f(&mut self.face.lock().unwrap_or_else(PoisonError::into_inner));
    }
}

impl FlipSink for FlipCard {
    fn set_pending(&self, index: usize) {
        self.update(|face| face.pending = index);
    }

    fn show_card(&self, index: usize) {
        self.update(|face| face.shown = index);
    }

    fn set_flipping(&self, flipping: bool) {
        self.update(|face| face.flipping = flipping);
    }
}

/// Generation gate shared with timer tasks.
///
/// `Some(n)`: timers of generation `n` may fire. `None`: torn down, nothing may fire.
type Gate = Arc<Mutex<Option<u64>>>;

/// Drives a [`FlipSink`] through timed flips.
pub struct FlipSequencer {
    /// Target of every state change.
    sink: Arc<dyn FlipSink>,
    /// Full animation length.
    duration: Duration,
    /// Skip the animation and show the card at once.
    reduced_motion: bool,
    /// Generation gate; timer tasks hold the lock while they touch the sink.
    gate: Gate,
    /// Generation of the latest flip.
    generation: u64,
    /// Midpoint timer.
    half: Option<JoinHandle<()>>,
    /// End timer.
    full: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for FlipSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlipSequencer")
            .field("duration", &self.duration)
            .field("reduced_motion", &self.reduced_motion)
            .field("generation", &self.generation)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

impl FlipSequencer {
    /// Sequencer with the given animation length.
    pub fn new(sink: Arc<dyn FlipSink>, duration: Duration) -> Self {
        Self {
            sink,
            duration,
            reduced_motion: false,
            gate: Arc::new(Mutex::new(Some(0))),
            generation: 0,
            half: None,
            full: None,
        }
    }

    /// Toggle reduced motion.
    #[must_use]
    pub const fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Whether a timer of the latest flip has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        [&self.half, &self.full]
            .into_iter()
            .flatten()
            .any(|handle| !handle.is_finished())
    }

    /// Whether [`Self::cancel`] has run.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// What: Start a flip to card `index`.
    ///
    /// Details:
    /// - Reduced motion: pending and shown switch immediately and flipping stays false
    /// - Otherwise spawns the midpoint and end timers on the current tokio runtime;
    ///   timers of an earlier flip are cancelled first
    /// - No-op after [`Self::cancel`]
    pub fn flip_to(&mut self, index: usize) {
        let generation = {
            let mut gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
            let Some(current) = gate.as_mut() else {
                tracing::debug!(index, "flip requested after teardown; ignored");
                return;
            };
            *current += 1;
            *current
        };
        self.generation = generation;
        self.abort_timers();

        self.sink.set_pending(index);
        if self.reduced_motion {
            self.sink.show_card(index);
            self.sink.set_flipping(false);
            return;
        }
        self.sink.set_flipping(true);

        self.half = Some(self.spawn_timer(self.duration / 2, move |sink| sink.show_card(index)));
        self.full = Some(self.spawn_timer(self.duration, |sink| sink.set_flipping(false)));
        tracing::debug!(index, generation, "flip started");
    }

    /// What: Cancel pending timers and refuse any further flips.
    ///
    /// Details:
    /// - Waits for a timer that is touching the sink right now, so once this returns
    ///   no sink call can happen
    /// - Idempotent
    pub fn cancel(&mut self) {
        let was_live = self
            .gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some();
        self.abort_timers();
        if was_live {
            tracing::debug!("flip sequencer cancelled");
        }
    }

    /// Abort both timers, if any.
    fn abort_timers(&mut self) {
        for handle in [self.half.take(), self.full.take()].into_iter().flatten() {
            handle.abort();
        }
    }

    /// Spawn a task that runs `action` after `delay` if its generation is still current.
    fn spawn_timer<F>(&self, delay: Duration, action: F) -> JoinHandle<()>
    where
        F: FnOnce(&dyn FlipSink) + Send + 'static,
    {
        let gate = Arc::clone(&self.gate);
        let sink = Arc::clone(&self.sink);
        let generation = self.generation;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let guard = gate.lock().unwrap_or_else(PoisonError::into_inner);
            if *guard == Some(generation) {
                action(sink.as_ref());
            }
        })
    }
}

impl Drop for FlipSequencer {
    fn drop(&mut self) {
        self.cancel();
    }
}
