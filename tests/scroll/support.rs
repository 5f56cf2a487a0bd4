//! Test doubles: a scripted viewport observer and a recording flip sink.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use comondo::scroll::{FlipSink, RatioStream, RatioUpdate, SectionId, ViewportObserver};
use tokio::sync::mpsc;

/// Observer whose signals are pushed by the test. Clones share state.
#[derive(Clone, Default)]
pub struct ScriptedObserver {
    senders: Arc<Mutex<Vec<(SectionId, mpsc::UnboundedSender<RatioUpdate>)>>>,
    seq: Arc<AtomicU64>,
    disconnects: Arc<AtomicUsize>,
}

impl ScriptedObserver {
    /// Report a state for `section`; returns false when it is not observed.
    pub fn emit(&self, section: &str, ratio: f64, is_intersecting: bool) -> bool {
        let senders = self.senders.lock().expect("senders lock");
        let Some((_, tx)) = senders.iter().find(|(id, _)| id.as_str() == section) else {
            return false;
        };
        let update = RatioUpdate {
            seq: self.seq.fetch_add(1, Ordering::SeqCst),
            ratio,
            is_intersecting,
        };
        tx.send(update).is_ok()
    }

    pub fn observed(&self) -> usize {
        self.senders.lock().expect("senders lock").len()
    }

    pub fn disconnects(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }
}

impl ViewportObserver for ScriptedObserver {
    fn observe(&mut self, section: &SectionId) -> RatioStream {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders
            .lock()
            .expect("senders lock")
            .push((section.clone(), tx));
        rx
    }

    fn disconnect(&mut self) {
        self.senders.lock().expect("senders lock").clear();
        self.disconnects.fetch_add(1, Ordering::SeqCst);
    }
}

/// Flip sink that records every call.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("events lock").clone()
    }

    fn record(&self, event: String) {
        self.events.lock().expect("events lock").push(event);
    }
}

impl FlipSink for RecordingSink {
    fn set_pending(&self, index: usize) {
        self.record(format!("pending {index}"));
    }

    fn show_card(&self, index: usize) {
        self.record(format!("show {index}"));
    }

    fn set_flipping(&self, flipping: bool) {
        self.record(format!("flipping {flipping}"));
    }
}
