//! Roadmap flip card driven by the session, including teardown mid-flip.

use std::sync::Arc;
use std::time::Duration;

use comondo::scroll::{FlipCard, FlipSequencer, FlipSink, ScrollSession, SectionRegistry};

use crate::support::{RecordingSink, ScriptedObserver};

const DURATION: Duration = Duration::from_millis(700);

fn roadmap_session(sink: Arc<dyn FlipSink>) -> (ScrollSession<ScriptedObserver>, ScriptedObserver) {
    let observer = ScriptedObserver::default();
    let session = ScrollSession::mount(SectionRegistry::roadmap(), observer.clone())
        .with_flip(FlipSequencer::new(sink, DURATION));
    (session, observer)
}

#[tokio::test(start_paused = true)]
/// What: A transition flips the card: pending at once, shown at the midpoint, settled at the end.
async fn transition_runs_full_flip() {
    let card = Arc::new(FlipCard::new());
    let (mut session, observer) = roadmap_session(card.clone());

    observer.emit("phase-2", 0.9, true);
    session.pump();
    let face = card.snapshot();
    assert_eq!((face.pending, face.shown, face.flipping), (1, 0, true));

    tokio::time::sleep(DURATION / 2 + Duration::from_millis(1)).await;
    let face = card.snapshot();
    assert_eq!((face.shown, face.flipping), (1, true));

    tokio::time::sleep(DURATION / 2).await;
    let face = card.snapshot();
    assert_eq!((face.pending, face.shown, face.flipping), (1, 1, false));
}

#[tokio::test(start_paused = true)]
/// What: Tearing down during a pending flip means no sink call ever happens afterwards.
async fn teardown_during_flip_stops_sink_calls() {
    let sink = Arc::new(RecordingSink::default());
    let (mut session, observer) = roadmap_session(sink.clone());

    observer.emit("phase-3", 0.8, true);
    session.pump();
    assert_eq!(sink.events(), vec!["pending 2", "flipping true"]);

    tokio::time::sleep(Duration::from_millis(100)).await;
    session.teardown();
    tokio::time::sleep(DURATION * 3).await;

    assert_eq!(sink.events(), vec!["pending 2", "flipping true"]);
}

#[tokio::test(start_paused = true)]
/// What: Dropping the session cancels its timers as well.
async fn drop_during_flip_stops_sink_calls() {
    let sink = Arc::new(RecordingSink::default());
    let (mut session, observer) = roadmap_session(sink.clone());
    observer.emit("phase-2", 0.8, true);
    session.pump();
    drop(session);

    tokio::time::sleep(DURATION * 2).await;
    assert_eq!(sink.events().len(), 2);
}

#[tokio::test(start_paused = true)]
/// What: A second transition before the midpoint replaces the first flip entirely.
async fn rapid_transitions_show_only_latest_card() {
    let sink = Arc::new(RecordingSink::default());
    let (mut session, observer) = roadmap_session(sink.clone());

    observer.emit("phase-2", 0.9, true);
    session.pump();
    tokio::time::sleep(Duration::from_millis(100)).await;
    observer.emit("phase-2", 0.1, true);
    observer.emit("phase-3", 0.9, true);
    session.pump();

    tokio::time::sleep(DURATION * 2).await;
    let events = sink.events();
    assert!(!events.contains(&"show 1".to_string()), "{events:?}");
    assert_eq!(events.last().map(String::as_str), Some("flipping false"));
    assert!(events.contains(&"show 2".to_string()));
}

#[tokio::test(start_paused = true)]
/// What: Reduced motion swaps the card at once with no timers.
async fn reduced_motion_swaps_immediately() {
    let sink = Arc::new(RecordingSink::default());
    let observer = ScriptedObserver::default();
    let mut session = ScrollSession::mount(SectionRegistry::roadmap(), observer.clone())
        .with_flip(FlipSequencer::new(sink.clone(), DURATION).with_reduced_motion(true));

    observer.emit("phase-1", 0.5, true);
    session.pump();
    assert_eq!(sink.events(), vec!["pending 0", "show 0", "flipping false"]);
    tokio::time::sleep(DURATION * 2).await;
    assert_eq!(sink.events().len(), 3);
}
