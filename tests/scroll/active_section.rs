//! Active-section selection through a mounted session.

use comondo::scroll::{ScrollSession, SectionId, SectionRegistry};

use crate::support::ScriptedObserver;

fn home_session() -> (ScrollSession<ScriptedObserver>, ScriptedObserver) {
    let observer = ScriptedObserver::default();
    let session = ScrollSession::mount(SectionRegistry::home(), observer.clone());
    (session, observer)
}

#[test]
/// What: Mounting observes every registered section.
fn mount_observes_all_sections() {
    let (session, observer) = home_session();
    assert!(session.is_mounted());
    assert_eq!(observer.observed(), 7);
    assert_eq!(session.active(), None);
}

#[test]
/// What: Highest ratio among intersecting sections wins.
fn highest_ratio_wins() {
    let (mut session, observer) = home_session();
    assert!(observer.emit("about", 0.8, true));
    assert!(observer.emit("mission", 0.3, true));

    let report = session.pump();
    let transition = report.transition.expect("a section became active");
    assert_eq!(transition.to.as_str(), "about");
    assert_eq!(transition.index, 1);
    assert_eq!(transition.from, None);
    assert_eq!(report.signals, 2);
    assert_eq!(session.active().map(SectionId::as_str), Some("about"));
}

#[test]
/// What: A turn with nothing intersecting keeps the previous active section.
fn nothing_intersecting_holds_state() {
    let (mut session, observer) = home_session();
    observer.emit("impact", 0.6, true);
    session.pump();

    observer.emit("impact", 0.0, false);
    let report = session.pump();
    assert!(report.transition.is_none());
    assert_eq!(session.active().map(SectionId::as_str), Some("impact"));
}

#[test]
/// What: Equal ratios resolve to the first reported section.
fn tie_goes_to_first_reported() {
    let (mut session, observer) = home_session();
    observer.emit("products", 0.5, true);
    observer.emit("advantage", 0.5, true);
    let report = session.pump();
    assert_eq!(
        report.transition.map(|t| t.to),
        Some(SectionId::new("products"))
    );
}

#[test]
/// What: Re-reporting the active section produces no transition.
fn same_winner_is_not_a_transition() {
    let (mut session, observer) = home_session();
    observer.emit("hero", 0.4, true);
    assert!(session.pump().transition.is_some());
    observer.emit("hero", 0.9, true);
    let report = session.pump();
    assert!(report.transition.is_none());
    assert_eq!(report.signals, 1);
}

#[test]
/// What: Subscribers see each change of the active section.
fn subscribers_follow_changes() {
    let (mut session, observer) = home_session();
    let mut rx = session.subscribe_active();
    assert_eq!(*rx.borrow_and_update(), None);

    observer.emit("contact", 0.7, true);
    session.pump();
    assert!(rx.has_changed().expect("sender alive"));
    assert_eq!(
        rx.borrow_and_update().as_ref().map(SectionId::as_str),
        Some("contact")
    );
}

#[tokio::test]
/// What: `next_turn` waits for a signal and reports the resulting transition.
async fn next_turn_wakes_on_signal() {
    let (mut session, observer) = home_session();
    let emitter = observer.clone();
    tokio::spawn(async move {
        tokio::task::yield_now().await;
        emitter.emit("mission", 0.5, true);
    });
    let report = session.next_turn().await.expect("session still mounted");
    assert_eq!(
        report.transition.map(|t| t.to),
        Some(SectionId::new("mission"))
    );
}

#[tokio::test]
/// What: After teardown the observer is disconnected once and the session reports nothing.
async fn teardown_disconnects_and_silences() {
    let (mut session, observer) = home_session();
    observer.emit("about", 0.5, true);
    session.teardown();
    session.teardown();

    assert_eq!(observer.disconnects(), 1);
    assert!(!session.is_mounted());
    assert!(!observer.emit("about", 0.9, true));
    assert!(session.pump().is_quiet());
    assert!(session.next_turn().await.is_none());
}
