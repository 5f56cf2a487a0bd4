//! The simulated viewport end to end: layout, margin, reveal and tracking.

use comondo::scroll::{
    RevealSet, RootMargin, ScrollSession, SectionId, SectionRegistry, SimulatedViewport,
};

const HOME: [(&str, f64); 7] = [
    ("hero", 900.0),
    ("about", 700.0),
    ("mission", 600.0),
    ("impact", 800.0),
    ("advantage", 700.0),
    ("products", 900.0),
    ("contact", 500.0),
];

fn mount_home() -> ScrollSession<SimulatedViewport> {
    let viewport = SimulatedViewport::stacked(900.0, RootMargin::default(), HOME);
    ScrollSession::mount(SectionRegistry::home(), viewport)
}

fn active(session: &ScrollSession<SimulatedViewport>) -> Option<&str> {
    session.active().map(SectionId::as_str)
}

#[test]
/// What: The middle band of the viewport decides the active section while scrolling.
fn scrolling_moves_active_section() {
    let mut session = mount_home();
    session.pump();
    assert_eq!(active(&session), Some("hero"));

    session.observer_mut().scroll_to(1000.0);
    let report = session.pump();
    assert_eq!(active(&session), Some("about"));
    assert_eq!(
        report.transition.and_then(|t| t.from),
        Some(SectionId::new("hero"))
    );

    session.observer_mut().scroll_to(2000.0);
    session.pump();
    assert_eq!(active(&session), Some("impact"));

    session.observer_mut().scroll_to(0.0);
    session.pump();
    assert_eq!(active(&session), Some("hero"));
}

#[test]
/// What: Sections reveal once when they cross the threshold and stay revealed.
fn reveal_is_one_shot() {
    let mut session = mount_home().with_reveal(RevealSet::new(0.16));
    let first = session.pump();
    assert_eq!(first.revealed, vec![SectionId::new("hero")]);

    session.observer_mut().scroll_to(1000.0);
    let second = session.pump();
    assert_eq!(second.revealed, vec![SectionId::new("about")]);

    session.observer_mut().scroll_to(0.0);
    let back = session.pump();
    assert!(back.revealed.is_empty());
    assert!(session.reveal().is_revealed(&SectionId::new("about")));
}

#[test]
/// What: Reduced motion reveals every section up front.
fn reduced_motion_reveals_everything() {
    let session = mount_home().with_reduced_motion(true);
    assert_eq!(session.reveal().len(), HOME.len());
}

#[test]
/// What: Scrolling without any state change yields a quiet turn.
fn unchanged_scroll_is_quiet() {
    let mut session = mount_home();
    session.pump();
    session.observer_mut().scroll_to(0.0);
    assert!(session.pump().is_quiet());
}
