//! `simulate`: replay scroll offsets against a laid-out page.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use comondo::i18n::{LanguageProvider, PreferenceStore};
use comondo::scroll::{
    FlipCard, FlipSequencer, FlipSink, HOME_NAV_LINKS, NavVisibility, RevealSet, RootMargin,
    ScrollSession, SectionId, SectionRegistry, SimulatedViewport, TurnReport, highlighted_link,
};
use comondo::settings::settings;

use crate::args::definition::Page;
use crate::args::i18n::user_provider;

/// Section heights (px) of the landing page, in document order.
const HOME_LAYOUT: [(&str, f64); 7] = [
    ("hero", 900.0),
    ("about", 700.0),
    ("mission", 600.0),
    ("impact", 800.0),
    ("advantage", 700.0),
    ("products", 900.0),
    ("contact", 500.0),
];

/// Roadmap phase heights (px).
const ROADMAP_LAYOUT: [(&str, f64); 3] = [("phase-1", 700.0), ("phase-2", 700.0), ("phase-3", 700.0)];

/// Minimum scroll movement that can toggle the navigation bar.
const NAV_MIN_DELTA: f64 = comondo::scroll::DEFAULT_MIN_DELTA;

/// Everything printed for one scroll position.
struct Frame<'a> {
    /// Scroll offset, or `None` for the initial mount.
    offset: Option<f64>,
    /// What the turn changed.
    report: &'a TurnReport,
    /// Active section after the turn.
    active: Option<&'a SectionId>,
    /// Navigation bar state.
    nav_hidden: bool,
    /// Label of the highlighted nav link or roadmap card.
    label: Option<String>,
}

/// One output line per frame.
fn format_frame(frame: &Frame<'_>) -> String {
    let at = frame
        .offset
        .map_or_else(|| "mount".to_string(), |o| format!("{o:.0}px"));
    let active = frame.active.map_or("-", SectionId::as_str);
    let mut line = format!("{at:>8}  active={active}");
    if let Some(t) = &frame.report.transition {
        let from = t.from.as_ref().map_or("-", SectionId::as_str);
        line.push_str(&format!(" (from {from})"));
    }
    if !frame.report.revealed.is_empty() {
        let revealed: Vec<&str> = frame.report.revealed.iter().map(SectionId::as_str).collect();
        line.push_str(&format!("  revealed=[{}]", revealed.join(", ")));
    }
    line.push_str(if frame.nav_hidden { "  nav=hidden" } else { "  nav=shown" });
    if let Some(label) = &frame.label {
        line.push_str(&format!("  \"{label}\""));
    }
    line
}

/// Label for the current state: nav link on the home page, shown card title on the roadmap.
fn frame_label<S: PreferenceStore>(
    provider: &LanguageProvider<S>,
    page: Page,
    active: Option<&SectionId>,
    card: &FlipCard,
) -> Option<String> {
    match page {
        Page::Home => highlighted_link(&HOME_NAV_LINKS, active).map(|link| provider.t(link.label_key)),
        Page::Roadmap => {
            active?;
            let face = card.snapshot();
            Some(provider.t(&format!("roadmap.phase_{}.title", face.shown + 1)))
        }
    }
}

/// What: Replay `offsets` against `page` and print one line per position.
///
/// Inputs:
/// - `page`: Layout to simulate.
/// - `viewport_height`: Viewport height in px.
/// - `offsets`: Scroll offsets in order.
///
/// Output:
/// - `0` on success, `1` for a non-positive viewport height.
///
/// Details:
/// - Root margin, reveal threshold, reduced motion, flip duration and nav offset come from settings.
/// - On the roadmap each transition waits for the flip to finish before printing.
pub async fn handle_simulate(page: Page, viewport_height: f64, offsets: &[f64]) -> ExitCode {
    if !viewport_height.is_finite() || viewport_height <= 0.0 {
        eprintln!("viewport height must be a positive number, got {viewport_height}");
        return ExitCode::FAILURE;
    }
    let prefs = settings();
    let provider = user_provider(&prefs);
    let margin = RootMargin::new(prefs.root_margin_top_pct, prefs.root_margin_bottom_pct);
    let (registry, layout) = match page {
        Page::Home => (SectionRegistry::home(), &HOME_LAYOUT[..]),
        Page::Roadmap => (SectionRegistry::roadmap(), &ROADMAP_LAYOUT[..]),
    };
    let viewport = SimulatedViewport::stacked(viewport_height, margin, layout.iter().copied());

    let card = Arc::new(FlipCard::new());
    let flip_duration = Duration::from_millis(prefs.flip_duration_ms);
    let mut session = ScrollSession::mount(registry, viewport)
        .with_reveal(RevealSet::new(prefs.reveal_threshold))
        .with_reduced_motion(prefs.reduced_motion);
    if page == Page::Roadmap {
        let sink: Arc<dyn FlipSink> = card.clone();
        session = session
            .with_flip(FlipSequencer::new(sink, flip_duration).with_reduced_motion(prefs.reduced_motion));
    }
    let mut nav = NavVisibility::new(prefs.nav_hide_offset, NAV_MIN_DELTA);
    tracing::info!(?page, offsets = offsets.len(), language = %provider.language(), "simulating scroll");

    let positions = std::iter::once(None).chain(offsets.iter().copied().map(Some));
    for offset in positions {
        if let Some(offset) = offset {
            nav.on_scroll(offset);
            session.observer_mut().scroll_to(offset);
        }
        let report = session.pump();
        if page == Page::Roadmap && report.transition.is_some() && !prefs.reduced_motion {
            tokio::time::sleep(flip_duration + Duration::from_millis(1)).await;
        }
        let active = session.active();
        let frame = Frame {
            offset,
            report: &report,
            active,
            nav_hidden: nav.is_hidden(),
            label: frame_label(&provider, page, active, &card),
        };
        println!("{}", format_frame(&frame));
    }
    session.teardown();
    ExitCode::SUCCESS
}
