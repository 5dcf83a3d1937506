// Click-through flows over a rendered grid: entry -> sink, controls -> new views
use soundbrowser_core::IconHeuristic;
use soundbrowser_engine::{AffordanceKind, Dispatch};
use soundbrowser_runtime::{Config, RecordingSink, SinkEvent, SoundBrowser};
use soundbrowser_types::Catalog;
use std::sync::Arc;

fn numbered_catalog(count: usize) -> Catalog {
    Catalog::from_keys((0..count).map(|i| format!("SOUND_{:02}", i)))
}

fn browser_with(catalog: Catalog) -> SoundBrowser {
    let icons = IconHeuristic::new(["SOUND"]);
    SoundBrowser::initialize(&Config::default(), Arc::new(catalog), Arc::new(icons))
        .expect("default config is valid")
}

fn slot_of(session: &soundbrowser_runtime::ViewerSession, kind: AffordanceKind) -> usize {
    session
        .view()
        .find(kind)
        .unwrap_or_else(|| panic!("{:?} missing from page", kind))
        .slot
}

#[test]
fn test_walk_pages_play_and_stop() {
    let browser = browser_with(numbered_catalog(81));
    let mut session = browser.open("");
    let mut sink = RecordingSink::new();

    assert_eq!(session.page().offset(), 0);
    assert_eq!(session.view().max_page, 2);
    assert!(session.view().find(AffordanceKind::PreviousPage).is_none());

    let next = slot_of(&session, AffordanceKind::NextPage);
    assert_eq!(next, 44);
    let outcome = browser.handle_click(&mut session, next, &mut sink);
    assert!(outcome.cancelled);
    assert!(matches!(outcome.dispatch, Dispatch::Navigate { .. }));
    assert_eq!(session.page().offset(), 1);
    assert!(sink.events().is_empty());

    let outcome = browser.handle_click(&mut session, 0, &mut sink);
    assert_eq!(
        outcome.dispatch,
        Dispatch::Play {
            sound_key: "SOUND_36".to_string(),
            pitch: 1
        }
    );
    assert_eq!(
        sink.last(),
        Some(&SinkEvent::Played {
            sound_key: "SOUND_36".to_string(),
            pitch: 1,
            volume: 10
        })
    );
    assert_eq!(session.playing(), ["SOUND_36".to_string()]);

    let stop = slot_of(&session, AffordanceKind::StopSound);
    assert_eq!(stop, 37);
    let outcome = browser.handle_click(&mut session, stop, &mut sink);
    assert_eq!(outcome.dispatch, Dispatch::StopAll);
    assert_eq!(sink.last(), Some(&SinkEvent::StoppedAll));
    assert!(session.playing().is_empty());
    assert_eq!(session.page().offset(), 1);
}

#[test]
fn test_pitch_controls_keep_offset_and_filter() {
    let browser = browser_with(numbered_catalog(81));
    let mut session = browser.open("sound");
    let mut sink = RecordingSink::new();

    let next = slot_of(&session, AffordanceKind::NextPage);
    browser.handle_click(&mut session, next, &mut sink);

    let up = slot_of(&session, AffordanceKind::IncreasePitch);
    browser.handle_click(&mut session, up, &mut sink);
    assert_eq!(session.page().pitch(), 2);
    assert_eq!(session.page().offset(), 1);
    assert_eq!(session.page().filter(), "sound");

    browser.handle_click(&mut session, 3, &mut sink);
    assert_eq!(
        sink.last(),
        Some(&SinkEvent::Played {
            sound_key: "SOUND_39".to_string(),
            pitch: 2,
            volume: 10
        })
    );

    for _ in 0..2 {
        let down = slot_of(&session, AffordanceKind::DecreasePitch);
        browser.handle_click(&mut session, down, &mut sink);
    }
    assert_eq!(session.page().pitch(), 0);
    assert!(session.view().find(AffordanceKind::DecreasePitch).is_none());
}

#[test]
fn test_current_page_indicator_is_consumed_but_inert() {
    let browser = browser_with(numbered_catalog(5));
    let mut session = browser.open("");
    let mut sink = RecordingSink::new();

    let indicator = slot_of(&session, AffordanceKind::CurrentPage);
    let before = session.clone();
    let outcome = browser.handle_click(&mut session, indicator, &mut sink);

    assert_eq!(outcome.dispatch, Dispatch::Unroutable);
    assert!(outcome.cancelled);
    assert_eq!(session, before);
    assert!(sink.events().is_empty());
}

#[test]
fn test_filter_narrows_pages() {
    let browser = browser_with(numbered_catalog(81));
    let session = browser.open("sound_0");

    assert_eq!(session.view().filtered_count, 10);
    assert_eq!(session.view().max_page, 0);
    assert!(session.view().find(AffordanceKind::NextPage).is_none());
    assert_eq!(session.view().entries().count(), 10);
}

#[test]
fn test_play_outside_catalog_is_refused() {
    let wide = browser_with(numbered_catalog(3));
    let narrow = browser_with(Catalog::from_keys(["SOUND_01"]));
    let mut session = wide.open("");
    let mut sink = RecordingSink::new();

    let outcome = narrow.handle_click(&mut session, 0, &mut sink);
    assert_eq!(outcome.dispatch, Dispatch::Unroutable);
    assert!(outcome.cancelled);
    assert!(sink.events().is_empty());

    let outcome = narrow.handle_click(&mut session, 1, &mut sink);
    assert!(matches!(outcome.dispatch, Dispatch::Play { .. }));
}

#[test]
fn test_suggest_completes_prefix() {
    let browser = browser_with(numbered_catalog(81));
    let suggestions = browser.suggest("sound_8");
    assert_eq!(suggestions, vec!["SOUND_80"]);
}
