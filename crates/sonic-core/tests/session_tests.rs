// Host-side tests for event handling in MapSession.

mod common;

use common::*;
use sonic_core::*;

fn session() -> MapSession<RecordingSink> {
    let mut s = MapSession::new(RecordingSink::default(), EngineConfig::default())
        .expect("default config is valid");
    s.replace_results(scenario_a());
    s
}

#[test]
fn hover_and_playback_are_independent() {
    let mut s = session();
    s.pointer_over(&"m1".into());
    s.click(&"m2".into());
    assert!(s.selection().is_hovered(&"m1".into()));
    assert!(s.selection().is_playing(&"m2".into()));

    s.pointer_out();
    assert!(s.selection().is_playing(&"m2".into()));

    s.pointer_over(&"m2".into());
    s.click(&"m2".into());
    assert!(s.selection().is_hovered(&"m2".into()));
    assert_eq!(s.selection().playing(), None);
}

#[test]
fn last_hover_event_wins() {
    let mut s = session();
    s.pointer_over(&"m1".into());
    s.pointer_over(&"m2".into());
    assert_eq!(s.selection().hovered().map(ItemId::as_str), Some("m2"));
    s.pointer_out();
    assert_eq!(s.selection().hovered(), None);
}

#[test]
fn unknown_ids_are_ignored() {
    let mut s = session();
    s.take_dirty();
    s.pointer_over(&"nope".into());
    assert_eq!(s.click(&"nope".into()), None);
    assert!(!s.is_dirty());
    assert_eq!(s.selection(), &SelectionState::new());
}

#[test]
fn replacing_results_stops_playback_and_clears_hover() {
    let mut s = session();
    s.pointer_over(&"m1".into());
    s.click(&"m1".into());
    s.replace_results(SearchResult::new(vec![track("z", 1.0, 1.0).seed()]));

    assert_eq!(s.selection(), &SelectionState::new());
    assert_eq!(s.playback().state(), &PlaybackState::Idle);
    assert_eq!(s.playback().sink().pauses(), 1);
    assert_eq!(s.normalized().len(), 1);
}

#[test]
fn dirty_flag_tracks_transitions() {
    let mut s = session();
    assert!(s.take_dirty());
    assert!(!s.take_dirty());

    s.pointer_over(&"m1".into());
    assert!(s.take_dirty());
    s.pointer_over(&"m1".into());
    assert!(!s.take_dirty());

    let mut silent = track("quiet", 3.0, 3.0);
    silent.preview_url = None;
    s.replace_results(SearchResult::new(vec![track("s", 0.0, 0.0).seed(), silent]));
    s.take_dirty();
    assert!(matches!(s.click(&"quiet".into()), Some(ToggleOutcome::NoPreview(_))));
    assert!(!s.take_dirty());
}

#[test]
fn late_rejection_after_switch_is_ignored() {
    let mut s = session();
    let Some(ToggleOutcome::Started(first)) = s.click(&"m1".into()) else {
        panic!("expected Started");
    };
    s.click(&"m2".into());
    assert!(!s.on_play_rejected(&first, "AbortError"));
    assert!(s.selection().is_playing(&"m2".into()));
}

#[test]
fn render_reflects_state_after_each_event() {
    let mut s = session();
    s.pointer_over(&"m2".into());
    s.click(&"m2".into());
    let desc = s.render();
    assert_eq!(
        desc.connection_to(&"m2".into()).map(|c| c.opacity),
        Some(LINE_EMPHASIS_OPACITY)
    );
    assert!(desc.node(&"m2".into()).is_some_and(|n| n.playing && n.tooltip_visible));
}

#[test]
fn empty_results_render_nothing() {
    let mut s = session();
    s.replace_results(SearchResult::from_json("null").expect("null payload"));
    assert_eq!(s.render(), RenderDescription::default());
}

#[test]
fn reconfigure_reprojects_current_results() {
    let mut s = session();
    let mut cfg = EngineConfig::default();
    cfg.layout.target_radius = 10.0;
    s.reconfigure(cfg).expect("valid config");
    let far = s
        .normalized()
        .iter()
        .map(NormalizedItem::horizontal_distance)
        .fold(0.0_f32, f32::max);
    assert!((far - 10.0).abs() < 1e-4);
}

#[test]
fn duplicate_ids_resolve_to_first_occurrence() {
    let mut s = session();
    let mut dup = track("m1", 5.0, 5.0);
    dup.preview_url = None;
    s.replace_results(SearchResult::new(vec![
        track("seed", 0.0, 0.0).seed(),
        track("m1", 1.0, 0.0),
        dup,
    ]));
    assert!(matches!(s.click(&"m1".into()), Some(ToggleOutcome::Started(_))));
}
