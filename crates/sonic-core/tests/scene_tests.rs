// Host-side tests for scene composition.

mod common;

use common::*;
use sonic_core::*;

fn compose_with(selection: &SelectionState) -> RenderDescription {
    let normalized = normalize(&scenario_a().matches, &LayoutParams::default());
    compose(&normalized, selection, &SceneStyle::default())
}

#[test]
fn one_connection_per_match_from_seed() {
    let desc = compose_with(&SelectionState::new());
    assert_eq!(desc.nodes.len(), 3);
    assert_eq!(desc.connections.len(), 2);
    let seed = desc.node(&"seed".into()).expect("seed node");
    for c in &desc.connections {
        assert_eq!(c.from, seed.position);
        assert_ne!(c.target.as_str(), "seed");
        assert_eq!(c.opacity, LINE_BASELINE_OPACITY);
        assert!(!c.emphasized);
    }
}

#[test]
fn scenario_d_hover_emphasizes_only_that_connection() {
    let mut sel = SelectionState::new();
    sel.set_hovered(Some("m1".into()));
    let desc = compose_with(&sel);

    let m1 = desc.connection_to(&"m1".into()).expect("m1 line");
    let m2 = desc.connection_to(&"m2".into()).expect("m2 line");
    assert_eq!(m1.opacity, LINE_EMPHASIS_OPACITY);
    assert_eq!(m1.color, LINE_EMPHASIS_COLOR);
    assert_eq!(m2.opacity, LINE_BASELINE_OPACITY);

    sel.set_hovered(None);
    let desc = compose_with(&sel);
    let m1 = desc.connection_to(&"m1".into()).expect("m1 line");
    assert_eq!(m1.opacity, LINE_BASELINE_OPACITY);
}

#[test]
fn node_emphasis_depends_on_seed_and_hover_only() {
    let style = SceneStyle::default();
    assert_eq!(node_emphasis(true, false, &style), node_emphasis(true, true, &style));
    assert_eq!(node_emphasis(false, false, &style).scale, MATCH_SCALE);
    assert_eq!(node_emphasis(false, true, &style).scale, HOVER_SCALE);

    let mut sel = SelectionState::new();
    sel.set_playing(Some("m2".into()));
    let desc = compose_with(&sel);
    let m2 = desc.node(&"m2".into()).expect("m2");
    assert_eq!(m2.emphasis, node_emphasis(false, false, &style));
    assert!(m2.playing);
}

#[test]
fn tooltip_visible_only_when_hovered() {
    let mut sel = SelectionState::new();
    let desc = compose_with(&sel);
    assert!(desc.nodes.iter().all(|n| !n.tooltip_visible));

    sel.set_hovered(Some("seed".into()));
    let desc = compose_with(&sel);
    for n in &desc.nodes {
        assert_eq!(n.tooltip_visible, n.id.as_str() == "seed");
    }
}

#[test]
fn tooltip_content_for_seed_and_match() {
    let desc = compose_with(&SelectionState::new());
    let seed = desc.node(&"seed".into()).expect("seed");
    assert_eq!(seed.tooltip.title, "Track seed");
    assert_eq!(seed.tooltip.subtitle.as_deref(), Some(SEED_LABEL));
    assert_eq!(seed.tooltip.score, None);

    let m1 = desc.node(&"m1".into()).expect("m1");
    assert_eq!(m1.tooltip.subtitle.as_deref(), Some("Artist m1"));
    assert_eq!(m1.tooltip.score.as_deref(), Some("80%"));
}

#[test]
fn score_is_rounded_to_integer_percent() {
    assert_eq!(track("x", 0.0, 0.0).with_score(87.6).score_label(), "88%");
    assert_eq!(track("x", 0.0, 0.0).with_score(87.4).score_label(), "87%");
    assert_eq!(track("x", 0.0, 0.0).with_score(100.0).score_label(), "100%");
}

#[test]
fn track_rows_show_pause_glyph_for_playing_item() {
    let mut sel = SelectionState::new();
    sel.set_playing(Some("m1".into()));
    let desc = compose_with(&sel);
    assert_eq!(desc.tracks.len(), 3);
    for row in &desc.tracks {
        if row.id.as_str() == "m1" {
            assert_eq!(row.glyph, Glyph::Pause);
            assert!(row.active);
        } else {
            assert_eq!(row.glyph, Glyph::Play);
            assert!(!row.active);
        }
    }
    assert!(desc.tracks[0].is_seed);
}

#[test]
fn empty_input_composes_empty_scene() {
    let desc = compose(&[], &SelectionState::new(), &SceneStyle::default());
    assert_eq!(desc, RenderDescription::default());
}

#[test]
fn compose_does_not_touch_its_inputs() {
    let normalized = normalize(&scenario_a().matches, &LayoutParams::default());
    let snapshot = normalized.clone();
    let mut sel = SelectionState::new();
    sel.set_hovered(Some("m2".into()));
    let first = compose(&normalized, &sel, &SceneStyle::default());
    let second = compose(&normalized, &sel, &SceneStyle::default());
    assert_eq!(normalized, snapshot);
    assert_eq!(first, second);
}
