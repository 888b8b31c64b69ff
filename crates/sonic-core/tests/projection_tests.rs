// Host-side tests for the seed-centered projection.

mod common;

use common::*;
use sonic_core::*;

fn params(target_radius: f32) -> LayoutParams {
    LayoutParams {
        target_radius,
        elevation: ELEVATION,
    }
}

#[test]
fn scenario_a_scales_farthest_match_onto_radius() {
    let out = normalize(&scenario_a().matches, &params(35.0));
    assert_eq!(out.len(), 3);

    let m1 = out[1].render_position;
    let m2 = out[2].render_position;
    assert!((m1.x - 17.5).abs() < 1e-4 && m1.z.abs() < 1e-4, "m1 at {m1:?}");
    assert!(m2.x.abs() < 1e-4 && (m2.z - 35.0).abs() < 1e-4, "m2 at {m2:?}");
}

#[test]
fn seed_is_anchored_regardless_of_scale_and_offset() {
    for (ox, oy, k) in [(0.0, 0.0, 1.0), (1e6, -3e5, 1.0), (-7.5, 2.25, 1e-6), (42.0, 42.0, 1e9)] {
        let items = vec![
            ResultItem::new("a", ox + 3.0 * k, oy - 1.0 * k),
            ResultItem::new("s", ox, oy).seed(),
            ResultItem::new("b", ox - 2.0 * k, oy + 5.0 * k),
        ];
        let out = normalize(&items, &LayoutParams::default());
        let seed = seed_of(&out).expect("seed present");
        assert_eq!(seed.id().as_str(), "s");
        assert_eq!(seed.render_position.x, 0.0);
        assert_eq!(seed.render_position.z, 0.0);
        assert_eq!(seed.render_position.y, ELEVATION);
    }
}

#[test]
fn all_matches_bounded_and_one_on_the_radius() {
    let items: Vec<ResultItem> = std::iter::once(ResultItem::new("s", 0.3, -0.7).seed())
        .chain((0..25).map(|i| {
            let t = i as f64 * 0.37;
            ResultItem::new(format!("m{i}"), t.sin() * (i as f64 + 1.0), t.cos() * 3.0)
        }))
        .collect();
    let radius = LayoutParams::default().target_radius;
    let out = normalize(&items, &LayoutParams::default());

    let mut max_seen = 0.0_f32;
    for n in &out {
        let d = n.horizontal_distance();
        assert!(d <= radius + 1e-3, "{} at distance {d}", n.id());
        assert_eq!(n.render_position.y, ELEVATION);
        max_seen = max_seen.max(d);
    }
    assert!((max_seen - radius).abs() < 1e-3);
}

#[test]
fn empty_and_single_item_sets() {
    assert!(normalize(&[], &LayoutParams::default()).is_empty());

    let out = normalize(&[ResultItem::new("only", 12.0, -9.0)], &LayoutParams::default());
    assert_eq!(out.len(), 1);
    assert!(out[0].is_seed);
    assert_eq!(out[0].render_position, anchor_vec3());
}

#[test]
fn missing_seed_flag_falls_back_to_first_item() {
    let items = vec![
        ResultItem::new("first", 5.0, 5.0),
        ResultItem::new("second", 6.0, 5.0),
    ];
    let out = normalize(&items, &LayoutParams::default());
    assert!(out[0].is_seed);
    assert!(!out[1].is_seed);
    assert_eq!(out[0].render_position, anchor_vec3());
    assert_eq!(seed_index(&items), Some(0));
}

#[test]
fn second_seed_flag_is_treated_as_match() {
    let items = vec![
        ResultItem::new("a", 0.0, 0.0).seed(),
        ResultItem::new("b", 1.0, 0.0).seed(),
    ];
    let out = normalize(&items, &LayoutParams::default());
    assert_eq!(out.iter().filter(|n| n.is_seed).count(), 1);
    assert!(out[0].is_seed);
}

#[test]
fn normalization_is_deterministic_and_preserves_order() {
    let items = scenario_a().matches;
    let a = normalize(&items, &LayoutParams::default());
    let b = normalize(&items, &LayoutParams::default());
    assert_eq!(a, b);
    let ids: Vec<&str> = a.iter().map(|n| n.id().as_str()).collect();
    assert_eq!(ids, ["seed", "m1", "m2"]);
}

#[test]
fn renormalizing_rendered_positions_is_not_generally_idempotent() {
    // Feeding positions back in only survives when the farthest point
    // already sits on the radius; here it does, so the layout is stable,
    // but a different radius rescales everything again.
    let first = normalize(&scenario_a().matches, &params(35.0));
    let fed_back: Vec<ResultItem> = first
        .iter()
        .map(|n| {
            let mut it = n.item.clone();
            it.x = f64::from(n.render_position.x);
            it.y = f64::from(n.render_position.z);
            it
        })
        .collect();
    let again = normalize(&fed_back, &params(35.0));
    for (a, b) in first.iter().zip(&again) {
        assert!((a.render_position - b.render_position).length() < 1e-3);
    }
    let rescaled = normalize(&fed_back, &params(10.0));
    assert!((rescaled[2].horizontal_distance() - 10.0).abs() < 1e-4);
}

#[test]
fn huge_coordinates_still_reach_the_radius() {
    let items = vec![
        ResultItem::new("s", 0.0, 0.0).seed(),
        ResultItem::new("m", 1e200, 0.0),
    ];
    let out = normalize(&items, &params(35.0));
    let m = out[1].render_position;
    assert!((out[1].horizontal_distance() - 35.0).abs() < 1e-4, "m at {m:?}");
    assert!(m.x > 0.0);
}

#[test]
fn tiny_coordinates_still_reach_the_radius() {
    let items = vec![
        ResultItem::new("s", 0.0, 0.0).seed(),
        ResultItem::new("m", 1e-170, 0.0),
        ResultItem::new("n", 0.0, -5e-171),
    ];
    let out = normalize(&items, &params(35.0));
    let (m, n) = (out[1].render_position, out[2].render_position);
    assert!((out[1].horizontal_distance() - 35.0).abs() < 1e-4, "m at {m:?}");
    assert!((n.z + 17.5).abs() < 1e-4, "n at {n:?}");
}

#[test]
fn offsets_spanning_the_whole_f64_range_do_not_overflow() {
    let items = vec![
        ResultItem::new("s", -1e308, -1e308).seed(),
        ResultItem::new("m", 1e308, 1e308),
        ResultItem::new("n", 0.0, 0.0),
    ];
    let out = normalize(&items, &params(35.0));
    assert_eq!(out[0].render_position, glam::Vec3::new(0.0, ELEVATION, 0.0));
    let (m, n) = (out[1].render_position, out[2].render_position);
    assert!((out[1].horizontal_distance() - 35.0).abs() < 1e-4, "m at {m:?}");
    assert!((out[2].horizontal_distance() - 17.5).abs() < 1e-4, "n at {n:?}");
    assert!(out.iter().all(|n| n.render_position.is_finite()));
}
