//! Seed-centered projection of raw embedding coordinates.
//!
//! Raw `(x, y)` pairs arrive in whatever scale the producer used. The seed is
//! moved to the anchor `(0, elevation, 0)` and every item is scaled uniformly
//! so the farthest one lands exactly on `target_radius`. Raw `x` maps to world
//! `x` and raw `y` maps to world `z`; the layout lives on one horizontal plane.
//!
//! Always normalize from the raw payload. Feeding rendered positions back in
//! rescales them again and is not a no-op in general.

use crate::config::LayoutParams;
use crate::payload::{seed_index, ItemId, ResultItem};
use glam::Vec3;

/// An item together with its place in rendering space.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedItem {
    pub item: ResultItem,
    /// True for the effective seed, including the first-item fallback.
    pub is_seed: bool,
    pub render_position: Vec3,
}

impl NormalizedItem {
    pub fn id(&self) -> &ItemId {
        &self.item.id
    }

    /// Distance from the anchor on the layout plane.
    pub fn horizontal_distance(&self) -> f32 {
        let p = self.render_position;
        p.x.hypot(p.z)
    }
}

pub fn normalize(items: &[ResultItem], params: &LayoutParams) -> Vec<NormalizedItem> {
    let Some(seed_i) = seed_index(items) else {
        return Vec::new();
    };
    // Work in units of the largest raw magnitude so neither the offsets nor
    // their lengths leave the f64 range, whatever scale the producer used.
    let unit = items
        .iter()
        .flat_map(|it| [it.x, it.y])
        .filter(|v| v.is_finite())
        .fold(0.0_f64, |m, v| m.max(v.abs()));
    let reduce = |v: f64| if v.is_finite() && unit > 0.0 { v / unit } else { 0.0 };
    let sx = reduce(items[seed_i].x);
    let sy = reduce(items[seed_i].y);

    let offsets: Vec<(f64, f64)> = items
        .iter()
        .map(|it| (reduce(it.x) - sx, reduce(it.y) - sy))
        .collect();
    let max_dist = offsets
        .iter()
        .map(|(dx, dy)| dx.hypot(*dy))
        .fold(0.0_f64, f64::max);
    let scale = if max_dist > 0.0 {
        f64::from(params.target_radius) / max_dist
    } else {
        1.0
    };
    log::debug!(
        "[projection] items={} seed={} unit={:e} max_dist={:.4} scale={:.4}",
        items.len(),
        items[seed_i].id,
        unit,
        max_dist,
        scale
    );

    items
        .iter()
        .zip(offsets)
        .enumerate()
        .map(|(i, (item, (dx, dy)))| NormalizedItem {
            item: item.clone(),
            is_seed: i == seed_i,
            render_position: Vec3::new(
                (dx * scale) as f32,
                params.elevation,
                (dy * scale) as f32,
            ),
        })
        .collect()
}

/// The normalized seed, if any.
pub fn seed_of(normalized: &[NormalizedItem]) -> Option<&NormalizedItem> {
    normalized.iter().find(|n| n.is_seed)
}
