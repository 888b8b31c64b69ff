//! Render description derived from positions and selection.
//!
//! `compose` is a pure function. Front-ends call it after every state
//! transition and draw whatever it returns; nothing here is cached or
//! mutated in place.

use crate::config::SceneStyle;
use crate::payload::ItemId;
use crate::projection::{seed_of, NormalizedItem};
use crate::selection::SelectionState;
use glam::Vec3;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Emphasis {
    pub scale: f32,
    pub emissive: f32,
    pub color: [f32; 3],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    pub title: String,
    /// Artist for matches, the seed label for the seed.
    pub subtitle: Option<String>,
    /// Rounded similarity, matches only.
    pub score: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeDescriptor {
    pub id: ItemId,
    pub position: Vec3,
    pub is_seed: bool,
    pub emphasis: Emphasis,
    pub tooltip_visible: bool,
    pub tooltip: Tooltip,
    pub playing: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConnectionDescriptor {
    pub target: ItemId,
    pub from: Vec3,
    pub to: Vec3,
    pub opacity: f32,
    pub color: [f32; 3],
    pub emphasized: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Glyph {
    Play,
    Pause,
}

/// One row of the track list next to the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackRow {
    pub id: ItemId,
    pub title: String,
    pub is_seed: bool,
    pub score: String,
    pub glyph: Glyph,
    pub active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderDescription {
    pub nodes: Vec<NodeDescriptor>,
    pub connections: Vec<ConnectionDescriptor>,
    pub tracks: Vec<TrackRow>,
}

impl RenderDescription {
    pub fn node(&self, id: &ItemId) -> Option<&NodeDescriptor> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn connection_to(&self, id: &ItemId) -> Option<&ConnectionDescriptor> {
        self.connections.iter().find(|c| &c.target == id)
    }
}

#[inline]
pub fn node_emphasis(is_seed: bool, hovered: bool, style: &SceneStyle) -> Emphasis {
    match (is_seed, hovered) {
        (true, _) => Emphasis {
            scale: style.seed_scale,
            emissive: style.seed_emissive,
            color: style.seed_color,
        },
        (false, true) => Emphasis {
            scale: style.hover_scale,
            emissive: style.hover_emissive,
            color: style.hover_color,
        },
        (false, false) => Emphasis {
            scale: style.match_scale,
            emissive: style.match_emissive,
            color: style.match_color,
        },
    }
}

pub fn compose(
    normalized: &[NormalizedItem],
    selection: &SelectionState,
    style: &SceneStyle,
) -> RenderDescription {
    let Some(seed) = seed_of(normalized) else {
        return RenderDescription::default();
    };

    let mut out = RenderDescription {
        nodes: Vec::with_capacity(normalized.len()),
        connections: Vec::with_capacity(normalized.len().saturating_sub(1)),
        tracks: Vec::with_capacity(normalized.len()),
    };

    for n in normalized {
        let id = n.id();
        let hovered = selection.is_hovered(id);
        let playing = selection.is_playing(id);
        let score = n.item.score_label();

        out.nodes.push(NodeDescriptor {
            id: id.clone(),
            position: n.render_position,
            is_seed: n.is_seed,
            emphasis: node_emphasis(n.is_seed, hovered, style),
            tooltip_visible: hovered,
            tooltip: Tooltip {
                title: n.item.name.clone(),
                subtitle: if n.is_seed {
                    Some(style.seed_label.clone())
                } else {
                    n.item.artist.clone()
                },
                score: (!n.is_seed).then(|| score.clone()),
            },
            playing,
        });

        if !n.is_seed {
            out.connections.push(ConnectionDescriptor {
                target: id.clone(),
                from: seed.render_position,
                to: n.render_position,
                opacity: if hovered {
                    style.line_emphasis_opacity
                } else {
                    style.line_baseline_opacity
                },
                color: if hovered {
                    style.line_emphasis_color
                } else {
                    style.line_color
                },
                emphasized: hovered,
            });
        }

        out.tracks.push(TrackRow {
            id: id.clone(),
            title: n.item.name.clone(),
            is_seed: n.is_seed,
            score,
            glyph: if playing { Glyph::Pause } else { Glyph::Play },
            active: playing,
        });
    }
    out
}
