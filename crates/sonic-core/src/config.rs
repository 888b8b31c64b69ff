use crate::constants::*;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Geometry of the normalized layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub target_radius: f32,
    pub elevation: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            target_radius: TARGET_RADIUS,
            elevation: ELEVATION,
        }
    }
}

/// Emphasis values the scene composer hands to the rendering surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneStyle {
    pub line_baseline_opacity: f32,
    pub line_emphasis_opacity: f32,
    pub line_color: [f32; 3],
    pub line_emphasis_color: [f32; 3],
    pub match_scale: f32,
    pub hover_scale: f32,
    pub seed_scale: f32,
    pub match_emissive: f32,
    pub hover_emissive: f32,
    pub seed_emissive: f32,
    pub seed_color: [f32; 3],
    pub match_color: [f32; 3],
    pub hover_color: [f32; 3],
    pub seed_label: String,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            line_baseline_opacity: LINE_BASELINE_OPACITY,
            line_emphasis_opacity: LINE_EMPHASIS_OPACITY,
            line_color: LINE_COLOR,
            line_emphasis_color: LINE_EMPHASIS_COLOR,
            match_scale: MATCH_SCALE,
            hover_scale: HOVER_SCALE,
            seed_scale: SEED_SCALE,
            match_emissive: MATCH_EMISSIVE,
            hover_emissive: HOVER_EMISSIVE,
            seed_emissive: SEED_EMISSIVE,
            seed_color: SEED_COLOR,
            match_color: MATCH_COLOR,
            hover_color: HOVER_COLOR,
            seed_label: SEED_LABEL.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackParams {
    pub volume: f32,
    /// Media host used to derive preview URLs from item file names.
    pub preview_base: Option<String>,
}

impl Default for PlaybackParams {
    fn default() -> Self {
        Self {
            volume: PREVIEW_VOLUME,
            preview_base: None,
        }
    }
}

impl PlaybackParams {
    pub fn preview_base_url(&self) -> Result<Option<Url>> {
        self.preview_base
            .as_deref()
            .map(Url::parse)
            .transpose()
            .map_err(Error::from)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub layout: LayoutParams,
    pub style: SceneStyle,
    pub playback: PlaybackParams,
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON config; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: EngineConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let r = self.layout.target_radius;
        if !r.is_finite() || r <= 0.0 {
            return Err(Error::Config(format!(
                "target_radius must be positive and finite, got {r}"
            )));
        }
        if !self.layout.elevation.is_finite() {
            return Err(Error::Config("elevation must be finite".into()));
        }
        if !self.playback.volume.is_finite() {
            return Err(Error::Config("volume must be finite".into()));
        }
        self.playback.preview_base_url()?;
        Ok(())
    }
}
