//! `SearchResult` payload as delivered by the query backend.
//!
//! Producers are loosely typed: coordinates and scores may arrive as numbers,
//! numeric strings or not at all. Everything that cannot be read as a finite
//! number is coerced to `0.0` instead of failing the whole payload.

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque, stable identifier of an item within one result set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Self(s)),
            Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "item id must be a string or number, got {other}"
            ))),
        }
    }
}

/// One entry of a result set: the seed or a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub id: ItemId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub score: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub x: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub y: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_seed: bool,
    #[serde(default)]
    pub preview_url: Option<String>,
    /// File name on the producer's media host; used when no `previewUrl` is given.
    #[serde(default)]
    pub filename: Option<String>,
}

impl ResultItem {
    /// Minimal item at the given raw coordinates, mostly useful for tests and fixtures.
    pub fn new(id: impl Into<ItemId>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            artist: None,
            image: None,
            score: 0.0,
            x,
            y,
            is_seed: false,
            preview_url: None,
            filename: None,
        }
    }

    pub fn seed(mut self) -> Self {
        self.is_seed = true;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn with_preview(mut self, url: impl Into<String>) -> Self {
        self.preview_url = Some(url.into());
        self
    }

    /// Score rounded to an integer percentage, e.g. `"87%"`.
    pub fn score_label(&self) -> String {
        format!("{}%", self.score.round() as i64)
    }
}

/// Payload of one similarity query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<ResultItem>,
}

impl SearchResult {
    pub fn new(matches: Vec<ResultItem>) -> Self {
        Self { matches }
    }

    /// Parse a payload. A JSON `null` is an absent result set and yields an empty one.
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: Option<SearchResult> = serde_json::from_str(json)?;
        Ok(parsed.unwrap_or_default())
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&ResultItem> {
        self.matches.iter().find(|m| &m.id == id)
    }
}

/// Index of the seed: the first flagged item, else the first item.
///
/// The fallback keeps malformed payloads renderable; producers are expected
/// to flag exactly one seed.
pub fn seed_index(items: &[ResultItem]) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    match items.iter().position(|i| i.is_seed) {
        Some(i) => Some(i),
        None => {
            log::warn!(
                "[payload] no item flagged as seed among {}; using first item",
                items.len()
            );
            Some(0)
        }
    }
}

// An explicit `null` reads like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

/// Read a JSON value as a finite number, falling back to `0.0`.
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|v| v.is_finite()).unwrap_or(0.0)
}
