//! Event-driven orchestration of one map.
//!
//! A `MapSession` receives discrete events (result set replaced, pointer
//! over/out, click, playback callbacks), applies them to the selection and the
//! playback controller, and marks itself dirty. Front-ends then call
//! [`MapSession::render`] to recompute the scene from scratch.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::payload::{ItemId, SearchResult};
use crate::playback::{MediaSink, PlayTicket, PlaybackController, ToggleOutcome};
use crate::projection::{normalize, NormalizedItem};
use crate::scene::{compose, RenderDescription};
use crate::selection::SelectionState;
use fnv::FnvHashMap;
use std::collections::hash_map::Entry;

pub struct MapSession<S: MediaSink> {
    config: EngineConfig,
    results: SearchResult,
    index: FnvHashMap<ItemId, usize>,
    normalized: Vec<NormalizedItem>,
    selection: SelectionState,
    playback: PlaybackController<S>,
    dirty: bool,
}

impl<S: MediaSink> MapSession<S> {
    pub fn new(sink: S, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let base = config.playback.preview_base_url()?;
        let playback = PlaybackController::new(sink, config.playback.volume, base);
        Ok(Self {
            config,
            results: SearchResult::default(),
            index: FnvHashMap::default(),
            normalized: Vec::new(),
            selection: SelectionState::new(),
            playback,
            dirty: true,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Swap in a new configuration and re-project the current results.
    pub fn reconfigure(&mut self, config: EngineConfig) -> Result<()> {
        config.validate()?;
        self.playback
            .set_preview_base(config.playback.preview_base_url()?);
        self.playback.set_volume(config.playback.volume);
        self.config = config;
        self.normalized = normalize(&self.results.matches, &self.config.layout);
        self.dirty = true;
        Ok(())
    }

    pub fn results(&self) -> &SearchResult {
        &self.results
    }

    pub fn normalized(&self) -> &[NormalizedItem] {
        &self.normalized
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn playback(&self) -> &PlaybackController<S> {
        &self.playback
    }

    /// A new result set arrived: stop any preview, drop selections and
    /// project the raw coordinates.
    pub fn replace_results(&mut self, results: SearchResult) {
        self.playback.stop(&mut self.selection);
        self.selection.clear();
        self.normalized = normalize(&results.matches, &self.config.layout);
        self.index = FnvHashMap::default();
        for (i, item) in results.matches.iter().enumerate() {
            match self.index.entry(item.id.clone()) {
                Entry::Occupied(_) => log::warn!("[session] duplicate item id {}", item.id),
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
            }
        }
        log::info!("[session] loaded {} items", results.matches.len());
        self.results = results;
        self.dirty = true;
    }

    pub fn pointer_over(&mut self, id: &ItemId) {
        if self.selection.is_hovered(id) {
            return;
        }
        if !self.index.contains_key(id) {
            log::debug!("[session] hover on unknown item {}", id);
            return;
        }
        self.selection.set_hovered(Some(id.clone()));
        self.dirty = true;
    }

    pub fn pointer_out(&mut self) {
        if self.selection.hovered().is_some() {
            self.selection.set_hovered(None);
            self.dirty = true;
        }
    }

    /// Toggle playback of the item. Unknown ids are ignored.
    pub fn click(&mut self, id: &ItemId) -> Option<ToggleOutcome> {
        let Some(item) = self.index.get(id).map(|&i| &self.results.matches[i]) else {
            log::debug!("[session] click on unknown item {}", id);
            return None;
        };
        let outcome = self.playback.toggle_play(item, &mut self.selection);
        if outcome.changed_state() {
            self.dirty = true;
        }
        Some(outcome)
    }

    pub fn stop_playback(&mut self) {
        if self.playback.playing().is_some() {
            self.playback.stop(&mut self.selection);
            self.dirty = true;
        }
    }

    pub fn on_play_started(&mut self, ticket: &PlayTicket) -> bool {
        self.playback.on_play_started(ticket)
    }

    pub fn on_play_rejected(&mut self, ticket: &PlayTicket, reason: &str) -> bool {
        let changed = self
            .playback
            .on_play_rejected(ticket, reason, &mut self.selection);
        self.dirty |= changed;
        changed
    }

    pub fn on_play_ended(&mut self, ticket: &PlayTicket) -> bool {
        let changed = self.playback.on_play_ended(ticket, &mut self.selection);
        self.dirty |= changed;
        changed
    }

    pub fn render(&self) -> RenderDescription {
        compose(&self.normalized, &self.selection, &self.config.style)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether anything changed since the previous call and resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl<S: MediaSink> std::fmt::Debug for MapSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapSession")
            .field("items", &self.normalized.len())
            .field("selection", &self.selection)
            .field("playback", &self.playback)
            .field("dirty", &self.dirty)
            .finish()
    }
}
