//! Single-track preview playback.
//!
//! The controller owns the one media handle of the session and is its only
//! mutator. At most one item is ever playing; switching targets pauses the
//! current source, swaps it and starts the new one in a single call.
//!
//! Starting playback is fire-and-forget. Every start request carries a
//! [`PlayTicket`]; when the platform reports back, the ticket tells whether
//! the report still concerns the current target. Reports for superseded
//! requests are dropped.

use crate::error::PlaybackError;
use crate::payload::{ItemId, ResultItem};
use crate::preview::resolve_preview_url;
use crate::selection::SelectionState;
use url::Url;

/// The platform media-playback primitive (an `<audio>` element, a native
/// stream, a test double).
pub trait MediaSink {
    fn set_source(&mut self, url: &str);
    fn set_volume(&mut self, volume: f32);
    /// Issue a start request. `Ok` only means the request went out; the
    /// outcome arrives later through the controller's callbacks.
    fn play(&mut self, ticket: &PlayTicket) -> Result<(), PlaybackError>;
    fn pause(&mut self);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing(ItemId),
}

/// Identity of one start request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlayTicket {
    pub id: ItemId,
    pub generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToggleOutcome {
    /// Idle -> Playing.
    Started(PlayTicket),
    /// Playing(a) -> Playing(b).
    Switched { from: ItemId, ticket: PlayTicket },
    /// Playing(a) -> Idle.
    Stopped(ItemId),
    /// The item has nothing to play; state unchanged, the user should be told.
    NoPreview(ItemId),
    /// The sink refused the request outright; state rolled back to idle.
    Failed { id: ItemId, error: PlaybackError },
}

impl ToggleOutcome {
    pub fn changed_state(&self) -> bool {
        !matches!(self, ToggleOutcome::NoPreview(_))
    }
}

pub struct PlaybackController<S: MediaSink> {
    sink: S,
    state: PlaybackState,
    volume: f32,
    preview_base: Option<Url>,
    generation: u64,
}

impl<S: MediaSink> PlaybackController<S> {
    pub fn new(sink: S, volume: f32, preview_base: Option<Url>) -> Self {
        Self {
            sink,
            state: PlaybackState::Idle,
            volume: volume.clamp(0.0, 1.0),
            preview_base,
            generation: 0,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn playing(&self) -> Option<&ItemId> {
        match &self.state {
            PlaybackState::Playing(id) => Some(id),
            PlaybackState::Idle => None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_preview_base(&mut self, base: Option<Url>) {
        self.preview_base = base;
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.sink.set_volume(self.volume);
    }

    pub fn toggle_play(
        &mut self,
        item: &ResultItem,
        selection: &mut SelectionState,
    ) -> ToggleOutcome {
        if let PlaybackState::Playing(current) = &self.state {
            if current == &item.id {
                let id = current.clone();
                self.halt(selection);
                log::info!("[playback] stopped {}", id);
                return ToggleOutcome::Stopped(id);
            }
        }

        let Some(url) = resolve_preview_url(item, self.preview_base.as_ref()) else {
            log::info!("[playback] no preview for {}", item.id);
            return ToggleOutcome::NoPreview(item.id.clone());
        };

        let previous = match &self.state {
            PlaybackState::Playing(id) => {
                self.sink.pause();
                Some(id.clone())
            }
            PlaybackState::Idle => None,
        };

        self.generation += 1;
        let ticket = PlayTicket {
            id: item.id.clone(),
            generation: self.generation,
        };
        self.sink.set_source(&url);
        self.sink.set_volume(self.volume);
        if let Err(error) = self.sink.play(&ticket) {
            log::warn!("[playback] start of {} refused: {}", item.id, error);
            self.state = PlaybackState::Idle;
            selection.set_playing(None);
            return ToggleOutcome::Failed {
                id: item.id.clone(),
                error,
            };
        }

        self.state = PlaybackState::Playing(item.id.clone());
        selection.set_playing(Some(item.id.clone()));
        match previous {
            Some(from) => {
                log::info!("[playback] switched {} -> {}", from, item.id);
                ToggleOutcome::Switched { from, ticket }
            }
            None => {
                log::info!("[playback] started {}", item.id);
                ToggleOutcome::Started(ticket)
            }
        }
    }

    /// Force idle, e.g. when the result set is replaced.
    pub fn stop(&mut self, selection: &mut SelectionState) {
        if self.state != PlaybackState::Idle {
            self.halt(selection);
        }
    }

    pub fn is_current(&self, ticket: &PlayTicket) -> bool {
        ticket.generation == self.generation
            && matches!(&self.state, PlaybackState::Playing(id) if id == &ticket.id)
    }

    /// The platform confirmed a start. Returns whether it was the current request.
    pub fn on_play_started(&mut self, ticket: &PlayTicket) -> bool {
        let current = self.is_current(ticket);
        if current {
            log::debug!("[playback] {} confirmed playing", ticket.id);
        } else {
            log::debug!("[playback] ignoring stale start of {}", ticket.id);
        }
        current
    }

    /// The platform rejected a start (autoplay policy, decode error, ...).
    /// A current rejection rolls back to idle; stale ones are ignored.
    /// Returns whether the state changed.
    pub fn on_play_rejected(
        &mut self,
        ticket: &PlayTicket,
        reason: &str,
        selection: &mut SelectionState,
    ) -> bool {
        if !self.is_current(ticket) {
            log::debug!("[playback] ignoring stale rejection of {}: {}", ticket.id, reason);
            return false;
        }
        log::warn!("[playback] {} rejected by platform: {}", ticket.id, reason);
        self.state = PlaybackState::Idle;
        self.generation += 1;
        selection.set_playing(None);
        true
    }

    /// The current source played to its end. Returns whether the state changed.
    pub fn on_play_ended(&mut self, ticket: &PlayTicket, selection: &mut SelectionState) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        log::info!("[playback] {} finished", ticket.id);
        self.halt(selection);
        true
    }

    fn halt(&mut self, selection: &mut SelectionState) {
        self.sink.pause();
        self.state = PlaybackState::Idle;
        // outstanding tickets become stale
        self.generation += 1;
        selection.set_playing(None);
    }
}

impl<S: MediaSink> std::fmt::Debug for PlaybackController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("volume", &self.volume)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
