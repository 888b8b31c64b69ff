// Shared fixtures for the host-side core tests.

#![allow(dead_code)]

use sonic_core::{MediaSink, PlayTicket, PlaybackError, ResultItem, SearchResult};

#[derive(Clone, Debug, PartialEq)]
pub enum SinkCall {
    Source(String),
    Volume(f32),
    Play(PlayTicket),
    Pause,
}

/// Media sink that records every call; can be told to refuse the next start.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
    pub refuse_next: Option<String>,
}

impl RecordingSink {
    pub fn plays(&self) -> Vec<&PlayTicket> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Play(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn last_source(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            SinkCall::Source(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub fn pauses(&self) -> usize {
        self.calls.iter().filter(|c| **c == SinkCall::Pause).count()
    }
}

impl MediaSink for RecordingSink {
    fn set_source(&mut self, url: &str) {
        self.calls.push(SinkCall::Source(url.to_owned()));
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(SinkCall::Volume(volume));
    }

    fn play(&mut self, ticket: &PlayTicket) -> Result<(), PlaybackError> {
        if let Some(reason) = self.refuse_next.take() {
            return Err(PlaybackError::Rejected(reason));
        }
        self.calls.push(SinkCall::Play(ticket.clone()));
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(SinkCall::Pause);
    }
}

pub fn track(id: &str, x: f64, y: f64) -> ResultItem {
    ResultItem::new(id, x, y)
        .with_name(format!("Track {id}"))
        .with_artist(format!("Artist {id}"))
        .with_score(80.0)
        .with_preview(format!("https://media.test/{id}.mp3"))
}

pub fn scenario_a() -> SearchResult {
    SearchResult::new(vec![
        track("seed", 0.0, 0.0).seed(),
        track("m1", 10.0, 0.0),
        track("m2", 0.0, 20.0),
    ])
}
