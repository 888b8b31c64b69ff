//! Scripted interaction events for headless replay.

use sonic_core::{ItemId, MapSession, MediaSink, ToggleOutcome};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptEvent {
    Hover(ItemId),
    Out,
    Click(ItemId),
    Stop,
}

impl FromStr for ScriptEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, arg) = match s.split_once(':') {
            Some((v, a)) => (v, Some(a)),
            None => (s, None),
        };
        match (verb.trim().to_ascii_lowercase().as_str(), arg) {
            ("hover", Some(id)) if !id.is_empty() => Ok(Self::Hover(id.into())),
            ("click", Some(id)) if !id.is_empty() => Ok(Self::Click(id.into())),
            ("out", None) => Ok(Self::Out),
            ("stop", None) => Ok(Self::Stop),
            _ => Err(format!(
                "unrecognized event '{s}' (expected hover:ID, out, click:ID or stop)"
            )),
        }
    }
}

/// Apply one event. Returns the toggle outcome for clicks.
pub fn apply<S: MediaSink>(
    session: &mut MapSession<S>,
    event: &ScriptEvent,
) -> Option<ToggleOutcome> {
    match event {
        ScriptEvent::Hover(id) => {
            session.pointer_over(id);
            None
        }
        ScriptEvent::Out => {
            session.pointer_out();
            None
        }
        ScriptEvent::Click(id) => session.click(id),
        ScriptEvent::Stop => {
            session.stop_playback();
            None
        }
    }
}
