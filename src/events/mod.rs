pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};

use crate::{dom, notice, SharedSession};
use sonic_core::{ItemId, ToggleOutcome, NO_PREVIEW_NOTICE};

/// Route a click on a node or a track row to the session and surface the outcome.
pub fn toggle_item(session: &SharedSession, id: &ItemId) {
    let outcome = session.borrow_mut().click(id);
    match outcome {
        Some(ToggleOutcome::NoPreview(_)) => {
            if let Some(doc) = dom::window_document() {
                notice::show(&doc, NO_PREVIEW_NOTICE);
            }
        }
        Some(ToggleOutcome::Failed { id, error }) => {
            log::warn!("[click] {} could not start: {}", id, error);
            if let Some(doc) = dom::window_document() {
                notice::show(&doc, &format!("Playback failed: {error}"));
            }
        }
        Some(other) => log::debug!("[click] {:?}", other),
        None => {}
    }
}
