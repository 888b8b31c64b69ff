use crate::input::{key_action, KeyAction};
use crate::SharedSession;
use wasm_bindgen::JsCast;
use web_sys as web;

// Keys typed into the host page's form fields are not ours.
fn is_text_entry(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, session: &SharedSession) {
    if is_text_entry(ev) {
        return;
    }
    match key_action(&ev.key()) {
        Some(KeyAction::StopPlayback) => {
            session.borrow_mut().stop_playback();
        }
        Some(KeyAction::ToggleHovered) => {
            let hovered = session.borrow().selection().hovered().cloned();
            if let Some(id) = hovered {
                super::toggle_item(session, &id);
                ev.prevent_default();
            }
        }
        None => {}
    }
}

pub fn wire_global_keydown(session: SharedSession) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &session);
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
