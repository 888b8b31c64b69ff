use crate::constants::{NOTICE_DURATION_MS, NOTICE_ID};
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    // Bumped on every show so an older timer never hides a newer notice.
    static NOTICE_GENERATION: Cell<u32> = const { Cell::new(0) };
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(NOTICE_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Show a transient message, hidden again after `NOTICE_DURATION_MS`.
pub fn show(document: &web::Document, text: &str) {
    let Some(el) = document.get_element_by_id(NOTICE_ID) else {
        log::warn!("[notice] #{} missing: {}", NOTICE_ID, text);
        return;
    };
    el.set_text_content(Some(text));
    let _ = el.set_attribute("style", "");

    let generation = NOTICE_GENERATION.with(|g| {
        let next = g.get().wrapping_add(1);
        g.set(next);
        next
    });
    let doc = document.clone();
    let closure = Closure::once(move || {
        if NOTICE_GENERATION.with(Cell::get) == generation {
            hide(&doc);
        }
    });
    if let Some(window) = web::window() {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            NOTICE_DURATION_MS,
        );
    }
    closure.forget();
}
