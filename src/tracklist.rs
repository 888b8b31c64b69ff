//! Track list next to the map: one row per item with a play/pause button.

use sonic_core::{Glyph, ItemId, TrackRow};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn glyph_text(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Play => "\u{25B6}",
        Glyph::Pause => "\u{275A}\u{275A}",
    }
}

fn append_span(document: &web::Document, parent: &web::Element, class: &str, text: &str) {
    if let Ok(span) = document.create_element("span") {
        span.set_class_name(class);
        span.set_text_content(Some(text));
        _ = parent.append_child(&span);
    }
}

pub fn render(document: &web::Document, list: &web::Element, rows: &[TrackRow], seed_label: &str) {
    list.set_inner_html("");
    for row in rows {
        let Ok(li) = document.create_element("li") else {
            continue;
        };
        li.set_class_name(if row.active { "track active" } else { "track" });
        _ = li.set_attribute("data-id", row.id.as_str());
        append_span(document, &li, "track-glyph", glyph_text(row.glyph));
        append_span(document, &li, "track-title", &row.title);
        if row.is_seed {
            append_span(document, &li, "track-badge", seed_label);
        }
        append_span(document, &li, "track-score", &row.score);
        _ = list.append_child(&li);
    }
}

/// One delegated click listener for all rows.
pub fn wire_clicks(list: &web::Element, mut on_row: impl FnMut(ItemId) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let row = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("li[data-id]").ok().flatten());
        if let Some(id) = row.and_then(|li| li.get_attribute("data-id")) {
            on_row(ItemId::new(id));
        }
    }) as Box<dyn FnMut(_)>);
    _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
