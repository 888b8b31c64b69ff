use crate::constants::SEED_PICK_MULTIPLIER;
use crate::input;
use crate::SharedSession;
use sonic_core::{ItemId, PICK_SPHERE_RADIUS};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: SharedSession,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
    wire_pointerup(&w);
}

// Item under the pointer, picked against the current layout.
fn pick(w: &InputWiring, ev: &web::PointerEvent) -> Option<ItemId> {
    let pos = input::pointer_canvas_px(ev, &w.canvas);
    let (width, height) = (w.canvas.width() as f32, w.canvas.height() as f32);
    let session = w.session.borrow();
    let nodes = session.normalized();
    input::pick_node_at(pos, width, height, nodes, PICK_SPHERE_RADIUS, SEED_PICK_MULTIPLIER)
        .map(|i| nodes[i].id().clone())
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.canvas.is_connected() {
            return;
        }
        let hit = pick(&w, &ev);
        let mut session = w.session.borrow_mut();
        match hit {
            Some(id) => session.pointer_over(&id),
            None => session.pointer_out(),
        }
    }) as Box<dyn FnMut(_)>);

    _ = w
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.session.borrow_mut().pointer_out();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Picks at the release point so a touch tap without a preceding move still works.
fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(id) = pick(&w, &ev) else {
            return;
        };
        log::info!("[pointer] click on {}", id);
        w.session.borrow_mut().pointer_over(&id);
        super::toggle_item(&w.session, &id);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}
