#![cfg(target_arch = "wasm32")]
use sonic_core::{EngineConfig, MapSession, SearchResult};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod notice;
mod render;
mod tracklist;

use audio::HtmlAudioSink;
use constants::{CANVAS_ID, TRACK_LIST_ID};

pub(crate) type SharedSession = Rc<RefCell<MapSession<HtmlAudioSink>>>;

thread_local! {
    // Set once init has wired the page; the exported entry points go through it.
    static SESSION: RefCell<Option<SharedSession>> = const { RefCell::new(None) };
    // Results handed over before init finished.
    static PENDING: RefCell<Option<SearchResult>> = const { RefCell::new(None) };
}

fn current_session() -> Option<SharedSession> {
    SESSION.with(|s| s.borrow().clone())
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sonic-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    dom::sync_canvas_backing_size(&canvas);
    notice::hide(&document);

    let reports = audio::ReportQueue::default();
    let sink = HtmlAudioSink::new(reports.clone())?;
    let session: SharedSession = Rc::new(RefCell::new(MapSession::new(
        sink,
        EngineConfig::default(),
    )?));
    if let Some(results) = PENDING.with(|p| p.borrow_mut().take()) {
        session.borrow_mut().replace_results(results);
    }
    SESSION.with(|s| *s.borrow_mut() = Some(session.clone()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        session: session.clone(),
    });
    events::wire_global_keydown(session.clone());

    let track_list = document.get_element_by_id(TRACK_LIST_ID);
    match &track_list {
        Some(list) => {
            let session_rows = session.clone();
            tracklist::wire_clicks(list, move |id| events::toggle_item(&session_rows, &id));
        }
        None => log::info!("[init] no #{}; track list disabled", TRACK_LIST_ID),
    }

    let painter = render::Painter::new(canvas)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        painter,
        reports,
        document,
        track_list,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Replace the displayed result set with a search response (JSON).
#[wasm_bindgen]
pub fn load_results(json: &str) -> Result<(), JsValue> {
    let results = SearchResult::from_json(json).map_err(to_js)?;
    match current_session() {
        Some(session) => session.borrow_mut().replace_results(results),
        None => PENDING.with(|p| *p.borrow_mut() = Some(results)),
    }
    Ok(())
}

/// Apply an engine configuration (JSON, partial allowed).
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = EngineConfig::from_json(json).map_err(to_js)?;
    let session = current_session().ok_or_else(|| JsValue::from_str("not initialized"))?;
    let result = session.borrow_mut().reconfigure(config);
    result.map_err(to_js)
}

/// Empty the map and stop any preview.
#[wasm_bindgen]
pub fn clear_results() {
    match current_session() {
        Some(session) => session.borrow_mut().replace_results(SearchResult::default()),
        None => PENDING.with(|p| *p.borrow_mut() = None),
    }
}

/// Stop the playing preview, if any.
#[wasm_bindgen]
pub fn stop_preview() {
    if let Some(session) = current_session() {
        session.borrow_mut().stop_playback();
    }
}
