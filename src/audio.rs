use sonic_core::{MediaSink, PlayTicket, PlaybackError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Asynchronous outcome of a start request, queued for the frame loop.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackReport {
    Started(PlayTicket),
    Rejected(PlayTicket, String),
    Ended(PlayTicket),
}

pub type ReportQueue = Rc<RefCell<Vec<PlaybackReport>>>;

/// The page's single `<audio>` element, owned by the playback controller.
pub struct HtmlAudioSink {
    element: web::HtmlAudioElement,
    current: Rc<RefCell<Option<PlayTicket>>>,
    reports: ReportQueue,
}

impl HtmlAudioSink {
    pub fn new(reports: ReportQueue) -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        element.set_preload("none");
        let current = Rc::new(RefCell::new(None));
        wire_ended(&element, current.clone(), reports.clone());
        Ok(Self {
            element,
            current,
            reports,
        })
    }
}

fn wire_ended(
    element: &web::HtmlAudioElement,
    current: Rc<RefCell<Option<PlayTicket>>>,
    reports: ReportQueue,
) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(ticket) = current.borrow_mut().take() {
            reports.borrow_mut().push(PlaybackReport::Ended(ticket));
        }
    }) as Box<dyn FnMut()>);
    _ = element.add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
    closure.forget();
}

// DOMException name when available ("NotAllowedError", "NotSupportedError", ...)
fn js_error_name(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

impl MediaSink for HtmlAudioSink {
    fn set_source(&mut self, url: &str) {
        self.element.set_src(url);
    }

    fn set_volume(&mut self, volume: f32) {
        self.element.set_volume(f64::from(volume));
    }

    fn play(&mut self, ticket: &PlayTicket) -> Result<(), PlaybackError> {
        let promise = self
            .element
            .play()
            .map_err(|e| PlaybackError::Rejected(js_error_name(&e)))?;
        *self.current.borrow_mut() = Some(ticket.clone());

        let reports = self.reports.clone();
        let ticket = ticket.clone();
        spawn_local(async move {
            let report = match JsFuture::from(promise).await {
                Ok(_) => PlaybackReport::Started(ticket),
                Err(e) => PlaybackReport::Rejected(ticket, js_error_name(&e)),
            };
            reports.borrow_mut().push(report);
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            log::warn!("[audio] pause failed: {:?}", e);
        }
        *self.current.borrow_mut() = None;
    }
}
