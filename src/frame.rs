use crate::audio::{PlaybackReport, ReportQueue};
use crate::dom;
use crate::notice;
use crate::render::Painter;
use crate::tracklist;
use crate::SharedSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: SharedSession,
    pub painter: Painter,
    pub reports: ReportQueue,
    pub document: web::Document,
    pub track_list: Option<web::Element>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.drain_reports();

        let resized = dom::sync_canvas_backing_size(self.painter.canvas());
        let dirty = self.session.borrow_mut().take_dirty();
        if !dirty && !resized {
            return;
        }

        let session = self.session.borrow();
        let desc = session.render();
        self.painter.paint(&desc);
        if dirty {
            if let Some(list) = &self.track_list {
                let seed_label = &session.config().style.seed_label;
                tracklist::render(&self.document, list, &desc.tracks, seed_label);
            }
        }
    }

    fn drain_reports(&mut self) {
        let reports = std::mem::take(&mut *self.reports.borrow_mut());
        if reports.is_empty() {
            return;
        }
        let mut session = self.session.borrow_mut();
        for report in reports {
            match report {
                PlaybackReport::Started(ticket) => {
                    session.on_play_started(&ticket);
                }
                PlaybackReport::Rejected(ticket, reason) => {
                    if session.on_play_rejected(&ticket, &reason) {
                        notice::show(&self.document, &format!("Playback failed: {reason}"));
                    }
                }
                PlaybackReport::Ended(ticket) => {
                    session.on_play_ended(&ticket);
                }
            }
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
