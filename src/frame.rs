use crate::constants::clamp_frame_step;
use crate::dom;
use crate::overlay;
use crate::render::CanvasSurface;
use heart_core::{Cue, Director};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub director: Rc<RefCell<Director>>,
    pub surface: CanvasSurface,
    pub document: web::Document,
    pub stopped: Rc<Cell<bool>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = clamp_frame_step(now - self.last_instant);
        self.last_instant = now;

        let cues = self.director.borrow_mut().advance(dt, &mut self.surface);
        for cue in cues {
            apply_cue(&self.document, cue);
        }
    }
}

pub fn apply_cue(document: &web::Document, cue: Cue) {
    match cue {
        Cue::ShowMessage => overlay::show_message(document),
        Cue::HideMessage => overlay::hide_message(document),
        Cue::SetBackground(path) => dom::set_body_background(document, &path),
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until its stop flag is set.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let stopped = frame_ctx.borrow().stopped.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if stopped.get() {
            log::info!("frame loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
