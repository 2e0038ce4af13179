use crate::core::{AmbientHeart, Session};
use crate::stage::Stage;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds since the page session started; drives the timeline.
#[derive(Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Shared handles every event closure captures.
#[derive(Clone)]
pub struct App {
    pub session: Rc<RefCell<Session>>,
    pub stage: Rc<Stage>,
    pub clock: Clock,
}

impl App {
    /// Apply every cue due by now. Called after each handled event and once per frame.
    pub fn flush(&self) {
        let cues = self.session.borrow_mut().advance(self.clock.now_ms());
        for cue in cues {
            self.stage.apply(cue);
        }
    }
}

pub struct FrameContext {
    pub app: App,
    pub ambient: Vec<(web::HtmlElement, AmbientHeart)>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.app.flush();
        let elapsed_sec = (self.app.clock.now_ms() / 1000.0) as f32;
        for (el, heart) in &self.ambient {
            crate::dom::set_style(
                el,
                "transform",
                &format!("translateX({}px)", heart.drift_px(elapsed_sec)),
            );
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
