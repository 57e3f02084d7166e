use crate::context::PageContext;
use crate::dom;
use crate::style::translate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub page: PageContext,
    pub frames: u64,
}

impl FrameContext {
    pub fn new(page: PageContext) -> Self {
        Self { page, frames: 0 }
    }

    /// Apply the drift transform to every active decoy. Anchors are left
    /// untouched; only the CSS transform moves.
    pub fn frame(&mut self) {
        self.frames += 1;
        let elapsed_ms = self.page.clock.now_ms();
        {
            let session = self.page.session.borrow();
            let decoys = self.page.decoys.borrow();
            for (id, offset) in session.drift_offsets(elapsed_ms) {
                if let Some(el) = decoys.get(id.0) {
                    dom::set_style(el, "transform", &translate(offset));
                }
            }
        }
        self.page.timers.reap();
    }
}

/// Drive `FrameContext::frame` from `requestAnimationFrame` until the session
/// is torn down.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow().page.is_alive() {
            log::info!(
                "[frame] loop stopped after {} frames",
                frame_ctx_tick.borrow().frames
            );
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
