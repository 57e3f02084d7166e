use crate::lifecycle::PageState;
use crate::timers::{TaskHandle, Timers};
use decoy_core::{DecoyId, Session};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub type SharedSession = Rc<RefCell<Session<StdRng>>>;

/// Milliseconds since the page session started.
#[derive(Clone, Copy)]
pub struct Clock {
    started: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

/// Handles shared by every listener, timer and the frame loop.
#[derive(Clone)]
pub struct PageContext {
    pub session: SharedSession,
    pub timers: Timers,
    pub clock: Clock,
    pub lifecycle: Rc<Cell<PageState>>,

    pub document: web::Document,
    pub container: web::HtmlElement,
    pub confirm_button: web::HtmlElement,
    pub scene: Option<web::HtmlElement>,
    pub final_screen: Option<web::HtmlElement>,

    /// Decoy elements indexed by `DecoyId`.
    pub decoys: Rc<RefCell<Vec<web::HtmlElement>>>,
    /// Pending loader dismissal, if any.
    pub loader_task: Rc<Cell<Option<TaskHandle>>>,
}

impl PageContext {
    pub fn decoy_element(&self, id: DecoyId) -> Option<web::HtmlElement> {
        self.decoys.borrow().get(id.0).cloned()
    }

    /// False once the page has been unloaded. A page parked in the
    /// back/forward cache is still alive.
    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.lifecycle.get().is_closed()
    }
}
