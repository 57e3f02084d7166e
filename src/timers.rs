//! Timeout and interval tasks that can be cancelled as a group.
//!
//! Each task owns its `Closure`, keyed by the browser timer handle. Finished
//! and cancelled tasks are only dropped by `reap` (called from the frame
//! loop) or `cancel_all`, never from inside a running timer callback.

use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TaskKind {
    Timeout,
    Interval,
}

struct Task {
    kind: TaskKind,
    _closure: Closure<dyn FnMut()>,
}

#[derive(Default)]
struct Registry {
    tasks: FnvHashMap<i32, Task>,
    finished: Vec<i32>,
    torn_down: bool,
}

#[derive(Clone, Default)]
pub struct Timers {
    inner: Rc<RefCell<Registry>>,
}

fn mark_finished(registry: &Weak<RefCell<Registry>>, slot: &Cell<Option<i32>>) {
    if let (Some(id), Some(reg)) = (slot.get(), registry.upgrade()) {
        reg.borrow_mut().finished.push(id);
    }
}

fn clear(kind: TaskKind, id: i32) {
    if let Some(w) = web::window() {
        match kind {
            TaskKind::Timeout => w.clear_timeout_with_handle(id),
            TaskKind::Interval => w.clear_interval_with_handle(id),
        }
    }
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` once after `delay_ms`.
    pub fn after(&self, delay_ms: u32, f: impl FnOnce() + 'static) -> Option<TaskHandle> {
        if self.inner.borrow().torn_down {
            return None;
        }
        let window = web::window()?;
        let slot = Rc::new(Cell::new(None));
        let slot_cb = slot.clone();
        let registry = Rc::downgrade(&self.inner);
        let mut f = Some(f);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
            mark_finished(&registry, &slot_cb);
        }) as Box<dyn FnMut()>);
        let id = match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms as i32,
        ) {
            Ok(id) => id,
            Err(e) => {
                log::error!("[timers] setTimeout failed: {:?}", e);
                return None;
            }
        };
        slot.set(Some(id));
        self.inner.borrow_mut().tasks.insert(
            id,
            Task {
                kind: TaskKind::Timeout,
                _closure: closure,
            },
        );
        Some(TaskHandle(id))
    }

    /// Run `f` every `interval_ms` until it returns `ControlFlow::Break`.
    pub fn every(
        &self,
        interval_ms: u32,
        mut f: impl FnMut() -> ControlFlow<()> + 'static,
    ) -> Option<TaskHandle> {
        if self.inner.borrow().torn_down {
            return None;
        }
        let window = web::window()?;
        let slot = Rc::new(Cell::new(None));
        let slot_cb = slot.clone();
        let registry = Rc::downgrade(&self.inner);
        let closure = Closure::wrap(Box::new(move || {
            if f().is_break() {
                if let Some(id) = slot_cb.get() {
                    clear(TaskKind::Interval, id);
                }
                mark_finished(&registry, &slot_cb);
            }
        }) as Box<dyn FnMut()>);
        let id = match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms as i32,
        ) {
            Ok(id) => id,
            Err(e) => {
                log::error!("[timers] setInterval failed: {:?}", e);
                return None;
            }
        };
        slot.set(Some(id));
        self.inner.borrow_mut().tasks.insert(
            id,
            Task {
                kind: TaskKind::Interval,
                _closure: closure,
            },
        );
        Some(TaskHandle(id))
    }

    pub fn cancel(&self, handle: TaskHandle) {
        let mut reg = self.inner.borrow_mut();
        if let Some(kind) = reg.tasks.get(&handle.0).map(|t| t.kind) {
            clear(kind, handle.0);
            reg.finished.push(handle.0);
        }
    }

    /// Drop the closures of tasks that have fired or been cancelled.
    pub fn reap(&self) {
        let mut reg = self.inner.borrow_mut();
        if reg.finished.is_empty() {
            return;
        }
        let finished = std::mem::take(&mut reg.finished);
        for id in finished {
            reg.tasks.remove(&id);
        }
    }

    /// Clear every outstanding timer and refuse new ones.
    pub fn cancel_all(&self) {
        let tasks = {
            let mut reg = self.inner.borrow_mut();
            reg.torn_down = true;
            reg.finished.clear();
            std::mem::take(&mut reg.tasks)
        };
        let count = tasks.len();
        for (id, task) in &tasks {
            clear(task.kind, *id);
        }
        drop(tasks);
        log::info!("[timers] cancelled {} tasks", count);
    }
}
