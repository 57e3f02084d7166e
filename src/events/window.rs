use crate::context::PageContext;
use crate::dom;
use web_sys as web;

/// Recompute the viewport and safe zone; decoys pushed into the new zone are
/// moved back out.
pub fn sync_layout(ctx: &PageContext) {
    let Some(window) = web::window() else {
        return;
    };
    let viewport = dom::viewport(&window);
    let center = dom::element_center(&ctx.confirm_button);
    let moved = {
        let mut s = ctx.session.borrow_mut();
        s.resize(viewport);
        s.set_safe_center(center)
    };
    for (id, anchor) in moved {
        if let Some(el) = ctx.decoy_element(id) {
            dom::place_at(&el, anchor);
        }
    }
}

pub fn wire_resize(ctx: &PageContext) {
    let Some(window) = web::window() else {
        return;
    };
    let ctx = ctx.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        if ctx.is_alive() {
            sync_layout(&ctx);
        }
    });
}

/// Session teardown when the page is unloaded. A page that goes into the
/// back/forward cache keeps its session and resumes on `pageshow`.
pub fn wire_teardown(ctx: &PageContext) {
    let Some(window) = web::window() else {
        return;
    };
    let ctx_show = ctx.clone();
    dom::add_listener(&window, "pageshow", move |_: web::PageTransitionEvent| {
        let state = ctx_show.lifecycle.get();
        let next = state.on_pageshow();
        if next != state {
            log::info!("[session] restored from back/forward cache");
        }
        ctx_show.lifecycle.set(next);
    });
    let ctx = ctx.clone();
    dom::add_listener(&window, "pagehide", move |ev: web::PageTransitionEvent| {
        let state = ctx.lifecycle.get();
        let next = state.on_pagehide(ev.persisted());
        ctx.lifecycle.set(next);
        if state.is_closed() || !next.is_closed() {
            return;
        }
        ctx.timers.cancel_all();
        let stats = ctx.session.borrow().stats();
        log::info!(
            "[session] teardown: {} relocations, {} vanishes",
            stats.relocations,
            stats.vanishes
        );
    });
}

/// Hide the loader, if the page has one, once the session is running.
pub fn dismiss_loader(ctx: &PageContext) {
    let Some(loader) = dom::html_by_id(&ctx.document, crate::constants::LOADER_ID) else {
        return;
    };
    let delay = ctx.session.borrow().config().loader_delay_ms;
    let task = ctx.timers.after(delay, move || dom::hide(&loader));
    ctx.loader_task.set(task);
}

/// Drop a pending loader dismissal and hide the loader right away.
pub fn hide_loader_now(ctx: &PageContext) {
    if let Some(task) = ctx.loader_task.take() {
        ctx.timers.cancel(task);
    }
    if let Some(loader) = dom::html_by_id(&ctx.document, crate::constants::LOADER_ID) {
        dom::hide(&loader);
    }
}
