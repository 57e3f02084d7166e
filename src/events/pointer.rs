use crate::constants::VANISHED_CLASS;
use crate::context::PageContext;
use crate::dom;
use crate::overlay;
use crate::reveal;
use decoy_core::{ContactOutcome, DecoyId};
use web_sys as web;

/// Pointer-down on a decoy drives its evasion state machine.
pub fn wire_decoy(ctx: &PageContext, id: DecoyId, el: &web::HtmlElement) {
    let ctx = ctx.clone();
    dom::add_listener(el, "pointerdown", move |ev: web::PointerEvent| {
        ev.prevent_default();
        if !ctx.is_alive() {
            return;
        }
        let now = ctx.clock.now_ms();
        let outcome = ctx.session.borrow_mut().contact(id, now);
        handle_contact(&ctx, outcome);
    });
}

fn handle_contact(ctx: &PageContext, outcome: ContactOutcome) {
    match outcome {
        ContactOutcome::Escaped {
            id,
            to,
            escape_count,
            ..
        } => {
            if let Some(el) = ctx.decoy_element(id) {
                dom::place_at(&el, to);
            }
            log::debug!("[decoy] {} escaped ({})", id.0, escape_count);
        }
        ContactOutcome::Vanished { id, artifact } => {
            if let Some(el) = ctx.decoy_element(id) {
                _ = el.class_list().add_1(VANISHED_CLASS);
                dom::set_style(&el, "pointer-events", "none");
            }
            overlay::spawn_artifact(ctx, &artifact);
        }
        ContactOutcome::Ignored => {}
    }
}

pub fn wire_confirm(ctx: &PageContext) {
    let ctx_click = ctx.clone();
    dom::add_click_listener(&ctx.confirm_button, move || {
        if ctx_click.is_alive() {
            reveal::begin(&ctx_click);
        }
    });
}
