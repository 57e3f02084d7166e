use crate::constants::*;
use crate::context::PageContext;
use crate::dom;
use crate::events;
use crate::overlay;
use decoy_core::Rect;
use std::ops::ControlFlow;
use web_sys as web;

/// Confirmation: fade the scene, then reveal the final screen after the fade
/// delay. Later clicks are ignored by the session.
pub fn begin(ctx: &PageContext) {
    let now = ctx.clock.now_ms();
    let (started, fade_delay_ms) = {
        let mut s = ctx.session.borrow_mut();
        (s.confirm(now), s.config().fade_delay_ms)
    };
    if !started {
        return;
    }
    events::hide_loader_now(ctx);
    if let Some(scene) = &ctx.scene {
        dom::set_style(scene, "opacity", SCENE_FADE_OPACITY);
    }
    let ctx_reveal = ctx.clone();
    ctx.timers.after(fade_delay_ms, move || finish(&ctx_reveal));
}

fn finish(ctx: &PageContext) {
    let now = ctx.clock.now_ms();
    let remaining = ctx.session.borrow_mut().fade_remaining_ms(now);
    if remaining > 0 {
        log::debug!("[reveal] fade timer fired early, {} ms left", remaining);
        let ctx_retry = ctx.clone();
        ctx.timers.after(remaining, move || finish(&ctx_retry));
        return;
    }
    let Some(screen) = ctx.final_screen.clone() else {
        log::warn!("[reveal] missing #{}", FINAL_SCREEN_ID);
        return;
    };
    dom::show(&screen);
    place_stickers(ctx, &screen);
    start_hearts(ctx, screen);
    log::info!("[reveal] final screen shown");
}

fn place_stickers(ctx: &PageContext, screen: &web::HtmlElement) {
    let screen_rect = dom::element_rect(screen);
    let bounds = Rect::new(0.0, 0.0, screen_rect.width, screen_rect.height);
    // text block in screen-local coordinates
    let text_block = dom::query_html(&ctx.document, FINAL_TEXT_SELECTOR)
        .map(|el| {
            let r = dom::element_rect(&el);
            Rect::new(r.x - screen_rect.x, r.y - screen_rect.y, r.width, r.height)
        })
        .unwrap_or(Rect::new(bounds.width * 0.5, bounds.height * 0.5, 0.0, 0.0));
    let plan = ctx.session.borrow_mut().plan_stickers(bounds, text_block);
    for sticker in &plan {
        overlay::spawn_sticker(ctx, screen, sticker);
    }
    log::debug!("[reveal] {} stickers placed", plan.len());
}

fn start_hearts(ctx: &PageContext, screen: web::HtmlElement) {
    let (mut spawner, interval_ms) = {
        let s = ctx.session.borrow();
        (
            s.heart_spawner(ctx.clock.now_ms()),
            s.config().reveal.heart_interval_ms,
        )
    };
    let ctx_tick = ctx.clone();
    ctx.timers.every(interval_ms, move || {
        let now = ctx_tick.clock.now_ms();
        let next = {
            let mut s = ctx_tick.session.borrow_mut();
            s.next_heart(&mut spawner, now).map(|h| (h, s.next_z()))
        };
        match next {
            Some((heart, z)) => {
                overlay::spawn_heart(&ctx_tick, &screen, &heart, z);
                ControlFlow::Continue(())
            }
            None => {
                log::debug!("[reveal] heart spawner done after {}", spawner.emitted());
                ControlFlow::Break(())
            }
        }
    });
}
