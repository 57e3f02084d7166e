#![cfg(target_arch = "wasm32")]
use crate::context::{Clock, PageContext};
use decoy_core::Session;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod context;
mod dom;
mod events;
mod frame;
mod lifecycle;
mod overlay;
mod reveal;
mod settings;
mod style;
mod timers;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("decoy-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn create_decoys(ctx: &PageContext) -> anyhow::Result<()> {
    let ids = ctx.session.borrow_mut().populate();
    let mut elements = Vec::with_capacity(ids.len());
    for id in ids {
        let (label, anchor) = {
            let s = ctx.session.borrow();
            let d = s
                .registry()
                .get(id)
                .ok_or_else(|| anyhow::anyhow!("decoy {} missing", id.0))?;
            (d.label.clone(), d.anchor)
        };
        let btn = dom::create_html(&ctx.document, "button", DECOY_CLASS)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        btn.set_text_content(Some(&label));
        dom::place_at(&btn, anchor);
        events::wire_decoy(ctx, id, &btn);
        ctx.container
            .append_child(&btn)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        elements.push(btn);
    }
    *ctx.decoys.borrow_mut() = elements;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = dom::html_by_id(&document, DECOY_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", DECOY_CONTAINER_ID))?;
    let confirm_button = dom::query_html(&document, CONFIRM_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("missing {}", CONFIRM_SELECTOR))?;
    let scene = dom::query_html(&document, SCENE_SELECTOR);
    let final_screen = dom::html_by_id(&document, FINAL_SCREEN_ID);

    let config = settings::read_config(&container);
    let catalogs = settings::read_catalogs(&container);
    let viewport = dom::viewport(&window);
    let safe_center = dom::element_center(&confirm_button);

    let session = Session::new(
        config,
        viewport,
        safe_center,
        catalogs,
        StdRng::from_entropy(),
    )?;

    let ctx = PageContext {
        session: Rc::new(RefCell::new(session)),
        timers: timers::Timers::new(),
        clock: Clock::start(),
        lifecycle: Rc::new(Cell::new(lifecycle::PageState::Live)),
        document,
        container,
        confirm_button,
        scene,
        final_screen,
        decoys: Rc::new(RefCell::new(Vec::new())),
        loader_task: Rc::new(Cell::new(None)),
    };

    create_decoys(&ctx)?;
    events::wire_confirm(&ctx);
    events::wire_resize(&ctx);
    events::wire_teardown(&ctx);
    events::dismiss_loader(&ctx);

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(ctx))));
    Ok(())
}
