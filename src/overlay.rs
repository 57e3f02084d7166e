use crate::constants::*;
use crate::context::PageContext;
use crate::dom;
use crate::style::{ms, px, rotate, rotate_scale};
use decoy_core::{Artifact, ArtifactKind, Heart, Sticker};
use wasm_bindgen::JsValue;
use web_sys as web;

fn artifact_element(
    document: &web::Document,
    kind: &ArtifactKind,
) -> Result<web::HtmlElement, JsValue> {
    match kind {
        ArtifactKind::Image {
            src,
            rotation_deg,
            scale,
        } => {
            let img = dom::create_html(document, "img", POPUP_IMAGE_CLASS)?;
            img.set_attribute("src", src)?;
            img.set_attribute("alt", "")?;
            dom::set_style(&img, "transform", &rotate_scale(*rotation_deg, *scale));
            Ok(img)
        }
        ArtifactKind::Phrase { text } => {
            let div = dom::create_html(document, "div", PHRASE_CLASS)?;
            div.set_text_content(Some(text));
            Ok(div)
        }
    }
}

/// Show a vanish popup and schedule its removal after its lifetime.
pub fn spawn_artifact(ctx: &PageContext, artifact: &Artifact) {
    let el = match artifact_element(&ctx.document, &artifact.kind) {
        Ok(el) => el,
        Err(e) => {
            log::error!("[overlay] artifact element error: {:?}", e);
            return;
        }
    };
    dom::place_at(&el, artifact.position);
    dom::set_style(&el, "z-index", &artifact.z_index.to_string());
    _ = ctx.container.append_child(&el);
    ctx.timers.after(artifact.lifetime_ms, move || el.remove());
}

pub fn spawn_sticker(ctx: &PageContext, parent: &web::HtmlElement, sticker: &Sticker) {
    let img = match dom::create_html(&ctx.document, "img", STICKER_CLASS) {
        Ok(el) => el,
        Err(e) => {
            log::error!("[overlay] sticker element error: {:?}", e);
            return;
        }
    };
    _ = img.set_attribute("src", &sticker.src);
    _ = img.set_attribute("alt", "");
    dom::place_at(&img, glam::Vec2::new(sticker.rect.x, sticker.rect.y));
    dom::set_style(&img, "width", &px(sticker.rect.width));
    dom::set_style(&img, "height", &px(sticker.rect.height));
    dom::set_style(&img, "transform", &rotate(sticker.rotation_deg));
    _ = parent.append_child(&img);
}

/// Rising heart; CSS animates it using `--sway` and the animation duration.
pub fn spawn_heart(ctx: &PageContext, parent: &web::HtmlElement, heart: &Heart, z_index: u32) {
    let el = match dom::create_html(&ctx.document, "div", HEART_CLASS) {
        Ok(el) => el,
        Err(e) => {
            log::error!("[overlay] heart element error: {:?}", e);
            return;
        }
    };
    el.set_text_content(Some(HEART_GLYPH));
    dom::set_style(&el, "left", &px(heart.x));
    dom::set_style(&el, "font-size", &px(heart.size));
    dom::set_style(&el, "animation-duration", &ms(heart.rise_ms));
    dom::set_style(&el, "--sway", &px(heart.sway));
    dom::set_style(&el, "z-index", &z_index.to_string());
    _ = parent.append_child(&el);
    ctx.timers.after(heart.rise_ms, move || el.remove());
}
