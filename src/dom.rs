use crate::style::px;
use decoy_core::{Rect, Viewport};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn create_html(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> Result<web::HtmlElement, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>().map_err(JsValue::from)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Absolute placement via `left`/`top`.
#[inline]
pub fn place_at(el: &web::HtmlElement, p: Vec2) {
    set_style(el, "left", &px(p.x));
    set_style(el, "top", &px(p.y));
}

pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn element_center(el: &web::Element) -> Vec2 {
    element_rect(el).center()
}

#[inline]
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    add_listener(el, "click", move |_: web::Event| handler());
}

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1(crate::constants::HIDDEN_CLASS);
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1(crate::constants::HIDDEN_CLASS);
}
