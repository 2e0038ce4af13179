use crate::core::Rect;
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not an HtmlElement: {:?}", e))
}

#[inline]
pub fn optional_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    element_by_id(document, id).ok()
}

#[inline]
pub fn optional_by_selector(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

/// `el`'s rect relative to `container`'s top-left.
#[inline]
pub fn local_rect(el: &web::Element, container: &Rect) -> Rect {
    client_rect(el).offset_by(-container.pos())
}

/// Page offset of `el` from the `offsetParent` chain. Transforms are ignored.
pub fn layout_offset(el: &web::HtmlElement) -> Vec2 {
    let mut offset = Vec2::ZERO;
    let mut node = Some(el.clone());
    while let Some(current) = node {
        offset += Vec2::new(current.offset_left() as f32, current.offset_top() as f32);
        node = current
            .offset_parent()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok());
    }
    offset
}

/// Untransformed border-box size of `el`.
#[inline]
pub fn layout_size(el: &web::HtmlElement) -> Vec2 {
    Vec2::new(el.offset_width() as f32, el.offset_height() as f32)
}

#[inline]
pub fn viewport_size() -> Vec2 {
    let w = web::window();
    let dim = |v: Option<Result<JsValue, JsValue>>| {
        v.and_then(|r| r.ok())
            .and_then(|j| j.as_f64())
            .unwrap_or(0.0) as f32
    };
    Vec2::new(
        dim(w.as_ref().map(|w| w.inner_width())),
        dim(w.as_ref().map(|w| w.inner_height())),
    )
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::HtmlElement, mut handler: impl FnMut() + 'static) {
    add_listener::<web::MouseEvent>(el, "click", true, move |_| handler());
}

/// `Element.animate` called reflectively so a browser without the Web
/// Animations API reports an error instead of trapping.
pub fn try_animate(
    el: &web::Element,
    keyframes: &js_sys::Array,
    options: &js_sys::Object,
) -> Result<(), JsValue> {
    let animate = js_sys::Reflect::get(el, &JsValue::from_str("animate"))?
        .dyn_into::<js_sys::Function>()?;
    animate.call2(el, keyframes, options)?;
    Ok(())
}

/// Plain `{key: value}` object for keyframes and animation options.
pub fn js_object(entries: &[(&str, JsValue)]) -> js_sys::Object {
    let obj = js_sys::Object::new();
    for (k, v) in entries {
        _ = js_sys::Reflect::set(&obj, &JsValue::from_str(k), v);
    }
    obj
}

/// Attribute overrides (`data-foo="bar"` → `("foo", "bar")`).
pub fn data_attributes(el: &web::Element, prefix: &str) -> Vec<(String, String)> {
    el.get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| {
            let key = name.strip_prefix(prefix)?.to_string();
            let value = el.get_attribute(&name)?;
            Some((key, value))
        })
        .collect()
}
