//! Thin helpers over `web-sys` shared by every widget.

use crate::error::{DomError, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All matches of `selector` in the document. An invalid selector yields nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_class(element: &Element, class: &str, present: bool) {
    let _ = element.class_list().toggle_with_force(class, present);
}

/// Set an inline style property on an element that is an `HtmlElement`.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn offset_height(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0)
}

pub fn offset_width(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| f64::from(el.offset_width()))
        .unwrap_or(0.0)
}

pub fn offset_left(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| f64::from(el.offset_left()))
        .unwrap_or(0.0)
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Smooth `scrollIntoView`.
pub fn scroll_into_view(
    element: &Element,
    block: ScrollLogicalPosition,
    inline: Option<ScrollLogicalPosition>,
) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    if let Some(inline) = inline {
        options.set_inline(inline);
    }
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Attach `handler` for the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget(); // Keep the closure alive
    Ok(())
}

/// Like [`listen`], registered as passive (scroll/resize).
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}
