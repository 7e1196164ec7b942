//! Navigation dropdowns.

use crate::dom;
use crate::error::Result;
use awaken_widgets::dom_contract::{DROPDOWN, DROPDOWN_OPEN, DROPDOWN_TRIGGER};
use awaken_widgets::dropdown::DropdownState;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

fn state(dropdown: &Element) -> DropdownState {
    DropdownState::from_open(dom::has_class(dropdown, DROPDOWN_OPEN))
}

pub fn init(document: &Document, breakpoint: f64) -> Result<()> {
    let dropdowns = Rc::new(dom::query_all(document, DROPDOWN));
    if dropdowns.is_empty() {
        return Ok(());
    }
    let window = dom::window()?;

    for dropdown in dropdowns.iter() {
        let Some(trigger) = dom::query_in(dropdown, DROPDOWN_TRIGGER) else {
            continue;
        };
        let dropdown = dropdown.clone();
        let window = window.clone();
        dom::listen(&trigger, "click", move |event| {
            let width = dom::viewport_width(&window);
            if let Some(next) = state(&dropdown).on_trigger(width, breakpoint) {
                event.prevent_default();
                dom::set_class(&dropdown, DROPDOWN_OPEN, next.is_open());
            }
        })?;
    }

    dom::listen(document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        for dropdown in dropdowns.iter() {
            let inside = dropdown.contains(target.as_ref());
            let next = state(dropdown).on_document_click(inside);
            dom::set_class(dropdown, DROPDOWN_OPEN, next.is_open());
        }
    })?;

    Ok(())
}
