//! Scroll-triggered reveals via `IntersectionObserver`.

use crate::dom;
use crate::error::Result;
use awaken_widgets::dom_contract::REVEAL_TARGETS;
use awaken_widgets::reveal::{ObserverSettings, Reveal};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Add the visible marker if this element has not been revealed yet.
fn reveal(element: &Element, intersecting: bool) {
    let mut state = Reveal::from_classes(|class| dom::has_class(element, class));
    if let Some(class) = state.intersect(intersecting) {
        dom::set_class(element, class, true);
    }
}

pub fn init(document: &Document, settings: &ObserverSettings) -> Result<()> {
    let targets = dom::query_all(document, REVEAL_TARGETS);
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                reveal(&target, true);
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(settings.threshold));
    options.set_root_margin(&settings.root_margin);

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            // Without an observer nothing would ever become visible.
            tracing::debug!("[awaken][reveal] observer unavailable ({:?}), revealing all", e);
            for target in &targets {
                reveal(target, true);
            }
            return Ok(());
        }
    };
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    tracing::debug!("[awaken][reveal] observing {} element(s)", targets.len());
    Ok(())
}
