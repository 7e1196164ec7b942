//! Smooth scrolling for in-page anchors.

use crate::dom;
use crate::error::Result;
use awaken_widgets::dom_contract::ANCHOR_LINK;
use awaken_widgets::smooth_scroll::fragment_id;
use web_sys::{Document, ScrollLogicalPosition};

pub fn init(document: &Document) -> Result<()> {
    for anchor in dom::query_all(document, ANCHOR_LINK) {
        let document = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let target = fragment_id(&href).and_then(|id| document.get_element_by_id(id));
            // Unresolvable fragments keep the browser default.
            if let Some(target) = target {
                event.prevent_default();
                dom::scroll_into_view(&target, ScrollLogicalPosition::Start, None);
            }
        })?;
    }
    Ok(())
}
