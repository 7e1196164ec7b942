//! Header scroll state and hero padding.

use crate::dom;
use crate::error::Result;
use awaken_widgets::dom_contract::{HEADER, HERO};
use awaken_widgets::header::{HeaderState, hero_padding};
use web_sys::{Document, Element, Window};

fn sync_hero_padding(document: &Document, header: &Element) {
    if let Some(hero) = dom::query(document, HERO) {
        dom::set_style(&hero, "padding-top", &hero_padding(dom::offset_height(header)));
    }
}

fn sync_state(window: &Window, header: &Element, threshold: f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    for (class, present) in HeaderState::from_scroll(scroll_y, threshold).markers() {
        dom::set_class(header, class, present);
    }
}

pub fn init(document: &Document, threshold: f64) -> Result<()> {
    let Some(header) = dom::query(document, HEADER) else {
        return Ok(());
    };
    let window = dom::window()?;

    sync_hero_padding(document, &header);
    {
        let document = document.clone();
        let header = header.clone();
        dom::listen(&window, "resize", move |_| sync_hero_padding(&document, &header))?;
    }

    sync_state(&window, &header, threshold);
    let scroll_window = window.clone();
    dom::listen_passive(&window, "scroll", move |_| {
        sync_state(&scroll_window, &header, threshold)
    })?;

    Ok(())
}
