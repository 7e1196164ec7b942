//! Stories carousel pagination dots.

use crate::dom;
use crate::error::Result;
use awaken_widgets::carousel::{CardGeometry, CarouselConfig, active_dot, dot_count, dot_label};
use awaken_widgets::dom_contract::{
    CAROUSEL, CAROUSEL_CARD, CAROUSEL_DOT, CAROUSEL_DOT_ACTIVE, CAROUSEL_NAV,
};
use std::rc::Rc;
use web_sys::{Document, Element, ScrollLogicalPosition};

fn geometry(cards: &[Element], gap: f64) -> CardGeometry {
    let origin = cards.first().map(dom::offset_left).unwrap_or(0.0);
    let offsets = cards.iter().map(|card| dom::offset_left(card) - origin).collect();
    let first_width = cards.first().map(dom::offset_width).unwrap_or(0.0);
    CardGeometry::from_measurements(offsets, first_width, gap)
}

fn build_dots(
    document: &Document,
    nav: &Element,
    cards: &Rc<Vec<Element>>,
    count: usize,
) -> Result<Vec<Element>> {
    nav.set_inner_html("");
    let mut dots = Vec::with_capacity(count);
    for i in 0..count {
        let dot = document.create_element("button")?;
        dot.set_class_name(CAROUSEL_DOT);
        dom::set_class(&dot, CAROUSEL_DOT_ACTIVE, i == 0);
        dot.set_attribute("aria-label", &dot_label(i))?;

        let cards = Rc::clone(cards);
        dom::listen(&dot, "click", move |_| {
            if let Some(card) = cards.get(i) {
                dom::scroll_into_view(
                    card,
                    ScrollLogicalPosition::Nearest,
                    Some(ScrollLogicalPosition::Start),
                );
            }
        })?;

        nav.append_child(&dot)?;
        dots.push(dot);
    }
    Ok(dots)
}

fn init_one(document: &Document, carousel: &Element, per_page: usize, gap: f64) -> Result<()> {
    let cards = dom::query_all_in(carousel, CAROUSEL_CARD);
    let nav = carousel
        .parent_element()
        .and_then(|parent| dom::query_in(&parent, CAROUSEL_NAV));
    let Some(nav) = nav else {
        return Ok(());
    };
    if cards.is_empty() {
        return Ok(());
    }

    let cards = Rc::new(cards);
    let count = dot_count(cards.len(), per_page);
    let dots = build_dots(document, &nav, &cards, count)?;

    let scroller = carousel.clone();
    dom::listen_passive(carousel, "scroll", move |_| {
        let scroll_left = f64::from(scroller.scroll_left());
        let active = active_dot(scroll_left, &geometry(&cards, gap), dots.len());
        for (i, dot) in dots.iter().enumerate() {
            dom::set_class(dot, CAROUSEL_DOT_ACTIVE, i == active);
        }
    })?;

    Ok(())
}

pub fn init(document: &Document, config: &CarouselConfig) -> Result<()> {
    let carousels = dom::query_all(document, CAROUSEL);
    if carousels.is_empty() {
        return Ok(());
    }
    let per_page = config.cards_per_page(dom::viewport_width(&dom::window()?));
    for (i, carousel) in carousels.iter().enumerate() {
        if let Err(e) = init_one(document, carousel, per_page, config.gap) {
            tracing::debug!("[awaken][carousel] #{} skipped: {}", i, e);
        }
    }
    Ok(())
}
