//! Single-open accordions.

use crate::dom;
use crate::error::Result;
use awaken_widgets::accordion::{AccordionPlan, COLLAPSED_HEIGHT, expanded_height};
use awaken_widgets::dom_contract::{
    ACCORDION, ACCORDION_CONTENT, ACCORDION_ITEM, ACCORDION_ITEM_OPEN, ACCORDION_TRIGGER,
};
use web_sys::{Document, Element, Node};

/// Items that belong to `group` itself, not to an accordion nested inside it.
fn group_items(group: &Element) -> Vec<Element> {
    let group_node: &Node = group;
    dom::query_all_in(group, ACCORDION_ITEM)
        .into_iter()
        .filter(|item| {
            dom::closest(item, ACCORDION)
                .map(|owner| owner.is_same_node(Some(group_node)))
                .unwrap_or(false)
        })
        .collect()
}

fn set_open(item: &Element, open: bool) {
    dom::set_class(item, ACCORDION_ITEM_OPEN, open);
    if let Some(content) = dom::query_in(item, ACCORDION_CONTENT) {
        let height = if open {
            expanded_height(f64::from(content.scroll_height()))
        } else {
            COLLAPSED_HEIGHT.to_string()
        };
        dom::set_style(&content, "max-height", &height);
    }
}

fn on_trigger(trigger: &Element) {
    let Some(item) = dom::closest(trigger, ACCORDION_ITEM) else {
        return;
    };
    // An item outside any `.accordion` is its own group.
    let items = match dom::closest(&item, ACCORDION) {
        Some(group) => group_items(&group),
        None => vec![item.clone()],
    };
    let item_node: &Node = &item;
    let Some(clicked) = items.iter().position(|el| el.is_same_node(Some(item_node))) else {
        return;
    };

    let open_flags: Vec<bool> = items
        .iter()
        .map(|el| dom::has_class(el, ACCORDION_ITEM_OPEN))
        .collect();
    let plan = AccordionPlan::for_click(&open_flags, clicked);

    for i in &plan.close {
        set_open(&items[*i], false);
    }
    if let Some(i) = plan.open {
        set_open(&items[i], true);
    }
}

pub fn init(document: &Document) -> Result<()> {
    for trigger in dom::query_all(document, ACCORDION_TRIGGER) {
        let this = trigger.clone();
        dom::listen(&trigger, "click", move |_| on_trigger(&this))?;
    }
    Ok(())
}
