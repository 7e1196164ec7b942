//! Mobile slide-out menu with body scroll lock.

use crate::dom;
use crate::error::Result;
use awaken_widgets::dom_contract::{HAMBURGER, HAMBURGER_OPEN, MOBILE_MENU, MOBILE_MENU_OPEN};
use awaken_widgets::menu::MenuState;
use std::rc::Rc;
use web_sys::{Document, Element};

struct MobileMenu {
    document: Document,
    hamburger: Element,
    panel: Element,
}

impl MobileMenu {
    fn state(&self) -> MenuState {
        MenuState::from_open(dom::has_class(&self.panel, MOBILE_MENU_OPEN))
    }

    fn render(&self, state: MenuState) {
        dom::set_class(&self.hamburger, HAMBURGER_OPEN, state.is_open());
        dom::set_class(&self.panel, MOBILE_MENU_OPEN, state.is_open());
        if let Some(body) = self.document.body() {
            let _ = body.style().set_property("overflow", state.body_overflow());
        }
    }
}

pub fn init(document: &Document) -> Result<()> {
    let (Some(hamburger), Some(panel)) = (
        dom::query(document, HAMBURGER),
        dom::query(document, MOBILE_MENU),
    ) else {
        return Ok(());
    };
    let menu = Rc::new(MobileMenu {
        document: document.clone(),
        hamburger: hamburger.clone(),
        panel: panel.clone(),
    });

    {
        let menu = menu.clone();
        dom::listen(&hamburger, "click", move |_| {
            menu.render(menu.state().toggled())
        })?;
    }

    for link in dom::query_all_in(&panel, "a") {
        let menu = menu.clone();
        dom::listen(&link, "click", move |_| menu.render(menu.state().closed()))?;
    }

    Ok(())
}
