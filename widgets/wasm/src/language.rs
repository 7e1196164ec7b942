//! Language switcher: persisted EN/RU text swap across annotated elements.

use crate::dom;
use crate::error::Result;
use crate::storage::locale_store;
use crate::typewriter::Typewriter;
use awaken_widgets::dom_contract::{
    LANG_TOGGLE, LANG_TOGGLE_ACTIVE, LANG_TOGGLE_ATTR, LOCALIZED, META_DESCRIPTION,
};
use awaken_widgets::locale::{LocaleVariants, Localized, TextSlot, swap_text, toggle_markers};
use awaken_widgets::storage::LocaleStore;
use awaken_widgets::typewriter::TypewriterTiming;
use awaken_widgets::{Locale, SiteConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::{Document, Element};

/// Page-lifetime holder of the active locale. Also owns the typewriter,
/// whose phrases follow the locale.
pub struct LanguageSwitcher {
    document: Document,
    store: Box<dyn LocaleStore>,
    current: Cell<Locale>,
    timing: TypewriterTiming,
    typewriter: RefCell<Typewriter>,
}

impl LanguageSwitcher {
    pub fn new(document: Document, store: Box<dyn LocaleStore>, config: &SiteConfig) -> Self {
        let current = store.restore(config.default_locale);
        Self {
            document,
            store,
            current: Cell::new(current),
            timing: config.typewriter.clone(),
            typewriter: RefCell::new(Typewriter::default()),
        }
    }

    pub fn current(&self) -> Locale {
        self.current.get()
    }

    /// Switch the whole page to `locale`.
    pub fn apply(&self, locale: Locale) {
        self.current.set(locale);
        self.store.persist(locale);

        for element in dom::query_all(&self.document, LOCALIZED) {
            swap_text(&Annotated(&element), locale);
        }

        let toggles = dom::query_all(&self.document, LANG_TOGGLE);
        let targets: Vec<Option<Locale>> = toggles.iter().map(toggle_locale).collect();
        for (toggle, active) in toggles.iter().zip(toggle_markers(&targets, locale)) {
            dom::set_class(toggle, LANG_TOGGLE_ACTIVE, active);
        }

        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("lang", locale.code());
        }

        if let Some(meta) = dom::query(&self.document, META_DESCRIPTION) {
            let variants = LocaleVariants::read(|name| meta.get_attribute(name));
            if let Some(content) = variants.meta_content(locale) {
                let _ = meta.set_attribute("content", content);
            }
        }

        self.restart_typewriter();
        tracing::debug!("[awaken][lang] applied {}", locale);
    }

    /// Recreate the typewriter for the current locale, disposing of the old
    /// instance first.
    pub fn restart_typewriter(&self) {
        let mut typewriter = self.typewriter.borrow_mut();
        if let Err(e) = typewriter.restart(&self.document, self.current(), &self.timing) {
            tracing::debug!("[awaken][typewriter] restart failed: {}", e);
        }
    }

    pub fn typewriter_running(&self) -> bool {
        self.typewriter.borrow().is_running()
    }
}

fn toggle_locale(toggle: &Element) -> Option<Locale> {
    toggle
        .get_attribute(LANG_TOGGLE_ATTR)
        .and_then(|code| code.parse().ok())
}

struct Annotated<'a>(&'a Element);

impl Localized for Annotated<'_> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn tag(&self) -> String {
        self.0.tag_name()
    }

    fn set_text(&self, slot: TextSlot, text: &str) {
        match slot {
            TextSlot::Placeholder => {
                let _ = self.0.set_attribute("placeholder", text);
            }
            TextSlot::Content => self.0.set_inner_html(text),
        }
    }
}

/// Report annotated elements lacking a translation.
fn validate_annotations(document: &Document) {
    let incomplete = dom::query_all(document, LOCALIZED)
        .iter()
        .filter(|el| !LocaleVariants::read(|name| el.get_attribute(name)).missing().is_empty())
        .count();
    if incomplete > 0 {
        tracing::debug!(
            "[awaken][lang] {} element(s) miss a translation and keep their text on switch",
            incomplete
        );
    }
}

/// Restore the persisted locale, apply it, and wire the toggles.
pub fn init(document: &Document, config: &SiteConfig) -> Result<Rc<LanguageSwitcher>> {
    let window = dom::window()?;
    let store = locale_store(&window, &config.storage_key);
    let switcher = Rc::new(LanguageSwitcher::new(document.clone(), store, config));

    validate_annotations(document);
    switcher.apply(switcher.current());

    for toggle in dom::query_all(document, LANG_TOGGLE) {
        let Some(locale) = toggle_locale(&toggle) else {
            tracing::debug!("[awaken][lang] toggle without a known data-lang, skipped");
            continue;
        };
        let switcher = Rc::clone(&switcher);
        dom::listen(&toggle, "click", move |_| switcher.apply(locale))?;
    }

    Ok(switcher)
}
