//! WASM entry point for the Awaken with Amelia site widgets.
//!
//! The page ships plain HTML annotated with marker classes and `data-en` /
//! `data-ru` attributes. This module enhances it once the document is ready:
//! every widget is wired independently, and a widget whose markup is missing
//! is skipped without affecting the others.
//!
//! Uses the state machines from `awaken-widgets` and only adds the DOM glue.

use awaken_widgets::dom_contract::CONFIG_SCRIPT_ID;
use awaken_widgets::{Locale, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub mod accordion;
pub mod carousel;
pub mod dom;
pub mod dropdown;
pub mod error;
pub mod header;
pub mod language;
pub mod logging;
pub mod menu;
pub mod reveal;
pub mod smooth_scroll;
pub mod storage;
pub mod typewriter;

pub use error::DomError;
pub use language::LanguageSwitcher;

thread_local! {
    static SWITCHER: RefCell<Option<Rc<LanguageSwitcher>>> = const { RefCell::new(None) };
}

/// Configuration embedded in the page; defaults when there is none.
pub fn page_config(document: &Document) -> error::Result<SiteConfig> {
    let json = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content());
    Ok(SiteConfig::from_page(json.as_deref())?)
}

fn report(widget: &str, result: error::Result<()>) {
    if let Err(e) = result {
        tracing::debug!("[awaken][{}] skipped: {}", widget, e);
    }
}

/// Wire every widget. Language goes first because the typewriter it owns
/// reads the active locale.
pub fn init_all(document: &Document, config: &SiteConfig) {
    match language::init(document, config) {
        Ok(switcher) => SWITCHER.with(|slot| *slot.borrow_mut() = Some(switcher)),
        Err(e) => tracing::debug!("[awaken][lang] skipped: {}", e),
    }
    report("header", header::init(document, config.header.solid_threshold));
    report("menu", menu::init(document));
    report("dropdown", dropdown::init(document, config.dropdown.breakpoint));
    report("reveal", reveal::init(document, &(&config.reveal).into()));
    report("carousel", carousel::init(document, &config.carousel));
    report("smooth-scroll", smooth_scroll::init(document));
    report("accordion", accordion::init(document));
    tracing::info!("[awaken] widgets ready");
}

/// Load the page config and install logging at its level.
fn configure(document: &Document) -> SiteConfig {
    let (config, problem) = match page_config(document) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };
    logging::init(&config.log_level);
    if let Some(e) = problem {
        tracing::warn!("[awaken][config] ignoring page config: {}", e);
    }
    config
}

fn boot(document: &Document) {
    let config = configure(document);
    init_all(document, &config);
}

/// Runs when the module is instantiated; defers to `DOMContentLoaded` while
/// the document is still parsing.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            web_sys::console::debug_1(&JsValue::from_str(&format!("[awaken] {}", e)));
            return;
        }
    };
    if document.ready_state() == "loading" {
        let mut pending = Some(document.clone());
        let waiting = dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some(document) = pending.take() {
                boot(&document);
            }
        });
        if waiting.is_err() {
            configure(&document);
            report("ready", waiting);
        }
    } else {
        boot(&document);
    }
}

/// Switch language from page scripts. Returns `false` for unknown codes or
/// before the widgets are initialised.
#[wasm_bindgen(js_name = setLocale)]
pub fn set_locale(code: &str) -> bool {
    let Ok(locale) = code.parse::<Locale>() else {
        return false;
    };
    SWITCHER.with(|slot| match slot.borrow().as_ref() {
        Some(switcher) => {
            switcher.apply(locale);
            true
        }
        None => false,
    })
}

/// Active locale code, if the language switcher is running.
#[wasm_bindgen(js_name = currentLocale)]
pub fn current_locale() -> Option<String> {
    SWITCHER.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|switcher| switcher.current().code().to_string())
    })
}
