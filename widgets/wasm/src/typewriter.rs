//! Hero typewriter, driven by the external TypeIt library.

use crate::dom;
use crate::error::Result;
use awaken_widgets::Locale;
use awaken_widgets::dom_contract::{TYPEWRITER, TYPEWRITER_GLOBAL};
use awaken_widgets::typewriter::{Step, TypeItOptions, TypewriterTiming, script};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

#[wasm_bindgen]
extern "C" {
    /// Instance of the global `TypeIt` class.
    #[derive(Debug, Clone)]
    type TypeIt;

    #[wasm_bindgen(constructor, catch)]
    fn new(element: &Element, options: &JsValue) -> std::result::Result<TypeIt, JsValue>;

    #[wasm_bindgen(method, js_name = "type")]
    fn type_text(this: &TypeIt, text: &str) -> TypeIt;

    #[wasm_bindgen(method)]
    fn pause(this: &TypeIt, ms: u32) -> TypeIt;

    #[wasm_bindgen(method, js_name = "delete")]
    fn delete_chars(this: &TypeIt, count: u32) -> TypeIt;

    #[wasm_bindgen(method)]
    fn go(this: &TypeIt) -> TypeIt;

    #[wasm_bindgen(method)]
    fn destroy(this: &TypeIt);
}

/// Whether the TypeIt script has been loaded on this page.
fn library_loaded() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(TYPEWRITER_GLOBAL))
        .map(|ctor| ctor.is_function())
        .unwrap_or(false)
}

/// Slot holding the single live animation.
#[derive(Debug, Default)]
pub struct Typewriter {
    instance: Option<TypeIt>,
}

impl Typewriter {
    pub fn is_running(&self) -> bool {
        self.instance.is_some()
    }

    /// Tear down any running animation, then start one for `locale`.
    /// Silently does nothing when the element or the library is missing.
    pub fn restart(
        &mut self,
        document: &Document,
        locale: Locale,
        timing: &TypewriterTiming,
    ) -> Result<()> {
        self.stop();

        let Some(element) = dom::query(document, TYPEWRITER) else {
            return Ok(());
        };
        if !library_loaded() {
            tracing::debug!("[awaken][typewriter] TypeIt not loaded, skipping");
            return Ok(());
        }

        element.set_inner_html("");

        let options = serde_json::to_string(&TypeItOptions::from(timing))?;
        let options = js_sys::JSON::parse(&options)?;
        let instance = TypeIt::new(&element, &options)?;

        for step in script(locale, timing) {
            match step {
                Step::Type(text) => instance.type_text(text),
                Step::Pause(ms) => instance.pause(ms),
                Step::Delete(count) => instance.delete_chars(count),
            };
        }
        instance.go();

        tracing::debug!("[awaken][typewriter] started ({})", locale);
        self.instance = Some(instance);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(instance) = self.instance.take() {
            instance.destroy();
        }
    }
}
