//! Errors raised while wiring widgets to the DOM.

use awaken_widgets::WidgetError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("javascript exception: {0}")]
    Js(String),

    #[error(transparent)]
    Widget(#[from] WidgetError),

    #[error("failed to serialize options: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js(message)
    }
}

pub type Result<T> = std::result::Result<T, DomError>;
