use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures raised while building the widget into the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("no global `window` is available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no <head> to receive styles")]
    MissingHead,
    #[error("document has no <body> to mount into")]
    MissingBody,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        let detail = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        WidgetError::Dom(detail)
    }
}
