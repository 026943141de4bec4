//! Page-provided configuration for the widget.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

const DEFAULT_ID_PREFIX: &str = "bp";

/// Settings read from `window.BROADCAST_TRUTH_CONFIG`, all optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Prefix of every element id the widget inserts.
    pub id_prefix: String,
    pub log_level: LevelFilter,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl WidgetConfig {
    /// Name of the global the page may define before the widget loads.
    pub const GLOBAL_KEY: &'static str = "BROADCAST_TRUTH_CONFIG";

    /// Reads the page override, falling back to defaults when it is absent or malformed.
    pub fn from_window(window: &web_sys::Window) -> Self {
        let raw = match js_sys::Reflect::get(window, &JsValue::from_str(Self::GLOBAL_KEY)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };

        match serde_wasm_bindgen::from_value::<WidgetConfig>(raw) {
            Ok(config) => config.sanitized(),
            Err(err) => {
                log::warn!("ignoring malformed {}: {}", Self::GLOBAL_KEY, err);
                Self::default()
            }
        }
    }

    /// Replaces a prefix that cannot form a valid element id.
    pub fn sanitized(mut self) -> Self {
        if self.id_prefix.is_empty() || self.id_prefix.chars().any(char::is_whitespace) {
            log::warn!(
                "id prefix {:?} is not usable, using {:?}",
                self.id_prefix,
                DEFAULT_ID_PREFIX
            );
            self.id_prefix = DEFAULT_ID_PREFIX.to_string();
        }
        self
    }

    pub fn ids(&self) -> ElementIds {
        ElementIds::new(&self.id_prefix)
    }
}

/// Stable ids of the elements the widget inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub root: String,
    pub trigger: String,
    pub overlay: String,
    pub modal: String,
    pub close: String,
}

impl ElementIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            root: format!("{prefix}-widget-root"),
            trigger: format!("{prefix}-float-btn"),
            overlay: format!("{prefix}-modal-overlay"),
            modal: format!("{prefix}-modal"),
            close: format!("{prefix}-modal-close"),
        }
    }
}
