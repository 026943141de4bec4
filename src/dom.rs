//! Small DOM helpers for focus moves and document-level listeners.

use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{EventTarget, KeyboardEvent};
use yew::NodeRef;

use crate::error::WidgetError;

pub fn window() -> Result<web_sys::Window, WidgetError> {
    web_sys::window().ok_or(WidgetError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, WidgetError> {
    window()?.document().ok_or(WidgetError::NoDocument)
}

/// Focuses the element behind `node`, ignoring a missing node and browser focus errors.
pub fn focus_node(node: &NodeRef) {
    let Some(element) = node.cast::<web_sys::HtmlElement>() else {
        log::debug!("focus target is not mounted");
        return;
    };
    let _ = element.focus();
}

/// A `keydown` listener that is detached when dropped.
pub struct KeydownListener {
    target: EventTarget,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeydownListener {
    pub fn attach(
        target: EventTarget,
        handler: impl FnMut(KeyboardEvent) + 'static,
    ) -> Result<Self, WidgetError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
        target.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())?;
        Ok(Self { target, callback })
    }
}

impl Drop for KeydownListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}
