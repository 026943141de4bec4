//! Page-ready sequencing and insertion of the widget into the document.

use wasm_bindgen::{prelude::*, JsCast};
use web_sys::Document;

use crate::config::WidgetConfig;
use crate::dom;
use crate::error::WidgetError;
use crate::logging;
use crate::styles;
use crate::widget::{BroadcastWidget, WidgetProps};

/// Entry point: configures logging, then mounts once the document has parsed.
///
/// Calling this twice on one page inserts a second widget.
pub fn start() -> Result<(), WidgetError> {
    let window = dom::window()?;
    let document = window.document().ok_or(WidgetError::NoDocument)?;
    let config = configure(&window);

    if document.ready_state() == "loading" {
        log::debug!("document still loading, deferring widget mount");
        let deferred = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = mount(&deferred, config) {
                log::error!("failed to mount share widget: {}", err);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        Ok(())
    } else {
        mount(&document, config)
    }
}

/// Installs logging at the default level, reads the page configuration, then applies its level.
///
/// Logging comes first so configuration warnings reach the console.
pub fn configure(window: &web_sys::Window) -> WidgetConfig {
    logging::init(WidgetConfig::default().log_level);
    let config = WidgetConfig::from_window(window);
    log::set_max_level(config.log_level);
    config
}

/// Injects the stylesheet and renders the widget into a host element appended to `<body>`.
///
/// The trigger and overlay end up inside `<div id="{prefix}-widget-root">`, not as direct
/// children of `<body>`.
pub fn mount(document: &Document, config: WidgetConfig) -> Result<(), WidgetError> {
    styles::inject_styles(document)?;

    let body = document.body().ok_or(WidgetError::MissingBody)?;
    let host = document.create_element("div")?;
    host.set_id(&config.ids().root);
    body.append_child(&host)?;

    log::info!("share widget mounted as #{}", host.id());
    yew::Renderer::<BroadcastWidget>::with_root_and_props(host, WidgetProps { config }).render();
    Ok(())
}
