//! Visual styling of the trigger, overlay and dialog.

use web_sys::Document;

use crate::error::WidgetError;

/// Class-based rules so ids stay free to be prefixed per page.
pub const STYLESHEET: &str = concat!(
    ".bp-float-btn{",
    "position:fixed;bottom:28px;right:28px;z-index:10000;",
    "background:#00ff41;color:#0a0a0a;border:none;cursor:pointer;",
    "font-family:\"Roboto Mono\",\"Courier New\",monospace;font-size:0.875em;",
    "letter-spacing:0.15em;text-transform:uppercase;padding:13px 22px;",
    "box-shadow:0 0 20px rgba(0,255,65,0.5);transition:box-shadow 0.2s;",
    "display:flex;align-items:center;gap:8px;",
    "}",
    ".bp-float-btn:hover{box-shadow:0 0 36px rgba(0,255,65,0.8);}",
    ".bp-modal-overlay{",
    "display:none;position:fixed;inset:0;z-index:10001;",
    "background:rgba(0,0,0,0.82);align-items:center;justify-content:center;",
    "}",
    ".bp-modal-overlay.open{display:flex;}",
    ".bp-modal{",
    "background:#111;border:1px solid #1a2a1a;max-width:520px;width:90%;",
    "padding:32px 28px;position:relative;",
    "box-shadow:0 0 40px rgba(0,255,65,0.15);",
    "}",
    ".bp-modal-close{",
    "position:absolute;top:12px;right:16px;background:none;border:none;",
    "color:#6a8a6a;font-size:1.2em;cursor:pointer;line-height:1;",
    "}",
    ".bp-modal-close:hover{color:#00ff41;}",
    ".bp-modal-title{",
    "font-family:\"Cinzel\",\"Times New Roman\",serif;color:#ffd700;",
    "font-size:1em;letter-spacing:0.15em;text-transform:uppercase;",
    "margin-bottom:16px;",
    "}",
    ".bp-modal-msg{",
    "font-family:\"Roboto Mono\",\"Courier New\",monospace;font-size:0.875em;",
    "color:#c8d8c8;border:1px solid #1a2a1a;padding:14px 16px;",
    "margin-bottom:20px;line-height:1.6;background:#0a0a0a;",
    "}",
    ".bp-share-btn{",
    "display:flex;align-items:center;gap:10px;width:100%;box-sizing:border-box;",
    "padding:12px 18px;margin-bottom:10px;cursor:pointer;",
    "font-family:\"Roboto Mono\",\"Courier New\",monospace;font-size:0.875em;",
    "letter-spacing:0.12em;text-transform:uppercase;text-decoration:none;",
    "background:transparent;border:1px solid #1a2a1a;color:#c8d8c8;",
    "transition:border-color 0.2s,color 0.2s;",
    "}",
    ".bp-share-btn:hover{border-color:#00ff41;color:#00ff41;}",
    ".bp-share-btn:last-child{margin-bottom:0;}",
);

/// Marker attribute on the injected `<style>` element.
pub const STYLE_MARKER: (&str, &str) = ("data-widget", "broadcast-truth");

/// Appends the stylesheet to `<head>`. Meant to run once per page.
pub fn inject_styles(document: &Document) -> Result<(), WidgetError> {
    let head = document.head().ok_or(WidgetError::MissingHead)?;
    let style = document.create_element("style")?;
    style.set_attribute(STYLE_MARKER.0, STYLE_MARKER.1)?;
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)?;
    Ok(())
}
