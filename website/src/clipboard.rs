//! Browser clipboard backends
//!
//! The asynchronous Clipboard API is the primary path. Pages served from an
//! insecure origin (or browsers that deny the permission) fall back to the
//! off-screen `<textarea>` + `execCommand("copy")` technique.

use ptk_app::{ClipboardService, LegacyCopy, LocalClipboard};
use ptk_core::{Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

pub type WebClipboard = ClipboardService<NavigatorClipboard, TextAreaCopy>;

pub fn web_clipboard() -> WebClipboard {
    ClipboardService::new(NavigatorClipboard, TextAreaCopy)
}

/// `navigator.clipboard.writeText`
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorClipboard;

impl LocalClipboard for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let window = web_sys::window().ok_or(Error::ClipboardUnavailable)?;
        let navigator = window.navigator();

        // Absent outside secure contexts
        let has_clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map(|value| !value.is_undefined() && !value.is_null())
            .unwrap_or(false);
        if !has_clipboard {
            return Err(Error::ClipboardUnavailable);
        }

        JsFuture::from(navigator.clipboard().write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| Error::clipboard(format!("writeText rejected: {:?}", e)))
    }
}

/// Off-screen `<textarea>` selected and copied with `execCommand`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAreaCopy;

impl LegacyCopy for TextAreaCopy {
    fn copy(&self, text: &str) -> bool {
        match copy_with_textarea(text) {
            Ok(copied) => copied,
            Err(e) => {
                log::warn!("textarea copy failed: {:?}", e);
                false
            }
        }
    }
}

fn copy_with_textarea(text: &str) -> std::result::Result<bool, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    textarea.set_value(text);
    textarea.set_attribute("readonly", "")?;
    let style = textarea.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", "-9999px")?;

    body.append_child(&textarea)?;
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .map_or(Ok(false), |html| html.exec_command("copy"));
    body.remove_child(&textarea)?;
    copied
}
