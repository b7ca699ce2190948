use js_sys::Promise;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = writeText)]
    fn clipboard_write_text(data: &str) -> Result<Promise, JsValue>;
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// `navigator.clipboard` is missing, e.g. the page is not a secure context.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value))
}

pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let promise =
        clipboard_write_text(text).map_err(|e| ClipboardError::Unavailable(describe(&e)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(describe(&e)))
}
