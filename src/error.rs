//! Error types for the page controller.
//!
//! Nothing here ever reaches the visitor as a raw error: init failures are
//! logged per behavior, and submission failures end in a toast.

use wasm_bindgen::{JsCast, JsValue};

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no window or document available")]
    NoDocument,
    #[error("expected element not found: {0}")]
    MissingElement(String),
    #[error("element {selector} is not a {expected}")]
    WrongElement { selector: String, expected: &'static str },
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

/// Failure modes of the contact-form POST. Both map to the same toast.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("network failure: {0}")]
    Network(String),
    #[error("could not encode form body: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for SubmitError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Best-effort human-readable rendering of a thrown JS value.
pub fn describe_js(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
