//! # portfolio-page
//!
//! Client-side behavior for a personal portfolio page, compiled to
//! WebAssembly. Once the document is parsed it wires four independent
//! behaviors onto the existing markup: project filtering, scroll-reveal
//! animation, the light/dark theme toggle and the contact form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`filter`] | Active filter and card visibility rule |
//! | [`reveal`] | One-shot pending/revealed state per animated section |
//! | [`theme`] | Theme state with `load`/`toggle`/`persist` over a [`theme::ThemeStore`] |
//! | [`form`] | Field marks, email pattern and submission validation |
//! | [`toast`] | Toast kinds and lifecycle timings |
//! | [`config`] | [`config::PageConfig`] with defaults and JSON overrides |
//! | [`dom`] | Browser shells binding the above to `web_sys` |
//! | [`consts`] | Markup hooks, class names, messages and timings |
//! | [`error`] | [`error::PageError`] and [`error::SubmitError`] |
//!
//! Everything outside [`dom`] is plain Rust and tested natively.

pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod filter;
pub mod form;
pub mod reveal;
pub mod theme;
pub mod toast;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::error::PageError;


/// Module entry point. Runs [`init`] now, or on `DOMContentLoaded` if the
/// document is still loading.
///
/// # Errors
///
/// Fails only outside a browser page or if the ready listener cannot be attached.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let (_, document) = dom::window_and_document().map_err(|err| JsValue::from_str(&err.to_string()))?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut()>::new(init);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        init();
    }
    Ok(())
}

/// Wire every behavior. Each one is independent; a failure in one is logged
/// and the rest still initialize.
pub fn init() {
    let (window, document) = match dom::window_and_document() {
        Ok(pair) => pair,
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
            return;
        }
    };

    let loaded = dom::load_config(&document);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => config::PageConfig::default(),
    };
    if console_log::init_with_level(config.log_level()).is_err() {
        log::debug!("logger already installed");
    }
    if let Err(err) = loaded {
        log::warn!("config: {err}; using defaults");
    }

    let failures = [
        report("filter", dom::filter::init(&document).map(|_| ())),
        report("reveal", dom::reveal::init(&document, &config)),
        report("theme", dom::theme::init(&window, &document, &config)),
        report("form", dom::form::init(&document, &config).map(|_| ())),
    ]
    .into_iter()
    .filter(|ok| !ok)
    .count();
    if failures == 0 {
        log::info!("page controller ready");
    } else {
        log::warn!("page controller ready with {failures} of 4 behaviors disabled");
    }
}

/// Log an init failure. Returns `true` when the behavior came up.
fn report(behavior: &str, result: Result<(), PageError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("{behavior}: init failed: {err}");
            false
        }
    }
}
