//! Browser shells for the page behaviors.
//!
//! Each submodule reads markup into the matching core state, renders that
//! state back onto the document and wires the DOM events. This is the only
//! place that touches `web_sys`.
//!
//! | Module | Hooks |
//! |--------|-------|
//! | [`filter`] | `.filter-btn`, `.projects-body .project-card` |
//! | [`reveal`] | reveal selectors from [`PageConfig`], `.nav` |
//! | [`theme`] | `<html data-theme>`, `#theme-toggle`, `localStorage` |
//! | [`form`] | `.contact-form` and its fields |
//! | [`toast`] | appended to `<body>` |

pub mod filter;
pub mod form;
pub mod reveal;
pub mod theme;
pub mod toast;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::config::PageConfig;
use crate::consts::CONFIG_SCRIPT_ID;
use crate::error::{PageError, describe_js};

/// The global window and its document.
///
/// # Errors
///
/// Returns [`PageError::NoDocument`] outside a browser page.
pub fn window_and_document() -> Result<(Window, Document), PageError> {
    let window = web_sys::window().ok_or(PageError::NoDocument)?;
    let document = window.document().ok_or(PageError::NoDocument)?;
    Ok((window, document))
}

/// Read overrides from the `#page-config` JSON script, if the page has one.
///
/// # Errors
///
/// Returns [`PageError::Config`] when the script holds invalid JSON.
pub fn load_config(document: &Document) -> Result<PageConfig, PageError> {
    let text = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());
    match text {
        Some(text) => PageConfig::from_json(&text),
        None => Ok(PageConfig::default()),
    }
}

/// All elements in `document` matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`PageError::Js`] for a selector the browser rejects.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`PageError::Js`] for a selector the browser rejects.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, PageError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        log::warn!("could not add class {class}: {}", describe_js(&err));
    }
}

pub fn remove_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().remove_1(class) {
        log::warn!("could not remove class {class}: {}", describe_js(&err));
    }
}

/// Add `class` when `on`, remove it otherwise.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if on {
        add_class(el, class);
    } else {
        remove_class(el, class);
    }
}

/// Set one inline style property. Non-HTML elements (e.g. SVG) are skipped.
///
/// # Errors
///
/// Returns [`PageError::Js`] if the browser rejects the property.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), PageError> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}
