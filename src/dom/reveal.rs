//! Scroll-triggered fade-in of page sections.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::PageConfig;
use crate::consts::{FADE_DOWN_CLASS, FADE_UP_CLASS, NAV_SELECTOR, REVEAL_INDEX_ATTR};
use crate::dom;
use crate::error::{PageError, describe_js};
use crate::reveal::RevealTracker;

type SharedTracker = Rc<RefCell<RevealTracker>>;

/// Hide every reveal-eligible section until it first scrolls into view, and
/// slide the navigation in straight away.
///
/// # Errors
///
/// Returns [`PageError::Js`] if the reveal selectors are rejected or an
/// element cannot be prepared.
pub fn init(document: &Document, config: &PageConfig) -> Result<(), PageError> {
    animate_nav(document)?;

    let query = config.reveal_query();
    if query.is_empty() {
        return Ok(());
    }
    let elements = dom::query_all(document, &query)?;
    let tracker: SharedTracker = Rc::new(RefCell::new(RevealTracker::new()));
    for el in &elements {
        let index = tracker.borrow_mut().register();
        el.set_attribute(REVEAL_INDEX_ATTR, &index.to_string())?;
        dom::set_style(el, "opacity", "0")?;
    }
    log::debug!("reveal: watching {} elements", elements.len());

    let callback = {
        let tracker = Rc::clone(&tracker);
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                on_intersect(&tracker, &entries, &observer);
            },
        )
    };
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            callback.forget();
            for el in &elements {
                observer.observe(el);
            }
        }
        Err(err) => {
            log::warn!("reveal: observer unavailable ({}), showing everything", describe_js(&err));
            let revealed = tracker.borrow_mut().reveal_all();
            for index in revealed {
                if let Some(el) = elements.get(index) {
                    reveal(el)?;
                }
            }
        }
    }
    Ok(())
}

fn animate_nav(document: &Document) -> Result<(), PageError> {
    if let Some(nav) = document.query_selector(NAV_SELECTOR)? {
        dom::add_class(&nav, FADE_DOWN_CLASS);
    }
    Ok(())
}

fn on_intersect(tracker: &SharedTracker, entries: &js_sys::Array, observer: &IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        let target = entry.target();
        let Some(index) = reveal_index(&target) else {
            continue;
        };
        if tracker.borrow_mut().observe(index, entry.is_intersecting()) {
            if let Err(err) = reveal(&target) {
                log::warn!("reveal: {err}");
            }
            observer.unobserve(&target);
        }
    }
}

fn reveal_index(el: &Element) -> Option<usize> {
    el.get_attribute(REVEAL_INDEX_ATTR)?.parse().ok()
}

/// Play the fade-up animation on `el` and make it visible.
///
/// # Errors
///
/// Returns [`PageError::Js`] if the opacity cannot be set.
pub fn reveal(el: &Element) -> Result<(), PageError> {
    dom::add_class(el, FADE_UP_CLASS);
    dom::set_style(el, "opacity", "1")
}
