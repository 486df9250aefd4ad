//! Transient notices appended to `<body>`.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::consts::TOAST_SHOW_CLASS;
use crate::dom;
use crate::error::PageError;
use crate::toast::{ToastKind, ToastSchedule};

/// Insert a toast and schedule its show, hide and removal steps.
///
/// The timers are fire-and-forget; a page navigation simply drops them.
///
/// # Errors
///
/// Returns [`PageError::MissingElement`] without a `<body>`, or
/// [`PageError::Js`] if the node cannot be created or inserted.
pub fn show(document: &Document, schedule: ToastSchedule, message: &str, kind: ToastKind) -> Result<Element, PageError> {
    let body = document
        .body()
        .ok_or_else(|| PageError::MissingElement("body".to_owned()))?;
    let toast = document.create_element("div")?;
    toast.set_class_name(&kind.class_name());
    toast.set_text_content(Some(message));
    body.append_child(&toast)?;

    let shown = toast.clone();
    Timeout::new(schedule.shown_at(), move || dom::add_class(&shown, TOAST_SHOW_CLASS)).forget();

    let fading = toast.clone();
    let fade_ms = schedule.fade_ms;
    Timeout::new(schedule.hidden_at(), move || {
        dom::remove_class(&fading, TOAST_SHOW_CLASS);
        Timeout::new(fade_ms, move || fading.remove()).forget();
    })
    .forget();

    Ok(toast)
}
