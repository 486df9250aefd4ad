//! Contact form: per-field validity marks and asynchronous submission.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, FormData, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::PageConfig;
use crate::consts::{
    CONTACT_FORM_SELECTOR, EMAIL_FIELD_SELECTOR, FORM_FIELD_SELECTOR, INVALID_CLASS, MSG_SEND_FAILED, MSG_SENT,
    VALID_CLASS,
};
use crate::dom;
use crate::error::{PageError, SubmitError, describe_js};
use crate::form::{FieldMark, FieldSnapshot, Rejection, validate_submission};
use crate::toast::{ToastKind, ToastSchedule};

/// An `<input>` or `<textarea>` inside the form.
#[derive(Clone, Debug)]
pub enum Field {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Field {
    /// Wrap `el` if it is a text-bearing form control.
    #[must_use]
    pub fn from_element(el: Element) -> Option<Self> {
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(el) => el.dyn_into::<HtmlTextAreaElement>().ok().map(Self::TextArea),
        }
    }

    fn element(&self) -> &Element {
        match self {
            Self::Input(input) => input.as_ref(),
            Self::TextArea(area) => area.as_ref(),
        }
    }

    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    #[must_use]
    pub fn required(&self) -> bool {
        match self {
            Self::Input(input) => input.required(),
            Self::TextArea(area) => area.required(),
        }
    }

    #[must_use]
    pub fn mark(&self) -> FieldMark {
        let classes = self.element().class_list();
        FieldMark::from_classes(classes.contains(VALID_CLASS), classes.contains(INVALID_CLASS))
    }

    pub fn set_mark(&self, mark: FieldMark) {
        let el = self.element();
        dom::remove_class(el, VALID_CLASS);
        dom::remove_class(el, INVALID_CLASS);
        if let Some(class) = mark.class() {
            dom::add_class(el, class);
        }
    }

    fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::new(self.value(), self.required())
    }

    fn on_blur(&self) {
        let next = self.mark().on_blur(&self.value(), self.required());
        self.set_mark(next);
    }

    fn on_input(&self) {
        let current = self.mark();
        let next = current.on_input(&self.value());
        if next != current {
            self.set_mark(next);
        }
    }
}

/// The bound contact form and everything its submit handler needs.
pub struct ContactForm {
    document: Document,
    form: HtmlFormElement,
    fields: Vec<Field>,
    email: Option<Field>,
    schedule: ToastSchedule,
    sends: Cell<usize>,
}

impl ContactForm {
    /// Bind the first `.contact-form` in `document`, if there is one.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::WrongElement`] if the match is not a `<form>`.
    pub fn bind(document: &Document, schedule: ToastSchedule) -> Result<Option<Self>, PageError> {
        let Some(el) = document.query_selector(CONTACT_FORM_SELECTOR)? else {
            return Ok(None);
        };
        let form = el.dyn_into::<HtmlFormElement>().map_err(|_| PageError::WrongElement {
            selector: CONTACT_FORM_SELECTOR.to_owned(),
            expected: "form",
        })?;
        let fields = dom::query_all_in(&form, FORM_FIELD_SELECTOR)?
            .into_iter()
            .filter_map(Field::from_element)
            .collect::<Vec<_>>();
        let email = form.query_selector(EMAIL_FIELD_SELECTOR)?.and_then(Field::from_element);
        log::debug!("form: {} fields, email field {}", fields.len(), if email.is_some() { "present" } else { "absent" });

        Ok(Some(Self { document: document.clone(), form, fields, email, schedule, sends: Cell::new(0) }))
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of submissions that passed validation and went to the network.
    #[must_use]
    pub fn sends(&self) -> usize {
        self.sends.get()
    }

    /// Validate the current contents. On rejection the offending fields are
    /// marked invalid and an error toast is shown.
    ///
    /// # Errors
    ///
    /// The [`Rejection`] that stopped the submission.
    pub fn check(&self) -> Result<(), Rejection> {
        let snapshots: Vec<FieldSnapshot> = self.fields.iter().map(Field::snapshot).collect();
        let email = self.email.as_ref().map(Field::value);

        let result = validate_submission(&snapshots, email.as_deref());
        if let Err(rejection) = &result {
            match rejection {
                Rejection::MissingRequired { indices } => {
                    for field in indices.iter().filter_map(|&i| self.fields.get(i)) {
                        field.set_mark(FieldMark::Invalid);
                    }
                }
                Rejection::InvalidEmail => {
                    if let Some(email) = &self.email {
                        email.set_mark(FieldMark::Invalid);
                    }
                }
            }
            self.toast(rejection.message(), ToastKind::Error);
        }
        result
    }

    /// POST the form to its configured action as multipart form data.
    ///
    /// # Errors
    ///
    /// Any non-ok status, transport failure or encoding failure.
    pub async fn send(&self) -> Result<(), SubmitError> {
        let body = FormData::new_with_form(&self.form).map_err(|err| SubmitError::Encode(describe_js(&err)))?;
        let response = Request::post(&self.form.action()).body(body)?.send().await?;
        if !response.ok() {
            return Err(SubmitError::Status(response.status()));
        }
        Ok(())
    }

    /// Clear every field and strip all validity marks.
    pub fn reset(&self) {
        self.form.reset();
        for field in &self.fields {
            field.set_mark(FieldMark::Unmarked);
        }
    }

    fn toast(&self, message: &str, kind: ToastKind) {
        if let Err(err) = dom::toast::show(&self.document, self.schedule, message, kind) {
            log::warn!("form: could not show toast: {err}");
        }
    }

    /// Report how a POST ended. Success clears the form; failure keeps
    /// what the visitor typed.
    pub fn finish(&self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                log::info!("form: message sent");
                self.toast(MSG_SENT, ToastKind::Success);
                self.reset();
            }
            Err(err) => {
                log::warn!("form: {err}");
                self.toast(MSG_SEND_FAILED, ToastKind::Error);
            }
        }
    }

    /// Full submit flow after the default navigation is prevented.
    fn submit(self: &Rc<Self>) {
        if let Err(rejection) = self.check() {
            log::debug!("form: rejected: {rejection:?}");
            return;
        }
        self.sends.set(self.sends.get() + 1);
        let this = Rc::clone(self);
        spawn_local(async move {
            let outcome = this.send().await;
            this.finish(outcome);
        });
    }
}

fn listen(target: &Element, event: &str, handler: impl FnMut() + 'static) -> Result<(), PageError> {
    let closure = Closure::<dyn FnMut()>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Wire blur/input marks on every field and take over the form's submit.
///
/// A page without a contact form is left untouched.
///
/// # Errors
///
/// Returns [`PageError`] if the form cannot be bound or a listener cannot be attached.
pub fn init(document: &Document, config: &PageConfig) -> Result<Option<Rc<ContactForm>>, PageError> {
    let Some(contact) = ContactForm::bind(document, config.toast_schedule())? else {
        log::debug!("form: no {CONTACT_FORM_SELECTOR} on page");
        return Ok(None);
    };
    let contact = Rc::new(contact);

    for field in contact.fields() {
        let blurred = field.clone();
        listen(field.element(), "blur", move || blurred.on_blur())?;
        let typed = field.clone();
        listen(field.element(), "input", move || typed.on_input())?;
    }

    let handler = Rc::clone(&contact);
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        handler.submit();
    });
    contact
        .form
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(Some(contact))
}
