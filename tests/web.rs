//! Browser tests for the DOM shells. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use portfolio_page::config::PageConfig;
use portfolio_page::consts::{MSG_INVALID_EMAIL, MSG_MISSING_REQUIRED, MSG_SEND_FAILED, MSG_SENT};
use portfolio_page::dom;
use portfolio_page::error::{PageError, SubmitError};
use portfolio_page::filter::Filter;
use portfolio_page::form::FieldMark;
use portfolio_page::theme::{Theme, ThemeStore};
use portfolio_page::toast::{ToastKind, ToastSchedule};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

// =============================================================
// Helpers
// =============================================================

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Replace the body with `html` and return the document.
fn mount(html: &str) -> Document {
    let doc = document();
    doc.body().unwrap().set_inner_html(html);
    doc
}

fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

fn display(el: &Element) -> String {
    el.dyn_ref::<HtmlElement>().unwrap().style().get_property_value("display").unwrap()
}

fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

#[derive(Default)]
struct MemoryStore(Option<String>);

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.0.clone()
    }

    fn save(&mut self, value: &str) -> Result<(), PageError> {
        self.0 = Some(value.to_owned());
        Ok(())
    }
}

const PROJECTS: &str = r#"
    <button class="filter-btn" data-filter="all">All</button>
    <button class="filter-btn" data-filter="web">Web</button>
    <button class="filter-btn" data-filter="systems">Systems</button>
    <div class="projects-body">
        <div class="project-card" data-category="web">A</div>
        <div class="project-card" data-category="systems">B</div>
        <div class="project-card">C</div>
    </div>
"#;

// =============================================================
// Filter
// =============================================================

#[wasm_bindgen_test]
fn filter_init_marks_all_active() {
    let doc = mount(PROJECTS);
    let shell = dom::filter::init(&doc).unwrap().unwrap();
    let buttons = dom::query_all(&doc, ".filter-btn").unwrap();

    assert_eq!(shell.active_filter(), Filter::All);
    assert!(has_class(&buttons[0], "active"));
    assert_eq!(buttons.iter().filter(|b| has_class(b, "active")).count(), 1);
}

#[wasm_bindgen_test]
fn filter_click_hides_other_categories() {
    let doc = mount(PROJECTS);
    dom::filter::init(&doc).unwrap();
    let buttons = dom::query_all(&doc, ".filter-btn").unwrap();
    let cards = dom::query_all(&doc, ".project-card").unwrap();

    click(&buttons[1]);

    assert!(has_class(&buttons[1], "active"));
    assert_eq!(buttons.iter().filter(|b| has_class(b, "active")).count(), 1);
    assert_eq!(display(&cards[0]), "flex");
    assert_eq!(display(&cards[1]), "none");
    assert!(has_class(&cards[1], "hidden"));
    assert_eq!(display(&cards[2]), "none");

    click(&buttons[0]);
    assert!(cards.iter().all(|c| display(c) == "flex" && !has_class(c, "hidden")));
}

#[wasm_bindgen_test]
fn filter_without_buttons_is_noop() {
    let doc = mount("<div class=\"projects-body\"></div>");
    assert!(dom::filter::init(&doc).unwrap().is_none());
}

// =============================================================
// Reveal
// =============================================================

#[wasm_bindgen_test]
fn reveal_hides_sections_and_animates_nav() {
    let doc = mount(r#"<nav class="nav"></nav><div class="my-info"></div><div class="skill-category"></div>"#);
    dom::reveal::init(&doc, &PageConfig::default()).unwrap();

    let nav = doc.query_selector(".nav").unwrap().unwrap();
    assert!(has_class(&nav, "animate-fade-down"));
    let info = doc.query_selector(".my-info").unwrap().unwrap();
    assert_eq!(info.get_attribute("data-reveal-index").as_deref(), Some("0"));
}

#[wasm_bindgen_test]
fn reveal_without_nav_is_guarded() {
    let doc = mount(r#"<div class="my-photo"></div>"#);
    assert!(dom::reveal::init(&doc, &PageConfig::default()).is_ok());
}

#[wasm_bindgen_test]
fn reveal_applies_fade_up_and_opacity() {
    let doc = mount(r#"<div class="my-photo"></div>"#);
    let el = doc.query_selector(".my-photo").unwrap().unwrap();
    dom::reveal::reveal(&el).unwrap();
    assert!(has_class(&el, "animate-fade-up"));
    let opacity = el.dyn_ref::<HtmlElement>().unwrap().style().get_property_value("opacity").unwrap();
    assert_eq!(opacity, "1");
}

// =============================================================
// Theme
// =============================================================

#[wasm_bindgen_test]
fn theme_toggle_twice_restores_attribute_and_store() {
    let root = document().document_element().unwrap();
    root.set_attribute("data-theme", "dark").unwrap();
    let mut store = MemoryStore(Some("dark".into()));

    assert_eq!(dom::theme::toggle(&root, &mut store).unwrap(), Theme::Light);
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(store.0.as_deref(), Some("light"));

    dom::theme::toggle(&root, &mut store).unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(store.0.as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn theme_toggle_from_unset_goes_dark() {
    let root = document().document_element().unwrap();
    root.remove_attribute("data-theme").unwrap();
    let mut store = MemoryStore::default();

    assert_eq!(dom::theme::toggle(&root, &mut store).unwrap(), Theme::Dark);
    assert_eq!(store.0.as_deref(), Some("dark"));
}

// =============================================================
// Toast
// =============================================================

#[wasm_bindgen_test]
fn toast_is_appended_with_kind_class() {
    let doc = mount("");
    let toast = dom::toast::show(&doc, ToastSchedule::default(), "Saved", ToastKind::Error).unwrap();

    assert_eq!(toast.class_name(), "toast error");
    assert_eq!(toast.text_content().as_deref(), Some("Saved"));
    assert!(doc.body().unwrap().contains(Some(toast.as_ref())));
}

#[wasm_bindgen_test]
async fn toast_is_removed_after_schedule() {
    let doc = mount("");
    let schedule = ToastSchedule { show_delay_ms: 5, display_ms: 200, fade_ms: 10 };
    let toast = dom::toast::show(&doc, schedule, "Bye", ToastKind::Success).unwrap();

    gloo_timers::future::TimeoutFuture::new(50).await;
    assert!(has_class(&toast, "show"));

    gloo_timers::future::TimeoutFuture::new(schedule.removal_at() + 50).await;
    assert!(!doc.body().unwrap().contains(Some(toast.as_ref())));
}

// =============================================================
// Contact form
// =============================================================

const CONTACT: &str = r#"
    <form class="contact-form" action="/never-called">
        <input id="name" name="name" required>
        <input id="email" name="email" required>
        <textarea id="message" name="message" required></textarea>
    </form>
"#;

fn set_value(doc: &Document, id: &str, value: &str) {
    let el = doc.get_element_by_id(id).unwrap();
    match el.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.set_value(value),
        None => el.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap().set_value(value),
    }
}

fn toasts(doc: &Document) -> Vec<Element> {
    dom::query_all(doc, ".toast").unwrap()
}

#[wasm_bindgen_test]
fn empty_required_fields_are_rejected() {
    let doc = mount(CONTACT);
    let form = dom::form::init(&doc, &PageConfig::default()).unwrap().unwrap();
    set_value(&doc, "email", "ada@example.com");

    assert!(form.check().is_err());

    let name = doc.get_element_by_id("name").unwrap();
    let message = doc.get_element_by_id("message").unwrap();
    assert!(has_class(&name, "invalid"));
    assert!(has_class(&message, "invalid"));
    let shown = toasts(&doc);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].text_content().as_deref(), Some("Please fill in all required fields"));
}

#[wasm_bindgen_test]
fn malformed_email_is_rejected() {
    let doc = mount(CONTACT);
    let form = dom::form::init(&doc, &PageConfig::default()).unwrap().unwrap();
    set_value(&doc, "name", "Ada");
    set_value(&doc, "email", "not-an-email");
    set_value(&doc, "message", "Hello");

    assert!(form.check().is_err());
    assert!(has_class(&doc.get_element_by_id("email").unwrap(), "invalid"));
    assert_eq!(
        toasts(&doc)[0].text_content().as_deref(),
        Some("Please enter a valid email address")
    );
}

#[wasm_bindgen_test]
fn reset_clears_values_and_marks() {
    let doc = mount(CONTACT);
    let form = dom::form::init(&doc, &PageConfig::default()).unwrap().unwrap();
    set_value(&doc, "name", "Ada");
    for field in form.fields() {
        field.set_mark(FieldMark::Valid);
    }

    form.reset();

    let name = doc.get_element_by_id("name").unwrap();
    assert_eq!(name.dyn_ref::<HtmlInputElement>().unwrap().value(), "");
    assert!(form.fields().iter().all(|f| f.mark() == FieldMark::Unmarked));
}

fn field_value(doc: &Document, id: &str) -> String {
    let el = doc.get_element_by_id(id).unwrap();
    match el.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.value(),
        None => el.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap().value(),
    }
}

fn fill_valid(doc: &Document) {
    set_value(doc, "name", "Ada");
    set_value(doc, "email", "ada@example.com");
    set_value(doc, "message", "Hello");
}

#[wasm_bindgen_test]
fn successful_send_clears_fields_and_marks() {
    let doc = mount(CONTACT);
    let form = dom::form::init(&doc, &PageConfig::default()).unwrap().unwrap();
    fill_valid(&doc);
    form.fields()[0].set_mark(FieldMark::Valid);
    form.fields()[1].set_mark(FieldMark::Invalid);

    form.finish(Ok(()));

    for id in ["name", "email", "message"] {
        assert_eq!(field_value(&doc, id), "", "{id}");
        let el = doc.get_element_by_id(id).unwrap();
        assert!(!has_class(&el, "valid") && !has_class(&el, "invalid"), "{id}");
    }
    let shown = dom::query_all(&doc, ".toast.success").unwrap();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].text_content().as_deref(), Some(MSG_SENT));
}

#[wasm_bindgen_test]
fn failed_send_keeps_fields() {
    let doc = mount(CONTACT);
    let form = dom::form::init(&doc, &PageConfig::default()).unwrap().unwrap();
    fill_valid(&doc);

    form.finish(Err(SubmitError::Status(500)));

    assert_eq!(field_value(&doc, "name"), "Ada");
    assert_eq!(field_value(&doc, "email"), "ada@example.com");
    assert_eq!(field_value(&doc, "message"), "Hello");
    assert!(dom::query_all(&doc, ".toast.success").unwrap().is_empty());
    let shown = dom::query_all(&doc, ".toast.error").unwrap();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].text_content().as_deref(), Some(MSG_SEND_FAILED));
}

#[wasm_bindgen_test]
fn network_failure_shows_same_toast() {
    let doc = mount(CONTACT);
    let form = dom::form::init(&doc, &PageConfig::default()).unwrap().unwrap();

    form.finish(Err(SubmitError::Network("offline".into())));

    let shown = dom::query_all(&doc, ".toast.error").unwrap();
    assert_eq!(shown[0].text_content().as_deref(), Some(MSG_SEND_FAILED));
}

#[wasm_bindgen_test]
fn submitting_blank_form_never_sends() {
    let doc = mount(CONTACT);
    let form = dom::form::init(&doc, &PageConfig::default()).unwrap().unwrap();
    let el = doc.query_selector(".contact-form").unwrap().unwrap();

    el.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    assert_eq!(form.sends(), 0);
    assert_eq!(toasts(&doc)[0].text_content().as_deref(), Some(MSG_MISSING_REQUIRED));
}

#[wasm_bindgen_test]
fn submitting_bad_email_never_sends() {
    let doc = mount(CONTACT);
    let form = dom::form::init(&doc, &PageConfig::default()).unwrap().unwrap();
    fill_valid(&doc);
    set_value(&doc, "email", "not-an-email");
    let el = doc.query_selector(".contact-form").unwrap().unwrap();

    el.dispatch_event(&Event::new("submit").unwrap()).unwrap();

    assert_eq!(form.sends(), 0);
    assert_eq!(toasts(&doc)[0].text_content().as_deref(), Some(MSG_INVALID_EMAIL));
}
