//! Theme attribute on `<html>`, the toggle button and `localStorage`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Storage, Window};

use crate::config::PageConfig;
use crate::consts::{PREFERS_DARK_QUERY, THEME_ATTR, THEME_TOGGLE_ID};
use crate::error::{PageError, describe_js};
use crate::theme::{Theme, ThemeState, ThemeStore};

/// [`ThemeStore`] backed by `window.localStorage`.
///
/// Storage can be missing (privacy modes, sandboxed frames); reads then see
/// nothing and writes report [`PageError::StorageUnavailable`].
pub struct LocalStorage {
    storage: Option<Storage>,
    key: String,
}

impl LocalStorage {
    #[must_use]
    pub fn open(window: &Window, key: &str) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("theme: localStorage unavailable: {}", describe_js(&err));
                None
            }
        };
        Self { storage, key: key.to_owned() }
    }
}

impl ThemeStore for LocalStorage {
    fn load(&self) -> Option<String> {
        match self.storage.as_ref()?.get_item(&self.key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme: could not read {}: {}", self.key, describe_js(&err));
                None
            }
        }
    }

    fn save(&mut self, value: &str) -> Result<(), PageError> {
        let storage = self.storage.as_ref().ok_or(PageError::StorageUnavailable)?;
        storage.set_item(&self.key, value)?;
        Ok(())
    }
}

/// Whether the OS currently asks for a dark color scheme.
#[must_use]
pub fn prefers_dark(window: &Window) -> bool {
    match window.match_media(PREFERS_DARK_QUERY) {
        Ok(query) => query.is_some_and(|mq| mq.matches()),
        Err(_) => false,
    }
}

/// Write `theme` onto the root element's `data-theme`.
///
/// # Errors
///
/// Returns [`PageError::Js`] if the attribute cannot be set.
pub fn apply(root: &Element, theme: Theme) -> Result<(), PageError> {
    root.set_attribute(THEME_ATTR, theme.as_str())?;
    Ok(())
}

/// Flip the theme currently on `root` and save it to `store`.
///
/// The live attribute is the starting point, so changes made by other
/// scripts are respected. A failed save is logged; the attribute still flips.
///
/// # Errors
///
/// Returns [`PageError::Js`] if the attribute cannot be set.
pub fn toggle(root: &Element, store: &mut impl ThemeStore) -> Result<Theme, PageError> {
    let current = root.get_attribute(THEME_ATTR).as_deref().and_then(Theme::parse);
    let mut state = ThemeState::new(current);
    let next = state.toggle();
    apply(root, next)?;
    if let Err(err) = state.persist(store) {
        log::warn!("theme: could not save preference: {err}");
    }
    log::debug!("theme: switched to {}", next.as_str());
    Ok(next)
}

/// Apply the saved or OS-preferred theme and wire `#theme-toggle`.
///
/// # Errors
///
/// Returns [`PageError::MissingElement`] if the document has no root
/// element, or [`PageError::Js`] if the listener cannot be attached.
pub fn init(window: &Window, document: &Document, config: &PageConfig) -> Result<(), PageError> {
    let mut store = LocalStorage::open(window, &config.theme_storage_key);
    let root = document
        .document_element()
        .ok_or_else(|| PageError::MissingElement("html".to_owned()))?;

    let state = ThemeState::load(&store, prefers_dark(window));
    if let Some(theme) = state.current() {
        apply(&root, theme)?;
    }

    let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        log::debug!("theme: no #{THEME_TOGGLE_ID} on page");
        return Ok(());
    };
    let on_click = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = toggle(&root, &mut store) {
            log::warn!("theme: {err}");
        }
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}
