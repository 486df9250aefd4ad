//! Filter buttons and project cards.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

use crate::consts::{
    ACTIVE_CLASS, CATEGORY_ATTR, FILTER_ATTR, FILTER_BUTTON_SELECTOR, HIDDEN_CLASS, PROJECT_CARD_SELECTOR,
};
use crate::dom;
use crate::error::PageError;
use crate::filter::{Filter, FilterBar};

/// The filter row bound to its buttons and the cards it controls.
pub struct FilterShell {
    bar: RefCell<FilterBar>,
    buttons: Vec<Element>,
    cards: Vec<Element>,
}

impl FilterShell {
    /// Read the button row and cards from the document. `None` when the
    /// page has no filter buttons.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Js`] if a selector query fails.
    pub fn bind(document: &Document) -> Result<Option<Self>, PageError> {
        let buttons = dom::query_all(document, FILTER_BUTTON_SELECTOR)?;
        let cards = dom::query_all(document, PROJECT_CARD_SELECTOR)?;
        log::debug!("filter: {} buttons, {} cards", buttons.len(), cards.len());

        let filters = buttons
            .iter()
            .map(|b| Filter::from_token(b.get_attribute(FILTER_ATTR).as_deref()))
            .collect();
        let marked = buttons.iter().position(|b| b.class_list().contains(ACTIVE_CLASS));

        Ok(FilterBar::new(filters, marked).map(|bar| Self { bar: RefCell::new(bar), buttons, cards }))
    }

    /// Handle a click on button `index`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Js`] if a card's style cannot be updated.
    pub fn select(&self, index: usize) -> Result<(), PageError> {
        let changed = self.bar.borrow_mut().select(index);
        log::debug!("filter: clicked {:?}", self.bar.borrow().active_filter());
        if changed {
            self.render()?;
        }
        Ok(())
    }

    /// Project the current filter onto the buttons and cards.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Js`] if a card's style cannot be updated.
    pub fn render(&self) -> Result<(), PageError> {
        let bar = self.bar.borrow();
        for (index, button) in self.buttons.iter().enumerate() {
            dom::set_class(button, ACTIVE_CLASS, bar.is_active(index));
        }
        for card in &self.cards {
            let shown = bar.visible(card.get_attribute(CATEGORY_ATTR).as_deref());
            dom::set_style(card, "display", if shown { "flex" } else { "none" })?;
            dom::set_class(card, HIDDEN_CLASS, !shown);
        }
        Ok(())
    }

    #[must_use]
    pub fn active_filter(&self) -> Filter {
        self.bar.borrow().active_filter().clone()
    }
}

/// Bind the filter row, render the starting state and attach click handlers.
///
/// A page without filter buttons is left untouched.
///
/// # Errors
///
/// Returns [`PageError::Js`] if the row cannot be bound or a listener cannot be attached.
pub fn init(document: &Document) -> Result<Option<Rc<FilterShell>>, PageError> {
    let Some(shell) = FilterShell::bind(document)? else {
        log::debug!("filter: no filter buttons on page");
        return Ok(None);
    };
    let shell = Rc::new(shell);
    shell.render()?;

    for (index, button) in shell.buttons.iter().enumerate() {
        let handler = Rc::clone(&shell);
        let on_click = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = handler.select(index) {
                log::warn!("filter: {err}");
            }
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(Some(shell))
}
