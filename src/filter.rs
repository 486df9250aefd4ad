//! Category filter state for the project grid.
//!
//! The active filter is owned here as an index into the button row, so the
//! "exactly one active button" rule holds by construction. The DOM shell in
//! [`crate::dom::filter`] only renders what this state says.

use crate::consts::FILTER_ALL;

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// A filter token carried by a filter button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Interpret a `data-filter` attribute. A button without one acts as "all".
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None => Self::All,
            Some(t) if t == FILTER_ALL => Self::All,
            Some(t) => Self::Category(t.to_owned()),
        }
    }

    /// Whether a card with the given `data-category` is shown under this filter.
    ///
    /// A card with no category only appears under [`Filter::All`].
    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(token) => category == Some(token.as_str()),
        }
    }
}

/// The row of filter buttons and which one is active.
#[derive(Clone, Debug)]
pub struct FilterBar {
    filters: Vec<Filter>,
    active: usize,
}

impl FilterBar {
    /// Build the bar from button tokens in document order.
    ///
    /// `marked_active` is the index of a button the markup already flags as
    /// active, if any. Without one, the first "all" button wins, then the
    /// first button. Returns `None` for an empty row.
    #[must_use]
    pub fn new(filters: Vec<Filter>, marked_active: Option<usize>) -> Option<Self> {
        if filters.is_empty() {
            return None;
        }
        let active = marked_active
            .filter(|&i| i < filters.len())
            .or_else(|| filters.iter().position(|f| *f == Filter::All))
            .unwrap_or(0);
        Some(Self { filters, active })
    }

    /// Make `index` the active button. Returns `true` if the active filter changed.
    ///
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.filters.len() || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    #[must_use]
    pub fn active_filter(&self) -> &Filter {
        &self.filters[self.active]
    }

    #[must_use]
    pub fn visible(&self, category: Option<&str>) -> bool {
        self.active_filter().matches(category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
