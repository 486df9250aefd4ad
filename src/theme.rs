//! Light/dark theme state, decoupled from the document attribute.
//!
//! [`ThemeState`] resolves the starting theme from a [`ThemeStore`] and the
//! OS color-scheme signal, flips it on toggle, and writes it back. The
//! browser shell mirrors the result onto `<html data-theme>`.

use crate::error::PageError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored or attribute value. Only the exact tokens are accepted.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Persistent home of the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn save(&mut self, value: &str) -> Result<(), PageError>;
}

/// The document's theme. `None` means the markup default is still in effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    current: Option<Theme>,
}

impl ThemeState {
    #[must_use]
    pub fn new(current: Option<Theme>) -> Self {
        Self { current }
    }

    /// Resolve the starting theme: a saved preference wins, then the OS dark
    /// signal, otherwise the markup default is left alone.
    pub fn load(store: &impl ThemeStore, prefers_dark: bool) -> Self {
        if let Some(saved) = store.load() {
            match Theme::parse(&saved) {
                Some(theme) => return Self::new(Some(theme)),
                None => log::warn!("theme: ignoring unrecognized saved value {saved:?}"),
            }
        }
        if prefers_dark {
            return Self::new(Some(Theme::Dark));
        }
        Self::new(None)
    }

    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    /// The theme actually on screen. Unset means the light markup default.
    #[must_use]
    pub fn effective(&self) -> Theme {
        self.current.unwrap_or_default()
    }

    /// Flip light and dark. An unset theme counts as light, so the first
    /// toggle from a bare page goes dark.
    pub fn toggle(&mut self) -> Theme {
        let next = self.effective().flipped();
        self.current = Some(next);
        next
    }

    /// Write the current theme to `store`. Nothing is written while unset.
    ///
    /// # Errors
    ///
    /// Propagates the store's write failure.
    pub fn persist(&self, store: &mut impl ThemeStore) -> Result<(), PageError> {
        match self.current {
            Some(theme) => store.save(theme.as_str()),
            None => Ok(()),
        }
    }
}
