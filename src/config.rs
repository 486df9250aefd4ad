//! Page-level configuration.
//!
//! Every field has a default matching [`crate::consts`], so a page with no
//! config script behaves exactly like the stock markup expects. Overrides
//! come from an optional `<script type="application/json" id="page-config">`.

use serde::Deserialize;

use crate::consts::{
    DEFAULT_REVEAL_SELECTORS, REVEAL_THRESHOLD, THEME_STORAGE_KEY, TOAST_DISPLAY_MS, TOAST_FADE_MS,
    TOAST_SHOW_DELAY_MS,
};
use crate::error::PageError;
use crate::toast::ToastSchedule;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Selectors whose matches fade in on first intersection.
    pub reveal_selectors: Vec<String>,
    /// Visible fraction that triggers a reveal, clamped to `0.0..=1.0`.
    pub reveal_threshold: f64,
    pub theme_storage_key: String,
    pub toast_show_delay_ms: u32,
    pub toast_display_ms: u32,
    pub toast_fade_ms: u32,
    /// `log` level name; unknown names fall back to `info`.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reveal_selectors: DEFAULT_REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            reveal_threshold: REVEAL_THRESHOLD,
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            toast_show_delay_ms: TOAST_SHOW_DELAY_MS,
            toast_display_ms: TOAST_DISPLAY_MS,
            toast_fade_ms: TOAST_FADE_MS,
            log_level: "info".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse overrides from JSON. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] if the text is not a valid config object.
    pub fn from_json(text: &str) -> Result<Self, PageError> {
        let mut config: Self = serde_json::from_str(text)?;
        config.reveal_threshold = config.reveal_threshold.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Comma-joined selector list suitable for `querySelectorAll`.
    #[must_use]
    pub fn reveal_query(&self) -> String {
        self.reveal_selectors
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[must_use]
    pub fn toast_schedule(&self) -> ToastSchedule {
        ToastSchedule {
            show_delay_ms: self.toast_show_delay_ms,
            display_ms: self.toast_display_ms,
            fade_ms: self.toast_fade_ms,
        }
    }

    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
