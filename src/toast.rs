//! Toast notice kinds and their fixed lifecycle.
//!
//! A toast is inserted, gains the shown class after a short delay so its
//! transition plays, loses it after the display period, and is detached once
//! the fade has had time to finish. Toasts never queue or coalesce.

use crate::consts::{TOAST_CLASS, TOAST_DISPLAY_MS, TOAST_FADE_MS, TOAST_SHOW_DELAY_MS};

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Full `class` attribute for a new toast node.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("{TOAST_CLASS} {}", self.modifier())
    }
}

/// Milliseconds, measured from insertion, at which each lifecycle step runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastSchedule {
    pub show_delay_ms: u32,
    pub display_ms: u32,
    pub fade_ms: u32,
}

impl Default for ToastSchedule {
    fn default() -> Self {
        Self {
            show_delay_ms: TOAST_SHOW_DELAY_MS,
            display_ms: TOAST_DISPLAY_MS,
            fade_ms: TOAST_FADE_MS,
        }
    }
}

/// Where a toast is in its lifecycle at a given moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Inserted,
    Shown,
    Fading,
    Removed,
}

impl ToastSchedule {
    #[must_use]
    pub fn shown_at(&self) -> u32 {
        self.show_delay_ms
    }

    #[must_use]
    pub fn hidden_at(&self) -> u32 {
        self.display_ms
    }

    /// Upper bound on how long a toast node stays in the document.
    #[must_use]
    pub fn removal_at(&self) -> u32 {
        self.display_ms.saturating_add(self.fade_ms)
    }

    /// Phase at `elapsed_ms` after insertion.
    ///
    /// The hide step wins over the show step when the display period is
    /// shorter than the show delay, matching the timers firing in that order.
    #[must_use]
    pub fn phase_at(&self, elapsed_ms: u32) -> ToastPhase {
        if elapsed_ms >= self.removal_at() {
            ToastPhase::Removed
        } else if elapsed_ms >= self.hidden_at() {
            ToastPhase::Fading
        } else if elapsed_ms >= self.shown_at() {
            ToastPhase::Shown
        } else {
            ToastPhase::Inserted
        }
    }
}
