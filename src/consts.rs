//! Shared markup hooks, messages and timings for the page controller.

// ── Markup hooks ────────────────────────────────────────────────

pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const PROJECT_CARD_SELECTOR: &str = ".projects-body .project-card";
pub const FILTER_ATTR: &str = "data-filter";
pub const CATEGORY_ATTR: &str = "data-category";

/// Sentinel filter token that shows every card.
pub const FILTER_ALL: &str = "all";

pub const NAV_SELECTOR: &str = ".nav";
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

/// Sections that fade in the first time they scroll into view.
pub const DEFAULT_REVEAL_SELECTORS: [&str; 4] = [".skill-category", ".my-info", ".my-photo", ".contact-form"];

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_ATTR: &str = "data-theme";
pub const THEME_STORAGE_KEY: &str = "theme";
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";
pub const FORM_FIELD_SELECTOR: &str = "input, textarea";
pub const EMAIL_FIELD_SELECTOR: &str = "#email";

pub const CONFIG_SCRIPT_ID: &str = "page-config";

// ── Class names ─────────────────────────────────────────────────

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const FADE_UP_CLASS: &str = "animate-fade-up";
pub const FADE_DOWN_CLASS: &str = "animate-fade-down";
pub const VALID_CLASS: &str = "valid";
pub const INVALID_CLASS: &str = "invalid";
pub const TOAST_CLASS: &str = "toast";
pub const TOAST_SHOW_CLASS: &str = "show";

// ── Messages ────────────────────────────────────────────────────

pub const MSG_MISSING_REQUIRED: &str = "Please fill in all required fields";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_SENT: &str = "Message sent successfully! I will get back to you soon.";
pub const MSG_SEND_FAILED: &str = "Failed to send message. Please try again later.";

// ── Timings ─────────────────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay between inserting a toast and adding its shown-state class.
pub const TOAST_SHOW_DELAY_MS: u32 = 100;

/// Time from insertion until the shown-state class is removed.
pub const TOAST_DISPLAY_MS: u32 = 3000;

/// Time between removing the shown-state class and detaching the node.
pub const TOAST_FADE_MS: u32 = 300;
