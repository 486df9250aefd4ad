//! Contact-form validation rules.
//!
//! Field marks follow a small state machine: blur decides valid or invalid,
//! input can only heal an invalid field. Submission checks every required
//! field first, then the email pattern.

use crate::consts::{INVALID_CLASS, MSG_INVALID_EMAIL, MSG_MISSING_REQUIRED, VALID_CLASS};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Validity marker carried by a form field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldMark {
    #[default]
    Unmarked,
    Valid,
    Invalid,
}

impl FieldMark {
    /// Read the mark back from the field's class list.
    #[must_use]
    pub fn from_classes(has_valid: bool, has_invalid: bool) -> Self {
        if has_invalid {
            Self::Invalid
        } else if has_valid {
            Self::Valid
        } else {
            Self::Unmarked
        }
    }

    /// Mark after the field loses focus. A blank optional field keeps its mark.
    #[must_use]
    pub fn on_blur(self, value: &str, required: bool) -> Self {
        if !is_blank(value) {
            Self::Valid
        } else if required {
            Self::Invalid
        } else {
            self
        }
    }

    /// Mark after typing. Only an invalid field with content changes.
    #[must_use]
    pub fn on_input(self, value: &str) -> Self {
        if self == Self::Invalid && !is_blank(value) {
            Self::Valid
        } else {
            self
        }
    }

    /// The class this mark adds, if any.
    #[must_use]
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Unmarked => None,
            Self::Valid => Some(VALID_CLASS),
            Self::Invalid => Some(INVALID_CLASS),
        }
    }
}

/// What the submit handler needs to know about one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub value: String,
    pub required: bool,
}

impl FieldSnapshot {
    #[must_use]
    pub fn new(value: impl Into<String>, required: bool) -> Self {
        Self { value: value.into(), required }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.required && is_blank(&self.value)
    }
}

/// Why a submission was refused before any request was made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Indices (into the snapshot slice) of every blank required field.
    MissingRequired { indices: Vec<usize> },
    InvalidEmail,
}

impl Rejection {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingRequired { .. } => MSG_MISSING_REQUIRED,
            Self::InvalidEmail => MSG_INVALID_EMAIL,
        }
    }
}

/// Check a submission. Blank required fields are reported before the email.
///
/// `email` is `None` when the form has no email field, which skips that check.
///
/// # Errors
///
/// Returns the first failing [`Rejection`].
pub fn validate_submission(fields: &[FieldSnapshot], email: Option<&str>) -> Result<(), Rejection> {
    let indices: Vec<usize> = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.is_missing())
        .map(|(i, _)| i)
        .collect();
    if !indices.is_empty() {
        return Err(Rejection::MissingRequired { indices });
    }
    if let Some(email) = email {
        if !is_valid_email(email) {
            return Err(Rejection::InvalidEmail);
        }
    }
    Ok(())
}

/// `local@domain.tld` with no whitespace and exactly one `@`. The domain must
/// contain a dot with at least one character on each side.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_js_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Empty after trimming, as the browser's `value.trim()` sees it.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(is_js_whitespace).is_empty()
}

/// ECMAScript WhiteSpace plus LineTerminator. Unlike `char::is_whitespace`
/// this excludes U+0085 and includes U+FEFF.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}
