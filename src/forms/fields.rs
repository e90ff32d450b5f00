//! Field identifiers, per-field validation errors and the submission result
//! notice shared by the form controllers.

use regex::Regex;
use std::collections::BTreeMap;

/// Form fields in display order. The ordering decides which field receives
/// focus when more than one is invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Email,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// Element id the view layer uses to move focus to the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }
}

/// Per-field error messages blocking submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FieldId, String>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    #[must_use]
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Drop the error for a single field, typically because it was edited.
    pub fn clear(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First invalid field in display order, the focus target after a
    /// rejected submit.
    #[must_use]
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.errors.keys().next().copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Single banner shown after a submission settles. At most one notice is
/// visible at a time; starting a new submission clears it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// What a call to `submit` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight; nothing changed.
    Blocked,
    /// Validation failed; `focus` is the first invalid field.
    Invalid { focus: FieldId },
    /// The network call settled; the notice reflects the outcome.
    Settled,
}

/// Basic `local@domain.tld` format check used by both controllers.
pub(crate) fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}
