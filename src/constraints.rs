use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::draft::{Field, SubmissionDraft};

/// Fields carrying the `required` attribute, in on-screen order.
pub const REQUIRED: [Field; 7] = [
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::ArtistName,
    Field::Origin,
    Field::DemoName,
    Field::ListeningLink,
];

// WHATWG "valid email address", the pattern behind <input type="email">.
// A fixed literal, so compiling it cannot fail at runtime.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("Please fill out this field: {}", .0.name())]
    Missing(Field),
    #[error("Please enter an email address: {0:?}")]
    InvalidEmail(String),
}

pub fn is_required(field: Field) -> bool {
    REQUIRED.contains(&field)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Mirrors the browser's own constraint validation: the first failing field
/// in document order wins. Optional fields are never looked at.
pub fn check(draft: &SubmissionDraft) -> Result<(), ConstraintError> {
    for field in REQUIRED {
        let value = draft.get(field);
        // Browsers strip surrounding whitespace from email inputs only.
        let value = if field == Field::Email { value.trim() } else { value };
        if value.is_empty() {
            return Err(ConstraintError::Missing(field));
        }
        if field == Field::Email && !is_valid_email(value) {
            return Err(ConstraintError::InvalidEmail(value.to_string()));
        }
    }
    Ok(())
}
