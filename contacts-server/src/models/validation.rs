//! Validation rules for category titles and contact names

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Category;

/// Accepted length range, in characters, for titles and names.
const MIN_LEN: usize = 1;
const MAX_LEN: usize = 100;

/// Letters and spaces only.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("invalid contact name regex"));

/// Rejected user input. `Display` is the message rendered back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Another category already has this exact title
    DuplicateTitle,

    /// Category title outside 1..=100 characters
    TitleLength,

    /// Contact name outside 1..=100 characters
    NameLength,

    /// Contact name contains something other than ASCII letters and spaces
    NameFormat,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTitle => write!(f, "The title must be unique."),
            Self::TitleLength => write!(
                f,
                "The title must be between {} and {} characters",
                MIN_LEN, MAX_LEN
            ),
            Self::NameLength => write!(
                f,
                "Name must be between {} and {} characters",
                MIN_LEN, MAX_LEN
            ),
            Self::NameFormat => {
                write!(f, "Name must only contain alphabetic characters and spaces.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

fn within_length(s: &str) -> bool {
    (MIN_LEN..=MAX_LEN).contains(&s.chars().count())
}

/// Check a (trimmed) category title against the existing categories.
///
/// Uniqueness is checked first and is a case-sensitive exact match.
pub fn validate_category_title(title: &str, existing: &[Category]) -> Result<(), ValidationError> {
    if existing.iter().any(|category| category.title == title) {
        return Err(ValidationError::DuplicateTitle);
    }

    if !within_length(title) {
        return Err(ValidationError::TitleLength);
    }

    Ok(())
}

/// Check a (trimmed) contact name. Phone and email are not validated.
pub fn validate_contact_name(name: &str) -> Result<(), ValidationError> {
    if !within_length(name) {
        return Err(ValidationError::NameLength);
    }

    if !NAME_RE.is_match(name) {
        return Err(ValidationError::NameFormat);
    }

    Ok(())
}
