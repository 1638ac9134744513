use serde::{Deserialize, Serialize};

use super::RecordId;

/// A person record belonging to exactly one category.
///
/// `phone` and `email` are free-form; an empty string means not given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub category_id: RecordId,
}

/// The user-editable fields of a contact, already trimmed and validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactDetails {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}
