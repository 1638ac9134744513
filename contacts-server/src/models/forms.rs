//! URL-encoded form bodies
//!
//! Missing fields deserialize as empty strings so that a bare POST still
//! reaches validation and gets a readable message back.

use serde::{Deserialize, Serialize};

use super::ContactDetails;

/// Body of the create/update category forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub category_title: String,
}

impl CategoryForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            category_title: title.into(),
        }
    }

    /// Title with surrounding whitespace removed.
    pub fn title(&self) -> &str {
        self.category_title.trim()
    }
}

/// Body of the create/update contact forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Copy of the form with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            email: self.email.trim().to_owned(),
        }
    }

    pub fn into_details(self) -> ContactDetails {
        ContactDetails {
            name: self.name,
            phone: self.phone,
            email: self.email,
        }
    }
}
