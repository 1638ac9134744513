//! What a handler hands back to the HTTP boundary

use serde::{Deserialize, Serialize};

use crate::models::{Category, Contact, ContactForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

/// One-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl ToString) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.to_string(),
        }
    }
}

/// A page and the data it needs.
///
/// Form-bearing variants carry the values to pre-fill, which after a
/// rejected submission are the values the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum View {
    Categories {
        categories: Vec<Category>,
    },
    NewCategory {
        title: String,
    },
    Category {
        category: Category,
        form: ContactForm,
    },
    EditCategory {
        category: Category,
        title: String,
    },
    ContactInfo {
        category: Category,
        contact: Contact,
    },
    EditContact {
        category: Category,
        contact: Contact,
        form: ContactForm,
    },
}

impl View {
    pub fn template(&self) -> &'static str {
        match self {
            Self::Categories { .. } => "categories.html",
            Self::NewCategory { .. } => "new_category.html",
            Self::Category { .. } => "category.html",
            Self::EditCategory { .. } => "edit_category.html",
            Self::ContactInfo { .. } => "contact_info.html",
            Self::EditContact { .. } => "edit_contact.html",
        }
    }
}

/// Result of a handler: either go somewhere else or show a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Redirect { to: String, flash: Option<Flash> },
    Render { view: View, flash: Option<Flash> },
}

impl Outcome {
    pub fn redirect(to: impl Into<String>, message: &str) -> Self {
        Self::Redirect {
            to: to.into(),
            flash: Some(Flash::success(message)),
        }
    }

    pub fn render(view: View) -> Self {
        Self::Render { view, flash: None }
    }

    /// Re-render a form with the reason it was rejected.
    pub fn rejected(view: View, error: impl ToString) -> Self {
        Self::Render {
            view,
            flash: Some(Flash::error(error)),
        }
    }

    /// False only for a rejected submission.
    pub fn is_success(&self) -> bool {
        !matches!(self.flash(), Some(Flash { kind: FlashKind::Error, .. }))
    }

    pub fn message(&self) -> Option<&str> {
        self.flash().map(|flash| flash.message.as_str())
    }

    fn flash(&self) -> Option<&Flash> {
        match self {
            Self::Redirect { flash, .. } | Self::Render { flash, .. } => flash.as_ref(),
        }
    }
}
