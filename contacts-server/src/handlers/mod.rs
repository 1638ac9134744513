//! Request handlers, free of HTTP types
//!
//! Each handler takes the store, any entities already resolved from the
//! path, and the parsed form, and decides between a redirect (success) and
//! a re-rendered form (validation failure). Not-found never reaches here:
//! the boundary resolves ids first.

pub mod categories;
pub mod contacts;
pub mod outcome;

pub use outcome::{Flash, FlashKind, Outcome, View};

use crate::models::RecordId;

pub const CATEGORY_CREATED: &str = "The category has been created.";
pub const CATEGORY_UPDATED: &str = "The category has been updated.";
pub const CATEGORY_DELETED: &str = "The category has been deleted.";
pub const CONTACT_ADDED: &str = "The contact was added.";
pub const CONTACT_EDITED: &str = "The contact was edited.";
pub const CONTACT_DELETED: &str = "The contact has been deleted.";
pub const CONTACTS_CLEARED: &str = "All contacts have been deleted.";

/// Path of the category list.
pub fn categories_path() -> String {
    "/categories".to_owned()
}

/// Path of one category's detail page.
pub fn category_path(category_id: &RecordId) -> String {
    format!("/categories/{}", category_id)
}
