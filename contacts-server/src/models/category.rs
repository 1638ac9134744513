use serde::{Deserialize, Serialize};

use super::{Contact, RecordId};

/// A named grouping that owns zero or more contacts.
///
/// Stores always return categories with `contacts` populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl Category {
    pub fn new(id: RecordId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            contacts: Vec::new(),
        }
    }
}
