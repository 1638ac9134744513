//! Store-assigned record identifiers

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a category or contact.
///
/// The relational store hands out sequential integers, the session store
/// random UUIDs. Both travel through URLs and templates as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier (session store).
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Interpret the id as a `serial` key.
    ///
    /// Returns `None` for anything that is not a plain integer, which the
    /// relational store treats as "no such record".
    pub fn as_serial(&self) -> Option<i32> {
        self.0.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i32> for RecordId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_ids_parse() {
        assert_eq!(RecordId::from(42).as_serial(), Some(42));
        assert_eq!(RecordId::new("7").as_serial(), Some(7));
    }

    #[test]
    fn uuid_ids_are_not_serial() {
        let id = RecordId::random();
        assert_eq!(id.as_serial(), None);
        assert_ne!(id, RecordId::random());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&RecordId::from(3)).unwrap();
        assert_eq!(json, r#""3""#);
    }
}
