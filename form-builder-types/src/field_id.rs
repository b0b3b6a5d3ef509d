use std::fmt;

use serde::{Deserialize, Serialize};

/// The identifier of a field, e.g., `"3f2a9c1b"`.
///
/// Used as the join key between field definitions, the keys of `Answers`,
/// and the error map produced by validation. Ids are opaque: nothing is
/// derived from their content.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId {
    id: String,
}

impl FieldId {
    /// Create an id from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for FieldId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FieldId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for FieldId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&FieldId> for FieldId {
    fn from(id: &FieldId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.id
    }
}
