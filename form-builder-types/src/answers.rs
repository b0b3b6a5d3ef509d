use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AnswerValue, FieldId};

/// The answers of one submission, keyed by field id.
///
/// Keys are not checked against any field list: answers for fields that
/// were deleted after submission stay in the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: HashMap<FieldId, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<FieldId>, value: impl Into<AnswerValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Insert an answer for the given field.
    pub fn insert(&mut self, field: impl Into<FieldId>, value: impl Into<AnswerValue>) {
        self.values.insert(field.into(), value.into());
    }

    /// Get the answer for the given field.
    pub fn get(&self, field: &FieldId) -> Option<&AnswerValue> {
        self.values.get(field)
    }

    /// Check if an answer exists for the given field.
    pub fn contains(&self, field: &FieldId) -> bool {
        self.values.contains_key(field)
    }

    /// Get an iterator over all field-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &AnswerValue)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Answers
where
    K: Into<FieldId>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Answers::new();
        for (field, value) in iter {
            answers.insert(field, value);
        }
        answers
    }
}

impl AsRef<Answers> for Answers {
    fn as_ref(&self) -> &Answers {
        self
    }
}

impl IntoIterator for Answers {
    type Item = (FieldId, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<FieldId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a FieldId, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, FieldId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
