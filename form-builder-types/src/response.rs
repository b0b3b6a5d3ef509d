use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Answers;

/// A submission that has not been stamped yet.
///
/// The rendering surface builds this on a successful submit; the store
/// assigns the timestamp when appending it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResponse {
    pub id: String,
    pub form_id: String,
    pub answers: Answers,
}

impl NewResponse {
    /// Create a new unstamped response.
    pub fn new(id: impl Into<String>, form_id: impl Into<String>, answers: Answers) -> Self {
        Self {
            id: id.into(),
            form_id: form_id.into(),
            answers,
        }
    }

    /// Stamp the response with its submission time.
    pub fn stamp(self, submitted_at: DateTime<Utc>) -> FormResponse {
        FormResponse {
            id: self.id,
            form_id: self.form_id,
            answers: self.answers,
            submitted_at,
        }
    }
}

/// One recorded submission. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    id: String,
    form_id: String,
    answers: Answers,
    submitted_at: DateTime<Utc>,
}

impl FormResponse {
    /// Get the response id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the id of the form this response belongs to.
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Get the submitted answers.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Get the submission time.
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

impl AsRef<Answers> for FormResponse {
    fn as_ref(&self) -> &Answers {
        &self.answers
    }
}
