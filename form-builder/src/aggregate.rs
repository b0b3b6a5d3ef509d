//! Grouping of responses into countable buckets for charting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AnswerValue, Answers, FieldId, FormField};

/// The delimiter joining per-field tokens into a bucket label.
pub const DEFAULT_DELIMITER: &str = " | ";

/// The token standing in for a missing, null or empty answer.
pub const MISSING_TOKEN: &str = "N/A";

/// One distinct composite key and the number of responses that map to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub bucket_label: String,
    pub count: usize,
}

impl Bucket {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            bucket_label: label.into(),
            count,
        }
    }
}

/// Options for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateOptions {
    /// Joins the per-field tokens of a bucket label.
    pub delimiter: String,
}

impl AggregateOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Set the delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Count responses per composite key over the given fields.
///
/// For every response the answers to `field_ids` (in the given order) are
/// rendered as tokens and joined with `delimiter`; missing, null and empty
/// answers become [`MISSING_TOKEN`]. Buckets come out in order of first
/// occurrence. No responses or no field ids yield no buckets.
///
/// ```rust
/// use form_builder::{Answers, Bucket, FieldId, aggregate};
///
/// let responses = [
///     Answers::new().with("a", "x"),
///     Answers::new().with("a", "x"),
///     Answers::new().with("a", "y"),
/// ];
/// let buckets = aggregate(&responses, &[FieldId::new("a")], " | ");
/// assert_eq!(buckets, vec![Bucket::new("x", 2), Bucket::new("y", 1)]);
/// ```
pub fn aggregate<R: AsRef<Answers>>(
    responses: &[R],
    field_ids: &[FieldId],
    delimiter: &str,
) -> Vec<Bucket> {
    if responses.is_empty() || field_ids.is_empty() {
        return Vec::new();
    }

    let mut buckets: Vec<Bucket> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for response in responses {
        let key = bucket_key(response.as_ref(), field_ids, delimiter);
        match positions.get(&key) {
            Some(&index) => buckets[index].count += 1,
            None => {
                positions.insert(key.clone(), buckets.len());
                buckets.push(Bucket::new(key, 1));
            }
        }
    }

    buckets
}

/// [`aggregate`] with the delimiter taken from `options`.
pub fn aggregate_with_options<R: AsRef<Answers>>(
    responses: &[R],
    field_ids: &[FieldId],
    options: &AggregateOptions,
) -> Vec<Bucket> {
    aggregate(responses, field_ids, &options.delimiter)
}

fn bucket_key(answers: &Answers, field_ids: &[FieldId], delimiter: &str) -> String {
    field_ids
        .iter()
        .map(|id| token(answers.get(id)))
        .collect::<Vec<_>>()
        .join(delimiter)
}

fn token(value: Option<&AnswerValue>) -> String {
    match value {
        Some(value) if !value.is_blank() => value.to_string(),
        _ => MISSING_TOKEN.to_string(),
    }
}

/// The fields that make sensible categorical axes, in form order.
///
/// Checkbox and textarea fields are left out.
pub fn eligible_axis_fields(fields: &[FormField]) -> Vec<&FormField> {
    fields
        .iter()
        .filter(|field| field.kind().is_axis_eligible())
        .collect()
}
