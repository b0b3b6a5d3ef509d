//! The single authoritative holder of form state.

use std::collections::HashSet;

use chrono::Utc;

use crate::schema::{FormSchema, ValidationErrors, default_answers};
use crate::{Answers, FieldId, FieldPatch, FieldType, FormField, FormResponse, NewResponse};

/// Error type for store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Index {index} is out of range for {len} field(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Options for a [`FormStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoreOptions {
    /// Stamped on every response submitted through [`FormStore::submit`].
    pub form_id: String,

    /// The options a newly added select field starts with.
    pub select_seed_options: Vec<String>,
}

impl StoreOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            form_id: "current-form".to_string(),
            select_seed_options: vec!["Option 1".to_string(), "Option 2".to_string()],
        }
    }

    /// Set the form id.
    pub fn with_form_id(mut self, form_id: impl Into<String>) -> Self {
        self.form_id = form_id.into();
        self
    }

    /// Set the seed options for new select fields.
    pub fn with_select_seed_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select_seed_options = options.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the field list, the recorded responses and the field selected for
/// editing.
///
/// Consumers receive the store by reference; every mutation takes
/// `&mut self`, so mutations are applied one at a time in call order and
/// are visible to the next reader immediately. Field order is the render
/// order and only [`FormStore::move_field`] and [`FormStore::set_fields`]
/// change it.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    options: StoreOptions,
    fields: Vec<FormField>,
    responses: Vec<FormResponse>,
    active_field: Option<FieldId>,
}

impl FormStore {
    /// Create an empty store with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given options.
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Get the options.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Get the fields, in render order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Get a field by id.
    pub fn field(&self, id: &FieldId) -> Option<&FormField> {
        self.fields.iter().find(|field| field.id() == id)
    }

    /// Get the recorded responses, in submission order.
    pub fn responses(&self) -> &[FormResponse] {
        &self.responses
    }

    /// Get the id of the field selected for editing.
    pub fn active_field_id(&self) -> Option<&FieldId> {
        self.active_field.as_ref()
    }

    /// Get the field selected for editing.
    pub fn active_field(&self) -> Option<&FormField> {
        self.active_field.as_ref().and_then(|id| self.field(id))
    }

    /// Select a field for editing, or clear the selection with `None`.
    ///
    /// Selecting an id that is not in the field list is a no-op.
    pub fn set_active_field(&mut self, id: Option<FieldId>) {
        match id {
            Some(id) if self.field(&id).is_none() => {
                tracing::debug!(field_id = %id, "ignoring selection of unknown field");
            }
            id => self.active_field = id,
        }
    }

    /// Replace the whole field list.
    ///
    /// Field ids are unique within a form: of several fields sharing an id
    /// only the first is kept. The selection survives only if the selected
    /// id is still present.
    pub fn set_fields(&mut self, fields: Vec<FormField>) {
        tracing::debug!(count = fields.len(), "replacing field list");
        let mut seen = HashSet::new();
        self.fields = fields
            .into_iter()
            .filter(|field| {
                let first = seen.insert(field.id().clone());
                if !first {
                    tracing::debug!(field_id = %field.id(), "dropping field with duplicate id");
                }
                first
            })
            .collect();
        if let Some(active) = &self.active_field
            && self.field(active).is_none()
        {
            self.active_field = None;
        }
    }

    /// Append a new field of the given type and select it.
    ///
    /// The field is optional, labelled `"New <Type>"`, and select fields are
    /// seeded with the configured options.
    pub fn add_field(&mut self, kind: FieldType) -> FieldId {
        let id = FieldId::generate();
        let options = match kind {
            FieldType::Select => self.options.select_seed_options.clone(),
            _ => Vec::new(),
        };
        let field = FormField::new(id.clone(), kind, kind.default_label())
            .with_placeholder("")
            .with_options(options);

        tracing::debug!(field_id = %id, %kind, "adding field");
        self.fields.push(field);
        self.active_field = Some(id.clone());
        id
    }

    /// Merge a patch into the field with the given id.
    ///
    /// Returns `false` (and changes nothing) if there is no such field.
    pub fn update_field(&mut self, id: &FieldId, patch: &FieldPatch) -> bool {
        match self.fields.iter_mut().find(|field| field.id() == id) {
            Some(field) => {
                *field = field.patched(patch);
                tracing::debug!(field_id = %id, "updated field");
                true
            }
            None => {
                tracing::debug!(field_id = %id, "ignoring update of unknown field");
                false
            }
        }
    }

    /// Delete the field with the given id, clearing the selection if it
    /// pointed at it.
    ///
    /// Answers already recorded for the field are kept. Returns `false` if
    /// there is no such field.
    pub fn remove_field(&mut self, id: &FieldId) -> bool {
        let before = self.fields.len();
        self.fields.retain(|field| field.id() != id);
        if self.active_field.as_ref() == Some(id) {
            self.active_field = None;
        }

        let removed = self.fields.len() != before;
        if removed {
            tracing::debug!(field_id = %id, "removed field");
        } else {
            tracing::debug!(field_id = %id, "ignoring removal of unknown field");
        }
        removed
    }

    /// Move the field at `from` so that it ends up at index `to`.
    ///
    /// The field is taken out and reinserted; all other fields keep their
    /// relative order. Both indices must address an existing field, else
    /// the list is left untouched.
    pub fn move_field(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        let len = self.fields.len();
        for index in [from, to] {
            if index >= len {
                tracing::debug!(from, to, len, "rejecting out-of-range move");
                return Err(StoreError::IndexOutOfRange { index, len });
            }
        }

        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        tracing::debug!(from, to, "moved field");
        Ok(())
    }

    /// Stamp a response with the current time and record it.
    pub fn add_response(&mut self, response: NewResponse) {
        self.record(response.stamp(Utc::now()));
    }

    fn record(&mut self, response: FormResponse) -> &FormResponse {
        tracing::debug!(response_id = response.id(), "recorded response");
        let index = self.responses.len();
        self.responses.push(response);
        &self.responses[index]
    }

    /// The validator for the current field list.
    pub fn schema(&self) -> FormSchema {
        FormSchema::build(&self.fields)
    }

    /// The answers a freshly rendered form starts with.
    pub fn default_answers(&self) -> Answers {
        default_answers(&self.fields)
    }

    /// Validate the answers and record them as a new response.
    ///
    /// On failure every field error is returned and nothing is recorded.
    pub fn submit(&mut self, answers: Answers) -> Result<&FormResponse, ValidationErrors> {
        self.schema().validate(&answers)?;

        let id = uuid::Uuid::new_v4().to_string();
        let response = NewResponse::new(id, self.options.form_id.clone(), answers);
        Ok(self.record(response.stamp(Utc::now())))
    }
}
