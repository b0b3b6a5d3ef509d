//! Test generator for exercising form generation without a network.
//!
//! `TestGenerator` returns a pre-defined field list (or a pre-defined
//! failure) for any prompt. This is useful for testing code that drives
//! [`generate_form`](crate::generate_form).
//!
//! # Example
//!
//! ```rust
//! use form_builder::{FieldType, FormField, FormStore, TestGenerator, generate_form};
//!
//! let generator = TestGenerator::new()
//!     .with_field(FormField::new("name", FieldType::Text, "Name"))
//!     .with_field(FormField::new("email", FieldType::Email, "Email"));
//!
//! let mut store = FormStore::new();
//! let applied = generate_form(&mut store, &generator, "A contact form").unwrap();
//!
//! assert_eq!(applied, 2);
//! assert_eq!(store.fields()[1].label(), "Email");
//! ```

use std::cell::RefCell;

use crate::{FormField, FormGenerator, GenerationError};

/// A generator that returns pre-configured fields.
///
/// Fields are handed out with fresh ids on every call, the way a real
/// generator would produce them. Prompts are recorded for inspection.
#[derive(Debug, Clone, Default)]
pub struct TestGenerator {
    fields: Vec<FormField>,
    failure: Option<Failure>,
    prompts: RefCell<Vec<String>>,
}

#[derive(Debug, Clone)]
enum Failure {
    Unavailable(String),
    Cancelled,
}

/// Error type for TestGenerator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TestGeneratorError {
    #[error("Generator unavailable: {0}")]
    Unavailable(String),
}

impl TestGenerator {
    /// Create a generator that produces an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the generated form.
    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// Add several fields to the generated form.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FormField>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Make every call fail with the given message.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(Failure::Unavailable(message.into()));
        self
    }

    /// Make every call end as if the user had cancelled.
    pub fn cancelled(mut self) -> Self {
        self.failure = Some(Failure::Cancelled);
        self
    }

    /// The prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl FormGenerator for TestGenerator {
    type Error = GenerationError;

    fn generate(&self, prompt: &str) -> Result<Vec<FormField>, Self::Error> {
        self.prompts.borrow_mut().push(prompt.to_string());

        match &self.failure {
            Some(Failure::Cancelled) => return Err(GenerationError::Cancelled),
            Some(Failure::Unavailable(message)) => {
                return Err(GenerationError::backend(TestGeneratorError::Unavailable(
                    message.clone(),
                )));
            }
            None => {}
        }
        Ok(self.fields.iter().map(FormField::with_fresh_id).collect())
    }
}
