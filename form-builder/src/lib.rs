//! # form-builder
//!
//! The data model and derived behaviours of a form builder.
//!
//! A form is an ordered list of typed [`FormField`]s held by a [`FormStore`],
//! together with the [`FormResponse`]s submitted against it. Everything else
//! is derived from that state on demand:
//!
//! - [`FormSchema`] - a validator built from the current field list
//! - [`aggregate`] - response counts grouped by one or more fields
//! - [`AnalyticsReport`] - the numbers behind the analytics chart
//! - [`generate_form`] - replaces the form with one from a [`FormGenerator`]
//!
//! ## Usage
//!
//! ```rust
//! use form_builder::{Answers, FieldPatch, FieldType, FormStore};
//!
//! let mut store = FormStore::new();
//! let color = store.add_field(FieldType::Select);
//! store.update_field(&color, &FieldPatch::new().label("Favourite color").required(true));
//!
//! // "Option 1" is one of the seeded select options
//! let answers = Answers::new().with(color.clone(), "Option 1");
//! assert!(store.submit(answers).is_ok());
//!
//! let rejected = store.submit(Answers::new().with(color.clone(), "Purple"));
//! assert!(rejected.unwrap_err().get(&color).is_some());
//! ```
//!
//! ## Logging
//!
//! Mutations and discarded validation rules are reported through `tracing`.
//! Install a subscriber in the binary to see them.

// Re-export all types from form-builder-types
pub use form_builder_types::*;

mod schema;
pub use schema::{FieldRule, FormSchema, RuleKind, ValidationErrors, default_answers};

mod aggregate;
pub use aggregate::{
    AggregateOptions, Bucket, DEFAULT_DELIMITER, MISSING_TOKEN, aggregate, aggregate_with_options,
    eligible_axis_fields,
};

mod analytics;
pub use analytics::{AnalyticsReport, ChartConfig, ChartKind, resolve_axis_selection};

mod store;
pub use store::{FormStore, StoreError, StoreOptions};

mod generate;
pub use generate::{generate_form, parse_generated_fields};

// Test generator for exercising form generation without a network
mod test_generator;
pub use test_generator::{TestGenerator, TestGeneratorError};
