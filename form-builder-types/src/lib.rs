//! Core types for the form-builder crate.
//!
//! This crate provides the foundational types for defining forms:
//! - `FormField` and `FieldType` - Individual input definitions and their types
//! - `FieldPatch` - Partial updates applied to a field
//! - `Answers`, `AnswerValue` and `FieldId` - Submitted data keyed by field id
//! - `FormResponse` and `NewResponse` - One submission, before and after stamping
//! - `FormGenerator` trait - For plugging in an external form generator

mod field_id;
pub use field_id::FieldId;

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::Answers;

mod field;
pub use field::{FieldPatch, FieldType, FormField};

mod response;
pub use response::{FormResponse, NewResponse};

mod error;
pub use error::GenerationError;

mod traits;
pub use traits::FormGenerator;
