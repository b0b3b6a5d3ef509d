//! # form-builder-csv
//!
//! Exports the responses collected by a form as CSV.
//!
//! The first column is the submission time; every current field follows in
//! form order, headed `"<label> (<id>)"`.
//!
//! ```rust
//! use form_builder::{Answers, FieldType, FormField, FormStore};
//!
//! let mut store = FormStore::new();
//! store.set_fields(vec![FormField::new("name", FieldType::Text, "Name")]);
//! store.submit(Answers::new().with("name", "Ada")).unwrap();
//!
//! let csv = form_builder_csv::to_csv(store.fields(), store.responses());
//! assert!(csv.starts_with("SubmittedAt,Name (name)\r\n"));
//! assert!(csv.ends_with(",Ada\r\n"));
//! ```

mod export;

pub use export::{CsvOptions, to_csv, to_csv_with_options, write_csv};
