//! CSV export implementation.

use std::io;

use chrono::{DateTime, SecondsFormat, Utc};
use form_builder::{AnswerValue, FormField, FormResponse};

/// Options for CSV export.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Prefix of the suggested download file name.
    pub filename_prefix: String,
    /// Cell separator.
    pub separator: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            filename_prefix: "form-responses".to_string(),
            separator: ',',
        }
    }

    /// Set the file name prefix.
    pub fn with_filename_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filename_prefix = prefix.into();
        self
    }

    /// Set the cell separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// The file name for an export taken at `at`: `<prefix>-<unix millis>.csv`.
    pub fn file_name(&self, at: DateTime<Utc>) -> String {
        format!("{}-{}.csv", self.filename_prefix, at.timestamp_millis())
    }
}

/// Export responses as CSV with default options.
pub fn to_csv(fields: &[FormField], responses: &[FormResponse]) -> String {
    to_csv_with_options(fields, responses, &CsvOptions::new())
}

/// Export responses as CSV with custom options.
pub fn to_csv_with_options(
    fields: &[FormField],
    responses: &[FormResponse],
    options: &CsvOptions,
) -> String {
    let mut csv = String::new();

    push_row(&mut csv, header(fields), options.separator);
    for response in responses {
        push_row(&mut csv, row(fields, response), options.separator);
    }

    tracing::debug!(
        fields = fields.len(),
        responses = responses.len(),
        "exported responses as csv"
    );
    csv
}

/// Write the CSV export to `writer`.
pub fn write_csv<W: io::Write>(
    mut writer: W,
    fields: &[FormField],
    responses: &[FormResponse],
    options: &CsvOptions,
) -> io::Result<()> {
    writer.write_all(to_csv_with_options(fields, responses, options).as_bytes())?;
    writer.flush()
}

fn header(fields: &[FormField]) -> Vec<String> {
    std::iter::once("SubmittedAt".to_string())
        .chain(
            fields
                .iter()
                .map(|field| format!("{} ({})", field.label(), field.id())),
        )
        .collect()
}

fn row(fields: &[FormField], response: &FormResponse) -> Vec<String> {
    let submitted_at = response
        .submitted_at()
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    std::iter::once(submitted_at)
        .chain(
            fields
                .iter()
                .map(|field| answer_cell(response.answers().get(field.id()))),
        )
        .collect()
}

fn answer_cell(value: Option<&AnswerValue>) -> String {
    match value {
        None | Some(AnswerValue::Null) => String::new(),
        Some(value) => value.to_string(),
    }
}

fn push_row(csv: &mut String, cells: Vec<String>, separator: char) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            csv.push(separator);
        }
        csv.push_str(&escape_cell(cell, separator));
    }
    csv.push_str("\r\n");
}

/// Quote a cell if it would otherwise be misread.
fn escape_cell(cell: &str, separator: char) -> String {
    let needs_quotes = cell.contains(separator)
        || cell.contains(['"', '\r', '\n'])
        || cell.starts_with(char::is_whitespace)
        || cell.ends_with(char::is_whitespace);

    if needs_quotes {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
