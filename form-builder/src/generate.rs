//! Replacing the form with one produced by a [`FormGenerator`].

use serde::Deserialize;

use crate::{FieldId, FieldType, FormField, FormGenerator, FormStore, GenerationError};

/// One entry of a generated field list, before it gets an id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedField {
    #[serde(rename = "type")]
    kind: FieldType,
    label: String,
    required: bool,
    #[serde(default)]
    placeholder: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    validation_rule: Option<String>,
}

impl GeneratedField {
    fn into_field(self) -> FormField {
        let mut field = FormField::new(FieldId::generate(), self.kind, self.label)
            .with_required(self.required)
            .with_options(self.options.unwrap_or_default());
        if let Some(placeholder) = self.placeholder {
            field = field.with_placeholder(placeholder);
        }
        if let Some(rule) = self.validation_rule {
            field = field.with_validation_rule(rule);
        }
        field
    }
}

/// Parse a generator's JSON output into fields.
///
/// The payload is an array of `{type, label, required, placeholder?,
/// options?, validationRule?}` objects. Every field gets a fresh id; ids in
/// the payload are ignored. Missing options default to an empty list.
pub fn parse_generated_fields(json: &str) -> Result<Vec<FormField>, GenerationError> {
    let generated: Vec<GeneratedField> = serde_json::from_str(json)?;
    Ok(generated.into_iter().map(GeneratedField::into_field).collect())
}

/// Ask the generator for a form and, only if that succeeds, replace the
/// store's fields with it.
///
/// A blank prompt is rejected before the generator is called. On any error
/// the store is left untouched. Returns the number of fields applied, which
/// is lower than the generated count when ids repeat.
pub fn generate_form<G: FormGenerator>(
    store: &mut FormStore,
    generator: &G,
    prompt: &str,
) -> Result<usize, GenerationError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(GenerationError::EmptyPrompt);
    }

    let fields = match generator.generate(prompt) {
        Ok(fields) => fields,
        Err(err) => {
            let err = GenerationError::backend(err);
            tracing::warn!(error = %err, "form generation failed");
            return Err(err);
        }
    };

    store.set_fields(fields);
    let count = store.fields().len();
    tracing::info!(count, "applied generated form");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn parses_minimal_entries() {
        let fields = parse_generated_fields(
            r#"[
                {"type": "text", "label": "Name", "required": true},
                {"type": "select", "label": "Track", "required": false,
                 "options": ["Web", "Data", "Mobile"], "placeholder": "Pick one"}
            ]"#,
        )
        .unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].kind(), FieldType::Text);
        assert!(fields[0].is_required());
        assert!(fields[0].options().is_empty());
        assert_eq!(fields[1].options(), ["Web", "Data", "Mobile"]);
        assert_eq!(fields[1].placeholder(), Some("Pick one"));
    }

    #[test]
    fn payload_ids_are_replaced() {
        let fields = parse_generated_fields(
            r#"[
                {"id": "dup", "type": "text", "label": "A", "required": false},
                {"id": "dup", "type": "text", "label": "B", "required": false}
            ]"#,
        )
        .unwrap();

        let ids: HashSet<_> = fields.iter().map(|f| f.id().clone()).collect();
        assert_eq!(ids.len(), 2);
        assert!(!ids.contains(&FieldId::new("dup")));
    }

    #[test]
    fn unknown_type_is_a_parse_error() {
        let err = parse_generated_fields(r#"[{"type": "slider", "label": "A", "required": true}]"#)
            .unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[test]
    fn missing_required_key_is_a_parse_error() {
        let err = parse_generated_fields(r#"[{"type": "text", "label": "A"}]"#).unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }
}
