//! Validation derived from the current field list.
//!
//! A [`FormSchema`] is rebuilt from scratch whenever the field list changes;
//! it holds one [`FieldRule`] per field and checks a whole answer map at
//! once, reporting every failing field.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::{AnswerValue, Answers, FieldId, FieldType, FormField};

/// Local part and dotted domain with an alphabetic top-level label.
/// Leading dots and consecutive dots are rejected separately.
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// The type-specific part of a field rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    /// Any string (text and textarea fields).
    Text,

    /// A finite number, or a string that parses as one.
    Number,

    /// A syntactically valid email address.
    Email,

    /// A boolean; `true` when required.
    Checkbox,

    /// A string that parses as a calendar date.
    Date,

    /// One of the given options. An empty option list accepts any string.
    Select { options: Vec<String> },
}

impl RuleKind {
    fn for_field(field: &FormField) -> Self {
        match field.kind() {
            FieldType::Text | FieldType::Textarea => Self::Text,
            FieldType::Number => Self::Number,
            FieldType::Email => Self::Email,
            FieldType::Checkbox => Self::Checkbox,
            FieldType::Date => Self::Date,
            FieldType::Select => Self::Select {
                options: field.options().to_vec(),
            },
        }
    }
}

/// The validation rule for a single field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field_id: FieldId,
    label: String,
    required: bool,
    kind: RuleKind,
    pattern: Option<Regex>,
}

impl FieldRule {
    /// Derive the rule for a field.
    ///
    /// A validation rule that does not compile is dropped; the field is then
    /// checked by its type alone.
    pub fn from_field(field: &FormField) -> Self {
        Self {
            field_id: field.id().clone(),
            label: field.label().to_string(),
            required: field.is_required(),
            kind: RuleKind::for_field(field),
            pattern: compile_pattern(field),
        }
    }

    /// Get the id of the field this rule checks.
    pub fn field_id(&self) -> &FieldId {
        &self.field_id
    }

    /// Get the type-specific part of the rule.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Check if an answer is mandatory.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Check if a compiled pattern constraint is attached.
    pub fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }

    /// Validate one answer; `None` means the field was not answered at all.
    ///
    /// Returns the message to show next to the field on failure.
    pub fn validate(&self, value: Option<&AnswerValue>) -> Result<(), String> {
        let value = match value {
            Some(value) if !value.is_blank() => value,
            _ if self.required => return Err(self.missing_message()),
            _ => return Ok(()),
        };

        match &self.kind {
            RuleKind::Number => self.validate_number(value),
            RuleKind::Checkbox => self.validate_checkbox(value),
            _ => match value.as_str() {
                Some(text) => self.validate_text(text),
                None => Err(format!("{} must be text", self.label)),
            },
        }
    }

    fn missing_message(&self) -> String {
        match self.kind {
            RuleKind::Number => format!("{} must be a number", self.label),
            _ => format!("{} is required", self.label),
        }
    }

    fn validate_number(&self, value: &AnswerValue) -> Result<(), String> {
        let number = value
            .as_number()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()));
        match number {
            Some(n) if n.is_finite() => Ok(()),
            _ => Err(format!("{} must be a number", self.label)),
        }
    }

    fn validate_checkbox(&self, value: &AnswerValue) -> Result<(), String> {
        match value.as_bool() {
            Some(true) => Ok(()),
            Some(false) if self.required => Err(format!("{} is required", self.label)),
            Some(false) => Ok(()),
            None => Err(format!("{} must be checked or unchecked", self.label)),
        }
    }

    fn validate_text(&self, text: &str) -> Result<(), String> {
        match &self.kind {
            RuleKind::Email if !is_valid_email(text) => {
                return Err(format!("{} must be a valid email", self.label));
            }
            RuleKind::Date if !is_valid_date(text) => {
                return Err(format!("{} must be a valid date", self.label));
            }
            _ => {}
        }

        if let Some(pattern) = &self.pattern
            && !pattern.is_match(text)
        {
            return Err(format!("Invalid format for {}", self.label));
        }

        if let RuleKind::Select { options } = &self.kind
            && !options.is_empty()
            && !options.iter().any(|option| option == text)
        {
            return Err(format!("Please select a valid option for {}", self.label));
        }

        Ok(())
    }
}

fn compile_pattern(field: &FormField) -> Option<Regex> {
    let rule = field.validation_rule()?;
    if !field.kind().accepts_pattern() {
        return None;
    }
    match Regex::new(rule) {
        Ok(regex) => Some(regex),
        Err(err) => {
            tracing::debug!(
                field_id = %field.id(),
                rule,
                error = %err,
                "ignoring unparsable validation rule"
            );
            None
        }
    }
}

fn is_valid_email(text: &str) -> bool {
    !text.starts_with('.')
        && !text.contains("..")
        && EMAIL_REGEX.as_ref().is_some_and(|regex| regex.is_match(text))
}

/// Calendar date layouts accepted besides the timestamp formats.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

fn is_valid_date(text: &str) -> bool {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(text, format).is_ok())
        || DATE_TIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(text, format).is_ok())
        || DateTime::parse_from_rfc3339(text).is_ok()
        || DateTime::parse_from_rfc2822(text).is_ok()
}

/// Per-field validation failures, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: HashMap<FieldId, String>,
}

impl ValidationErrors {
    /// Get the message for the given field, if it failed.
    pub fn get(&self, field: &FieldId) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Get an iterator over all field-message pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &str)> {
        self.errors.iter().map(|(id, msg)| (id, msg.as_str()))
    }

    /// Get the number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn insert(&mut self, field: &FieldId, message: String) {
        self.errors.entry(field.clone()).or_insert(message);
    }
}

/// A validator for a whole form, derived from its field list.
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    rules: Vec<FieldRule>,
}

impl FormSchema {
    /// Build the schema for the given fields. Never fails.
    pub fn build(fields: &[FormField]) -> Self {
        Self {
            rules: fields.iter().map(FieldRule::from_field).collect(),
        }
    }

    /// Get the rules, in field order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Get the rule for the given field.
    pub fn rule(&self, field: &FieldId) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field_id() == field)
    }

    /// Validate a single answer, e.g. while the user is still typing.
    ///
    /// Unknown fields always pass.
    pub fn validate_field(&self, field: &FieldId, value: Option<&AnswerValue>) -> Result<(), String> {
        match self.rule(field) {
            Some(rule) => rule.validate(value),
            None => Ok(()),
        }
    }

    /// Validate a whole answer map.
    ///
    /// Every field is checked; answers for fields the schema does not know
    /// are ignored.
    pub fn validate(&self, answers: &Answers) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for rule in &self.rules {
            if let Err(message) = rule.validate(answers.get(rule.field_id())) {
                errors.insert(rule.field_id(), message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// The answers a freshly rendered form starts with.
///
/// Checkboxes start unchecked, every other field starts empty.
pub fn default_answers(fields: &[FormField]) -> Answers {
    fields
        .iter()
        .map(|field| {
            let value = match field.kind() {
                FieldType::Checkbox => AnswerValue::Bool(false),
                _ => AnswerValue::String(String::new()),
            };
            (field.id().clone(), value)
        })
        .collect()
}
