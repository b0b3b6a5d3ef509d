use std::fmt;

use serde::{Deserialize, Serialize};

use crate::FieldId;

/// The closed set of input types a field can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input.
    Text,

    /// Numeric input.
    Number,

    /// Email address input.
    Email,

    /// Pick one entry from the field's options.
    Select,

    /// A single tick box.
    Checkbox,

    /// Calendar date input.
    Date,

    /// Multi-line text input.
    Textarea,
}

impl FieldType {
    /// All field types, in palette order.
    pub const ALL: [FieldType; 7] = [
        Self::Text,
        Self::Textarea,
        Self::Number,
        Self::Email,
        Self::Select,
        Self::Checkbox,
        Self::Date,
    ];

    /// The wire name of this type (`"text"`, `"number"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Textarea => "textarea",
        }
    }

    /// The name shown in the field palette.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Text => "Text Input",
            Self::Number => "Number",
            Self::Email => "Email",
            Self::Select => "Dropdown",
            Self::Checkbox => "Checkbox",
            Self::Date => "Date Picker",
            Self::Textarea => "Long Text",
        }
    }

    /// The label given to a freshly added field, e.g. `"New Textarea"`.
    pub fn default_label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("New {}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => "New ".to_string(),
        }
    }

    /// Whether a validation rule pattern applies to this type.
    ///
    /// Date fields are string-like but only carry their date check.
    pub fn accepts_pattern(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Textarea | Self::Email | Self::Select
        )
    }

    /// Whether this type makes a sensible categorical axis in analytics.
    pub fn is_axis_eligible(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Email | Self::Select | Self::Date | Self::Number
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single input definition in a form.
///
/// The id and the type are fixed at creation. Everything else can be
/// changed through [`FormField::patched`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    id: FieldId,

    #[serde(rename = "type")]
    kind: FieldType,

    /// Display name, also the subject of validation messages.
    label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,

    #[serde(default)]
    required: bool,

    /// Only meaningful for select fields.
    #[serde(default)]
    options: Vec<String>,

    /// Regular expression applied to pattern-accepting fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    validation_rule: Option<String>,
}

impl FormField {
    /// Create a new optional field with no placeholder, options or rule.
    pub fn new(id: impl Into<FieldId>, kind: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            placeholder: None,
            required: false,
            options: Vec::new(),
            validation_rule: None,
        }
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Mark the field as required or optional.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the select options.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Set the validation rule pattern.
    pub fn with_validation_rule(mut self, rule: impl Into<String>) -> Self {
        self.validation_rule = Some(rule.into());
        self
    }

    /// Return a copy of this field carrying a fresh id.
    pub fn with_fresh_id(&self) -> Self {
        Self {
            id: FieldId::generate(),
            ..self.clone()
        }
    }

    /// Get the field id.
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// Get the field type.
    pub fn kind(&self) -> FieldType {
        self.kind
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the placeholder, if any.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Check if an answer is mandatory.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the select options.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Get the validation rule. An empty rule counts as no rule.
    pub fn validation_rule(&self) -> Option<&str> {
        self.validation_rule.as_deref().filter(|rule| !rule.is_empty())
    }

    /// Merge a patch into a copy of this field.
    ///
    /// Attributes the patch leaves unset keep their current value; the id
    /// and the type never change.
    pub fn patched(&self, patch: &FieldPatch) -> Self {
        Self {
            id: self.id.clone(),
            kind: self.kind,
            label: patch.label.clone().unwrap_or_else(|| self.label.clone()),
            placeholder: patch
                .placeholder
                .clone()
                .unwrap_or_else(|| self.placeholder.clone()),
            required: patch.required.unwrap_or(self.required),
            options: patch.options.clone().unwrap_or_else(|| self.options.clone()),
            validation_rule: patch
                .validation_rule
                .clone()
                .unwrap_or_else(|| self.validation_rule.clone()),
        }
    }
}

/// A partial update for a [`FormField`].
///
/// `None` means "leave unchanged". For the optional attributes the inner
/// `Option` distinguishes setting a value from clearing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub placeholder: Option<Option<String>>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
    pub validation_rule: Option<Option<String>>,
}

impl FieldPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Some(placeholder.into()));
        self
    }

    /// Remove the placeholder.
    pub fn clear_placeholder(mut self) -> Self {
        self.placeholder = Some(None);
        self
    }

    /// Mark the field as required or optional.
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Replace the select options.
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Set the validation rule pattern.
    pub fn validation_rule(mut self, rule: impl Into<String>) -> Self {
        self.validation_rule = Some(Some(rule.into()));
        self
    }

    /// Remove the validation rule.
    pub fn clear_validation_rule(mut self) -> Self {
        self.validation_rule = Some(None);
        self
    }
}
