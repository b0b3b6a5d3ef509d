use std::fmt;

use serde::{Deserialize, Serialize};

/// A single submitted value for one field.
///
/// The expected variant depends on the referenced field's type: `String`
/// for text, email, select, date and textarea fields, `Number` for number
/// fields and `Bool` for checkboxes. `Null` stands for an explicitly
/// cleared input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// No value (a cleared input).
    Null,

    /// A boolean value (from checkbox fields).
    Bool(bool),

    /// A numeric value (from number fields).
    Number(f64),

    /// A string value (from every string-like field).
    String(String),
}

impl AnswerValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Check if this value counts as "not answered": null or the empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// Renders the value the way it is shown in bucket labels and exports.
///
/// Whole numbers drop their fractional part (`2`, not `2.0`) and `-0`
/// renders as `0`. Non-finite numbers render as `NaN` or `Infinity`.
impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write_number(f, *n),
            Self::String(s) => f.write_str(s),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{n}")
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for AnswerValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for AnswerValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<AnswerValue>> From<Option<T>> for AnswerValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values() {
        assert!(AnswerValue::Null.is_blank());
        assert!(AnswerValue::from("").is_blank());
        assert!(!AnswerValue::from(" ").is_blank());
        assert!(!AnswerValue::from(false).is_blank());
        assert!(!AnswerValue::from(0).is_blank());
    }

    #[test]
    fn display_numbers() {
        assert_eq!(AnswerValue::from(2).to_string(), "2");
        assert_eq!(AnswerValue::from(2.5).to_string(), "2.5");
        assert_eq!(AnswerValue::from(-0.0).to_string(), "0");
        assert_eq!(AnswerValue::from(f64::NAN).to_string(), "NaN");
        assert_eq!(AnswerValue::from(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn display_other_values() {
        assert_eq!(AnswerValue::from(true).to_string(), "true");
        assert_eq!(AnswerValue::from("x").to_string(), "x");
        assert_eq!(AnswerValue::Null.to_string(), "null");
    }

    #[test]
    fn deserializes_untagged_json() {
        let values: Vec<AnswerValue> =
            serde_json::from_str(r#"[null, true, 3, 1.5, "hi"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                AnswerValue::Null,
                AnswerValue::Bool(true),
                AnswerValue::Number(3.0),
                AnswerValue::Number(1.5),
                AnswerValue::String("hi".to_string()),
            ]
        );
    }

    #[test]
    fn option_conversion() {
        assert_eq!(AnswerValue::from(None::<bool>), AnswerValue::Null);
        assert_eq!(AnswerValue::from(Some("a")), AnswerValue::from("a"));
    }
}
