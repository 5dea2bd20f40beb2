//! Dict-shape validation
//!
//! Compares a JSON object's keys and value types against a template and
//! reports extra keys, missing keys and type mismatches together.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::DictShapeValidationError;

/// JSON value type expected by a template entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonType {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// Whole number
    Integer,
    /// Any number, whole or not
    Number,
    /// String
    String,
    /// Array
    Array,
    /// Object
    Object,
}

impl JsonType {
    /// Most specific type of a value
    #[must_use]
    pub fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(_) => Self::Bool,
            JsonValue::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            JsonValue::Number(_) => Self::Number,
            JsonValue::String(_) => Self::String,
            JsonValue::Array(_) => Self::Array,
            JsonValue::Object(_) => Self::Object,
        }
    }

    /// Whether a value satisfies this type
    ///
    /// [`JsonType::Number`] accepts integers as well.
    #[must_use]
    pub fn accepts(self, value: &JsonValue) -> bool {
        let actual = Self::of(value);
        actual == self || (self == Self::Number && actual == Self::Integer)
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// Expected key set and value type per key
pub type ShapeTemplate = BTreeMap<String, JsonType>;

/// One key whose value has the wrong type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    /// Offending key
    pub key: String,
    /// Type required by the template
    pub expected: JsonType,
    /// Type found
    pub found: JsonType,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' should be {} but is {}", self.key, self.expected, self.found)
    }
}

/// Validate a JSON object against a template
///
/// # Errors
/// Returns [`DictShapeValidationError`] listing every extra key, missing key
/// and type mismatch, each sorted by key
pub fn validate_dict_shape(
    actual: &Map<String, JsonValue>,
    template: &ShapeTemplate,
) -> Result<(), DictShapeValidationError> {
    let mut extra_keys: Vec<String> = actual
        .keys()
        .filter(|key| !template.contains_key(*key))
        .cloned()
        .collect();
    extra_keys.sort();

    let mut missing_keys = Vec::new();
    let mut type_mismatches = Vec::new();
    for (key, expected) in template {
        match actual.get(key) {
            None => missing_keys.push(key.clone()),
            Some(value) if !expected.accepts(value) => type_mismatches.push(TypeMismatch {
                key: key.clone(),
                expected: *expected,
                found: JsonType::of(value),
            }),
            Some(_) => {}
        }
    }

    if extra_keys.is_empty() && missing_keys.is_empty() && type_mismatches.is_empty() {
        Ok(())
    } else {
        Err(DictShapeValidationError {
            extra_keys,
            missing_keys,
            type_mismatches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template() -> ShapeTemplate {
        ShapeTemplate::from([("12".to_string(), JsonType::Integer)])
    }

    fn object(value: JsonValue) -> Map<String, JsonValue> {
        match value {
            JsonValue::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn matching_shape_passes() {
        assert!(validate_dict_shape(&object(json!({"12": 42})), &template()).is_ok());
    }

    #[test]
    fn wrong_type_is_reported() {
        let err = validate_dict_shape(&object(json!({"12": "x"})), &template()).unwrap_err();
        assert!(err.extra_keys.is_empty());
        assert!(err.missing_keys.is_empty());
        assert_eq!(
            err.type_mismatches,
            vec![TypeMismatch {
                key: "12".into(),
                expected: JsonType::Integer,
                found: JsonType::String,
            }]
        );
    }

    #[test]
    fn extra_and_missing_reported_together() {
        let err = validate_dict_shape(&object(json!({"99": 1})), &template()).unwrap_err();
        assert_eq!(err.extra_keys, vec!["99".to_string()]);
        assert_eq!(err.missing_keys, vec!["12".to_string()]);
        assert!(err.type_mismatches.is_empty());
    }

    #[test]
    fn number_accepts_integer_but_not_vice_versa() {
        assert!(JsonType::Number.accepts(&json!(3)));
        assert!(JsonType::Number.accepts(&json!(3.5)));
        assert!(!JsonType::Integer.accepts(&json!(3.5)));
    }

    #[test]
    fn error_message_lists_everything() {
        let template = ShapeTemplate::from([
            ("a".to_string(), JsonType::Bool),
            ("b".to_string(), JsonType::String),
        ]);
        let err = validate_dict_shape(&object(json!({"a": 1, "c": null})), &template).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("\"c\""));
        assert!(message.contains("\"b\""));
        assert!(message.contains("'a' should be bool but is integer"));
    }
}
