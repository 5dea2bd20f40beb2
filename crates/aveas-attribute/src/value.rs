//! Value kinds, shapes and concrete values
//!
//! - [`ValueKind`]: the container bucket an attribute belongs to
//! - [`ValueShape`]: what an attribute's `val` looks like on the wire
//! - [`ValueConstraint`]: local numeric invariant checked at construction
//! - [`AttributeValue`]: a concrete value

use std::fmt;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::choice::{Choice, ChoiceSet};

/// Tolerance used when checking that probabilities sum to one
pub const PROBABILITY_EPSILON: f64 = 1e-9;

/// Bucket of an attribute container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    /// `boolean` bucket
    Boolean,
    /// `num` bucket
    Number,
    /// `text` bucket
    Text,
    /// `vec` bucket
    Vector,
    /// `cuboid` bucket
    Cuboid,
}

impl ValueKind {
    /// Every bucket in wire order
    pub const ALL: [Self; 5] = [
        Self::Boolean,
        Self::Number,
        Self::Text,
        Self::Vector,
        Self::Cuboid,
    ];

    /// Field name of the bucket on the wire
    #[inline]
    #[must_use]
    pub const fn bucket_name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "num",
            Self::Text => "text",
            Self::Vector => "vec",
            Self::Cuboid => "cuboid",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.bucket_name())
    }
}

/// Wire shape of an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueShape {
    /// `true` / `false`
    Boolean,
    /// Whole number
    Integer,
    /// Real number; integers are accepted and widened
    Float,
    /// Free text
    Text,
    /// One wire string of a closed enumeration
    Choice(ChoiceSet),
    /// Fixed-length tuple of reals
    Floats(usize),
    /// Variable-length sequence of reals
    FloatSeq,
    /// Variable-length sequence of strings
    TextSeq,
    /// Fixed-length tuple of enumeration values
    Choices(ChoiceSet, usize),
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("a boolean"),
            Self::Integer => f.write_str("an integer"),
            Self::Float => f.write_str("a number"),
            Self::Text => f.write_str("a string"),
            Self::Choice(set) => write!(f, "one {set} value"),
            Self::Floats(n) => write!(f, "{n} numbers"),
            Self::FloatSeq => f.write_str("a list of numbers"),
            Self::TextSeq => f.write_str("a list of strings"),
            Self::Choices(set, n) => write!(f, "{n} {set} values"),
        }
    }
}

/// Local invariant of a single attribute value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueConstraint {
    /// Elements are probabilities that sum to one within [`PROBABILITY_EPSILON`]
    ProbabilitySum,
    /// Scalar lies in the closed interval `[min, max]`
    Range {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

/// Concrete attribute value
///
/// Serializes to the bare JSON form used for `val`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean
    Boolean(bool),
    /// Whole number
    Integer(i64),
    /// Real number
    Float(f64),
    /// Free text
    Text(String),
    /// Enumeration value
    Choice(Choice),
    /// Tuple or sequence of reals
    Floats(Vec<f64>),
    /// Sequence of strings
    Texts(Vec<String>),
    /// Tuple of enumeration values
    Choices(Vec<Choice>),
}

impl AttributeValue {
    /// Short description used in shape-mismatch diagnostics
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "a boolean",
            Self::Integer(_) => "an integer",
            Self::Float(_) => "a number",
            Self::Text(_) => "a string",
            Self::Choice(_) => "an enumeration value",
            Self::Floats(_) => "a list of numbers",
            Self::Texts(_) => "a list of strings",
            Self::Choices(_) => "a list of enumeration values",
        }
    }
}

impl From<bool> for AttributeValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for AttributeValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttributeValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<f64>> for AttributeValue {
    #[inline]
    fn from(value: Vec<f64>) -> Self {
        Self::Floats(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    #[inline]
    fn from(value: Vec<String>) -> Self {
        Self::Texts(value)
    }
}

impl From<Choice> for AttributeValue {
    #[inline]
    fn from(value: Choice) -> Self {
        Self::Choice(value)
    }
}

/// Describe the JSON type of a raw `val`
pub(crate) const fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a list",
        JsonValue::Object(_) => "an object",
    }
}
