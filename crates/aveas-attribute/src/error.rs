//! Attribute-level error taxonomy
//!
//! Every variant is raised when a single attribute is built or decoded,
//! independent of the container it ends up in.

use crate::choice::ChoiceSet;
use crate::kind::AttributeKind;
use crate::value::ValueShape;

/// Errors raised while constructing or decoding one attribute
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttributeError {
    /// Value does not have the shape the kind declares
    #[error("{kind} expects {expected}, got {found}")]
    ShapeMismatch {
        /// Offending kind
        kind: AttributeKind,
        /// Declared shape
        expected: ValueShape,
        /// Description of what was supplied
        found: &'static str,
    },

    /// Fixed-length tuple has the wrong number of elements
    #[error("{kind} expects {expected} elements, got {found}")]
    Arity {
        /// Offending kind
        kind: AttributeKind,
        /// Declared tuple length
        expected: usize,
        /// Supplied length
        found: usize,
    },

    /// String is not a member of the kind's closed enumeration
    #[error("{kind}: '{value}' is not a valid {set} value")]
    UnknownChoice {
        /// Offending kind
        kind: AttributeKind,
        /// Enumeration the value was checked against
        set: ChoiceSet,
        /// Rejected wire string
        value: String,
    },

    /// Probability vector does not sum to one
    #[error("{kind}: probabilities must sum to 1, got {sum}")]
    ProbabilitySum {
        /// Offending kind
        kind: AttributeKind,
        /// Actual sum
        sum: f64,
    },

    /// Scalar lies outside the kind's closed interval
    #[error("{kind}: {value} is outside [{min}, {max}]")]
    Range {
        /// Offending kind
        kind: AttributeKind,
        /// Rejected value
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// Real value is NaN or infinite
    #[error("{kind}: values must be finite")]
    NonFinite {
        /// Offending kind
        kind: AttributeKind,
    },

    /// Wire name matches no catalog entry
    #[error("unknown attribute name '{0}'")]
    UnknownName(String),

    /// Wire `type` tag differs from the kind's fixed tag
    #[error("{kind}: expected type tag {expected:?}, found {found:?}")]
    TypeTag {
        /// Offending kind
        kind: AttributeKind,
        /// Fixed tag of the kind
        expected: Option<&'static str>,
        /// Tag found on the wire
        found: Option<String>,
    },
}

/// A string that is not one of an enumeration's wire values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {enumeration} value")]
pub struct UnknownWireValue {
    /// Name of the enumeration
    pub enumeration: &'static str,
    /// Rejected wire string
    pub value: String,
}
