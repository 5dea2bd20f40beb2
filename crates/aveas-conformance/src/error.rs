//! Error types for container validation
//!
//! Provides distinct errors for:
//! - Duplicate attribute kinds within one container
//! - Attributes placed in the wrong bucket
//! - Missing mandatory kinds
//! - Forbidden kinds
//! - Dict-shape mismatches

use aveas_attribute::{AttributeError, AttributeKind, ValueKind};

use crate::dict_shape::TypeMismatch;
use crate::registry::Profile;

fn join(kinds: &[AttributeKind]) -> String {
    kinds
        .iter()
        .map(|k| format!("{k} ({})", k.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_mismatches(mismatches: &[TypeMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Attribute kinds occurring more than once in one container
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("attribute kinds must be unique per container, duplicated: {}", join(.kinds))]
pub struct DuplicateAttributeKindError {
    /// Every duplicated kind, in catalog order
    pub kinds: Vec<AttributeKind>,
}

/// Mandatory attribute kinds absent from a container
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required attributes: {}", join(.kinds))]
pub struct MissingRequiredAttributeError {
    /// Every missing kind, in catalog order
    pub kinds: Vec<AttributeKind>,
}

/// Attribute kinds present but not permitted by the contract
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("attributes not permitted here: {}", join(.kinds))]
pub struct ForbiddenAttributeError {
    /// Every forbidden kind present, in catalog order
    pub kinds: Vec<AttributeKind>,
}

/// Container construction failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContainerError {
    /// Same kind more than once
    #[error(transparent)]
    Duplicate(#[from] DuplicateAttributeKindError),

    /// Attribute stored in a bucket other than its own
    #[error("{kind} belongs in the '{expected}' bucket, found in '{found}'")]
    BucketMismatch {
        /// Misplaced kind
        kind: AttributeKind,
        /// Bucket of the kind
        expected: ValueKind,
        /// Bucket it was found in
        found: ValueKind,
    },

    /// Attribute could not be decoded
    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

/// Conformance check failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConformanceError {
    /// Kinds present that the contract forbids
    #[error(transparent)]
    Forbidden(#[from] ForbiddenAttributeError),

    /// Mandatory kinds absent
    #[error(transparent)]
    Missing(#[from] MissingRequiredAttributeError),

    /// No contract registered for the profile
    #[error("no conformance contract registered for {0}")]
    UnknownProfile(Profile),
}

/// Mapping keys or value types differ from a template
///
/// Collects every problem instead of stopping at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "dict shape mismatch: extra keys {extra_keys:?}, missing keys {missing_keys:?}, type mismatches [{}]",
    join_mismatches(.type_mismatches)
)]
pub struct DictShapeValidationError {
    /// Keys present but not in the template
    pub extra_keys: Vec<String>,
    /// Template keys absent from the mapping
    pub missing_keys: Vec<String>,
    /// Keys whose value has the wrong JSON type
    pub type_mismatches: Vec<TypeMismatch>,
}
