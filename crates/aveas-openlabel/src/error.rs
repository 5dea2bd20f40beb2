//! Error types for the document tree
//!
//! Provides distinct errors for:
//! - Required fields left unset when building
//! - Malformed frame intervals and context tags
//! - Per-entity conformance failures, tagged with the entity's path
//! - JSON encoding and decoding
//! - Configuration parsing

use aveas_conformance::ConformanceError;

/// Document construction, codec and conformance failures
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Required field not set, named as `Type.field`
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Frame interval ending before it starts
    #[error("invalid frame interval: frame_start {start} is after frame_end {end}")]
    InvalidFrameInterval {
        /// First frame
        start: u64,
        /// Last frame
        end: u64,
    },

    /// Context `type` tag not recognised or `name` not matching it
    #[error("invalid context: name '{name}', type '{type_name}'")]
    InvalidContext {
        /// Wire `name`
        name: String,
        /// Wire `type`
        type_name: String,
    },

    /// Frame entry without a static object of the same key
    #[error("{path}: no object with this uid in 'objects'")]
    UnknownObject {
        /// Path of the frame entry
        path: String,
    },

    /// Entity does not satisfy its contract
    #[error("{path}: {source}")]
    Conformance {
        /// Path of the offending entity, e.g. `objects/7`
        path: String,
        /// Underlying failure
        #[source]
        source: ConformanceError,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocumentError {
    /// Path of the entity the error refers to, if any
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::UnknownObject { path } | Self::Conformance { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Configuration loading failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Invalid YAML
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Invalid TOML
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),
}
