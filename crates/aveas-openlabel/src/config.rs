//! Codec configuration
//!
//! [`DocumentConfig`] controls how documents are written and whether the
//! codec enforces conformance. It can be loaded from JSON, YAML or TOML.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Whether the codec runs the conformance check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConformanceMode {
    /// Encode and decode without checking contracts
    #[default]
    Off,
    /// Check after decoding and before encoding
    Enforce,
}

/// Document codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    /// Wrap output in `{"openlabel": ...}`
    pub envelope: bool,
    /// Pretty-print output
    pub pretty: bool,
    /// Conformance enforcement
    pub conformance: ConformanceMode,
}

impl DocumentConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With envelope on or off
    #[inline]
    #[must_use]
    pub fn with_envelope(mut self, envelope: bool) -> Self {
        self.envelope = envelope;
        self
    }

    /// With pretty-printing on or off
    #[inline]
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// With conformance mode
    #[inline]
    #[must_use]
    pub fn with_conformance(mut self, mode: ConformanceMode) -> Self {
        self.conformance = mode;
        self
    }

    /// Whether conformance is enforced
    #[inline]
    #[must_use]
    pub fn enforces_conformance(&self) -> bool {
        self.conformance == ConformanceMode::Enforce
    }

    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid or has unknown keys
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid or has unknown keys
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse from TOML string
    ///
    /// # Errors
    /// Returns error if TOML is invalid or has unknown keys
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            envelope: true,
            pretty: false,
            conformance: ConformanceMode::Off,
        }
    }
}
