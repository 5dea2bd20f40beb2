//! Scenario and environment contexts
//!
//! A document holds at most one context of each kind in its `contexts`
//! map. The `name` and `type` fields on the wire are fixed per kind.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use aveas_conformance::{AttributeContainer, Profile};

use crate::error::DocumentError;

/// Which context an entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    /// Circumstances of the scenario
    Scenario,
    /// Weather, lighting and road surface
    Environment,
}

impl ContextKind {
    /// Fixed wire `name`
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scenario => "scenario_context",
            Self::Environment => "environment_context",
        }
    }

    /// Fixed wire `type`
    #[inline]
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Scenario => "ScenarioContext",
            Self::Environment => "EnvironmentContext",
        }
    }

    /// Conformance profile of the context data
    #[inline]
    #[must_use]
    pub const fn profile(self) -> Profile {
        match self {
            Self::Scenario => Profile::ScenarioContext,
            Self::Environment => Profile::EnvironmentContext,
        }
    }

    fn from_type_name(raw: &str) -> Option<Self> {
        match raw {
            "ScenarioContext" => Some(Self::Scenario),
            "EnvironmentContext" => Some(Self::Environment),
            _ => None,
        }
    }
}

/// Context entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawContext")]
pub struct Context {
    kind: ContextKind,
    /// Attributes of the context
    pub context_data: AttributeContainer,
}

impl Context {
    /// Context of a kind with its data
    #[inline]
    #[must_use]
    pub fn new(kind: ContextKind, context_data: AttributeContainer) -> Self {
        Self { kind, context_data }
    }

    /// Scenario context
    #[inline]
    #[must_use]
    pub fn scenario(context_data: AttributeContainer) -> Self {
        Self::new(ContextKind::Scenario, context_data)
    }

    /// Environment context
    #[inline]
    #[must_use]
    pub fn environment(context_data: AttributeContainer) -> Self {
        Self::new(ContextKind::Environment, context_data)
    }

    /// Kind of this context
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ContextKind {
        self.kind
    }
}

impl Serialize for Context {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Context", 3)?;
        state.serialize_field("name", self.kind.name())?;
        state.serialize_field("type", self.kind.type_name())?;
        state.serialize_field("context_data", &self.context_data)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawContext {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    context_data: AttributeContainer,
}

impl TryFrom<RawContext> for Context {
    type Error = DocumentError;

    fn try_from(raw: RawContext) -> Result<Self, Self::Error> {
        match ContextKind::from_type_name(&raw.type_name) {
            Some(kind) if kind.name() == raw.name => Ok(Self::new(kind, raw.context_data)),
            _ => Err(DocumentError::InvalidContext {
                name: raw.name,
                type_name: raw.type_name,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aveas_attribute::{Attribute, AttributeKind};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn scenario_context_wire_form() {
        let data = AttributeContainer::from_attributes([
            Attribute::flag(AttributeKind::ScenarioIsStaged, false).unwrap(),
        ])
        .unwrap();
        let value = serde_json::to_value(Context::scenario(data)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "scenario_context",
                "type": "ScenarioContext",
                "context_data": {
                    "boolean": [{"name": "scenario/is_staged", "val": false}]
                }
            })
        );
    }

    #[test]
    fn environment_context_round_trips() {
        let raw = json!({
            "name": "environment_context",
            "type": "EnvironmentContext",
            "context_data": {
                "text": [{"name": "lighting_conditions", "val": "day"}]
            }
        });
        let context: Context = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(context.kind(), ContextKind::Environment);
        assert!(context.context_data.contains(AttributeKind::EnvironmentLightingConditions));
        assert_eq!(serde_json::to_value(&context).unwrap(), raw);
    }

    #[test]
    fn mismatched_name_is_rejected() {
        let raw = json!({
            "name": "scenario_context",
            "type": "EnvironmentContext",
            "context_data": {}
        });
        assert!(serde_json::from_value::<Context>(raw).is_err());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let raw = json!({"name": "x", "type": "WeatherContext", "context_data": {}});
        let err = serde_json::from_value::<Context>(raw).unwrap_err();
        assert!(err.to_string().contains("WeatherContext"));
    }
}
