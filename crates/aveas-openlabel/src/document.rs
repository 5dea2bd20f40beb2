//! Root document and its JSON codec
//!
//! A [`Document`] is one annotated recording: metadata, static objects,
//! per-frame object data, contexts and events. On the wire it is wrapped in
//! `{"openlabel": {...}}`; decoding accepts the wrapped and the bare form.
//!
//! # Conformance
//!
//! [`Document::check_conformance`] checks every entity against its contract
//! and stops at the first failure, reporting the entity's path:
//!
//! - `objects/<uid>` against the static contract of its classification
//! - `frames/<fid>/objects/<uid>` against the dynamic contract of the
//!   object with the same uid
//! - `contexts/<cid>` against the scenario or environment contract
//! - `events/<eid>` against the event contract

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use aveas_conformance::{AttributeContainer, ContractRegistry, Profile};

use crate::config::DocumentConfig;
use crate::context::Context;
use crate::error::DocumentError;
use crate::event::Event;
use crate::frame::{Frame, FrameInterval};
use crate::metadata::{AcquisitionMethod, Metadata, RightOfUse};
use crate::object::Object;

const ENVELOPE_KEY: &str = "openlabel";

/// Coordinate system entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoordinateSystem {
    /// Kind of coordinate system, e.g. `scene_cs` or `geo_utm`
    #[serde(rename = "type")]
    pub cs_type: String,
    /// Parent coordinate system, empty for a root
    #[serde(default)]
    pub parent: String,
    /// Child coordinate systems
    #[serde(default)]
    pub children: Vec<String>,
}

/// Sensor stream entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stream {
    /// Kind of sensor, e.g. `camera` or `lidar`
    #[serde(rename = "type")]
    pub stream_type: String,
    /// Location of the recorded data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Ontology entry: a bare URI or a URI with a term boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ontology {
    /// Ontology URI
    Uri(String),
    /// URI plus included or excluded terms
    Detailed {
        /// Ontology URI
        uri: String,
        /// Terms the boundary applies to
        #[serde(default, skip_serializing_if = "Option::is_none")]
        boundary_list: Option<Vec<String>>,
        /// `include` or `exclude`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        boundary_mode: Option<String>,
    },
}

/// Root of an annotation file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// File metadata
    pub metadata: Metadata,
    /// Scenario and environment contexts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexts: Option<IndexMap<String, Context>>,
    /// Coordinate systems, keyed by name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate_systems: Option<IndexMap<String, CoordinateSystem>>,
    /// Events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<IndexMap<String, Event>>,
    /// Frames covered by the recording
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_intervals: Option<Vec<FrameInterval>>,
    /// Per-frame data, keyed by frame id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<IndexMap<String, Frame>>,
    /// Static object records, keyed by object uid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<IndexMap<String, Object>>,
    /// Ontologies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ontologies: Option<IndexMap<String, Ontology>>,
    /// External resources such as file names or URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<IndexMap<String, String>>,
    /// Sensor streams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streams: Option<IndexMap<String, Stream>>,
}

#[derive(Serialize)]
struct Envelope<'a> {
    openlabel: &'a Document,
}

impl Document {
    /// Document holding only metadata
    #[must_use]
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            contexts: None,
            coordinate_systems: None,
            events: None,
            frame_intervals: None,
            frames: None,
            objects: None,
            ontologies: None,
            resources: None,
            streams: None,
        }
    }

    /// Smallest valid document
    #[must_use]
    pub fn minimum_example() -> Self {
        Self::new(Metadata {
            schema_version: crate::metadata::SCHEMA_VERSION.to_string(),
            aveas_schema_version: crate::metadata::AveasSchemaVersion,
            right_of_use: RightOfUse::ResearchOnly,
            acquisition_method: AcquisitionMethod::InVehicle,
            acquisition_partner: "foo bar institute".to_string(),
            acquisition_date: "2000-01-01T01:01:01.001Z".to_string(),
            projection_string: "example projection string".to_string(),
            annotator: None,
            comment: None,
            file_version: None,
            name: None,
            threshold_gttc: None,
            threshold_pret: None,
            threshold_thw: None,
        })
    }

    /// Add or replace a static object
    #[must_use]
    pub fn with_object(mut self, uid: impl Into<String>, object: Object) -> Self {
        self.objects
            .get_or_insert_with(IndexMap::new)
            .insert(uid.into(), object);
        self
    }

    /// Add or replace a frame
    #[must_use]
    pub fn with_frame(mut self, fid: impl Into<String>, frame: Frame) -> Self {
        self.frames
            .get_or_insert_with(IndexMap::new)
            .insert(fid.into(), frame);
        self
    }

    /// Add or replace a context
    #[must_use]
    pub fn with_context(mut self, cid: impl Into<String>, context: Context) -> Self {
        self.contexts
            .get_or_insert_with(IndexMap::new)
            .insert(cid.into(), context);
        self
    }

    /// Add or replace an event
    #[must_use]
    pub fn with_event(mut self, eid: impl Into<String>, event: Event) -> Self {
        self.events
            .get_or_insert_with(IndexMap::new)
            .insert(eid.into(), event);
        self
    }

    /// Set the frame intervals of the recording
    #[must_use]
    pub fn with_frame_intervals(mut self, intervals: Vec<FrameInterval>) -> Self {
        self.frame_intervals = Some(intervals);
        self
    }

    /// Static object by uid
    #[must_use]
    pub fn object(&self, uid: &str) -> Option<&Object> {
        self.objects.as_ref()?.get(uid)
    }

    /// Encode with the default configuration
    ///
    /// # Errors
    /// See [`Document::to_json_with`]
    pub fn to_json(&self) -> Result<String, DocumentError> {
        self.to_json_with(&DocumentConfig::default())
    }

    /// Encode as a JSON string
    ///
    /// # Errors
    /// - the first conformance failure, if the config enforces conformance
    /// - [`DocumentError::Json`] if serialization fails
    pub fn to_json_with(&self, config: &DocumentConfig) -> Result<String, DocumentError> {
        if config.enforces_conformance() {
            self.check_conformance()?;
        }

        let json = match (config.envelope, config.pretty) {
            (true, true) => serde_json::to_string_pretty(&Envelope { openlabel: self })?,
            (true, false) => serde_json::to_string(&Envelope { openlabel: self })?,
            (false, true) => serde_json::to_string_pretty(self)?,
            (false, false) => serde_json::to_string(self)?,
        };
        tracing::debug!(
            bytes = json.len(),
            envelope = config.envelope,
            "encoded document"
        );
        Ok(json)
    }

    /// Encode as a JSON value
    ///
    /// # Errors
    /// Same as [`Document::to_json_with`]
    pub fn to_value_with(&self, config: &DocumentConfig) -> Result<JsonValue, DocumentError> {
        if config.enforces_conformance() {
            self.check_conformance()?;
        }
        let value = if config.envelope {
            serde_json::to_value(Envelope { openlabel: self })?
        } else {
            serde_json::to_value(self)?
        };
        Ok(value)
    }

    /// Decode with the default configuration
    ///
    /// # Errors
    /// See [`Document::from_json_with`]
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Self::from_json_with(json, &DocumentConfig::default())
    }

    /// Decode from a JSON string, wrapped or bare
    ///
    /// # Errors
    /// - [`DocumentError::Json`] if the text is not a valid document
    /// - the first conformance failure, if the config enforces conformance
    pub fn from_json_with(json: &str, config: &DocumentConfig) -> Result<Self, DocumentError> {
        let value: JsonValue = serde_json::from_str(json)?;
        Self::from_value_with(value, config)
    }

    /// Decode from a JSON value, wrapped or bare
    ///
    /// # Errors
    /// Same as [`Document::from_json_with`]
    pub fn from_value_with(value: JsonValue, config: &DocumentConfig) -> Result<Self, DocumentError> {
        let (value, enveloped) = unwrap_envelope(value);
        let document: Self = serde_json::from_value(value)?;
        tracing::debug!(
            enveloped,
            objects = document.objects.as_ref().map_or(0, IndexMap::len),
            frames = document.frames.as_ref().map_or(0, IndexMap::len),
            "decoded document"
        );

        if config.enforces_conformance() {
            document.check_conformance()?;
        }
        Ok(document)
    }

    /// Check every entity against its contract
    ///
    /// # Errors
    /// - [`DocumentError::Conformance`] for the first entity violating its
    ///   contract
    /// - [`DocumentError::UnknownObject`] for a frame entry whose uid has no
    ///   static object
    pub fn check_conformance(&self) -> Result<(), DocumentError> {
        self.check_conformance_with(ContractRegistry::standard())
    }

    /// Check every entity against the contracts of a registry
    ///
    /// # Errors
    /// Same as [`Document::check_conformance`]
    pub fn check_conformance_with(&self, registry: &ContractRegistry) -> Result<(), DocumentError> {
        let check = |path: String, profile: Profile, data: &AttributeContainer| {
            tracing::trace!(%path, %profile, "checking conformance");
            registry
                .check(profile, data)
                .map_err(|source| DocumentError::Conformance { path, source })
        };

        for (uid, object) in self.objects.iter().flatten() {
            check(format!("objects/{uid}"), object.static_profile(), &object.object_data)?;
        }

        for (fid, frame) in self.frames.iter().flatten() {
            for (uid, entry) in frame.object_entries() {
                let path = format!("frames/{fid}/objects/{uid}");
                let object = self
                    .object(uid)
                    .ok_or_else(|| DocumentError::UnknownObject { path: path.clone() })?;
                check(path, object.dynamic_profile(), &entry.object_data)?;
            }
        }

        for (cid, context) in self.contexts.iter().flatten() {
            check(format!("contexts/{cid}"), context.kind().profile(), &context.context_data)?;
        }

        for (eid, event) in self.events.iter().flatten() {
            check(format!("events/{eid}"), Profile::Event, &event.event_data)?;
        }

        tracing::debug!("document conforms");
        Ok(())
    }
}

/// Strip the `openlabel` wrapper if present
fn unwrap_envelope(value: JsonValue) -> (JsonValue, bool) {
    match value {
        JsonValue::Object(mut map) if map.len() == 1 && map.contains_key(ENVELOPE_KEY) => {
            match map.remove(ENVELOPE_KEY) {
                Some(inner) => (inner, true),
                None => (JsonValue::Object(map), false),
            }
        }
        other => (other, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConformanceMode;
    use crate::frame::ObjectInFrame;
    use aveas_attribute::{Attribute, AttributeKind};
    use aveas_conformance::{Classification, ConformanceError};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn minimum_json() -> JsonValue {
        json!({
            "openlabel": {
                "metadata": {
                    "schema_version": "1.0.0",
                    "aveas_schema_version": "0.4.10",
                    "right_of_use": "research_only",
                    "acquisition_method": "in-vehicle",
                    "acquisition_partner": "foo bar institute",
                    "acquisition_date": "2000-01-01T01:01:01.001Z",
                    "projection_string": "example projection string"
                }
            }
        })
    }

    #[test]
    fn minimum_example_wire_form() {
        let json = Document::minimum_example().to_json().unwrap();
        let value: JsonValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, minimum_json());
    }

    #[test]
    fn minimum_example_round_trips() {
        let document = Document::minimum_example();
        let decoded = Document::from_json(&document.to_json().unwrap()).unwrap();
        assert_eq!(decoded, document);
    }

    #[test]
    fn bare_root_is_accepted() {
        let bare = minimum_json()["openlabel"].to_string();
        let decoded = Document::from_json(&bare).unwrap();
        assert_eq!(decoded, Document::minimum_example());
    }

    #[test]
    fn envelope_can_be_turned_off() {
        let config = DocumentConfig::new().with_envelope(false);
        let value = Document::minimum_example().to_value_with(&config).unwrap();
        assert!(value.get("metadata").is_some());
        assert!(value.get("openlabel").is_none());
    }

    #[test]
    fn pretty_output_spans_lines() {
        let config = DocumentConfig::new().with_pretty(true);
        let json = Document::minimum_example().to_json_with(&config).unwrap();
        assert!(json.contains('\n'));
    }

    #[test]
    fn missing_metadata_field_fails_decode() {
        let mut value = minimum_json();
        value["openlabel"]["metadata"]
            .as_object_mut()
            .unwrap()
            .remove("projection_string");
        let err = Document::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
        assert!(err.to_string().contains("projection_string"));
    }

    #[test]
    fn unknown_root_field_fails_decode() {
        let mut value = minimum_json();
        value["openlabel"]["relations"] = json!({});
        assert!(Document::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn empty_objects_map_survives() {
        let mut document = Document::minimum_example();
        document.objects = Some(IndexMap::new());
        let decoded = Document::from_json(&document.to_json().unwrap()).unwrap();
        assert_eq!(decoded.objects, Some(IndexMap::new()));
    }

    #[test]
    fn frame_entry_without_object_is_unknown() {
        let document = Document::minimum_example()
            .with_frame("0", Frame::new().with_object("9", ObjectInFrame::default()));
        let err = document.check_conformance().unwrap_err();
        assert!(matches!(err, DocumentError::UnknownObject { .. }));
        assert_eq!(err.path(), Some("frames/0/objects/9"));
    }

    #[test]
    fn nonconforming_object_reports_path() {
        let document = Document::minimum_example().with_object(
            "4",
            Object::new("dog", Classification::Animal, AttributeContainer::empty()),
        );
        match document.check_conformance() {
            Err(DocumentError::Conformance {
                path,
                source: ConformanceError::Missing(missing),
            }) => {
                assert_eq!(path, "objects/4");
                assert!(missing.kinds.contains(&AttributeKind::DimensionsSize));
            }
            other => panic!("expected missing attributes, got {other:?}"),
        }
    }

    #[test]
    fn event_without_role_b_is_reported() {
        let data = AttributeContainer::from_attributes([
            Attribute::text(AttributeKind::RoleAParticipantId, "0").unwrap(),
        ])
        .unwrap();
        let event = Event::new(
            "following 0",
            crate::event::EventType::Following,
            data,
            vec![FrameInterval::single(0)],
        );
        let document = Document::minimum_example().with_event("0", event);
        let err = document.check_conformance().unwrap_err();
        assert_eq!(err.path(), Some("events/0"));
    }

    #[test]
    fn enforce_mode_refuses_to_encode() {
        let document = Document::minimum_example().with_object(
            "4",
            Object::new("dog", Classification::Animal, AttributeContainer::empty()),
        );
        let config = DocumentConfig::new().with_conformance(ConformanceMode::Enforce);
        assert!(document.to_json_with(&config).is_err());
        assert!(document.to_json().is_ok());
    }

    #[test]
    fn enforce_mode_checks_on_decode() {
        let document = Document::minimum_example().with_object(
            "4",
            Object::new("dog", Classification::Animal, AttributeContainer::empty()),
        );
        let json = document.to_json().unwrap();
        let config = DocumentConfig::new().with_conformance(ConformanceMode::Enforce);
        assert!(Document::from_json(&json).is_ok());
        assert!(matches!(
            Document::from_json_with(&json, &config),
            Err(DocumentError::Conformance { .. })
        ));
    }

    #[test]
    fn envelope_key_alone_is_unwrapped_only_once() {
        let (inner, enveloped) = unwrap_envelope(json!({"openlabel": {"openlabel": 1}}));
        assert!(enveloped);
        assert_eq!(inner, json!({"openlabel": 1}));

        let (same, enveloped) = unwrap_envelope(json!({"metadata": {}, "openlabel": {}}));
        assert!(!enveloped);
        assert_eq!(same, json!({"metadata": {}, "openlabel": {}}));
    }
}
