//! Typed attribute containers
//!
//! An [`AttributeContainer`] groups attributes into one bucket per value
//! kind (`boolean`, `num`, `text`, `vec`, `cuboid`). Construction always
//! goes through [`ContainerBuilder::build`], which checks that:
//!
//! - every attribute sits in the bucket of its own value kind
//! - no attribute kind occurs more than once across all buckets
//!
//! There is no way to obtain a container that violates either rule.
//!
//! Kinds sharing a wire name are kept in catalog order within their bucket,
//! which is the order decoding assigns them in.

use std::collections::BTreeSet;

use aveas_attribute::{Attribute, AttributeKind, ValueKind, WireAttribute};
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::bucket::Bucket;
use crate::error::ContainerError;
use crate::uniqueness::UniquenessEnforcer;

/// Attributes of one entity, grouped by value kind
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeContainer {
    boolean: Bucket,
    num: Bucket,
    text: Bucket,
    vec: Bucket,
    cuboid: Bucket,
}

impl AttributeContainer {
    /// Container with every bucket absent
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start building a container
    #[inline]
    #[must_use]
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// Build a container from attributes, each placed in its own bucket
    ///
    /// # Errors
    /// Returns [`ContainerError::Duplicate`] if a kind occurs twice
    pub fn from_attributes(
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<Self, ContainerError> {
        ContainerBuilder::new().with_all(attributes).build()
    }

    /// Bucket for a value kind
    #[inline]
    #[must_use]
    pub const fn bucket(&self, kind: ValueKind) -> &Bucket {
        match kind {
            ValueKind::Boolean => &self.boolean,
            ValueKind::Number => &self.num,
            ValueKind::Text => &self.text,
            ValueKind::Vector => &self.vec,
            ValueKind::Cuboid => &self.cuboid,
        }
    }

    /// Buckets paired with their value kind, in wire order
    pub fn buckets(&self) -> impl Iterator<Item = (ValueKind, &Bucket)> {
        ValueKind::ALL.into_iter().map(move |kind| (kind, self.bucket(kind)))
    }

    /// Every attribute across all list buckets
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.buckets().flat_map(|(_, bucket)| bucket.attributes())
    }

    /// Every attribute kind present
    pub fn kinds(&self) -> impl Iterator<Item = AttributeKind> + '_ {
        self.attributes().map(Attribute::kind)
    }

    /// Attribute of the given kind, if present
    #[must_use]
    pub fn get(&self, kind: AttributeKind) -> Option<&Attribute> {
        self.bucket(kind.value_kind())
            .attributes()
            .iter()
            .find(|attribute| attribute.kind() == kind)
    }

    /// Whether an attribute of the given kind is present
    #[inline]
    #[must_use]
    pub fn contains(&self, kind: AttributeKind) -> bool {
        self.get(kind).is_some()
    }

    /// Number of attributes across all list buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes().count()
    }

    /// Whether the container holds no attributes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes().next().is_none()
    }
}

/// Builder for [`AttributeContainer`]
#[derive(Debug, Clone, Default)]
pub struct ContainerBuilder {
    inner: AttributeContainer,
}

impl ContainerBuilder {
    /// Create builder with every bucket absent
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute to its own bucket
    #[must_use]
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.slot(attribute.kind().value_kind()).push(attribute);
        self
    }

    /// Add several attributes
    #[must_use]
    pub fn with_all(self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        attributes.into_iter().fold(self, Self::with)
    }

    /// Replace a whole bucket
    #[must_use]
    pub fn with_bucket(mut self, kind: ValueKind, bucket: Bucket) -> Self {
        *self.slot(kind) = bucket;
        self
    }

    /// Store a single scalar string in a bucket
    #[must_use]
    pub fn with_scalar(self, kind: ValueKind, raw: impl Into<String>) -> Self {
        self.with_bucket(kind, Bucket::Scalar(raw.into()))
    }

    /// Validate and produce the container
    ///
    /// # Errors
    /// - [`ContainerError::BucketMismatch`] if an attribute sits in a foreign bucket
    /// - [`ContainerError::Duplicate`] if a kind occurs more than once
    pub fn build(self) -> Result<AttributeContainer, ContainerError> {
        let mut container = self.inner;

        for (bucket_kind, bucket) in container.buckets() {
            if let Some(misplaced) = bucket
                .attributes()
                .iter()
                .find(|attribute| attribute.kind().value_kind() != bucket_kind)
            {
                return Err(ContainerError::BucketMismatch {
                    kind: misplaced.kind(),
                    expected: misplaced.kind().value_kind(),
                    found: bucket_kind,
                });
            }
        }

        UniquenessEnforcer::new().validate(container.buckets().map(|(_, bucket)| bucket))?;

        for bucket in [
            &mut container.boolean,
            &mut container.num,
            &mut container.text,
            &mut container.vec,
            &mut container.cuboid,
        ] {
            if let Bucket::List(attributes) = bucket {
                order_shared_names(attributes);
            }
        }
        Ok(container)
    }

    fn slot(&mut self, kind: ValueKind) -> &mut Bucket {
        match kind {
            ValueKind::Boolean => &mut self.inner.boolean,
            ValueKind::Number => &mut self.inner.num,
            ValueKind::Text => &mut self.inner.text,
            ValueKind::Vector => &mut self.inner.vec,
            ValueKind::Cuboid => &mut self.inner.cuboid,
        }
    }
}

/// Reorder attributes sharing a wire name into catalog order, in place
///
/// Only the slots those attributes occupy are permuted.
fn order_shared_names(attributes: &mut [Attribute]) {
    let mut seen = BTreeSet::new();
    for i in 0..attributes.len() {
        let name = attributes[i].name();
        if !seen.insert(name) || AttributeKind::candidates_for_name(name).nth(1).is_none() {
            continue;
        }

        let slots: Vec<usize> = (i..attributes.len())
            .filter(|&j| attributes[j].name() == name)
            .collect();
        let mut group: Vec<Attribute> = slots.iter().map(|&j| attributes[j].clone()).collect();
        group.sort_by_key(|attribute| {
            AttributeKind::candidates_for_name(name).position(|kind| kind == attribute.kind())
        });
        for (slot, attribute) in slots.into_iter().zip(group) {
            attributes[slot] = attribute;
        }
    }
}

impl Serialize for AttributeContainer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.buckets().filter(|(_, bucket)| !bucket.is_absent()).count();
        let mut map = serializer.serialize_map(Some(present))?;
        for (kind, bucket) in self.buckets().filter(|(_, bucket)| !bucket.is_absent()) {
            map.serialize_entry(kind.bucket_name(), bucket)?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawContainer {
    #[serde(default)]
    boolean: Option<JsonValue>,
    #[serde(default)]
    num: Option<JsonValue>,
    #[serde(default)]
    text: Option<JsonValue>,
    #[serde(default)]
    vec: Option<JsonValue>,
    #[serde(default)]
    cuboid: Option<JsonValue>,
}

impl RawContainer {
    /// Decode buckets in wire order
    ///
    /// Wire names shared by several kinds resolve to the first kind not yet
    /// seen in this container.
    fn decode(self) -> Result<AttributeContainer, String> {
        let raw = [
            (ValueKind::Boolean, self.boolean),
            (ValueKind::Number, self.num),
            (ValueKind::Text, self.text),
            (ValueKind::Vector, self.vec),
            (ValueKind::Cuboid, self.cuboid),
        ];

        let mut taken = BTreeSet::new();
        let mut builder = ContainerBuilder::new();
        for (kind, value) in raw {
            let bucket = match value {
                None | Some(JsonValue::Null) => Bucket::Absent,
                Some(JsonValue::String(raw)) => Bucket::Scalar(raw),
                Some(JsonValue::Array(items)) => {
                    let mut attributes = Vec::with_capacity(items.len());
                    for item in &items {
                        let wire = WireAttribute::deserialize(item).map_err(|e| e.to_string())?;
                        let attribute = wire
                            .resolve(|candidate| taken.contains(&candidate))
                            .map_err(|e| e.to_string())?;
                        taken.insert(attribute.kind());
                        attributes.push(attribute);
                    }
                    Bucket::List(attributes)
                }
                Some(_) => {
                    return Err(format!(
                        "bucket '{}' must be a list of attributes or a string",
                        kind.bucket_name()
                    ))
                }
            };
            builder = builder.with_bucket(kind, bucket);
        }
        builder.build().map_err(|e| e.to_string())
    }
}

impl<'de> Deserialize<'de> for AttributeContainer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawContainer::deserialize(deserializer)?
            .decode()
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DuplicateAttributeKindError;
    use aveas_attribute::AttributeValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn flag(kind: AttributeKind) -> Attribute {
        Attribute::flag(kind, true).unwrap()
    }

    #[test]
    fn empty_container_is_valid() {
        let container = ContainerBuilder::new().build().unwrap();
        assert!(container.is_empty());
        assert_eq!(serde_json::to_value(&container).unwrap(), json!({}));
    }

    #[test]
    fn empty_lists_are_valid() {
        let container = ContainerBuilder::new()
            .with_bucket(ValueKind::Boolean, Bucket::List(vec![]))
            .with_bucket(ValueKind::Number, Bucket::List(vec![]))
            .build()
            .unwrap();
        assert_eq!(container.len(), 0);
        assert_eq!(
            serde_json::to_value(&container).unwrap(),
            json!({"boolean": [], "num": []})
        );
    }

    #[test]
    fn scalar_text_bucket_is_not_iterated() {
        let container = ContainerBuilder::new()
            .with_scalar(ValueKind::Text, "abc")
            .build()
            .unwrap();
        assert!(container.is_empty());
        assert_eq!(serde_json::to_value(&container).unwrap(), json!({"text": "abc"}));
    }

    #[test]
    fn attributes_land_in_their_bucket() {
        let container = AttributeContainer::from_attributes([
            flag(AttributeKind::IsRecorder),
            Attribute::floats(AttributeKind::DimensionsSize, vec![4.0, 2.0, 1.5]).unwrap(),
            Attribute::cuboid([0.0; 9]).unwrap(),
        ])
        .unwrap();

        assert_eq!(container.bucket(ValueKind::Boolean).attributes().len(), 1);
        assert_eq!(container.bucket(ValueKind::Vector).attributes().len(), 1);
        assert_eq!(container.bucket(ValueKind::Cuboid).attributes().len(), 1);
        assert!(container.bucket(ValueKind::Number).is_absent());
        assert!(container.contains(AttributeKind::BoundingBox));
        assert!(!container.contains(AttributeKind::Velocity));
    }

    #[test]
    fn duplicate_kind_fails_construction() {
        let result = AttributeContainer::from_attributes([
            flag(AttributeKind::IsRecorder),
            flag(AttributeKind::IsRecorder),
        ]);
        assert_eq!(
            result,
            Err(ContainerError::Duplicate(DuplicateAttributeKindError {
                kinds: vec![AttributeKind::IsRecorder]
            }))
        );
    }

    #[test]
    fn foreign_bucket_fails_construction() {
        let result = ContainerBuilder::new()
            .with_bucket(ValueKind::Number, Bucket::List(vec![flag(AttributeKind::LightsBrake)]))
            .build();
        assert!(matches!(
            result,
            Err(ContainerError::BucketMismatch {
                expected: ValueKind::Boolean,
                found: ValueKind::Number,
                ..
            })
        ));
    }

    #[test]
    fn decodes_both_automated_control_flags() {
        let json = json!({
            "boolean": [
                {"name": "interior/automated_control/longitudinal", "val": true},
                {"name": "interior/automated_control/longitudinal", "val": false}
            ]
        });
        let container: AttributeContainer = serde_json::from_value(json.clone()).unwrap();
        let kinds: Vec<_> = container.kinds().collect();
        assert_eq!(
            kinds,
            vec![
                AttributeKind::InteriorAutomatedControlLongitudinal,
                AttributeKind::InteriorAutomatedControlLateral,
            ]
        );
        assert_eq!(serde_json::to_value(&container).unwrap(), json);
    }

    #[test]
    fn decoding_rejects_duplicates() {
        let json = json!({
            "boolean": [
                {"name": "lights/brake", "val": true},
                {"name": "lights/brake", "val": false}
            ]
        });
        let err = serde_json::from_value::<AttributeContainer>(json).unwrap_err();
        assert!(err.to_string().contains("LightsBrake"));
    }

    #[test]
    fn decoding_rejects_misplaced_attribute() {
        let json = json!({"num": [{"name": "lights/brake", "val": true}]});
        assert!(serde_json::from_value::<AttributeContainer>(json).is_err());
    }

    #[test]
    fn decoding_rejects_unknown_bucket() {
        let json = json!({"extra": []});
        assert!(serde_json::from_value::<AttributeContainer>(json).is_err());
    }

    #[test]
    fn null_bucket_decodes_as_absent() {
        let json = json!({"boolean": null, "text": "abc"});
        let container: AttributeContainer = serde_json::from_value(json).unwrap();
        assert!(container.bucket(ValueKind::Boolean).is_absent());
        assert_eq!(container.bucket(ValueKind::Text), &Bucket::Scalar("abc".into()));
    }

    #[test]
    fn lateral_added_first_keeps_its_value_through_the_codec() {
        let container = AttributeContainer::from_attributes([
            Attribute::flag(AttributeKind::InteriorAutomatedControlLateral, true).unwrap(),
            Attribute::flag(AttributeKind::InteriorAutomatedControlLongitudinal, false).unwrap(),
            flag(AttributeKind::LightsBrake),
        ])
        .unwrap();

        let json = serde_json::to_value(&container).unwrap();
        assert_eq!(
            json,
            json!({"boolean": [
                {"name": "interior/automated_control/longitudinal", "val": false},
                {"name": "interior/automated_control/longitudinal", "val": true},
                {"name": "lights/brake", "val": true},
            ]})
        );

        let decoded: AttributeContainer = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, container);
        assert_eq!(
            decoded
                .get(AttributeKind::InteriorAutomatedControlLateral)
                .map(Attribute::value),
            Some(&AttributeValue::Boolean(true))
        );
    }
}
