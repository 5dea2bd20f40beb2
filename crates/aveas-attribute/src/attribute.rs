//! Self-validating attribute values
//!
//! An [`Attribute`] pairs a kind with a value. Construction checks the
//! value's shape against the kind, then the kind's own invariant
//! (probability sum, closed range). The wire `name` is never stored: it is
//! always derived from the kind.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::choice::{Choice, ChoiceSet};
use crate::error::AttributeError;
use crate::kind::AttributeKind;
use crate::value::{
    json_type_name, AttributeValue, ValueConstraint, ValueShape, PROBABILITY_EPSILON,
};

/// One attribute of an attribute container
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    kind: AttributeKind,
    val: AttributeValue,
}

impl Attribute {
    /// Build an attribute, validating `value` against `kind`
    ///
    /// Integers are widened for real-valued kinds and strings are parsed for
    /// enumerated kinds.
    ///
    /// # Errors
    /// - [`AttributeError::ShapeMismatch`] / [`AttributeError::Arity`] if the
    ///   value has the wrong shape
    /// - [`AttributeError::UnknownChoice`] for strings outside an enumeration
    /// - [`AttributeError::ProbabilitySum`] / [`AttributeError::Range`] if
    ///   the kind's own invariant fails
    /// - [`AttributeError::NonFinite`] for NaN or infinite reals
    pub fn new(kind: AttributeKind, value: impl Into<AttributeValue>) -> Result<Self, AttributeError> {
        let val = conform(kind, value.into())?;
        check_constraint(kind, &val)?;
        check_finite(kind, &val)?;
        Ok(Self { kind, val })
    }

    /// Boolean attribute
    ///
    /// # Errors
    /// Fails if `kind` is not boolean
    #[inline]
    pub fn flag(kind: AttributeKind, value: bool) -> Result<Self, AttributeError> {
        Self::new(kind, value)
    }

    /// Integer attribute
    ///
    /// # Errors
    /// Fails if `kind` is neither integer nor real valued
    #[inline]
    pub fn integer(kind: AttributeKind, value: i64) -> Result<Self, AttributeError> {
        Self::new(kind, value)
    }

    /// Real-valued attribute
    ///
    /// # Errors
    /// Fails on shape mismatch or if the value violates the kind's range
    #[inline]
    pub fn float(kind: AttributeKind, value: f64) -> Result<Self, AttributeError> {
        Self::new(kind, value)
    }

    /// Text attribute; enumerated kinds parse the string
    ///
    /// # Errors
    /// Fails on shape mismatch or unknown enumeration value
    #[inline]
    pub fn text(kind: AttributeKind, value: impl Into<String>) -> Result<Self, AttributeError> {
        Self::new(kind, AttributeValue::Text(value.into()))
    }

    /// Enumerated attribute
    ///
    /// # Errors
    /// Fails if the choice belongs to another enumeration than the kind's
    #[inline]
    pub fn choice(kind: AttributeKind, value: impl Into<Choice>) -> Result<Self, AttributeError> {
        Self::new(kind, AttributeValue::Choice(value.into()))
    }

    /// Tuple or sequence of reals
    ///
    /// # Errors
    /// Fails on arity mismatch or violated probability sum
    #[inline]
    pub fn floats(kind: AttributeKind, values: impl Into<Vec<f64>>) -> Result<Self, AttributeError> {
        Self::new(kind, AttributeValue::Floats(values.into()))
    }

    /// Sequence of strings; enumerated tuples parse each element
    ///
    /// # Errors
    /// Fails on shape mismatch or unknown enumeration value
    pub fn texts<I, T>(kind: AttributeKind, values: I) -> Result<Self, AttributeError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<String>>();
        Self::new(kind, AttributeValue::Texts(values))
    }

    /// Tuple of enumeration values
    ///
    /// # Errors
    /// Fails on arity mismatch or foreign enumeration
    pub fn choices<I, T>(kind: AttributeKind, values: I) -> Result<Self, AttributeError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Choice>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<Choice>>();
        Self::new(kind, AttributeValue::Choices(values))
    }

    /// Bounding-box cuboid `(x, y, z, rx, ry, rz, sx, sy, sz)`
    ///
    /// # Errors
    /// Fails if any component is NaN or infinite
    #[inline]
    pub fn cuboid(values: [f64; 9]) -> Result<Self, AttributeError> {
        Self::new(AttributeKind::BoundingBox, values.to_vec())
    }

    /// Decode a raw wire `val` for a known kind
    ///
    /// # Errors
    /// Fails if `val` does not have the kind's shape, if `type_tag` differs
    /// from the kind's fixed tag, or if the kind's invariant fails
    pub fn from_wire(
        kind: AttributeKind,
        val: &JsonValue,
        type_tag: Option<&str>,
    ) -> Result<Self, AttributeError> {
        check_type_tag(kind, type_tag)?;
        let value = decode(kind, val)?;
        Self::new(kind, value)
    }

    /// Kind of this attribute
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Wire name, derived from the kind
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Validated value
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &AttributeValue {
        &self.val
    }

    /// Fixed wire `type` tag, if the kind carries one
    #[inline]
    #[must_use]
    pub const fn type_tag(&self) -> Option<&'static str> {
        self.kind.type_tag()
    }
}

/// Attribute as it appears on the wire, before its kind is resolved
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireAttribute {
    /// Wire name
    pub name: String,
    /// Raw value
    pub val: JsonValue,
    /// Optional `type` tag
    #[serde(rename = "type", default)]
    pub type_tag: Option<String>,
}

impl WireAttribute {
    /// Resolve the kind and decode the value
    ///
    /// `taken` reports kinds that are already in use; when several kinds
    /// share this wire name the first one not taken wins. If all of them are
    /// taken the first candidate is returned, leaving the duplicate to the
    /// container's uniqueness check.
    ///
    /// # Errors
    /// - [`AttributeError::UnknownName`] if no kind uses this name
    /// - any error of [`Attribute::from_wire`]
    pub fn resolve(
        &self,
        mut taken: impl FnMut(AttributeKind) -> bool,
    ) -> Result<Attribute, AttributeError> {
        let candidates: Vec<AttributeKind> = AttributeKind::candidates_for_name(&self.name).collect();
        let kind = candidates
            .iter()
            .copied()
            .find(|kind| !taken(*kind))
            .or_else(|| candidates.first().copied())
            .ok_or_else(|| AttributeError::UnknownName(self.name.clone()))?;
        Attribute::from_wire(kind, &self.val, self.type_tag.as_deref())
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = self.type_tag();
        let mut map = serializer.serialize_map(Some(2 + usize::from(tag.is_some())))?;
        map.serialize_entry("name", self.name())?;
        map.serialize_entry("val", &self.val)?;
        if let Some(tag) = tag {
            map.serialize_entry("type", tag)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Attribute {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireAttribute::deserialize(deserializer)?;
        wire.resolve(|_| false).map_err(serde::de::Error::custom)
    }
}

#[allow(clippy::cast_precision_loss)]
fn conform(kind: AttributeKind, value: AttributeValue) -> Result<AttributeValue, AttributeError> {
    let shape = kind.shape();
    let mismatch = |value: &AttributeValue| AttributeError::ShapeMismatch {
        kind,
        expected: shape,
        found: value.describe(),
    };

    match (shape, value) {
        (ValueShape::Boolean, v @ AttributeValue::Boolean(_))
        | (ValueShape::Integer, v @ AttributeValue::Integer(_))
        | (ValueShape::Float, v @ AttributeValue::Float(_))
        | (ValueShape::Text, v @ AttributeValue::Text(_))
        | (ValueShape::FloatSeq, v @ AttributeValue::Floats(_))
        | (ValueShape::TextSeq, v @ AttributeValue::Texts(_)) => Ok(v),
        (ValueShape::Float, AttributeValue::Integer(i)) => Ok(AttributeValue::Float(i as f64)),
        (ValueShape::Choice(set), AttributeValue::Text(raw)) => {
            parse_choice(kind, set, &raw).map(AttributeValue::Choice)
        }
        (ValueShape::Choice(set), AttributeValue::Choice(c)) if c.set() == set => {
            Ok(AttributeValue::Choice(c))
        }
        (ValueShape::Floats(n), AttributeValue::Floats(values)) => {
            check_arity(kind, n, values.len())?;
            Ok(AttributeValue::Floats(values))
        }
        (ValueShape::Choices(set, n), AttributeValue::Texts(raw)) => {
            check_arity(kind, n, raw.len())?;
            raw.iter()
                .map(|r| parse_choice(kind, set, r))
                .collect::<Result<Vec<_>, _>>()
                .map(AttributeValue::Choices)
        }
        (ValueShape::Choices(set, n), AttributeValue::Choices(values)) => {
            check_arity(kind, n, values.len())?;
            match values.iter().find(|c| c.set() != set) {
                Some(foreign) => Err(AttributeError::UnknownChoice {
                    kind,
                    set,
                    value: foreign.as_str().to_string(),
                }),
                None => Ok(AttributeValue::Choices(values)),
            }
        }
        (_, other) => Err(mismatch(&other)),
    }
}

fn parse_choice(kind: AttributeKind, set: ChoiceSet, raw: &str) -> Result<Choice, AttributeError> {
    set.parse(raw).map_err(|e| AttributeError::UnknownChoice {
        kind,
        set,
        value: e.value,
    })
}

fn check_arity(kind: AttributeKind, expected: usize, found: usize) -> Result<(), AttributeError> {
    if expected == found {
        Ok(())
    } else {
        Err(AttributeError::Arity {
            kind,
            expected,
            found,
        })
    }
}

fn check_constraint(kind: AttributeKind, val: &AttributeValue) -> Result<(), AttributeError> {
    match (kind.constraint(), val) {
        (Some(ValueConstraint::ProbabilitySum), AttributeValue::Floats(values)) => {
            let sum: f64 = values.iter().sum();
            let close = (sum - 1.0).abs() <= PROBABILITY_EPSILON;
            if close {
                Ok(())
            } else {
                Err(AttributeError::ProbabilitySum { kind, sum })
            }
        }
        (Some(ValueConstraint::Range { min, max }), AttributeValue::Float(value)) => {
            if (min..=max).contains(value) {
                Ok(())
            } else {
                Err(AttributeError::Range {
                    kind,
                    value: *value,
                    min,
                    max,
                })
            }
        }
        _ => Ok(()),
    }
}

fn check_finite(kind: AttributeKind, val: &AttributeValue) -> Result<(), AttributeError> {
    let finite = match val {
        AttributeValue::Float(value) => value.is_finite(),
        AttributeValue::Floats(values) => values.iter().all(|v| v.is_finite()),
        _ => true,
    };
    if finite {
        Ok(())
    } else {
        Err(AttributeError::NonFinite { kind })
    }
}

fn check_type_tag(kind: AttributeKind, found: Option<&str>) -> Result<(), AttributeError> {
    match (kind.type_tag(), found) {
        (_, None) => Ok(()),
        (Some(expected), Some(found)) if expected == found => Ok(()),
        (expected, Some(found)) => Err(AttributeError::TypeTag {
            kind,
            expected,
            found: Some(found.to_string()),
        }),
    }
}

fn decode(kind: AttributeKind, val: &JsonValue) -> Result<AttributeValue, AttributeError> {
    let shape = kind.shape();
    let mismatch = || AttributeError::ShapeMismatch {
        kind,
        expected: shape,
        found: json_type_name(val),
    };

    let value = match shape {
        ValueShape::Boolean => AttributeValue::Boolean(val.as_bool().ok_or_else(mismatch)?),
        ValueShape::Integer => AttributeValue::Integer(val.as_i64().ok_or_else(mismatch)?),
        ValueShape::Float => AttributeValue::Float(val.as_f64().ok_or_else(mismatch)?),
        ValueShape::Text | ValueShape::Choice(_) => {
            AttributeValue::Text(val.as_str().ok_or_else(mismatch)?.to_string())
        }
        ValueShape::Floats(_) | ValueShape::FloatSeq => {
            let items = val.as_array().ok_or_else(mismatch)?;
            let floats = items
                .iter()
                .map(JsonValue::as_f64)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(mismatch)?;
            AttributeValue::Floats(floats)
        }
        ValueShape::TextSeq | ValueShape::Choices(..) => {
            let items = val.as_array().ok_or_else(mismatch)?;
            let texts = items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(mismatch)?;
            AttributeValue::Texts(texts)
        }
    };
    Ok(value)
}
