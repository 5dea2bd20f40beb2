//! Attribute buckets
//!
//! A container holds one [`Bucket`] per [`ValueKind`]. The bucket is an
//! explicit tagged union, so a single scalar string is never mistaken for
//! a list of one-character attributes.

use aveas_attribute::{Attribute, AttributeKind};
use serde::{Serialize, Serializer};

/// Contents of one container bucket
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Bucket {
    /// Not present; omitted on the wire
    #[default]
    Absent,
    /// Single scalar string, treated as one opaque value
    Scalar(String),
    /// Ordered attribute list; order carries no meaning
    List(Vec<Attribute>),
}

impl Bucket {
    /// Whether the bucket is omitted on the wire
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Attributes held by a list bucket; empty for the other variants
    #[inline]
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Self::List(items) => items,
            Self::Absent | Self::Scalar(_) => &[],
        }
    }

    /// Kinds held, in list order
    pub fn kinds(&self) -> impl Iterator<Item = AttributeKind> + '_ {
        self.attributes().iter().map(Attribute::kind)
    }

    /// Add an attribute, turning an absent bucket into a list
    ///
    /// A scalar bucket is replaced by a list.
    pub fn push(&mut self, attribute: Attribute) {
        match self {
            Self::List(items) => items.push(attribute),
            Self::Absent | Self::Scalar(_) => *self = Self::List(vec![attribute]),
        }
    }
}

impl From<Vec<Attribute>> for Bucket {
    #[inline]
    fn from(items: Vec<Attribute>) -> Self {
        Self::List(items)
    }
}

impl From<Option<Vec<Attribute>>> for Bucket {
    #[inline]
    fn from(items: Option<Vec<Attribute>>) -> Self {
        items.map_or(Self::Absent, Self::List)
    }
}

impl Serialize for Bucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Scalar(raw) => serializer.serialize_str(raw),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_has_no_attributes() {
        let bucket = Bucket::Scalar("abc".to_string());
        assert!(bucket.attributes().is_empty());
        assert_eq!(bucket.kinds().count(), 0);
    }

    #[test]
    fn push_promotes_absent_to_list() {
        let mut bucket = Bucket::Absent;
        bucket.push(Attribute::flag(AttributeKind::LightsBrake, true).unwrap());
        assert_eq!(bucket.kinds().collect::<Vec<_>>(), vec![AttributeKind::LightsBrake]);
    }

    #[test]
    fn serializes_by_variant() {
        assert_eq!(serde_json::to_string(&Bucket::Absent).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Bucket::Scalar("x".into())).unwrap(), "\"x\"");
        assert_eq!(serde_json::to_string(&Bucket::List(vec![])).unwrap(), "[]");
    }
}
