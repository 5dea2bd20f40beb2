//! Per-container uniqueness of attribute kinds
//!
//! Every attribute kind may occur at most once across all buckets of one
//! container. Absent and scalar buckets contribute nothing.

use std::collections::BTreeMap;

use aveas_attribute::AttributeKind;

use crate::bucket::Bucket;
use crate::error::DuplicateAttributeKindError;

/// Uniqueness invariant validation
///
/// Runs as part of container construction; callers never have to invoke
/// it separately.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniquenessEnforcer;

impl UniquenessEnforcer {
    /// Create new enforcer instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate a set of buckets
    ///
    /// # Returns
    /// - `Ok(())` if no kind occurs twice
    /// - `Err(DuplicateAttributeKindError)` naming every duplicated kind
    ///
    /// # Performance
    /// O(n log n) in the number of attributes
    pub fn validate<'a>(
        &self,
        buckets: impl IntoIterator<Item = &'a Bucket>,
    ) -> Result<(), DuplicateAttributeKindError> {
        self.validate_kinds(buckets.into_iter().flat_map(|bucket| bucket.kinds()))
    }

    /// Validate an arbitrary multiset of kinds
    ///
    /// Duplicates are reported once each, in catalog order.
    pub fn validate_kinds(
        &self,
        kinds: impl IntoIterator<Item = AttributeKind>,
    ) -> Result<(), DuplicateAttributeKindError> {
        let mut counts: BTreeMap<AttributeKind, usize> = BTreeMap::new();
        for kind in kinds {
            *counts.entry(kind).or_default() += 1;
        }

        let duplicated: Vec<AttributeKind> = counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(kind, _)| kind)
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(DuplicateAttributeKindError { kinds: duplicated })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aveas_attribute::Attribute;

    fn flag(kind: AttributeKind) -> Attribute {
        Attribute::flag(kind, true).unwrap()
    }

    #[test]
    fn empty_buckets_are_valid() {
        let enforcer = UniquenessEnforcer::new();
        assert!(enforcer.validate(&[Bucket::Absent, Bucket::List(vec![])]).is_ok());
        assert!(enforcer.validate(std::iter::empty()).is_ok());
    }

    #[test]
    fn scalar_bucket_is_atomic() {
        let enforcer = UniquenessEnforcer::new();
        let buckets = [Bucket::Scalar("abc".into()), Bucket::Scalar("aaa".into())];
        assert!(enforcer.validate(&buckets).is_ok());
    }

    #[test]
    fn duplicate_within_bucket() {
        let enforcer = UniquenessEnforcer::new();
        let bucket = Bucket::List(vec![flag(AttributeKind::LightsBrake), flag(AttributeKind::LightsBrake)]);
        let result = enforcer.validate([&bucket]);
        assert_eq!(
            result,
            Err(DuplicateAttributeKindError {
                kinds: vec![AttributeKind::LightsBrake]
            })
        );
    }

    #[test]
    fn duplicate_across_buckets() {
        let enforcer = UniquenessEnforcer::new();
        let a = Bucket::List(vec![flag(AttributeKind::IsRecorder)]);
        let b = Bucket::List(vec![flag(AttributeKind::IsRecorder)]);
        let result = enforcer.validate([&a, &b]);
        assert!(matches!(result, Err(DuplicateAttributeKindError { ref kinds }) if kinds == &[AttributeKind::IsRecorder]));
    }

    #[test]
    fn duplicates_reported_sorted_and_once() {
        let enforcer = UniquenessEnforcer::new();
        let kinds = [
            AttributeKind::LightsFront,
            AttributeKind::IsRecorder,
            AttributeKind::LightsFront,
            AttributeKind::IsRecorder,
            AttributeKind::LightsFront,
            AttributeKind::Velocity,
        ];
        let err = enforcer.validate_kinds(kinds).unwrap_err();
        assert_eq!(err.kinds, vec![AttributeKind::IsRecorder, AttributeKind::LightsFront]);
    }
}
