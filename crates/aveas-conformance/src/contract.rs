//! Mandatory / optional / forbidden conformance
//!
//! A [`ConformanceContract`] partitions attribute kinds into required and
//! optional; every other kind is forbidden. Checking assumes the container
//! already passed the uniqueness check, which construction guarantees.

use std::collections::BTreeSet;

use aveas_attribute::AttributeKind;

use crate::classification::{presence, table, Classification, ContainerRole, Presence};
use crate::container::AttributeContainer;
use crate::error::{ConformanceError, ForbiddenAttributeError, MissingRequiredAttributeError};

/// Required and optional kinds for one kind of container
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConformanceContract {
    required: BTreeSet<AttributeKind>,
    optional: BTreeSet<AttributeKind>,
}

impl ConformanceContract {
    /// Contract from explicit kind sets
    ///
    /// A kind listed in both sets is required.
    #[must_use]
    pub fn new(
        required: impl IntoIterator<Item = AttributeKind>,
        optional: impl IntoIterator<Item = AttributeKind>,
    ) -> Self {
        let required: BTreeSet<_> = required.into_iter().collect();
        let optional = optional
            .into_iter()
            .filter(|kind| !required.contains(kind))
            .collect();
        Self { required, optional }
    }

    /// Contract read off the classification tables
    #[must_use]
    pub fn for_classification(role: ContainerRole, classification: Classification) -> Self {
        let mut contract = Self::default();
        for (kind, _) in table(role) {
            match presence(role, classification, *kind) {
                Presence::Mandatory => contract = contract.with_required(*kind),
                Presence::Optional => contract = contract.with_optional(*kind),
                Presence::Forbidden => {}
            }
        }
        contract
    }

    /// Add a required kind
    #[must_use]
    pub fn with_required(mut self, kind: AttributeKind) -> Self {
        self.optional.remove(&kind);
        self.required.insert(kind);
        self
    }

    /// Add an optional kind; ignored if the kind is already required
    #[must_use]
    pub fn with_optional(mut self, kind: AttributeKind) -> Self {
        if !self.required.contains(&kind) {
            self.optional.insert(kind);
        }
        self
    }

    /// Required kinds
    #[inline]
    #[must_use]
    pub const fn required(&self) -> &BTreeSet<AttributeKind> {
        &self.required
    }

    /// Optional kinds
    #[inline]
    #[must_use]
    pub const fn optional(&self) -> &BTreeSet<AttributeKind> {
        &self.optional
    }

    /// Presence of a kind under this contract
    #[must_use]
    pub fn presence(&self, kind: AttributeKind) -> Presence {
        if self.required.contains(&kind) {
            Presence::Mandatory
        } else if self.optional.contains(&kind) {
            Presence::Optional
        } else {
            Presence::Forbidden
        }
    }

    /// Whether a kind may appear at all
    #[inline]
    #[must_use]
    pub fn permits(&self, kind: AttributeKind) -> bool {
        self.presence(kind) != Presence::Forbidden
    }

    /// Compare a container against the contract without failing
    #[must_use]
    pub fn evaluate(&self, container: &AttributeContainer) -> ConformanceReport {
        self.evaluate_kinds(container.kinds())
    }

    /// Compare a set of present kinds against the contract
    #[must_use]
    pub fn evaluate_kinds(&self, kinds: impl IntoIterator<Item = AttributeKind>) -> ConformanceReport {
        let present: BTreeSet<AttributeKind> = kinds.into_iter().collect();
        ConformanceReport {
            missing: self.required.difference(&present).copied().collect(),
            forbidden: present.into_iter().filter(|kind| !self.permits(*kind)).collect(),
        }
    }

    /// Check a container against the contract
    ///
    /// # Errors
    /// - [`ConformanceError::Forbidden`] if a kind outside the contract is present
    /// - [`ConformanceError::Missing`] if a required kind is absent
    ///
    /// Forbidden kinds are reported first when both problems occur.
    pub fn check(&self, container: &AttributeContainer) -> Result<(), ConformanceError> {
        self.evaluate(container).into_result()
    }
}

/// Outcome of comparing a container with a contract
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConformanceReport {
    /// Required kinds absent, in catalog order
    pub missing: Vec<AttributeKind>,
    /// Present kinds the contract does not permit, in catalog order
    pub forbidden: Vec<AttributeKind>,
}

impl ConformanceReport {
    /// Whether nothing is missing and nothing is forbidden
    #[inline]
    #[must_use]
    pub fn is_conforming(&self) -> bool {
        self.missing.is_empty() && self.forbidden.is_empty()
    }

    /// Turn the report into the first applicable error
    ///
    /// # Errors
    /// See [`ConformanceContract::check`]
    pub fn into_result(self) -> Result<(), ConformanceError> {
        if !self.forbidden.is_empty() {
            return Err(ForbiddenAttributeError {
                kinds: self.forbidden,
            }
            .into());
        }
        if !self.missing.is_empty() {
            return Err(MissingRequiredAttributeError {
                kinds: self.missing,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aveas_attribute::Attribute;

    const A: AttributeKind = AttributeKind::IsRecorder;
    const B: AttributeKind = AttributeKind::LightsBrake;
    const C: AttributeKind = AttributeKind::LightsFront;
    const D: AttributeKind = AttributeKind::InteriorWiper;

    fn container(kinds: &[AttributeKind]) -> AttributeContainer {
        AttributeContainer::from_attributes(kinds.iter().map(|k| Attribute::flag(*k, true).unwrap()))
            .unwrap()
    }

    fn contract() -> ConformanceContract {
        ConformanceContract::new([A, B], [C])
    }

    #[test]
    fn required_present_passes() {
        assert!(contract().check(&container(&[A, B])).is_ok());
        assert!(contract().check(&container(&[A, B, C])).is_ok());
    }

    #[test]
    fn missing_required_fails() {
        let result = contract().check(&container(&[A]));
        assert_eq!(
            result,
            Err(ConformanceError::Missing(MissingRequiredAttributeError { kinds: vec![B] }))
        );
    }

    #[test]
    fn undeclared_kind_fails() {
        let result = contract().check(&container(&[A, B, D]));
        assert_eq!(
            result,
            Err(ConformanceError::Forbidden(ForbiddenAttributeError { kinds: vec![D] }))
        );
    }

    #[test]
    fn forbidden_reported_before_missing() {
        let report = contract().evaluate(&container(&[D]));
        assert_eq!(report.missing, vec![A, B]);
        assert_eq!(report.forbidden, vec![D]);
        assert!(matches!(report.into_result(), Err(ConformanceError::Forbidden(_))));
    }

    #[test]
    fn empty_contract_accepts_empty_container() {
        let contract = ConformanceContract::default();
        assert!(contract.evaluate(&AttributeContainer::empty()).is_conforming());
    }

    #[test]
    fn required_wins_over_optional() {
        let contract = ConformanceContract::new([A], [A, C]).with_optional(A);
        assert_eq!(contract.presence(A), Presence::Mandatory);
        assert!(!contract.optional().contains(&A));
    }

    #[test]
    fn table_contract_for_rail_vehicle() {
        let contract = ConformanceContract::for_classification(ContainerRole::Dynamic, Classification::RailVehicle);
        assert_eq!(
            contract.presence(AttributeKind::InteriorAutomatedControlLongitudinal),
            Presence::Optional
        );
        assert_eq!(
            contract.presence(AttributeKind::InteriorAutomatedControlLateral),
            Presence::Forbidden
        );
        assert_eq!(contract.presence(AttributeKind::BoundingBox), Presence::Mandatory);
    }
}
