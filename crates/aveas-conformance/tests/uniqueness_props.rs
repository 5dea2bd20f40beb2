use std::collections::{BTreeMap, BTreeSet};

use aveas_attribute::AttributeKind;
use aveas_conformance::{ConformanceContract, UniquenessEnforcer};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = AttributeKind> {
    (0..AttributeKind::ALL.len()).prop_map(|i| AttributeKind::ALL[i])
}

proptest! {
    #[test]
    fn prop_duplicates_are_exactly_repeated_kinds(kinds in proptest::collection::vec(kind(), 0..40)) {
        let mut counts: BTreeMap<AttributeKind, usize> = BTreeMap::new();
        for k in &kinds {
            *counts.entry(*k).or_default() += 1;
        }
        let expected: Vec<_> = counts.iter().filter(|(_, n)| **n > 1).map(|(k, _)| *k).collect();

        match UniquenessEnforcer::new().validate_kinds(kinds.iter().copied()) {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(err) => prop_assert_eq!(err.kinds, expected),
        }
    }

    #[test]
    fn prop_distinct_kinds_always_pass(kinds in proptest::collection::btree_set(kind(), 0..40)) {
        prop_assert!(UniquenessEnforcer::new().validate_kinds(kinds).is_ok());
    }

    #[test]
    fn prop_report_partitions_present_kinds(
        required in proptest::collection::btree_set(kind(), 0..10),
        optional in proptest::collection::btree_set(kind(), 0..10),
        present in proptest::collection::btree_set(kind(), 0..20),
    ) {
        let contract = ConformanceContract::new(required.iter().copied(), optional.iter().copied());
        let report = contract.evaluate_kinds(present.iter().copied());

        let missing: BTreeSet<_> = required.difference(&present).copied().collect();
        prop_assert_eq!(report.missing.iter().copied().collect::<BTreeSet<_>>(), missing);

        for k in &report.forbidden {
            prop_assert!(present.contains(k));
            prop_assert!(!required.contains(k) && !optional.contains(k));
        }
        prop_assert_eq!(report.is_conforming(), report.missing.is_empty() && report.forbidden.is_empty());
    }
}
