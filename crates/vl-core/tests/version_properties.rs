//! Property-based tests for version comparison and ledger operations.

use proptest::prelude::*;
use std::cmp::Ordering;
use vl_common::{compare_versions, VersionLedger, VersionRecord};
use vl_core::context::InvocationContext;
use vl_core::ops::{apply, Operation, Outcome};

fn version_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(0u64..1000, 1..5).prop_map(|segments| {
        segments
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".")
    })
}

/// Segments of 20 to 38 digits, beyond `u64` but within `u128`.
fn wide_segments_strategy() -> impl Strategy<Value = Vec<u128>> {
    prop::collection::vec(10u128.pow(19)..u128::MAX / 10, 1..5)
}

fn join(segments: &[u128]) -> String {
    segments
        .iter()
        .map(u128::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Reference order: numeric, missing trailing segments as zero.
fn numeric_order(left: &[u128], right: &[u128]) -> Ordering {
    let len = left.len().max(right.len());
    (0..len)
        .map(|i| {
            let l = left.get(i).copied().unwrap_or(0);
            let r = right.get(i).copied().unwrap_or(0);
            l.cmp(&r)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn triple_strategy() -> impl Strategy<Value = (u64, u64, u64)> {
    (0u64..10_000, 0u64..10_000, 0u64..10_000)
}

fn ctx() -> InvocationContext {
    InvocationContext::new("feedface", "2024-06-01T00:00:00.000Z")
}

fn ledger_of(versions: &[String]) -> VersionLedger {
    VersionLedger {
        versions: versions
            .iter()
            .map(|v| VersionRecord::new(v.as_str(), "cafe", "2024-01-01T00:00:00.000Z"))
            .collect(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn compare_is_antisymmetric(a in version_strategy(), b in version_strategy()) {
        let ab = compare_versions(&a, &b).unwrap();
        let ba = compare_versions(&b, &a).unwrap();
        prop_assert_eq!(ab, ba.reverse());
    }

    #[test]
    fn compare_is_reflexive(a in version_strategy()) {
        prop_assert_eq!(compare_versions(&a, &a).unwrap(), Ordering::Equal);
    }

    #[test]
    fn trailing_zeros_do_not_change_order(a in version_strategy(), zeros in 1usize..4) {
        let padded = format!("{a}{}", ".0".repeat(zeros));
        prop_assert_eq!(compare_versions(&a, &padded).unwrap(), Ordering::Equal);
    }

    #[test]
    fn increment_appends_next_patch((major, minor, patch) in triple_strategy(),
                                    history in prop::collection::vec(version_strategy(), 0..4)) {
        let latest = format!("{major}.{minor}.{patch}");
        let mut versions = history.clone();
        versions.push(latest.clone());
        let mut ledger = ledger_of(&versions);
        let before = ledger.clone();

        let outcome = apply(&Operation::Increment, &mut ledger, &ctx()).unwrap();

        prop_assert!(matches!(outcome, Outcome::Incremented(_)));
        prop_assert_eq!(ledger.len(), before.len() + 1);
        prop_assert_eq!(&ledger.versions[..before.len()], &before.versions[..]);
        let expected = format!("{major}.{minor}.{}", patch + 1);
        prop_assert_eq!(&ledger.latest().unwrap().version, &expected);
    }

    #[test]
    fn set_version_appends_only_when_greater(latest in version_strategy(),
                                             candidate in version_strategy()) {
        let mut ledger = ledger_of(&[latest.clone()]);
        let before = ledger.clone();

        let outcome = apply(&Operation::SetVersion(candidate.clone()), &mut ledger, &ctx()).unwrap();

        if compare_versions(&candidate, &latest).unwrap() == Ordering::Greater {
            prop_assert!(outcome.is_mutation());
            prop_assert_eq!(&ledger.latest().unwrap().version, &candidate);
            prop_assert_eq!(ledger.len(), 2);
        } else {
            prop_assert!(!outcome.is_mutation());
            prop_assert_eq!(ledger, before);
        }
    }

    #[test]
    fn wide_segments_compare_numerically(a in wide_segments_strategy(),
                                         b in wide_segments_strategy()) {
        let ordering = compare_versions(&join(&a), &join(&b)).unwrap();
        prop_assert_eq!(ordering, numeric_order(&a, &b));
    }

    #[test]
    fn leading_zeros_do_not_change_order(a in wide_segments_strategy(), zeros in 1usize..5) {
        let original = join(&a);
        let padded = a
            .iter()
            .map(|segment| format!("{}{segment}", "0".repeat(zeros)))
            .collect::<Vec<_>>()
            .join(".");
        prop_assert_eq!(compare_versions(&original, &padded).unwrap(), Ordering::Equal);
    }

    #[test]
    fn set_version_accepts_wide_candidates(a in wide_segments_strategy()) {
        let candidate = join(&a);
        let mut ledger = ledger_of(&["0.0.1".to_string()]);

        let outcome = apply(&Operation::SetVersion(candidate.clone()), &mut ledger, &ctx()).unwrap();

        prop_assert!(outcome.is_mutation());
        prop_assert_eq!(&ledger.latest().unwrap().version, &candidate);
    }
}
