//! Property tests for casegen-ids
//!
//! This module contains property-based tests for identifier invariants.

use casegen_ids::{CaseId, RunId};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// CaseId Property Tests
// ============================================================================

proptest! {
    /// Test that a batch of CaseIds never repeats
    #[test]
    fn prop_case_id_batch_unique(n in 1usize..2000) {
        let ids: HashSet<CaseId> = (0..n).map(|_| CaseId::next()).collect();
        prop_assert_eq!(ids.len(), n);
    }

    /// Test that CaseId is printable ASCII without whitespace
    #[test]
    fn prop_case_id_printable(_seed in 0u8..10) {
        let id = CaseId::next();
        let s = id.to_string();
        prop_assert!(s.starts_with("case_"));
        prop_assert!(s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }

    /// Test that Display matches inner value
    #[test]
    fn prop_case_id_display_matches_inner(_seed in 0u8..10) {
        let id = CaseId::next();
        prop_assert_eq!(format!("{}", id), id.0.clone());
    }
}

// ============================================================================
// RunId Property Tests
// ============================================================================

proptest! {
    /// Test that RunId starts with specified prefix
    #[test]
    fn prop_run_id_prefix(prefix in "[a-z]{3,20}") {
        let id = RunId::now(&prefix);
        let id_str = id.to_string();
        let want = format!("{prefix}_");
        prop_assert!(id_str.starts_with(&want));
    }

    /// Test that back-to-back RunIds differ without sleeping
    #[test]
    fn prop_run_id_uniqueness(prefix in "[a-z]{3,20}") {
        let id1 = RunId::now(&prefix);
        let id2 = RunId::now(&prefix);
        prop_assert_ne!(id1, id2);
    }
}

#[test]
fn thousand_case_ids_are_unique() {
    let ids: Vec<CaseId> = (0..1000).map(|_| CaseId::next()).collect();
    let set: HashSet<&CaseId> = ids.iter().collect();
    assert_eq!(set.len(), 1000);
}
