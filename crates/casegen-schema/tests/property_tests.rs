//! Property tests for casegen-schema
//!
//! Invariants of the sentinel and status vocabulary shared by every crate.

use casegen_ids::{CaseId, RunId};
use casegen_schema::case::{CaseFormat, Priority, TestCase};
use casegen_schema::provider::Provider;
use casegen_schema::run::{ProviderColumn, ProviderStatus, Run};
use chrono::Utc;
use proptest::prelude::*;

fn strategy_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::High),
        Just(Priority::Medium),
        Just(Priority::Low),
        Just(Priority::NotAvailable),
    ]
}

fn strategy_provider_subset() -> impl Strategy<Value = Vec<Provider>> {
    proptest::sample::subsequence(Provider::ALL.to_vec(), 0..=3)
}

proptest! {
    /// Labels map back to the same priority, sentinel included
    #[test]
    fn prop_priority_label_round_trip(p in strategy_priority()) {
        prop_assert_eq!(Priority::from_label(p.as_str()), p);
    }

    /// Unknown labels always degrade to the sentinel
    #[test]
    fn prop_unknown_priority_label_is_na(label in "[a-z]{1,12}") {
        prop_assume!(!["high", "medium", "low"].contains(&label.as_str()));
        prop_assert_eq!(Priority::from_label(&label), Priority::NotAvailable);
    }

    /// Every provider outside `requested` reports NotRequested,
    /// every provider inside reports something else
    #[test]
    fn prop_status_respects_requested(requested in strategy_provider_subset(), fail in any::<bool>()) {
        let columns = requested
            .iter()
            .map(|&p| {
                let col = if fail {
                    ProviderColumn::failed("upstream error")
                } else {
                    ProviderColumn {
                        cases: vec![TestCase {
                            id: CaseId::next(),
                            title: "t".into(),
                            steps: vec!["Given x".into()],
                            expected_result: String::new(),
                            priority: Priority::NotAvailable,
                            format: CaseFormat::Gherkin,
                        }],
                        summary: String::new(),
                        failure: None,
                    }
                };
                (p, col)
            })
            .collect();
        let run = Run {
            id: RunId::now("run"),
            created_at: Utc::now(),
            format: CaseFormat::Gherkin,
            requested: requested.clone(),
            columns,
        };

        for p in Provider::ALL {
            let status = run.status(p);
            if requested.contains(&p) {
                prop_assert_ne!(status, ProviderStatus::NotRequested);
                prop_assert_eq!(matches!(status, ProviderStatus::Failed(_)), fail);
            } else {
                prop_assert_eq!(status, ProviderStatus::NotRequested);
            }
        }
    }
}
