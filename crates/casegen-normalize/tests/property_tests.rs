//! Property tests for casegen-normalize

use casegen_normalize::{normalize, normalize_batch};
use casegen_schema::case::{CaseFormat, Priority, TestCaseDraft};
use proptest::prelude::*;
use std::collections::HashSet;

fn strategy_draft() -> impl Strategy<Value = TestCaseDraft> {
    (
        "[A-Za-z ]{1,30}",
        prop::collection::vec("[A-Za-z ]{1,30}", 1..6),
        "[A-Za-z ]{0,30}",
        prop_oneof![
            Just(Priority::High),
            Just(Priority::Medium),
            Just(Priority::Low),
            Just(Priority::NotAvailable),
        ],
    )
        .prop_map(|(title, steps, expected_result, priority)| TestCaseDraft {
            title,
            steps,
            expected_result,
            priority,
        })
}

proptest! {
    /// Everything but the id is carried over unchanged
    #[test]
    fn prop_normalize_preserves_content(draft in strategy_draft(), plain in any::<bool>()) {
        let format = if plain { CaseFormat::Plain } else { CaseFormat::Gherkin };
        let tc = normalize(&draft, format);
        prop_assert_eq!(&tc.title, &draft.title);
        prop_assert_eq!(&tc.steps, &draft.steps);
        prop_assert_eq!(&tc.expected_result, &draft.expected_result);
        prop_assert_eq!(tc.priority, draft.priority);
        prop_assert_eq!(tc.format, format);
    }

    /// Ids are unique within a batch and order follows the input
    #[test]
    fn prop_batch_ids_unique(drafts in prop::collection::vec(strategy_draft(), 0..64)) {
        let cases = normalize_batch(&drafts, CaseFormat::Gherkin);
        prop_assert_eq!(cases.len(), drafts.len());
        let ids: HashSet<_> = cases.iter().map(|c| c.id.as_str().to_string()).collect();
        prop_assert_eq!(ids.len(), drafts.len());
        for (tc, d) in cases.iter().zip(&drafts) {
            prop_assert_eq!(&tc.title, &d.title);
        }
    }
}
