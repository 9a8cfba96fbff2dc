//! Property tests for casegen-parse
//!
//! End-to-end invariants: totality, order preservation and ground-truth recovery.

use casegen_parse::parse_response;
use casegen_schema::case::CaseFormat;
use casegen_segment::split_summary;
use casegen_testkit::proptest::{
    strategy_case_format, strategy_freeform_text, strategy_gherkin_response,
    strategy_plain_response,
};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    /// Non-blank input never parses to nothing, and no case has empty steps
    #[test]
    fn prop_parsing_is_total(raw in any::<String>(), format in strategy_case_format()) {
        let parsed = parse_response(&raw, format);
        for tc in &parsed.cases {
            prop_assert!(!tc.steps.is_empty());
            prop_assert_eq!(tc.format, format);
        }
        let (cases_text, _) = split_summary(&raw);
        if !cases_text.trim().is_empty() {
            prop_assert!(!parsed.cases.is_empty());
        }
    }

    /// Unstructured text is kept verbatim as one Untitled case
    #[test]
    fn prop_unstructured_text_is_kept(text in strategy_freeform_text()) {
        prop_assume!(!text.trim().is_empty());
        let parsed = parse_response(&text, CaseFormat::Gherkin);
        prop_assert_eq!(parsed.cases.len(), 1);
        prop_assert_eq!(parsed.cases[0].title.as_str(), "Untitled");
        let expected: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        prop_assert_eq!(&parsed.cases[0].steps, &expected);
    }

    /// Gherkin responses come back case for case, in order
    #[test]
    fn prop_gherkin_response_recovered((raw, generated) in strategy_gherkin_response()) {
        let parsed = parse_response(&raw, CaseFormat::Gherkin);
        prop_assert_eq!(parsed.cases.len(), generated.len());
        for (tc, g) in parsed.cases.iter().zip(&generated) {
            prop_assert_eq!(&tc.title, &g.title);
            prop_assert_eq!(&tc.steps, &g.steps);
            prop_assert_eq!(tc.priority, g.expected_priority());
        }
    }

    /// Plain responses come back with their expected results
    #[test]
    fn prop_plain_response_recovered((raw, generated) in strategy_plain_response()) {
        let parsed = parse_response(&raw, CaseFormat::Plain);
        prop_assert_eq!(parsed.cases.len(), generated.len());
        for (tc, g) in parsed.cases.iter().zip(&generated) {
            prop_assert_eq!(&tc.title, &g.title);
            prop_assert_eq!(&tc.steps, &g.steps);
            prop_assert_eq!(tc.expected_result.as_str(), g.expected_result.as_deref().unwrap_or(""));
        }
    }

    /// Ids never repeat within a response
    #[test]
    fn prop_ids_unique_within_response((raw, _) in strategy_gherkin_response()) {
        let parsed = parse_response(&raw, CaseFormat::Gherkin);
        let ids: HashSet<_> = parsed.cases.iter().map(|c| c.id.clone()).collect();
        prop_assert_eq!(ids.len(), parsed.cases.len());
    }
}
