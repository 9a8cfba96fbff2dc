//! Structured extraction of one test-case chunk.
//!
//! Each field is produced by its own ordered rule list:
//!
//! - title: prefix rules in [`title`], applied until none matches
//! - priority: a whole-chunk scan in [`priority`]
//! - steps: line filters in [`steps`], plus the expected-result split for
//!   plain-text output
//!
//! Extraction is total. Missing fields become their sentinels
//! (`Priority::NotAvailable`, empty expected result) and a chunk with an
//! empty body keeps its title line as the only step.

mod priority;
mod steps;
mod title;

pub use priority::{find_priority, is_priority_line, strip_priority_label};
pub use steps::{keep_step_lines, split_plain_body};
pub use title::clean_title;

use casegen_schema::case::{CaseFormat, Priority, TestCaseDraft};

/// Extract a draft record from one chunk.
pub fn extract(chunk: &str, format: CaseFormat) -> TestCaseDraft {
    let mut lines = chunk.lines().map(str::trim).skip_while(|l| l.is_empty());
    let Some(title_line) = lines.next() else {
        return TestCaseDraft::untitled(Vec::new());
    };
    let body: Vec<&str> = lines.collect();

    let title = clean_title(title_line).unwrap_or_else(|| TestCaseDraft::UNTITLED.to_string());
    let priority = find_priority(chunk);

    let (mut steps, expected_result) = match format {
        CaseFormat::Gherkin => (keep_step_lines(body), String::new()),
        CaseFormat::Plain => split_plain_body(&body.join("\n")),
    };

    if steps.is_empty() {
        tracing::debug!(title = %title, "chunk has no body, keeping title line as step");
        steps.push(title_line.to_string());
    }

    tracing::trace!(
        title = %title,
        steps = steps.len(),
        priority = %priority,
        has_expected = !expected_result.is_empty(),
        "extracted chunk"
    );

    TestCaseDraft {
        title,
        steps,
        expected_result,
        priority,
    }
}

/// `true` when the draft carries nothing beyond sentinels.
pub fn is_empty_draft(draft: &TestCaseDraft) -> bool {
    draft.steps.iter().all(|s| s.trim().is_empty())
        && draft.expected_result.trim().is_empty()
        && draft.priority == Priority::NotAvailable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gherkin_chunk_with_priority() {
        let chunk = "Scenario: Login works\nGiven a user\nWhen they log in\nThen success\nPriority: High\n\n";
        let draft = extract(chunk, CaseFormat::Gherkin);
        assert_eq!(draft.title, "Login works");
        assert_eq!(draft.steps, vec!["Given a user", "When they log in", "Then success"]);
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.expected_result, "");
    }

    #[test]
    fn gherkin_without_priority_is_na() {
        let draft = extract("Scenario: A\nGiven x\nThen y", CaseFormat::Gherkin);
        assert_eq!(draft.priority, Priority::NotAvailable);
    }

    #[test]
    fn priority_anywhere_in_chunk_is_removed_from_steps() {
        let chunk = "Scenario: Checkout\nGiven a cart\n**Priority:** high\nWhen paying\nThen done";
        let draft = extract(chunk, CaseFormat::Gherkin);
        assert_eq!(draft.priority, Priority::High);
        assert!(draft.steps.iter().all(|s| !s.to_lowercase().contains("priority")));
        assert_eq!(draft.steps, vec!["Given a cart", "When paying", "Then done"]);
    }

    #[test]
    fn gherkin_interior_blank_lines_and_fences_removed() {
        let chunk = "scenario: Spaced\n```gherkin\nGiven a\n\n\nWhen b\n```\nThen c\n";
        let draft = extract(chunk, CaseFormat::Gherkin);
        assert_eq!(draft.title, "Spaced");
        assert_eq!(draft.steps, vec!["Given a", "When b", "Then c"]);
    }

    #[test]
    fn leading_blank_lines_before_title_are_skipped() {
        let draft = extract("\n\n  Scenario: Late title\nGiven a", CaseFormat::Gherkin);
        assert_eq!(draft.title, "Late title");
    }

    #[test]
    fn plain_chunk_splits_expected_result() {
        let chunk = "1. Test Case: Login\nTest Steps:\nStep A\nStep B\nExpected Result:\nFoo\nPriority: Medium\n";
        let draft = extract(chunk, CaseFormat::Plain);
        assert_eq!(draft.title, "Login");
        assert_eq!(draft.steps, vec!["Step A", "Step B"]);
        assert_eq!(draft.expected_result, "Foo");
        assert_eq!(draft.priority, Priority::Medium);
    }

    #[test]
    fn plain_chunk_without_marker_has_empty_expected_result() {
        let draft = extract("2. Logout\nClick logout\nSee login page", CaseFormat::Plain);
        assert_eq!(draft.title, "Logout");
        assert_eq!(draft.steps, vec!["Click logout", "See login page"]);
        assert_eq!(draft.expected_result, "");
    }

    #[test]
    fn empty_title_defaults_to_untitled() {
        let draft = extract("Scenario:\nGiven a", CaseFormat::Gherkin);
        assert_eq!(draft.title, "Untitled");
        assert_eq!(draft.steps, vec!["Given a"]);
    }

    #[test]
    fn empty_body_keeps_title_line_as_step() {
        let draft = extract("Scenario: Lonely", CaseFormat::Gherkin);
        assert_eq!(draft.title, "Lonely");
        assert_eq!(draft.steps, vec!["Scenario: Lonely"]);
    }

    #[test]
    fn blank_chunk_is_untitled_and_empty() {
        let draft = extract("   \n", CaseFormat::Plain);
        assert_eq!(draft.title, "Untitled");
        assert!(is_empty_draft(&draft));
    }

    #[test]
    fn non_empty_draft_detected() {
        let draft = extract("Scenario: A\nGiven b", CaseFormat::Gherkin);
        assert!(!is_empty_draft(&draft));
    }
}
