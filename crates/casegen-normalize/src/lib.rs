use casegen_ids::CaseId;
use casegen_schema::case::{CaseFormat, TestCase, TestCaseDraft};

/// Turn a draft into a case with a fresh process-unique id.
///
/// The draft is borrowed and left as is; every field except the id is a copy.
pub fn normalize(draft: &TestCaseDraft, format: CaseFormat) -> TestCase {
    TestCase {
        id: CaseId::next(),
        title: draft.title.clone(),
        steps: draft.steps.clone(),
        expected_result: draft.expected_result.clone(),
        priority: draft.priority,
        format,
    }
}

/// Normalize drafts in source order.
pub fn normalize_batch<'a, I>(drafts: I, format: CaseFormat) -> Vec<TestCase>
where
    I: IntoIterator<Item = &'a TestCaseDraft>,
{
    drafts.into_iter().map(|d| normalize(d, format)).collect()
}
