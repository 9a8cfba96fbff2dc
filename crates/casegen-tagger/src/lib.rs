//! Scenario category heuristics.
//!
//! The category is an annotation computed from step text whenever it is
//! displayed; it is never stored on a case. Keyword groups are checked in a
//! fixed order and the first group that matches decides, so text mentioning
//! both an error and a boundary is `Negative`.

use casegen_schema::case::{Category, TestCase};
use regex::Regex;
use std::sync::LazyLock;

static NEGATIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fail|error|invalid|incorrect").expect("static regex must compile"));
static EDGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"edge|boundary|limit|empty|null").expect("static regex must compile"));

struct KeywordGroup {
    category: Category,
    pattern: &'static LazyLock<Regex>,
}

static KEYWORD_GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        category: Category::Negative,
        pattern: &NEGATIVE_RE,
    },
    KeywordGroup {
        category: Category::Edge,
        pattern: &EDGE_RE,
    },
];

/// Classify steps; `Positive` when no keyword group matches.
///
/// Matching is substring-based over the lower-cased steps joined with spaces,
/// so "failure" and "nullable" count.
pub fn classify<S: AsRef<str>>(steps: &[S]) -> Category {
    let text = steps
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    KEYWORD_GROUPS
        .iter()
        .find(|group| group.pattern.is_match(&text))
        .map_or(Category::Positive, |group| group.category)
}

/// Category of a parsed case, from its steps only.
pub fn classify_case(case: &TestCase) -> Category {
    classify(&case.steps)
}
