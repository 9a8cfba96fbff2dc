use crate::priority::{is_priority_line, strip_priority_label};
use regex::Regex;
use std::sync::LazyLock;

static EXPECTED_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)expected results?\s*:").expect("static regex must compile")
});
static TEST_STEPS_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*[*_]*\s*test steps\s*:\s*[*_]*").expect("static regex must compile")
});

/// A line that carries no step content.
pub(crate) struct LineFilter {
    pub name: &'static str,
    pub drops: fn(&str) -> bool,
}

/// Applied to every candidate step line; a line matching any filter is dropped.
pub(crate) const STEP_LINE_FILTERS: &[LineFilter] = &[
    LineFilter {
        name: "blank",
        drops: |line| line.trim().is_empty(),
    },
    LineFilter {
        name: "priority-label",
        drops: is_priority_line,
    },
    LineFilter {
        name: "code-fence",
        drops: |line| line.trim_start().starts_with("```"),
    },
    LineFilter {
        name: "markdown-decoration",
        drops: is_decoration,
    },
];

/// Horizontal rules, dangling emphasis closers and bare heading marks.
fn is_decoration(line: &str) -> bool {
    let t = line.trim();
    !t.is_empty() && t.chars().all(|c| matches!(c, '*' | '_' | '-' | '=' | '#'))
}

/// Trimmed lines that survive every filter, in source order.
pub fn keep_step_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| match STEP_LINE_FILTERS.iter().find(|f| (f.drops)(line)) {
            Some(filter) => {
                if filter.name != "blank" {
                    tracing::trace!(filter = filter.name, line, "dropped step line");
                }
                false
            }
            None => true,
        })
        .map(str::to_string)
        .collect()
}

/// Plain-text body split at the expected-result marker.
///
/// Returns `(steps, expected_result)`. Without a marker the whole body is
/// steps and the expected result is "".
pub fn split_plain_body(body: &str) -> (Vec<String>, String) {
    let (steps_text, expected_text) = match EXPECTED_MARKER_RE.find(body) {
        Some(m) => (&body[..m.start()], &body[m.end()..]),
        None => (body, ""),
    };

    let steps_text = TEST_STEPS_LABEL_RE
        .find(steps_text)
        .map_or(steps_text, |m| &steps_text[m.end()..]);
    let steps = keep_step_lines(steps_text.lines());

    let expected = expected_text
        .trim_start_matches(['*', '_'])
        .lines()
        .map(|line| strip_priority_label(line.trim()))
        .filter(|line| !is_decoration(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    (steps, expected)
}
